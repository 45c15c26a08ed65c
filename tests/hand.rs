//! Hand valuation tests.

use blackjack_table::card::{ACE, JACK, KING, QUEEN};
use blackjack_table::hand::evaluate;
use blackjack_table::{Card, Dealer, Hand, HandState, Player, Suit};
use proptest::prelude::*;

const fn card(rank: u8) -> Card {
    Card::new(Suit::Hearts, rank)
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new(10);
    for &rank in ranks {
        hand.add_card(card(rank));
    }
    hand
}

/// Best total over every independent choice of 1 or 11 per ace.
fn brute_force_points(ranks: &[u8]) -> u8 {
    let aces = ranks.iter().filter(|&&r| r == ACE).count() as u32;
    let base: u32 = ranks
        .iter()
        .map(|&r| if r == ACE { 1 } else { u32::from(card(r).points()) })
        .sum();

    let totals: Vec<u32> = (0..=aces).map(|high| base + high * 10).collect();
    let best = totals.iter().copied().filter(|&t| t <= 21).max();
    best.unwrap_or_else(|| totals.iter().copied().min().unwrap_or(base)) as u8
}

#[test]
fn face_cards_count_ten() {
    let hand = hand_of(&[JACK, QUEEN]);
    assert_eq!(hand.points(), 20);
    assert_eq!(hand.state(), HandState::Playing);
    assert_eq!(card(KING).symbol(), "K");
    assert_eq!(card(10).symbol(), "10");
    assert_eq!(card(ACE).symbol(), "A");
}

#[test]
fn aces_are_soft_until_they_would_bust() {
    let soft = hand_of(&[ACE, 6]);
    assert_eq!(soft.points(), 17);
    assert!(soft.is_soft());

    let hard = hand_of(&[ACE, 6, 10]);
    assert_eq!(hard.points(), 17);
    assert!(!hard.is_soft());

    let pair = hand_of(&[ACE, ACE]);
    assert_eq!(pair.points(), 12);
    assert!(pair.is_pair());

    assert_eq!(hand_of(&[ACE, ACE, ACE, 8]).points(), 21);
}

#[test]
fn classification_by_total_and_card_count() {
    assert_eq!(hand_of(&[ACE, KING]).state(), HandState::Blackjack);
    assert_eq!(hand_of(&[7, 7, 7]).state(), HandState::TwentyOne);
    assert_eq!(hand_of(&[10, 6, 8]).state(), HandState::Busted);
    assert_eq!(hand_of(&[10, 6]).state(), HandState::Playing);
}

#[test]
fn stand_is_never_undone() {
    let mut hand = hand_of(&[10, 6]);
    hand.stand();
    assert_eq!(hand.state(), HandState::Standing);

    hand.recompute();
    assert_eq!(hand.state(), HandState::Standing);

    let mut busted = hand_of(&[10, 6, 9]);
    busted.stand();
    assert_eq!(busted.state(), HandState::Busted);
}

#[test]
fn face_down_cards_are_not_counted() {
    let mut hidden = card(KING);
    hidden.face_up = false;

    let mut hand = Hand::new(0);
    hand.add_card(card(ACE));
    hand.add_card(hidden);
    assert_eq!(hand.points(), 11);
    assert_eq!(hand.state(), HandState::Playing);

    hand.reveal();
    assert_eq!(hand.points(), 21);
    assert_eq!(hand.state(), HandState::Blackjack);
}

#[test]
fn split_off_moves_the_second_card() {
    let mut hand = hand_of(&[8, 8]);
    let other = hand.split_off().unwrap();

    assert_eq!(hand.len(), 1);
    assert_eq!(other.len(), 1);
    assert_eq!(hand.points(), 8);
    assert_eq!(other.points(), 8);
    assert_eq!(other.bet(), hand.bet());

    assert!(hand_of(&[8, 8, 2]).split_off().is_none());
}

#[test]
fn split_matches_symbols_not_points() {
    assert!(!hand_of(&[10, KING]).is_pair());
    assert!(hand_of(&[KING, KING]).is_pair());
}

#[test]
fn fresh_dealer_and_player_are_empty() {
    let dealer = Dealer::new();
    assert!(!dealer.peek());
    assert!(dealer.up_card().is_none());
    assert!(!dealer.is_insurance_open());
    assert_eq!(dealer.hand().points(), 0);

    let player = Player::new(0, "Ann", 1000);
    assert!(!player.has_bet());
    assert!(player.allowed_commands(0).is_empty());
}

#[test]
fn evaluate_skips_hidden_cards() {
    let mut hole = card(9);
    hole.face_up = false;
    assert_eq!(evaluate(&[card(5), hole]), 5);
}

proptest! {
    #[test]
    fn evaluate_picks_best_total(ranks in prop::collection::vec(1u8..=13, 1..9)) {
        let cards: Vec<Card> = ranks.iter().map(|&r| card(r)).collect();
        prop_assert_eq!(evaluate(&cards), brute_force_points(&ranks));
    }

    #[test]
    fn hitting_until_terminal_classifies_by_total(ranks in prop::collection::vec(1u8..=13, 1..9)) {
        let mut hand = Hand::new(10);
        let mut taken = Vec::new();
        for &rank in &ranks {
            if hand.state() != HandState::Playing {
                break;
            }
            hand.add_card(card(rank));
            taken.push(rank);
        }

        prop_assert_eq!(hand.points(), brute_force_points(&taken));
        prop_assert_eq!(hand.state() == HandState::Busted, hand.points() > 21);
        if hand.state() == HandState::Playing {
            prop_assert!(hand.points() < 21);
        }
    }
}
