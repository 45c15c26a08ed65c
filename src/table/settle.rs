use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::info;

use crate::error::SettleError;
use crate::hand::{Hand, HandState};
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};

use super::{RoundPhase, Table};

/// Judges a hand that was played out against the dealer's final hand.
fn judge(hand: &Hand, dealer_points: u8, dealer_bust: bool) -> HandOutcome {
    if hand.state() == HandState::Busted {
        return HandOutcome::Lose;
    }
    if dealer_bust {
        return HandOutcome::Win;
    }

    match (hand.points() == 21, dealer_points == 21) {
        (true, true) => HandOutcome::Push,
        (true, false) => HandOutcome::Win,
        (false, true) => HandOutcome::Lose,
        (false, false) => match hand.points().cmp(&dealer_points) {
            Ordering::Greater => HandOutcome::Win,
            Ordering::Equal => HandOutcome::Push,
            Ordering::Less => HandOutcome::Lose,
        },
    }
}

/// Judges a hand against a dealer blackjack found at the insurance check.
fn judge_against_blackjack(hand: &Hand) -> HandOutcome {
    if hand.state() == HandState::Blackjack {
        HandOutcome::Push
    } else {
        HandOutcome::Lose
    }
}

impl Table {
    /// Settles every hand against the dealer, pays winners and resets the
    /// table for the next round.
    ///
    /// A win pays twice the bet, a push returns the bet and a loss pays
    /// nothing. Insurance pays twice its stake when the round ended on a
    /// dealer blackjack and is lost otherwise. After settlement the hands are
    /// cleared, the shoe is rebuilt and the phase returns to
    /// [`RoundPhase::WaitingOnBets`]; the returned result keeps the settled
    /// hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached [`RoundPhase::Results`].
    pub fn settle_round(&mut self) -> Result<RoundResult, SettleError> {
        if self.phase != RoundPhase::Results {
            return Err(SettleError::InvalidPhase);
        }

        let dealer_hand = self.dealer.hand();
        let dealer_points = dealer_hand.points();
        let dealer_bust = dealer_hand.state() == HandState::Busted;
        let dealer_blackjack = self.dealer.has_blackjack();

        let mut any_won = false;
        let mut any_push = false;
        let mut player_results = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            let mut hand_results = Vec::new();
            let mut total_payout: usize = 0;
            let mut total_staked: usize = 0;
            let mut insurance_bet: usize = 0;

            for (hand_index, hand) in player.hands_mut().iter_mut().enumerate() {
                let outcome = if dealer_blackjack {
                    judge_against_blackjack(hand)
                } else {
                    judge(hand, dealer_points, dealer_bust)
                };

                let bet = hand.bet();
                let (payout, state) = match outcome {
                    HandOutcome::Win => (bet * 2, HandState::Won),
                    HandOutcome::Push => (bet, HandState::Draw),
                    HandOutcome::Lose => (0, HandState::Lost),
                };
                any_won |= outcome == HandOutcome::Win;
                any_push |= outcome == HandOutcome::Push;

                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet,
                    payout,
                    points: hand.points(),
                    state,
                });
                hand.set_state(state);

                total_payout += payout;
                total_staked += bet;
                insurance_bet += hand.insurance();
            }

            // Insurance pays 2:1, the stake having been debited when bought.
            let insurance_payout = if dealer_blackjack {
                insurance_bet * 2
            } else {
                0
            };
            total_payout += insurance_payout;
            total_staked += insurance_bet;

            player.credit(total_payout);

            #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
            let net = total_payout as isize - total_staked as isize;

            player_results.push(PlayerResult {
                player_id: player.id(),
                name: String::from(player.name()),
                hands: hand_results,
                insurance_bet,
                insurance_payout,
                total_payout,
                net,
                bankroll: player.bankroll(),
            });
        }

        if !dealer_bust {
            let state = if any_won {
                HandState::Lost
            } else if any_push {
                HandState::Draw
            } else {
                HandState::Won
            };
            self.dealer.set_state(state);
        }

        let result = RoundResult {
            players: player_results,
            dealer_hand: self.dealer.hand().clone(),
            dealer_points,
            dealer_bust,
            dealer_blackjack,
        };

        info!(
            dealer_points,
            dealer_bust,
            dealer_blackjack,
            players = result.players.len(),
            "round settled"
        );

        self.reset_round();
        Ok(result)
    }
}
