//! Hand valuation and hand state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Values the visible cards, counting one ace as 11 when that does not bust.
///
/// Face-down cards are skipped entirely.
#[must_use]
pub fn evaluate(cards: &[Card]) -> u8 {
    let mut sum: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|c| c.face_up) {
        if card.is_ace() {
            aces += 1;
        } else {
            sum = sum.saturating_add(card.points());
        }
    }

    let low = sum.saturating_add(aces);
    if aces == 0 {
        return low;
    }

    let high = low.saturating_add(10);
    if high <= 21 { high } else { low }
}

/// Returns whether the best valuation of the visible cards counts an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    let has_ace = cards.iter().any(|c| c.face_up && c.is_ace());
    let hard: u8 = cards
        .iter()
        .filter(|c| c.face_up)
        .map(|c| if c.is_ace() { 1 } else { c.points() })
        .fold(0, u8::saturating_add);
    has_ace && evaluate(cards) != hard
}

/// Hand state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// Hand is still taking decisions.
    Playing,
    /// Hand has stood.
    Standing,
    /// Hand went over 21.
    Busted,
    /// Hand reached 21 with more than two cards.
    TwentyOne,
    /// Hand reached 21 with exactly two cards.
    Blackjack,
    /// Hand beat the dealer.
    Won,
    /// Hand lost to the dealer.
    Lost,
    /// Hand tied the dealer.
    Draw,
}

impl HandState {
    /// Returns whether the hand's turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// One bet's worth of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    state: HandState,
    points: u8,
    bet: usize,
    insurance: usize,
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            state: HandState::Playing,
            points: 0,
            bet,
            insurance: 0,
            doubled: false,
        }
    }

    /// Adds a card and re-values the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.recompute();
    }

    /// Recomputes points from the visible cards and advances the state.
    ///
    /// Only a `Playing` hand changes state here; an explicit stand is never
    /// undone.
    pub fn recompute(&mut self) {
        self.points = evaluate(&self.cards);

        if self.state != HandState::Playing {
            return;
        }

        let visible = self.cards.iter().filter(|c| c.face_up).count();
        self.state = match self.points {
            22..=u8::MAX => HandState::Busted,
            21 if visible == 2 => HandState::Blackjack,
            21 => HandState::TwentyOne,
            _ => HandState::Playing,
        };
    }

    /// Turns every card face up and re-values the hand.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
        self.recompute();
    }

    /// Ends the hand's turn if it is still playing.
    pub fn stand(&mut self) {
        if self.state == HandState::Playing {
            self.state = HandState::Standing;
        }
    }

    /// Removes the second card so it can start a new hand.
    ///
    /// The returned hand carries the same bet and insurance. Both hands are
    /// re-valued. Returns `None` unless the hand holds exactly two cards.
    pub fn split_off(&mut self) -> Option<Self> {
        if self.cards.len() != 2 {
            return None;
        }
        let card = self.cards.pop()?;
        self.recompute();

        let mut other = Self::new(self.bet);
        other.insurance = self.insurance;
        other.add_card(card);
        Some(other)
    }

    /// Doubles the bet and insurance stakes.
    pub const fn double_stakes(&mut self) {
        self.bet *= 2;
        self.insurance *= 2;
        self.doubled = true;
    }

    /// Records the settlement outcome.
    pub(crate) const fn set_state(&mut self, state: HandState) {
        self.state = state;
    }

    pub(crate) const fn set_insurance(&mut self, insurance: usize) {
        self.insurance = insurance;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> HandState {
        self.state
    }

    /// Returns the best total of the visible cards.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Returns whether the best total counts an ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the bet on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the insurance side bet on this hand.
    #[must_use]
    pub const fn insurance(&self) -> usize {
        self.insurance
    }

    /// Returns the bet plus insurance, the amount a split or double costs.
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.bet + self.insurance
    }

    /// Returns whether the hand has been doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(0)
    }
}
