//! The house hand.

use crate::card::Card;
use crate::hand::{self, Hand, HandState};

/// The dealer's hand plus hole-card and insurance flags.
///
/// Owned by the [`Table`](crate::Table) and reset at the start of every round.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
    hole_concealed: bool,
    has_blackjack: bool,
    insurance_open: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dealer's hand. A concealed hole card does not count
    /// towards its points.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the first, always visible, card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is still face down.
    #[must_use]
    pub const fn is_hole_concealed(&self) -> bool {
        self.hole_concealed
    }

    /// Returns whether the insurance check found a dealer blackjack.
    #[must_use]
    pub const fn has_blackjack(&self) -> bool {
        self.has_blackjack
    }

    /// Returns whether players may currently buy insurance.
    #[must_use]
    pub const fn is_insurance_open(&self) -> bool {
        self.insurance_open
    }

    /// Returns whether the two dealt cards make 21, hole card included.
    #[must_use]
    pub fn peek(&self) -> bool {
        let cards = self.hand.cards();
        if cards.len() != 2 {
            return false;
        }
        let mut all = [cards[0], cards[1]];
        for card in &mut all {
            card.face_up = true;
        }
        hand::evaluate(&all) == 21
    }

    pub(crate) fn deal(&mut self, mut card: Card, face_up: bool) {
        card.face_up = face_up;
        if !face_up {
            self.hole_concealed = true;
        }
        self.hand.add_card(card);
    }

    /// Runs the insurance check: records whether the dealer holds blackjack
    /// with the hole card counted, and returns whether the up card is an ace.
    pub(crate) fn check_insurance(&mut self) -> bool {
        self.has_blackjack = self.peek();
        self.up_card().is_some_and(|c| c.face_up && c.is_ace())
    }

    pub(crate) const fn open_insurance(&mut self) {
        self.insurance_open = true;
    }

    pub(crate) const fn close_insurance(&mut self) {
        self.insurance_open = false;
    }

    pub(crate) fn reveal_hole(&mut self) {
        self.hole_concealed = false;
        self.hand.reveal();
    }

    /// Returns whether dealer policy calls for another card.
    ///
    /// Draws below 17. A soft 17 is drawn to only when the table does not
    /// stand on soft 17.
    #[must_use]
    pub fn should_draw(&self, stand_on_soft_17: bool) -> bool {
        if self.hand.state() != HandState::Playing {
            return false;
        }
        match self.hand.points() {
            0..=16 => true,
            17 => !stand_on_soft_17 && self.hand.is_soft(),
            _ => false,
        }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) fn stand(&mut self) {
        self.hand.stand();
    }

    pub(crate) const fn set_state(&mut self, state: HandState) {
        self.hand.set_state(state);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
