//! The shoe: a consumable, shuffled sequence of cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeExhausted;

/// A shoe built from one or more standard 52-card decks.
///
/// Cards are drawn front to back through a cursor; a drawn card is never
/// returned again until the shoe is reshuffled.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Builds an unshuffled shoe of `decks` decks (at least one).
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let decks = decks.max(1) as usize;
        let mut cards = Vec::with_capacity(decks * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a shoe that deals exactly `cards`, in order.
    ///
    /// Useful for replaying a recorded deal.
    #[must_use]
    pub const fn stacked(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Turns every card face up, shuffles into a uniformly random
    /// permutation and rewinds the cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for card in &mut self.cards {
            card.face_up = true;
        }
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] once every card has been drawn.
    pub fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        let card = *self.cards.get(self.cursor).ok_or(ShoeExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Returns every card in current shoe order, drawn or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
