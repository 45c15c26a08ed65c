use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::DealerError;
use crate::hand::HandState;

use super::{RoundPhase, Table};

impl Table {
    /// Reveals the hole card and plays the dealer's hand to a terminal state.
    ///
    /// The dealer draws below 17 and stands on 17 or more. A soft 17 is hit
    /// only when [`TableOptions::stand_on_soft_17`](crate::TableOptions::stand_on_soft_17)
    /// is off.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, insurance is still open,
    /// a player hand is still playing, or the shoe runs out.
    pub fn advance_dealer(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.phase != RoundPhase::WaitingOnPlayers {
            return Err(DealerError::InvalidPhase);
        }
        if self.dealer.is_insurance_open() {
            return Err(DealerError::InsurancePending);
        }
        if !self.turns.is_empty() {
            return Err(DealerError::PlayersActing);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer.hand().state() == HandState::Playing {
            if self.dealer.should_draw(self.options.stand_on_soft_17) {
                let card = self.draw()?;
                self.dealer.add_card(card);
                debug!(points = self.dealer.hand().points(), "dealer draws");
                drawn_cards.push(card);
            } else {
                self.dealer.stand();
            }
        }

        self.phase = RoundPhase::Results;
        info!(
            points = self.dealer.hand().points(),
            state = ?self.dealer.hand().state(),
            "dealer done"
        );

        Ok(drawn_cards)
    }
}
