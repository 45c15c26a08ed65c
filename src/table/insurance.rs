use tracing::{debug, info};

use crate::error::InsuranceError;
use crate::hand::HandState;
use crate::player::PlayerStatus;

use super::{RoundPhase, Table};

impl Table {
    /// Returns whether insurance is currently being offered.
    #[must_use]
    pub const fn is_insurance_offered(&self) -> bool {
        self.dealer.is_insurance_open()
    }

    /// Buys insurance for the player's primary hand.
    ///
    /// The stake must be at least 1 and at most half of the primary bet,
    /// rounded down to whole units (a bet of 15 allows at most 7). It is
    /// debited immediately and pays 2:1 if the dealer holds blackjack.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No round is in progress or insurance is not on offer
    /// - The player is not found or already insured
    /// - The amount is out of range or exceeds the bankroll
    pub fn collect_insurance(&mut self, player_id: u8, amount: usize) -> Result<(), InsuranceError> {
        if self.phase != RoundPhase::WaitingOnPlayers {
            return Err(InsuranceError::InvalidPhase);
        }
        if !self.dealer.is_insurance_open() {
            return Err(InsuranceError::NotOffered);
        }

        let index = self
            .player_index(player_id)
            .ok_or(InsuranceError::PlayerNotFound)?;
        let player = &mut self.players[index];
        let hand = player.hand(0).ok_or(InsuranceError::PlayerNotFound)?;

        if hand.insurance() > 0 {
            return Err(InsuranceError::AlreadyInsured);
        }

        let max = hand.bet() / 2;
        if amount < 1 || amount > max {
            return Err(InsuranceError::InvalidInsuranceAmount { max });
        }
        if amount > player.bankroll() {
            return Err(InsuranceError::InsufficientFunds);
        }

        player.buy_insurance(amount);
        debug!(player = player_id, amount, "insurance bought");

        Ok(())
    }

    /// Closes the insurance offer.
    ///
    /// Returns `true` if the dealer has blackjack: the hole card is revealed
    /// and the round goes straight to [`RoundPhase::Results`] without player
    /// decisions or dealer draws. Otherwise play continues.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or insurance is not on offer.
    pub fn close_insurance(&mut self) -> Result<bool, InsuranceError> {
        if self.phase != RoundPhase::WaitingOnPlayers {
            return Err(InsuranceError::InvalidPhase);
        }
        if !self.dealer.is_insurance_open() {
            return Err(InsuranceError::NotOffered);
        }

        self.dealer.close_insurance();

        let dealer_blackjack = self.dealer.has_blackjack();
        if dealer_blackjack {
            self.resolve_dealer_blackjack();
        } else {
            self.refresh_statuses();
        }

        Ok(dealer_blackjack)
    }

    /// Reveals the dealer's blackjack and ends play.
    pub(super) fn resolve_dealer_blackjack(&mut self) {
        self.dealer.reveal_hole();
        self.turns.clear();

        for player in &mut self.players {
            let natural = player
                .hand(0)
                .is_some_and(|h| h.state() == HandState::Blackjack);
            let status = if natural {
                PlayerStatus::WaitingOthers
            } else {
                PlayerStatus::Lost
            };
            player.set_status(status);
        }

        self.phase = RoundPhase::Results;
        info!("dealer has blackjack");
    }
}
