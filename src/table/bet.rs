use tracing::{debug, info};

use crate::error::{BetError, DealError, ShoeExhausted};
use crate::player::PlayerStatus;

use super::{RoundPhase, Table, TurnPosition};

impl Table {
    /// Marks the player as being asked for a bet.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, the player cannot be found, or
    /// the player already bet.
    pub fn await_bet(&mut self, player_id: u8) -> Result<(), BetError> {
        if self.phase != RoundPhase::WaitingOnBets {
            return Err(BetError::InvalidPhase);
        }
        let index = self
            .player_index(player_id)
            .ok_or(BetError::PlayerNotFound)?;
        let player = &mut self.players[index];
        if player.has_bet() {
            return Err(BetError::AlreadyBet);
        }
        player.set_status(PlayerStatus::WaitingBet);
        Ok(())
    }

    /// Places the player's bet and debits it from the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, the player cannot be found or
    /// already bet, the amount is below the table minimum, or it exceeds the
    /// bankroll. A failed bet changes nothing.
    pub fn collect_bet(&mut self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if self.phase != RoundPhase::WaitingOnBets {
            return Err(BetError::InvalidPhase);
        }

        let min_bet = self.options.min_bet;
        let index = self
            .player_index(player_id)
            .ok_or(BetError::PlayerNotFound)?;
        let player = &mut self.players[index];

        if player.has_bet() {
            return Err(BetError::AlreadyBet);
        }
        if amount < min_bet {
            return Err(BetError::BetTooLow(min_bet));
        }
        if amount > player.bankroll() {
            return Err(BetError::InsufficientFunds);
        }

        player.place_bet(amount);
        debug!(player = player_id, amount, bankroll = player.bankroll(), "bet collected");

        Ok(())
    }

    /// Deals two cards to each player and two to the dealer.
    ///
    /// Cards go one at a time to each player in seat order and then to the
    /// dealer, twice; the dealer's second card is the face-down hole card.
    /// Returns `true` if the dealer shows an ace and insurance is now on offer.
    /// If the dealer holds blackjack and no insurance is on offer, the round
    /// moves straight to [`RoundPhase::Results`] without player decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, nobody is seated, a seated
    /// player has not bet, or the shoe cannot cover the deal.
    pub fn deal_initial(&mut self) -> Result<bool, DealError> {
        if self.phase != RoundPhase::WaitingOnBets {
            return Err(DealError::InvalidPhase);
        }
        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }
        if let Some(player) = self.players.iter().find(|p| !p.has_bet()) {
            return Err(DealError::MissingBet(player.id()));
        }
        if self.shoe.remaining() < (self.players.len() + 1) * 2 {
            return Err(ShoeExhausted.into());
        }

        self.dealer.reset();

        for round in 0..2 {
            for player in &mut self.players {
                let card = self.shoe.draw()?;
                if let Some(hand) = player.hand_mut(0) {
                    hand.add_card(card);
                }
            }
            let card = self.shoe.draw()?;
            self.dealer.deal(card, round == 0);
        }

        self.phase = RoundPhase::WaitingOnPlayers;
        self.turns = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_done())
            .map(|(player_index, _)| TurnPosition {
                player_index,
                hand_index: 0,
            })
            .collect();

        let ace_up = self.dealer.check_insurance();
        info!(
            players = self.players.len(),
            dealer_up = self.dealer.hand().points(),
            ace_up,
            "initial cards dealt"
        );

        if ace_up && self.options.insurance {
            self.dealer.open_insurance();
            self.refresh_statuses();
            return Ok(true);
        }

        if self.dealer.has_blackjack() {
            self.resolve_dealer_blackjack();
        } else {
            self.refresh_statuses();
        }

        Ok(false)
    }
}
