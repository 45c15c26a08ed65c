use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::player::Command;

use super::{RoundPhase, Table, TurnPosition};

impl Table {
    /// Lists the commands the hand may take right now.
    ///
    /// Empty unless the hand is the one due to act.
    #[must_use]
    pub fn allowed_commands(&self, player_id: u8, hand_index: usize) -> Vec<Command> {
        if self.phase != RoundPhase::WaitingOnPlayers || self.dealer.is_insurance_open() {
            return Vec::new();
        }
        let Some(player_index) = self.player_index(player_id) else {
            return Vec::new();
        };
        let due = TurnPosition {
            player_index,
            hand_index,
        };
        if self.current_turn() != Some(due) {
            return Vec::new();
        }
        self.players[player_index].allowed_commands(hand_index)
    }

    /// Applies a player's decision to one of their hands.
    ///
    /// Returns the card drawn by a hit or double. Hands act in seat order and,
    /// within a player, in creation order; a split hand is played right after
    /// the hand it came from.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, insurance is still open,
    /// the player or hand cannot be found, another hand is due, or the
    /// command is not allowed. [`ActionError::HandFinished`] and
    /// [`ActionError::ShoeExhausted`] report a broken caller contract; see
    /// [`ActionError::is_invariant_violation`].
    pub fn apply_command(
        &mut self,
        player_id: u8,
        hand_index: usize,
        command: Command,
    ) -> Result<Option<Card>, ActionError> {
        if self.phase != RoundPhase::WaitingOnPlayers {
            return Err(ActionError::InvalidPhase);
        }
        if self.dealer.is_insurance_open() {
            return Err(ActionError::InsurancePending);
        }

        let player_index = self
            .player_index(player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        let player = &self.players[player_index];
        let hand = player.hand(hand_index).ok_or(ActionError::HandNotFound)?;

        if hand.state().is_terminal() {
            warn!(player = player_id, hand = hand_index, ?command, "command on finished hand");
            return Err(ActionError::HandFinished);
        }

        let due = TurnPosition {
            player_index,
            hand_index,
        };
        if self.current_turn() != Some(due) {
            return Err(ActionError::NotYourTurn);
        }

        if !player.allows(hand_index, command) {
            return Err(ActionError::IllegalCommand(command));
        }

        let drawn = match command {
            Command::Hit => {
                let card = self.draw()?;
                if let Some(hand) = self.players[player_index].hand_mut(hand_index) {
                    hand.add_card(card);
                }
                Some(card)
            }
            Command::Stand => {
                if let Some(hand) = self.players[player_index].hand_mut(hand_index) {
                    hand.stand();
                }
                None
            }
            Command::Double => {
                let card = self.draw()?;
                self.players[player_index].double_down(hand_index, card);
                Some(card)
            }
            Command::Split => {
                let player = &mut self.players[player_index];
                player.split();
                let split_hand = player.hands().len() - 1;
                self.turns.insert(
                    1,
                    TurnPosition {
                        player_index,
                        hand_index: split_hand,
                    },
                );
                None
            }
        };

        if let Some(hand) = self.players[player_index].hand(hand_index) {
            debug!(
                player = player_id,
                hand = hand_index,
                ?command,
                points = hand.points(),
                state = ?hand.state(),
                "command applied"
            );
        }

        self.advance_turns();
        Ok(drawn)
    }

    /// Returns whether every hand has finished acting.
    #[must_use]
    pub fn players_done(&self) -> bool {
        self.phase == RoundPhase::WaitingOnPlayers
            && !self.dealer.is_insurance_open()
            && self.turns.is_empty()
    }

    /// Drops finished hands from the head of the turn queue.
    fn advance_turns(&mut self) {
        while let Some(&turn) = self.turns.front() {
            let playing = self
                .players
                .get(turn.player_index)
                .and_then(|p| p.hand(turn.hand_index))
                .is_some_and(|h| !h.state().is_terminal());
            if playing {
                break;
            }
            self.turns.pop_front();
        }
        self.refresh_statuses();
    }
}
