//! Seated players and their decisions.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, HandState};

/// A decision a player can take on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw one card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the stake, take exactly one card and stand.
    Double,
    /// Split a pair into two hands.
    Split,
}

/// Coarse player status for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Waiting for the next round.
    #[default]
    WaitingNext,
    /// Waiting while other players act.
    WaitingOthers,
    /// Being asked for a bet.
    WaitingBet,
    /// Acting on a hand.
    Playing,
    /// Lost the round to a dealer blackjack.
    Lost,
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    id: u8,
    name: String,
    bankroll: usize,
    hands: Vec<Hand>,
    status: PlayerStatus,
}

impl Player {
    /// Creates a player with the given bankroll and no hands.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, bankroll: usize) -> Self {
        Self {
            id,
            name: name.into(),
            bankroll,
            hands: Vec::new(),
            status: PlayerStatus::WaitingNext,
        }
    }

    /// Returns the seat id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the money not currently staked.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the player's hands, primary hand first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns one hand by index.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the display status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns whether the player has bet this round.
    #[must_use]
    pub fn has_bet(&self) -> bool {
        !self.hands.is_empty()
    }

    /// Returns the bet on the primary hand.
    #[must_use]
    pub fn primary_bet(&self) -> Option<usize> {
        self.hands.first().map(Hand::bet)
    }

    /// Returns whether every hand has finished its turn.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.hands.iter().all(|h| h.state().is_terminal())
    }

    /// Lists the commands currently legal for a hand.
    ///
    /// Hit and stand are always open on a playing hand. Double needs an
    /// undoubled hand and enough bankroll to match bet plus insurance. Split
    /// additionally needs a single two-card pair.
    #[must_use]
    pub fn allowed_commands(&self, hand_index: usize) -> Vec<Command> {
        let Some(hand) = self.hands.get(hand_index) else {
            return Vec::new();
        };
        if hand.state() != HandState::Playing {
            return Vec::new();
        }

        let mut commands = alloc::vec![Command::Hit, Command::Stand];
        let affordable = self.bankroll >= hand.stake();

        if affordable && !hand.is_doubled() {
            commands.push(Command::Double);
        }
        if affordable && self.hands.len() == 1 && hand.is_pair() {
            commands.push(Command::Split);
        }

        commands
    }

    /// Returns whether `command` is currently legal for the hand.
    #[must_use]
    pub fn allows(&self, hand_index: usize, command: Command) -> bool {
        self.allowed_commands(hand_index).contains(&command)
    }

    pub(crate) fn place_bet(&mut self, amount: usize) {
        self.bankroll -= amount;
        self.hands = alloc::vec![Hand::new(amount)];
        self.status = PlayerStatus::WaitingOthers;
    }

    pub(crate) fn buy_insurance(&mut self, amount: usize) {
        if let Some(hand) = self.hands.first_mut() {
            self.bankroll -= amount;
            hand.set_insurance(amount);
        }
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    /// Debits the extra stake, doubles the hand and deals its last card.
    pub(crate) fn double_down(&mut self, hand_index: usize, card: Card) {
        let Some(hand) = self.hands.get_mut(hand_index) else {
            return;
        };
        self.bankroll -= hand.stake();
        hand.double_stakes();
        hand.add_card(card);
        hand.stand();
    }

    /// Moves the second card of the primary hand into a new hand.
    pub(crate) fn split(&mut self) {
        let Some(hand) = self.hands.first_mut() else {
            return;
        };
        let stake = hand.stake();
        if let Some(other) = hand.split_off() {
            self.bankroll -= stake;
            self.hands.push(other);
        }
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    pub(crate) const fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    pub(crate) fn reset(&mut self) {
        self.hands.clear();
        self.status = PlayerStatus::WaitingNext;
    }
}
