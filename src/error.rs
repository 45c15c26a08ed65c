//! Error types for table operations.

use thiserror::Error;

use crate::player::Command;

/// The shoe ran out of cards.
///
/// A fresh shoe is built for every round, so this indicates a broken
/// invariant rather than a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct ShoeExhausted;

/// Errors that can occur while seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Players can only be seated between rounds.
    #[error("invalid round phase for seating")]
    InvalidPhase,
    /// Every seat id has been handed out.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidPhase,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Player already placed a bet this round.
    #[error("player already placed a bet")]
    AlreadyBet,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum of {0}")]
    BetTooLow(usize),
    /// Bet exceeds the player's bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidPhase,
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
    /// At least one seated player has not bet.
    #[error("player {0} has not placed a bet")]
    MissingBet(u8),
    /// The shoe ran out of cards.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

/// Errors that can occur while insurance is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Invalid round phase for insurance.
    #[error("invalid round phase for insurance")]
    InvalidPhase,
    /// Insurance is not on offer this round.
    #[error("insurance is not offered")]
    NotOffered,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Player already bought insurance.
    #[error("player already bought insurance")]
    AlreadyInsured,
    /// Amount is below 1 or above half of the primary bet.
    #[error("insurance must be between 1 and {max}")]
    InvalidInsuranceAmount {
        /// Largest stake the player may buy.
        max: usize,
    },
    /// Insurance stake exceeds the player's bankroll.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Errors that can occur when applying a player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for player commands.
    #[error("invalid round phase for player commands")]
    InvalidPhase,
    /// Insurance must be closed before play continues.
    #[error("insurance is still being offered")]
    InsurancePending,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Another hand is due to act first.
    #[error("not this hand's turn")]
    NotYourTurn,
    /// Command is not allowed for this hand right now.
    #[error("command {0:?} is not allowed for this hand")]
    IllegalCommand(Command),
    /// Hand already reached a terminal state.
    #[error("hand already finished")]
    HandFinished,
    /// The shoe ran out of cards.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

impl ActionError {
    /// Returns whether the error reports a broken caller contract.
    ///
    /// The round should be aborted rather than re-prompted.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::HandFinished | Self::ShoeExhausted(_))
    }
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round phase for dealer play.
    #[error("invalid round phase for dealer play")]
    InvalidPhase,
    /// Insurance must be closed before the dealer plays.
    #[error("insurance is still being offered")]
    InsurancePending,
    /// Some player hands are still playing.
    #[error("players are still acting")]
    PlayersActing,
    /// The shoe ran out of cards.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid round phase for settlement.
    #[error("invalid round phase for settlement")]
    InvalidPhase,
}
