//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{Hand, HandState};

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Hand beat the dealer and is paid even money.
    Win,
    /// Hand lost its bet.
    Lose,
    /// Tie; the bet is returned.
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet on this hand, doubled amounts included.
    pub bet: usize,
    /// Amount credited back to the bankroll for this hand.
    pub payout: usize,
    /// The player's hand points.
    pub points: u8,
    /// Final hand state (`Won`, `Lost` or `Draw`).
    pub state: HandState,
}

impl HandResult {
    /// Net bankroll change for this hand relative to before the bet.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bet values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// Results for each hand (two if split).
    pub hands: Vec<HandResult>,
    /// Total insurance staked across the player's hands.
    pub insurance_bet: usize,
    /// Insurance payout (0 unless the dealer had blackjack).
    pub insurance_payout: usize,
    /// Total credited to the bankroll, insurance included.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Bankroll after settlement.
    pub bankroll: usize,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand, fully revealed.
    pub dealer_hand: Hand,
    /// The dealer's final points.
    pub dealer_points: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the round ended on the dealer's blackjack before play.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the result for one player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}
