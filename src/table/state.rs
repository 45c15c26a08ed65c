//! Round phase types.

/// Coarse phase of the live round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No players seated yet.
    #[default]
    WaitingToStart,
    /// Accepting bets for the next round.
    WaitingOnBets,
    /// Cards are out; insurance and player decisions are pending.
    WaitingOnPlayers,
    /// Hands are final and the round can be settled.
    Results,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the seated players list.
    pub player_index: usize,
    /// Index into the player's hands (1 for the split hand).
    pub hand_index: usize,
}
