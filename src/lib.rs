//! Rules engine for a multi-player blackjack table with optional `no_std`
//! support.
//!
//! The crate provides a [`Table`] type that runs one round at a time:
//! betting, the initial deal, the insurance offer, player decisions, dealer
//! play and settlement. Rendering and input collection are left to the
//! caller, which drives the table and displays its state.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Command, RoundPhase, Table, TableOptions};
//!
//! let mut table = Table::seat_players(TableOptions::default(), 42, ["Ann"]).unwrap();
//! let ann = table.players()[0].id();
//!
//! table.collect_bet(ann, 10).unwrap();
//! if table.deal_initial().unwrap() {
//!     table.close_insurance().unwrap();
//! }
//! while table.current_turn().is_some() {
//!     let turn = table.current_turn().unwrap();
//!     table.apply_command(ann, turn.hand_index, Command::Stand).unwrap();
//! }
//! if table.phase() == RoundPhase::WaitingOnPlayers {
//!     table.advance_dealer().unwrap();
//! }
//! let result = table.settle_round().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use dealer::Dealer;
pub use error::{
    ActionError, BetError, DealError, DealerError, InsuranceError, SeatError, SettleError,
    ShoeExhausted,
};
pub use hand::{Hand, HandState};
pub use options::TableOptions;
pub use player::{Command, Player, PlayerStatus};
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
pub use table::{RoundPhase, Table, TurnPosition};
