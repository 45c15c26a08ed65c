//! Round orchestration and table state.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::{SeatError, ShoeExhausted};
use crate::options::TableOptions;
use crate::player::{Player, PlayerStatus};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
mod settle;
pub mod state;

pub use state::{RoundPhase, TurnPosition};

/// A blackjack table that runs one round at a time.
///
/// The table owns the shoe, the seated players and the dealer. A round goes
/// through [`collect_bet`](Self::collect_bet), [`deal_initial`](Self::deal_initial),
/// optionally [`collect_insurance`](Self::collect_insurance) and
/// [`close_insurance`](Self::close_insurance), [`apply_command`](Self::apply_command)
/// until every hand is done, [`advance_dealer`](Self::advance_dealer) and
/// finally [`settle_round`](Self::settle_round).
#[derive(Debug, Clone)]
pub struct Table {
    options: TableOptions,
    phase: RoundPhase,
    /// Seated players, in seat order.
    players: Vec<Player>,
    dealer: Dealer,
    shoe: Shoe,
    /// Hands still due to act, head first.
    turns: VecDeque<TurnPosition>,
    next_id: Option<u8>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates an empty table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{RoundPhase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), RoundPhase::WaitingToStart);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut table = Self {
            options,
            phase: RoundPhase::WaitingToStart,
            players: Vec::new(),
            dealer: Dealer::new(),
            shoe: Shoe::new(options.decks),
            turns: VecDeque::new(),
            next_id: Some(0),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        table.rebuild_shoe();
        table
    }

    /// Creates a table and seats one player per name, each with the starting
    /// bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::TableFull`] if there are more names than seat ids.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Table, TableOptions};
    ///
    /// let table = Table::seat_players(TableOptions::default(), 7, ["Ann", "Bob"]).unwrap();
    /// assert_eq!(table.players().len(), 2);
    /// assert_eq!(table.players()[1].bankroll(), 1000);
    /// ```
    pub fn seat_players<I, S>(options: TableOptions, seed: u64, names: I) -> Result<Self, SeatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(options, seed);
        for name in names {
            table.seat(name)?;
        }
        Ok(table)
    }

    /// Seats a player between rounds and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or every id is taken.
    pub fn seat(&mut self, name: impl Into<String>) -> Result<u8, SeatError> {
        if !matches!(
            self.phase,
            RoundPhase::WaitingToStart | RoundPhase::WaitingOnBets
        ) {
            return Err(SeatError::InvalidPhase);
        }

        let id = self.next_id.ok_or(SeatError::TableFull)?;
        self.next_id = id.checked_add(1);

        let player = Player::new(id, name, self.options.starting_bankroll);
        info!(player = id, name = player.name(), "player seated");
        self.players.push(player);
        self.phase = RoundPhase::WaitingOnBets;

        Ok(id)
    }

    /// Unseats every player who can no longer cover the minimum bet and
    /// returns their names.
    ///
    /// Players who already bet this round are kept.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is between rounds.
    pub fn remove_broke_players(&mut self) -> Result<Vec<String>, SeatError> {
        if self.phase != RoundPhase::WaitingOnBets {
            return Err(SeatError::InvalidPhase);
        }

        let min_bet = self.options.min_bet;
        let (broke, seated): (Vec<Player>, Vec<Player>) = core::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| !p.has_bet() && p.bankroll() < min_bet);
        self.players = seated;

        let names: Vec<String> = broke.into_iter().map(|p| String::from(p.name())).collect();
        for name in &names {
            info!(name = name.as_str(), "player out of money and unseated");
        }

        Ok(names)
    }

    /// Returns whether every player has left the table.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase != RoundPhase::WaitingToStart && self.players.is_empty()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Replaces the shoe used for the coming deal.
    ///
    /// Lets a caller replay a recorded deal with [`Shoe::stacked`]. The
    /// replacement is only used until the next round resets the table.
    pub fn replace_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    /// Returns the hand due to act next, if any.
    #[must_use]
    pub fn current_turn(&self) -> Option<TurnPosition> {
        self.turns.front().copied()
    }

    /// Returns the id of the player due to act next, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        self.current_turn()
            .and_then(|turn| self.players.get(turn.player_index))
            .map(Player::id)
    }

    fn player_index(&self, player_id: u8) -> Option<usize> {
        self.players.iter().position(|p| p.id() == player_id)
    }

    fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        self.shoe.draw().inspect_err(|_| {
            warn!(remaining = self.shoe.remaining(), "draw from exhausted shoe");
        })
    }

    fn rebuild_shoe(&mut self) {
        self.shoe = Shoe::new(self.options.decks);
        self.shoe.shuffle(&mut self.rng);
    }

    /// Sets every waiting player's status from the head of the turn queue.
    fn refresh_statuses(&mut self) {
        let current = if self.dealer.is_insurance_open() {
            None
        } else {
            self.turns.front().map(|turn| turn.player_index)
        };

        for (index, player) in self.players.iter_mut().enumerate() {
            if player.status() == PlayerStatus::Lost {
                continue;
            }
            let status = if current == Some(index) {
                PlayerStatus::Playing
            } else {
                PlayerStatus::WaitingOthers
            };
            player.set_status(status);
        }
    }

    /// Clears hands and the dealer, reshuffles and reopens betting.
    fn reset_round(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.dealer.reset();
        self.turns.clear();
        self.rebuild_shoe();
        self.phase = RoundPhase::WaitingOnBets;
    }
}
