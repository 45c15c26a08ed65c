//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_min_bet(25)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Bankroll every newly seated player starts with.
    pub starting_bankroll: usize,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether insurance is offered when the dealer shows an ace.
    pub insurance: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            min_bet: 10,
            starting_bankroll: 1000,
            stand_on_soft_17: true,
            insurance: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(5);
    /// assert_eq!(options.min_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }
}
