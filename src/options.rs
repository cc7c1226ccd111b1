//! Game configuration options.

/// Fewest players a game can seat, whatever the options say.
pub const MIN_PLAYERS: usize = 2;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use lovetrick::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_min_players(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player at setup.
    pub hand_size: usize,
    /// Minimum number of players. Never lower than [`MIN_PLAYERS`].
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            min_players: MIN_PLAYERS,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use lovetrick::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the minimum number of players.
    ///
    /// Values below [`MIN_PLAYERS`] are raised to it.
    ///
    /// # Example
    ///
    /// ```
    /// use lovetrick::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(1);
    /// assert_eq!(options.min_players, 2);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = if min_players < MIN_PLAYERS {
            MIN_PLAYERS
        } else {
            min_players
        };
        self
    }
}
