//! Game state types.

/// Game state.
///
/// A game moves `Setup -> RoundInProgress -> RoundResolved`, then either
/// back to `RoundInProgress` for the next round or on to `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Building the deck and dealing hands.
    Setup,
    /// Collecting one play from each player.
    RoundInProgress,
    /// The last round has been scored and the game continues.
    RoundResolved,
    /// Some player has run out of cards.
    GameOver,
}

impl GameState {
    /// Returns whether another round can be played.
    #[must_use]
    pub const fn accepts_round(self) -> bool {
        !matches!(self, Self::GameOver)
    }
}
