//! Round and game result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A single card played by a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Position of the player in seating order.
    pub player: usize,
    /// The card played.
    pub card: Card,
}

/// Result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: usize,
    /// Plays in seating order.
    pub plays: Vec<Play>,
    /// Seat of the round winner.
    pub winner: usize,
    /// The winning card.
    pub winning_card: Card,
    /// Whether this round ended the game.
    pub game_over: bool,
}

/// A player's name and final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Position of the player in seating order.
    pub player: usize,
    /// The player's name.
    pub name: String,
    /// The player's score.
    pub score: u32,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// One player holds the top score.
    Winner {
        /// The winning player.
        player: Standing,
    },
    /// Several players share the top score, in seating order.
    Tie {
        /// The tied players.
        players: Vec<Standing>,
        /// The shared score.
        score: u32,
    },
}

impl GameOutcome {
    /// Returns the winning score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        match self {
            Self::Winner { player } => player.score,
            Self::Tie { score, .. } => *score,
        }
    }

    /// Returns the winning players in seating order.
    #[must_use]
    pub fn winners(&self) -> &[Standing] {
        match self {
            Self::Winner { player } => core::slice::from_ref(player),
            Self::Tie { players, .. } => players,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { player } => {
                write!(f, "{} wins with {} points", player.name, player.score)
            }
            Self::Tie { players, score } => {
                f.write_str("tie between ")?;
                for (i, standing) in players.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&standing.name)?;
                }
                write!(f, " with {score} points")
            }
        }
    }
}
