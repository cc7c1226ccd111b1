//! Error types for game operations.
//!
//! Every error here is a precondition failure. None is retried by the
//! engine, and a rejected operation never leaves partial state behind.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than remain in the deck.
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card's rank is outside 1..=10.
    #[error("card {0} has a rank outside the deck")]
    InvalidRank(Card),
    /// The card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// More cards were given than a deck holds.
    #[error("a deck holds at most {max} cards, got {count}")]
    TooManyCards {
        /// Number of cards given.
        count: usize,
        /// Cards in a full deck.
        max: usize,
    },
}

/// Errors that can occur when playing a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The index is outside the hand.
    #[error("card index {index} out of range for hand of {len}")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Too few players were requested.
    #[error("at least {min} players are required, got {count}")]
    InvalidPlayerCount {
        /// Number of players requested.
        count: usize,
        /// Minimum number of players.
        min: usize,
    },
    /// The deck cannot cover a full hand for every player.
    #[error("not enough cards in the deck")]
    NotEnoughCards(#[from] DealError),
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game is already over.
    #[error("the game is over")]
    GameOver,
    /// The selector returned an index outside the player's hand.
    #[error("player {player} selected index {index} out of range for hand of {len}")]
    InvalidIndex {
        /// Position of the player in seating order.
        player: usize,
        /// Selected index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The selector signalled that no selection could be made.
    #[error("card selection aborted for player {player}")]
    Aborted {
        /// Position of the player in seating order.
        player: usize,
    },
}

/// Errors that can occur when asking for the game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The game has not finished yet.
    #[error("the game is still in progress")]
    GameInProgress,
}
