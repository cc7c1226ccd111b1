//! Game engine and state management.

use alloc::vec::Vec;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, SetupError};
use crate::options::{GameOptions, MIN_PLAYERS};
use crate::player::Player;
use crate::result::RoundResult;

mod outcome;
mod round;
pub mod state;

pub use round::{CardSelector, resolve_round};
pub use state::GameState;

/// A trick-comparison game engine that owns the deck and the players.
///
/// Players are seated in the order their names were given, and that order
/// is kept for dealing, for playing within a round, and for reporting ties.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Players in seating order.
    players: Vec<Player>,
    /// Current game state.
    state: GameState,
    /// Results of every round played so far.
    history: Vec<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Blank names are replaced by `Player {n}`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] if fewer than
    /// `options.min_players` names (and never fewer than two) are given, or
    /// [`SetupError::NotEnoughCards`] if the deck cannot cover every hand.
    ///
    /// # Example
    ///
    /// ```
    /// use lovetrick::{Game, GameOptions};
    ///
    /// let game = Game::new(&["Alice", "Bob"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 30);
    /// ```
    pub fn new<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(names, options, &mut rng)
    }

    /// Creates a new game, shuffling the deck with `rng`.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_rng<S, R>(
        names: &[S],
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, SetupError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Self::with_deck(names, options, Deck::shuffled(rng))
    }

    /// Creates a new game that deals from `deck` as given, without shuffling.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_deck<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        deck: Deck,
    ) -> Result<Self, SetupError> {
        let min = options.min_players.max(MIN_PLAYERS);
        if names.len() < min {
            return Err(SetupError::InvalidPlayerCount {
                count: names.len(),
                min,
            });
        }

        let needed = options.hand_size.saturating_mul(names.len());
        if needed > deck.remaining() {
            return Err(DealError::InsufficientCards {
                requested: needed,
                remaining: deck.remaining(),
            }
            .into());
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::seated(name.as_ref(), seat))
            .collect();

        let mut game = Self {
            deck,
            options,
            players,
            state: GameState::Setup,
            history: Vec::new(),
        };
        game.deal_hands()?;
        Ok(game)
    }

    /// Deals a full hand to every player in seating order and leaves setup.
    fn deal_hands(&mut self) -> Result<(), SetupError> {
        debug_assert_eq!(self.state, GameState::Setup);

        let hand_size = self.options.hand_size;
        for player in &mut self.players {
            player.receive_cards(self.deck.deal(hand_size)?);
            debug!("dealt {hand_size} cards to {}", player.name());
        }

        self.state = if self.players.iter().all(Player::has_cards) {
            GameState::RoundInProgress
        } else {
            GameState::GameOver
        };

        debug!(
            "game ready with {} players, {} cards left in deck",
            self.players.len(),
            self.deck.remaining()
        );
        Ok(())
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game is over.
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver)
    }

    /// Returns the players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the cards remaining in the deck.
    pub fn deck_cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Returns the number of rounds played so far.
    pub fn round_number(&self) -> usize {
        self.history.len()
    }

    /// Returns the results of all rounds played so far.
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }
}
