//! Round play and winner resolution.

use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, info};

use crate::card::Card;
use crate::error::{PlayError, RoundError};
use crate::player::Player;
use crate::result::{GameOutcome, Play, RoundResult};

use super::{Game, GameState};

/// Chooses which card a player puts down.
///
/// The selector only ever sees the acting player. Cards already played this
/// round are not passed in, so no player can react to an earlier play.
///
/// Any `FnMut(&Player, Range<usize>) -> Option<usize>` closure is a selector.
pub trait CardSelector {
    /// Returns an index within `available` for `player`'s hand, or `None`
    /// if no selection can be made.
    fn select(&mut self, player: &Player, available: Range<usize>) -> Option<usize>;
}

impl<F> CardSelector for F
where
    F: FnMut(&Player, Range<usize>) -> Option<usize>,
{
    fn select(&mut self, player: &Player, available: Range<usize>) -> Option<usize> {
        self(player, available)
    }
}

/// Returns the position of the winning play.
///
/// Plays are scanned in order and a play replaces the current best only if
/// its card strictly beats the best card, so the earliest play wins ties.
/// Returns `None` for an empty slice.
///
/// # Example
///
/// ```
/// use lovetrick::{Card, Play, Suit, resolve_round};
///
/// let plays = [
///     Play { player: 0, card: Card::new(Suit::Diamond, 9) },
///     Play { player: 1, card: Card::new(Suit::Love, 1) },
///     Play { player: 2, card: Card::new(Suit::Diamond, 9) },
/// ];
/// assert_eq!(resolve_round(&plays), Some(1));
/// ```
#[must_use]
pub fn resolve_round(plays: &[Play]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (position, play) in plays.iter().enumerate() {
        match best {
            Some(current) if !play.card.beats(&plays[current].card) => {}
            _ => best = Some(position),
        }
    }
    best
}

impl Game {
    /// Plays one round.
    ///
    /// Each player, in seating order, is asked for a card through `selector`.
    /// Once everyone has played, the winning play scores one point. The game
    /// ends when any player has no cards left.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] if the game has ended,
    /// [`RoundError::InvalidIndex`] if the selector returns an index outside
    /// the hand, or [`RoundError::Aborted`] if it returns `None`. On error
    /// every card taken this round goes back to its owner and the game is
    /// left as it was.
    pub fn play_round<S>(&mut self, selector: &mut S) -> Result<RoundResult, RoundError>
    where
        S: CardSelector + ?Sized,
    {
        if !self.state.accepts_round() {
            return Err(RoundError::GameOver);
        }
        let previous = self.state;
        self.state = GameState::RoundInProgress;

        let plays = match self.collect_plays(selector) {
            Ok(plays) => plays,
            Err(err) => {
                self.state = previous;
                return Err(err);
            }
        };
        // Setup rejects fewer than two players, so a round always has plays.
        let Some(winning) = resolve_round(&plays) else {
            self.state = previous;
            return Err(RoundError::GameOver);
        };
        let Play {
            player: winner,
            card: winning_card,
        } = plays[winning];

        self.players[winner].increment_score();

        let game_over = !self.players.iter().all(Player::has_cards);
        self.state = if game_over {
            GameState::GameOver
        } else {
            GameState::RoundResolved
        };

        let result = RoundResult {
            round: self.history.len() + 1,
            plays,
            winner,
            winning_card,
            game_over,
        };
        info!(
            "round {} won by {} with {}",
            result.round,
            self.players[winner].name(),
            winning_card
        );
        if game_over {
            info!("game over after {} rounds", result.round);
        }

        self.history.push(result.clone());
        Ok(result)
    }

    /// Runs rounds until the game is over and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::play_round`]. Rounds that
    /// finished before the error keep their scores.
    pub fn play_to_end<S>(&mut self, selector: &mut S) -> Result<GameOutcome, RoundError>
    where
        S: CardSelector + ?Sized,
    {
        while !self.is_game_over() {
            self.play_round(selector)?;
        }
        Ok(self.outcome())
    }

    fn collect_plays<S>(&mut self, selector: &mut S) -> Result<Vec<Play>, RoundError>
    where
        S: CardSelector + ?Sized,
    {
        let mut plays = Vec::with_capacity(self.players.len());
        let mut positions = Vec::with_capacity(self.players.len());

        for seat in 0..self.players.len() {
            match self.take_play(seat, selector) {
                Ok((index, card)) => {
                    positions.push(index);
                    plays.push(Play { player: seat, card });
                }
                Err(err) => {
                    self.undo_plays(&plays, &positions);
                    return Err(err);
                }
            }
        }

        Ok(plays)
    }

    fn take_play<S>(&mut self, seat: usize, selector: &mut S) -> Result<(usize, Card), RoundError>
    where
        S: CardSelector + ?Sized,
    {
        let player = &self.players[seat];
        let index = selector
            .select(player, player.hand().indices())
            .ok_or(RoundError::Aborted { player: seat })?;

        let player = &mut self.players[seat];
        let card = player
            .play_card(index)
            .map_err(|PlayError::InvalidIndex { index, len }| RoundError::InvalidIndex {
                player: seat,
                index,
                len,
            })?;
        debug!("{} plays {card}", player.name());

        Ok((index, card))
    }

    /// Hands every card taken this round back, restoring hand order.
    fn undo_plays(&mut self, plays: &[Play], positions: &[usize]) {
        for (play, &index) in plays.iter().zip(positions).rev() {
            self.players[play.player].return_card(index, play.card);
        }
    }
}
