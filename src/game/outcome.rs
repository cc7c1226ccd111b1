//! Final standings and winners.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::OutcomeError;
use crate::result::{GameOutcome, Standing};

use super::Game;

impl GameOutcome {
    /// Picks the players holding the top score.
    ///
    /// A lone leader is a [`GameOutcome::Winner`]; otherwise every player on
    /// the top score is reported, in the order given. An empty list yields a
    /// tie with no players at score zero.
    #[must_use]
    pub fn from_standings(standings: Vec<Standing>) -> Self {
        let score = standings.iter().map(|s| s.score).max().unwrap_or(0);
        let mut leaders: Vec<Standing> = standings
            .into_iter()
            .filter(|s| s.score == score)
            .collect();

        if leaders.len() == 1 {
            if let Some(player) = leaders.pop() {
                return Self::Winner { player };
            }
        }

        Self::Tie {
            players: leaders,
            score,
        }
    }
}

impl Game {
    /// Returns every player's name and score in seating order.
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .enumerate()
            .map(|(player, p)| Standing {
                player,
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect()
    }

    /// Returns the winner, or the tied winners, of a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::GameInProgress`] if the game is not over.
    pub fn winners(&self) -> Result<GameOutcome, OutcomeError> {
        if !self.is_game_over() {
            return Err(OutcomeError::GameInProgress);
        }
        Ok(self.outcome())
    }

    pub(super) fn outcome(&self) -> GameOutcome {
        GameOutcome::from_standings(self.standings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn standing(player: usize, name: &str, score: u32) -> Standing {
        Standing {
            player,
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn single_leader_wins() {
        let outcome =
            GameOutcome::from_standings(vec![standing(0, "Alice", 3), standing(1, "Bob", 2)]);
        assert_eq!(
            outcome,
            GameOutcome::Winner {
                player: standing(0, "Alice", 3)
            }
        );
        assert_eq!(outcome.score(), 3);
    }

    #[test]
    fn shared_top_score_is_a_tie_in_seat_order() {
        let outcome = GameOutcome::from_standings(vec![
            standing(0, "Alice", 2),
            standing(1, "Bob", 2),
            standing(2, "Cleo", 1),
        ]);
        assert_eq!(
            outcome,
            GameOutcome::Tie {
                players: vec![standing(0, "Alice", 2), standing(1, "Bob", 2)],
                score: 2,
            }
        );
        assert_eq!(outcome.winners().len(), 2);
    }

    #[test]
    fn no_standings_is_an_empty_tie() {
        let outcome = GameOutcome::from_standings(Vec::new());
        assert_eq!(outcome.score(), 0);
        assert!(outcome.winners().is_empty());
    }
}
