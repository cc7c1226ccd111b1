//! Players and their scores.

use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Creates a player for seat `seat` (0-based).
    ///
    /// A blank name is replaced by `Player {seat + 1}`.
    #[must_use]
    pub fn seated(name: &str, seat: usize) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::new(format!("Player {}", seat + 1))
        } else {
            Self::new(name)
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Appends cards to the hand in their incoming order.
    pub fn receive_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.receive(cards);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidIndex`] if `index` is outside the hand.
    pub fn play_card(&mut self, index: usize) -> Result<Card, PlayError> {
        self.hand.play(index)
    }

    pub(crate) fn return_card(&mut self, index: usize, card: Card) {
        self.hand.restore(index, card);
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Adds one point to the score.
    pub const fn increment_score(&mut self) {
        self.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn blank_names_get_seat_defaults() {
        assert_eq!(Player::seated("  ", 0).name(), "Player 1");
        assert_eq!(Player::seated("", 2).name(), "Player 3");
        assert_eq!(Player::seated(" Alice ", 0).name(), "Alice");
    }

    #[test]
    fn cards_and_score() {
        let mut player = Player::new("Bob");
        assert!(!player.has_cards());

        player.receive_cards([Card::new(Suit::Flower, 7)]);
        assert!(player.has_cards());
        assert!(player.play_card(3).is_err());
        assert_eq!(player.play_card(0).unwrap(), Card::new(Suit::Flower, 7));
        assert!(!player.has_cards());

        player.increment_score();
        player.increment_score();
        assert_eq!(player.score(), 2);
    }
}
