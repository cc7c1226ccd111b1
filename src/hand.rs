//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use crate::card::Card;
use crate::error::PlayError;

/// An ordered set of cards held by a player.
///
/// Order only matters for display and for selecting a card by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends cards, keeping their incoming order.
    pub fn receive<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Puts a card back at `index`, shifting later cards right.
    pub(crate) fn restore(&mut self, index: usize, card: Card) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidIndex`] if `index` is out of range. The
    /// hand is left unchanged in that case.
    pub fn play(&mut self, index: usize) -> Result<Card, PlayError> {
        if index >= self.cards.len() {
            return Err(PlayError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }

        Ok(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the range of valid card indices.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        0..self.cards.len()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn play_removes_by_position() {
        let mut hand = Hand::new();
        hand.receive([
            Card::new(Suit::Ace, 1),
            Card::new(Suit::Love, 2),
            Card::new(Suit::Flower, 3),
        ]);

        assert_eq!(hand.play(1).unwrap(), Card::new(Suit::Love, 2));
        assert_eq!(
            hand.cards(),
            [Card::new(Suit::Ace, 1), Card::new(Suit::Flower, 3)]
        );
        assert_eq!(hand.indices(), 0..2);
    }

    #[test]
    fn out_of_range_play_is_rejected() {
        let mut hand = Hand::new();
        hand.receive([Card::new(Suit::Diamond, 5)]);

        assert_eq!(
            hand.play(1).unwrap_err(),
            PlayError::InvalidIndex { index: 1, len: 1 }
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn restore_reinserts_at_position() {
        let mut hand = Hand::new();
        hand.receive([Card::new(Suit::Ace, 1), Card::new(Suit::Ace, 2)]);
        let card = hand.play(0).unwrap();
        hand.restore(0, card);
        assert_eq!(
            hand.cards(),
            [Card::new(Suit::Ace, 1), Card::new(Suit::Ace, 2)]
        );
    }
}
