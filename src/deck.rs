//! The 40-card deck.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
use crate::error::{DealError, DeckError};

/// An ordered deck of cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck.
    ///
    /// Suits follow [`Suit::ALL`] and ranks run 1 through 10 within each suit.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=RANKS_PER_SUIT {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card order. The last card is dealt first.
    ///
    /// The cards may be any subset of a full deck, so a partly dealt or
    /// stacked deck can be set up.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TooManyCards`] for more than [`DECK_SIZE`] cards,
    /// [`DeckError::InvalidRank`] for a rank outside 1..=10, or
    /// [`DeckError::DuplicateCard`] if a card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards {
                count: cards.len(),
                max: DECK_SIZE,
            });
        }

        for (i, card) in cards.iter().enumerate() {
            if !card.is_valid() {
                return Err(DeckError::InvalidRank(*card));
            }
            if cards[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Removes and returns the last `n` cards.
    ///
    /// The returned cards keep their deck order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `n` cards remain.
    /// The deck is left unchanged in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DealError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        Ok(self.cards.split_off(remaining - n))
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the remaining cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn build_is_ordered_by_suit_then_rank() {
        let deck = Deck::build();
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Suit::Ace, 1));
        assert_eq!(deck.cards()[9], Card::new(Suit::Ace, 10));
        assert_eq!(deck.cards()[10], Card::new(Suit::Flower, 1));
        assert_eq!(deck.cards()[39], Card::new(Suit::Diamond, 10));
    }

    #[test]
    fn deal_takes_from_the_end() {
        let mut deck = Deck::build();
        let dealt = deck.deal(2).unwrap();
        assert_eq!(
            dealt,
            [Card::new(Suit::Diamond, 9), Card::new(Suit::Diamond, 10)]
        );
        assert_eq!(deck.remaining(), DECK_SIZE - 2);
    }

    #[test]
    fn deal_too_many_leaves_deck_unchanged() {
        let mut deck = Deck::from_cards(alloc::vec![Card::new(Suit::Love, 3)]).unwrap();
        assert_eq!(
            deck.deal(2).unwrap_err(),
            DealError::InsufficientCards {
                requested: 2,
                remaining: 1,
            }
        );
        assert_eq!(deck.remaining(), 1);

        assert_eq!(deck.deal(1).unwrap(), [Card::new(Suit::Love, 3)]);
        assert!(deck.is_empty());
        assert!(deck.deal(0).unwrap().is_empty());
    }

    #[test]
    fn from_cards_rejects_cards_outside_a_deck() {
        assert_eq!(
            Deck::from_cards(alloc::vec![Card::new(Suit::Ace, 11)]).unwrap_err(),
            DeckError::InvalidRank(Card::new(Suit::Ace, 11))
        );
        assert_eq!(
            Deck::from_cards(alloc::vec![
                Card::new(Suit::Love, 4),
                Card::new(Suit::Flower, 2),
                Card::new(Suit::Love, 4),
            ])
            .unwrap_err(),
            DeckError::DuplicateCard(Card::new(Suit::Love, 4))
        );

        let mut too_many = Deck::build().cards().to_vec();
        too_many.push(Card::new(Suit::Ace, 1));
        assert_eq!(
            Deck::from_cards(too_many).unwrap_err(),
            DeckError::TooManyCards {
                count: DECK_SIZE + 1,
                max: DECK_SIZE,
            }
        );

        let full = Deck::from_cards(Deck::build().cards().to_vec()).unwrap();
        assert_eq!(full, Deck::build());
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_ne!(a, Deck::build());
    }
}
