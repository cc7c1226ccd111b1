//! Card types and the comparison rule.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Ace.
    Ace,
    /// Flower.
    Flower,
    /// Love. Beats [`Suit::Diamond`] regardless of rank.
    Love,
    /// Diamond.
    Diamond,
}

impl Suit {
    /// All suits in declaration order, which is also deck build order.
    pub const ALL: [Self; 4] = [Self::Ace, Self::Flower, Self::Love, Self::Diamond];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Flower => "Flower",
            Self::Love => "Love",
            Self::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards intentionally do not implement [`Ord`]: the comparison rule in
/// [`Card::compare`] is not transitive, so it cannot back a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1..=10).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Deck construction only
    /// ever produces ranks in `1..=RANKS_PER_SUIT`; see [`Card::is_valid`].
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the rank lies in `1..=RANKS_PER_SUIT`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= 1 && self.rank <= RANKS_PER_SUIT
    }

    /// Compares two cards.
    ///
    /// A Love card is greater than a Diamond card whatever their ranks, and a
    /// Diamond card is less than a Love card. Every other pairing is decided
    /// by rank alone, with equal ranks comparing equal.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use lovetrick::{Card, Suit};
    ///
    /// let love = Card::new(Suit::Love, 1);
    /// let diamond = Card::new(Suit::Diamond, 10);
    /// assert_eq!(love.compare(&diamond), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.suit, other.suit) {
            (Suit::Love, Suit::Diamond) => Ordering::Greater,
            (Suit::Diamond, Suit::Love) => Ordering::Less,
            _ => self.rank.cmp(&other.rank),
        }
    }

    /// Returns whether this card is strictly greater than `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: u8 = 10;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT as usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn love_beats_diamond_regardless_of_rank() {
        let love = Card::new(Suit::Love, 1);
        let diamond = Card::new(Suit::Diamond, 10);
        assert_eq!(love.compare(&diamond), Ordering::Greater);
        assert_eq!(diamond.compare(&love), Ordering::Less);
        assert!(love.beats(&diamond));
        assert!(!diamond.beats(&love));
    }

    #[test]
    fn other_pairings_compare_by_rank() {
        let ace = Card::new(Suit::Ace, 4);
        let flower = Card::new(Suit::Flower, 4);
        assert_eq!(ace.compare(&flower), Ordering::Equal);
        assert!(!ace.beats(&flower));

        let love = Card::new(Suit::Love, 2);
        let ace_high = Card::new(Suit::Ace, 9);
        assert_eq!(love.compare(&ace_high), Ordering::Less);
        assert_eq!(Card::new(Suit::Ace, 8).compare(&love), Ordering::Greater);
        assert_eq!(Card::new(Suit::Diamond, 8).compare(&love), Ordering::Less);
    }

    #[test]
    fn relation_is_not_transitive() {
        let love = Card::new(Suit::Love, 2);
        let flower = Card::new(Suit::Flower, 5);
        let diamond = Card::new(Suit::Diamond, 9);
        assert!(flower.beats(&love));
        assert!(diamond.beats(&flower));
        assert!(love.beats(&diamond));
    }

    #[test]
    fn rank_range_is_one_to_ten() {
        assert!(Card::new(Suit::Ace, 1).is_valid());
        assert!(Card::new(Suit::Diamond, 10).is_valid());
        assert!(!Card::new(Suit::Love, 0).is_valid());
        assert!(!Card::new(Suit::Flower, 11).is_valid());
    }

    #[test]
    fn deck_size_is_forty() {
        assert_eq!(DECK_SIZE, 40);
    }
}
