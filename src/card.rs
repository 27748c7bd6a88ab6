//! Card types and blackjack values.

/// Card suit, in the column order used by the face tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit's position (0..=3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A playing card.
///
/// Ranks are zero based: 0 is the Ace, 1..=8 are the two through nine, and
/// 9..=12 are the Ten, Jack, Queen and King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (0 = Ace, 12 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Highest valid rank (King).
    pub const MAX_RANK: u8 = 12;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values above
    /// [`Card::MAX_RANK`] are accepted but count as ten-valued.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Blackjack value of the card, with Aces counted as 1.
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.rank >= 9 { 10 } else { self.rank + 1 }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 0
    }

    /// Returns whether the card is worth ten (Ten through King).
    #[must_use]
    pub const fn is_ten(self) -> bool {
        self.rank >= 9
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
