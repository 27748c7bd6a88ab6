//! The shoe: undealt cards for one or more decks.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};

/// Percentage of the shoe that may be dealt before a reshuffle, indexed by
/// deck count minus one.
const PENETRATION_LIMITS: [usize; 8] = [80, 81, 82, 84, 86, 89, 92, 95];

/// Number of shuffle passes applied after building.
const SHUFFLE_PASSES: usize = 7;

/// Most decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;

/// Composition of each deck in the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckType {
    /// The regular 13 ranks.
    #[default]
    Regular,
    /// Aces only.
    Aces,
    /// Jacks only.
    Jacks,
    /// Aces and Jacks.
    AcesJacks,
    /// Sevens only.
    Sevens,
    /// Eights only.
    Eights,
}

impl DeckType {
    /// Looks up a deck type by its menu selector (1..=6).
    #[must_use]
    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::Regular),
            2 => Some(Self::Aces),
            3 => Some(Self::Jacks),
            4 => Some(Self::AcesJacks),
            5 => Some(Self::Sevens),
            6 => Some(Self::Eights),
            _ => None,
        }
    }

    /// Returns the menu selector for this deck type.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Regular => 1,
            Self::Aces => 2,
            Self::Jacks => 3,
            Self::AcesJacks => 4,
            Self::Sevens => 5,
            Self::Eights => 6,
        }
    }

    /// Ranks that make up one pass over a suit.
    #[must_use]
    pub const fn ranks(self) -> &'static [u8] {
        match self {
            Self::Regular => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
            Self::Aces => &[0],
            Self::Jacks => &[10],
            Self::AcesJacks => &[0, 10],
            Self::Sevens => &[6],
            Self::Eights => &[7],
        }
    }
}

/// An ordered supply of undealt cards.
///
/// The shoe remembers how many cards it was built with so it can tell when
/// the penetration limit for its deck count has been passed.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    num_decks: u8,
    total: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates an empty shoe with a seeded shuffler.
    ///
    /// An empty shoe always reports [`Shoe::need_to_shuffle`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: VecDeque::new(),
            num_decks: 1,
            total: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a one-deck shoe that deals `cards` in the given order.
    ///
    /// Nothing is shuffled; the penetration limit is measured against
    /// `cards.len()`.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        let total = cards.len();
        Self {
            cards: cards.into(),
            num_decks: 1,
            total,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Rebuilds the shoe with `num_decks` decks of `deck_type`, then shuffles.
    ///
    /// Cards are laid down deck by deck and suit by suit, cycling through the
    /// composition's ranks until exactly `num_decks * 52` cards are present.
    /// The deck count is clamped to 1..=8.
    pub fn build(&mut self, deck_type: DeckType, num_decks: u8) {
        let num_decks = num_decks.clamp(1, MAX_DECKS);
        let total = usize::from(num_decks) * DECK_SIZE;
        let ranks = deck_type.ranks();

        self.cards.clear();
        self.cards.reserve(total);

        'fill: while self.cards.len() < total {
            for _ in 0..num_decks {
                for suit in Suit::ALL {
                    for &rank in ranks {
                        if self.cards.len() >= total {
                            break 'fill;
                        }
                        self.cards.push_back(Card::new(rank, suit));
                    }
                }
            }
        }

        self.num_decks = num_decks;
        self.total = total;
        self.shuffle();

        debug!(?deck_type, num_decks, cards = total, "built new shoe");
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        let cards = self.cards.make_contiguous();
        for _ in 0..SHUFFLE_PASSES {
            cards.shuffle(&mut self.rng);
        }
    }

    /// Returns whether the shoe must be rebuilt before the next round.
    ///
    /// True when the shoe is empty or when the dealt share of the built total
    /// exceeds the penetration limit for the deck count.
    #[must_use]
    pub fn need_to_shuffle(&self) -> bool {
        if self.cards.is_empty() {
            return true;
        }

        let dealt = self.total.saturating_sub(self.cards.len());
        let limit = PENETRATION_LIMITS[usize::from(self.num_decks.clamp(1, MAX_DECKS)) - 1];

        dealt * 100 > limit * self.total
    }

    /// Removes and returns the next card, or `None` if the shoe is empty.
    pub fn next_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards the shoe was built with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.total
    }

    /// Returns the number of decks the shoe was built with.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Iterates over the undealt cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
