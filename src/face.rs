//! Card face lookup for the two display styles.

use crate::card::Card;

const ASCII_FACES: [[&str; 4]; 13] = [
    ["A♠", "A♥", "A♣", "A♦"],
    ["2♠", "2♥", "2♣", "2♦"],
    ["3♠", "3♥", "3♣", "3♦"],
    ["4♠", "4♥", "4♣", "4♦"],
    ["5♠", "5♥", "5♣", "5♦"],
    ["6♠", "6♥", "6♣", "6♦"],
    ["7♠", "7♥", "7♣", "7♦"],
    ["8♠", "8♥", "8♣", "8♦"],
    ["9♠", "9♥", "9♣", "9♦"],
    ["T♠", "T♥", "T♣", "T♦"],
    ["J♠", "J♥", "J♣", "J♦"],
    ["Q♠", "Q♥", "Q♣", "Q♦"],
    ["K♠", "K♥", "K♣", "K♦"],
];

const UNICODE_FACES: [[&str; 4]; 13] = [
    ["🂡", "🂱", "🃁", "🃑"],
    ["🂢", "🂲", "🃂", "🃒"],
    ["🂣", "🂳", "🃃", "🃓"],
    ["🂤", "🂴", "🃄", "🃔"],
    ["🂥", "🂵", "🃅", "🃕"],
    ["🂦", "🂶", "🃆", "🃖"],
    ["🂧", "🂷", "🃇", "🃗"],
    ["🂨", "🂸", "🃈", "🃘"],
    ["🂩", "🂹", "🃉", "🃙"],
    ["🂪", "🂺", "🃊", "🃚"],
    ["🂫", "🂻", "🃋", "🃛"],
    ["🂭", "🂽", "🃍", "🃝"],
    ["🂮", "🂾", "🃎", "🃞"],
];

/// How cards are drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceStyle {
    /// Rank letter plus suit symbol, e.g. `A♠`.
    #[default]
    Ascii,
    /// Unicode playing-card glyphs, e.g. `🂡`.
    Unicode,
}

impl FaceStyle {
    /// Looks up a style by its persisted selector (1 or 2).
    #[must_use]
    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::Ascii),
            2 => Some(Self::Unicode),
            _ => None,
        }
    }

    /// Returns the persisted selector for this style.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Ascii => 1,
            Self::Unicode => 2,
        }
    }

    /// Returns the face for a card.
    #[must_use]
    pub fn face(self, card: Card) -> &'static str {
        let rank = usize::from(card.rank.min(Card::MAX_RANK));
        let table = match self {
            Self::Ascii => &ASCII_FACES,
            Self::Unicode => &UNICODE_FACES,
        };
        table[rank][card.suit.index()]
    }

    /// Returns the face shown for the dealer's hidden hole card.
    #[must_use]
    pub const fn hidden(self) -> &'static str {
        match self {
            Self::Ascii => "??",
            Self::Unicode => "🂠",
        }
    }
}
