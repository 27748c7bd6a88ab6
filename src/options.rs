//! Session settings and table limits.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseSettingsError;
use crate::face::FaceStyle;
use crate::shoe::{DeckType, MAX_DECKS};

/// Smallest bet the table accepts, in minor currency units.
pub const MIN_BET: usize = 500;

/// Largest bet the table accepts, in minor currency units.
pub const MAX_BET: usize = 10_000_000;

/// Bankroll a new or broke player starts with, in minor currency units.
pub const DEFAULT_MONEY: usize = 10_000;

/// Most hands a player may hold in one round, splits included.
pub const MAX_PLAYER_HANDS: usize = 7;

/// Settings carried from round to round and persisted between sessions.
///
/// Use the builder pattern to customize settings:
///
/// ```
/// use shoebox::{DeckType, Settings};
///
/// let settings = Settings::default()
///     .with_decks(6)
///     .with_money(25_000)
///     .with_deck_type(DeckType::Regular);
/// assert_eq!(settings.num_decks, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of decks in the shoe (1..=8).
    pub num_decks: u8,
    /// Bankroll in minor currency units.
    pub money: usize,
    /// Bet placed on each new round, in minor currency units.
    pub current_bet: usize,
    /// Composition of each deck.
    pub deck_type: DeckType,
    /// How cards are drawn.
    pub face_style: FaceStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_decks: 1,
            money: DEFAULT_MONEY,
            current_bet: MIN_BET,
            deck_type: DeckType::Regular,
            face_style: FaceStyle::Ascii,
        }
    }
}

impl Settings {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::Settings;
    ///
    /// let settings = Settings::default().with_decks(6);
    /// assert_eq!(settings.num_decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.num_decks = decks;
        self
    }

    /// Sets the bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::Settings;
    ///
    /// let settings = Settings::default().with_money(2_000);
    /// assert_eq!(settings.money, 2_000);
    /// ```
    #[must_use]
    pub const fn with_money(mut self, money: usize) -> Self {
        self.money = money;
        self
    }

    /// Sets the bet for new rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::Settings;
    ///
    /// let settings = Settings::default().with_bet(1_000);
    /// assert_eq!(settings.current_bet, 1_000);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: usize) -> Self {
        self.current_bet = bet;
        self
    }

    /// Sets the deck composition.
    #[must_use]
    pub const fn with_deck_type(mut self, deck_type: DeckType) -> Self {
        self.deck_type = deck_type;
        self
    }

    /// Sets the face style.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{FaceStyle, Settings};
    ///
    /// let settings = Settings::default().with_face_style(FaceStyle::Unicode);
    /// assert_eq!(settings.face_style, FaceStyle::Unicode);
    /// ```
    #[must_use]
    pub const fn with_face_style(mut self, face_style: FaceStyle) -> Self {
        self.face_style = face_style;
        self
    }

    /// Resets a bankroll that can no longer cover the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{DEFAULT_MONEY, MIN_BET, Settings};
    ///
    /// let settings = Settings::default().with_money(100).with_bet(100).sanitized();
    /// assert_eq!(settings.money, DEFAULT_MONEY);
    /// assert_eq!(settings.current_bet, MIN_BET);
    /// ```
    #[must_use]
    pub const fn sanitized(mut self) -> Self {
        if self.money < MIN_BET {
            self.money = DEFAULT_MONEY;
            self.current_bet = MIN_BET;
        }
        self
    }

    /// Clamps the current bet to the table limits, then to the bankroll.
    pub fn normalize_bet(&mut self) {
        self.current_bet = self.current_bet.clamp(MIN_BET, MAX_BET).min(self.money);
    }
}

/// Writes the persisted form `decks|money|bet|deckType|faceType`.
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.num_decks,
            self.money,
            self.current_bet,
            self.deck_type.selector(),
            self.face_style.selector()
        )
    }
}

impl FromStr for Settings {
    type Err = ParseSettingsError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.trim().split('|');
        let mut next = || fields.next().ok_or(ParseSettingsError::FieldCount);

        let num_decks: u8 = parse_field(next()?)?;
        let money: usize = parse_field(next()?)?;
        let current_bet: usize = parse_field(next()?)?;
        let deck_type: u8 = parse_field(next()?)?;
        let face_style: u8 = parse_field(next()?)?;

        if fields.next().is_some() {
            return Err(ParseSettingsError::FieldCount);
        }

        if !(1..=MAX_DECKS).contains(&num_decks) {
            return Err(ParseSettingsError::OutOfRange("decks"));
        }

        Ok(Self {
            num_decks,
            money,
            current_bet,
            deck_type: DeckType::from_selector(deck_type)
                .ok_or(ParseSettingsError::OutOfRange("deck type"))?,
            face_style: FaceStyle::from_selector(face_style)
                .ok_or(ParseSettingsError::OutOfRange("face style"))?,
        })
    }
}

fn parse_field<T: FromStr>(field: &str) -> Result<T, ParseSettingsError> {
    field
        .trim()
        .parse()
        .map_err(|_| ParseSettingsError::InvalidNumber)
}
