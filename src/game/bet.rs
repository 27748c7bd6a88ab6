use tracing::debug;

use crate::error::SettingsError;
use crate::face::FaceStyle;
use crate::shoe::{DeckType, MAX_DECKS};

use super::Game;

impl Game {
    fn ensure_between_rounds(&self) -> Result<(), SettingsError> {
        if self.state.is_between_rounds() {
            Ok(())
        } else {
            Err(SettingsError::InvalidState)
        }
    }

    /// Sets the bet for the next round and clamps it to the table limits and
    /// the bankroll. Returns the bet that will actually be placed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn set_bet(&mut self, bet: usize) -> Result<usize, SettingsError> {
        self.ensure_between_rounds()?;

        self.settings.current_bet = bet;
        self.settings.normalize_bet();

        debug!(bet = self.settings.current_bet, "bet changed");
        Ok(self.settings.current_bet)
    }

    /// Sets the bet from the bet menu: `1` = $5, `2` = $10, `3` = $25,
    /// `4` = $100.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the choice is unknown.
    pub fn set_bet_choice(&mut self, choice: char) -> Result<usize, SettingsError> {
        let bet = match choice {
            '1' => 500,
            '2' => 1_000,
            '3' => 2_500,
            '4' => 10_000,
            _ => return Err(SettingsError::InvalidBetChoice(choice)),
        };

        self.set_bet(bet)
    }

    /// Sets the number of decks, clamped to 1..=8, and rebuilds the shoe.
    /// Returns the deck count in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn set_num_decks(&mut self, decks: u8) -> Result<u8, SettingsError> {
        self.ensure_between_rounds()?;

        self.settings.num_decks = decks.clamp(1, MAX_DECKS);
        self.shoe.build(self.settings.deck_type, self.settings.num_decks);

        Ok(self.settings.num_decks)
    }

    /// Sets the deck composition by menu selector (1..=6) and rebuilds the
    /// shoe. Any composition other than regular plays with eight decks.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the selector is unknown.
    pub fn set_deck_type(&mut self, selector: u8) -> Result<DeckType, SettingsError> {
        self.ensure_between_rounds()?;

        let deck_type =
            DeckType::from_selector(selector).ok_or(SettingsError::InvalidDeckType(selector))?;

        self.settings.deck_type = deck_type;
        if deck_type != DeckType::Regular {
            self.settings.num_decks = MAX_DECKS;
        }
        self.shoe.build(deck_type, self.settings.num_decks);

        Ok(deck_type)
    }

    /// Sets the face style by menu selector (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the selector is unknown.
    pub fn set_face_style(&mut self, selector: u8) -> Result<FaceStyle, SettingsError> {
        self.ensure_between_rounds()?;

        let style =
            FaceStyle::from_selector(selector).ok_or(SettingsError::InvalidFaceStyle(selector))?;
        self.settings.face_style = style;

        Ok(style)
    }
}
