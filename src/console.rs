//! Interactive driver: menus, prompts and the round loop.
//!
//! [`Console`] connects a [`Game`] to a [`KeySource`], a [`Screen`] and a
//! [`SettingsStore`]. Every prompt redraws the table followed by the menu
//! line and loops until it gets a key it understands.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{info, warn};

use crate::error::{PlayError, SettingsError};
use crate::game::{Game, GameState};
use crate::render::render_table;
use crate::store::{SettingsStore, load_or_default};

const INSURANCE_PROMPT: &str = " Insurance?  (Y) Yes (N) No\n";
const BET_OPTIONS_PROMPT: &str = " (D) Deal Hand  (B) Change Bet  (O) Options  (Q) Quit\n";
const NEW_BET_PROMPT: &str = " (1) $5  (2) $10  (3) $25  (4) $100\n";
const GAME_OPTIONS_PROMPT: &str = " (N) Number of Decks  (T) Deck Type  (F) Face Type  (B) Back\n";
const DECK_TYPE_PROMPT: &str =
    " (1) Regular  (2) Aces  (3) Jacks  (4) Aces & Jacks  (5) Sevens  (6) Eights\n";
const FACE_STYLE_PROMPT: &str = " (1) A♠  (2) 🂡\n";

/// Supplies one key per prompt.
pub trait KeySource {
    /// Blocks for the next key. Returns `None` once input is closed.
    fn read_key(&mut self) -> Option<char>;
}

/// Receives fully formatted frames to show the player.
pub trait Screen {
    /// Replaces whatever is on screen with `frame`.
    fn show(&mut self, frame: &str);
}

/// Keys queued up front, for scripted sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    /// Queues every character of `keys`.
    #[must_use]
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }

    /// Returns how many keys have not been read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Option<char> {
        self.keys.pop_front()
    }
}

/// Records every frame shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedScreen {
    frames: Vec<String>,
}

impl CapturedScreen {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Returns every frame in the order shown.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Returns the most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Screen for CapturedScreen {
    fn show(&mut self, frame: &str) {
        self.frames.push(String::from(frame));
    }
}

#[cfg(feature = "std")]
pub use terminal::{StdinKeys, TerminalScreen};

#[cfg(feature = "std")]
mod terminal {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use std::io::{self, BufRead, Write};

    use super::{KeySource, Screen};

    /// Reads keys from standard input, skipping whitespace.
    #[derive(Debug, Default)]
    pub struct StdinKeys {
        pending: VecDeque<char>,
    }

    impl StdinKeys {
        /// Creates a reader over standard input.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeySource for StdinKeys {
        fn read_key(&mut self) -> Option<char> {
            loop {
                if let Some(key) = self.pending.pop_front() {
                    if key.is_whitespace() {
                        continue;
                    }
                    return Some(key);
                }

                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) | Err(_) => return None,
                    Ok(_) => self.pending.extend(line.chars()),
                }
            }
        }
    }

    /// Clears the terminal and prints each frame to standard output.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct TerminalScreen;

    impl Screen for TerminalScreen {
        fn show(&mut self, frame: &str) {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "\x1b[H\x1b[2J{frame}");
            let _ = stdout.flush();
        }
    }
}

/// Runs rounds against a player reached through keys and a screen.
#[derive(Debug)]
pub struct Console<K, S, T> {
    game: Game,
    keys: K,
    screen: S,
    store: T,
}

impl<K: KeySource, S: Screen, T: SettingsStore> Console<K, S, T> {
    /// Creates a console around an existing game.
    pub const fn new(game: Game, keys: K, screen: S, store: T) -> Self {
        Self {
            game,
            keys,
            screen,
            store,
        }
    }

    /// Creates a console whose game starts from the settings in `store`, or
    /// the defaults if they cannot be loaded.
    pub fn load(keys: K, screen: S, mut store: T, seed: u64) -> Self {
        let settings = load_or_default(&mut store);
        info!(%settings, "settings loaded");
        Self::new(Game::new(settings, seed), keys, screen, store)
    }

    /// Returns the game.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the key source.
    pub const fn keys(&self) -> &K {
        &self.keys
    }

    /// Returns the screen.
    pub const fn screen(&self) -> &S {
        &self.screen
    }

    /// Returns the settings store.
    pub const fn store(&self) -> &T {
        &self.store
    }

    /// Plays rounds until the player quits or input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a step, which only happens when
    /// the shoe runs out in the middle of a round.
    pub fn run(&mut self) -> Result<(), PlayError> {
        match self.session() {
            Err(PlayError::InputClosed) => {
                info!("input closed; ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn session(&mut self) -> Result<(), PlayError> {
        loop {
            self.play_round()?;
            if !self.bet_options()? {
                info!(money = self.game.money(), "player quit");
                return Ok(());
            }
        }
    }

    /// Deals one round and prompts for every decision until it is settled,
    /// then saves the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if input closes mid-round or the engine rejects a
    /// step.
    pub fn play_round(&mut self) -> Result<(), PlayError> {
        if self.game.money() == 0 {
            warn!("bankroll exhausted; restoring the default bankroll");
            self.game.settings = self.game.settings.sanitized();
        }

        self.game.deal()?;

        if self.game.is_insurance_offered() {
            self.ask_insurance()?;
        }

        while self.game.state() == GameState::PlayerTurn {
            self.player_action()?;
        }

        self.save();
        Ok(())
    }

    fn show(&mut self, prompt: &str) {
        let mut frame = render_table(&self.game);
        frame.push_str(prompt);
        self.screen.show(&frame);
    }

    fn key(&mut self) -> Result<char, PlayError> {
        self.keys
            .read_key()
            .map(|key| key.to_ascii_lowercase())
            .ok_or(PlayError::InputClosed)
    }

    fn digit(&mut self) -> Result<Option<u8>, PlayError> {
        Ok(self.key()?.to_digit(10).map(|digit| digit as u8))
    }

    fn save(&mut self) {
        if let Err(err) = self.store.save(&self.game.settings) {
            warn!(%err, "failed to save settings");
        }
    }

    fn ask_insurance(&mut self) -> Result<(), PlayError> {
        loop {
            self.show(INSURANCE_PROMPT);
            match self.key()? {
                'y' => {
                    self.game.take_insurance()?;
                    return Ok(());
                }
                'n' => {
                    self.game.decline_insurance()?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn player_action(&mut self) -> Result<(), PlayError> {
        let mut prompt = String::from(" (H) Hit  (S) Stand  ");
        if self.game.can_split() {
            prompt.push_str("(P) Split  ");
        }
        if self.game.can_double() {
            prompt.push_str("(D) Double");
        }
        prompt.push('\n');

        loop {
            self.show(&prompt);
            match self.key()? {
                'h' if self.game.can_hit() => {
                    self.game.hit()?;
                    return Ok(());
                }
                's' if self.game.can_stand() => {
                    self.game.stand()?;
                    return Ok(());
                }
                'p' if self.game.can_split() => {
                    self.game.split()?;
                    return Ok(());
                }
                'd' if self.game.can_double() => {
                    self.game.double_down()?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Between-round menu. Returns `false` when the player quits.
    fn bet_options(&mut self) -> Result<bool, PlayError> {
        loop {
            self.show(BET_OPTIONS_PROMPT);
            match self.key()? {
                'd' => return Ok(true),
                'b' => {
                    self.new_bet()?;
                    return Ok(true);
                }
                'o' => {
                    if self.game_options()? {
                        return Ok(true);
                    }
                }
                'q' => return Ok(false),
                _ => {}
            }
        }
    }

    /// Options menu. Returns `true` when a choice should deal the next round
    /// and `false` when the player backs out to the bet menu.
    fn game_options(&mut self) -> Result<bool, PlayError> {
        loop {
            self.show(GAME_OPTIONS_PROMPT);
            match self.key()? {
                'n' => self.new_num_decks()?,
                't' => {
                    self.new_deck_type()?;
                    return Ok(true);
                }
                'f' => {
                    self.new_face_style()?;
                    return Ok(true);
                }
                'b' => return Ok(false),
                _ => {}
            }
        }
    }

    fn new_bet(&mut self) -> Result<(), PlayError> {
        loop {
            self.show(NEW_BET_PROMPT);
            let choice = self.key()?;
            match self.game.set_bet_choice(choice) {
                Ok(_) => {
                    self.save();
                    return Ok(());
                }
                Err(SettingsError::InvalidBetChoice(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn new_num_decks(&mut self) -> Result<(), PlayError> {
        loop {
            let prompt = alloc::format!(
                " Number of Decks: {}  Enter New Number of Decks (1-8): ",
                self.game.settings.num_decks
            );
            self.show(&prompt);

            if let Some(decks) = self.digit()? {
                self.game.set_num_decks(decks)?;
                self.save();
                return Ok(());
            }
        }
    }

    fn new_deck_type(&mut self) -> Result<(), PlayError> {
        loop {
            self.show(DECK_TYPE_PROMPT);
            let Some(selector) = self.digit()? else {
                continue;
            };

            match self.game.set_deck_type(selector) {
                Ok(_) => {
                    self.save();
                    return Ok(());
                }
                Err(SettingsError::InvalidDeckType(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn new_face_style(&mut self) -> Result<(), PlayError> {
        loop {
            self.show(FACE_STYLE_PROMPT);
            let Some(selector) = self.digit()? else {
                continue;
            };

            match self.game.set_face_style(selector) {
                Ok(_) => {
                    self.save();
                    return Ok(());
                }
                Err(SettingsError::InvalidFaceStyle(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }
}
