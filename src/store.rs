//! Persistence for [`Settings`] between sessions.
//!
//! Settings are stored as a single `decks|money|bet|deckType|faceType` line.
//! Failures never stop play: a failed load falls back to the defaults and a
//! failed save is logged and dropped.

use alloc::string::{String, ToString};

use tracing::warn;

use crate::error::StoreError;
use crate::options::Settings;

/// Somewhere settings can be loaded from and saved to.
pub trait SettingsStore {
    /// Loads previously saved settings.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing was saved, the saved data is malformed, or
    /// the backing storage cannot be read.
    fn load(&mut self) -> Result<Settings, StoreError>;

    /// Saves settings, replacing whatever was saved before.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Loads settings from `store`, falling back to the defaults on any failure.
///
/// The result is always sanitized, so a bankroll below the minimum bet comes
/// back restored to the default bankroll, and the bet is clamped to the table
/// limits and the bankroll.
pub fn load_or_default<S: SettingsStore + ?Sized>(store: &mut S) -> Settings {
    match store.load() {
        Ok(settings) => {
            let mut settings = settings.sanitized();
            settings.normalize_bet();
            settings
        }
        Err(StoreError::NotFound) => Settings::default(),
        Err(err) => {
            warn!(%err, "failed to load settings; using defaults");
            Settings::default()
        }
    }
}

/// Keeps the saved line in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    line: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { line: None }
    }

    /// Creates a store holding a raw saved line.
    #[must_use]
    pub fn with_line(line: &str) -> Self {
        Self {
            line: Some(line.to_string()),
        }
    }

    /// Returns the raw saved line, if any.
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> Result<Settings, StoreError> {
        let line = self.line.as_deref().ok_or(StoreError::NotFound)?;
        Ok(line.parse::<Settings>()?)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.line = Some(settings.to_string());
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::{FileStore, SAVE_FILE};

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::SettingsStore;
    use crate::error::StoreError;
    use crate::options::Settings;

    /// Default file name for saved settings.
    pub const SAVE_FILE: &str = "blackjack.txt";

    /// Keeps the saved line in a file.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Creates a store backed by the file at `path`.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Default for FileStore {
        fn default() -> Self {
            Self::new(SAVE_FILE)
        }
    }

    impl SettingsStore for FileStore {
        fn load(&mut self) -> Result<Settings, StoreError> {
            let contents = match fs::read_to_string(&self.path) {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(StoreError::NotFound);
                }
                Err(err) => return Err(err.into()),
            };

            let line = contents.lines().next().ok_or(StoreError::NotFound)?;
            Ok(line.parse::<Settings>()?)
        }

        fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
            fs::write(&self.path, settings.to_string())?;
            Ok(())
        }
    }
}
