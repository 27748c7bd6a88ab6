//! A single-player casino blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the shoe, the dealer hand and
//! the player's (possibly split) hands, and walks a round from the deal through
//! insurance, player decisions, dealer play and settlement. The [`Console`]
//! driver wires a [`Game`] to a key source, a screen and a settings store.
//!
//! # Example
//!
//! ```no_run
//! use shoebox::{Game, Settings};
//!
//! let mut game = Game::new(Settings::default(), 42);
//! game.deal().ok();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod error;
pub mod face;
pub mod game;
pub mod hand;
pub mod options;
pub mod render;
pub mod result;
pub mod shoe;
pub mod store;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::{CapturedScreen, Console, KeySource, Screen, ScriptedKeys};
#[cfg(feature = "std")]
pub use console::{StdinKeys, TerminalScreen};
pub use error::{
    ActionError, DealError, EmptyShoe, InsuranceError, ParseSettingsError, PlayError,
    SettingsError, StoreError,
};
pub use face::FaceStyle;
pub use game::{Game, GameState};
pub use hand::{CountMethod, DealerHand, Hand, HandStatus, PlayerHand};
pub use options::{DEFAULT_MONEY, MAX_BET, MAX_PLAYER_HANDS, MIN_BET, Settings};
pub use render::{format_money, render_table};
pub use result::{HandResult, RoundResult};
pub use shoe::{DeckType, Shoe};
#[cfg(feature = "std")]
pub use store::{FileStore, SAVE_FILE};
pub use store::{MemoryStore, SettingsStore, load_or_default};
