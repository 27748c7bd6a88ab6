//! Error types for game operations.

use thiserror::Error;

/// A draw found the shoe empty.
///
/// The shoe is rebuilt between rounds once it passes its penetration limit,
/// so this only surfaces when a round outlasts the cards left in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoe;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The bankroll cannot cover the minimum bet.
    #[error("bankroll cannot cover the bet")]
    InsufficientFunds,
    /// Not enough cards in the shoe for the initial deal.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// The shoe ran out while settling a natural.
    #[error(transparent)]
    NoCards(#[from] EmptyShoe),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Not waiting on a player decision.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The current hand cannot take a card.
    #[error("cannot hit this hand")]
    CannotHit,
    /// The current hand cannot stand.
    #[error("cannot stand on this hand")]
    CannotStand,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The shoe ran out mid-round.
    #[error(transparent)]
    NoCards(#[from] EmptyShoe),
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not being offered.
    #[error("insurance is not being offered")]
    InvalidState,
    /// The shoe ran out while the dealer played.
    #[error(transparent)]
    NoCards(#[from] EmptyShoe),
}

/// Errors that can occur when changing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Settings can only change between rounds.
    #[error("settings can only change between rounds")]
    InvalidState,
    /// Unknown bet menu choice.
    #[error("unknown bet choice {0:?}")]
    InvalidBetChoice(char),
    /// Unknown deck type selector.
    #[error("unknown deck type {0}")]
    InvalidDeckType(u8),
    /// Unknown face style selector.
    #[error("unknown face style {0}")]
    InvalidFaceStyle(u8),
}

/// Errors that can occur when parsing persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSettingsError {
    /// The line does not hold exactly five fields.
    #[error("expected five `|`-separated fields")]
    FieldCount,
    /// A field is not a non-negative integer.
    #[error("field is not a number")]
    InvalidNumber,
    /// A field is outside its allowed range.
    #[error("{0} out of range")]
    OutOfRange(&'static str),
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been saved yet.
    #[error("no saved settings")]
    NotFound,
    /// The saved line could not be parsed.
    #[error("malformed settings: {0}")]
    Malformed(#[from] ParseSettingsError),
    /// Reading or writing the backing file failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that end a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The key source has no more input.
    #[error("input closed")]
    InputClosed,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// An insurance decision failed.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// A settings change failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
