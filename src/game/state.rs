//! Game state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    WaitingForDeal,
    /// The dealer shows an Ace and the player must decide on insurance.
    Insurance,
    /// Waiting for a decision on the current player hand.
    PlayerTurn,
    /// Every hand is settled; the table still shows the finished round.
    RoundOver,
}

impl GameState {
    /// Returns whether no round is in progress, so a new one may be dealt and
    /// settings may change.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::WaitingForDeal | Self::RoundOver)
    }
}
