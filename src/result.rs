//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::HandStatus;

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// How the hand was settled.
    pub status: HandStatus,
    /// The final bet on the hand (doubled, halved by insurance, or raised to
    /// the blackjack payout).
    pub bet: usize,
    /// The player's soft total.
    pub player_value: u8,
    /// Whether the hand was a natural.
    pub blackjack: bool,
    /// Whether the hand busted.
    pub busted: bool,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final soft total as used for settlement.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Bankroll change over the round (positive = profit).
    pub net: isize,
}
