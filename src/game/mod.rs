//! Game engine and round state management.

use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{DealError, EmptyShoe};
use crate::face::FaceStyle;
use crate::hand::{CountMethod, DealerHand, PlayerHand};
use crate::options::Settings;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the shoe, the session settings (bankroll, bet, deck
/// choices) and the hands of the round in progress. A round starts with
/// [`Game::deal`] and is driven by insurance and player decisions until every
/// hand is settled and the state becomes [`GameState::RoundOver`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Session settings, including the bankroll and current bet.
    pub settings: Settings,
    state: GameState,
    /// Player hands in play order; splits insert after the hand they came from.
    player_hands: Vec<PlayerHand>,
    dealer_hand: DealerHand,
    current_hand: usize,
    money_at_deal: usize,
    round_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with a freshly built shoe shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Game, GameState, Settings};
    ///
    /// let game = Game::new(Settings::default().with_decks(2), 42);
    /// assert_eq!(game.shoe.len(), 104);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// ```
    #[must_use]
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut shoe = Shoe::new(seed);
        shoe.build(settings.deck_type, settings.num_decks);
        Self::with_shoe(settings, shoe)
    }

    /// Creates a new game that deals from `shoe` as given.
    #[must_use]
    pub fn with_shoe(settings: Settings, shoe: Shoe) -> Self {
        Self {
            shoe,
            settings,
            state: GameState::WaitingForDeal,
            player_hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_hand: 0,
            money_at_deal: settings.money,
            round_result: None,
        }
    }

    /// Starts a new round.
    ///
    /// Rebuilds the shoe first if it has passed its penetration limit, then
    /// deals two cards each to the player and the dealer, alternating and
    /// starting with the player. The round moves to insurance when the dealer
    /// shows an Ace, settles at once when the player holds a natural, and
    /// otherwise waits for the player.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet is zero or above the
    /// bankroll, or the shoe holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if !self.state.is_between_rounds() {
            return Err(DealError::InvalidState);
        }

        let bet = self.settings.current_bet;
        if bet == 0 || bet > self.settings.money {
            return Err(DealError::InsufficientFunds);
        }

        if self.shoe.need_to_shuffle() {
            self.shoe.build(self.settings.deck_type, self.settings.num_decks);
            info!(cards = self.shoe.len(), "shoe reshuffled");
        }

        if self.shoe.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        self.player_hands.clear();
        self.player_hands.push(PlayerHand::new(bet));
        self.dealer_hand = DealerHand::new();
        self.current_hand = 0;
        self.money_at_deal = self.settings.money;
        self.round_result = None;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hands[0].add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        debug!(
            bet,
            player = self.player_hands[0].value(CountMethod::Soft),
            upcard_ace = self.dealer_hand.upcard_is_ace(),
            "dealt new round"
        );

        if self.dealer_hand.upcard_is_ace() {
            self.state = GameState::Insurance;
            return Ok(());
        }

        if self.player_hands[0].resolve_done(&mut self.settings.money) {
            self.dealer_hand.reveal_hole();
            self.play_dealer_hand()?;
            return Ok(());
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, EmptyShoe> {
        self.shoe.next_card().ok_or(EmptyShoe)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the bankroll in minor currency units.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.settings.money
    }

    /// Returns the bet placed on each new round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.settings.current_bet
    }

    /// Returns the face style used for display.
    #[must_use]
    pub const fn face_style(&self) -> FaceStyle {
        self.settings.face_style
    }

    /// Returns the player's hands for the current (or last) round.
    #[must_use]
    pub fn player_hands(&self) -> &[PlayerHand] {
        &self.player_hands
    }

    /// Returns the dealer's hand for the current (or last) round.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Returns the hand being played, if a round has been dealt.
    #[must_use]
    pub fn current_hand(&self) -> Option<&PlayerHand> {
        self.player_hands.get(self.current_hand)
    }

    /// Sum of the bets on every hand in the round.
    #[must_use]
    pub fn all_bets(&self) -> usize {
        self.player_hands.iter().map(PlayerHand::bet).sum()
    }

    /// Returns whether hands after the current one are still waiting.
    #[must_use]
    pub fn more_hands_to_play(&self) -> bool {
        self.current_hand + 1 < self.player_hands.len()
    }

    /// Returns the settlement of the last finished round.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}
