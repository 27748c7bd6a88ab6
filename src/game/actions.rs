use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, EmptyShoe};
use crate::hand::{CountMethod, PlayerHand};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<&PlayerHand, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.player_hands
            .get(self.current_hand)
            .ok_or(ActionError::InvalidState)
    }

    /// Returns whether the current hand may hit.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.ensure_player_turn().is_ok_and(PlayerHand::can_hit)
    }

    /// Returns whether the current hand may stand.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.ensure_player_turn().is_ok_and(PlayerHand::can_stand)
    }

    /// Returns whether the current hand may be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.ensure_player_turn().is_ok_and(|hand| {
            hand.can_split(self.settings.money, self.all_bets(), self.player_hands.len())
        })
    }

    /// Returns whether the current hand may double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.ensure_player_turn()
            .is_ok_and(|hand| hand.can_double(self.settings.money, self.all_bets()))
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that busts or reaches 21 finishes, and play moves on to the next
    /// hand or to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no player decision is pending, the hand cannot
    /// take a card, or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if !self.ensure_player_turn()?.can_hit() {
            return Err(ActionError::CannotHit);
        }

        let card = self.draw()?;
        let hand = &mut self.player_hands[self.current_hand];
        hand.add_card(card);

        if hand.resolve_done(&mut self.settings.money) {
            self.next_hand()?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no player decision is pending, the hand cannot
    /// stand, or the shoe runs out while the dealer plays.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if !self.ensure_player_turn()?.can_stand() {
            return Err(ActionError::CannotStand);
        }

        self.player_hands[self.current_hand].stand();
        self.next_hand()?;

        Ok(())
    }

    /// Player action: Double down (double bet, receive exactly one card).
    ///
    /// # Errors
    ///
    /// Returns an error if no player decision is pending, the hand is not
    /// eligible to double down, or the shoe is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        if !self.can_double() {
            self.ensure_player_turn()?;
            return Err(ActionError::CannotDouble);
        }

        let card = self.draw()?;
        let hand = &mut self.player_hands[self.current_hand];
        hand.add_card(card);
        hand.double_bet();
        hand.resolve_done(&mut self.settings.money);

        debug!(bet = hand.bet(), value = hand.value(CountMethod::Soft), "doubled down");
        self.next_hand()?;

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The current hand keeps its first card and draws a new second card. The
    /// other card starts a sibling hand with the same bet, placed right after
    /// the current hand; it gets its second card when its turn comes.
    ///
    /// # Errors
    ///
    /// Returns an error if no player decision is pending, the hand cannot be
    /// split, or the shoe is empty.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if !self.can_split() {
            self.ensure_player_turn()?;
            return Err(ActionError::CannotSplit);
        }

        let drawn = self.draw()?;
        let index = self.current_hand;
        let hand = &mut self.player_hands[index];
        let bet = hand.bet();
        let split_card = hand.take_split_card().ok_or(ActionError::CannotSplit)?;
        hand.add_card(drawn);

        self.player_hands
            .insert(index + 1, PlayerHand::from_split(split_card, bet));

        debug!(hands = self.player_hands.len(), bet, "split hand");

        if self.player_hands[index].resolve_done(&mut self.settings.money) {
            self.next_hand()?;
        }

        Ok(())
    }

    /// Moves past finished hands, dealing each waiting split hand its second
    /// card. Hands the dealer once no hand is left to play.
    pub(super) fn next_hand(&mut self) -> Result<(), EmptyShoe> {
        while self.more_hands_to_play() {
            self.current_hand += 1;

            if self.player_hands[self.current_hand].len() < 2 {
                let card = self.draw()?;
                self.player_hands[self.current_hand].add_card(card);
            }

            if !self.player_hands[self.current_hand].resolve_done(&mut self.settings.money) {
                self.state = GameState::PlayerTurn;
                return Ok(());
            }
        }

        self.play_dealer_hand()
    }
}
