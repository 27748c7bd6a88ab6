use tracing::debug;

use crate::error::InsuranceError;
use crate::hand::HandStatus;

use super::{Game, GameState};

impl Game {
    /// Returns whether insurance is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::Insurance
    }

    /// Takes insurance.
    ///
    /// Insurance forfeits half of the hand's bet whatever the hole card turns
    /// out to be: the bet is halved, the hand is marked lost and paid, and the
    /// round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn take_insurance(&mut self) -> Result<(), InsuranceError> {
        if self.state != GameState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        let hand = &mut self.player_hands[self.current_hand];
        hand.set_bet(hand.bet() / 2);
        hand.settle(HandStatus::Lost);
        self.settings.money = self.settings.money.saturating_sub(hand.bet());

        debug!(forfeited = hand.bet(), "insurance taken");

        self.dealer_hand.reveal_hole();
        self.dealer_hand.set_played();
        self.pay_hands();

        Ok(())
    }

    /// Declines insurance.
    ///
    /// If the dealer holds a natural it is revealed and the round settles at
    /// once. Otherwise play continues with the player's hand, or goes straight
    /// to the dealer if that hand is already done.
    ///
    /// Returns `true` if the dealer has blackjack.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered or the shoe runs
    /// out while the dealer plays.
    pub fn decline_insurance(&mut self) -> Result<bool, InsuranceError> {
        if self.state != GameState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        if self.dealer_hand.is_blackjack() {
            debug!("dealer has blackjack");
            self.dealer_hand.reveal_hole();
            self.dealer_hand.set_played();
            self.pay_hands();
            return Ok(true);
        }

        if self.player_hands[self.current_hand].resolve_done(&mut self.settings.money) {
            self.play_dealer_hand()?;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(false)
    }
}
