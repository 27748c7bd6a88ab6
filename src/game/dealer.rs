use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::EmptyShoe;
use crate::hand::{CountMethod, HandStatus};
use crate::result::{HandResult, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Returns whether any hand can still be decided by the dealer's draw.
    ///
    /// Busted hands are already lost and naturals beat anything short of a
    /// dealer natural, which is known once the hole card is turned.
    fn need_to_play_dealer_hand(&self) -> bool {
        self.player_hands
            .iter()
            .any(|hand| !(hand.is_busted() || hand.is_blackjack()))
    }

    /// Dealer plays their hand, then every open hand is settled.
    ///
    /// The dealer draws while the soft total is under 18 and the hard total is
    /// under 17. When no player hand can be affected the dealer does not
    /// draw, and the hole card stays down unless it makes a natural.
    pub(super) fn play_dealer_hand(&mut self) -> Result<(), EmptyShoe> {
        if self.dealer_hand.is_blackjack() {
            self.dealer_hand.reveal_hole();
        }

        if self.need_to_play_dealer_hand() {
            self.dealer_hand.reveal_hole();
            while self.dealer_hand.must_draw() {
                let card = self.draw()?;
                self.dealer_hand.add_card(card);
            }
        }

        self.dealer_hand.set_played();
        debug!(
            value = self.dealer_hand.value(CountMethod::Soft),
            cards = self.dealer_hand.len(),
            "dealer finished"
        );

        self.pay_hands();
        Ok(())
    }

    /// Settles every hand not yet paid against the dealer's soft total.
    ///
    /// A dealer bust or a higher player total wins even money, or 3:2
    /// (rounded down) on a natural. A lower total loses the bet and an equal
    /// total pushes. Afterwards the bet for the next round is clamped to the
    /// table limits and the bankroll, and the round is over.
    pub(super) fn pay_hands(&mut self) {
        let dealer_value = self.dealer_hand.value(CountMethod::Soft);
        let dealer_bust = self.dealer_hand.is_busted();

        for hand in &mut self.player_hands {
            if hand.is_paid() {
                continue;
            }

            let player_value = hand.value(CountMethod::Soft);

            if dealer_bust || player_value > dealer_value {
                if hand.is_blackjack() {
                    hand.set_bet(hand.bet() * 3 / 2);
                }
                self.settings.money += hand.bet();
                hand.settle(HandStatus::Won);
            } else if player_value < dealer_value {
                self.settings.money = self.settings.money.saturating_sub(hand.bet());
                hand.settle(HandStatus::Lost);
            } else {
                hand.settle(HandStatus::Push);
            }
        }

        self.settings.normalize_bet();

        let hands: Vec<HandResult> = self
            .player_hands
            .iter()
            .enumerate()
            .map(|(hand_index, hand)| HandResult {
                hand_index,
                status: hand.status(),
                bet: hand.bet(),
                player_value: hand.value(CountMethod::Soft),
                blackjack: hand.is_blackjack(),
                busted: hand.is_busted(),
            })
            .collect();

        #[expect(clippy::cast_possible_wrap, reason = "bankroll values fit in isize")]
        let net = self.settings.money as isize - self.money_at_deal as isize;

        info!(
            hands = hands.len(),
            dealer_value,
            dealer_bust,
            net,
            money = self.settings.money,
            "round settled"
        );

        self.round_result = Some(RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            dealer_blackjack: self.dealer_hand.is_blackjack(),
            net,
        });
        self.state = GameState::RoundOver;
    }
}
