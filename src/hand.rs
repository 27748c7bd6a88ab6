//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::MAX_PLAYER_HANDS;

/// How Aces are counted when totalling a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountMethod {
    /// One Ace may count as 11 when that does not bust the hand.
    Soft,
    /// Every Ace counts as 1.
    Hard,
}

fn count_cards(cards: &[Card], method: CountMethod, skip: Option<usize>) -> u8 {
    let mut total: u8 = 0;

    for (index, card) in cards.iter().enumerate() {
        if skip == Some(index) {
            continue;
        }

        let mut value = card.value();
        if method == CountMethod::Soft && value == 1 && total < 11 {
            value = 11;
        }
        total = total.saturating_add(value);
    }

    if method == CountMethod::Soft && total > 21 {
        return count_cards(cards, CountMethod::Hard, skip);
    }

    total
}

/// Settlement status of a player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandStatus {
    /// Not settled yet.
    #[default]
    Unknown,
    /// Beat the dealer.
    Won,
    /// Busted, insured or beaten by the dealer.
    Lost,
    /// Tied with the dealer.
    Push,
}

/// Cards dealt so far plus the stood/played flags shared by both sides of
/// the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    stood: bool,
    played: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            stood: false,
            played: false,
        }
    }

    /// Creates a hand holding a single card.
    #[must_use]
    pub fn with_card(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            stood: false,
            played: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Totals the hand.
    ///
    /// A soft count that would exceed 21 falls back to the hard count, so a
    /// soft total above 21 is only reported when the hard total is too.
    #[must_use]
    pub fn value(&self, method: CountMethod) -> u8 {
        count_cards(&self.cards, method, None)
    }

    /// Totals the hand while leaving out the card at `skip`.
    #[must_use]
    pub fn value_without(&self, method: CountMethod, skip: usize) -> u8 {
        count_cards(&self.cards, method, Some(skip))
    }

    /// Returns whether the hand is a natural: exactly two cards, an Ace and a
    /// ten-valued card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value(CountMethod::Soft) == 21
    }

    /// Returns whether the hand has gone over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value(CountMethod::Soft) > 21
    }

    /// Returns whether the hand has stood.
    #[must_use]
    pub const fn stood(&self) -> bool {
        self.stood
    }

    /// Returns whether the hand has finished playing.
    #[must_use]
    pub const fn played(&self) -> bool {
        self.played
    }

    /// Marks the hand as finished.
    pub const fn set_played(&mut self, played: bool) {
        self.played = played;
    }

    /// Marks the hand as stood, which also finishes it.
    pub const fn stand(&mut self) {
        self.stood = true;
        self.played = true;
    }
}

/// A player's hand: cards plus the bet riding on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    hand: Hand,
    /// Bet in minor currency units.
    bet: usize,
    status: HandStatus,
    paid: bool,
}

impl PlayerHand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            hand: Hand::new(),
            bet,
            status: HandStatus::Unknown,
            paid: false,
        }
    }

    /// Creates the sibling hand produced by a split.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            hand: Hand::with_card(card),
            bet,
            status: HandStatus::Unknown,
            paid: false,
        }
    }

    /// Returns the underlying cards and flags.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the settlement status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand has been settled against the bankroll.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.paid
    }

    /// Returns whether the hand has finished playing.
    #[must_use]
    pub const fn played(&self) -> bool {
        self.hand.played()
    }

    /// Returns whether the hand has stood.
    #[must_use]
    pub const fn stood(&self) -> bool {
        self.hand.stood()
    }

    /// Totals the hand.
    #[must_use]
    pub fn value(&self, method: CountMethod) -> u8 {
        self.hand.value(method)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand has gone over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Checks whether the hand can take more actions and finishes it if not.
    ///
    /// A hand is done once it has been played or stood, or it is a natural,
    /// busted, or totals 21 either way. A busted hand is settled on the spot:
    /// it is marked lost and paid, and its bet leaves `money` before the
    /// dealer plays.
    pub fn resolve_done(&mut self, money: &mut usize) -> bool {
        let done = self.hand.played()
            || self.hand.stood()
            || self.is_blackjack()
            || self.is_busted()
            || self.value(CountMethod::Soft) == 21
            || self.value(CountMethod::Hard) == 21;

        if !done {
            return false;
        }

        self.hand.set_played(true);

        if !self.paid && self.is_busted() {
            self.settle(HandStatus::Lost);
            *money = money.saturating_sub(self.bet);
        }

        true
    }

    /// Returns whether the hand may draw another card.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        !(self.hand.played()
            || self.hand.stood()
            || self.value(CountMethod::Hard) == 21
            || self.is_blackjack()
            || self.is_busted())
    }

    /// Returns whether the hand may stand.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        !(self.hand.stood() || self.is_busted() || self.is_blackjack())
    }

    /// Returns whether the hand may be split.
    ///
    /// Requires a pair of equal rank, room for another hand at the table, and
    /// enough `money` to cover every bet already out plus one more of this
    /// hand's size.
    #[must_use]
    pub fn can_split(&self, money: usize, all_bets: usize, hand_count: usize) -> bool {
        if self.hand.stood() || hand_count >= MAX_PLAYER_HANDS {
            return false;
        }

        if !self.can_cover(money, all_bets) {
            return false;
        }

        let cards = self.hand.cards();
        cards.len() == 2 && cards[0].rank == cards[1].rank
    }

    /// Returns whether the hand may double down.
    #[must_use]
    pub fn can_double(&self, money: usize, all_bets: usize) -> bool {
        if self.hand.stood() || self.hand.len() != 2 || !self.can_cover(money, all_bets) {
            return false;
        }

        !(self.is_busted() || self.is_blackjack())
    }

    const fn can_cover(&self, money: usize, all_bets: usize) -> bool {
        money >= all_bets + self.bet
    }

    /// Marks the hand as stood.
    pub const fn stand(&mut self) {
        self.hand.stand();
    }

    /// Doubles the bet and finishes the hand.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.hand.set_played(true);
    }

    /// Sets the bet amount.
    pub const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    /// Finishes the hand with `status` and marks it paid.
    pub const fn settle(&mut self, status: HandStatus) {
        self.hand.set_played(true);
        self.status = status;
        self.paid = true;
    }

    /// Splits a pair, keeping the first card and returning the second.
    ///
    /// Returns `None` unless the hand holds exactly two cards.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.hand.len() == 2 {
            self.hand.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hide_hole_card: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand with the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hide_hole_card: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the up card is an Ace.
    #[must_use]
    pub fn upcard_is_ace(&self) -> bool {
        self.up_card().is_some_and(|card| card.is_ace())
    }

    /// Returns whether the hole card is still hidden.
    #[must_use]
    pub const fn is_hole_hidden(&self) -> bool {
        self.hide_hole_card
    }

    /// Reveals the hole card. Once shown it stays shown.
    pub const fn reveal_hole(&mut self) {
        self.hide_hole_card = false;
    }

    /// Totals the hand, leaving out the hole card while it is hidden.
    #[must_use]
    pub fn value(&self, method: CountMethod) -> u8 {
        if self.hide_hole_card {
            self.hand.value_without(method, 1)
        } else {
            self.hand.value(method)
        }
    }

    /// Returns whether the dealer's first two cards are a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the dealer has gone over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value(CountMethod::Soft) > 21
    }

    /// Returns whether the dealer must draw: soft total under 18 and hard
    /// total under 17.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        self.value(CountMethod::Soft) < 18 && self.value(CountMethod::Hard) < 17
    }

    /// Returns whether the dealer has finished playing.
    #[must_use]
    pub const fn played(&self) -> bool {
        self.hand.played()
    }

    /// Marks the dealer as finished.
    pub const fn set_played(&mut self) {
        self.hand.set_played(true);
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
