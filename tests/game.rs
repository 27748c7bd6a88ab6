//! Round flow integration tests.

use shoebox::{
    ActionError, Card, CountMethod, DealError, Game, GameState, HandStatus, InsuranceError,
    SettingsError, Settings, Shoe, Suit, render_table,
};

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

const ACE: u8 = 0;
const TEN: u8 = 9;
const KING: u8 = 12;

/// Ranks are zero based, so the two is rank 1 and the nine is rank 8.
const fn pip(value: u8) -> u8 {
    value - 1
}

fn game_with(settings: Settings, draws: &[Card]) -> Game {
    Game::with_shoe(settings, Shoe::stacked(draws.to_vec()))
}

#[test]
fn natural_pays_three_to_two_without_dealer_draw() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(ACE, Suit::Spades), // player
            card(TEN, Suit::Hearts), // dealer up
            card(KING, Suit::Clubs), // player
            card(pip(9), Suit::Diamonds), // dealer hole
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);

    let hand = &game.player_hands()[0];
    assert!(hand.is_blackjack());
    assert_eq!(hand.status(), HandStatus::Won);
    assert_eq!(hand.bet(), 750);
    assert_eq!(game.money(), 10_750);

    let result = game.round_result().unwrap();
    assert_eq!(result.net, 750);
    assert_eq!(result.dealer_value, 19);
    assert!(!result.dealer_bust);
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn bust_is_settled_before_the_dealer_plays() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts), // player
            card(pip(9), Suit::Clubs), // dealer up
            card(pip(6), Suit::Spades), // player
            card(pip(7), Suit::Diamonds), // dealer hole
            card(KING, Suit::Hearts), // player hit
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn.rank, KING);

    let hand = &game.player_hands()[0];
    assert!(hand.is_busted());
    assert!(hand.is_paid());
    assert_eq!(hand.status(), HandStatus::Lost);
    assert_eq!(game.money(), 9_500);
    assert_eq!(game.state(), GameState::RoundOver);

    // Dealer 16 does not draw: nothing is left to decide.
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(game.dealer_hand().is_hole_hidden());
    assert_eq!(game.round_result().unwrap().net, -500);
    assert!(render_table(&game).contains(" 9♣ ??  ⇒  9\n"));
}

#[test]
fn dealer_natural_is_shown_after_a_bust() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts), // player
            card(TEN, Suit::Clubs), // dealer up
            card(pip(6), Suit::Spades), // player
            card(ACE, Suit::Diamonds), // dealer hole
            card(KING, Suit::Hearts), // player hit
        ],
    );

    game.deal().unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(game.dealer_hand().value(CountMethod::Soft), 21);
    assert!(game.round_result().unwrap().dealer_blackjack);
    assert_eq!(game.money(), 9_500);
}

#[test]
fn naturals_on_both_sides_push() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(ACE, Suit::Spades), // player
            card(KING, Suit::Hearts), // dealer up
            card(TEN, Suit::Clubs), // player
            card(ACE, Suit::Diamonds), // dealer hole
        ],
    );

    game.deal().unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(game.player_hands()[0].status(), HandStatus::Push);
    assert_eq!(game.player_hands()[0].bet(), 500);
    assert_eq!(game.money(), 10_000);
}

#[test]
fn split_eights_play_as_independent_hands() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(8), Suit::Spades), // player
            card(pip(5), Suit::Clubs), // dealer up
            card(pip(8), Suit::Hearts), // player
            card(TEN, Suit::Diamonds), // dealer hole
            card(pip(3), Suit::Clubs), // first split hand
            card(pip(2), Suit::Hearts), // second split hand
            card(KING, Suit::Spades), // dealer draw
        ],
    );

    game.deal().unwrap();
    assert!(game.can_split());
    game.split().unwrap();

    let hands = game.player_hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(
        hands[0].cards(),
        &[card(pip(8), Suit::Spades), card(pip(3), Suit::Clubs)]
    );
    assert_eq!(hands[1].cards(), &[card(pip(8), Suit::Hearts)]);
    assert_eq!(hands[1].bet(), 500);
    assert_eq!(game.all_bets(), 1_000);
    assert_eq!(game.current_hand_index(), 0);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_hand_index(), 1);
    assert_eq!(game.player_hands()[1].value(CountMethod::Soft), 10);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.round_result().unwrap();
    assert!(result.dealer_bust);
    assert!(result.hands.iter().all(|hand| hand.status == HandStatus::Won));
    assert_eq!(game.money(), 11_000);
    assert_eq!(result.net, 1_000);
}

#[test]
fn split_aces_finish_on_twenty_one_and_deal_the_sibling() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(ACE, Suit::Spades), // player
            card(pip(5), Suit::Clubs), // dealer up
            card(ACE, Suit::Hearts), // player
            card(pip(6), Suit::Diamonds), // dealer hole
            card(KING, Suit::Clubs), // first split hand reaches 21
            card(pip(9), Suit::Hearts), // second split hand
            card(pip(7), Suit::Spades), // dealer draw
        ],
    );

    game.deal().unwrap();
    game.split().unwrap();

    // The first hand is done, so play moves straight to its sibling.
    assert_eq!(game.current_hand_index(), 1);
    assert_eq!(game.player_hands()[1].value(CountMethod::Soft), 20);

    game.stand().unwrap();
    assert_eq!(game.dealer_hand().value(CountMethod::Soft), 18);

    let hands = game.player_hands();
    assert_eq!(hands[0].status(), HandStatus::Won);
    assert_eq!(hands[0].bet(), 750);
    assert_eq!(hands[1].status(), HandStatus::Won);
    assert_eq!(game.money(), 11_250);
}

#[test]
fn split_requires_bankroll_to_cover_every_bet() {
    let mut game = game_with(
        Settings::default().with_money(900),
        &[
            card(pip(8), Suit::Spades),
            card(pip(5), Suit::Clubs),
            card(pip(8), Suit::Hearts),
            card(TEN, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    assert!(!game.can_split());
    assert!(!game.can_double());
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.player_hands().len(), 1);
}

#[test]
fn double_down_draws_one_card_and_doubles_the_bet() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(5), Suit::Hearts), // player
            card(pip(6), Suit::Clubs), // dealer up
            card(pip(6), Suit::Diamonds), // player
            card(TEN, Suit::Spades), // dealer hole
            card(TEN, Suit::Hearts), // double draw
            card(pip(9), Suit::Clubs), // dealer draw
        ],
    );

    game.deal().unwrap();
    assert!(game.can_double());

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, TEN);
    assert_eq!(game.state(), GameState::RoundOver);

    let hand = &game.player_hands()[0];
    assert_eq!(hand.bet(), 1_000);
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.status(), HandStatus::Won);
    assert!(game.round_result().unwrap().dealer_bust);
    assert_eq!(game.money(), 11_000);
}

#[test]
fn dealer_draws_until_soft_eighteen_or_hard_seventeen() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts), // player
            card(TEN, Suit::Clubs), // dealer up
            card(pip(9), Suit::Spades), // player
            card(pip(2), Suit::Diamonds), // dealer hole
            card(pip(4), Suit::Hearts), // dealer: 16
            card(pip(4), Suit::Clubs), // dealer: 20, stops
            card(pip(4), Suit::Spades),
            card(ACE, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(game.dealer_hand().value(CountMethod::Soft), 20);
    assert_eq!(game.cards_remaining(), 2);
    assert_eq!(game.player_hands()[0].status(), HandStatus::Lost);
    assert_eq!(game.money(), 9_500);
}

#[test]
fn dealer_hits_soft_seventeen() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts), // player
            card(pip(6), Suit::Clubs), // dealer up
            card(pip(8), Suit::Spades), // player
            card(ACE, Suit::Diamonds), // dealer hole: soft 17
            card(pip(4), Suit::Hearts), // dealer: soft 21
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();

    let dealer = game.dealer_hand();
    assert_eq!(dealer.len(), 3);
    assert_eq!(dealer.value(CountMethod::Soft), 21);
    assert_eq!(game.player_hands()[0].status(), HandStatus::Lost);
}

#[test]
fn equal_totals_push() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts),
            card(KING, Suit::Clubs),
            card(KING, Suit::Spades),
            card(TEN, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();

    assert_eq!(game.player_hands()[0].status(), HandStatus::Push);
    assert_eq!(game.money(), 10_000);
    assert_eq!(game.round_result().unwrap().net, 0);
}

#[test]
fn insurance_forfeits_half_the_bet() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(9), Suit::Hearts), // player
            card(ACE, Suit::Spades), // dealer up
            card(pip(7), Suit::Diamonds), // player
            card(TEN, Suit::Clubs), // dealer hole
        ],
    );

    game.deal().unwrap();
    assert!(game.is_insurance_offered());
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    game.take_insurance().unwrap();

    let hand = &game.player_hands()[0];
    assert_eq!(hand.bet(), 250);
    assert_eq!(hand.status(), HandStatus::Lost);
    assert!(hand.is_paid());
    assert_eq!(game.money(), 9_750);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn declined_insurance_settles_dealer_blackjack() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(9), Suit::Hearts),
            card(ACE, Suit::Spades),
            card(pip(7), Suit::Diamonds),
            card(TEN, Suit::Clubs),
        ],
    );

    game.deal().unwrap();
    assert!(game.dealer_hand().is_hole_hidden());
    assert_eq!(game.dealer_hand().value(CountMethod::Soft), 11);

    assert!(game.decline_insurance().unwrap());
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player_hands()[0].status(), HandStatus::Lost);
    assert_eq!(game.money(), 9_500);
    assert!(game.round_result().unwrap().dealer_blackjack);
}

#[test]
fn declined_insurance_continues_play() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(7), Suit::Hearts),
            card(ACE, Suit::Spades),
            card(pip(8), Suit::Clubs),
            card(pip(9), Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    assert!(!game.decline_insurance().unwrap());
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.decline_insurance().unwrap_err(),
        InsuranceError::InvalidState
    );
}

#[test]
fn deal_errors() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(9), Suit::Hearts),
            card(pip(5), Suit::Clubs),
            card(pip(7), Suit::Diamonds),
        ],
    );
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);

    let mut broke = game_with(
        Settings::default().with_money(0).with_bet(0),
        &[card(pip(9), Suit::Hearts); 4],
    );
    assert_eq!(broke.deal().unwrap_err(), DealError::InsufficientFunds);

    let mut playing = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Hearts),
            card(pip(9), Suit::Clubs),
            card(pip(6), Suit::Spades),
            card(pip(7), Suit::Diamonds),
        ],
    );
    playing.deal().unwrap();
    assert_eq!(playing.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(playing.set_bet(1_000).unwrap_err(), SettingsError::InvalidState);
}

#[test]
fn empty_shoe_is_rebuilt_before_the_deal() {
    let mut game = Game::with_shoe(Settings::default(), Shoe::stacked(Vec::new()));

    game.deal().unwrap();
    assert_eq!(game.shoe.total_cards(), 52);
    assert!(game.cards_remaining() <= 48);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(pip(5), Suit::Hearts),
            card(pip(9), Suit::Clubs),
            card(pip(6), Suit::Spades),
            card(pip(7), Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards(shoebox::EmptyShoe));
    assert_eq!(game.player_hands()[0].len(), 2);
}

#[test]
fn bet_changes_are_clamped() {
    let mut game = Game::new(Settings::default().with_money(2_000), 3);

    assert_eq!(game.set_bet_choice('2').unwrap(), 1_000);
    assert_eq!(game.set_bet_choice('4').unwrap(), 2_000);
    assert_eq!(
        game.set_bet_choice('7').unwrap_err(),
        SettingsError::InvalidBetChoice('7')
    );
    assert_eq!(game.set_bet(100).unwrap(), 500);
}

#[test]
fn deck_changes_rebuild_the_shoe() {
    let mut game = Game::new(Settings::default(), 9);

    assert_eq!(game.set_num_decks(3).unwrap(), 3);
    assert_eq!(game.shoe.len(), 156);
    assert_eq!(game.set_num_decks(0).unwrap(), 1);

    game.set_deck_type(2).unwrap();
    assert_eq!(game.settings.num_decks, 8);
    assert_eq!(game.shoe.len(), 416);
    assert!(game.shoe.cards().all(|card| card.is_ace()));

    assert_eq!(
        game.set_deck_type(7).unwrap_err(),
        SettingsError::InvalidDeckType(7)
    );
    assert_eq!(
        game.set_face_style(3).unwrap_err(),
        SettingsError::InvalidFaceStyle(3)
    );
}

#[test]
fn table_renders_hidden_hole_and_current_hand() {
    let mut game = game_with(
        Settings::default(),
        &[
            card(TEN, Suit::Spades),
            card(pip(9), Suit::Hearts),
            card(pip(7), Suit::Clubs),
            card(pip(8), Suit::Diamonds),
        ],
    );

    game.deal().unwrap();

    assert_eq!(
        render_table(&game),
        "\n Dealer:\n 9♥ ??  ⇒  9\n\n Player $100.00:\n T♠ 7♣  ⇒  17 $5.00 ⇐ \n\n"
    );

    game.stand().unwrap();
    let table = render_table(&game);
    assert!(table.contains(" 9♥ 8♦  ⇒  17\n"));
    assert!(table.contains("Push!"));
    assert!(!table.contains('⇐'));
}

#[test]
fn table_marks_wins_and_losses() {
    let mut game = game_with(
        Settings::default().with_face_style(shoebox::FaceStyle::Unicode),
        &[
            card(ACE, Suit::Spades),
            card(TEN, Suit::Hearts),
            card(KING, Suit::Clubs),
            card(pip(9), Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    let table = render_table(&game);
    assert!(table.contains("🂡 🃎"));
    assert!(table.contains("+$7.50 Blackjack!"));
    assert!(table.contains("Player $107.50"));
}
