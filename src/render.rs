//! Text rendering of the table.

use alloc::string::String;
use core::fmt::Write;

use crate::face::FaceStyle;
use crate::game::Game;
use crate::hand::{CountMethod, DealerHand, HandStatus, PlayerHand};

/// Formats minor currency units as major units with two decimals.
///
/// ```
/// assert_eq!(shoebox::format_money(10_050), "100.50");
/// ```
#[must_use]
pub fn format_money(minor: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}.{:02}", minor / 100, minor % 100);
    out
}

/// Renders the dealer's hand and every player hand with the bankroll.
#[must_use]
pub fn render_table(game: &Game) -> String {
    let style = game.face_style();
    let mut out = String::from("\n Dealer:\n");

    render_dealer(&mut out, game.dealer_hand(), style);
    let _ = write!(out, "\n Player ${}:\n", format_money(game.money()));

    for (index, hand) in game.player_hands().iter().enumerate() {
        let current = index == game.current_hand_index();
        render_player(&mut out, hand, current, style);
    }

    out
}

fn render_dealer(out: &mut String, dealer: &DealerHand, style: FaceStyle) {
    out.push(' ');

    for (index, card) in dealer.cards().iter().enumerate() {
        if index == 1 && dealer.is_hole_hidden() {
            out.push_str(style.hidden());
        } else {
            out.push_str(style.face(*card));
        }
        out.push(' ');
    }

    let _ = writeln!(out, " ⇒  {}", dealer.value(CountMethod::Soft));
}

fn render_player(out: &mut String, hand: &PlayerHand, current: bool, style: FaceStyle) {
    out.push(' ');

    for card in hand.cards() {
        out.push_str(style.face(*card));
        out.push(' ');
    }

    let _ = write!(out, " ⇒  {} ", hand.value(CountMethod::Soft));

    match hand.status() {
        HandStatus::Lost => out.push('-'),
        HandStatus::Won => out.push('+'),
        HandStatus::Unknown | HandStatus::Push => {}
    }

    let _ = write!(out, "${}", format_money(hand.bet()));

    if current && !hand.played() {
        out.push_str(" ⇐");
    }

    out.push(' ');

    match hand.status() {
        HandStatus::Lost if hand.is_busted() => out.push_str("Busted!"),
        HandStatus::Lost => out.push_str("Lose!"),
        HandStatus::Won if hand.is_blackjack() => out.push_str("Blackjack!"),
        HandStatus::Won => out.push_str("Win!"),
        HandStatus::Push => out.push_str("Push!"),
        HandStatus::Unknown => {}
    }

    out.push_str("\n\n");
}
