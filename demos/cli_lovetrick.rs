//! CLI lovetrick example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use core::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::{Input, Select};
use lovetrick::{Card, CardSelector, Game, GameOptions, GameOutcome, Player, Suit};

fn main() {
    env_logger::init();
    println!("Lovetrick CLI example. Love beats Diamond, otherwise high rank wins.");

    let Some(count) = prompt_player_count() else {
        return;
    };

    let mut names = Vec::with_capacity(count);
    for seat in 1..=count {
        let Some(name) = prompt_name(seat) else {
            return;
        };
        names.push(name);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(&names, GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let mut selector = Terminal;
    while !game.is_game_over() {
        println!("\n--- Round {} ---", game.round_number() + 1);
        let result = match game.play_round(&mut selector) {
            Ok(result) => result,
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        };

        for play in &result.plays {
            let name = game.player(play.player).map_or("?", Player::name);
            println!("{name} played {}", format_card(&play.card));
        }
        if let Some(winner) = game.player(result.winner) {
            println!(
                "{} wins the round with {}",
                winner.name(),
                format_card(&result.winning_card)
            );
        }
    }

    println!("\nFinal scores:");
    for standing in game.standings() {
        println!("  {standing}");
    }
    match game.winners() {
        Ok(GameOutcome::Winner { player }) => {
            println!("Winner: {} with {} points", player.name, player.score);
        }
        Ok(GameOutcome::Tie { players, score }) => {
            let names: Vec<&str> = players.iter().map(|s| s.name.as_str()).collect();
            println!("Tie between {} with {score} points", names.join(", "));
        }
        Err(err) => println!("Outcome error: {err}"),
    }
}

/// Asks the person at the keyboard to pick a card for each player in turn.
struct Terminal;

impl CardSelector for Terminal {
    fn select(&mut self, player: &Player, available: Range<usize>) -> Option<usize> {
        let items: Vec<String> = player.hand().cards().iter().map(format_card).collect();
        let index = Select::new()
            .with_prompt(format!("{}, choose a card", player.name()))
            .items(&items)
            .default(0)
            .interact()
            .ok()?;
        available.contains(&index).then_some(index)
    }
}

fn prompt_player_count() -> Option<usize> {
    let count = Input::<usize>::new()
        .with_prompt("Number of players")
        .default(2)
        .interact_text()
        .ok()?;
    if count < 2 {
        println!("At least two players are needed, using 2.");
    }
    Some(count.max(2))
}

fn prompt_name(seat: usize) -> Option<String> {
    Input::<String>::new()
        .with_prompt(format!("Name for player {seat}"))
        .allow_empty(true)
        .interact_text()
        .ok()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Ace => "34",
        Suit::Flower => "32",
        Suit::Love => "35",
        Suit::Diamond => "31",
    };
    colorize(&card.to_string(), code)
}
