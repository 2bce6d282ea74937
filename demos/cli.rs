//! CLI blackjack demo.
//!
//! A minimal presentation layer over the engine: it polls
//! [`Game::snapshot`] after every action and redraws the table from it.
//! Card artwork is keyed by `Card::asset_id`, with the dealer's hole card
//! shown as `FACE_DOWN_ASSET` while the round is in progress.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use lonejack::{FACE_DOWN_ASSET, Game, RoundSnapshot, RoundState};

fn main() {
    println!("Blackjack (h = hit, s = stand, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(seed);

    loop {
        game.start_round();

        while game.state() == RoundState::InProgress {
            print_table(&game.snapshot());

            match prompt_line("Action (h/s/q): ").as_str() {
                "h" | "hit" => {
                    if game.hit().is_none() {
                        println!("No cards left to draw.");
                    }
                }
                "s" | "stand" => {
                    game.stand();
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        let snapshot = game.snapshot();
        print_table(&snapshot);
        if let Some(outcome) = snapshot.outcome {
            println!("{outcome}");
        }
        println!(
            "Wins: {} | Losses: {} | Ties: {}",
            snapshot.stats.wins, snapshot.stats.losses, snapshot.stats.ties
        );

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => return,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &RoundSnapshot) {
    println!("\nDeck: {} cards remaining", snapshot.cards_remaining);

    let dealer: Vec<String> = snapshot
        .dealer_cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if index == 0 && !snapshot.hole_revealed {
                FACE_DOWN_ASSET.to_string()
            } else {
                card.asset_id()
            }
        })
        .collect();
    println!("Dealer ({}): {}", snapshot.dealer_score, dealer.join(" "));

    let player: Vec<String> = snapshot
        .player_cards
        .iter()
        .map(|card| card.asset_id())
        .collect();
    println!("Player ({}): {}", snapshot.player_score, player.join(" "));
}
