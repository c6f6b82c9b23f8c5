//! CLI blackjack front end.
//!
//! Run with `cargo run --example cli_blackjack -- --seed 42`.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack21::{Card, CardView, Game, Intent, Phase, RenderSnapshot, Step, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = seed_from_args().unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut game = Game::new(seed);

    let mut intent = Intent::Restart;

    loop {
        match game.handle(intent) {
            Ok(Step::Render(snapshot)) => print_table(&snapshot),
            Ok(Step::Quit) => {
                println!("Goodbye.");
                return;
            }
            Err(err) => println!("Action error: {err}"),
        }

        intent = loop {
            if let Some(intent) = read_intent(&game.snapshot()) {
                break intent;
            }
            println!("Unknown action.");
        };
    }
}

fn seed_from_args() -> Option<u64> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|value| value.parse().ok());
        }
    }
    None
}

fn read_intent(snapshot: &RenderSnapshot) -> Option<Intent> {
    println!("{}", format_actions(snapshot));
    match prompt_line("Action: ").as_str() {
        "h" | "hit" => Some(Intent::Hit),
        "s" | "stand" => Some(Intent::Stand),
        "r" | "restart" => Some(Intent::Restart),
        "" if snapshot.can_restart => Some(Intent::Restart),
        "q" | "quit" => Some(Intent::Quit),
        _ => None,
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(snapshot: &RenderSnapshot) {
    if snapshot.phase == Phase::Dealing {
        return;
    }

    println!(
        "\nDealer: {} (value {})",
        format_cards(&snapshot.dealer_cards),
        snapshot.dealer_total
    );
    println!(
        "You:    {} (value {})",
        format_cards(&snapshot.player_cards),
        snapshot.player_total
    );

    if let Some(message) = snapshot.message() {
        println!("\n{message}");
    }
    println!("Wins: {}  Losses: {}\n", snapshot.wins, snapshot.losses);
}

fn format_actions(snapshot: &RenderSnapshot) -> String {
    let parts = [
        format_action("hit", "h", snapshot.can_hit),
        format_action("stand", "s", snapshot.can_stand),
        format_action("play again", "r", snapshot.can_restart),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|view| match view {
            CardView::FaceUp(card) => format_card(card),
            CardView::FaceDown => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
