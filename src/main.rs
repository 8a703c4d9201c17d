//! Interactive terminal table for the eights engine.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use colored::{ColoredString, Colorize};
use dialoguer::Input;

use eights::{ActionOutcome, ActionReport, Card, Game, Placement, Suit};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("{}", "Welcome to the table. Let's start a new game.".bold());
    let table: String = Input::new()
        .with_prompt("What shall we call it?")
        .interact_text()?;
    println!("Welcome to the {table} game. Please have a seat.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    let count: usize = Input::new()
        .with_prompt("How many people are at the table?")
        .validate_with(|n: &usize| -> Result<(), &str> {
            if (1..=13).contains(n) {
                Ok(())
            } else {
                Err("Between 1 and 13 can play")
            }
        })
        .interact_text()?;

    for seat in 1..=count {
        let name: String = Input::new()
            .with_prompt(format!("Hello player {seat}, what is your name?"))
            .interact_text()?;
        game.join(name)?;
    }

    game.deal()?;
    let starter = game.pick_starter()?;
    println!("\nEvery player holds four cards. The starter is {}.", paint(starter));
    println!("Place with card codes like 6C, 10H or JO (lists too: 9H,9C).");
    println!("Draw with pick or pick-3. Type quit to leave the table.");

    loop {
        let (id, name, hand) = match game.current_player() {
            Some(p) => (p.id(), p.name().to_string(), format_hand(p.cards())),
            None => break,
        };
        let top = game.stage.top_card()?;

        println!();
        println!("Stage: {} | Pack: {} cards left", paint(top), game.pack.count());
        println!("{name}'s hand: {hand}");

        let input: String = Input::new()
            .with_prompt(format!("{name}, your move"))
            .interact_text()?;
        let line = input.trim();
        if matches!(line, "q" | "quit" | "exit") {
            println!("Goodbye.");
            break;
        }

        match game.process_action(id, line) {
            Ok(report) => describe(&report),
            Err(err) => println!("{}", err.to_string().red()),
        }
    }

    Ok(())
}

/// Prints what a processed line of input did.
fn describe(report: &ActionReport) {
    for outcome in &report.outcomes {
        match outcome {
            ActionOutcome::Picked(count) => println!("Drew {count} from the pack."),
            ActionOutcome::Placed(Placement::Accepted) => {
                println!("{}", "Placed on the stage.".green());
            }
            ActionOutcome::Placed(Placement::Rejected) => {
                println!("{}", "No match with the stage.".yellow());
            }
        }
    }
    if !report.consumed {
        println!("The turn stays with you.");
    }
}

/// Colors a card code by suit: red for hearts and diamonds, green for
/// clubs, blue for spades, yellow for the jokers.
fn paint(card: Card) -> ColoredString {
    let code = card.code();
    match card.suit() {
        Some(Suit::Hearts | Suit::Diamonds) => code.red(),
        Some(Suit::Clubs) => code.green(),
        Some(Suit::Spades) => code.blue(),
        None => code.yellow(),
    }
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|&card| paint(card).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
