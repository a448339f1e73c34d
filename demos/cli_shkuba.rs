//! CLI Shkuba example: you (P1) against the bot (P2).

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use shkuba::{Board, Bot, BotTurn, Game, GameOptions, Hand, Player, Round};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Shkuba CLI example (type 'q' to quit)");

    let mut game = Game::from_entropy(GameOptions::default());

    while !game.is_over() {
        let Ok(mut round) = game.new_round() else {
            break;
        };
        if !play_round(&mut round) {
            println!("Goodbye.");
            return;
        }

        match round.count_piles() {
            Ok(score) => {
                println!("\nRound complete.");
                for award in &score.awards {
                    println!("  {:?}: {}", award.category, winner_name(award.winner));
                }
                println!("  You {} - Bot {}", score.p1_points, score.p2_points);
            }
            Err(err) => println!("Scoring error: {err:?}"),
        }

        if let Err(err) = game.record_round(&mut round) {
            println!("Match error: {err:?}");
            break;
        }
        println!(
            "Match: you {} - bot {}",
            game.points(Player::P1),
            game.points(Player::P2)
        );
    }

    if let Some(winner) = game.winner() {
        println!("Match over. Winner: {}", winner_name(Some(winner)));
    }
}

/// Plays one round; returns `false` if the user quit.
fn play_round(round: &mut Round) -> bool {
    let opener = round.first_player();
    let choice = match (opener, round.start_card()) {
        (Player::P2, Some(card)) => {
            let take = Bot::new().wants_start_card(card);
            let action = if take { "keeps it" } else { "lays it down" };
            println!("\nBot opens with start card {card} and {action}.");
            take
        }
        (_, Some(card)) => {
            let answer = prompt_line(&format!("\nStart card is {card}. Keep it? (y/n): "));
            match answer.as_str() {
                "q" | "quit" => return false,
                "y" | "yes" => true,
                _ => false,
            }
        }
        (_, None) => false,
    };
    if let Err(err) = round.first_mini_round(choice) {
        println!("Deal error: {err:?}");
        return true;
    }

    let mut turn = opener;
    while !round.is_over() {
        if round.needs_deal() {
            if let Err(err) = round.give_cards_to_players() {
                println!("Deal error: {err:?}");
                return true;
            }
            println!(
                "\nFresh hands dealt ({} left in the deck).",
                round.cards_remaining()
            );
        }

        match turn {
            Player::P1 => {
                if !human_turn(round) {
                    return false;
                }
            }
            Player::P2 => match round.bot_turn(Player::P2) {
                Ok(BotTurn::Captured(capture)) => {
                    let taken: Vec<String> =
                        capture.taken.iter().map(ToString::to_string).collect();
                    println!("Bot plays {} and takes {}.", capture.played, taken.join(" "));
                }
                Ok(BotTurn::Dropped(card)) => println!("Bot drops {card}."),
                Err(err) => println!("Bot error: {err:?}"),
            },
        }
        turn = turn.other();
    }

    let collected = round.finish();
    if !collected.is_empty() {
        println!(
            "{} card(s) left on the board go to the last capturer.",
            collected.len()
        );
    }
    true
}

/// Prompts until the human makes a legal move; returns `false` on quit.
fn human_turn(round: &mut Round) -> bool {
    loop {
        print_table(round.board(), round.hand(Player::P1));
        let input = prompt_line("Play <card> [board cards...] or drop <card>: ");
        let mut words = input.split_whitespace();

        let result = match words.next() {
            Some("q" | "quit") => return false,
            Some("drop" | "d") => match parse_indices(words).as_deref() {
                Some([card]) => round.drop_card(Player::P1, *card).map(|_| ()),
                _ => {
                    println!("Usage: drop <card>");
                    continue;
                }
            },
            Some("hint" | "h") => {
                print_hints(round.hand(Player::P1), round.board());
                continue;
            }
            Some(first) => {
                let rest = core::iter::once(first).chain(words);
                match parse_indices(rest).as_deref() {
                    Some([card, board @ ..]) => {
                        round.play_card(Player::P1, *card, board).map(|_| ())
                    }
                    _ => {
                        println!(
                            "Enter numbers, e.g. '0 1 2' plays card 0 taking board cards 1 and 2."
                        );
                        continue;
                    }
                }
            }
            None => continue,
        };

        match result {
            Ok(()) => return true,
            Err(err) => println!("Illegal move: {err}"),
        }
    }
}

fn parse_indices<'a>(words: impl Iterator<Item = &'a str>) -> Option<Vec<usize>> {
    words.map(|w| w.parse::<usize>().ok()).collect()
}

fn print_table(board: &Board, hand: &Hand) {
    println!("\nBoard: {}", format_cards(board.cards()));
    println!("Hand:  {}", format_cards(hand.cards()));
}

fn print_hints(hand: &Hand, board: &Board) {
    for (index, card) in hand.cards().iter().enumerate() {
        let options = hand.capture_options(index, board).unwrap_or_default();
        if options.is_empty() {
            println!("  {index}: {card} captures nothing");
        } else {
            println!("  {index}: {card} can take {options:?}");
        }
    }
}

fn format_cards(cards: &[shkuba::Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let code = if c.rank == 7 { "33" } else { "0" };
            colorize(&format!("{i}:{c}"), code)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn winner_name(winner: Option<Player>) -> &'static str {
    match winner {
        Some(Player::P1) => "you",
        Some(Player::P2) => "bot",
        None => "nobody",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits.
        Ok(0) | Err(_) => "q".to_owned(),
        Ok(_) => input.trim().to_lowercase(),
    }
}
