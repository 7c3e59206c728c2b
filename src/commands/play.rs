//! Interactive multi-player game loop
//!
//! Hotseat mode: every participant plays from the same terminal, prefixing
//! guesses with their name. The engine stays the single source of truth;
//! this loop only parses lines, relays operations and prints the results.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::output::{final_board, guess_feedback, rank_label, revealed_row};
use crate::session::{PlayerId, Rejection, SessionEngine};
use crate::stats::StatsStore;
use crate::wordlists::WordStore;

/// Run an interactive session until it is over or abandoned
///
/// When the session ends with at least one guess played, the outcome is
/// folded into the stats store and saved.
///
/// # Errors
/// Returns an error on terminal I/O failure or when stats cannot be saved.
pub fn run_play(store: &WordStore, stats: &mut StatsStore, players: &[String]) -> Result<()> {
    let mut session = SessionEngine::start(
        store,
        &mut rand::rng(),
        players.iter().map(|name| PlayerId::new(name.clone())),
    );

    println!("\nA new word race begins: {} letters.", session.hidden_word().len());
    println!("Everyone starts with the first letter:\n");
    for player in session.players() {
        println!("  {:<12} {}", player.id().to_string(), revealed_row(player.revealed()));
    }
    println!(
        "\nCommands: '<player> <word>' to guess, 'join <player>', 'leave <player>',\n\
         'board' for standings, 'stop' to end the game, 'quit' to abandon.\n"
    );

    loop {
        let line = read_line("> ")?;
        let mut parts = line.split_whitespace();
        let (Some(first), second) = (parts.next(), parts.next()) else {
            continue;
        };

        match (first, second) {
            ("quit" | "q", _) => {
                println!("Game abandoned.");
                return Ok(());
            }
            ("stop", _) => break,
            ("board", _) => {
                println!("{}\n", standings(&session));
            }
            ("join", Some(name)) => match session.add_player(PlayerId::from(name)) {
                Ok(()) => {
                    let player = session.player(&PlayerId::from(name)).expect("just joined");
                    println!("{name} joins the race. Good luck!");
                    println!("  {}\n", revealed_row(player.revealed()));
                }
                Err(rejection) => println!("{}\n", rejection_text(rejection)),
            },
            ("leave", Some(name)) => match session.remove_player(&PlayerId::from(name)) {
                Ok(()) => {
                    println!("{name} leaves the race.\n");
                    if session.is_over() {
                        break;
                    }
                }
                Err(rejection) => println!("{}\n", rejection_text(rejection)),
            },
            (name, Some(word)) => {
                let id = PlayerId::from(name);
                match session.submit_guess(store, &id, word) {
                    Ok(outcome) => {
                        println!("{}\n", guess_feedback(&outcome));
                        if let Some(rank) = outcome.finished {
                            println!(
                                "{} {} found the word: {}!\n",
                                "★".yellow(),
                                name,
                                rank_label(rank).bold()
                            );
                        }
                        if session.is_over() {
                            break;
                        }
                    }
                    Err(rejection) => println!("{}\n", rejection_text(rejection)),
                }
            }
            _ => println!("Unrecognized command.\n"),
        }
    }

    println!("\nThe race is over!\n{}\n", final_board(&session));

    if session.any_played() {
        stats.update(&session)?;
        stats.save()?;
    } else {
        println!("Nobody played; nothing goes into the records.");
    }

    Ok(())
}

/// Current standings without revealing the secret
fn standings(session: &SessionEngine) -> String {
    session
        .ranked_players()
        .iter()
        .map(|player| {
            let status = if player.has_left() {
                "left".to_string()
            } else if player.rank() > 0 {
                rank_label(player.rank())
            } else {
                revealed_row(player.revealed())
            };
            format!("  {:<12} {}", player.id().to_string(), status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Host-side wording for engine rejections
fn rejection_text(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::TooShort => "Too short for this word.",
        Rejection::TooLong => "Too long for this word.",
        Rejection::NotInDictionary => "That word is not in the dictionary.",
        Rejection::NoSuchPlayer => "You are not in this game; 'join <player>' first.",
        Rejection::AlreadyOver => "You are already done with this game.",
        Rejection::AlreadyJoined => "Already in the game.",
    }
}

/// Read one trimmed line from stdin
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn rejection_wording_is_distinct() {
        let all = [
            Rejection::TooShort,
            Rejection::TooLong,
            Rejection::NotInDictionary,
            Rejection::NoSuchPlayer,
            Rejection::AlreadyOver,
            Rejection::AlreadyJoined,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(rejection_text(*a), rejection_text(*b));
            }
        }
    }

    #[test]
    fn standings_hides_the_secret() {
        let store = WordStore::new(&["cat"], &["cat"]).unwrap();
        let mut game = SessionEngine::with_secret(
            Word::normalize("cat"),
            [PlayerId::from("alice"), PlayerId::from("bob")],
        );
        game.submit_guess(&store, &PlayerId::from("alice"), "cat").unwrap();

        let text = standings(&game);
        assert!(text.contains("alice"));
        assert!(text.contains("1st"));
        // bob's row shows the revealed letters, not the word.
        assert!(text.contains("C · ·"));
    }
}
