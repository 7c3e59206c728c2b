//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::LetterScore;
use crate::session::{PlayerState, ScoredGuess};

/// Format one scored guess as a colored letter row
#[must_use]
pub fn guess_row(guess: &ScoredGuess) -> String {
    score_row(guess.word().letters(), guess.scores())
}

/// Format letters with their verdicts as a colored row
///
/// Found letters red, present-elsewhere letters yellow, absent letters
/// dimmed: the game's color language.
#[must_use]
pub fn score_row(letters: &[u8], scores: &[LetterScore]) -> String {
    letters
        .iter()
        .zip(scores)
        .map(|(&letter, score)| {
            let cell = (letter as char).to_ascii_uppercase().to_string();
            match score {
                LetterScore::Found => cell.red().bold().to_string(),
                LetterScore::Exist => cell.yellow().to_string(),
                LetterScore::Wrong => cell.dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a player's known letters, unknown positions as dots
#[must_use]
pub fn revealed_row(revealed: &[Option<u8>]) -> String {
    revealed
        .iter()
        .map(|slot| match slot {
            Some(letter) => (*letter as char).to_ascii_uppercase().to_string(),
            None => "·".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label for a finishing rank
///
/// Unranked players (left or never found) get "DNF".
#[must_use]
pub fn rank_label(rank: i32) -> String {
    if rank == PlayerState::UNRANKED {
        return "DNF".to_string();
    }

    let suffix = match (rank % 10, rank % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}
