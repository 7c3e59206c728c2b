//! Text blocks for the terminal host
//!
//! Pure string builders over engine and stats data; printing stays in the
//! command layer. The engine itself never formats presentation text.

use colored::Colorize;

use crate::session::{GuessOutcome, SessionEngine};
use crate::stats::{GamesSummary, PlayerSummary};

use super::formatters::{guess_row, rank_label, revealed_row};

/// Feedback block for one accepted guess: the scored row, then the
/// player's accumulated known letters
#[must_use]
pub fn guess_feedback(outcome: &GuessOutcome) -> String {
    format!(
        "{}\n{}",
        guess_row(&outcome.guess),
        revealed_row(&outcome.revealed)
    )
}

/// Final board for a finished session
///
/// Players in finishing order with their rank label and guess count, then
/// the revealed secret.
#[must_use]
pub fn final_board(session: &SessionEngine) -> String {
    let mut lines = Vec::new();

    for player in session.ranked_players() {
        let label = if player.has_left() {
            "left".dimmed().to_string()
        } else {
            rank_label(player.rank())
        };
        lines.push(format!(
            "{:>4}  {}  ({} guesses)",
            label,
            player.id(),
            player.history().len()
        ));
    }

    lines.push(format!(
        "The word was {}",
        session.hidden_word().as_str().to_uppercase().bold()
    ));

    lines.join("\n")
}

/// A player's statistics as text, with explicit no-data wording
#[must_use]
pub fn player_summary_text(summary: Option<&PlayerSummary>) -> String {
    let Some(summary) = summary else {
        return "No word found yet. Play a game first!".to_string();
    };

    let most_used = summary
        .most_used
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Games played: {} ({:.2}% found)\n\
         Podium finishes: 1st ×{}, 2nd ×{}, 3rd ×{}\n\
         Words tried: {} ({} unique)\n\
         Most used: {}\n\
         Mean guesses to find: {:.2}",
        summary.games_played,
        summary.found_percentage,
        summary.medals[0],
        summary.medals[1],
        summary.medals[2],
        summary.total_words,
        summary.unique_words,
        most_used,
        summary.mean_guesses_when_found
    )
}

/// The global statistics as text, with explicit no-data wording
#[must_use]
pub fn games_summary_text(summary: Option<&GamesSummary>) -> String {
    let Some(summary) = summary else {
        return "No game has been played yet!".to_string();
    };

    let repeated = summary
        .most_repeated
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Games played: {}\n\
         Mean players per game: {:.2}\n\
         Most drawn secrets: {}",
        summary.games_played, summary.mean_players, repeated
    )
}
