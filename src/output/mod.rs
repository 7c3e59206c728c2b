//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{final_board, games_summary_text, guess_feedback, player_summary_text};
pub use formatters::{guess_row, rank_label, revealed_row, score_row};
