//! Statistics reporting command

use anyhow::Result;

use crate::output::{games_summary_text, player_summary_text};
use crate::session::PlayerId;
use crate::stats::StatsStore;

/// Print a player's statistics
///
/// # Errors
/// Returns an error if the player's record exists but cannot be read.
pub fn run_player_stats(stats: &mut StatsStore, player: &str) -> Result<()> {
    let id = PlayerId::from(player);
    let summary = stats.player(&id)?.summary();

    println!("Stats for {player}:");
    println!("{}", player_summary_text(summary.as_ref()));
    Ok(())
}

/// Print the global game statistics
pub fn run_games_stats(stats: &StatsStore) {
    println!("{}", games_summary_text(stats.games().summary().as_ref()));
}
