//! Command implementations

pub mod play;
pub mod score;
pub mod stats;

pub use play::run_play;
pub use score::run_score;
pub use stats::{run_games_stats, run_player_stats};
