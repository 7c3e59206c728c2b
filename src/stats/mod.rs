//! Statistics: counters, aggregates and persistence
//!
//! Finished sessions fold into cumulative per-player and global counters
//! ([`PlayerStats`], [`GamesStats`]), persisted as small line-based records
//! under one directory ([`StatsStore`]). Summaries are pure functions over
//! the counters and return `None` instead of dividing by zero.

mod games;
mod player;
mod record;
mod store;
mod tally;

pub use games::{GamesStats, GamesSummary};
pub use player::{PlayerStats, PlayerSummary};
pub use record::RecordError;
pub use store::{StatsError, StatsStore};
pub use tally::Tally;
