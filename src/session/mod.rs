//! Multi-player session state machine
//!
//! [`SessionEngine`] owns one secret and the per-player state racing to
//! reveal it; [`PlayerState`] accumulates a single player's knowledge.

mod engine;
mod player;

pub use engine::{GuessOutcome, Rejection, SessionEngine};
pub use player::{PlayerId, PlayerState, ScoredGuess};
