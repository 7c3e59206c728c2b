//! Core domain types
//!
//! Word normalization and letter scoring. These types are pure and carry the
//! game's real invariants; everything else in the crate is built on them.

mod score;
mod word;

pub use score::{LetterScore, score};
pub use word::Word;
