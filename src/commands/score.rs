//! One-off scoring demo
//!
//! Scores a guess against a secret and prints the colored verdict row.
//! Useful for checking how duplicate letters resolve.

use anyhow::{Result, bail};

use crate::core::{Word, score};
use crate::output::score_row;

/// Score `guess` against `secret` and print the verdict row
///
/// # Errors
/// Returns an error when the normalized words differ in length.
pub fn run_score(guess: &str, secret: &str) -> Result<()> {
    let guess = Word::normalize(guess);
    let secret = Word::normalize(secret);

    if guess.len() != secret.len() {
        bail!(
            "'{guess}' has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let scores = score(&guess, &secret);
    println!("{}", score_row(guess.letters(), &scores));
    Ok(())
}
