//! Cumulative per-player statistics
//!
//! One [`PlayerStats`] accumulates every finished session a participant took
//! part in: finishing ranks (with the −1 bucket for "left or never found"),
//! every word they tried, and the guess counts of their successful games.

use serde::Serialize;

use crate::core::Word;
use crate::session::PlayerState;

use super::record::{RecordError, read_counter_line, read_scalar_line};
use super::tally::Tally;

/// Per-player cumulative counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    ranks: Tally<i32>,
    words: Tally<Word>,
    guesses_when_found: u64,
}

/// Derived read-only view over a player's counters
///
/// Only produced when at least one game was found; the zero cases never
/// divide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// Sessions the player appeared in
    pub games_played: u64,
    /// Sessions the player fully revealed the word
    pub games_found: u64,
    /// `games_found` as a percentage of `games_played`
    pub found_percentage: f64,
    /// Counts of rank 1, 2 and 3 finishes
    pub medals: [u64; 3],
    /// Total guesses submitted across all sessions
    pub total_words: u64,
    /// Distinct words ever guessed
    pub unique_words: u64,
    /// The five most used words with their counts
    pub most_used: Vec<(Word, u64)>,
    /// Average guesses per successful game
    pub mean_guesses_when_found: f64,
}

impl PlayerStats {
    /// Fold one finished session's player state into the counters
    pub fn update(&mut self, player: &PlayerState) {
        self.ranks.increment(player.rank());

        for guess in player.history() {
            self.words.increment(guess.word().clone());
        }

        if player.is_complete() {
            self.guesses_when_found += player.history().len() as u64;
        }
    }

    /// Finishing-rank counter (−1 bucket = left or never found)
    #[must_use]
    pub fn ranks(&self) -> &Tally<i32> {
        &self.ranks
    }

    /// Guessed-word counter
    #[must_use]
    pub fn words(&self) -> &Tally<Word> {
        &self.words
    }

    /// Total guesses across successful games
    #[must_use]
    pub fn guesses_when_found(&self) -> u64 {
        self.guesses_when_found
    }

    /// Derive the summary view, or `None` when nothing was found yet
    #[must_use]
    pub fn summary(&self) -> Option<PlayerSummary> {
        let games_played = self.ranks.total();
        let games_found = games_played - self.ranks.get(&PlayerState::UNRANKED);
        if games_found == 0 {
            return None;
        }

        Some(PlayerSummary {
            games_played,
            games_found,
            found_percentage: 100.0 * games_found as f64 / games_played as f64,
            medals: [self.ranks.get(&1), self.ranks.get(&2), self.ranks.get(&3)],
            total_words: self.words.total(),
            unique_words: self.words.distinct() as u64,
            most_used: self.words.most_common(5),
            mean_guesses_when_found: self.guesses_when_found as f64 / games_found as f64,
        })
    }

    /// Encode to the persisted record form
    ///
    /// Line 1: rank counter, line 2: word counter (JSON objects), line 3:
    /// the guesses-when-found scalar.
    ///
    /// # Errors
    /// Returns a serialization error if a counter cannot be encoded.
    pub fn to_record(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            "{}\n{}\n{}\n",
            serde_json::to_string(&self.ranks)?,
            serde_json::to_string(&self.words)?,
            self.guesses_when_found
        ))
    }

    /// Decode from the persisted record form
    ///
    /// # Errors
    /// Returns a [`RecordError`] describing the first malformed line.
    pub fn from_record(record: &str) -> Result<Self, RecordError> {
        let mut lines = record.lines();

        Ok(Self {
            ranks: read_counter_line(&mut lines, 1)?,
            words: read_counter_line(&mut lines, 2)?,
            guesses_when_found: read_scalar_line(&mut lines, 3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{PlayerId, SessionEngine};
    use crate::wordlists::WordStore;

    fn finished_player(guesses: &[&str], secret: &str) -> PlayerState {
        let store = WordStore::new(guesses, &[secret]).unwrap();
        let mut game = SessionEngine::with_secret(
            Word::normalize(secret),
            [PlayerId::from("alice")],
        );
        for guess in guesses {
            let _ = game.submit_guess(&store, &PlayerId::from("alice"), guess);
        }
        game.player(&PlayerId::from("alice")).unwrap().clone()
    }

    #[test]
    fn update_counts_rank_words_and_guesses() {
        let mut stats = PlayerStats::default();
        stats.update(&finished_player(&["cap", "cat"], "cat"));

        assert_eq!(stats.ranks().get(&1), 1);
        assert_eq!(stats.words().get(&Word::normalize("cap")), 1);
        assert_eq!(stats.words().get(&Word::normalize("cat")), 1);
        assert_eq!(stats.guesses_when_found(), 2);
    }

    #[test]
    fn unfinished_player_lands_in_the_sentinel_bucket() {
        let mut stats = PlayerStats::default();
        stats.update(&finished_player(&["cap"], "cat"));

        assert_eq!(stats.ranks().get(&PlayerState::UNRANKED), 1);
        // Guesses of unsuccessful games do not count toward the mean.
        assert_eq!(stats.guesses_when_found(), 0);
        assert!(stats.summary().is_none());
    }

    #[test]
    fn summary_derives_percentages_and_mean() {
        let mut stats = PlayerStats::default();
        stats.update(&finished_player(&["cap", "cat"], "cat"));
        stats.update(&finished_player(&["cat"], "cat"));
        stats.update(&finished_player(&["cap"], "cat")); // not found

        let summary = stats.summary().unwrap();
        assert_eq!(summary.games_played, 3);
        assert_eq!(summary.games_found, 2);
        assert!((summary.found_percentage - 66.666).abs() < 0.01);
        assert_eq!(summary.medals, [2, 0, 0]);
        assert_eq!(summary.total_words, 4);
        assert_eq!(summary.unique_words, 2);
        assert!((summary.mean_guesses_when_found - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn record_round_trip() {
        let mut stats = PlayerStats::default();
        stats.update(&finished_player(&["cap", "cat"], "cat"));
        stats.update(&finished_player(&["cap"], "cat"));

        let record = stats.to_record().unwrap();
        let back = PlayerStats::from_record(&record).unwrap();
        assert_eq!(stats, back);
    }

    #[test]
    fn zero_record_round_trip() {
        let zero = PlayerStats::default();
        let back = PlayerStats::from_record(&zero.to_record().unwrap()).unwrap();
        assert_eq!(zero, back);
        assert!(back.summary().is_none());
    }

    #[test]
    fn malformed_record_is_rejected() {
        assert!(PlayerStats::from_record("").is_err());
        assert!(PlayerStats::from_record("{}\n{}\nnot-a-number\n").is_err());
        assert!(PlayerStats::from_record("[1,2]\n{}\n0\n").is_err());
    }
}
