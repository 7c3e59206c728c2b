//! Cumulative global game statistics

use serde::Serialize;

use crate::core::Word;
use crate::session::SessionEngine;

use super::record::{RecordError, read_counter_line, read_scalar_line};
use super::tally::Tally;

/// Global cumulative counters across all finished sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamesStats {
    hidden_words: Tally<Word>,
    total_players: u64,
}

/// Derived read-only view over the global counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamesSummary {
    /// Total sessions played
    pub games_played: u64,
    /// Average participants per session
    pub mean_players: f64,
    /// The twenty most repeated secrets with their counts
    pub most_repeated: Vec<(Word, u64)>,
}

impl GamesStats {
    /// Fold one finished session into the counters
    pub fn update(&mut self, session: &SessionEngine) {
        self.hidden_words.increment(session.hidden_word().clone());
        self.total_players += session.players().len() as u64;
    }

    /// Secret-word counter
    #[must_use]
    pub fn hidden_words(&self) -> &Tally<Word> {
        &self.hidden_words
    }

    /// Total participants across all sessions
    #[must_use]
    pub fn total_players(&self) -> u64 {
        self.total_players
    }

    /// Derive the summary view, or `None` before any game was played
    #[must_use]
    pub fn summary(&self) -> Option<GamesSummary> {
        let games_played = self.hidden_words.total();
        if games_played == 0 {
            return None;
        }

        Some(GamesSummary {
            games_played,
            mean_players: self.total_players as f64 / games_played as f64,
            most_repeated: self.hidden_words.most_common(20),
        })
    }

    /// Encode to the persisted record form
    ///
    /// Line 1: secret-word counter (JSON object), line 2: the total-players
    /// scalar.
    ///
    /// # Errors
    /// Returns a serialization error if the counter cannot be encoded.
    pub fn to_record(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            "{}\n{}\n",
            serde_json::to_string(&self.hidden_words)?,
            self.total_players
        ))
    }

    /// Decode from the persisted record form
    ///
    /// # Errors
    /// Returns a [`RecordError`] describing the first malformed line.
    pub fn from_record(record: &str) -> Result<Self, RecordError> {
        let mut lines = record.lines();

        Ok(Self {
            hidden_words: read_counter_line(&mut lines, 1)?,
            total_players: read_scalar_line(&mut lines, 2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlayerId;

    fn session(secret: &str, players: &[&str]) -> SessionEngine {
        SessionEngine::with_secret(
            Word::normalize(secret),
            players.iter().map(|p| PlayerId::from(*p)),
        )
    }

    #[test]
    fn update_counts_secret_and_players() {
        let mut stats = GamesStats::default();
        stats.update(&session("arbre", &["alice", "bob"]));
        stats.update(&session("arbre", &["alice"]));
        stats.update(&session("radar", &["carol"]));

        assert_eq!(stats.hidden_words().get(&Word::normalize("arbre")), 2);
        assert_eq!(stats.hidden_words().get(&Word::normalize("radar")), 1);
        assert_eq!(stats.total_players(), 4);
    }

    #[test]
    fn summary_is_none_before_any_game() {
        assert!(GamesStats::default().summary().is_none());
    }

    #[test]
    fn summary_derives_mean_and_top_secrets() {
        let mut stats = GamesStats::default();
        stats.update(&session("arbre", &["alice", "bob"]));
        stats.update(&session("arbre", &["alice", "bob", "carol"]));
        stats.update(&session("radar", &["alice"]));

        let summary = stats.summary().unwrap();
        assert_eq!(summary.games_played, 3);
        assert!((summary.mean_players - 2.0).abs() < f64::EPSILON);
        assert_eq!(summary.most_repeated[0].0, Word::normalize("arbre"));
        assert_eq!(summary.most_repeated[0].1, 2);
    }

    #[test]
    fn record_round_trip() {
        let mut stats = GamesStats::default();
        stats.update(&session("arbre", &["alice", "bob"]));

        let record = stats.to_record().unwrap();
        let back = GamesStats::from_record(&record).unwrap();
        assert_eq!(stats, back);
    }

    #[test]
    fn zero_record_round_trip() {
        let zero = GamesStats::default();
        let back = GamesStats::from_record(&zero.to_record().unwrap()).unwrap();
        assert_eq!(zero, back);
    }
}
