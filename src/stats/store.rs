//! Durable statistics store
//!
//! One directory holds the persisted records: `games.txt` for the global
//! counters and one `<player>.txt` per participant. A missing record loads
//! as the zero object: absence is "no history yet", never an error. Saves
//! replace records atomically (temp file + rename) so a concurrent reader
//! never observes a half-written record.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::session::{PlayerId, SessionEngine};

use super::games::GamesStats;
use super::player::PlayerStats;
use super::record::RecordError;

/// Statistics persistence error
#[derive(Debug, Error)]
pub enum StatsError {
    /// File I/O failure
    #[error("failed to {operation} stats record: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record exists but does not decode
    #[error("malformed stats record: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    /// A record does not encode (counter serialization failure)
    #[error("failed to encode stats record: {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory-backed store of global and per-player statistics
///
/// Per-player records load lazily on first touch and stay cached for the
/// store's lifetime; `save` rewrites every loaded record.
#[derive(Debug)]
pub struct StatsStore {
    dir: PathBuf,
    games: GamesStats,
    players: FxHashMap<PlayerId, PlayerStats>,
}

impl StatsStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// Loads the global record; a missing record yields zero counters.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or an existing
    /// global record is malformed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StatsError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StatsError::Io {
            operation: "create directory for",
            path: dir.clone(),
            source,
        })?;

        let games_path = dir.join("games.txt");
        let games = match read_record(&games_path)? {
            Some(record) => GamesStats::from_record(&record).map_err(|source| {
                StatsError::Parse {
                    path: games_path,
                    source,
                }
            })?,
            None => GamesStats::default(),
        };

        Ok(Self {
            dir,
            games,
            players: FxHashMap::default(),
        })
    }

    /// Global statistics
    #[must_use]
    pub fn games(&self) -> &GamesStats {
        &self.games
    }

    /// A participant's statistics, loading the record on first touch
    ///
    /// # Errors
    /// Returns an error if an existing record is malformed or unreadable.
    pub fn player(&mut self, id: &PlayerId) -> Result<&PlayerStats, StatsError> {
        self.load_player(id)?;
        Ok(&self.players[id])
    }

    /// Fold one finished session into the global and per-player counters
    ///
    /// # Errors
    /// Returns an error if a participant's existing record cannot be loaded.
    pub fn update(&mut self, session: &SessionEngine) -> Result<(), StatsError> {
        self.games.update(session);

        for player in session.players() {
            self.load_player(player.id())?;
            self.players
                .get_mut(player.id())
                .expect("loaded just above")
                .update(player);
        }

        tracing::debug!(
            players = session.players().len(),
            secret = %session.hidden_word(),
            "session folded into stats"
        );

        Ok(())
    }

    /// Persist the global record and every loaded player record
    ///
    /// Each record is written to a temp file and renamed into place.
    ///
    /// # Errors
    /// Returns the first write failure.
    pub fn save(&self) -> Result<(), StatsError> {
        let games_path = self.games_path();
        let record = self.games.to_record().map_err(|source| StatsError::Encode {
            path: games_path.clone(),
            source,
        })?;
        write_record(&games_path, &record)?;

        for (id, stats) in &self.players {
            let path = self.player_path(id);
            let record = stats.to_record().map_err(|source| StatsError::Encode {
                path: path.clone(),
                source,
            })?;
            write_record(&path, &record)?;
        }

        tracing::debug!(dir = %self.dir.display(), "stats saved");
        Ok(())
    }

    fn load_player(&mut self, id: &PlayerId) -> Result<(), StatsError> {
        if self.players.contains_key(id) {
            return Ok(());
        }

        let path = self.player_path(id);
        let stats = match read_record(&path)? {
            Some(record) => PlayerStats::from_record(&record)
                .map_err(|source| StatsError::Parse { path, source })?,
            None => PlayerStats::default(),
        };

        self.players.insert(id.clone(), stats);
        Ok(())
    }

    fn games_path(&self) -> PathBuf {
        self.dir.join("games.txt")
    }

    fn player_path(&self, id: &PlayerId) -> PathBuf {
        // Player ids are opaque; keep the file name inside the stats dir.
        let safe: String = id
            .as_str()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.txt"))
    }
}

/// Read a record file, `None` when it does not exist
fn read_record(path: &Path) -> Result<Option<String>, StatsError> {
    match fs::read_to_string(path) {
        Ok(record) => Ok(Some(record)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StatsError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write a record atomically: temp file, then rename into place
fn write_record(path: &Path, record: &str) -> Result<(), StatsError> {
    let temp_path = path.with_extension("txt.tmp");

    fs::write(&temp_path, record).map_err(|source| StatsError::Io {
        operation: "write",
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| StatsError::Io {
        operation: "replace",
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordStore;

    fn played_session() -> SessionEngine {
        let store = WordStore::new(&["cat", "cap"], &["cat"]).unwrap();
        let mut game = SessionEngine::with_secret(
            Word::normalize("cat"),
            [PlayerId::from("alice"), PlayerId::from("bob")],
        );
        game.submit_guess(&store, &PlayerId::from("alice"), "cat").unwrap();
        game.remove_player(&PlayerId::from("bob")).unwrap();
        game
    }

    #[test]
    fn missing_records_load_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StatsStore::open(dir.path()).unwrap();

        assert!(store.games().summary().is_none());
        let alice = store.player(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.ranks().total(), 0);
        assert!(alice.summary().is_none());
    }

    #[test]
    fn update_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = StatsStore::open(dir.path()).unwrap();
            store.update(&played_session()).unwrap();
            store.save().unwrap();
        }

        let mut store = StatsStore::open(dir.path()).unwrap();
        assert_eq!(store.games().total_players(), 2);
        assert_eq!(
            store.games().hidden_words().get(&Word::normalize("cat")),
            1
        );

        let alice = store.player(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.ranks().get(&1), 1);

        let bob = store.player(&PlayerId::from("bob")).unwrap();
        assert_eq!(bob.ranks().get(&-1), 1);
    }

    #[test]
    fn stats_accumulate_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StatsStore::open(dir.path()).unwrap();

        store.update(&played_session()).unwrap();
        store.update(&played_session()).unwrap();
        store.save().unwrap();

        let mut reloaded = StatsStore::open(dir.path()).unwrap();
        assert_eq!(reloaded.games().total_players(), 4);
        let alice = reloaded.player(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.ranks().get(&1), 2);
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StatsStore::open(dir.path()).unwrap();
        store.update(&played_session()).unwrap();
        store.save().unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn malformed_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("games.txt"), "not json\n0\n").unwrap();

        assert!(matches!(
            StatsStore::open(dir.path()),
            Err(StatsError::Parse { .. })
        ));
    }

    #[test]
    fn player_file_names_stay_inside_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StatsStore::open(dir.path()).unwrap();

        let odd = PlayerId::from("../outside/id");
        let _ = store.player(&odd).unwrap();
        store.save().unwrap();

        assert!(dir.path().join("___outside_id.txt").exists());
    }
}
