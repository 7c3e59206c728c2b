//! Word store: the dictionary and the secret pool
//!
//! A [`WordStore`] owns two word collections: the set of all acceptable
//! guesses and the narrower list of words that can be drawn as a session's
//! secret. Every entry is normalized on the way in, and the secret pool is
//! folded into the guess set so a secret is always a valid guess.

mod embedded;
pub mod loader;

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::Word;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SECRETS, SECRETS_COUNT};

/// Word store construction error
#[derive(Debug, Error)]
pub enum StoreError {
    /// No usable secret candidates after normalization. The secret pool is a
    /// startup invariant, so this aborts construction rather than surfacing
    /// later as a runtime failure.
    #[error("secret word pool is empty")]
    EmptySelectable,

    /// A list file could not be read.
    #[error("failed to read word list: {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable dictionary and secret pool
///
/// `valid` answers membership for guesses; `selectable` supplies secrets.
/// Invariant: every selectable word is also valid (enforced by union at
/// construction).
#[derive(Debug, Clone)]
pub struct WordStore {
    valid: FxHashSet<Word>,
    selectable: Vec<Word>,
}

impl WordStore {
    /// Build a store from raw word lists
    ///
    /// Normalizes every entry, drops entries that normalize to nothing, and
    /// deduplicates. The selectable words are added to the valid set.
    ///
    /// # Errors
    /// Returns [`StoreError::EmptySelectable`] if no secret candidate
    /// survives normalization.
    pub fn new<S: AsRef<str>>(valid: &[S], selectable: &[S]) -> Result<Self, StoreError> {
        let mut valid_set: FxHashSet<Word> = valid
            .iter()
            .map(|raw| Word::normalize(raw.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        let mut seen = FxHashSet::default();
        let selectable: Vec<Word> = selectable
            .iter()
            .map(|raw| Word::normalize(raw.as_ref()))
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();

        if selectable.is_empty() {
            return Err(StoreError::EmptySelectable);
        }

        valid_set.extend(selectable.iter().cloned());

        tracing::debug!(
            valid = valid_set.len(),
            selectable = selectable.len(),
            "word store loaded"
        );

        Ok(Self {
            valid: valid_set,
            selectable,
        })
    }

    /// Build the store from the embedded word lists
    ///
    /// # Panics
    /// Panics if the embedded secret list is empty, which would be a broken
    /// build.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DICTIONARY, SECRETS).expect("embedded word lists are non-empty")
    }

    /// Build the store from list files (one word per line)
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or the secrets file
    /// yields no usable words.
    pub fn from_files<P: AsRef<std::path::Path>>(
        dictionary: P,
        secrets: P,
    ) -> Result<Self, StoreError> {
        let read = |path: &std::path::Path| {
            loader::load_lines(path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let valid = read(dictionary.as_ref())?;
        let selectable = read(secrets.as_ref())?;

        Self::new(&valid, &selectable)
    }

    /// Membership test against the valid guess set
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Draw a uniformly random secret
    ///
    /// # Panics
    /// Never panics: construction guarantees a non-empty secret pool.
    #[must_use]
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.selectable
            .choose(rng)
            .expect("selectable pool is non-empty by construction")
    }

    /// Number of valid guess words
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Number of secret candidates
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.selectable.len()
    }
}
