//! Per-player session state
//!
//! A player accumulates knowledge about the secret across guesses: every
//! `Found` verdict reveals that position permanently. The first letter is
//! revealed from the start, as the game's opening hint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{LetterScore, Word, score};

/// Opaque stable participant identifier
///
/// The engine never resolves this to a display identity; that is the host's
/// concern at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap a stable identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One guess and its verdicts, as stored in a player's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: Word,
    scores: Vec<LetterScore>,
}

impl ScoredGuess {
    /// The guessed word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Per-letter verdicts, positionally aligned with the word
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }
}

/// A participant's accumulated state within one session
///
/// `rank` stays at the −1 sentinel until the engine assigns a finishing
/// position; `left` is a terminal exit flag. `revealed` only ever gains
/// letters: a slot that becomes known never reverts.
#[derive(Debug, Clone)]
pub struct PlayerState {
    id: PlayerId,
    rank: i32,
    left: bool,
    revealed: Vec<Option<u8>>,
    history: Vec<ScoredGuess>,
}

impl PlayerState {
    /// Rank sentinel for "not ranked": never finished, or left
    pub const UNRANKED: i32 = -1;

    /// Create a fresh player for a secret, with the first letter revealed
    #[must_use]
    pub fn new(id: PlayerId, hidden: &Word) -> Self {
        let mut revealed = vec![None; hidden.len()];
        if let (Some(slot), Some(first)) = (revealed.first_mut(), hidden.first_letter()) {
            *slot = Some(first);
        }

        Self {
            id,
            rank: Self::UNRANKED,
            left: false,
            revealed,
            history: Vec::new(),
        }
    }

    /// Score a guess, append it to history, and merge revealed letters
    ///
    /// Every position scored `Found` becomes known. The caller has already
    /// validated the guess (length, dictionary membership).
    pub fn submit(&mut self, guess: Word, hidden: &Word) -> &ScoredGuess {
        let scores = score(&guess, hidden);

        for ((slot, &letter), verdict) in self.revealed.iter_mut().zip(guess.letters()).zip(&scores)
        {
            if *verdict == LetterScore::Found {
                *slot = Some(letter);
            }
        }

        self.history.push(ScoredGuess {
            word: guess,
            scores,
        });
        self.history.last().expect("just pushed")
    }

    /// True once every position of the secret is known
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// True once the player is done with the session: complete, or left
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_complete() || self.left
    }

    /// True if the player submitted at least one guess
    #[must_use]
    pub fn has_played(&self) -> bool {
        !self.history.is_empty()
    }

    /// Participant identifier
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Finishing rank, or [`Self::UNRANKED`]
    #[must_use]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// True if the player withdrew
    #[must_use]
    pub fn has_left(&self) -> bool {
        self.left
    }

    /// Known letters by position (`None` = still unknown)
    #[must_use]
    pub fn revealed(&self) -> &[Option<u8>] {
        &self.revealed
    }

    /// Guess history, oldest first
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    pub(crate) fn set_rank(&mut self, rank: i32) {
        debug_assert_eq!(self.rank, Self::UNRANKED, "rank is assigned at most once");
        self.rank = rank;
    }

    pub(crate) fn mark_left(&mut self) {
        self.left = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(hidden: &Word) -> PlayerState {
        PlayerState::new(PlayerId::from("alice"), hidden)
    }

    #[test]
    fn first_letter_is_revealed_from_the_start() {
        let hidden = Word::normalize("arbre");
        let state = player(&hidden);

        assert_eq!(state.revealed(), &[Some(b'a'), None, None, None, None]);
        assert!(!state.is_complete());
        assert!(!state.has_played());
    }

    #[test]
    fn submit_merges_found_letters() {
        let hidden = Word::normalize("arbre");
        let mut state = player(&hidden);

        state.submit(Word::normalize("armee"), &hidden);
        // a r m e e -> Found Found Wrong Wrong Found
        assert_eq!(
            state.revealed(),
            &[Some(b'a'), Some(b'r'), None, None, Some(b'e')]
        );
        assert!(state.has_played());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn revealed_slots_never_revert() {
        let hidden = Word::normalize("arbre");
        let mut state = player(&hidden);

        state.submit(Word::normalize("armee"), &hidden);
        let after_first = state.revealed().to_vec();

        // An all-wrong guess must not clear anything.
        state.submit(Word::normalize("folio"), &hidden);
        assert_eq!(state.revealed(), after_first.as_slice());
    }

    #[test]
    fn exact_guess_completes() {
        let hidden = Word::normalize("arbre");
        let mut state = player(&hidden);

        state.submit(Word::normalize("arbre"), &hidden);
        assert!(state.is_complete());
        assert!(state.is_over());
    }

    #[test]
    fn completion_can_accumulate_across_guesses() {
        let hidden = Word::normalize("cat");
        let mut state = PlayerState::new(PlayerId::from("bob"), &hidden);

        state.submit(Word::normalize("cap"), &hidden); // reveals c, a
        assert!(!state.is_complete());
        state.submit(Word::normalize("bit"), &hidden); // reveals t
        assert!(state.is_complete());
    }

    #[test]
    fn left_player_is_over_without_completing() {
        let hidden = Word::normalize("arbre");
        let mut state = player(&hidden);

        state.mark_left();
        assert!(state.is_over());
        assert!(!state.is_complete());
        assert_eq!(state.rank(), PlayerState::UNRANKED);
    }

    #[test]
    fn history_keeps_submission_order() {
        let hidden = Word::normalize("arbre");
        let mut state = player(&hidden);

        state.submit(Word::normalize("radar"), &hidden);
        state.submit(Word::normalize("armee"), &hidden);

        let words: Vec<&str> = state
            .history()
            .iter()
            .map(|g| g.word().as_str())
            .collect();
        assert_eq!(words, vec!["radar", "armee"]);
    }
}
