//! Session state machine
//!
//! One [`SessionEngine`] owns one secret and the players racing to reveal
//! it. Players may join and leave while the session is open; finishing ranks
//! are handed out in the order guesses complete players, from a single
//! monotonically increasing counter.

use rand::Rng;
use thiserror::Error;

use crate::core::Word;
use crate::wordlists::WordStore;

use super::player::{PlayerId, PlayerState, ScoredGuess};

/// Why an operation was not accepted
///
/// These are ordinary negative results carried as data; the host maps them to
/// user-facing wording. A rejected operation mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Normalized guess is shorter than the secret
    #[error("guess is shorter than the secret")]
    TooShort,
    /// Normalized guess is longer than the secret
    #[error("guess is longer than the secret")]
    TooLong,
    /// Guess is not a dictionary word
    #[error("word is not in the dictionary")]
    NotInDictionary,
    /// Participant is not part of this session
    #[error("no such player in this session")]
    NoSuchPlayer,
    /// Participant already finished or left
    #[error("player is already done with this session")]
    AlreadyOver,
    /// Participant is already in the session
    #[error("player already joined this session")]
    AlreadyJoined,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The scored guess, as appended to the player's history
    pub guess: ScoredGuess,
    /// The player's known letters after this guess
    pub revealed: Vec<Option<u8>>,
    /// Rank just earned, when this guess completed the player
    pub finished: Option<i32>,
}

/// One play-through: a secret and the players guessing it
///
/// Players are kept in join order, which makes the ranking order derivable
/// and stable. All mutations go through `&mut self`, so a host drives one
/// session from one place at a time; two guesses racing for a rank resolve
/// in the order their calls are serialized.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    hidden: Word,
    players: Vec<PlayerState>,
    next_rank: i32,
}

impl SessionEngine {
    /// Start a session with a secret drawn from the store
    pub fn start<R: Rng + ?Sized>(
        store: &WordStore,
        rng: &mut R,
        participants: impl IntoIterator<Item = PlayerId>,
    ) -> Self {
        Self::with_secret(store.pick_secret(rng).clone(), participants)
    }

    /// Start a session with a fixed secret
    ///
    /// # Panics
    /// Panics on an empty secret: that is corrupt configuration, not a
    /// runtime condition.
    #[must_use]
    pub fn with_secret(hidden: Word, participants: impl IntoIterator<Item = PlayerId>) -> Self {
        assert!(!hidden.is_empty(), "secret word must not be empty");

        let mut session = Self {
            hidden,
            players: Vec::new(),
            next_rank: 1,
        };

        for id in participants {
            // Duplicate initial participants collapse to one state.
            let _ = session.add_player(id);
        }

        tracing::info!(
            players = session.players.len(),
            length = session.hidden.len(),
            "session started"
        );

        session
    }

    /// The secret being guessed
    #[must_use]
    pub fn hidden_word(&self) -> &Word {
        &self.hidden
    }

    /// Add a participant
    ///
    /// Late joins are allowed while the session is open; the new player
    /// starts with only the first letter revealed.
    ///
    /// # Errors
    /// [`Rejection::AlreadyJoined`] if the participant is already present.
    pub fn add_player(&mut self, id: PlayerId) -> Result<(), Rejection> {
        if self.player(&id).is_some() {
            return Err(Rejection::AlreadyJoined);
        }

        self.players.push(PlayerState::new(id, &self.hidden));
        Ok(())
    }

    /// Withdraw a participant
    ///
    /// A left player is terminal and never receives a rank.
    ///
    /// # Errors
    /// [`Rejection::NoSuchPlayer`] for an unknown participant,
    /// [`Rejection::AlreadyOver`] if the player already finished or left.
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<(), Rejection> {
        let player = self.player_mut(id).ok_or(Rejection::NoSuchPlayer)?;

        if player.is_over() {
            return Err(Rejection::AlreadyOver);
        }

        player.mark_left();
        Ok(())
    }

    /// Validate and apply a guess for a participant
    ///
    /// Validation short-circuits in a fixed order (player exists, player not
    /// over, length against the secret, dictionary membership) and nothing
    /// is mutated unless every check passes. Length is checked before
    /// membership so a wrong-length word gets its specific reason. If the
    /// guess completes the player, the next rank is assigned here, the single
    /// handout point.
    ///
    /// # Errors
    /// The [`Rejection`] describing the first failed check.
    pub fn submit_guess(
        &mut self,
        store: &WordStore,
        id: &PlayerId,
        raw: &str,
    ) -> Result<GuessOutcome, Rejection> {
        let hidden_len = self.hidden.len();

        {
            let player = self.player(id).ok_or(Rejection::NoSuchPlayer)?;
            if player.is_over() {
                return Err(Rejection::AlreadyOver);
            }
        }

        let word = Word::normalize(raw);
        if word.len() < hidden_len {
            return Err(Rejection::TooShort);
        }
        if word.len() > hidden_len {
            return Err(Rejection::TooLong);
        }
        if !store.contains(&word) {
            return Err(Rejection::NotInDictionary);
        }

        let hidden = self.hidden.clone();
        let next_rank = self.next_rank;
        let player = self
            .player_mut(id)
            .expect("player presence checked above");

        let guess = player.submit(word, &hidden).clone();

        let finished = if player.is_complete() {
            player.set_rank(next_rank);
            self.next_rank += 1;
            tracing::info!(player = %id, rank = next_rank, "player found the word");
            Some(next_rank)
        } else {
            None
        };

        let revealed = self
            .player(id)
            .expect("player presence checked above")
            .revealed()
            .to_vec();

        Ok(GuessOutcome {
            guess,
            revealed,
            finished,
        })
    }

    /// True when every player is finished or has left
    ///
    /// Vacuously true for a session nobody joined.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().all(PlayerState::is_over)
    }

    /// True if any player submitted at least one guess
    #[must_use]
    pub fn any_played(&self) -> bool {
        self.players.iter().any(PlayerState::has_played)
    }

    /// Look up a participant's state
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// All participants in join order
    #[must_use]
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Players in finishing order
    ///
    /// Ranked players come first, by rank. Unranked players sort with the
    /// next unassigned rank as their key, so they trail every ranked player
    /// while keeping join order among themselves.
    #[must_use]
    pub fn ranked_players(&self) -> Vec<&PlayerState> {
        let mut players: Vec<&PlayerState> = self.players.iter().collect();
        players.sort_by_key(|p| if p.rank() > 0 { p.rank() } else { self.next_rank });
        players
    }

    fn player_mut(&mut self, id: &PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|p| p.id() == id)
    }
}
