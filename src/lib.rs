//! Wordrace
//!
//! Engine for a multiplayer word-guessing race in the Wordle family: a hidden
//! word is guessed letter by letter, every guess is scored against it, players
//! are ranked by the order in which they fully reveal it, and finished
//! sessions fold into durable statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordrace::core::Word;
//! use wordrace::session::{PlayerId, SessionEngine};
//! use wordrace::wordlists::WordStore;
//!
//! let store = WordStore::new(&["chat", "char"], &["chat"]).unwrap();
//! let mut session = SessionEngine::with_secret(
//!     Word::normalize("chat"),
//!     [PlayerId::from("alice")],
//! );
//!
//! let outcome = session
//!     .submit_guess(&store, &PlayerId::from("alice"), "chat")
//!     .unwrap();
//! assert_eq!(outcome.finished, Some(1));
//! assert!(session.is_over());
//! ```

// Core domain types
pub mod core;

// Multi-player session state machine
pub mod session;

// Statistics aggregation and persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
