//! Normalized word representation
//!
//! A Word is the canonical form every stored dictionary entry and every
//! incoming guess is reduced to before any comparison: diacritics
//! transliterated away, non-alphabetic characters dropped, lowercased.

use std::fmt;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// A normalized word: lowercase ASCII letters only
///
/// Construction always goes through [`Word::normalize`], so any two `Word`
/// values compare on canonical form. The transform is total (any input string
/// yields a `Word`, possibly empty) and idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalize a raw string into a `Word`
    ///
    /// Transliterates diacritics ("é" → "e", "œ" → "oe"), keeps ASCII
    /// alphabetic characters only, and lowercases the remainder.
    ///
    /// # Examples
    /// ```
    /// use wordrace::core::Word;
    ///
    /// assert_eq!(Word::normalize("Épée").as_str(), "epee");
    /// assert_eq!(Word::normalize("cœur!").as_str(), "coeur");
    /// assert_eq!(Word::normalize("  arbre\n").as_str(), "arbre");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let text: String = deunicode(raw)
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the normalization left nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the word as bytes (all ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// First letter, if any
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Option<u8> {
        self.0.as_bytes().first().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
