//! Line-based stats record parsing
//!
//! A stats record is a short fixed-order text file: one JSON object per
//! counter line, then trailing integer scalar lines. These helpers read one
//! expected line at a time and report which line was malformed.

use std::hash::Hash;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::tally::Tally;

/// Why a persisted record could not be decoded
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record ended before the expected line
    #[error("record is missing line {line}")]
    MissingLine { line: usize },

    /// A counter line is not a valid JSON counter object
    #[error("malformed counter on line {line}")]
    Counter {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A scalar line is not a nonnegative integer
    #[error("malformed scalar on line {line}")]
    Scalar {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Read the next line as a JSON counter object
pub(super) fn read_counter_line<'a, K>(
    lines: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Tally<K>, RecordError>
where
    K: DeserializeOwned + Eq + Hash,
{
    let text = lines.next().ok_or(RecordError::MissingLine { line })?;
    serde_json::from_str(text).map_err(|source| RecordError::Counter { line, source })
}

/// Read the next line as a nonnegative integer scalar
pub(super) fn read_scalar_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<u64, RecordError> {
    let text = lines.next().ok_or(RecordError::MissingLine { line })?;
    text.trim()
        .parse()
        .map_err(|source| RecordError::Scalar { line, source })
}
