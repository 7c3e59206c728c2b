//! Word list loading utilities
//!
//! Reads one-word-per-line list files. Normalization happens when the lines
//! are handed to [`WordStore::new`](crate::wordlists::WordStore::new), so the
//! files may contain accented or mixed-case entries.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw word lines from a file
///
/// Returns the non-empty trimmed lines of the file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordrace::wordlists::loader::load_lines;
///
/// let words = load_lines("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}
