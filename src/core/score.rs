//! Letter scoring against the hidden word
//!
//! Each letter of a guess is classified against the hidden word:
//! - `Found`: correct letter in the correct position
//! - `Exist`: letter present elsewhere and not yet accounted for
//! - `Wrong`: letter absent, or all its occurrences already credited
//!
//! Duplicate letters are handled with a two-pass scan over a multiset of the
//! hidden word's letters: exact matches reserve their letter first, then the
//! remaining pool is credited left to right. A guess never receives more
//! `Found`/`Exist` verdicts for a letter than the hidden word contains.

use rustc_hash::FxHashMap;

use super::Word;

/// Verdict for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LetterScore {
    /// Correct letter, correct position
    Found,
    /// Letter present elsewhere in the hidden word
    Exist,
    /// Letter absent or over-counted
    Wrong,
}

/// Score a guess against the hidden word
///
/// Returns one [`LetterScore`] per letter of `guess`, positionally aligned.
///
/// # Algorithm
/// 1. Build letter → remaining-count from `hidden`.
/// 2. First pass: decrement the count for every exact positional match, so a
///    duplicate elsewhere in the guess cannot steal a reserved letter.
/// 3. Second pass, left to right: exact match → `Found`; else if the letter
///    still has remaining count → `Exist` and decrement; else `Wrong`.
///
/// # Panics
/// Panics if `guess` and `hidden` differ in length. Callers validate length
/// before scoring; a mismatch here is a contract violation, not user input.
///
/// # Examples
/// ```
/// use wordrace::core::{score, LetterScore, Word};
///
/// let hidden = Word::normalize("arbre");
/// let guess = Word::normalize("armee");
/// let scores = score(&guess, &hidden);
/// assert_eq!(scores[0], LetterScore::Found); // a
/// assert_eq!(scores[1], LetterScore::Found); // r
/// assert_eq!(scores[2], LetterScore::Wrong); // m
/// ```
#[must_use]
pub fn score(guess: &Word, hidden: &Word) -> Vec<LetterScore> {
    assert_eq!(
        guess.len(),
        hidden.len(),
        "scored words must have equal length"
    );

    let guess = guess.letters();
    let hidden = hidden.letters();

    let mut remaining: FxHashMap<u8, usize> = FxHashMap::default();
    for &letter in hidden {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: reserve exact matches
    for (&g, &h) in guess.iter().zip(hidden) {
        if g == h
            && let Some(count) = remaining.get_mut(&g)
        {
            *count -= 1;
        }
    }

    // Second pass: classify left to right from the remaining pool
    guess
        .iter()
        .zip(hidden)
        .map(|(&g, &h)| {
            if g == h {
                LetterScore::Found
            } else if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                *count -= 1;
                LetterScore::Exist
            } else {
                LetterScore::Wrong
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Exist, Found, Wrong};

    fn run(guess: &str, hidden: &str) -> Vec<LetterScore> {
        score(&Word::normalize(guess), &Word::normalize(hidden))
    }

    #[test]
    fn all_found_on_exact_match() {
        assert_eq!(run("arbre", "arbre"), vec![Found; 5]);
    }

    #[test]
    fn all_wrong_when_disjoint() {
        assert_eq!(run("chou", "baie"), vec![Wrong; 4]);
    }

    #[test]
    fn radar_against_arbre() {
        // arbre has one a and two r's, none reserved by an exact match:
        // r(0) and r(4) both draw from the pool, a(1) takes the single a,
        // the second a is over-counted.
        assert_eq!(run("radar", "arbre"), vec![Exist, Exist, Wrong, Wrong, Exist]);
    }

    #[test]
    fn exact_match_reserves_duplicate() {
        // hidden "belle" has two l's: both stray l's in "llama" are credited.
        assert_eq!(run("llama", "belle"), vec![Exist, Exist, Wrong, Wrong, Wrong]);
        // guess "balle": both l's and the final e are exact.
        assert_eq!(run("balle", "belle"), vec![Found, Wrong, Found, Found, Found]);
    }

    #[test]
    fn later_exact_match_wins_over_earlier_exist() {
        // hidden "abbey"-style case: hidden "natte", guess "tarte".
        // hidden has two t's; the exact t at position 3 reserves one,
        // the leading t draws the other from the pool.
        assert_eq!(run("tarte", "natte"), vec![Exist, Found, Wrong, Found, Found]);
    }

    #[test]
    fn exist_credits_capped_by_hidden_count() {
        // hidden "merle" has two e's; the exact e reserves one, the first
        // stray e draws the other, the last stray e is over-counted.
        assert_eq!(run("reees", "merle"), vec![Exist, Found, Exist, Wrong, Wrong]);
        assert_eq!(run("geler", "merle"), vec![Wrong, Found, Exist, Exist, Exist]);
    }

    #[test]
    fn output_length_matches_input() {
        for (guess, hidden) in [("a", "b"), ("arbre", "radar"), ("bateau", "cirque")] {
            assert_eq!(run(guess, hidden).len(), guess.len());
        }
    }

    #[test]
    fn found_count_equals_exact_index_matches() {
        for (guess, hidden) in [("radar", "arbre"), ("balle", "belle"), ("tarte", "natte")] {
            let scores = run(guess, hidden);
            let exact = guess
                .bytes()
                .zip(hidden.bytes())
                .filter(|(g, h)| g == h)
                .count();
            let found = scores.iter().filter(|s| **s == Found).count();
            assert_eq!(found, exact);
        }
    }

    #[test]
    fn credited_count_never_exceeds_hidden_count() {
        for (guess, hidden) in [("radar", "arbre"), ("reees", "merle"), ("llama", "belle")] {
            let scores = run(guess, hidden);
            for letter in guess.bytes() {
                let credited = guess
                    .bytes()
                    .zip(&scores)
                    .filter(|(g, s)| *g == letter && **s != Wrong)
                    .count();
                let available = hidden.bytes().filter(|h| *h == letter).count();
                assert!(credited <= available, "letter {} over-credited", letter as char);
            }
        }
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn length_mismatch_is_a_contract_violation() {
        run("arbre", "bateau");
    }
}
