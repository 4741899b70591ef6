//! Operations composed from the core buffer primitives: trimming, reversal,
//! substring extraction, search and replacement.

use core::cmp::Ordering;

use log::debug;

use super::StringBuilder;
use crate::{
    error::{RangeError, Result},
    search,
};

/// Code points removed by [`StringBuilder::trim`] and friends when no explicit
/// set is given.
pub const DEFAULT_TRIM_SET: [char; 4] = [' ', '\t', '\n', '\r'];

fn trim_set(set: &[char]) -> &[char] {
    if set.is_empty() { &DEFAULT_TRIM_SET } else { set }
}

fn decode(text: &str) -> Vec<char> {
    text.chars().collect()
}

impl StringBuilder {
    /// Removes leading and trailing ASCII whitespace (space, tab, newline,
    /// carriage return).
    pub fn trim(&mut self) {
        self.trim_matches(&[]);
    }

    /// Removes leading ASCII whitespace.
    pub fn trim_start(&mut self) {
        self.trim_start_matches(&[]);
    }

    /// Removes trailing ASCII whitespace.
    pub fn trim_end(&mut self) {
        self.trim_end_matches(&[]);
    }

    /// Removes the longest prefix and suffix made only of code points in
    /// `set`. An empty `set` means [`DEFAULT_TRIM_SET`].
    ///
    /// ```rust
    /// use runebuilder::StringBuilder;
    ///
    /// let mut sb = StringBuilder::from_text("--==Hello==--");
    /// sb.trim_matches(&['-', '=']);
    /// assert_eq!(sb.to_string(), "Hello");
    /// ```
    pub fn trim_matches(&mut self, set: &[char]) {
        // suffix first, so the prefix shift moves as little as possible
        self.trim_end_matches(set);
        self.trim_start_matches(set);
    }

    /// Removes the longest prefix made only of code points in `set`.
    pub fn trim_start_matches(&mut self, set: &[char]) {
        let set = trim_set(set);
        let start = self
            .as_runes()
            .iter()
            .position(|c| !set.contains(c))
            .unwrap_or(self.len);
        if start > 0 {
            self.remove_span(0, start);
        }
    }

    /// Removes the longest suffix made only of code points in `set`.
    pub fn trim_end_matches(&mut self, set: &[char]) {
        let set = trim_set(set);
        self.len = self
            .as_runes()
            .iter()
            .rposition(|c| !set.contains(c))
            .map_or(0, |last| last + 1);
    }

    /// Reverses the text in place, code point by code point.
    pub fn reverse(&mut self) {
        let len = self.len;
        self.storage[..len].reverse();
    }

    /// Returns a copy of the code points in `start..end`.
    ///
    /// # Errors
    ///
    /// - [`RangeError::EndPastEnd`] if `end > len()`.
    /// - [`RangeError::StartAfterEnd`] if `start > end`.
    pub fn substring(&self, start: usize, end: usize) -> Result<String> {
        if end > self.len {
            return Err(RangeError::EndPastEnd { end, len: self.len }.into());
        }
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end }.into());
        }
        Ok(self.storage[start..end].iter().collect())
    }

    /// Offset of the first occurrence of `needle`.
    #[must_use]
    pub fn find_first(&self, needle: &str) -> Option<usize> {
        search::find_first(self.as_runes(), &decode(needle))
    }

    /// Offset of the last occurrence of `needle`.
    #[must_use]
    pub fn find_last(&self, needle: &str) -> Option<usize> {
        search::find_last(self.as_runes(), &decode(needle))
    }

    /// Offsets of every occurrence of `needle`, overlaps included.
    #[must_use]
    pub fn find_all(&self, needle: &str) -> Vec<usize> {
        search::find_all(self.as_runes(), &decode(needle))
    }

    /// Returns `true` if `needle` occurs in the text.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.find_first(needle).is_some()
    }

    /// Replaces every non-overlapping occurrence of `old` with `new`, left to
    /// right, and returns how many were replaced.
    ///
    /// Occurrences are located once, before anything is rewritten; text
    /// produced by the replacement is never searched again.
    ///
    /// ```rust
    /// use runebuilder::StringBuilder;
    ///
    /// let mut sb = StringBuilder::from_text("Hello World");
    /// assert_eq!(sb.replace("Hello", "Hallöchen"), 1);
    /// assert_eq!(sb.to_string(), "Hallöchen World");
    /// ```
    pub fn replace(&mut self, old: &str, new: &str) -> usize {
        if old == new {
            return 0;
        }

        let (old, new) = (decode(old), decode(new));
        let occurrences = search::find_all_disjoint(self.as_runes(), &old);
        if occurrences.is_empty() {
            return 0;
        }

        debug!(
            "replacing {} occurrences ({} -> {} runes)",
            occurrences.len(),
            old.len(),
            new.len()
        );

        match new.len().cmp(&old.len()) {
            Ordering::Less => {
                let shrink = old.len() - new.len();
                for (i, &offset) in occurrences.iter().enumerate() {
                    let at = offset - shrink * i;
                    self.storage[at..at + new.len()].copy_from_slice(&new);
                    self.remove_span(at + new.len(), shrink);
                }
            }
            Ordering::Equal => {
                for &at in &occurrences {
                    self.storage[at..at + new.len()].copy_from_slice(&new);
                }
            }
            Ordering::Greater => {
                let growth = new.len() - old.len();
                self.reserve(growth * occurrences.len());
                let (head, tail) = new.split_at(old.len());
                for (i, &offset) in occurrences.iter().enumerate() {
                    let at = offset + growth * i;
                    self.storage[at..at + head.len()].copy_from_slice(head);
                    self.splice_in(at + head.len(), growth, tail.iter().copied());
                }
            }
        }

        occurrences.len()
    }

    /// Replaces every occurrence of the code point `old` with `new` and
    /// returns how many were replaced. The length never changes.
    pub fn replace_rune(&mut self, old: char, new: char) -> usize {
        if old == new {
            return 0;
        }

        let occurrences = search::find_all(self.as_runes(), &[old]);
        for &at in &occurrences {
            self.storage[at] = new;
        }
        occurrences.len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::BuilderError;

    #[rstest]
    #[case("   Hello World   ", "Hello World")]
    #[case("\t\r\n Hello \n", "Hello")]
    #[case("Hello", "Hello")]
    #[case(" \t ", "")]
    #[case("", "")]
    fn trim_default_set(#[case] initial: &str, #[case] expected: &str) {
        let mut sb = StringBuilder::from_text(initial);
        sb.trim();
        assert_eq!(sb, expected);
    }

    #[test]
    fn trim_one_side() {
        let mut sb = StringBuilder::from_text("  ab  ");
        sb.trim_start();
        assert_eq!(sb, "ab  ");

        let mut sb = StringBuilder::from_text("  ab  ");
        sb.trim_end();
        assert_eq!(sb, "  ab");
    }

    #[test]
    fn trim_custom_set_leaves_whitespace() {
        let mut sb = StringBuilder::from_text("xx ö xx");
        sb.trim_matches(&['x']);
        assert_eq!(sb, " ö ");

        sb.trim_start_matches(&[' ', 'ö']);
        assert_eq!(sb, "");
    }

    #[test]
    fn trim_keeps_capacity() {
        let mut sb = StringBuilder::from_text("  ab  ");
        sb.trim();
        assert_eq!(sb.capacity(), 6);
        sb.append("cd");
        assert_eq!(sb, "abcd");
    }

    #[rstest]
    #[case("Hello", "olleH")]
    #[case("Hellöö", "öölleH")]
    #[case("a", "a")]
    #[case("", "")]
    fn reverse_cases(#[case] initial: &str, #[case] expected: &str) {
        let mut sb = StringBuilder::from_text(initial);
        sb.reverse();
        assert_eq!(sb, expected);
    }

    #[test]
    fn substring_bounds() {
        let sb = StringBuilder::from_text("Hellö Wörld");
        assert_eq!(sb.substring(6, 11).unwrap(), "Wörld");
        assert_eq!(sb.substring(3, 3).unwrap(), "");
        assert_eq!(
            sb.substring(0, 12).unwrap_err(),
            BuilderError::Range(RangeError::EndPastEnd { end: 12, len: 11 })
        );
        assert_eq!(
            sb.substring(5, 4).unwrap_err(),
            BuilderError::Range(RangeError::StartAfterEnd { start: 5, end: 4 })
        );
    }

    #[test]
    fn substring_ignores_reserved_region() {
        let mut sb = StringBuilder::with_capacity(16);
        sb.append("abc");
        assert!(sb.substring(0, 4).is_err());
    }

    #[test]
    fn search_methods_delegate_to_live_region() {
        let mut sb = StringBuilder::from_text("Hellöö");
        assert_eq!(sb.find_all("ö"), [4, 5]);
        assert_eq!(sb.find_first("l"), Some(2));
        assert_eq!(sb.find_last("l"), Some(3));
        assert!(sb.contains("llö"));

        // stale runes past `len` must never match
        sb.remove(4, 2).unwrap();
        assert!(sb.find_all("ö").is_empty());
        assert!(!sb.contains(""));
    }

    #[rstest]
    #[case("Hello World", "Hello", "Hallöchen", "Hallöchen World", 1)]
    #[case("a-b-c", "-", "--", "a--b--c", 2)]
    #[case("a--b--c", "--", "+", "a+b+c", 2)]
    #[case("abcabc", "bc", "xy", "axyaxy", 2)]
    #[case("aaaa", "aa", "b", "bb", 2)]
    #[case("aaa", "aa", "b", "ba", 1)]
    #[case("öxöxö", "ö", "", "xx", 3)]
    #[case("Hello", "z", "y", "Hello", 0)]
    #[case("Hello", "", "y", "Hello", 0)]
    #[case("ab", "ab", "abab", "abab", 1)]
    fn replace_cases(
        #[case] initial: &str,
        #[case] old: &str,
        #[case] new: &str,
        #[case] expected: &str,
        #[case] replaced: usize,
    ) {
        let mut sb = StringBuilder::from_text(initial);
        assert_eq!(sb.replace(old, new), replaced);
        assert_eq!(sb, expected);
        if !old.is_empty() {
            assert_eq!(sb.to_string(), initial.replace(old, new));
        }
    }

    #[test]
    fn replace_same_is_noop() {
        let mut sb = StringBuilder::from_text("Hello");
        assert_eq!(sb.replace("l", "l"), 0);
        assert_eq!(sb, "Hello");
    }

    #[test]
    fn replace_rune_overwrites_in_place() {
        let mut sb = StringBuilder::from_text("Hellöö");
        assert_eq!(sb.replace_rune('ö', 'o'), 2);
        assert_eq!(sb, "Helloo");
        assert_eq!(sb.replace_rune('x', 'y'), 0);
        assert_eq!(sb.replace_rune('o', 'o'), 0);
        assert_eq!(sb.len(), 6);
    }
}
