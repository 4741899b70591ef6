//! Exact substring search over code-point slices.
//!
//! Every function here works on `&[char]`, so multi-byte characters are
//! compared as whole scalar values rather than as UTF-8 bytes. The search is
//! the naive `O(|haystack| * |needle|)` scan; the builder only ever searches
//! its own live region with short needles.
//!
//! All functions share the same "not found" contract: an empty haystack, an
//! empty needle, or a needle longer than the haystack never matches.
//!
//! ```rust
//! use runebuilder::search;
//!
//! let haystack: Vec<char> = "Hellöö".chars().collect();
//! assert_eq!(search::find_all(&haystack, &['ö']), vec![4, 5]);
//! assert_eq!(search::find_first(&haystack, &['ö']), Some(4));
//! assert_eq!(search::find_last(&haystack, &['ö']), Some(5));
//! ```

/// Returns `true` if `needle` matches `haystack` starting at `pos`.
///
/// Compares code points one by one and stops at the first mismatch. A needle
/// that would run past the end of the haystack never matches.
#[must_use]
pub fn matches_at(haystack: &[char], needle: &[char], pos: usize) -> bool {
    let Some(window) = haystack.get(pos..pos.saturating_add(needle.len())) else {
        return false;
    };
    window.iter().zip(needle).all(|(h, n)| h == n)
}

/// Last candidate start offset, or `None` when nothing can match.
fn last_candidate(haystack: &[char], needle: &[char]) -> Option<usize> {
    if haystack.is_empty() || needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    Some(haystack.len() - needle.len())
}

/// Returns the smallest offset at which `needle` occurs in `haystack`.
#[must_use]
pub fn find_first(haystack: &[char], needle: &[char]) -> Option<usize> {
    let last = last_candidate(haystack, needle)?;
    (0..=last).find(|&pos| matches_at(haystack, needle, pos))
}

/// Returns the largest offset at which `needle` occurs in `haystack`.
///
/// Candidates are visited in descending order, so the scan stops at the
/// rightmost match.
#[must_use]
pub fn find_last(haystack: &[char], needle: &[char]) -> Option<usize> {
    let last = last_candidate(haystack, needle)?;
    (0..=last).rev().find(|&pos| matches_at(haystack, needle, pos))
}

/// Returns every offset at which `needle` occurs, in ascending order.
///
/// Overlapping occurrences are all reported: searching `"aa"` in `"aaa"`
/// yields `[0, 1]`.
#[must_use]
pub fn find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let Some(last) = last_candidate(haystack, needle) else {
        return Vec::new();
    };
    let mut items = Vec::with_capacity(8);
    items.extend((0..=last).filter(|&pos| matches_at(haystack, needle, pos)));
    items
}

/// Returns the non-overlapping occurrences of `needle`, left to right.
///
/// This is the subset of [`find_all`] that survives when each match consumes
/// its span before the scan resumes, i.e. the occurrences a replacement
/// actually rewrites.
#[must_use]
pub fn find_all_disjoint(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut next_free = 0;
    let mut items = find_all(haystack, needle);
    items.retain(|&pos| {
        if pos < next_free {
            return false;
        }
        next_free = pos + needle.len();
        true
    });
    items
}
