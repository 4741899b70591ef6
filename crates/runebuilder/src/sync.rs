//! A [`StringBuilder`] that can be shared between threads.
//!
//! [`SyncStringBuilder`] owns its builder behind a `parking_lot::Mutex`.
//! Every method takes `&self`, holds the lock for its whole duration and
//! releases it on every exit path, errors included. Reads are guarded too:
//! there is no way to obtain a reference into the storage that outlives the
//! call. Code that needs a view either copies ([`SyncStringBuilder::to_runes`])
//! or runs inside the lock ([`SyncStringBuilder::with_runes`]).
//!
//! Each call is atomic on its own; a sequence of calls is not. Use
//! [`SyncStringBuilder::with_builder`] to run several operations under one
//! lock acquisition.
//!
//! The lock is not reentrant. Nothing foreign runs while it is held:
//! formatting and serialization work on a copy taken under a short lock, so
//! a builder can be formatted into itself.
//!
//! ```rust
//! use std::thread;
//!
//! use runebuilder::SyncStringBuilder;
//!
//! let sb = SyncStringBuilder::new();
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| sb.append("ab"));
//!     }
//! });
//! assert_eq!(sb.to_string(), "abababab");
//! ```

use core::fmt;
use std::io;

use parking_lot::Mutex;

use crate::{BuilderOptions, StringBuilder, error::Result};

/// Lock-guarded [`StringBuilder`].
#[derive(Debug, Default)]
pub struct SyncStringBuilder {
    inner: Mutex<StringBuilder>,
}

impl SyncStringBuilder {
    /// Creates an empty builder without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` code points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StringBuilder::with_capacity(capacity).into()
    }

    /// Creates an empty builder configured by `options`.
    #[must_use]
    pub fn with_options(options: BuilderOptions) -> Self {
        StringBuilder::with_options(options).into()
    }

    /// Creates a builder holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        StringBuilder::from_text(text).into()
    }

    /// Consumes the wrapper and returns the builder.
    #[must_use]
    pub fn into_inner(self) -> StringBuilder {
        self.inner.into_inner()
    }

    /// Runs `f` with exclusive access to the builder.
    ///
    /// Everything `f` does is atomic with respect to other callers. `f` must
    /// not touch this same `SyncStringBuilder` (directly, through
    /// formatting, or through `io::Write`): the lock is not reentrant and
    /// such a call never returns.
    ///
    /// ```rust
    /// use runebuilder::SyncStringBuilder;
    ///
    /// let sb = SyncStringBuilder::from_text("Hello");
    /// sb.with_builder(|b| {
    ///     b.insert(0, ">> ")?;
    ///     b.remove(3, 1)
    /// })?;
    /// assert_eq!(sb.to_string(), ">> ello");
    /// # Ok::<(), runebuilder::BuilderError>(())
    /// ```
    pub fn with_builder<R>(&self, f: impl FnOnce(&mut StringBuilder) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Runs `f` on a view of the live region while holding the lock.
    ///
    /// As with [`SyncStringBuilder::with_builder`], `f` must not call back
    /// into this builder.
    pub fn with_runes<R>(&self, f: impl FnOnce(&[char]) -> R) -> R {
        f(self.inner.lock().as_runes())
    }

    /// Number of code points in the represented text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the builder holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of code points the builder can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Owned copy of the live region.
    #[must_use]
    pub fn to_runes(&self) -> Vec<char> {
        self.inner.lock().to_runes()
    }

    /// See [`StringBuilder::reserve`].
    pub fn reserve(&self, additional: usize) {
        self.inner.lock().reserve(additional);
    }

    /// See [`StringBuilder::append`].
    pub fn append(&self, text: &str) {
        self.inner.lock().append(text);
    }

    /// See [`StringBuilder::append_line`].
    pub fn append_line(&self, text: &str) {
        self.inner.lock().append_line(text);
    }

    /// See [`StringBuilder::append_rune`].
    pub fn append_rune(&self, c: char) {
        self.inner.lock().append_rune(c);
    }

    /// See [`StringBuilder::append_runes`].
    pub fn append_runes(&self, runes: &[char]) {
        self.inner.lock().append_runes(runes);
    }

    /// See [`StringBuilder::append_list`].
    pub fn append_list<S: AsRef<str>>(&self, words: &[S]) {
        self.inner.lock().append_list(words);
    }

    /// See [`StringBuilder::append_bytes`].
    pub fn append_bytes(&self, bytes: &[u8]) -> usize {
        self.inner.lock().append_bytes(bytes)
    }

    /// See [`StringBuilder::insert`].
    ///
    /// # Errors
    ///
    /// As [`StringBuilder::insert`].
    pub fn insert(&self, index: usize, text: &str) -> Result<()> {
        self.inner.lock().insert(index, text)
    }

    /// See [`StringBuilder::remove`].
    ///
    /// # Errors
    ///
    /// As [`StringBuilder::remove`].
    pub fn remove(&self, start: usize, count: usize) -> Result<()> {
        self.inner.lock().remove(start, count)
    }

    /// See [`StringBuilder::clear`].
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// See [`StringBuilder::get`].
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.inner.lock().get(index)
    }

    /// See [`StringBuilder::set_rune_at`].
    ///
    /// # Errors
    ///
    /// As [`StringBuilder::set_rune_at`].
    pub fn set_rune_at(&self, index: usize, value: char) -> Result<()> {
        self.inner.lock().set_rune_at(index, value)
    }

    /// See [`StringBuilder::skip`].
    ///
    /// # Errors
    ///
    /// As [`StringBuilder::skip`].
    pub fn skip(&self, count: usize) -> Result<()> {
        self.inner.lock().skip(count)
    }

    /// See [`StringBuilder::trim`].
    pub fn trim(&self) {
        self.inner.lock().trim();
    }

    /// See [`StringBuilder::trim_start`].
    pub fn trim_start(&self) {
        self.inner.lock().trim_start();
    }

    /// See [`StringBuilder::trim_end`].
    pub fn trim_end(&self) {
        self.inner.lock().trim_end();
    }

    /// See [`StringBuilder::trim_matches`].
    pub fn trim_matches(&self, set: &[char]) {
        self.inner.lock().trim_matches(set);
    }

    /// See [`StringBuilder::trim_start_matches`].
    pub fn trim_start_matches(&self, set: &[char]) {
        self.inner.lock().trim_start_matches(set);
    }

    /// See [`StringBuilder::trim_end_matches`].
    pub fn trim_end_matches(&self, set: &[char]) {
        self.inner.lock().trim_end_matches(set);
    }

    /// See [`StringBuilder::reverse`].
    pub fn reverse(&self) {
        self.inner.lock().reverse();
    }

    /// See [`StringBuilder::substring`].
    ///
    /// # Errors
    ///
    /// As [`StringBuilder::substring`].
    pub fn substring(&self, start: usize, end: usize) -> Result<String> {
        self.inner.lock().substring(start, end)
    }

    /// See [`StringBuilder::find_first`].
    #[must_use]
    pub fn find_first(&self, needle: &str) -> Option<usize> {
        self.inner.lock().find_first(needle)
    }

    /// See [`StringBuilder::find_last`].
    #[must_use]
    pub fn find_last(&self, needle: &str) -> Option<usize> {
        self.inner.lock().find_last(needle)
    }

    /// See [`StringBuilder::find_all`].
    #[must_use]
    pub fn find_all(&self, needle: &str) -> Vec<usize> {
        self.inner.lock().find_all(needle)
    }

    /// See [`StringBuilder::contains`].
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.inner.lock().contains(needle)
    }

    /// See [`StringBuilder::replace`].
    pub fn replace(&self, old: &str, new: &str) -> usize {
        self.inner.lock().replace(old, new)
    }

    /// See [`StringBuilder::replace_rune`].
    pub fn replace_rune(&self, old: char, new: char) -> usize {
        self.inner.lock().replace_rune(old, new)
    }
}

impl From<StringBuilder> for SyncStringBuilder {
    fn from(builder: StringBuilder) -> Self {
        Self {
            inner: Mutex::new(builder),
        }
    }
}

impl Clone for SyncStringBuilder {
    fn clone(&self) -> Self {
        self.inner.lock().clone().into()
    }
}

impl fmt::Display for SyncStringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        // `f` may write back into `self`
        let runes = self.to_runes();
        runes.into_iter().try_for_each(|c| f.write_char(c))
    }
}

/// Same streaming decode as [`StringBuilder`]'s `io::Write`: a character
/// split across writes is held back until it is complete or flushed.
impl io::Write for &SyncStringBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut *self.inner.lock(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut *self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_release_the_lock() {
        let sb = SyncStringBuilder::from_text("abc");
        assert!(sb.insert(10, "x").is_err());
        assert!(sb.remove(3, 1).is_err());
        // a poisoned or leaked guard would deadlock here
        sb.append("d");
        assert_eq!(sb.to_string(), "abcd");
    }

    #[test]
    fn with_runes_sees_live_region_only() {
        let sb = SyncStringBuilder::with_capacity(16);
        sb.append("Hellö");
        assert_eq!(sb.with_runes(<[char]>::len), 5);
        assert_eq!(sb.capacity(), 16);
    }

    #[test]
    fn formats_into_itself() {
        use std::io::Write as _;

        let sb = SyncStringBuilder::from_text("ab");
        let mut sink = &sb;
        write!(sink, "{sb}").unwrap();
        assert_eq!(sb.to_string(), "abab");
    }

    #[test]
    fn split_characters_across_shared_writes() {
        use std::io::Write as _;

        let sb = SyncStringBuilder::new();
        let mut sink = &sb;
        sink.write_all(b"\xE2\x82").unwrap();
        assert_eq!(sb.len(), 0);
        sink.write_all(b"\xAC\xF0").unwrap();
        sink.flush().unwrap();
        assert_eq!(sb.to_string(), "€\u{FFFD}");
    }

    #[test]
    fn append_runes_under_the_lock() {
        let sb = SyncStringBuilder::with_capacity(1);
        sb.append_runes(&['x', 'ÿ']);
        assert_eq!(sb.to_runes(), ['x', 'ÿ']);
    }

    #[test]
    fn into_inner_round_trip() {
        let sb = SyncStringBuilder::from(StringBuilder::from_text("x"));
        sb.append_rune('y');
        assert_eq!(sb.into_inner(), "xy");
    }
}
