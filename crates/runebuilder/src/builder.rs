//! The growable code-point buffer.
//!
//! [`StringBuilder`] stores text as a contiguous array of `char` (Unicode
//! scalar values) plus a logical length. Everything before the length is the
//! represented text; everything after it is reserved capacity that only
//! [`StringBuilder::skip`] can expose.
//!
//! Exclusive access is expressed through `&mut self`: the borrowed view
//! returned by [`StringBuilder::as_runes`] cannot outlive the next mutation.
//! For shared, lock-guarded access see [`SyncStringBuilder`](crate::SyncStringBuilder).
//!
//! # Growth
//!
//! When a write does not fit, capacity starts from the growth floor (8 unless
//! configured otherwise) if it is zero and otherwise doubles until the write
//! fits. Live content is copied into the new allocation; the old one is
//! dropped. Appending is therefore amortised `O(1)` per code point.

use core::fmt;

use log::trace;

use crate::{
    error::{IndexError, RangeError, Result},
    options::BuilderOptions,
};

mod edit;
mod sink;

pub use edit::DEFAULT_TRIM_SET;

/// Value written into freshly allocated, not yet used slots.
const FILL: char = '\0';

/// A mutable, growable string indexed by code point.
///
/// ```rust
/// use runebuilder::StringBuilder;
///
/// let mut sb = StringBuilder::from_text("Hello World");
/// sb.insert(5, " my dear")?;
/// assert_eq!(sb.to_string(), "Hello my dear World");
///
/// sb.remove(5, 8)?;
/// sb.append_rune('!');
/// assert_eq!(sb.to_string(), "Hello World!");
/// # Ok::<(), runebuilder::BuilderError>(())
/// ```
#[derive(Clone)]
pub struct StringBuilder {
    storage: Box<[char]>,
    len: usize,
    growth_floor: usize,
    /// Trailing bytes of an unfinished UTF-8 sequence written through
    /// `io::Write`, held until the next write or `flush`.
    pending: Vec<u8>,
}

impl StringBuilder {
    /// Creates an empty builder without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    /// Creates an empty builder with room for `capacity` code points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(BuilderOptions {
            initial_capacity: capacity,
            ..Default::default()
        })
    }

    /// Creates an empty builder configured by `options`.
    #[must_use]
    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            storage: vec![FILL; options.initial_capacity].into_boxed_slice(),
            len: 0,
            growth_floor: options.growth_floor.max(1),
            pending: Vec::new(),
        }
    }

    /// Creates a builder holding `text`, with capacity equal to its length in
    /// code points.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let storage: Box<[char]> = text.chars().collect();
        Self {
            len: storage.len(),
            storage,
            growth_floor: BuilderOptions::DEFAULT_GROWTH_FLOOR,
            pending: Vec::new(),
        }
    }

    /// Number of code points in the represented text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the builder holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of code points the builder can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Borrowed view of the live region.
    #[must_use]
    pub fn as_runes(&self) -> &[char] {
        &self.storage[..self.len]
    }

    /// Owned copy of the live region.
    #[must_use]
    pub fn to_runes(&self) -> Vec<char> {
        self.as_runes().to_vec()
    }

    /// Makes room for at least `additional` more code points.
    pub fn reserve(&mut self, additional: usize) {
        self.ensure_capacity(self.len.saturating_add(additional));
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required > self.capacity() {
            self.grow(required);
        }
    }

    fn grow(&mut self, required: usize) {
        let mut capacity = match self.capacity() {
            0 => self.growth_floor,
            current => current,
        };
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }

        trace!("growing rune storage from {} to {capacity}", self.capacity());

        let mut storage = vec![FILL; capacity].into_boxed_slice();
        storage[..self.len].copy_from_slice(self.as_runes());
        self.storage = storage;
    }

    /// Writes `runes` starting at `pos` without touching `len`; returns the
    /// number written. Capacity must already be sufficient.
    fn write_at(&mut self, pos: usize, runes: impl Iterator<Item = char>) -> usize {
        let mut written = 0;
        for (slot, c) in self.storage[pos..].iter_mut().zip(runes) {
            *slot = c;
            written += 1;
        }
        written
    }

    /// Shifts the tail right by `count` and writes `runes` into the gap.
    /// Capacity must already be sufficient.
    fn splice_in(&mut self, index: usize, count: usize, runes: impl Iterator<Item = char>) {
        self.storage.copy_within(index..self.len, index + count);
        let written = self.write_at(index, runes);
        debug_assert_eq!(written, count);
        self.len += count;
    }

    /// Shifts the tail left over `start..start + count`.
    fn remove_span(&mut self, start: usize, count: usize) {
        self.storage.copy_within(start + count..self.len, start);
        self.len -= count;
    }

    /// Appends `text`.
    pub fn append(&mut self, text: &str) {
        let count = text.chars().count();
        self.ensure_capacity(self.len + count);
        let written = self.write_at(self.len, text.chars());
        self.len += written;
    }

    /// Appends `text` followed by a newline.
    pub fn append_line(&mut self, text: &str) {
        self.append(text);
        self.append("\n");
    }

    /// Appends a single code point.
    pub fn append_rune(&mut self, c: char) {
        self.ensure_capacity(self.len + 1);
        self.storage[self.len] = c;
        self.len += 1;
    }

    /// Appends a slice of code points.
    pub fn append_runes(&mut self, runes: &[char]) {
        self.ensure_capacity(self.len + runes.len());
        self.storage[self.len..self.len + runes.len()].copy_from_slice(runes);
        self.len += runes.len();
    }

    /// Appends every word in order, growing at most once.
    ///
    /// ```rust
    /// use runebuilder::StringBuilder;
    ///
    /// let mut sb = StringBuilder::new();
    /// sb.append_list(&["Hello", " ", "Wörld"]);
    /// assert_eq!(sb.to_string(), "Hello Wörld");
    /// assert_eq!(sb.capacity(), 16);
    /// ```
    pub fn append_list<S: AsRef<str>>(&mut self, words: &[S]) {
        let total: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
        self.ensure_capacity(self.len + total);
        for word in words {
            let written = self.write_at(self.len, word.as_ref().chars());
            self.len += written;
        }
    }

    /// Appends raw bytes, decoding them as UTF-8.
    ///
    /// Invalid sequences are replaced with U+FFFD. Returns the number of code
    /// points appended.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> usize {
        use bstr::ByteSlice;

        let count = bytes.chars().count();
        self.ensure_capacity(self.len + count);
        let written = self.write_at(self.len, bytes.chars());
        self.len += written;
        written
    }

    /// Inserts `text` so that it starts at code point `index`.
    ///
    /// `index == len()` appends. The builder grows as soon as the text would
    /// fill it completely, so a free slot always remains after an insert.
    ///
    /// # Errors
    ///
    /// [`IndexError::InsertPastEnd`] if `index > len()`.
    pub fn insert(&mut self, index: usize, text: &str) -> Result<()> {
        if index > self.len {
            return Err(IndexError::InsertPastEnd {
                index,
                len: self.len,
            }
            .into());
        }

        let count = text.chars().count();
        if self.len + count >= self.capacity() {
            self.grow(self.len + count + 1);
        }
        self.splice_in(index, count, text.chars());
        Ok(())
    }

    /// Removes `count` code points starting at `start`.
    ///
    /// `count == 0` is a no-op.
    ///
    /// # Errors
    ///
    /// - [`IndexError::StartPastEnd`] if `start >= len()`.
    /// - [`RangeError::RemovePastEnd`] if `start + count - 1 > len()`.
    ///
    /// A span ending exactly one past the text is therefore *not* an error:
    /// it is clamped to the end of the text, so `remove(3, 3)` on `"Hello"`
    /// succeeds and leaves `"Hel"`. Nothing past the live region is read.
    pub fn remove(&mut self, start: usize, count: usize) -> Result<()> {
        if start >= self.len {
            return Err(IndexError::StartPastEnd {
                start,
                len: self.len,
            }
            .into());
        }
        if start.saturating_add(count) > self.len + 1 {
            return Err(RangeError::RemovePastEnd {
                start,
                count,
                len: self.len,
            }
            .into());
        }
        if count == 0 {
            return Ok(());
        }

        self.remove_span(start, count.min(self.len - start));
        Ok(())
    }

    /// Drops the text but keeps the allocation.
    ///
    /// Bytes of an unfinished UTF-8 sequence still pending from `io::Write`
    /// are dropped as well.
    pub fn clear(&mut self) {
        self.len = 0;
        self.pending.clear();
    }

    /// Returns the code point at `index`.
    ///
    /// This is the unchecked accessor: bounds are the caller's job. Use
    /// [`StringBuilder::get`] for a checked read.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn rune_at(&self, index: usize) -> char {
        self.as_runes()[index]
    }

    /// Returns the code point at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_runes().get(index).copied()
    }

    /// Overwrites the code point at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexError::OutOfBounds`] if `index >= len()`.
    pub fn set_rune_at(&mut self, index: usize, value: char) -> Result<()> {
        if index >= self.len {
            return Err(IndexError::OutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }
        self.storage[index] = value;
        Ok(())
    }

    /// Extends the text by `count` code points without writing them.
    ///
    /// The exposed slots hold whatever the reserved region contained: `'\0'`
    /// for never-used capacity, stale code points otherwise. Callers are
    /// expected to overwrite them with [`StringBuilder::set_rune_at`].
    ///
    /// ```rust
    /// use runebuilder::StringBuilder;
    ///
    /// let mut sb = StringBuilder::from_text("ab");
    /// sb.reserve(2);
    /// sb.skip(2)?;
    /// sb.set_rune_at(2, 'c')?;
    /// sb.set_rune_at(3, 'd')?;
    /// assert_eq!(sb.to_string(), "abcd");
    /// # Ok::<(), runebuilder::BuilderError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`RangeError::SkipPastCapacity`] if `len() + count > capacity()`.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if self.len.saturating_add(count) > self.capacity() {
            return Err(RangeError::SkipPastCapacity {
                count,
                len: self.len,
                capacity: self.capacity(),
            }
            .into());
        }
        self.len += count;
        Ok(())
    }
}

impl Default for StringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("text", &self.to_string())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for &c in self.as_runes() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl PartialEq for StringBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.as_runes() == other.as_runes()
    }
}

impl Eq for StringBuilder {}

impl PartialEq<str> for StringBuilder {
    fn eq(&self, other: &str) -> bool {
        self.as_runes().iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for StringBuilder {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl AsRef<[char]> for StringBuilder {
    fn as_ref(&self) -> &[char] {
        self.as_runes()
    }
}

impl From<&str> for StringBuilder {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for StringBuilder {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl From<StringBuilder> for String {
    fn from(sb: StringBuilder) -> Self {
        sb.as_runes().iter().collect()
    }
}

impl FromIterator<char> for StringBuilder {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let storage: Box<[char]> = iter.into_iter().collect();
        Self {
            len: storage.len(),
            storage,
            growth_floor: BuilderOptions::DEFAULT_GROWTH_FLOOR,
            pending: Vec::new(),
        }
    }
}

impl Extend<char> for StringBuilder {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for c in iter {
            self.append_rune(c);
        }
    }
}

impl<'a> Extend<&'a str> for StringBuilder {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for text in iter {
            self.append(text);
        }
    }
}
