//! A deliberately simple model of [`StringBuilder`] used to check it.
//!
//! [`ReferenceBuilder`] keeps its text in a `Vec<char>` sized exactly to the
//! content and rebuilds it with ordinary `Vec`/`str` operations on every
//! edit. It has no capacity bookkeeping and no hand-written shifting, so
//! disagreement with [`StringBuilder`] points at the builder's index math.

use crate::{
    StringBuilder,
    builder::DEFAULT_TRIM_SET,
    error::{IndexError, RangeError, Result},
};

/// One mutating builder operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// [`StringBuilder::append`]
    Append(String),
    /// [`StringBuilder::append_line`]
    AppendLine(String),
    /// [`StringBuilder::append_rune`]
    AppendRune(char),
    /// [`StringBuilder::append_runes`]
    AppendRunes(Vec<char>),
    /// [`StringBuilder::append_list`]
    AppendList(Vec<String>),
    /// [`StringBuilder::append_bytes`]
    AppendBytes(Vec<u8>),
    /// [`StringBuilder::insert`]
    Insert(usize, String),
    /// [`StringBuilder::remove`]
    Remove(usize, usize),
    /// [`StringBuilder::clear`]
    Clear,
    /// [`StringBuilder::set_rune_at`]
    SetRuneAt(usize, char),
    /// [`StringBuilder::trim`]
    Trim,
    /// [`StringBuilder::trim_start`]
    TrimStart,
    /// [`StringBuilder::trim_end`]
    TrimEnd,
    /// [`StringBuilder::reverse`]
    Reverse,
    /// [`StringBuilder::replace`]
    Replace(String, String),
    /// [`StringBuilder::replace_rune`]
    ReplaceRune(char, char),
}

impl Op {
    /// Applies the operation to a real builder.
    ///
    /// # Errors
    ///
    /// Whatever the underlying builder method returns.
    pub fn apply(&self, sb: &mut StringBuilder) -> Result<()> {
        match self {
            Op::Append(text) => sb.append(text),
            Op::AppendLine(text) => sb.append_line(text),
            Op::AppendRune(c) => sb.append_rune(*c),
            Op::AppendRunes(runes) => sb.append_runes(runes),
            Op::AppendList(words) => sb.append_list(words),
            Op::AppendBytes(bytes) => {
                sb.append_bytes(bytes);
            }
            Op::Insert(index, text) => sb.insert(*index, text)?,
            Op::Remove(start, count) => sb.remove(*start, *count)?,
            Op::Clear => sb.clear(),
            Op::SetRuneAt(index, c) => sb.set_rune_at(*index, *c)?,
            Op::Trim => sb.trim(),
            Op::TrimStart => sb.trim_start(),
            Op::TrimEnd => sb.trim_end(),
            Op::Reverse => sb.reverse(),
            Op::Replace(old, new) => {
                sb.replace(old, new);
            }
            Op::ReplaceRune(old, new) => {
                sb.replace_rune(*old, *new);
            }
        }
        Ok(())
    }
}

/// Always-reallocating model of a [`StringBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceBuilder {
    runes: Vec<char>,
}

impl ReferenceBuilder {
    /// Creates a model holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            runes: text.chars().collect(),
        }
    }

    /// The modelled text.
    #[must_use]
    pub fn as_runes(&self) -> &[char] {
        &self.runes
    }

    fn text(&self) -> String {
        self.runes.iter().collect()
    }

    fn set_text(&mut self, text: &str) {
        self.runes = text.chars().collect();
    }

    /// Applies `op` and returns the outcome the real builder must match.
    ///
    /// # Errors
    ///
    /// The error the real builder is expected to return.
    pub fn apply(&mut self, op: &Op) -> Result<()> {
        let len = self.runes.len();
        match op {
            Op::Append(text) => self.runes.extend(text.chars()),
            Op::AppendLine(text) => {
                self.runes.extend(text.chars());
                self.runes.push('\n');
            }
            Op::AppendRune(c) => self.runes.push(*c),
            Op::AppendRunes(runes) => self.runes.extend_from_slice(runes),
            Op::AppendList(words) => self.runes.extend(words.iter().flat_map(|w| w.chars())),
            Op::AppendBytes(bytes) => self.runes.extend(String::from_utf8_lossy(bytes).chars()),
            Op::Insert(index, text) => {
                if *index > len {
                    return Err(IndexError::InsertPastEnd { index: *index, len }.into());
                }
                let tail = self.runes.split_off(*index);
                self.runes.extend(text.chars());
                self.runes.extend(tail);
            }
            Op::Remove(start, count) => {
                if *start >= len {
                    return Err(IndexError::StartPastEnd { start: *start, len }.into());
                }
                if start.saturating_add(*count) > len + 1 {
                    return Err(RangeError::RemovePastEnd {
                        start: *start,
                        count: *count,
                        len,
                    }
                    .into());
                }
                let end = (*start + *count).min(len);
                self.runes.drain(*start..end);
            }
            Op::Clear => self.runes = Vec::new(),
            Op::SetRuneAt(index, c) => match self.runes.get_mut(*index) {
                Some(slot) => *slot = *c,
                None => return Err(IndexError::OutOfBounds { index: *index, len }.into()),
            },
            Op::Trim => {
                let text = self.text();
                self.set_text(text.trim_matches(DEFAULT_TRIM_SET));
            }
            Op::TrimStart => {
                let text = self.text();
                self.set_text(text.trim_start_matches(DEFAULT_TRIM_SET));
            }
            Op::TrimEnd => {
                let text = self.text();
                self.set_text(text.trim_end_matches(DEFAULT_TRIM_SET));
            }
            Op::Reverse => self.runes = self.runes.iter().rev().copied().collect(),
            Op::Replace(old, new) => {
                if !old.is_empty() {
                    let text = self.text().replace(old.as_str(), new);
                    self.set_text(&text);
                }
            }
            Op::ReplaceRune(old, new) => {
                for c in &mut self.runes {
                    if c == old {
                        *c = *new;
                    }
                }
            }
        }
        Ok(())
    }
}
