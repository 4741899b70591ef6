use thiserror::Error;

/// Result alias used by every fallible [`StringBuilder`](crate::StringBuilder)
/// operation.
pub type Result<T> = core::result::Result<T, BuilderError>;

/// Error returned by fallible builder operations.
///
/// Validation always happens before any mutation, so a call that returns an
/// error leaves the builder exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// An index lies outside the valid insertion or removal point.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    /// A length, end offset or span falls outside the current content.
    #[error("range error: {0}")]
    Range(#[from] RangeError),
}

/// An index argument does not address the live region.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// `insert` was asked to write past the end of the text.
    #[error("insert index {index} is past the end of the text (len {len})")]
    InsertPastEnd {
        /// Requested insertion index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// `remove` was asked to start at or after the end of the text.
    #[error("start {start} is at or after the end of the text (len {len})")]
    StartPastEnd {
        /// Requested start index.
        start: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// A single-rune access fell outside `0..len`.
    #[error("rune index {index} is out of bounds (len {len})")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },
}

/// A span argument is not covered by the current content or capacity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `remove` would delete past the end of the text.
    #[error("can't remove {count} runes at {start}: past the end of the text (len {len})")]
    RemovePastEnd {
        /// Requested start index.
        start: usize,
        /// Requested rune count.
        count: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// `skip` would move the length past the allocated capacity.
    #[error("can't skip {count} runes: len {len} would exceed capacity {capacity}")]
    SkipPastCapacity {
        /// Requested rune count.
        count: usize,
        /// Length at the time of the call.
        len: usize,
        /// Capacity at the time of the call.
        capacity: usize,
    },
    /// A span ends after the end of the text.
    #[error("end {end} is past the end of the text (len {len})")]
    EndPastEnd {
        /// Requested end offset.
        end: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// A span starts after it ends.
    #[error("start {start} is after end {end}")]
    StartAfterEnd {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nests_kind_and_detail() {
        let err = BuilderError::from(IndexError::StartPastEnd { start: 7, len: 5 });
        assert_eq!(
            err.to_string(),
            "index error: start 7 is at or after the end of the text (len 5)"
        );

        let err = BuilderError::from(RangeError::StartAfterEnd { start: 3, end: 1 });
        assert_eq!(err.to_string(), "range error: start 3 is after end 1");
    }
}
