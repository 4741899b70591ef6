//! A mutable, growable string indexed by Unicode code point.
//!
//! [`StringBuilder`] keeps its text as a contiguous array of `char` with a
//! separate logical length, so appends are amortised `O(1)` and every index
//! (`insert`, `remove`, `substring`, search results) counts code points, not
//! bytes. Multi-byte characters are never split.
//!
//! [`SyncStringBuilder`] wraps a builder in a lock for callers that share it
//! between threads. The [`search`] module holds the substring search both
//! types use.
//!
//! ```rust
//! use runebuilder::StringBuilder;
//!
//! let mut sb = StringBuilder::from_text("   Hellöö World   ");
//! sb.trim();
//! assert_eq!(sb.find_all("ö"), vec![4, 5]);
//!
//! sb.replace("Hellöö", "Hallöchen");
//! sb.append_rune('!');
//! assert_eq!(sb.to_string(), "Hallöchen World!");
//! ```
//!
//! # Features
//!
//! - `serde`: builders serialize as plain strings; [`BuilderOptions`]
//!   derives `Serialize`/`Deserialize`.
//! - `fuzzing`: exposes the `reference` module used by the fuzz target.

mod builder;
mod error;
mod options;
#[cfg(any(test, feature = "fuzzing"))]
pub mod reference;
pub mod search;
#[cfg(feature = "serde")]
mod serde;
mod sync;


pub use builder::{DEFAULT_TRIM_SET, StringBuilder};
pub use error::{BuilderError, IndexError, RangeError, Result};
pub use options::BuilderOptions;
pub use sync::SyncStringBuilder;
