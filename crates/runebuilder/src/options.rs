/// Construction-time configuration for a [`StringBuilder`](crate::StringBuilder).
///
/// # Examples
///
/// ```rust
/// use runebuilder::{BuilderOptions, StringBuilder};
///
/// let sb = StringBuilder::with_options(BuilderOptions {
///     initial_capacity: 64,
///     ..Default::default()
/// });
/// assert_eq!(sb.capacity(), 64);
/// assert!(sb.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderOptions {
    /// Number of code points allocated up front.
    ///
    /// # Default
    ///
    /// `0`
    pub initial_capacity: usize,

    /// Capacity used the first time an empty allocation has to grow.
    ///
    /// From there on capacity doubles until the requested length fits. A
    /// value of `0` is treated as `1`.
    ///
    /// # Default
    ///
    /// `8`
    pub growth_floor: usize,
}

impl BuilderOptions {
    /// Default value of [`BuilderOptions::growth_floor`].
    pub const DEFAULT_GROWTH_FLOOR: usize = 8;
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            growth_floor: Self::DEFAULT_GROWTH_FLOOR,
        }
    }
}
