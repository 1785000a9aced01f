//! The `Unit` marker returned by side-effecting callbacks.
//!
//! Handlers passed to `on_success`, `on_failure`, `perform` and their async
//! counterparts may return either `()` or [`Unit`]. Both convert into `Unit`,
//! so each combinator has exactly one synchronous and one asynchronous code
//! path regardless of which shape the caller writes.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::Unit;
//! use lambars_adt::combinator::Combinators;
//!
//! let mut seen = Vec::new();
//! let value = Some(3)
//!     .on_success(|value| seen.push(*value))
//!     .on_success(|_| Unit);
//! assert_eq!(value, Some(3));
//! assert_eq!(seen, vec![3]);
//! ```

/// A zero-information value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
