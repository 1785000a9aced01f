//! Type class traits shared by the outcome types.
//!
//! - [`Semigroup`]: associative combination; drives error accumulation
//! - [`Applicative`]: combining independently evaluated outcomes, fail-fast
//!   for `Option`/`Result`/`Either2` and accumulating for `Validation`
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::typeclass::{Applicative, Semigroup};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
mod semigroup;

pub use applicative::Applicative;
pub use semigroup::Semigroup;
