//! Data types for success/failure and n-way choice.
//!
//! - [`Validation`]: success or a non-empty sequence of errors
//! - [`NonEmpty`]: a sequence with at least one element
//! - [`Either2`] .. [`Either8`]: tagged unions of two to eight slots, with a
//!   stable positional layout (`First`, `Second`, ..., `Last`)
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::control::{Either3, Validation};
//!
//! let shape: Either3<u32, (u32, u32), ()> = Either3::Second((2, 3));
//! let area = shape.fold(|side| side * side, |(width, height)| width * height, |()| 0);
//! assert_eq!(area, 6);
//!
//! let age: Validation<u32, &str> = Validation::failure("age must be positive");
//! assert!(age.is_failure());
//! ```

mod either;
mod nonempty;
mod validation;

pub use either::{Either2, Either3, Either4, Either5, Either6, Either7, Either8};
pub use nonempty::NonEmpty;
pub use validation::Validation;
