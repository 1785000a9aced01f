//! # lambars-adt
//!
//! Success/failure types and a uniform combinator layer over them.
//!
//! ## Overview
//!
//! - **Outcome types**: `Option`, `Result` (with a structured [`Error`]),
//!   [`Validation`](control::Validation) with error accumulation, and
//!   positional unions [`Either2`](control::Either2) ..
//!   [`Either8`](control::Either8)
//! - **Combinators**: Map, Bind, Match, side effects, fallbacks and Sequence,
//!   written once against the [`Outcome`](combinator::Outcome) contract
//! - **Async**: every combinator in a future-returning form, chained through
//!   [`Task`](effect::Task)
//! - **Type classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Applicative`](typeclass::Applicative)
//!
//! ## Feature Flags
//!
//! - `async` (default): `Task`, `ToTask` and the async combinators
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `tracing`: trace events at state-dependent branch points
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use lambars_adt::prelude::*;
//!
//! fn parse_port(text: &str) -> Result<u16> {
//!     text.parse::<u16>()
//!         .map_err(|error| Error::new("parse", error.to_string()))
//! }
//!
//! let port = parse_port("80")
//!     .bind(|port| if port >= 1024 { Ok(port) } else { Err(Error::new("range", "privileged port")) })
//!     .fallback_to_value(8080);
//! assert_eq!(port, Ok(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event under the `lambars_adt` target.
///
/// Expands to nothing unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_state {
    ($($argument:tt)*) => {
        tracing::trace!(target: "lambars_adt", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_state {
    ($($argument:tt)*) => {};
}

pub(crate) use trace_state;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_adt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::control::*;
    #[cfg(feature = "async")]
    pub use crate::effect::*;
    pub use crate::error::{Error, Result};
    pub use crate::typeclass::*;
    pub use crate::unit::Unit;
}

pub mod combinator;
pub mod control;
#[cfg(feature = "async")]
pub mod effect;
pub mod error;
pub mod typeclass;
pub mod unit;

pub use error::{Error, Result};
pub use unit::Unit;
