//! Combinators over success/failure outcomes.
//!
//! - [`Outcome`]: the state-inspection contract (`Option`, `Result`,
//!   `Validation`, `Either2`)
//! - [`Combinators`]: Map, Bind, Match, side effects and fallbacks
//! - [`OptionExt`]: `on_some` / `on_none`
//! - [`ToOption`]: bridging into `Option`
//! - [`Sequence`]: collecting many outcomes into one
//! - [`OutcomeFuture`]: the same combinators on futures of outcomes (requires
//!   the `async` feature)
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::combinator::Combinators;
//!
//! let total = Some(2)
//!     .map(|value| value * 10)
//!     .fallback_to_value(0)
//!     .fold(|value| value, |()| -1);
//! assert_eq!(total, 20);
//! ```

mod extension;
#[cfg(feature = "async")]
mod future;
mod outcome;
mod sequence;

pub use extension::{Combinators, OptionExt, ToOption};
#[cfg(feature = "async")]
pub use future::{OptionFutureExt, OutcomeFuture};
pub use outcome::{Outcome, SendOutcome};
pub use sequence::Sequence;
