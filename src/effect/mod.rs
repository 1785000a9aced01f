//! Async building blocks (requires the `async` feature).
//!
//! - [`Task`]: the boxed future returned by every async combinator
//! - [`ToTask`]: lifting a computed outcome into a `Task`

mod task;

pub use task::{Task, ToTask};
