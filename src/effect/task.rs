//! `Task` - a boxed, `Send` future used as the result of async combinators.
//!
//! A `Task<A>` is an ordinary [`Future`] with a nameable type. That lets
//! async combinators return a concrete value that can be chained, stored in a
//! struct, or passed to `tokio::spawn`.
//!
//! Unlike an `AsyncIO`-style description, a `Task` is lazy only in the way
//! every Rust future is: nothing runs until it is polled.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::effect::Task;
//!
//! # futures::executor::block_on(async {
//! let task = Task::pure(10)
//!     .fmap(|value| value * 2)
//!     .flat_map(|value| Task::new(async move { value + 1 }));
//! assert_eq!(task.await, 21);
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;

use crate::control::{Either2, Either3, Either4, Either5, Either6, Either7, Either8, Validation};

/// A boxed `Send + 'static` future producing an `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[must_use = "tasks do nothing unless awaited"]
pub struct Task<A> {
    future: BoxFuture<'static, A>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Task<A> {
    /// Boxes an existing future.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            future: Box::pin(future),
        }
    }

    /// A task that completes with `value` on its first poll.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::FutureExt;
    /// use lambars_adt::effect::Task;
    ///
    /// assert_eq!(Task::pure("done").now_or_never(), Some("done"));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Send + 'static,
    {
        Self::new(futures::future::ready(value))
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Transforms the result with a synchronous function.
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::new(async move { function(self.await) })
    }

    /// Chains another task built from the result.
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> Task<B> + Send + 'static,
    {
        Task::new(async move { function(self.await).await })
    }
}

impl<A> Future for Task<A> {
    type Output = A;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<A> {
        self.get_mut().future.as_mut().poll(context)
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Task(<future>)")
    }
}

// =============================================================================
// ToTask
// =============================================================================

/// Lifts an already computed outcome into an immediately completing [`Task`].
///
/// Useful as the return value of `bind_async` callbacks that have nothing to
/// await on some branch.
///
/// # Examples
///
/// ```rust
/// use lambars_adt::combinator::OutcomeFuture;
/// use lambars_adt::effect::{Task, ToTask};
///
/// # futures::executor::block_on(async {
/// let checked = Task::pure(Some(2))
///     .bind_async(|value| if value > 5 { Some(value).to_task() } else { None.to_task() })
///     .await;
/// assert_eq!(checked, None);
/// # });
/// ```
pub trait ToTask: Sized + Send + 'static {
    /// Wraps `self` in a task that never suspends.
    fn to_task(self) -> Task<Self> {
        Task::pure(self)
    }
}

impl<T: Send + 'static> ToTask for Option<T> {}

impl<T: Send + 'static, E: Send + 'static> ToTask for Result<T, E> {}

impl<T: Send + 'static, E: Send + 'static> ToTask for Validation<T, E> {}

static_assertions::assert_impl_all!(Task<i32>: Send, Unpin);
static_assertions::assert_impl_all!(Either2<i32, String>: ToTask);
static_assertions::assert_impl_all!(Either3<i32, String, ()>: ToTask);
static_assertions::assert_impl_all!(Either4<i32, String, (), u8>: ToTask);
static_assertions::assert_impl_all!(Either5<i32, String, (), u8, u16>: ToTask);
static_assertions::assert_impl_all!(Either6<i32, String, (), u8, u16, u32>: ToTask);
static_assertions::assert_impl_all!(Either7<i32, String, (), u8, u16, u32, u64>: ToTask);
static_assertions::assert_impl_all!(Either8<i32, String, (), u8, u16, u32, u64, char>: ToTask);
