//! Combinators on futures that resolve to an [`Outcome`].
//!
//! Every method of [`OutcomeFuture`] follows the same three steps:
//!
//! 1. await the receiver;
//! 2. inspect the resolved state;
//! 3. on the relevant branch only, call the callback and await its future.
//!
//! The result is always a [`Task`], so calls chain into pipelines where sync
//! and async steps interleave in source order.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::combinator::OutcomeFuture;
//! use lambars_adt::effect::Task;
//!
//! # futures::executor::block_on(async {
//! let parsed: Result<i32, String> = Task::pure("21".to_string())
//!     .fmap(|text| text.parse::<i32>().map_err(|error| error.to_string()))
//!     .map_with(|value| value * 2)
//!     .await;
//! assert_eq!(parsed, Ok(42));
//! # });
//! ```

use std::future::Future;

use super::{Combinators, Outcome, SendOutcome};
use crate::control::Either2;
use crate::effect::Task;
use crate::unit::Unit;

// =============================================================================
// Resolved-State Steps
// =============================================================================

pub(crate) async fn map_resolved<O, U, F, Fut>(outcome: O, function: F) -> O::Rebind<U>
where
    O: Outcome,
    F: FnOnce(O::Success) -> Fut,
    Fut: Future<Output = U>,
{
    let pending = match outcome.into_either() {
        Either2::Last(value) => function(value),
        Either2::First(failure) => return <O::Rebind<U> as Outcome>::fail(failure),
    };
    <O::Rebind<U> as Outcome>::succeed(pending.await)
}

pub(crate) async fn bind_resolved<O, U, F, Fut>(outcome: O, function: F) -> O::Rebind<U>
where
    O: Outcome,
    F: FnOnce(O::Success) -> Fut,
    Fut: Future<Output = O::Rebind<U>>,
{
    let pending = match outcome.into_either() {
        Either2::Last(value) => function(value),
        Either2::First(failure) => return <O::Rebind<U> as Outcome>::fail(failure),
    };
    pending.await
}

pub(crate) async fn fold_resolved<O, R, S, F, SuccessFuture, FailureFuture>(
    outcome: O,
    on_success: S,
    on_failure: F,
) -> R
where
    O: Outcome,
    S: FnOnce(O::Success) -> SuccessFuture,
    F: FnOnce(O::Failure) -> FailureFuture,
    SuccessFuture: Future<Output = R>,
    FailureFuture: Future<Output = R>,
{
    let pending = match outcome.into_either() {
        Either2::Last(value) => Either2::Last(on_success(value)),
        Either2::First(failure) => Either2::First(on_failure(failure)),
    };
    match pending {
        Either2::Last(future) => future.await,
        Either2::First(future) => future.await,
    }
}

pub(crate) async fn perform_resolved<O, S, F, SuccessFuture, FailureFuture, R1, R2>(
    outcome: O,
    on_success: Option<S>,
    on_failure: Option<F>,
) -> O
where
    O: Outcome,
    S: FnOnce(&O::Success) -> SuccessFuture,
    F: FnOnce(&O::Failure) -> FailureFuture,
    SuccessFuture: Future<Output = R1>,
    FailureFuture: Future<Output = R2>,
    R1: Into<Unit>,
    R2: Into<Unit>,
{
    // The handler futures own their data, so no borrow of `outcome` is held
    // across the await below.
    let pending = match outcome.as_either() {
        Either2::Last(value) => on_success.map(|action| Either2::Last(action(value))),
        Either2::First(failure) => on_failure.map(|action| Either2::First(action(failure))),
    };
    match pending {
        Some(Either2::Last(future)) => {
            let _: Unit = future.await.into();
        }
        Some(Either2::First(future)) => {
            let _: Unit = future.await.into();
        }
        None => {}
    }
    outcome
}

pub(crate) async fn fallback_resolved<O, F, Fut>(outcome: O, factory: F) -> O
where
    O: Outcome,
    F: FnOnce(O::Failure) -> Fut,
    Fut: Future<Output = O>,
{
    let pending = match outcome.into_either() {
        Either2::Last(value) => return O::succeed(value),
        Either2::First(failure) => {
            crate::trace_state!(combinator = "fallback_to_async", "invoking fallback factory");
            factory(failure)
        }
    };
    pending.await
}

// =============================================================================
// OutcomeFuture
// =============================================================================

/// Async combinators on any `Send` future resolving to a [`SendOutcome`].
///
/// Panics raised by the receiver or by a callback propagate to whoever
/// awaits the returned [`Task`].
///
/// # Examples
///
/// ```rust
/// use lambars_adt::combinator::{Combinators, OutcomeFuture};
///
/// # futures::executor::block_on(async {
/// let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
/// let (first, second) = (order.clone(), order.clone());
///
/// let value = Some(1)
///     .on_success_async(move |_| async move { first.lock().unwrap().push(1) })
///     .map_with(|value| value + 1)
///     .on_success_async(move |_| async move { second.lock().unwrap().push(2) })
///     .await;
///
/// assert_eq!(value, Some(2));
/// assert_eq!(*order.lock().unwrap(), vec![1, 2]);
/// # });
/// ```
pub trait OutcomeFuture<O>: Future<Output = O> + Send + Sized + 'static
where
    O: SendOutcome,
{
    /// Transforms the resolved success value asynchronously.
    fn map_async<U, F, Fut>(self, function: F) -> Task<O::Rebind<U>>
    where
        F: FnOnce(O::Success) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
        O::Rebind<U>: 'static,
    {
        Task::new(async move { map_resolved(self.await, function).await })
    }

    /// Chains an asynchronous computation that may fail.
    fn bind_async<U, F, Fut>(self, function: F) -> Task<O::Rebind<U>>
    where
        F: FnOnce(O::Success) -> Fut + Send + 'static,
        Fut: Future<Output = O::Rebind<U>> + Send + 'static,
        O::Rebind<U>: 'static,
    {
        Task::new(async move { bind_resolved(self.await, function).await })
    }

    /// Reduces the resolved outcome with asynchronous branches.
    fn fold_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        on_success: S,
        on_failure: F,
    ) -> Task<R>
    where
        S: FnOnce(O::Success) -> SuccessFuture + Send + 'static,
        F: FnOnce(O::Failure) -> FailureFuture + Send + 'static,
        SuccessFuture: Future<Output = R> + Send + 'static,
        FailureFuture: Future<Output = R> + Send + 'static,
        R: 'static,
    {
        Task::new(async move { fold_resolved(self.await, on_success, on_failure).await })
    }

    /// Awaits `action` on success, then yields the outcome unchanged.
    fn on_success_async<F, Fut, R>(self, action: F) -> Task<O>
    where
        F: FnOnce(&O::Success) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit>,
    {
        self.perform_async(Some(action), None::<fn(&O::Failure) -> std::future::Ready<Unit>>)
    }

    /// Awaits `action` on failure, then yields the outcome unchanged.
    fn on_failure_async<F, Fut, R>(self, action: F) -> Task<O>
    where
        F: FnOnce(&O::Failure) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit>,
    {
        self.perform_async(None::<fn(&O::Success) -> std::future::Ready<Unit>>, Some(action))
    }

    /// Awaits whichever handler matches the resolved state, if given.
    fn perform_async<S, F, SuccessFuture, FailureFuture, R1, R2>(
        self,
        on_success: Option<S>,
        on_failure: Option<F>,
    ) -> Task<O>
    where
        S: FnOnce(&O::Success) -> SuccessFuture + Send + 'static,
        F: FnOnce(&O::Failure) -> FailureFuture + Send + 'static,
        SuccessFuture: Future<Output = R1> + Send + 'static,
        FailureFuture: Future<Output = R2> + Send + 'static,
        R1: Into<Unit>,
        R2: Into<Unit>,
    {
        Task::new(async move { perform_resolved(self.await, on_success, on_failure).await })
    }

    /// Replaces a resolved failure with the outcome of an async factory.
    fn fallback_to_async<F, Fut>(self, factory: F) -> Task<O>
    where
        F: FnOnce(O::Failure) -> Fut + Send + 'static,
        Fut: Future<Output = O> + Send + 'static,
    {
        Task::new(async move { fallback_resolved(self.await, factory).await })
    }

    /// [`Combinators::map`] applied to the resolved outcome.
    fn map_with<U, F>(self, function: F) -> Task<O::Rebind<U>>
    where
        F: FnOnce(O::Success) -> U + Send + 'static,
        O::Rebind<U>: 'static,
    {
        Task::new(async move { Combinators::map(self.await, function) })
    }

    /// [`Combinators::bind`] applied to the resolved outcome.
    fn bind_with<U, F>(self, function: F) -> Task<O::Rebind<U>>
    where
        F: FnOnce(O::Success) -> O::Rebind<U> + Send + 'static,
        O::Rebind<U>: 'static,
    {
        Task::new(async move { Combinators::bind(self.await, function) })
    }

    /// [`Combinators::fallback_to_with`] applied to the resolved outcome.
    fn fallback_to_with<F>(self, factory: F) -> Task<O>
    where
        F: FnOnce(O::Failure) -> O + Send + 'static,
    {
        Task::new(async move { Combinators::fallback_to_with(self.await, factory) })
    }
}

impl<O, Fut> OutcomeFuture<O> for Fut
where
    O: SendOutcome,
    Fut: Future<Output = O> + Send + 'static,
{
}

/// [`OptionExt`](super::OptionExt) names for futures of `Option`.
pub trait OptionFutureExt<T>: Future<Output = Option<T>> + Send + Sized + 'static
where
    T: Send + 'static,
{
    /// Awaits `action` on the resolved value, if any.
    fn on_some_async<F, Fut, R>(self, action: F) -> Task<Option<T>>
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit>,
    {
        OutcomeFuture::on_success_async(self, action)
    }

    /// Awaits `action` when the receiver resolved to `None`.
    fn on_none_async<F, Fut, R>(self, action: F) -> Task<Option<T>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit>,
    {
        OutcomeFuture::on_failure_async(self, move |_: &()| action())
    }
}

impl<T, Fut> OptionFutureExt<T> for Fut
where
    T: Send + 'static,
    Fut: Future<Output = Option<T>> + Send + 'static,
{
}
