//! Synchronous combinators available on every [`Outcome`].
//!
//! [`Combinators`] is blanket-implemented for `Option`, `Result`,
//! `Validation` and `Either2`. Its rules are the same for all of them:
//!
//! - transformations (`map`, `bind`) run their callback only on success and
//!   move the failure payload through untouched;
//! - side effects (`on_success`, `on_failure`, `perform`) fire at most one
//!   handler and hand back the receiver unchanged;
//! - fallbacks replace a failure and leave a success alone; a fallback
//!   factory runs only when it is needed.
//!
//! With the `async` feature each combinator also has an `_async` form whose
//! callback returns a future; those return a [`Task`] so they can be chained
//! further with [`OutcomeFuture`](super::OutcomeFuture).
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::combinator::Combinators;
//!
//! let mut log = Vec::new();
//! let result: Result<i32, String> = Ok(20)
//!     .map(|value| value + 1)
//!     .bind(|value| if value > 10 { Ok(value * 2) } else { Err("too small".to_string()) })
//!     .on_success(|value| log.push(format!("got {value}")));
//!
//! assert_eq!(result, Ok(42));
//! assert_eq!(log, vec!["got 42"]);
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use super::Outcome;
use crate::control::{Either2, Validation};
use crate::unit::Unit;

#[cfg(feature = "async")]
use super::SendOutcome;
#[cfg(feature = "async")]
use super::future;
#[cfg(feature = "async")]
use crate::effect::Task;

/// Map, Bind, Match, side effects and fallbacks over any [`Outcome`].
pub trait Combinators: Outcome {
    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms the success value.
    ///
    /// On failure `function` is not called and the failure payload is moved
    /// into the result as is.
    #[inline]
    fn map<U, F>(self, function: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Success) -> U,
    {
        match self.into_either() {
            Either2::Last(value) => <Self::Rebind<U> as Outcome>::succeed(function(value)),
            Either2::First(failure) => <Self::Rebind<U> as Outcome>::fail(failure),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// On success the outcome returned by `function` is returned verbatim.
    /// On failure `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Combinators;
    ///
    /// let halve = |value: i32| if value % 2 == 0 { Some(value / 2) } else { None };
    /// assert_eq!(Some(8).bind(halve), Some(4));
    /// assert_eq!(Some(3).bind(halve), None);
    /// assert_eq!(None.bind(halve), None);
    /// ```
    #[inline]
    fn bind<U, F>(self, function: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Success) -> Self::Rebind<U>,
    {
        match self.into_either() {
            Either2::Last(value) => function(value),
            Either2::First(failure) => <Self::Rebind<U> as Outcome>::fail(failure),
        }
    }

    /// Reduces the outcome to a single value: exactly one branch runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Combinators;
    ///
    /// let describe = |value: Option<i32>| value.fold(|v| format!("some {v}"), |()| "none".to_string());
    /// assert_eq!(describe(Some(1)), "some 1");
    /// assert_eq!(describe(None), "none");
    /// ```
    #[inline]
    fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(Self::Success) -> R,
        F: FnOnce(Self::Failure) -> R,
    {
        match self.into_either() {
            Either2::Last(value) => on_success(value),
            Either2::First(failure) => on_failure(failure),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the success value and returns `self` unchanged.
    #[inline]
    fn on_success<F, R>(self, action: F) -> Self
    where
        F: FnOnce(&Self::Success) -> R,
        R: Into<Unit>,
    {
        if let Either2::Last(value) = self.as_either() {
            let _: Unit = action(value).into();
        }
        self
    }

    /// Runs `action` on the failure payload and returns `self` unchanged.
    #[inline]
    fn on_failure<F, R>(self, action: F) -> Self
    where
        F: FnOnce(&Self::Failure) -> R,
        R: Into<Unit>,
    {
        if let Either2::First(failure) = self.as_either() {
            let _: Unit = action(failure).into();
        }
        self
    }

    /// Runs whichever handler matches the current state, if it was given.
    ///
    /// An absent handler is skipped; at most one handler fires.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Combinators;
    ///
    /// let mut failures = 0;
    /// let value: Result<i32, &str> = Err("boom");
    /// let value = value.perform(None::<fn(&i32)>, Some(|_: &&str| failures += 1));
    /// assert_eq!(value, Err("boom"));
    /// assert_eq!(failures, 1);
    /// ```
    fn perform<S, F, R1, R2>(self, on_success: Option<S>, on_failure: Option<F>) -> Self
    where
        S: FnOnce(&Self::Success) -> R1,
        F: FnOnce(&Self::Failure) -> R2,
        R1: Into<Unit>,
        R2: Into<Unit>,
    {
        match self.as_either() {
            Either2::Last(value) => {
                if let Some(action) = on_success {
                    let _: Unit = action(value).into();
                }
            }
            Either2::First(failure) => {
                if let Some(action) = on_failure {
                    let _: Unit = action(failure).into();
                }
            }
        }
        self
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Replaces a failure with `fallback`; a success is returned as is.
    #[inline]
    fn fallback_to(self, fallback: Self) -> Self {
        if self.is_success() { self } else { fallback }
    }

    /// Replaces a failure with a success holding `value`.
    #[inline]
    fn fallback_to_value(self, value: Self::Success) -> Self {
        if self.is_success() {
            self
        } else {
            Self::succeed(value)
        }
    }

    /// Replaces a failure with the outcome built by `factory`.
    ///
    /// `factory` receives the failure payload and runs only on failure,
    /// exactly once, on the calling thread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Combinators;
    ///
    /// let mut calls = 0;
    /// let value = Some(1).fallback_to_with(|()| {
    ///     calls += 1;
    ///     Some(2)
    /// });
    /// assert_eq!((value, calls), (Some(1), 0));
    /// ```
    #[inline]
    fn fallback_to_with<F>(self, factory: F) -> Self
    where
        F: FnOnce(Self::Failure) -> Self,
    {
        match self.into_either() {
            Either2::Last(value) => Self::succeed(value),
            Either2::First(failure) => {
                crate::trace_state!(combinator = "fallback_to_with", "invoking fallback factory");
                factory(failure)
            }
        }
    }

    // =========================================================================
    // Asynchronous Callbacks
    // =========================================================================

    /// [`map`](Self::map) with an asynchronous transformation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::{Combinators, OutcomeFuture};
    /// use lambars_adt::effect::ToTask;
    ///
    /// # futures::executor::block_on(async {
    /// let result = Some(5)
    ///     .map_async(|value| async move { value * 2 })
    ///     .bind_async(|value| if value > 5 { Some(value).to_task() } else { None.to_task() })
    ///     .await;
    /// assert_eq!(result, Some(10));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    fn map_async<U, F, Fut>(self, function: F) -> Task<Self::Rebind<U>>
    where
        Self: SendOutcome,
        F: FnOnce(Self::Success) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
        Self::Rebind<U>: 'static,
    {
        Task::new(future::map_resolved(self, function))
    }

    /// [`bind`](Self::bind) with an asynchronous bind function.
    #[cfg(feature = "async")]
    fn bind_async<U, F, Fut>(self, function: F) -> Task<Self::Rebind<U>>
    where
        Self: SendOutcome,
        F: FnOnce(Self::Success) -> Fut + Send + 'static,
        Fut: Future<Output = Self::Rebind<U>> + Send + 'static,
        U: 'static,
        Self::Rebind<U>: 'static,
    {
        Task::new(future::bind_resolved(self, function))
    }

    /// [`fold`](Self::fold) with asynchronous branches.
    #[cfg(feature = "async")]
    fn fold_async<R, S, F, SuccessFuture, FailureFuture>(
        self,
        on_success: S,
        on_failure: F,
    ) -> Task<R>
    where
        Self: SendOutcome,
        S: FnOnce(Self::Success) -> SuccessFuture + Send + 'static,
        F: FnOnce(Self::Failure) -> FailureFuture + Send + 'static,
        SuccessFuture: Future<Output = R> + Send + 'static,
        FailureFuture: Future<Output = R> + Send + 'static,
        R: 'static,
    {
        Task::new(future::fold_resolved(self, on_success, on_failure))
    }

    /// [`on_success`](Self::on_success) with an asynchronous action.
    ///
    /// The future returned by `action` may not borrow the value; copy or
    /// clone what it needs before the `async` block.
    #[cfg(feature = "async")]
    fn on_success_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        Self: SendOutcome,
        F: FnOnce(&Self::Success) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static,
    {
        Task::new(future::perform_resolved(
            self,
            Some(action),
            None::<fn(&Self::Failure) -> std::future::Ready<Unit>>,
        ))
    }

    /// [`on_failure`](Self::on_failure) with an asynchronous action.
    #[cfg(feature = "async")]
    fn on_failure_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        Self: SendOutcome,
        F: FnOnce(&Self::Failure) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static,
    {
        Task::new(future::perform_resolved(
            self,
            None::<fn(&Self::Success) -> std::future::Ready<Unit>>,
            Some(action),
        ))
    }

    /// [`perform`](Self::perform) with asynchronous handlers.
    #[cfg(feature = "async")]
    fn perform_async<S, F, SuccessFuture, FailureFuture, R1, R2>(
        self,
        on_success: Option<S>,
        on_failure: Option<F>,
    ) -> Task<Self>
    where
        Self: SendOutcome,
        S: FnOnce(&Self::Success) -> SuccessFuture + Send + 'static,
        F: FnOnce(&Self::Failure) -> FailureFuture + Send + 'static,
        SuccessFuture: Future<Output = R1> + Send + 'static,
        FailureFuture: Future<Output = R2> + Send + 'static,
        R1: Into<Unit> + 'static,
        R2: Into<Unit> + 'static,
    {
        Task::new(future::perform_resolved(self, on_success, on_failure))
    }

    /// [`fallback_to_with`](Self::fallback_to_with) with an asynchronous
    /// factory. The factory is only called, and its future only awaited, on
    /// failure.
    #[cfg(feature = "async")]
    fn fallback_to_async<F, Fut>(self, factory: F) -> Task<Self>
    where
        Self: SendOutcome,
        F: FnOnce(Self::Failure) -> Fut + Send + 'static,
        Fut: Future<Output = Self> + Send + 'static,
    {
        Task::new(future::fallback_resolved(self, factory))
    }
}

impl<O: Outcome> Combinators for O {}

/// `Option`-flavoured names for the side-effect combinators.
///
/// `on_none` takes a callback without arguments, since `None` carries no
/// payload.
///
/// # Examples
///
/// ```rust
/// use lambars_adt::combinator::OptionExt;
///
/// let mut missing = false;
/// let value: Option<i32> = None;
/// let value = value.on_some(|value| println!("{value}")).on_none(|| missing = true);
/// assert_eq!(value, None);
/// assert!(missing);
/// ```
pub trait OptionExt<T>: Sized {
    /// Runs `action` on the contained value and returns `self` unchanged.
    fn on_some<F, R>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: Into<Unit>;

    /// Runs `action` when there is no value and returns `self` unchanged.
    fn on_none<F, R>(self, action: F) -> Self
    where
        F: FnOnce() -> R,
        R: Into<Unit>;

    /// [`on_some`](Self::on_some) with an asynchronous action.
    #[cfg(feature = "async")]
    fn on_some_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        T: Send + 'static,
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static;

    /// [`on_none`](Self::on_none) with an asynchronous action.
    #[cfg(feature = "async")]
    fn on_none_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn on_some<F, R>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: Into<Unit>,
    {
        self.on_success(action)
    }

    #[inline]
    fn on_none<F, R>(self, action: F) -> Self
    where
        F: FnOnce() -> R,
        R: Into<Unit>,
    {
        self.on_failure(|_| action())
    }

    #[cfg(feature = "async")]
    fn on_some_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        T: Send + 'static,
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static,
    {
        self.on_success_async(action)
    }

    #[cfg(feature = "async")]
    fn on_none_async<F, Fut, R>(self, action: F) -> Task<Self>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Unit> + 'static,
    {
        self.on_failure_async(move |_: &()| action())
    }
}

/// Conversion into an `Option` of the success value, dropping any failure.
///
/// # Examples
///
/// ```rust
/// use lambars_adt::combinator::ToOption;
/// use lambars_adt::control::Either2;
///
/// let failed: Result<i32, &str> = Err("gone");
/// assert_eq!(failed.to_option(), None);
/// assert_eq!(Either2::<&str, i32>::Last(4).to_option(), Some(4));
///
/// let name = String::from("lambars");
/// assert_eq!(Some(&name).to_option(), Some(name.clone()));
/// ```
pub trait ToOption {
    /// The value kept on success.
    type Value;

    /// Returns the success value, or `None`.
    fn to_option(self) -> Option<Self::Value>;
}

impl<T, E> ToOption for Result<T, E> {
    type Value = T;

    #[inline]
    fn to_option(self) -> Option<T> {
        self.ok()
    }
}

impl<T, E> ToOption for Validation<T, E> {
    type Value = T;

    #[inline]
    fn to_option(self) -> Option<T> {
        self.into_result().ok()
    }
}

impl<A, B> ToOption for Either2<A, B> {
    type Value = B;

    #[inline]
    fn to_option(self) -> Option<B> {
        self.last()
    }
}

impl<T: Clone> ToOption for Option<&T> {
    type Value = T;

    #[inline]
    fn to_option(self) -> Option<T> {
        self.cloned()
    }
}
