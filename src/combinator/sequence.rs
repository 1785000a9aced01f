//! Collecting many outcomes into one.
//!
//! [`Sequence::sequence`] turns an iterator of outcomes into one outcome
//! holding a `Vec` of every success value, in input order.
//!
//! - `Option`, `Result` and `Either2` are fail-fast: iteration stops at the
//!   first failure, later items are never pulled from the iterator and that
//!   failure payload is returned as is.
//! - `Validation` pulls every item and concatenates all error sequences in
//!   input order.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::combinator::Sequence;
//! use lambars_adt::control::Validation;
//!
//! let all: Option<Vec<i32>> = Sequence::sequence(vec![Some(1), Some(2), Some(3)]);
//! assert_eq!(all, Some(vec![1, 2, 3]));
//!
//! let checks: Vec<Validation<i32, &str>> = vec![
//!     Validation::failure("first"),
//!     Validation::success(2),
//!     Validation::failure("third"),
//! ];
//! let collected = Validation::sequence(checks);
//! assert_eq!(collected.errors().map(|errors| errors.len()), Some(2));
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use super::Outcome;
use crate::control::{Either2, NonEmpty, Validation};

#[cfg(feature = "async")]
use super::SendOutcome;
#[cfg(feature = "async")]
use crate::effect::Task;

/// Outcomes that can be collected from an iterator.
pub trait Sequence: Outcome {
    /// `true` if every item is inspected even after a failure.
    const ACCUMULATES: bool = false;

    /// Merges a later failure into the failure collected so far.
    ///
    /// The provided implementation keeps the earlier one.
    #[inline]
    fn absorb(collected: Self::Failure, _next: Self::Failure) -> Self::Failure {
        collected
    }

    /// Collects the success values of `items` in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Sequence;
    ///
    /// let mut pulled = 0;
    /// let items = [Ok(1), Err("stop"), Ok(3)].into_iter().inspect(|_| pulled += 1);
    /// let collected: Result<Vec<i32>, &str> = Sequence::sequence(items);
    ///
    /// assert_eq!(collected, Err("stop"));
    /// assert_eq!(pulled, 2);
    /// ```
    fn sequence<I>(items: I) -> Self::Rebind<Vec<Self::Success>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut collector = Collector::new();
        for item in items {
            if !collector.push(item) {
                break;
            }
        }
        collector.finish()
    }

    /// Applies `function` to every element and collects the outcomes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::combinator::Sequence;
    ///
    /// let parsed = Result::traverse(["1", "2", "3"], |text| text.parse::<i32>());
    /// assert_eq!(parsed, Ok(vec![1, 2, 3]));
    /// ```
    #[inline]
    fn traverse<A, I, F>(items: I, function: F) -> Self::Rebind<Vec<Self::Success>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }

    /// Awaits each future in order, one at a time, and collects the results.
    ///
    /// Fail-fast types stop at the first failure: the remaining futures are
    /// dropped without ever being polled.
    #[cfg(feature = "async")]
    fn sequence_async<I, Fut>(futures: I) -> Task<Self::Rebind<Vec<Self::Success>>>
    where
        Self: SendOutcome,
        I: IntoIterator<Item = Fut>,
        I::IntoIter: Send + 'static,
        Fut: Future<Output = Self> + Send + 'static,
        Self::Rebind<Vec<Self::Success>>: 'static,
    {
        let futures = futures.into_iter();
        Task::new(async move {
            let mut collector = Collector::new();
            for future in futures {
                if !collector.push(future.await) {
                    break;
                }
            }
            collector.finish()
        })
    }
}

impl<T> Sequence for Option<T> {}

impl<T, E> Sequence for Result<T, E> {}

impl<A, B> Sequence for Either2<A, B> {}

impl<T, E> Sequence for Validation<T, E> {
    const ACCUMULATES: bool = true;

    #[inline]
    fn absorb(mut collected: NonEmpty<E>, next: NonEmpty<E>) -> NonEmpty<E> {
        collected.append(next);
        collected
    }
}

// =============================================================================
// Collector
// =============================================================================

struct Collector<O: Sequence> {
    values: Vec<O::Success>,
    failure: Option<O::Failure>,
}

impl<O: Sequence> Collector<O> {
    // Grows on demand: the iterator may be unbounded when a failure ends it.
    const fn new() -> Self {
        Self {
            values: Vec::new(),
            failure: None,
        }
    }

    /// Returns `false` once no further item should be pulled.
    fn push(&mut self, item: O) -> bool {
        match item.into_either() {
            Either2::Last(value) => {
                if self.failure.is_none() {
                    self.values.push(value);
                }
            }
            Either2::First(failure) => {
                self.values.clear();
                self.failure = Some(match self.failure.take() {
                    Some(collected) => O::absorb(collected, failure),
                    None => failure,
                });
            }
        }

        let keep_going = O::ACCUMULATES || self.failure.is_none();
        if !keep_going {
            crate::trace_state!(combinator = "sequence", "short-circuiting on first failure");
        }
        keep_going
    }

    fn finish(self) -> O::Rebind<Vec<O::Success>> {
        match self.failure {
            Some(failure) => <O::Rebind<Vec<O::Success>> as Outcome>::fail(failure),
            None => <O::Rebind<Vec<O::Success>> as Outcome>::succeed(self.values),
        }
    }
}
