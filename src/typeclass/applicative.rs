//! Applicative type class - combining independent computations.
//!
//! `Applicative` combines several outcomes that were evaluated independently
//! of each other. It is the place where [`Validation`] differs from the other
//! outcome types:
//!
//! - `Option`, `Result` and `Either2` keep the **first** failure (left-most
//!   argument wins).
//! - `Validation` keeps **all** failures, concatenated left to right.
//!
//! Every method takes its arguments by value, so all inputs have already been
//! evaluated by the time they are combined; the combining function itself
//! runs only when every input succeeded.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map2(succeed(()), |a, ()| a) == fa
//! ```
//!
//! ## Associativity of `product`
//!
//! ```text
//! fa.product(fb).product(fc) ~ fa.product(fb.product(fc))   (up to tuple nesting)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::control::Validation;
//! use lambars_adt::typeclass::Applicative;
//!
//! let a = Some(1);
//! let b = Some(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Some(3));
//!
//! let left: Validation<i32, &str> = Validation::failure("e1");
//! let right: Validation<i32, &str> = Validation::failure("e2");
//! let both = left.map2(right, |x, y| x + y);
//! assert_eq!(both.errors().map(|errors| errors.len()), Some(2));
//! ```

use crate::combinator::Outcome;
use crate::control::{Either2, Validation};

/// A type class for outcomes that can be combined independently.
///
/// The provided methods are fail-fast: the failure of the left-most failing
/// argument is returned. Accumulating types override them.
pub trait Applicative: Outcome {
    /// Combines two outcomes using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::typeclass::Applicative;
    ///
    /// let first: Result<i32, &str> = Err("first");
    /// let second: Result<i32, &str> = Err("second");
    /// assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::Rebind<B>, function: F) -> Self::Rebind<C>
    where
        F: FnOnce(Self::Success, B) -> C,
    {
        match (self.into_either(), other.into_either()) {
            (Either2::Last(left), Either2::Last(right)) => {
                <Self::Rebind<C> as Outcome>::succeed(function(left, right))
            }
            (Either2::First(failure), _) | (_, Either2::First(failure)) => {
                <Self::Rebind<C> as Outcome>::fail(failure)
            }
        }
    }

    /// Combines three outcomes using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::Rebind<B>,
        third: Self::Rebind<C>,
        function: F,
    ) -> Self::Rebind<D>
    where
        F: FnOnce(Self::Success, B, C) -> D,
    {
        match (self.into_either(), second.into_either(), third.into_either()) {
            (Either2::Last(first), Either2::Last(second), Either2::Last(third)) => {
                <Self::Rebind<D> as Outcome>::succeed(function(first, second, third))
            }
            (Either2::First(failure), _, _)
            | (_, Either2::First(failure), _)
            | (_, _, Either2::First(failure)) => <Self::Rebind<D> as Outcome>::fail(failure),
        }
    }

    /// Combines two outcomes into a tuple.
    #[inline]
    fn product<B>(self, other: Self::Rebind<B>) -> Self::Rebind<(Self::Success, B)> {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two outcomes, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::Rebind<B>) -> Self::Rebind<Self::Success> {
        self.map2(other, |left, _| left)
    }

    /// Combines two outcomes, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::Rebind<B>) -> Self::Rebind<B> {
        self.map2(other, |_, right| right)
    }
}

impl<T> Applicative for Option<T> {}

impl<T, E> Applicative for Result<T, E> {}

impl<A, B> Applicative for Either2<A, B> {}

/// Accumulates every failure, left to right.
impl<T, E> Applicative for Validation<T, E> {
    #[inline]
    fn map2<B, C, F>(self, other: Validation<B, E>, function: F) -> Validation<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validation<B, E>,
        third: Validation<C, E>,
        function: F,
    ) -> Validation<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.zip(second)
            .zip_with(third, |(first, second), third| function(first, second, third))
    }
}
