//! Validation - a success value or a non-empty list of accumulated errors.
//!
//! `Validation<T, E>` looks like `Result`, but its failure branch carries a
//! [`NonEmpty<E>`] instead of a single error. The two channels behave
//! differently depending on how validations are put together:
//!
//! - **Sequentially** (`bind`): the first failure stops the chain, exactly
//!   like `Result`. A later step cannot run without the earlier value.
//! - **Independently** (`zip`, `and_also`, [`Applicative::map2`],
//!   [`Sequence::sequence`]): every input is evaluated and all errors are
//!   concatenated in evaluation order, without deduplication.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::Error;
//! use lambars_adt::control::Validation;
//!
//! fn validate_name(name: &str) -> Validation<String> {
//!     if name.is_empty() {
//!         Validation::failure(Error::new("name", "must not be empty"))
//!     } else {
//!         Validation::success(name.to_string())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<i32> {
//!     if age >= 18 {
//!         Validation::success(age)
//!     } else {
//!         Validation::failure(Error::new("age", "must be 18 or older"))
//!     }
//! }
//!
//! let result = validate_name("").zip(validate_age(12));
//! let codes: Vec<String> = result
//!     .errors()
//!     .map(|errors| errors.iter().map(|error| error.code().to_string()).collect())
//!     .unwrap_or_default();
//! assert_eq!(codes, vec!["name", "age"]);
//! ```
//!
//! [`Applicative::map2`]: crate::typeclass::Applicative::map2
//! [`Sequence::sequence`]: crate::combinator::Sequence::sequence

use super::NonEmpty;
use crate::error::Error;
use crate::typeclass::Semigroup;

/// A success value or one-or-more accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E = Error> {
    /// The checks passed.
    Success(T),
    /// At least one check failed; errors are kept in evaluation order.
    Failure(NonEmpty<E>),
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> Validation<T, E> {
    /// Creates a successful validation.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed validation holding a single error.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(NonEmpty::new(error))
    }

    /// Creates a failed validation from an existing error sequence.
    #[inline]
    pub const fn failures(errors: NonEmpty<E>) -> Self {
        Self::Failure(errors)
    }

    /// Creates a failed validation from a vector of errors.
    ///
    /// Returns `None` when `errors` is empty: there is no such thing as a
    /// failure without errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::Validation;
    ///
    /// assert!(Validation::<i32, &str>::try_failures(Vec::new()).is_none());
    /// assert!(Validation::<i32, &str>::try_failures(vec!["a"]).is_some());
    /// ```
    pub fn try_failures(errors: Vec<E>) -> Option<Self> {
        NonEmpty::from_vec(errors).map(Self::Failure)
    }

    /// Lifts a `Result`, turning its single error into a one-element failure.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

// =============================================================================
// Inspection
// =============================================================================

impl<T, E> Validation<T, E> {
    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the accumulated errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&NonEmpty<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Converts into a `Result` whose error is the whole error sequence.
    #[inline]
    pub fn into_result(self) -> Result<T, NonEmpty<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<T, E> Validation<T, E> {
    /// Transforms the success value; failures keep their errors untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Transforms every accumulated error, keeping their order.
    pub fn map_errors<E2, F>(self, function: F) -> Validation<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => Validation::Failure(errors.map(function)),
        }
    }

    /// Chains a dependent validation.
    ///
    /// Short-circuits: on `Failure`, `function` is not called and the
    /// existing errors are returned. Errors are never accumulated across
    /// `bind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::Validation;
    ///
    /// let failed: Validation<i32, &str> = Validation::failure("first");
    /// let chained = failed.bind(|_| Validation::<i32, &str>::failure("second"));
    /// assert_eq!(chained, Validation::failure("first"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        self.bind(function)
    }

    /// Eliminates the validation with one function per variant.
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(NonEmpty<E>) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }
}

// =============================================================================
// Accumulation
// =============================================================================

impl<T, E> Validation<T, E> {
    /// Pairs two independently evaluated validations.
    ///
    /// Both successes give a success of the pair. Otherwise the errors of
    /// `self` come first, followed by the errors of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::Validation;
    ///
    /// let left: Validation<i32, &str> = Validation::failure("e1");
    /// let right: Validation<i32, &str> = Validation::failure("e2");
    /// let combined = left.zip(right);
    /// assert_eq!(
    ///     combined.errors().map(|errors| errors.iter().copied().collect::<Vec<_>>()),
    ///     Some(vec!["e1", "e2"])
    /// );
    /// ```
    pub fn zip<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two independently evaluated validations with `function`.
    ///
    /// `function` only runs when both are successful.
    pub fn zip_with<U, R, F>(self, other: Validation<U, E>, function: F) -> Validation<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Success(left), Validation::Success(right)) => {
                Validation::Success(function(left, right))
            }
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
            (Self::Failure(left), Validation::Failure(right)) => {
                crate::trace_state!(
                    combinator = "zip_with",
                    accumulated = left.len() + right.len(),
                    "accumulating validation errors"
                );
                Validation::Failure(left.combine(right))
            }
        }
    }

    /// Keeps the value of `self` but also requires `other` to succeed,
    /// accumulating errors from both.
    pub fn and_also<U>(self, other: Validation<U, E>) -> Self {
        self.zip_with(other, |value, _| value)
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

/// Two successes combine their values; any failures accumulate.
impl<T: Semigroup, E> Semigroup for Validation<T, E> {
    fn combine(self, other: Self) -> Self {
        self.zip_with(other, Semigroup::combine)
    }
}
