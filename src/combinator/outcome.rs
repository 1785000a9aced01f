//! The state-inspection contract every outcome type implements.
//!
//! An outcome is a two-state value: a success channel and a failure channel.
//! [`Outcome`] exposes that state as an [`Either2`] (`First` = failure,
//! `Last` = success) and lets generic code rebuild the same kind of outcome
//! around a different success type through the `Rebind` associated type.
//!
//! | type               | `Success` | `Failure`     |
//! |--------------------|-----------|---------------|
//! | `Option<T>`        | `T`       | `()`          |
//! | `Result<T, E>`     | `T`       | `E`           |
//! | `Validation<T, E>` | `T`       | `NonEmpty<E>` |
//! | `Either2<A, B>`    | `B`       | `A`           |
//!
//! All combinators in this crate are written against this trait alone and
//! never look at the concrete representation.

use crate::control::{Either2, NonEmpty, Validation};

/// A value that is either a success or a failure.
///
/// # Laws
///
/// ```text
/// O::succeed(v).into_either() == Either2::Last(v)
/// O::fail(f).into_either()    == Either2::First(f)
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_adt::combinator::Outcome;
/// use lambars_adt::control::Either2;
///
/// let value: Result<i32, String> = Outcome::succeed(3);
/// assert_eq!(value, Ok(3));
/// assert!(value.is_success());
/// assert_eq!(value.into_either(), Either2::Last(3));
/// ```
pub trait Outcome: Sized {
    /// The payload of the success state.
    type Success;

    /// The payload of the failure state.
    type Failure;

    /// The same outcome type with a different success payload.
    type Rebind<U>: Outcome<Success = U, Failure = Self::Failure>;

    /// Builds the success state.
    fn succeed(value: Self::Success) -> Self;

    /// Builds the failure state.
    fn fail(failure: Self::Failure) -> Self;

    /// Moves the payload out as an [`Either2`].
    fn into_either(self) -> Either2<Self::Failure, Self::Success>;

    /// Borrows the payload as an [`Either2`].
    fn as_either(&self) -> Either2<&Self::Failure, &Self::Success>;

    /// Returns `true` for the success state.
    #[inline]
    fn is_success(&self) -> bool {
        self.as_either().is_last()
    }

    /// Returns `true` for the failure state.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl<T> Outcome for Option<T> {
    type Success = T;
    type Failure = ();
    type Rebind<U> = Option<U>;

    #[inline]
    fn succeed(value: T) -> Self {
        Some(value)
    }

    #[inline]
    fn fail((): ()) -> Self {
        None
    }

    #[inline]
    fn into_either(self) -> Either2<(), T> {
        match self {
            Some(value) => Either2::Last(value),
            None => Either2::First(()),
        }
    }

    #[inline]
    fn as_either(&self) -> Either2<&(), &T> {
        match self {
            Some(value) => Either2::Last(value),
            None => Either2::First(&()),
        }
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Success = T;
    type Failure = E;
    type Rebind<U> = Result<U, E>;

    #[inline]
    fn succeed(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn fail(failure: E) -> Self {
        Err(failure)
    }

    #[inline]
    fn into_either(self) -> Either2<E, T> {
        match self {
            Ok(value) => Either2::Last(value),
            Err(error) => Either2::First(error),
        }
    }

    #[inline]
    fn as_either(&self) -> Either2<&E, &T> {
        match self {
            Ok(value) => Either2::Last(value),
            Err(error) => Either2::First(error),
        }
    }
}

impl<T, E> Outcome for Validation<T, E> {
    type Success = T;
    type Failure = NonEmpty<E>;
    type Rebind<U> = Validation<U, E>;

    #[inline]
    fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    #[inline]
    fn fail(failure: NonEmpty<E>) -> Self {
        Self::Failure(failure)
    }

    #[inline]
    fn into_either(self) -> Either2<NonEmpty<E>, T> {
        match self {
            Self::Success(value) => Either2::Last(value),
            Self::Failure(errors) => Either2::First(errors),
        }
    }

    #[inline]
    fn as_either(&self) -> Either2<&NonEmpty<E>, &T> {
        match self {
            Self::Success(value) => Either2::Last(value),
            Self::Failure(errors) => Either2::First(errors),
        }
    }
}

impl<A, B> Outcome for Either2<A, B> {
    type Success = B;
    type Failure = A;
    type Rebind<U> = Either2<A, U>;

    #[inline]
    fn succeed(value: B) -> Self {
        Self::Last(value)
    }

    #[inline]
    fn fail(failure: A) -> Self {
        Self::First(failure)
    }

    #[inline]
    fn into_either(self) -> Self {
        self
    }

    #[inline]
    fn as_either(&self) -> Either2<&A, &B> {
        match self {
            Self::First(value) => Either2::First(value),
            Self::Last(value) => Either2::Last(value),
        }
    }
}

/// An [`Outcome`] that can travel through a [`Task`](crate::effect::Task).
///
/// Blanket-implemented for every outcome whose payloads are `Send + 'static`.
pub trait SendOutcome:
    Outcome<Success: Send + 'static, Failure: Send + 'static> + Send + 'static
{
}

impl<O> SendOutcome for O
where
    O: Outcome + Send + 'static,
    O::Success: Send + 'static,
    O::Failure: Send + 'static,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state_of<O: Outcome>(outcome: &O) -> &'static str {
        if outcome.is_success() { "success" } else { "failure" }
    }

    #[rstest]
    fn option_state() {
        assert_eq!(state_of(&Some(1)), "success");
        assert_eq!(state_of(&None::<i32>), "failure");
        assert_eq!(None::<i32>.into_either(), Either2::First(()));
    }

    #[rstest]
    fn result_state_keeps_error() {
        let failed: Result<i32, &str> = Err("e");
        assert_eq!(failed.as_either(), Either2::First(&"e"));
        assert!(failed.is_failure());
    }

    #[rstest]
    fn validation_state_exposes_error_sequence() {
        let failed: Validation<i32, &str> = Validation::failure("e");
        assert_eq!(failed.into_either(), Either2::First(NonEmpty::new("e")));
    }

    #[rstest]
    fn either2_is_its_own_state() {
        let value: Either2<&str, i32> = Either2::Last(5);
        assert_eq!(value.into_either(), Either2::Last(5));
        assert_eq!(<Either2<&str, i32> as Outcome>::fail("f"), Either2::First("f"));
    }

    #[rstest]
    fn succeed_and_fail_roundtrip_through_either() {
        let success: Result<i32, &str> = Outcome::succeed(1);
        let failure: Result<i32, &str> = Outcome::fail("no");
        assert_eq!(success.into_either(), Either2::Last(1));
        assert_eq!(failure.into_either(), Either2::First("no"));
    }
}
