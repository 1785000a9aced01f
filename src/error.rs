//! Structured error payload carried by failed computations.
//!
//! [`Error`] is the default failure payload of [`Result`](crate::Result) and
//! [`Validation`](crate::control::Validation). It is a small record of a
//! machine-readable `code` and a human-readable `message`. The combinators in
//! this crate never inspect or rebuild an error: a failure is always moved
//! through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::Error;
//!
//! let error = Error::new("not_found", "user 42 does not exist");
//! assert_eq!(error.code(), "not_found");
//! assert_eq!(format!("{error}"), "not_found: user 42 does not exist");
//! ```

use std::borrow::Cow;
use std::fmt;

/// The code used by [`Error::from_message`].
pub const GENERIC_ERROR_CODE: &str = "error";

/// A structured error: a code plus a message.
///
/// # Examples
///
/// ```rust
/// use lambars_adt::Error;
///
/// let first = Error::new("invalid_email", "missing @");
/// let second = Error::new("invalid_email", "missing @");
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    code: Cow<'static, str>,
    message: String,
}

impl Error {
    /// Creates an error with the given code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an error carrying only a message, under [`GENERIC_ERROR_CODE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::Error;
    ///
    /// let error = Error::from_message("boom");
    /// assert_eq!(error.code(), "error");
    /// assert_eq!(error.message(), "boom");
    /// ```
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(GENERIC_ERROR_CODE, message)
    }

    /// Returns the machine-readable code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// `Result` with [`Error`] as the default failure payload.
///
/// This is the crate's single-error outcome type. It is a plain alias of
/// [`std::result::Result`], so all of the standard methods stay available
/// next to the [`Combinators`](crate::combinator::Combinators) surface.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_display_joins_code_and_message() {
        let error = Error::new("timeout", "gave up after 3 attempts");
        assert_eq!(format!("{error}"), "timeout: gave up after 3 attempts");
    }

    #[rstest]
    fn error_from_message_uses_generic_code() {
        let error = Error::from_message("boom");
        assert_eq!(error.code(), GENERIC_ERROR_CODE);
        assert_eq!(error.message(), "boom");
    }

    #[rstest]
    fn error_equality_compares_both_fields() {
        let error1 = Error::new("a", "message");
        let error2 = Error::new("a", "message");
        let error3 = Error::new("b", "message");
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[rstest]
    fn error_has_no_source() {
        use std::error::Error as _;

        let error = Error::from_message("leaf");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn error_accepts_owned_code() {
        let code = String::from("dynamic");
        let error = Error::new(code, "built at runtime");
        assert_eq!(error.code(), "dynamic");
    }
}
