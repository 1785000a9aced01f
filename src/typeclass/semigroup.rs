//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative. Error accumulation in
//! [`Validation`](crate::control::Validation) is expressed as the semigroup
//! of [`NonEmpty`](crate::control::NonEmpty): concatenation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl Semigroup for crate::Unit {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine(right), "Hello, World!");
    }

    #[rstest]
    fn vec_combine_with_empty() {
        let left: Vec<i32> = vec![1, 2];
        let right: Vec<i32> = vec![];
        assert_eq!(left.combine(right), vec![1, 2]);
    }

    #[rstest]
    fn vec_combine_keeps_duplicates_in_order() {
        assert_eq!(vec!["a", "b"].combine(vec!["a"]), vec!["a", "b", "a"]);
    }

    #[rstest]
    fn reduce_all_folds_left_to_right() {
        let parts = vec![vec![1], vec![2, 3], vec![4]];
        assert_eq!(Vec::reduce_all(parts), Some(vec![1, 2, 3, 4]));
    }
}
