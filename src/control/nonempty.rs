//! A sequence that always holds at least one element.
//!
//! [`NonEmpty`] carries the accumulated errors of a failed
//! [`Validation`](super::Validation). Because the head element is stored
//! separately from the tail, an empty `NonEmpty` cannot be constructed.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::control::NonEmpty;
//!
//! let mut errors = NonEmpty::new("too short");
//! errors.push("missing digit");
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.first(), &"too short");
//! assert_eq!(errors.into_vec(), vec!["too short", "missing digit"]);
//! ```

use std::fmt;

use crate::typeclass::Semigroup;

/// A non-empty, order-preserving sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Creates a sequence holding exactly `head`.
    #[inline]
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Converts a vector, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::NonEmpty;
    ///
    /// assert!(NonEmpty::<i32>::from_vec(Vec::new()).is_none());
    /// assert_eq!(NonEmpty::from_vec(vec![1, 2]).map(|items| items.len()), Some(2));
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.tail.push(item);
    }

    /// Moves every element of `other` after the elements of `self`.
    pub fn append(&mut self, other: Self) {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Returns the first element. Always present.
    #[inline]
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Returns the last element. Always present.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the number of elements, which is at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; provided for API symmetry with collections.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element, keeping the order.
    pub fn map<U, F>(self, mut function: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmpty {
            head: function(self.head),
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Converts into a vector with the same order.
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmpty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(items: NonEmpty<T>) -> Self {
        items.into_vec()
    }
}

impl<T> From<T> for NonEmpty<T> {
    fn from(head: T) -> Self {
        Self::new(head)
    }
}

/// Concatenation, left elements first.
impl<T> Semigroup for NonEmpty<T> {
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}
