//! Host types that carry the sequence slot.
//!
//! [`Sequence`] is the plain host: a named wrapper around `Vec<T>` whose
//! only job is to own the slot. `Vec<T>` itself is also registered as a
//! host, so the operation set works directly on vectors.

use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::enumerable::Enumerable;

/// A plain enumerable host owning one ordered sequence of `T`.
///
/// # Example
///
/// ```
/// use sequent::{Enumerable, Sequence};
///
/// let mut seq = Sequence::from_vec(vec![3, 1, 3, 2]);
/// seq.unique().push(9);
/// assert_eq!(seq.array(), &[3, 1, 2, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    values: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Sequence { values: Vec::new() }
    }

    /// Wraps an existing vector without copying.
    pub fn from_vec(values: Vec<T>) -> Self {
        Sequence { values }
    }

    /// Unwraps into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Iterates the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl Sequence<i64> {
    /// The integers from `from` through `to`, inclusive.
    ///
    /// `from > to` yields an empty sequence.
    pub fn range(from: i64, to: i64) -> Sequence<i64> {
        (from..=to).collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> Enumerable for Sequence<T> {
    type Item = T;

    fn slot(&self) -> &Vec<T> {
        &self.values
    }

    fn slot_mut(&mut self) -> &mut Vec<T> {
        &mut self.values
    }
}

impl<T> Enumerable for Vec<T> {
    type Item = T;

    fn slot(&self) -> &Vec<T> {
        self
    }

    fn slot_mut(&mut self) -> &mut Vec<T> {
        self
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Sequence { values }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}
