//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. [`Writer`](crate::Writer)
//! relies on it to merge the log of one step with the log of the next, so the
//! order guarantees of a Writer chain come straight from this law.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tidepool::{Maybe, Semigroup};
//!
//! // Logs concatenate, earlier entries first
//! let first = vec!["parsed"];
//! let second = vec!["validated"];
//! assert_eq!(first.combine(second), vec!["parsed", "validated"]);
//!
//! // Maybe lifts the inner semigroup and skips absent sides
//! let a = Maybe::some("tide".to_string());
//! let b = Maybe::<String>::none();
//! assert_eq!(a.combine(b), Maybe::some("tide".to_string()));
//! ```

use crate::Maybe;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// assert_eq!(v1.combine(v2), vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// Some(a) <> Some(b) = Some(a <> b); None is absorbed on either side.
impl<T: Semigroup> Semigroup for Maybe<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(a.combine(b)),
            (Maybe::Some(a), Maybe::None) => Maybe::Some(a),
            (Maybe::None, other) => other,
        }
    }
}
