//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. A fresh
//! [`Writer`](crate::Writer) starts from that identity, which is what makes
//! `Writer::of(v)` a lawful `pure`.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Monoid, it must satisfy:
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Examples
//!
//! ```
//! use tidepool::{Monoid, Semigroup};
//!
//! let log = vec!["start", "finish"];
//! let empty: Vec<&str> = Monoid::empty();
//! assert_eq!(log.clone().combine(empty.clone()), log);
//! assert_eq!(empty.combine(log.clone()), log);
//! ```

use crate::{Maybe, Semigroup};

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

// None is the identity for the lifted semigroup
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Maybe::None
    }
}

/// Fold an iterator of monoid values into one, starting from the identity.
///
/// An empty iterator yields `M::empty()`.
///
/// # Example
///
/// ```
/// use tidepool::monoid::fold_all;
///
/// let logs = vec![vec!["a"], vec![], vec!["b", "c"]];
/// assert_eq!(fold_all(logs), vec!["a", "b", "c"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_right_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(v.clone().combine(empty), v);
    }

    #[test]
    fn test_vec_left_identity() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn test_string_identity() {
        let s = "hello".to_string();
        let empty: String = Monoid::empty();
        assert_eq!(s.clone().combine(empty.clone()), s);
        assert_eq!(empty.combine(s.clone()), s);
    }

    #[test]
    fn test_maybe_identity() {
        let m = Maybe::some("x".to_string());
        assert_eq!(m.clone().combine(Maybe::empty()), m);
        assert_eq!(Maybe::empty().combine(m.clone()), m);
    }

    #[test]
    fn test_fold_all_empty() {
        let logs: Vec<Vec<&str>> = vec![];
        assert_eq!(fold_all(logs), Vec::<&str>::new());
    }

    #[test]
    fn test_fold_all_preserves_order() {
        let logs = vec![vec![3], vec![1], vec![2]];
        assert_eq!(fold_all(logs), vec![3, 1, 2]);
    }

    #[test]
    fn test_fold_all_maybe() {
        let parts = vec![
            Maybe::some("a".to_string()),
            Maybe::none(),
            Maybe::some("b".to_string()),
        ];
        assert_eq!(fold_all(parts), Maybe::some("ab".to_string()));
    }
}
