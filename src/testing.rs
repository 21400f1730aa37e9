//! Testing utilities and helpers for tidepool
//!
//! Assertion macros for the two container types, plus proptest `Arbitrary`
//! impls when the `proptest` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use tidepool::{assert_log, assert_none, assert_some, Maybe, Writer};
//!
//! assert_some!(Maybe::some(42));
//! assert_some!(Maybe::some(42), 42);
//! assert_none!(Maybe::<i32>::none());
//!
//! let w = Writer::tell("started").then(Writer::new(1, vec!["done"]));
//! assert_log!(w, ["started", "done"]);
//! ```

/// Assert that a `Maybe` holds a value, optionally checking which one.
///
/// # Example
///
/// ```rust
/// use tidepool::{assert_some, Maybe};
///
/// assert_some!(Maybe::some("x"));
/// assert_some!(Maybe::some(2).map(|x| x * 2), 4);
/// ```
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Some(_) => {}
            $crate::Maybe::None => {
                panic!("Expected Some, got None");
            }
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $maybe {
            $crate::Maybe::Some(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Maybe::None => {
                panic!("Expected Some({:?}), got None", $expected);
            }
        }
    };
}

/// Assert that a `Maybe` is absent.
///
/// # Example
///
/// ```rust
/// use tidepool::{assert_none, Maybe};
///
/// assert_none!(Maybe::some(3).filter(|x| *x > 5));
/// ```
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::None => {}
            $crate::Maybe::Some(v) => {
                panic!("Expected None, got Some: {:?}", v);
            }
        }
    };
}

/// Assert that a `Writer`'s log equals the expected entries, in order.
///
/// # Example
///
/// ```rust
/// use tidepool::{assert_log, Writer};
///
/// let w = Writer::new(1, vec!["a"]).and_tell("b");
/// assert_log!(w, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_log {
    ($writer:expr, $expected:expr) => {
        match &$writer {
            w => {
                let log: &[_] = $crate::Writer::log(w);
                assert_eq!(log, &$expected[..], "Writer log mismatch");
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Maybe, Writer};
#[cfg(feature = "proptest")]
use proptest::{
    collection::{vec, VecStrategy},
    option::{of, OptionStrategy},
    prelude::*,
    strategy::Map,
};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary,
{
    type Parameters = T::Parameters;
    type Strategy = Map<OptionStrategy<T::Strategy>, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        of(any_with::<T>(args)).prop_map(Maybe::from_option as fn(Option<T>) -> Self)
    }
}

#[cfg(feature = "proptest")]
fn writer_from_parts<T, W>((value, log): (T, Vec<W>)) -> Writer<T, W> {
    Writer::new(value, log)
}

#[cfg(feature = "proptest")]
impl<T, W> Arbitrary for Writer<T, W>
where
    T: Arbitrary,
    W: Arbitrary,
{
    type Parameters = (T::Parameters, W::Parameters);
    type Strategy = Map<(T::Strategy, VecStrategy<W::Strategy>), fn((T, Vec<W>)) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, w_params) = args;
        (any_with::<T>(t_params), vec(any_with::<W>(w_params), 0..8))
            .prop_map(writer_from_parts as fn((T, Vec<W>)) -> Self)
    }
}
