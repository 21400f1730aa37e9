//! A value paired with the log produced while computing it.
//!
//! `Writer<T, W>` carries a result of type `T` and an ordered, append-only
//! log of `W` entries. Chaining Writers with [`flat_map`](Writer::flat_map)
//! concatenates their logs, earlier steps first, so diagnostics travel with
//! the value instead of going through a side channel.
//!
//! # Overview
//!
//! Instead of threading a `&mut Vec<String>` through every function:
//!
//! ```rust,ignore
//! fn step(x: i32, logs: &mut Vec<String>) -> i32 {
//!     logs.push(format!("step({})", x));
//!     x + 1
//! }
//! ```
//!
//! return a Writer and let composition merge the logs:
//!
//! ```rust
//! use tidepool::Writer;
//!
//! fn step(x: i32) -> Writer<i32, String> {
//!     Writer::new(x + 1, vec![format!("step({})", x)])
//! }
//!
//! let result = Writer::of(1).flat_map(step).flat_map(step);
//! assert_eq!(*result.value(), 3);
//! assert_eq!(result.log(), ["step(1)", "step(2)"]);
//! ```
//!
//! # Laws
//!
//! - Left identity: `Writer::of(a).flat_map(f) == f(a)`
//! - Right identity: `w.flat_map(Writer::of) == w`
//! - Associativity: `w.flat_map(f).flat_map(g) == w.flat_map(|x| f(x).flat_map(g))`
//! - Tell: `Writer::tell(a).then(Writer::tell(b))` logs `[a, b]`
//!
//! # Ownership of the Log
//!
//! Combinators take `self` by value and move the log into their result, so
//! no two Writers ever share one log. The log is only lent out as `&[W]`.
//! Cloning a Writer clones its log.

use crate::{Monoid, Semigroup};

/// A computation result together with its accumulated log.
///
/// # Type Parameters
///
/// * `T` - The value type. Log-only Writers built with [`Writer::tell`] use `()`.
/// * `W` - The log entry type.
///
/// # Example
///
/// ```rust
/// use tidepool::Writer;
///
/// let w = Writer::new(5, vec!["log 1"])
///     .flat_map(|v| Writer::new(v + 3, vec!["log 2"]))
///     .flat_map(|v| Writer::new(v * 2, vec!["log 3"]));
///
/// assert_eq!(*w.value(), 16);
/// assert_eq!(w.log(), ["log 1", "log 2", "log 3"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Writer<T, W> {
    value: T,
    log: Vec<W>,
}

impl<T, W> Writer<T, W> {
    // ========== Constructors ==========

    /// Create a Writer with an explicit initial log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::new(42, vec!["initial log"]);
    /// assert_eq!(*w.value(), 42);
    /// assert_eq!(w.log(), ["initial log"]);
    /// ```
    #[inline]
    pub fn new(value: T, log: Vec<W>) -> Self {
        Writer { value, log }
    }

    /// Create a Writer with an empty log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::<_, String>::of(42);
    /// assert!(w.log().is_empty());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        Writer::new(value, Monoid::empty())
    }

    // ========== Accessors ==========

    /// Borrow the value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the log, oldest entry first.
    #[inline]
    pub fn log(&self) -> &[W] {
        &self.log
    }

    /// Take the value, dropping the log.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Take the log, dropping the value.
    #[inline]
    pub fn into_log(self) -> Vec<W> {
        self.log
    }

    /// Split into `(value, log)`.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<W>) {
        (self.value, self.log)
    }

    // ========== Transformations ==========

    /// Transform the value. The log moves over untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::new(2, vec!["start"]).map(|x| x * 2);
    /// assert_eq!(*w.value(), 4);
    /// assert_eq!(w.log(), ["start"]);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Writer<U, W>
    where
        F: FnOnce(T) -> U,
    {
        Writer {
            value: f(self.value),
            log: self.log,
        }
    }

    /// Chain a step that produces its own Writer (monadic bind).
    ///
    /// The result holds the continuation's value and the log of `self`
    /// followed by the continuation's log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::new(2, vec!["log 1"])
    ///     .flat_map(|x| Writer::new(x * 2, vec!["log 2"]));
    /// assert_eq!(*w.value(), 4);
    /// assert_eq!(w.log(), ["log 1", "log 2"]);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Writer<U, W>
    where
        F: FnOnce(T) -> Writer<U, W>,
    {
        let next = f(self.value);
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Alias for [`flat_map`](Writer::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Writer<U, W>
    where
        F: FnOnce(T) -> Writer<U, W>,
    {
        self.flat_map(f)
    }

    /// Sequence `next` after `self`, keeping only `next`'s value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::tell("connecting").then(Writer::new(200, vec!["connected"]));
    /// assert_eq!(*w.value(), 200);
    /// assert_eq!(w.log(), ["connecting", "connected"]);
    /// ```
    #[inline]
    pub fn then<U>(self, next: Writer<U, W>) -> Writer<U, W> {
        self.flat_map(|_| next)
    }

    /// Append one entry, keeping the value.
    #[inline]
    pub fn and_tell(mut self, entry: W) -> Self {
        self.log.push(entry);
        self
    }

    /// Append an entry computed from the current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::<_, String>::of(21)
    ///     .map(|x| x * 2)
    ///     .tap_tell(|x| format!("doubled to {}", x));
    /// assert_eq!(w.log(), ["doubled to 42"]);
    /// ```
    #[inline]
    pub fn tap_tell<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> W,
    {
        let entry = f(&self.value);
        self.and_tell(entry)
    }

    /// Expose a copy of the log next to the value. The log itself is kept.
    #[inline]
    pub fn listen(self) -> Writer<(T, Vec<W>), W>
    where
        W: Clone,
    {
        Writer {
            value: (self.value, self.log.clone()),
            log: self.log,
        }
    }

    /// Rewrite the whole log, keeping the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::new(1, vec!["debug: a", "info: b", "debug: c"])
    ///     .censor(|log| log.into_iter().filter(|e| !e.starts_with("debug")).collect());
    /// assert_eq!(w.log(), ["info: b"]);
    /// ```
    #[inline]
    pub fn censor<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<W>) -> Vec<W>,
    {
        Writer {
            value: self.value,
            log: f(self.log),
        }
    }

    /// Convert every log entry, preserving order.
    #[inline]
    pub fn map_log<W2, F>(self, f: F) -> Writer<T, W2>
    where
        F: FnMut(W) -> W2,
    {
        Writer {
            value: self.value,
            log: self.log.into_iter().map(f).collect(),
        }
    }

    /// Pair the values of two Writers; `self`'s log comes first.
    #[inline]
    pub fn zip<U>(self, other: Writer<U, W>) -> Writer<(T, U), W> {
        self.map2(other, |a, b| (a, b))
    }

    /// Combine the values of two Writers with `f`; `self`'s log comes first.
    #[inline]
    pub fn map2<U, V, F>(self, other: Writer<U, W>, f: F) -> Writer<V, W>
    where
        F: FnOnce(T, U) -> V,
    {
        Writer {
            value: f(self.value, other.value),
            log: self.log.combine(other.log),
        }
    }

    // ========== Folding ==========

    /// Extract a result from the value, ignoring the log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::new(10, vec!["step 1", "step 2"]);
    /// assert_eq!(w.fold(|v| v + 5), 15);
    /// ```
    #[inline]
    pub fn fold<U, F>(self, on_value: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        on_value(self.value)
    }

    /// Hand the full log to `on_log`, then extract a result from the value.
    ///
    /// Both closures always run, `on_log` first. Whatever `on_log` does with
    /// the entries, it only ever sees them read-only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let mut seen = 0;
    /// let w = Writer::new(10, vec!["step 1", "step 2"]);
    /// let result = w.fold_with_log(|v| v + 5, |log| seen = log.len());
    ///
    /// assert_eq!(result, 15);
    /// assert_eq!(seen, 2);
    /// ```
    #[inline]
    pub fn fold_with_log<U, F, L>(self, on_value: F, on_log: L) -> U
    where
        F: FnOnce(T) -> U,
        L: FnOnce(&[W]),
    {
        on_log(&self.log);
        on_value(self.value)
    }
}

impl<W> Writer<(), W> {
    /// A log-only Writer: unit value, single entry.
    ///
    /// Usually the first link of a chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Writer;
    ///
    /// let w = Writer::tell("m");
    /// assert_eq!(w.value(), &());
    /// assert_eq!(w.log(), ["m"]);
    /// ```
    #[inline]
    pub fn tell(entry: W) -> Self {
        Writer {
            value: (),
            log: vec![entry],
        }
    }
}

impl<T: Default, W> Default for Writer<T, W> {
    fn default() -> Self {
        Writer::of(T::default())
    }
}

// ========== Free Functions ==========

/// Free-function form of [`Writer::of`].
#[inline]
pub fn of<T, W>(value: T) -> Writer<T, W> {
    Writer::of(value)
}

/// Free-function form of [`Writer::tell`].
#[inline]
pub fn tell<W>(entry: W) -> Writer<(), W> {
    Writer::tell(entry)
}

/// Free-function form of [`Writer::map`].
#[inline]
pub fn map<T, U, W, F>(w: Writer<T, W>, f: F) -> Writer<U, W>
where
    F: FnOnce(T) -> U,
{
    w.map(f)
}

/// Free-function form of [`Writer::flat_map`].
#[inline]
pub fn flat_map<T, U, W, F>(w: Writer<T, W>, f: F) -> Writer<U, W>
where
    F: FnOnce(T) -> Writer<U, W>,
{
    w.flat_map(f)
}

/// Free-function form of [`Writer::fold`].
#[inline]
pub fn fold<T, U, W, F>(w: Writer<T, W>, on_value: F) -> U
where
    F: FnOnce(T) -> U,
{
    w.fold(on_value)
}

/// Free-function form of [`Writer::fold_with_log`].
#[inline]
pub fn fold_with_log<T, U, W, F, L>(w: Writer<T, W>, on_value: F, on_log: L) -> U
where
    F: FnOnce(T) -> U,
    L: FnOnce(&[W]),
{
    w.fold_with_log(on_value, on_log)
}

/// Free-function form of [`Writer::value`].
#[inline]
pub fn value<T, W>(w: &Writer<T, W>) -> &T {
    w.value()
}

/// Free-function form of [`Writer::log`].
#[inline]
pub fn log<T, W>(w: &Writer<T, W>) -> &[W] {
    w.log()
}

// ========== Collection Utilities ==========

/// Run `f` over every item, collecting the values and concatenating the logs.
///
/// Values and log entries both keep the order of `items`.
///
/// # Example
///
/// ```rust
/// use tidepool::{writer::traverse, Writer};
///
/// let w = traverse(vec![1, 2, 3], |x| Writer::new(x * 10, vec![format!("saw {}", x)]));
/// assert_eq!(*w.value(), vec![10, 20, 30]);
/// assert_eq!(w.log(), ["saw 1", "saw 2", "saw 3"]);
/// ```
pub fn traverse<A, T, W, I, F>(items: I, mut f: F) -> Writer<Vec<T>, W>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Writer<T, W>,
{
    let mut values = Vec::new();
    let mut log: Vec<W> = Monoid::empty();

    for item in items {
        let (value, entries) = f(item).into_parts();
        values.push(value);
        log = log.combine(entries);
    }

    Writer::new(values, log)
}

/// Turn a collection of Writers into a Writer of a collection.
///
/// Equivalent to `traverse(writers, |w| w)`.
pub fn sequence<T, W, I>(writers: I) -> Writer<Vec<T>, W>
where
    I: IntoIterator<Item = Writer<T, W>>,
{
    traverse(writers, |w| w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_new_with_log() {
        let w = Writer::new(42, vec!["initial log"]);
        assert_eq!(*w.value(), 42);
        assert_eq!(w.log(), ["initial log"]);
    }

    #[test]
    fn test_of_has_empty_log() {
        let w = Writer::<_, &str>::of(42);
        assert_eq!(*w.value(), 42);
        assert!(w.log().is_empty());
    }

    #[test]
    fn test_tell() {
        let w = Writer::tell("log message");
        assert_eq!(w.value(), &());
        assert_eq!(w.log(), ["log message"]);
    }

    #[test]
    fn test_map_transforms_value_only() {
        let w = Writer::new(2, vec!["start"]).map(|x| x * 2);
        assert_eq!(*w.value(), 4);
        assert_eq!(w.log(), ["start"]);
    }

    #[test]
    fn test_flat_map_combines_logs() {
        let w = Writer::new(2, vec!["log 1"]).flat_map(|x| Writer::new(x * 2, vec!["log 2"]));
        assert_eq!(*w.value(), 4);
        assert_eq!(w.log(), ["log 1", "log 2"]);
    }

    #[test]
    fn test_flat_map_chain_order() {
        let w = Writer::new(5, vec!["log 1"])
            .flat_map(|v| Writer::new(v + 3, vec!["log 2"]))
            .flat_map(|v| Writer::new(v * 2, vec!["log 3"]));

        assert_eq!(*w.value(), 16);
        assert_eq!(w.log(), ["log 1", "log 2", "log 3"]);
    }

    #[test]
    fn test_flat_map_keeps_duplicates() {
        let w = Writer::new(0, vec!["tick"])
            .flat_map(|v| Writer::new(v + 1, vec!["tick", "tick"]));
        assert_eq!(w.log(), ["tick", "tick", "tick"]);
    }

    #[test]
    fn test_tell_starts_a_chain() {
        let w = Writer::tell("begin".to_string())
            .flat_map(|()| Writer::new(7, vec!["computed".to_string()]))
            .and_tell("end".to_string());

        assert_eq!(*w.value(), 7);
        assert_eq!(w.log(), ["begin", "computed", "end"]);
    }

    #[test]
    fn test_then() {
        let w = Writer::tell(1).then(Writer::tell(2)).then(Writer::new("done", vec![3]));
        assert_eq!(*w.value(), "done");
        assert_eq!(w.log(), [1, 2, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Writer::new(1, vec!["a"]);
        let extended = original.clone().and_tell("b");

        assert_eq!(original.log(), ["a"]);
        assert_eq!(extended.log(), ["a", "b"]);
    }

    #[test]
    fn test_fold_ignores_log() {
        let w = Writer::new(10, vec!["step 1", "step 2"]);
        assert_eq!(w.fold(|v| v + 5), 15);
    }

    #[test]
    fn test_fold_with_log_calls_both_in_order() {
        let order = Cell::new(0);
        let seen = Cell::new(0usize);

        let w = Writer::new(10, vec!["step 1", "step 2"]);
        let result = w.fold_with_log(
            |v| {
                assert_eq!(order.get(), 1);
                order.set(2);
                v + 5
            },
            |log| {
                assert_eq!(order.get(), 0);
                order.set(1);
                seen.set(log.len());
            },
        );

        assert_eq!(result, 15);
        assert_eq!(order.get(), 2);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_fold_with_log_on_empty_log() {
        let calls = Cell::new(0);
        let w = Writer::<_, String>::of("v");
        let result = w.fold_with_log(|v| v.len(), |log| {
            assert!(log.is_empty());
            calls.set(calls.get() + 1);
        });
        assert_eq!(result, 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_accessors_are_repeatable() {
        let w = Writer::new(3, vec!["x"]);
        for _ in 0..3 {
            assert_eq!(*w.value(), 3);
            assert_eq!(w.log(), ["x"]);
        }
        assert_eq!(w.into_parts(), (3, vec!["x"]));
    }

    #[test]
    fn test_tap_tell() {
        let w = Writer::<_, String>::of(21)
            .map(|x| x * 2)
            .tap_tell(|x| format!("value is {}", x));
        assert_eq!(*w.value(), 42);
        assert_eq!(w.log(), ["value is 42"]);
    }

    #[test]
    fn test_listen() {
        let w = Writer::new(1, vec!["a", "b"]).listen();
        assert_eq!(*w.value(), (1, vec!["a", "b"]));
        assert_eq!(w.log(), ["a", "b"]);
    }

    #[test]
    fn test_censor() {
        let w = Writer::new(1, vec!["a", "b", "c"]).censor(|mut log| {
            log.reverse();
            log
        });
        assert_eq!(*w.value(), 1);
        assert_eq!(w.log(), ["c", "b", "a"]);
    }

    #[test]
    fn test_map_log() {
        let w = Writer::new(1, vec![1, 2, 3]).map_log(|n| format!("#{}", n));
        assert_eq!(w.log(), ["#1", "#2", "#3"]);
    }

    #[test]
    fn test_zip_and_map2() {
        let a = Writer::new(2, vec!["a"]);
        let b = Writer::new(3, vec!["b"]);
        assert_eq!(a.clone().zip(b.clone()), Writer::new((2, 3), vec!["a", "b"]));
        assert_eq!(a.map2(b, |x, y| x * y), Writer::new(6, vec!["a", "b"]));
    }

    #[test]
    fn test_default() {
        let w: Writer<i32, String> = Writer::default();
        assert_eq!(w, Writer::of(0));
    }

    #[test]
    fn test_traverse() {
        let w = traverse(vec![1, 2, 3], |x| Writer::new(x * 10, vec![x]));
        assert_eq!(*w.value(), vec![10, 20, 30]);
        assert_eq!(w.log(), [1, 2, 3]);

        let empty = traverse(Vec::<i32>::new(), Writer::<i32, i32>::of);
        assert!(empty.value().is_empty());
        assert!(empty.log().is_empty());
    }

    #[test]
    fn test_sequence() {
        let w = sequence(vec![Writer::new('a', vec![1]), Writer::tell(2).map(|()| 'b')]);
        assert_eq!(*w.value(), vec!['a', 'b']);
        assert_eq!(w.log(), [1, 2]);
    }

    #[test]
    #[should_panic(expected = "step failed")]
    fn test_panics_in_callbacks_propagate() {
        Writer::new(1, vec!["a"]).flat_map(|_: i32| -> Writer<i32, &str> { panic!("step failed") });
    }

    #[test]
    fn test_free_functions_match_methods() {
        let w = tell("a");
        let w = flat_map(w, |()| Writer::new(2, vec!["b"]));
        let w = map(w, |x| x + 1);

        assert_eq!(*value(&w), 3);
        assert_eq!(log(&w), ["a", "b"]);
        assert_eq!(fold(w.clone(), |x| x * 2), 6);

        let mut seen = Vec::new();
        let out = fold_with_log(w, |x| x, |entries| seen.extend_from_slice(entries));
        assert_eq!(out, 3);
        assert_eq!(seen, vec!["a", "b"]);

        assert_eq!(of::<_, &str>(1), Writer::of(1));
    }

    #[test]
    fn test_functor_identity() {
        let w = Writer::new(5, vec!["x"]);
        assert_eq!(w.clone().map(|v| v), w);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn step(tag: &'static str) -> impl Fn(i32) -> Writer<i32, String> {
        move |x| Writer::new(x.wrapping_add(1), vec![format!("{}:{}", tag, x)])
    }

    proptest! {
        #[test]
        fn prop_left_identity(x: i32) {
            let f = step("f");
            prop_assert_eq!(Writer::of(x).flat_map(&f), f(x));
        }

        #[test]
        fn prop_right_identity(x: i32, log in prop::collection::vec(".{0,4}", 0..5)) {
            let w = Writer::new(x, log);
            prop_assert_eq!(w.clone().flat_map(Writer::of), w);
        }

        #[test]
        fn prop_associativity(x: i32, log in prop::collection::vec(".{0,4}", 0..5)) {
            let f = step("f");
            let g = step("g");
            let w = Writer::new(x, log);

            prop_assert_eq!(
                w.clone().flat_map(&f).flat_map(&g),
                w.flat_map(|v| f(v).flat_map(&g))
            );
        }

        #[test]
        fn prop_map_preserves_log(x: i32, log in prop::collection::vec(any::<u8>(), 0..8)) {
            let w = Writer::new(x, log.clone()).map(|v| v.wrapping_mul(2));
            prop_assert_eq!(w.log(), log.as_slice());
        }

        #[test]
        fn prop_log_length_is_additive(
            a in prop::collection::vec(any::<u8>(), 0..8),
            b in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let expected = a.len() + b.len();
            let w = Writer::new((), a).then(Writer::new((), b));
            prop_assert_eq!(w.log().len(), expected);
        }
    }
}
