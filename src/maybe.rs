//! An optional value that short-circuits composition when absent.
//!
//! # Maybe vs Option
//!
//! `Maybe<T>` carries the same information as `std::option::Option<T>`, but
//! its surface is the small, law-abiding vocabulary shared with
//! [`Writer`](crate::Writer): `map`, `flat_map`, `filter`, `fold` and friends.
//! Conversions in both directions are free (`From`/`Into`), so a `Maybe` can
//! be dropped into code that speaks `Option` at any point.
//!
//! Absence is its own variant. There is no sentinel payload, so `Some(())`
//! and `Some(None::<i32>)` are ordinary present values.
//!
//! # Short-Circuiting
//!
//! Every transformation skips its closure on `None`. A chain of `map`,
//! `flat_map` and `filter` calls stops doing work the moment a step yields
//! `None`, and the `None` flows through to the end.
//!
//! # Two Encodings
//!
//! Every core operation exists as a method and as a free function in this
//! module, so both of these read the same:
//!
//! ```rust
//! use tidepool::maybe::{self, Maybe};
//!
//! let chained = Maybe::some(4).map(|x| x * 10).filter(|x| *x > 5);
//! let free = maybe::filter(maybe::map(maybe::some(4), |x| x * 10), |x| *x > 5);
//! assert_eq!(chained, free);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tidepool::Maybe;
//!
//! fn parse_port(raw: &str) -> Maybe<u16> {
//!     Maybe::from_option(raw.parse().ok())
//! }
//!
//! let port = parse_port("8080")
//!     .filter(|p| *p >= 1024)
//!     .fold(|| "privileged or invalid".to_string(), |p| format!("port {}", p));
//! assert_eq!(port, "port 8080");
//!
//! let port = parse_port("eighty").map(|p| p + 1);
//! assert!(port.is_none());
//! ```

/// A value that is either present (`Some(T)`) or absent (`None`).
///
/// Construct with [`Maybe::some`] / [`Maybe::none`] or the variants directly.
/// All combinators take `self` by value and return a new `Maybe`; nothing
/// is mutated in place.
///
/// # Example
///
/// ```rust
/// use tidepool::Maybe;
///
/// let present: Maybe<i32> = Maybe::some(10);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.map(|x| x * 2).get_or(0), 20);
/// assert_eq!(absent.map(|x| x * 2).get_or(0), 0);
///
/// match present {
///     Maybe::Some(n) => println!("got {}", n),
///     Maybe::None => println!("nothing"),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value
    None,
    /// A present value
    Some(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Wrap a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// let m = Maybe::some(42);
    /// assert!(m.is_some());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The absent value. `T` is fixed by inference or turbofish only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// let m = Maybe::<String>::none();
    /// assert!(m.is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    // ========== Predicates ==========

    /// Returns `true` if this is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// assert!(!Maybe::some(42).is_none());
    /// ```
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Returns `true` if a value is present. Always the complement of
    /// [`is_none`](Maybe::is_none).
    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    // ========== References ==========

    /// Convert `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// let name = Maybe::some("tide".to_string());
    /// let len = name.as_ref().map(|s| s.len());
    /// assert_eq!(len, Maybe::some(4));
    /// assert_eq!(name, Maybe::some("tide".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Convert `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    // ========== Transformations ==========

    /// Transform the present value. `f` is not called on `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(f(v)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself be absent (monadic bind).
    ///
    /// On `Some(v)` the result is exactly `f(v)`, with no extra wrapping. On
    /// `None`, `f` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(20).flat_map(half), Maybe::some(10));
    /// assert_eq!(Maybe::some(20).flat_map(half).flat_map(half), Maybe::some(5));
    /// assert_eq!(Maybe::some(5).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Alias for [`flat_map`](Maybe::flat_map), matching `Option::and_then`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(f)
    }

    /// Keep the value only if `predicate` holds.
    ///
    /// A passing value is returned as-is. `predicate` is not called on `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(10).filter(|x| *x > 5), Maybe::some(10));
    /// assert_eq!(Maybe::some(10).filter(|x| *x < 5), Maybe::none());
    /// assert_eq!(Maybe::<i32>::none().filter(|x| *x > 5), Maybe::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Maybe::Some(v) = self {
            if predicate(&v) {
                return Maybe::Some(v);
            }
        }
        Maybe::None
    }

    /// Run `f` on the present value for its side effect, then hand `self` back.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(v) = &self {
            f(v);
        }
        self
    }

    /// Pair two present values. `None` if either side is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    /// assert_eq!(Maybe::some(1).zip(Maybe::<&str>::none()), Maybe::none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    // ========== Fallbacks ==========

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => other,
        }
    }

    /// Return `self` if present, otherwise the result of `f`.
    ///
    /// `f` only runs on `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// let cached: Maybe<&str> = Maybe::none();
    /// assert_eq!(cached.or_else(|| Maybe::some("fresh")), Maybe::some("fresh"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => f(),
        }
    }

    // ========== Extractors ==========

    /// Return the value, or `default` when absent. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(10).get_or(0), 10);
    /// assert_eq!(Maybe::none().get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => default,
        }
    }

    /// Return the value, or compute a default when absent.
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => f(),
        }
    }

    /// Return the value, or `T::default()` when absent.
    #[inline]
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else(T::default)
    }

    /// Collapse both cases into one value.
    ///
    /// Exactly one of the two closures runs: `if_none` on `None`, `on_some`
    /// with the payload otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// let none: Maybe<i32> = Maybe::none();
    /// assert_eq!(none.fold(|| "default".to_string(), |x| x.to_string()), "default");
    ///
    /// assert_eq!(Maybe::some(10).fold(|| 0, |x| x * 2), 20);
    /// ```
    #[inline]
    pub fn fold<U, N, S>(self, if_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => on_some(v),
            Maybe::None => if_none(),
        }
    }

    /// Extract the value, panicking if absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Extract the value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the value is `None`.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => panic!("{}", msg),
        }
    }

    // ========== Conversions ==========

    /// Convert to `std::option::Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    /// Create from `std::option::Option`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }

    /// Turn absence into the given error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Some(v) => Ok(v),
            Maybe::None => Err(err),
        }
    }

    /// Turn absence into an error computed by `f`. `f` only runs on `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(v) => Ok(v),
            Maybe::None => Err(f()),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the present value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }

    /// Iterate mutably over the present value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.as_mut().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T, E> Maybe<Result<T, E>> {
    /// Swap `Maybe<Result<T, E>>` into `Result<Maybe<T>, E>`.
    ///
    /// Lets a fallible step inside a `Maybe` chain surface its error through `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidepool::Maybe;
    ///
    /// fn parse(raw: Maybe<&str>) -> Result<Maybe<i32>, std::num::ParseIntError> {
    ///     raw.map(|s| s.parse::<i32>()).transpose()
    /// }
    ///
    /// assert_eq!(parse(Maybe::some("7")), Ok(Maybe::some(7)));
    /// assert_eq!(parse(Maybe::none()), Ok(Maybe::none()));
    /// assert!(parse(Maybe::some("x")).is_err());
    /// ```
    #[inline]
    pub fn transpose(self) -> Result<Maybe<T>, E> {
        match self {
            Maybe::Some(Ok(v)) => Ok(Maybe::Some(v)),
            Maybe::Some(Err(e)) => Err(e),
            Maybe::None => Ok(Maybe::None),
        }
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

/// Collects to `Some` only if every item is `Some`; stops at the first `None`.
impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// ========== Free Functions ==========

/// Wrap a present value. Same as [`Maybe::some`].
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// The absent value. Same as [`Maybe::none`].
#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::none()
}

/// Free-function form of [`Maybe::is_some`].
#[inline]
pub fn is_some<T>(m: &Maybe<T>) -> bool {
    m.is_some()
}

/// Free-function form of [`Maybe::is_none`].
#[inline]
pub fn is_none<T>(m: &Maybe<T>) -> bool {
    m.is_none()
}

/// Free-function form of [`Maybe::map`].
#[inline]
pub fn map<T, U, F>(m: Maybe<T>, f: F) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    m.map(f)
}

/// Free-function form of [`Maybe::flat_map`].
#[inline]
pub fn flat_map<T, U, F>(m: Maybe<T>, f: F) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    m.flat_map(f)
}

/// Free-function form of [`Maybe::get_or`].
#[inline]
pub fn get_or<T>(m: Maybe<T>, default: T) -> T {
    m.get_or(default)
}

/// Free-function form of [`Maybe::filter`].
#[inline]
pub fn filter<T, P>(m: Maybe<T>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    m.filter(predicate)
}

/// Free-function form of [`Maybe::fold`].
#[inline]
pub fn fold<T, U, N, S>(m: Maybe<T>, if_none: N, on_some: S) -> U
where
    N: FnOnce() -> U,
    S: FnOnce(T) -> U,
{
    m.fold(if_none, on_some)
}

// ========== Collection Utilities ==========

/// Extract the payloads of all `Some` items, in order.
///
/// # Example
///
/// ```rust
/// use tidepool::maybe::{somes, Maybe};
///
/// let items = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)];
/// assert_eq!(somes(items).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn somes<T, I>(iter: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    iter.into_iter().flatten()
}
