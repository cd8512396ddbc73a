//! An optional value, either present or absent.
//!
//! [`Maybe<T>`] is the answer to "is there a next element" for every pull on a
//! [`Seq`]. It is an immutable value: every operation consumes or borrows it
//! and produces a fresh value. The mutable counterpart, with `take`/`replace`
//! style operations, is [`Slot`](crate::Slot).
//!
//! # Examples
//!
//! ```rust
//! use pullseq::Maybe;
//!
//! let doubled = Maybe::Some(5).and_then(|x| if x > 0 { Maybe::Some(x * 2) } else { Maybe::None });
//! assert_eq!(doubled.unwrap(), 10);
//!
//! let none: Maybe<i32> = Maybe::None;
//! assert_eq!(none.and_then(|x| Maybe::Some(x * 2)), Maybe::None);
//! ```

use crate::{Outcome, Seq};

/// Either `Some(T)` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value
    None,
    /// Some value of type `T`
    Some(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    /// Returns `true` if the value is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert!(Maybe::Some(2).is_some());
    /// assert!(!Maybe::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if the value is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Returns `true` if the value is `Some` and the payload satisfies `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert!(Maybe::Some(2).is_some_and(|x| x > 1));
    /// assert!(!Maybe::Some(0).is_some_and(|x| x > 1));
    /// assert!(!Maybe::<i32>::None.is_some_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Maybe::Some(x) => f(x),
            Maybe::None => false,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => Maybe::None,
        }
    }

    /// Returns the contained `Some` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `None`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use pullseq::Maybe;
    ///
    /// let x: Maybe<&str> = Maybe::None;
    /// x.expect("fruits are healthy"); // panics with `fruits are healthy`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => panic!("{}", msg),
        }
    }

    /// Returns the contained `Some` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert_eq!(Maybe::Some("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use pullseq::Maybe;
    ///
    /// let x: Maybe<&str> = Maybe::None;
    /// x.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Returns the contained `Some` value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => default,
        }
    }

    /// Returns the contained `Some` value or computes it from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => f(),
        }
    }

    /// Returns the contained `Some` value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Some(x) => x,
            Maybe::None => T::default(),
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to a contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// let len = Maybe::Some("Hello, World!").map(|s| s.len());
    /// assert_eq!(len, Maybe::Some(13));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(x) => Maybe::Some(f(x)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies `f` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(x) => f(x),
            Maybe::None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a fallback with `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(x) => f(x),
            Maybe::None => default(),
        }
    }

    /// Calls `f` with a reference to the contained value, if any, and
    /// returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(ref x) = self {
            f(x);
        }
        self
    }

    /// Returns `None` if the value is `None` or `predicate` rejects the
    /// payload, otherwise returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Maybe::None.filter(is_even), Maybe::None);
    /// assert_eq!(Maybe::Some(3).filter(is_even), Maybe::None);
    /// assert_eq!(Maybe::Some(4).filter(is_even), Maybe::Some(4));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(x) if predicate(&x) => Maybe::Some(x),
            _ => Maybe::None,
        }
    }

    /// Returns `None` if `self` is `None`, otherwise returns `other`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    /// Returns `None` if `self` is `None`, otherwise calls `f` with the
    /// payload and returns its result.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(x) => f(x),
            Maybe::None => Maybe::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise returns `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(x) => Maybe::Some(x),
            Maybe::None => f(),
        }
    }

    /// Returns the single present side when exactly one of `self` and
    /// `other` is `Some`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).xor(Maybe::None), Maybe::Some(2));
    /// assert_eq!(Maybe::None.xor(Maybe::Some(2)), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(2).xor(Maybe::Some(2)), Maybe::None);
    /// assert_eq!(Maybe::<u32>::None.xor(Maybe::None), Maybe::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Maybe::Some(a), Maybe::None) => Maybe::Some(a),
            (Maybe::None, Maybe::Some(b)) => Maybe::Some(b),
            _ => Maybe::None,
        }
    }

    /// Zips `self` with another `Maybe`, yielding `None` if either is absent.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Zips `self` and `other` with `f`, yielding `None` if either is absent.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(f(a, b)),
            _ => Maybe::None,
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(x) => Outcome::Ok(x),
            Maybe::None => Outcome::Err(err),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err())`.
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(x) => Outcome::Ok(x),
            Maybe::None => Outcome::Err(err()),
        }
    }

    /// Returns `true` if the value is `Some` and structurally equal to `x`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert!(Maybe::Some(vec![1, 2]).contains(&vec![1, 2]));
    /// assert!(!Maybe::<Vec<i32>>::None.contains(&vec![1, 2]));
    /// ```
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Maybe::Some(v) if x == v)
    }

    /// A sequence over the contained value, empty for `None`.
    ///
    /// The payload is cloned so `self` stays usable.
    pub fn iter(&self) -> Seq<T>
    where
        T: Clone + 'static,
    {
        Seq::from_iter(self.clone())
    }

    /// Converts into a std [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(x) => Some(x),
            Maybe::None => None,
        }
    }
}

impl<T> Maybe<&T> {
    /// Maps a `Maybe<&T>` to a `Maybe<T>` by cloning the payload.
    #[inline]
    pub fn cloned(self) -> Maybe<T>
    where
        T: Clone,
    {
        self.map(T::clone)
    }

    /// Maps a `Maybe<&T>` to a `Maybe<T>` by copying the payload.
    #[inline]
    pub fn copied(self) -> Maybe<T>
    where
        T: Copy,
    {
        self.map(|x| *x)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(6)).flatten(), Maybe::Some(6));
    /// assert_eq!(Maybe::Some(Maybe::<u32>::None).flatten(), Maybe::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}

impl<A, B> Maybe<(A, B)> {
    /// Splits a `Maybe` of a pair into a pair of `Maybe`s.
    #[inline]
    pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
        match self {
            Maybe::Some((a, b)) => (Maybe::Some(a), Maybe::Some(b)),
            Maybe::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Transposes a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// `None` maps to `Ok(None)`, `Some(Ok(v))` to `Ok(Some(v))` and
    /// `Some(Err(e))` to `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::{Maybe, Outcome};
    ///
    /// let x: Maybe<Outcome<i32, &str>> = Maybe::Some(Outcome::Ok(5));
    /// assert_eq!(x.transpose(), Outcome::Ok(Maybe::Some(5)));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Maybe::Some(Outcome::Ok(x)) => Outcome::Ok(Maybe::Some(x)),
            Maybe::Some(Outcome::Err(e)) => Outcome::Err(e),
            Maybe::None => Outcome::Ok(Maybe::None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Maybe::Some(x),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_some_and_is_none() {
        let s: Maybe<i32> = Maybe::Some(1);
        let n: Maybe<i32> = Maybe::None;

        assert!(s.is_some());
        assert!(!s.is_none());
        assert!(n.is_none());
        assert!(!n.is_some());
    }

    #[test]
    fn test_and_then_short_circuits_on_none() {
        let halve = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None };

        assert_eq!(Maybe::Some(8).and_then(halve).and_then(halve), Maybe::Some(2));
        assert_eq!(Maybe::Some(6).and_then(halve).and_then(halve), Maybe::None);
        assert_eq!(Maybe::None.and_then(halve), Maybe::None);
    }

    #[test]
    fn test_and_or_xor_tables() {
        let some: Maybe<i32> = Maybe::Some(1);
        let other: Maybe<i32> = Maybe::Some(2);
        let none: Maybe<i32> = Maybe::None;

        assert_eq!(some.and(other), Maybe::Some(2));
        assert_eq!(none.and(other), Maybe::None);
        assert_eq!(some.or(other), Maybe::Some(1));
        assert_eq!(none.or(other), Maybe::Some(2));
        assert_eq!(none.or_else(|| Maybe::Some(9)), Maybe::Some(9));
        assert_eq!(some.xor(other), Maybe::None);
        assert_eq!(none.xor(other), Maybe::Some(2));
        assert_eq!(none.xor(none), Maybe::None);
    }

    #[test]
    fn test_zip_and_unzip() {
        let zipped = Maybe::Some(1).zip(Maybe::Some("a"));
        assert_eq!(zipped, Maybe::Some((1, "a")));
        assert_eq!(zipped.unzip(), (Maybe::Some(1), Maybe::Some("a")));

        assert_eq!(Maybe::Some(1).zip(Maybe::<&str>::None), Maybe::None);
        assert_eq!(
            Maybe::<(i32, &str)>::None.unzip(),
            (Maybe::None, Maybe::None)
        );
        assert_eq!(Maybe::Some(2).zip_with(Maybe::Some(3), |a, b| a * b), Maybe::Some(6));
    }

    #[test]
    fn test_map_family() {
        assert_eq!(Maybe::Some(2).map(|x| x + 1), Maybe::Some(3));
        assert_eq!(Maybe::Some(2).map_or(0, |x| x * 10), 20);
        assert_eq!(Maybe::<i32>::None.map_or(0, |x| x * 10), 0);
        assert_eq!(Maybe::<i32>::None.map_or_else(|| -1, |x| x), -1);
    }

    #[test]
    fn test_inspect_sees_only_some() {
        let mut seen = Vec::new();
        let _ = Maybe::Some(4).inspect(|x| seen.push(*x));
        let _ = Maybe::<i32>::None.inspect(|x| seen.push(*x));
        assert_eq!(seen, vec![4]);
    }

    #[test]
    fn test_unwrap_fallbacks() {
        assert_eq!(Maybe::Some(3).unwrap_or(0), 3);
        assert_eq!(Maybe::<i32>::None.unwrap_or(0), 0);
        assert_eq!(Maybe::<i32>::None.unwrap_or_else(|| 7), 7);
        assert_eq!(Maybe::<String>::None.unwrap_or_default(), String::new());
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn test_unwrap_panics_on_none() {
        Maybe::<i32>::None.unwrap();
    }

    #[test]
    #[should_panic(expected = "value was missing")]
    fn test_expect_panics_with_message() {
        Maybe::<i32>::None.expect("value was missing");
    }

    #[test]
    fn test_ok_or_and_transpose() {
        assert_eq!(Maybe::Some(1).ok_or("none"), Outcome::Ok(1));
        assert_eq!(Maybe::<i32>::None.ok_or_else(|| "none"), Outcome::Err("none"));

        let err: Maybe<Outcome<i32, &str>> = Maybe::Some(Outcome::Err("bad"));
        assert_eq!(err.transpose(), Outcome::Err("bad"));
        let none: Maybe<Outcome<i32, &str>> = Maybe::None;
        assert_eq!(none.transpose(), Outcome::Ok(Maybe::None));
    }

    #[test]
    fn test_cloned_produces_independent_payload() {
        let original = Maybe::Some(vec![1, 2, 3]);
        let mut copy = original.as_ref().cloned();
        if let Maybe::Some(ref mut v) = copy {
            v.push(4);
        }
        assert_eq!(original, Maybe::Some(vec![1, 2, 3]));
        assert_eq!(copy, Maybe::Some(vec![1, 2, 3, 4]));
        assert_eq!(Maybe::Some(&5).copied(), Maybe::Some(5));
    }

    #[test]
    fn test_iter_yields_payload_once() {
        let value = Maybe::Some(5);
        assert_eq!(value.iter().collect::<Vec<_>>(), Ok(vec![5]));
        assert_eq!(Maybe::<i32>::None.iter().count(), Ok(0));
        assert!(value.is_some());
    }

    #[test]
    fn test_std_option_round_trip() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Some(1));
        assert_eq!(Option::<i32>::from(Maybe::None), None);
        assert_eq!(Maybe::Some(2).into_iter().collect::<Vec<_>>(), vec![2]);
    }
}
