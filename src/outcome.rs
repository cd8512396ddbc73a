//! A success or failure value.
//!
//! [`Outcome<T, E>`] is returned by the bounded operations of a
//! [`Seq`](crate::Seq) (`advance_by`, `next_chunk`) and bridges to
//! [`Maybe`] through [`ok`](Outcome::ok), [`err`](Outcome::err) and
//! [`transpose`](Outcome::transpose). It is immutable once constructed.
//!
//! ```rust
//! use pullseq::Outcome;
//!
//! let ok: Outcome<i32, &str> = Outcome::Ok(5);
//! let err: Outcome<i32, &str> = Outcome::Err("e");
//!
//! assert_eq!(ok.map(|x| x + 1).unwrap_or(0), 6);
//! assert_eq!(err.map(|x| x + 1).unwrap_or(0), 0);
//! ```

use std::fmt;

use either::Either;

use crate::{Maybe, Seq};

/// Either `Ok(T)` or `Err(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// Success value
    Ok(T),
    /// Failure value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns `true` if the outcome is `Ok` and the value satisfies `f`.
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Outcome::Ok(x) => f(x),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is `Err` and the error satisfies `f`.
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(e) => f(e),
        }
    }

    /// Converts to `Maybe<T>`, discarding the error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(x) => Maybe::Some(x),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Converts to `Maybe<E>`, discarding the success value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(e) => Maybe::Some(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the success value, leaving an `Err` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(f(x)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the error value, leaving an `Ok` untouched.
    #[inline]
    pub fn map_err<F2, O>(self, op: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(e) => Outcome::Err(op(e)),
        }
    }

    /// Applies `f` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(x) => f(x),
            Outcome::Err(_) => default,
        }
    }

    /// Applies `f` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(x) => f(x),
            Outcome::Err(e) => default(e),
        }
    }

    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(ref x) = self {
            f(x);
        }
        self
    }

    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(ref e) = self {
            f(e);
        }
        self
    }

    /// Returns `res` if `self` is `Ok`, otherwise the error of `self`.
    #[inline]
    pub fn and<U>(self, res: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => res,
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Calls `op` with the success value, short-circuiting on `Err`.
    ///
    /// ```rust
    /// use pullseq::Outcome;
    ///
    /// let parse = |s: &str| match s.parse::<i32>() {
    ///     Ok(n) => Outcome::Ok(n),
    ///     Err(_) => Outcome::Err("not a number"),
    /// };
    /// assert_eq!(Outcome::Ok("12").and_then(parse), Outcome::Ok(12));
    /// assert_eq!(Outcome::Ok("x").and_then(parse), Outcome::Err("not a number"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(x) => op(x),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `res`.
    #[inline]
    pub fn or<F2>(self, res: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(_) => res,
        }
    }

    /// Calls `op` with the error, short-circuiting on `Ok`.
    #[inline]
    pub fn or_else<F2, O>(self, op: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(e) => op(e),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(e) => op(e),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(_) => T::default(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the error if the outcome is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(e) => panic!("{msg}: {e:?}"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`.
    ///
    /// ```should_panic
    /// use pullseq::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::Err("emergency failure");
    /// x.unwrap(); // panics with `emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(e) => panic!("called `Outcome::unwrap()` on an `Err` value: {e:?}"),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the success value if the outcome is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(x) => panic!("{msg}: {x:?}"),
            Outcome::Err(e) => e,
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(x) => panic!("called `Outcome::unwrap_err()` on an `Ok` value: {x:?}"),
            Outcome::Err(e) => e,
        }
    }

    /// Returns `true` if the outcome is `Ok` and structurally equal to `x`.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Outcome::Ok(v) if x == v)
    }

    /// Returns `true` if the outcome is `Err` and structurally equal to `e`.
    #[inline]
    pub fn contains_err<F2>(&self, e: &F2) -> bool
    where
        F2: PartialEq<E>,
    {
        matches!(self, Outcome::Err(v) if e == v)
    }

    /// A sequence over the success value, empty for `Err`.
    pub fn iter(&self) -> Seq<T>
    where
        T: Clone + 'static,
    {
        Seq::from_iter(self.as_ref().ok().cloned())
    }

    /// Converts into a std [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(x) => Ok(x),
            Outcome::Err(e) => Err(e),
        }
    }

    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Outcome::Ok(x) => Either::Right(x),
            Outcome::Err(e) => Either::Left(e),
        }
    }
}

impl<T, E> Outcome<&T, &E> {
    /// Clones both payloads.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E>
    where
        T: Clone,
        E: Clone,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x.clone()),
            Outcome::Err(e) => Outcome::Err(e.clone()),
        }
    }

    /// Copies both payloads.
    #[inline]
    pub fn copied(self) -> Outcome<T, E>
    where
        T: Copy,
        E: Copy,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(*x),
            Outcome::Err(e) => Outcome::Err(*e),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Ok(inner) => inner,
            Outcome::Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Transposes an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// `Ok(None)` maps to `None`.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Outcome};
    ///
    /// let x: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::None);
    /// assert_eq!(x.transpose(), Maybe::None);
    /// ```
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Outcome::Ok(Maybe::Some(x)) => Maybe::Some(Outcome::Ok(x)),
            Outcome::Ok(Maybe::None) => Maybe::None,
            Outcome::Err(e) => Maybe::Some(Outcome::Err(e)),
        }
    }
}

impl<T> Outcome<T, T> {
    /// Returns the payload of whichever variant is active.
    ///
    /// Only available when both variants carry the same type.
    ///
    /// ```rust
    /// use pullseq::Outcome;
    ///
    /// let x: Outcome<u32, u32> = Outcome::Err(3);
    /// assert_eq!(x.into_ok_or_err(), 3);
    /// ```
    #[inline]
    pub fn into_ok_or_err(self) -> T {
        match self {
            Outcome::Ok(x) | Outcome::Err(x) => x,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(x) => Outcome::Ok(x),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}

impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    fn from(value: Either<E, T>) -> Self {
        match value {
            Either::Right(x) => Outcome::Ok(x),
            Either::Left(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_skips_err() {
        let ok: Outcome<i32, &str> = Outcome::Ok(5);
        let err: Outcome<i32, &str> = Outcome::Err("e");

        assert_eq!(ok.map(|x| x + 1).unwrap_or(0), 6);
        assert_eq!(err.map(|x| x + 1).unwrap_or(0), 0);
        assert_eq!(err.map_err(str::len), Outcome::Err(1));
        assert_eq!(ok.map_err(str::len), Outcome::Ok(5));
    }

    #[test]
    fn test_and_or_short_circuit() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("bad");

        assert_eq!(ok.and(Outcome::<&str, &str>::Ok("next")), Outcome::Ok("next"));
        assert_eq!(err.and(Outcome::<&str, &str>::Ok("next")), Outcome::Err("bad"));
        assert_eq!(err.or(Outcome::<i32, u8>::Ok(2)), Outcome::Ok(2));
        assert_eq!(ok.or(Outcome::<i32, u8>::Err(0)), Outcome::Ok(1));
        assert_eq!(err.or_else(|e| Outcome::<i32, usize>::Err(e.len())), Outcome::Err(3));
        assert_eq!(ok.and_then(|x| Outcome::<i32, &str>::Ok(x * 10)), Outcome::Ok(10));
    }

    #[test]
    fn test_ok_err_bridges() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("bad");

        assert_eq!(ok.ok(), Maybe::Some(1));
        assert_eq!(ok.err(), Maybe::None);
        assert_eq!(err.ok(), Maybe::None);
        assert_eq!(err.err(), Maybe::Some("bad"));
    }

    #[test]
    fn test_transpose_treats_absent_as_none() {
        let some: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::Some(2));
        let none: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::None);
        let err: Outcome<Maybe<i32>, &str> = Outcome::Err("bad");

        assert_eq!(some.transpose(), Maybe::Some(Outcome::Ok(2)));
        assert_eq!(none.transpose(), Maybe::None);
        assert_eq!(err.transpose(), Maybe::Some(Outcome::Err("bad")));
    }

    #[test]
    fn test_flatten_and_into_ok_or_err() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
        assert_eq!(nested.flatten(), Outcome::Err("inner"));

        let same: Outcome<&str, &str> = Outcome::Ok("either way");
        assert_eq!(same.into_ok_or_err(), "either way");
    }

    #[test]
    fn test_contains() {
        let ok: Outcome<Vec<i32>, String> = Outcome::Ok(vec![1]);
        let err: Outcome<Vec<i32>, String> = Outcome::Err("x".to_string());

        assert!(ok.contains(&vec![1]));
        assert!(!ok.contains_err(&"x".to_string()));
        assert!(err.contains_err(&"x".to_string()));
        assert!(!err.contains(&vec![1]));
    }

    #[test]
    fn test_inspect_and_inspect_err() {
        let mut log = Vec::new();
        let _ = Outcome::<i32, i32>::Ok(1).inspect(|x| log.push(*x)).inspect_err(|e| log.push(-e));
        let _ = Outcome::<i32, i32>::Err(2).inspect(|x| log.push(*x)).inspect_err(|e| log.push(-e));
        assert_eq!(log, vec![1, -2]);
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"boom\"")]
    fn test_unwrap_names_expected_variant() {
        Outcome::<i32, &str>::Err("boom").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 4")]
    fn test_unwrap_err_names_expected_variant() {
        Outcome::<i32, &str>::Ok(4).unwrap_err();
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Outcome::from(Ok::<i32, ()>(1)), Outcome::Ok(1));
        assert_eq!(Result::from(Outcome::<i32, ()>::Err(())), Err(()));
        assert_eq!(Outcome::<i32, &str>::Ok(1).into_either(), Either::Right(1));
        assert_eq!(Outcome::from(Either::<&str, i32>::Left("l")), Outcome::Err("l"));
        assert_eq!(Outcome::<i32, &str>::Ok(3).iter().collect::<Vec<_>>(), Ok(vec![3]));
        assert_eq!(Outcome::<i32, &str>::Err("e").as_ref().cloned(), Outcome::Err("e"));
    }
}
