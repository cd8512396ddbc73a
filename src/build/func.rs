//! Producers behind the constructor functions.

use crate::{Maybe, Producer, SeqError};

/// Yields one value, then stops.
pub struct Once<T>(Maybe<T>);

impl<T> Once<T> {
    pub(crate) fn new(value: T) -> Self {
        Once(Maybe::Some(value))
    }
}

impl<T> Producer for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok(std::mem::take(&mut self.0))
    }
}

/// Calls a closure for its single value on the first pull.
pub struct OnceWith<F>(Option<F>);

impl<F> OnceWith<F> {
    pub(crate) fn new(f: F) -> Self {
        OnceWith(Some(f))
    }
}

impl<T, F> Producer for OnceWith<F>
where
    F: FnOnce() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok(self.0.take().map(|f| f()).into())
    }
}

/// Yields clones of one value forever.
pub struct Repeat<T>(T);

impl<T> Repeat<T> {
    pub(crate) fn new(value: T) -> Self {
        Repeat(value)
    }
}

impl<T: Clone> Producer for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok(Maybe::Some(self.0.clone()))
    }
}

/// Yields the result of a closure forever.
pub struct RepeatWith<F>(F);

impl<F> RepeatWith<F> {
    pub(crate) fn new(f: F) -> Self {
        RepeatWith(f)
    }
}

impl<T, F> Producer for RepeatWith<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok(Maybe::Some((self.0)()))
    }
}

/// Each element is computed from the one before it.
pub struct Successors<T, F> {
    next: Maybe<T>,
    succ: F,
}

impl<T, F> Successors<T, F> {
    pub(crate) fn new(first: Maybe<T>, succ: F) -> Self {
        Successors { next: first, succ }
    }
}

impl<T, F> Producer for Successors<T, F>
where
    F: FnMut(&T) -> Maybe<T>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        let Maybe::Some(item) = std::mem::take(&mut self.next) else {
            return Ok(Maybe::None);
        };
        self.next = (self.succ)(&item);
        Ok(Maybe::Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_yields_then_stops() {
        let mut once = Once::new('a');
        assert_eq!(once.pull(), Ok(Maybe::Some('a')));
        assert_eq!(once.pull(), Ok(Maybe::None));
        assert_eq!(once.pull(), Ok(Maybe::None));
    }

    #[test]
    fn test_once_with_calls_closure_once() {
        let mut calls = 0;
        let mut once = OnceWith::new(|| {
            calls += 1;
            calls
        });
        assert_eq!(once.pull(), Ok(Maybe::Some(1)));
        assert_eq!(once.pull(), Ok(Maybe::None));
    }

    #[test]
    fn test_successors_stops_at_none() {
        let mut halves = Successors::new(Maybe::Some(20), |n: &i32| {
            if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
        });
        let mut seen = Vec::new();
        while let Ok(Maybe::Some(n)) = halves.pull() {
            seen.push(n);
        }
        assert_eq!(seen, vec![20, 10, 5]);
    }
}
