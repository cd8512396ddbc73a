//! Element-wise transformations.
//!
//! Each combinator here pulls at most one parent element per yielded element,
//! except [`Filter`] and [`FilterMap`], which pull until something passes.

use crate::{Maybe, Producer, Seq, SeqError};

/// Transforms every element.
pub struct Map<T, F> {
    seq: Seq<T>,
    f: F,
}

impl<T, U, F> Producer for Map<T, F>
where
    T: 'static,
    F: FnMut(T) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Result<Maybe<U>, SeqError> {
        Ok(self.seq.pull()?.map(&mut self.f))
    }
}

/// Keeps the elements a predicate accepts.
pub struct Filter<T, P> {
    seq: Seq<T>,
    predicate: P,
}

impl<T, P> Producer for Filter<T, P>
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        while let Maybe::Some(item) = self.seq.pull()? {
            if (self.predicate)(&item) {
                return Ok(Maybe::Some(item));
            }
        }
        Ok(Maybe::None)
    }
}

/// Transforms elements and drops those mapped to `None`.
pub struct FilterMap<T, F> {
    seq: Seq<T>,
    f: F,
}

impl<T, U, F> Producer for FilterMap<T, F>
where
    T: 'static,
    F: FnMut(T) -> Maybe<U>,
{
    type Item = U;

    fn pull(&mut self) -> Result<Maybe<U>, SeqError> {
        while let Maybe::Some(item) = self.seq.pull()? {
            if let Maybe::Some(mapped) = (self.f)(item) {
                return Ok(Maybe::Some(mapped));
            }
        }
        Ok(Maybe::None)
    }
}

/// Calls a closure on every element as it passes through.
pub struct Inspect<T, F> {
    seq: Seq<T>,
    f: F,
}

impl<T, F> Producer for Inspect<T, F>
where
    T: 'static,
    F: FnMut(&T),
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok(self.seq.pull()?.inspect(&mut self.f))
    }
}

/// Pairs every element with its zero-based position.
pub struct Enumerate<T> {
    seq: Seq<T>,
    count: usize,
}

impl<T: 'static> Producer for Enumerate<T> {
    type Item = (usize, T);

    fn pull(&mut self) -> Result<Maybe<(usize, T)>, SeqError> {
        match self.seq.pull()? {
            Maybe::Some(item) => {
                let index = self.count;
                self.count += 1;
                Ok(Maybe::Some((index, item)))
            }
            Maybe::None => Ok(Maybe::None),
        }
    }
}

/// Transforms elements until the closure first returns `None`.
pub struct MapWhile<T, F> {
    seq: Seq<T>,
    f: F,
    done: bool,
}

impl<T, U, F> Producer for MapWhile<T, F>
where
    T: 'static,
    F: FnMut(T) -> Maybe<U>,
{
    type Item = U;

    fn pull(&mut self) -> Result<Maybe<U>, SeqError> {
        if self.done {
            return Ok(Maybe::None);
        }
        let mapped = self.seq.pull()?.and_then(&mut self.f);
        self.done = mapped.is_none();
        Ok(mapped)
    }
}

/// Threads mutable state through a mapping.
///
/// Stops for good the first time the step function returns `None`; the
/// parent is not pulled again.
pub struct Scan<T, S, F> {
    seq: Seq<T>,
    state: S,
    f: F,
    done: bool,
}

impl<T, S, U, F> Producer for Scan<T, S, F>
where
    T: 'static,
    F: FnMut(&mut S, T) -> Maybe<U>,
{
    type Item = U;

    fn pull(&mut self) -> Result<Maybe<U>, SeqError> {
        if self.done {
            return Ok(Maybe::None);
        }
        let scanned = match self.seq.pull()? {
            Maybe::Some(item) => (self.f)(&mut self.state, item),
            Maybe::None => Maybe::None,
        };
        self.done = scanned.is_none();
        Ok(scanned)
    }
}

impl<T: 'static> Seq<T> {
    /// Lazily transform every element.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut words = Seq::from_iter(vec!["a", "bc"]);
    /// let lengths = words.map(str::len).collect::<Vec<_>>().unwrap();
    /// assert_eq!(lengths, vec![1, 2]);
    /// ```
    pub fn map<U, F>(&mut self, f: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Seq::derived(Map {
            seq: self.release(),
            f,
        })
    }

    /// Lazily keep the elements `predicate` accepts.
    pub fn filter<P>(&mut self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq::derived(Filter {
            seq: self.release(),
            predicate,
        })
    }

    /// Lazily transform elements, dropping those mapped to `None`.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut raw = Seq::from_iter(vec!["1", "x", "3"]);
    /// let parsed = raw
    ///     .filter_map(|s| match s.parse::<i32>() {
    ///         Ok(n) => Maybe::Some(n),
    ///         Err(_) => Maybe::None,
    ///     })
    ///     .collect::<Vec<_>>()
    ///     .unwrap();
    /// assert_eq!(parsed, vec![1, 3]);
    /// ```
    pub fn filter_map<U, F>(&mut self, f: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(T) -> Maybe<U> + 'static,
    {
        Seq::derived(FilterMap {
            seq: self.release(),
            f,
        })
    }

    /// Call `f` on each element as it passes through.
    pub fn inspect<F>(&mut self, f: F) -> Seq<T>
    where
        F: FnMut(&T) + 'static,
    {
        Seq::derived(Inspect {
            seq: self.release(),
            f,
        })
    }

    /// Pair each element with its 0-based index.
    pub fn enumerate(&mut self) -> Seq<(usize, T)> {
        Seq::derived(Enumerate {
            seq: self.release(),
            count: 0,
        })
    }

    /// Transform elements until `f` first returns `None`.
    pub fn map_while<U, F>(&mut self, f: F) -> Seq<U>
    where
        U: 'static,
        F: FnMut(T) -> Maybe<U> + 'static,
    {
        Seq::derived(MapWhile {
            seq: self.release(),
            f,
            done: false,
        })
    }

    /// Fold with intermediate results.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut seq = Seq::from_iter(1..=4);
    /// let running = seq
    ///     .scan(0, |total, x| {
    ///         *total += x;
    ///         Maybe::Some(*total)
    ///     })
    ///     .collect::<Vec<_>>()
    ///     .unwrap();
    /// assert_eq!(running, vec![1, 3, 6, 10]);
    /// ```
    pub fn scan<S, U, F>(&mut self, initial: S, f: F) -> Seq<U>
    where
        S: 'static,
        U: 'static,
        F: FnMut(&mut S, T) -> Maybe<U> + 'static,
    {
        Seq::derived(Scan {
            seq: self.release(),
            state: initial,
            f,
            done: false,
        })
    }
}
