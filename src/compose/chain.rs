//! Combining two sequences, or a sequence with a separator.

use crate::{IntoSeq, Maybe, Producer, Seq, SeqError, Slot};

/// Runs the first sequence to exhaustion, then the second.
///
/// The first sequence is dropped as soon as it is exhausted.
pub struct Chain<T>(Option<Seq<T>>, Seq<T>);

impl<T: 'static> Producer for Chain<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if let Some(ref mut first) = self.0 {
            match first.pull()? {
                Maybe::Some(item) => return Ok(Maybe::Some(item)),
                Maybe::None => self.0 = None,
            }
        }
        self.1.pull()
    }
}

/// Pulls both sides in lockstep, left first.
pub struct Zip<A, B> {
    left: Seq<A>,
    right: Seq<B>,
}

impl<A: 'static, B: 'static> Producer for Zip<A, B> {
    type Item = (A, B);

    fn pull(&mut self) -> Result<Maybe<(A, B)>, SeqError> {
        let Maybe::Some(a) = self.left.pull()? else {
            return Ok(Maybe::None);
        };
        Ok(self.right.pull()?.map(|b| (a, b)))
    }
}

/// Places a separator between adjacent elements.
pub struct Intersperse<T, G> {
    seq: Seq<T>,
    separator: G,
    started: bool,
    pending: Slot<T>,
}

impl<T, G> Producer for Intersperse<T, G>
where
    T: 'static,
    G: FnMut() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if let Maybe::Some(item) = self.pending.take() {
            return Ok(Maybe::Some(item));
        }
        let Maybe::Some(item) = self.seq.pull()? else {
            return Ok(Maybe::None);
        };
        if !self.started {
            self.started = true;
            return Ok(Maybe::Some(item));
        }
        self.pending.insert(item);
        Ok(Maybe::Some((self.separator)()))
    }
}

impl<T: 'static> Seq<T> {
    /// Yield every element of `self`, then every element of `other`.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(vec![1, 2]);
    /// assert_eq!(seq.chain(vec![3]).collect::<Vec<_>>().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn chain<S>(&mut self, other: S) -> Seq<T>
    where
        S: IntoSeq<Item = T>,
    {
        Seq::derived(Chain(Some(self.release()), other.into_seq()))
    }

    /// Pair elements of `self` and `other` until either runs out.
    ///
    /// `other` is not pulled once `self` is exhausted.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(vec![1, 2, 3]);
    /// let pairs = seq.zip(vec!['a', 'b']).collect::<Vec<_>>().unwrap();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip<S>(&mut self, other: S) -> Seq<(T, S::Item)>
    where
        S: IntoSeq,
        S::Item: 'static,
    {
        Seq::derived(Zip {
            left: self.release(),
            right: other.into_seq(),
        })
    }

    /// Place a clone of `separator` between adjacent elements.
    pub fn intersperse(&mut self, separator: T) -> Seq<T>
    where
        T: Clone,
    {
        self.intersperse_with(move || separator.clone())
    }

    /// Place the result of `separator` between adjacent elements.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut words = Seq::from_iter(vec!["a", "b", "c"]);
    /// let joined = words.intersperse_with(|| "-").collect::<String>().unwrap();
    /// assert_eq!(joined, "a-b-c");
    /// ```
    pub fn intersperse_with<G>(&mut self, separator: G) -> Seq<T>
    where
        G: FnMut() -> T + 'static,
    {
        Seq::derived(Intersperse {
            seq: self.release(),
            separator,
            started: false,
            pending: Slot::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_chain_switches_to_second_after_first_exhausted() {
        let mut first = Seq::from_iter(vec![1, 2]);
        let mut chained = first.chain(Seq::from_iter(vec![3, 4]));

        assert_eq!(chained.next(), Ok(Maybe::Some(1)));
        assert_eq!(chained.next(), Ok(Maybe::Some(2)));
        assert_eq!(chained.next(), Ok(Maybe::Some(3)));
        assert_eq!(chained.next(), Ok(Maybe::Some(4)));
        assert_eq!(chained.next(), Ok(Maybe::None));
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let mut empty = Seq::from_iter(Vec::<i32>::new());
        assert_eq!(empty.chain(vec![5]).collect::<Vec<_>>(), Ok(vec![5]));

        let mut seq = Seq::from_iter(vec![5]);
        assert_eq!(seq.chain(Vec::new()).collect::<Vec<_>>(), Ok(vec![5]));
    }

    #[test]
    fn test_zip_stops_at_shorter() {
        let mut seq = Seq::from_iter(vec![1, 2]);
        assert_eq!(
            seq.zip(vec!["a", "b", "c"]).collect::<Vec<_>>(),
            Ok(vec![(1, "a"), (2, "b")])
        );
    }

    #[test]
    fn test_zip_does_not_pull_right_after_left_exhausted() {
        let right_pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&right_pulls);
        let right = Seq::from_fn(move || {
            counter.set(counter.get() + 1);
            Maybe::Some('r')
        });

        let mut left = Seq::from_iter(vec![1, 2]);
        assert_eq!(left.zip(right).count(), Ok(2));
        assert_eq!(right_pulls.get(), 2);
    }

    #[test]
    fn test_intersperse() {
        let mut seq = Seq::from_iter(vec![1, 2, 3]);
        assert_eq!(
            seq.intersperse(0).collect::<Vec<_>>(),
            Ok(vec![1, 0, 2, 0, 3])
        );

        let mut single = Seq::from_iter(vec![1]);
        assert_eq!(single.intersperse(0).collect::<Vec<_>>(), Ok(vec![1]));

        let mut empty = Seq::from_iter(Vec::<i32>::new());
        assert_eq!(empty.intersperse(0).count(), Ok(0));
    }

    #[test]
    fn test_intersperse_with_calls_separator_between_only() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut seq = Seq::from_iter(vec!["x", "y", "z"]);
        let joined = seq
            .intersperse_with(move || {
                counter.set(counter.get() + 1);
                ","
            })
            .collect::<String>();

        assert_eq!(joined, Ok("x,y,z".to_string()));
        assert_eq!(calls.get(), 2);
    }
}
