//! The pull sequence handle.
//!
//! A [`Seq<T>`] owns exactly one [`Producer`] and adds the bookkeeping every
//! sequence shares:
//!
//! - **Ownership.** Combinators and draining operations move the producer out
//!   of the handle they are called on. The handle stays in scope but is
//!   released: any later pull fails with [`SeqError::Consumed`].
//! - **Fusing.** After [`fuse`](Seq::fuse), the first exhaustion is final and
//!   the producer is never pulled again, even if it would resume.
//! - **Peeking.** [`peek`](Seq::peek) pulls one element ahead and replays it
//!   on the next pull.
//!
//! ```rust
//! use pullseq::{Maybe, Seq};
//!
//! let mut numbers = Seq::from_iter(vec![1, 2, 3]);
//! let mut doubled = numbers.map(|x| x * 2);
//!
//! assert_eq!(doubled.next().unwrap(), Maybe::Some(2));
//! assert!(numbers.next().unwrap_err().is_consumed());
//! ```

use tracing::{debug, trace};

use crate::error::namespaced;
use crate::producer::{FromFn, Source};
use crate::{Maybe, Outcome, Producer, SeqError, Slot};

/// Upper bound on the space `next_chunk` reserves before pulling.
const CHUNK_PREALLOC: usize = 64;

/// A single-pass, lazily evaluated sequence.
pub struct Seq<T> {
    state: SeqState<T>,
    peeked: Slot<T>,
    exhausted: bool,
    fuse: Fuse,
}

enum SeqState<T> {
    Live(Box<dyn Producer<Item = T>>),
    Released,
}

#[derive(Debug, Default, Clone, Copy)]
struct Fuse {
    requested: bool,
    dead: bool,
}

impl<T: 'static> Seq<T> {
    /// Wrap a producer.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'static,
    {
        Seq {
            state: SeqState::Live(Box::new(producer)),
            peeked: Slot::empty(),
            exhausted: false,
            fuse: Fuse::default(),
        }
    }

    /// Wrap a combinator. Derived sequences stay exhausted once they report
    /// `None`.
    pub(crate) fn derived<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'static,
    {
        let mut seq = Seq::new(producer);
        seq.fuse.requested = true;
        seq
    }

    /// A handle whose producer is gone.
    pub(crate) fn released() -> Self {
        Seq {
            state: SeqState::Released,
            peeked: Slot::empty(),
            exhausted: false,
            fuse: Fuse::default(),
        }
    }

    /// A sequence over anything iterable.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(1..=3);
    /// assert_eq!(seq.sum().unwrap(), 6.0);
    /// ```
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq::new(Source::new(iter.into_iter()))
    }

    /// A sequence pulling from `f` until it returns `None`.
    ///
    /// The closure is called again on every pull, including after it returned
    /// `None`; call [`fuse`](Seq::fuse) to stop at the first `None`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> Maybe<T> + 'static,
    {
        Seq::new(FromFn::new(f))
    }

    /// Pull the next element.
    ///
    /// # Errors
    ///
    /// [`SeqError::Consumed`] if this handle has been released, or any error
    /// raised by the producer.
    pub fn next(&mut self) -> Result<Maybe<T>, SeqError> {
        namespaced("next", "", || self.pull())
    }

    pub(crate) fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        let producer = match &mut self.state {
            SeqState::Live(producer) => producer,
            SeqState::Released => return Err(SeqError::Consumed),
        };

        if let Maybe::Some(item) = self.peeked.take() {
            return Ok(Maybe::Some(item));
        }

        if self.fuse.dead {
            return Ok(Maybe::None);
        }

        let item = producer.pull()?;
        self.exhausted = item.is_none();
        if self.exhausted && self.fuse.requested {
            trace!("fused sequence exhausted");
            self.fuse.dead = true;
        }
        Ok(item)
    }

    /// Make the first exhaustion permanent.
    ///
    /// Once the producer reports `None`, every later pull returns `None`
    /// without calling it again.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut n = 0;
    /// let mut flaky = Seq::from_fn(move || {
    ///     n += 1;
    ///     if n == 3 { Maybe::None } else { Maybe::Some(n) }
    /// });
    /// flaky.fuse();
    ///
    /// assert_eq!(flaky.collect::<Vec<_>>().unwrap(), vec![1, 2]);
    /// ```
    pub fn fuse(&mut self) -> &mut Self {
        self.fuse.requested = true;
        self
    }

    /// Returns `true` if the last pull reported no element.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns `true` if this handle gave its producer away.
    pub fn is_released(&self) -> bool {
        matches!(self.state, SeqState::Released)
    }

    /// Move the producer and all pull state into a new handle, leaving this
    /// one released.
    pub(crate) fn release(&mut self) -> Seq<T> {
        if self.is_released() {
            debug!("releasing a sequence that was already released");
        }
        std::mem::replace(self, Seq::released())
    }

    /// Release this handle and pull it to exhaustion as a std iterator.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Result<T, SeqError>> {
        let mut seq = self.release();
        std::iter::from_fn(move || seq.pull().map(Maybe::into_option).transpose())
    }

    /// Look at the next element without consuming it.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut seq = Seq::from_iter(vec!['a', 'b']);
    /// assert_eq!(seq.peek().unwrap(), Maybe::Some(&'a'));
    /// assert_eq!(seq.next().unwrap(), Maybe::Some('a'));
    /// ```
    pub fn peek(&mut self) -> Result<Maybe<&T>, SeqError> {
        if !self.peeked.is_filled() {
            match self.pull() {
                Ok(Maybe::Some(item)) => {
                    self.peeked.insert(item);
                }
                Ok(Maybe::None) => {}
                Err(e) => return Err(e.within("peek", "")),
            }
        }
        Ok(self.peeked.as_ref())
    }

    /// Pull the next element only if `func` accepts it.
    pub fn next_if<F>(&mut self, func: F) -> Result<Maybe<T>, SeqError>
    where
        F: FnOnce(&T) -> bool,
    {
        namespaced("next_if", "func", || {
            let accepted = match self.peek()? {
                Maybe::Some(item) => func(item),
                Maybe::None => false,
            };
            if accepted {
                self.pull()
            } else {
                Ok(Maybe::None)
            }
        })
    }

    /// Pull the next element only if it equals `expected`.
    pub fn next_if_eq<U>(&mut self, expected: &U) -> Result<Maybe<T>, SeqError>
    where
        U: PartialEq<T> + ?Sized,
    {
        self.next_if(|item| expected == item)
    }

    /// Pull and discard `n` elements.
    ///
    /// Returns `Err(k)` with the number of elements actually pulled if the
    /// sequence ran out first.
    ///
    /// ```rust
    /// use pullseq::{Outcome, Seq};
    ///
    /// let mut seq = Seq::from_iter(vec![1, 2]);
    /// assert_eq!(seq.advance_by(3).unwrap(), Outcome::Err(2));
    /// ```
    pub fn advance_by(&mut self, n: usize) -> Result<Outcome<(), usize>, SeqError> {
        namespaced("advance_by", "n", || {
            for i in 0..n {
                if self.pull()?.is_none() {
                    return Ok(Outcome::Err(i));
                }
            }
            Ok(Outcome::Ok(()))
        })
    }

    /// Pull up to `n` elements at once.
    ///
    /// On a short sequence the elements pulled so far come back as a new
    /// sequence in the `Err` variant.
    pub fn next_chunk(&mut self, n: usize) -> Result<Outcome<Vec<T>, Seq<T>>, SeqError> {
        namespaced("next_chunk", "n", || {
            let mut chunk = Vec::with_capacity(n.min(CHUNK_PREALLOC));
            for _ in 0..n {
                match self.pull()? {
                    Maybe::Some(item) => chunk.push(item),
                    Maybe::None => return Ok(Outcome::Err(Seq::from_iter(chunk))),
                }
            }
            Ok(Outcome::Ok(chunk))
        })
    }

    /// Skip `n` elements and pull the one after them.
    pub fn nth(&mut self, n: usize) -> Result<Maybe<T>, SeqError> {
        namespaced("nth", "n", || {
            for _ in 0..n {
                if self.pull()?.is_none() {
                    return Ok(Maybe::None);
                }
            }
            self.pull()
        })
    }
}

impl<T: 'static> Producer for Seq<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Seq::pull(self)
    }
}

impl<T> std::fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seq")
            .field("released", &matches!(self.state, SeqState::Released))
            .field("exhausted", &self.exhausted)
            .field("fused", &self.fuse.requested)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Yields 1, 2, then `None` once, then resumes with 99 forever.
    fn resuming() -> Seq<i32> {
        let mut calls = 0;
        Seq::from_fn(move || {
            calls += 1;
            match calls {
                1 | 2 => Maybe::Some(calls),
                3 => Maybe::None,
                _ => Maybe::Some(99),
            }
        })
    }

    #[test]
    fn test_next_reports_exhaustion() {
        let mut seq = Seq::from_iter(vec![1]);
        assert_eq!(seq.next(), Ok(Maybe::Some(1)));
        assert!(!seq.is_exhausted());
        assert_eq!(seq.next(), Ok(Maybe::None));
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_unfused_sequence_observes_resumption() {
        let mut seq = resuming();
        assert_eq!(seq.next(), Ok(Maybe::Some(1)));
        assert_eq!(seq.next(), Ok(Maybe::Some(2)));
        assert_eq!(seq.next(), Ok(Maybe::None));
        assert_eq!(seq.next(), Ok(Maybe::Some(99)));
    }

    #[test]
    fn test_fuse_suppresses_resumption() {
        let mut seq = resuming();
        seq.fuse();
        assert_eq!(seq.next(), Ok(Maybe::Some(1)));
        assert_eq!(seq.next(), Ok(Maybe::Some(2)));
        for _ in 0..5 {
            assert_eq!(seq.next(), Ok(Maybe::None));
        }
    }

    #[test]
    fn test_fused_sequence_stops_calling_producer() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut seq = Seq::from_fn(move || {
            counter.set(counter.get() + 1);
            Maybe::<i32>::None
        });
        seq.fuse();

        assert_eq!(seq.next(), Ok(Maybe::None));
        assert_eq!(seq.next(), Ok(Maybe::None));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_released_handle_fails_fast() {
        let mut seq = Seq::from_iter(vec![1, 2, 3]);
        let mut derived = seq.map(|x| x + 1);

        assert!(seq.is_released());
        let err = seq.next().unwrap_err();
        assert_eq!(err.root(), &SeqError::Consumed);
        assert_eq!(
            err.to_string(),
            "Seq<T>::next() ~ this sequence has been consumed and cannot be used"
        );
        assert_eq!(derived.next(), Ok(Maybe::Some(2)));
    }

    #[test]
    fn test_draining_twice_is_a_reuse_violation() {
        let mut seq = Seq::from_iter(vec![1, 2]);
        assert_eq!(seq.collect::<Vec<_>>(), Ok(vec![1, 2]));
        assert!(seq.collect::<Vec<_>>().unwrap_err().is_consumed());
    }

    #[test]
    fn test_peek_replays_element() {
        let mut seq = Seq::from_iter(vec![1, 2]);
        assert_eq!(seq.peek(), Ok(Maybe::Some(&1)));
        assert_eq!(seq.peek(), Ok(Maybe::Some(&1)));
        assert_eq!(seq.next(), Ok(Maybe::Some(1)));
        assert_eq!(seq.next(), Ok(Maybe::Some(2)));
        assert_eq!(seq.peek(), Ok(Maybe::None));
    }

    #[test]
    fn test_peeked_element_survives_chaining() {
        let mut seq = Seq::from_iter(vec![1, 2, 3]);
        assert_eq!(seq.peek(), Ok(Maybe::Some(&1)));
        assert_eq!(seq.map(|x| x * 10).collect::<Vec<_>>(), Ok(vec![10, 20, 30]));
    }

    #[test]
    fn test_next_if_only_pulls_on_match() {
        let mut seq = Seq::from_iter(vec![1, 2, 3]);
        assert_eq!(seq.next_if(|x| *x == 1), Ok(Maybe::Some(1)));
        assert_eq!(seq.next_if(|x| *x == 1), Ok(Maybe::None));
        assert_eq!(seq.next_if_eq(&2), Ok(Maybe::Some(2)));
        assert_eq!(seq.next_if_eq(&2), Ok(Maybe::None));
        assert_eq!(seq.next(), Ok(Maybe::Some(3)));
        assert_eq!(seq.next_if(|_| true), Ok(Maybe::None));
    }

    #[test]
    fn test_next_if_eq_compares_structurally() {
        let mut seq = Seq::from_iter(vec![vec![1, 2], vec![3]]);
        assert_eq!(seq.next_if_eq(&vec![1, 2]), Ok(Maybe::Some(vec![1, 2])));
        assert_eq!(seq.next_if_eq(&vec![1, 2]), Ok(Maybe::None));
    }

    #[test]
    fn test_advance_by() {
        let mut seq = Seq::from_iter(vec![1, 2, 3, 4]);
        assert_eq!(seq.advance_by(2), Ok(Outcome::Ok(())));
        assert_eq!(seq.next(), Ok(Maybe::Some(3)));
        assert_eq!(seq.advance_by(0), Ok(Outcome::Ok(())));

        let mut short = Seq::from_iter(vec![1, 2]);
        assert_eq!(short.advance_by(3), Ok(Outcome::Err(2)));
    }

    #[test]
    fn test_next_chunk_returns_partial_as_sequence() {
        let mut seq = Seq::from_iter(vec![1, 2, 3]);
        match seq.next_chunk(2).unwrap() {
            Outcome::Ok(chunk) => assert_eq!(chunk, vec![1, 2]),
            Outcome::Err(_) => panic!("expected a full chunk"),
        }

        match seq.next_chunk(2).unwrap() {
            Outcome::Err(mut rest) => assert_eq!(rest.collect::<Vec<_>>(), Ok(vec![3])),
            Outcome::Ok(chunk) => panic!("expected a partial chunk, got {chunk:?}"),
        }
    }

    #[test]
    fn test_next_chunk_with_huge_count() {
        let mut seq = Seq::from_iter(vec![1, 2]);
        match seq.next_chunk(usize::MAX).unwrap() {
            Outcome::Err(mut rest) => assert_eq!(rest.collect::<Vec<_>>(), Ok(vec![1, 2])),
            Outcome::Ok(chunk) => panic!("expected a partial chunk, got {chunk:?}"),
        }
    }

    #[test]
    fn test_nth_is_zero_based() {
        let mut seq = Seq::from_iter(vec!['a', 'b', 'c', 'd']);
        assert_eq!(seq.nth(0), Ok(Maybe::Some('a')));
        assert_eq!(seq.nth(1), Ok(Maybe::Some('c')));
        assert_eq!(seq.nth(5), Ok(Maybe::None));
    }
}
