//! Cutting a sequence short or skipping into it.

use crate::error::namespaced;
use crate::{Maybe, Producer, Seq, SeqError};

/// Yields at most `remaining` elements.
pub struct Take<T> {
    seq: Seq<T>,
    remaining: usize,
}

impl<T: 'static> Producer for Take<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if self.remaining == 0 {
            return Ok(Maybe::None);
        }
        let item = self.seq.pull()?;
        self.remaining = if item.is_some() { self.remaining - 1 } else { 0 };
        Ok(item)
    }
}

/// Discards the first `remaining` elements on first pull.
pub struct Skip<T> {
    seq: Seq<T>,
    remaining: usize,
}

impl<T: 'static> Producer for Skip<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.seq.pull()?.is_none() {
                self.remaining = 0;
                return Ok(Maybe::None);
            }
        }
        self.seq.pull()
    }
}

/// Yields elements while a predicate holds, then stops for good.
pub struct TakeWhile<T, P> {
    seq: Seq<T>,
    predicate: P,
    done: bool,
}

impl<T, P> Producer for TakeWhile<T, P>
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if self.done {
            return Ok(Maybe::None);
        }
        let item = self.seq.pull()?.filter(&mut self.predicate);
        self.done = item.is_none();
        Ok(item)
    }
}

/// Discards elements while a predicate holds, then yields the rest.
pub struct SkipWhile<T, P> {
    seq: Seq<T>,
    predicate: P,
    skipping: bool,
}

impl<T, P> Producer for SkipWhile<T, P>
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if self.skipping {
            while let Maybe::Some(item) = self.seq.pull()? {
                if !(self.predicate)(&item) {
                    self.skipping = false;
                    return Ok(Maybe::Some(item));
                }
            }
            return Ok(Maybe::None);
        }
        self.seq.pull()
    }
}

/// Yields the first element, then every `step`-th after it.
pub struct StepBy<T> {
    seq: Seq<T>,
    step: usize,
    first_taken: bool,
}

impl<T: 'static> Producer for StepBy<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if !self.first_taken {
            self.first_taken = true;
            return self.seq.pull();
        }
        for _ in 1..self.step {
            if self.seq.pull()?.is_none() {
                return Ok(Maybe::None);
            }
        }
        self.seq.pull()
    }
}

impl<T: 'static> Seq<T> {
    /// Yield at most `n` elements.
    ///
    /// `take(0)` never pulls the parent.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut naturals = Seq::from_iter(1..);
    /// assert_eq!(naturals.take(3).collect::<Vec<_>>().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn take(&mut self, n: usize) -> Seq<T> {
        Seq::derived(Take {
            seq: self.release(),
            remaining: n,
        })
    }

    /// Discard the first `n` elements.
    pub fn skip(&mut self, n: usize) -> Seq<T> {
        Seq::derived(Skip {
            seq: self.release(),
            remaining: n,
        })
    }

    /// Yield elements until `predicate` first rejects one.
    ///
    /// The rejected element is consumed and lost.
    pub fn take_while<P>(&mut self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq::derived(TakeWhile {
            seq: self.release(),
            predicate,
            done: false,
        })
    }

    /// Discard elements until `predicate` first rejects one, then yield that
    /// element and everything after it.
    pub fn skip_while<P>(&mut self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq::derived(SkipWhile {
            seq: self.release(),
            predicate,
            skipping: true,
        })
    }

    /// Yield the first element and then every `step`-th element.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidCount`] if `step` is zero. The receiver is left
    /// untouched in that case.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(0..10);
    /// let thirds = seq.step_by(3).unwrap().collect::<Vec<_>>().unwrap();
    /// assert_eq!(thirds, vec![0, 3, 6, 9]);
    /// ```
    pub fn step_by(&mut self, step: usize) -> Result<Seq<T>, SeqError> {
        namespaced("step_by", "step", || {
            if step == 0 {
                return Err(SeqError::InvalidCount { name: "step" });
            }
            Ok(Seq::derived(StepBy {
                seq: self.release(),
                step,
                first_taken: false,
            }))
        })
    }
}
