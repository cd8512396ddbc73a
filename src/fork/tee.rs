//! Splitting one sequence into two independent branches.
//!
//! Both branches share a single source and one queue per branch. A pull on
//! either branch first drains that branch's own queue; only when it is empty
//! is the source pulled, and a clone of the new element is queued for the
//! other branch. Each source element is therefore produced exactly once and
//! both branches observe the full stream in order, however their pulls are
//! interleaved. Memory grows with the distance between the two branches.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::trace;

use crate::{Maybe, Producer, Seq, SeqError};

struct Shared<T> {
    source: Seq<T>,
    buffers: [VecDeque<T>; 2],
}

/// One side of a fork.
pub struct Branch<T> {
    shared: Rc<RefCell<Shared<T>>>,
    index: usize,
}

impl<T: Clone + 'static> Producer for Branch<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        let mut guard = self.shared.borrow_mut();
        let shared = &mut *guard;

        if let Some(item) = shared.buffers[self.index].pop_front() {
            return Ok(Maybe::Some(item));
        }

        let item = shared.source.pull()?;
        if let Maybe::Some(ref x) = item {
            shared.buffers[1 - self.index].push_back(x.clone());
        }
        Ok(item)
    }
}

/// Split `source` into two branches. The source is fused so an exhausted
/// branch never wakes it again.
pub(crate) fn tee<T: Clone + 'static>(mut source: Seq<T>) -> (Branch<T>, Branch<T>) {
    source.fuse();
    let shared = Rc::new(RefCell::new(Shared {
        source,
        buffers: [VecDeque::new(), VecDeque::new()],
    }));
    trace!("forked sequence into two branches");
    (
        Branch {
            shared: Rc::clone(&shared),
            index: 0,
        },
        Branch { shared, index: 1 },
    )
}

impl<T: Clone + 'static> Seq<T> {
    /// Fork this sequence.
    ///
    /// `self` is rebound to one branch and the other is returned. Both yield
    /// the complete remaining stream, cloning each element once.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut left = Seq::from_iter(vec![1, 2, 3]);
    /// let mut right = left.cloned();
    ///
    /// assert_eq!(right.next().unwrap(), Maybe::Some(1));
    /// assert_eq!(left.collect::<Vec<_>>().unwrap(), vec![1, 2, 3]);
    /// assert_eq!(right.collect::<Vec<_>>().unwrap(), vec![2, 3]);
    /// ```
    pub fn cloned(&mut self) -> Seq<T> {
        let (left, right) = tee(self.release());
        *self = Seq::derived(left);
        Seq::derived(right)
    }

    /// Fork a sequence of `Copy` elements; see [`Seq::cloned`].
    pub fn copied(&mut self) -> Seq<T>
    where
        T: Copy,
    {
        self.cloned()
    }
}
