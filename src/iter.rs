//! Std [`Iterator`] adapter for [`Seq`].
//!
//! A `Seq` pulls fallibly, so it does not implement `Iterator` itself.
//! [`Seq::into_results`] bridges the gap: every pull becomes one
//! `Result<T, SeqError>`, and iteration ends after the first error.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::Seq;
//!
//! let mut iter = Seq::from_iter(1..=3).into_results();
//! let values: Result<Vec<_>, _> = (&mut iter).collect();
//! assert_eq!(values.unwrap(), vec![1, 2, 3]);
//! assert!(iter.is_complete());
//! ```
//!
//! Both `IntoResults` and `&mut IntoResults` implement `Iterator`, so a
//! `for` loop can stop early and resume later.

use crate::{Maybe, Seq, SeqError};

/// Iterator over the pulls of a [`Seq`].
pub struct IntoResults<T> {
    state: IntoResultsState<T>,
}

enum IntoResultsState<T> {
    Active(Seq<T>),
    Complete,
    Failed,
}

impl<T: 'static> IntoResults<T> {
    fn new(seq: Seq<T>) -> Self {
        Self {
            state: IntoResultsState::Active(seq),
        }
    }

    /// Check if the underlying sequence reported exhaustion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, IntoResultsState::Complete)
    }

    /// Check if iteration stopped on an error.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, IntoResultsState::Failed)
    }
}

impl<T: 'static> Iterator for IntoResults<T> {
    type Item = Result<T, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let IntoResultsState::Active(seq) = &mut self.state else {
            return None;
        };
        match seq.next() {
            Ok(Maybe::Some(item)) => Some(Ok(item)),
            Ok(Maybe::None) => {
                self.state = IntoResultsState::Complete;
                None
            }
            Err(e) => {
                self.state = IntoResultsState::Failed;
                Some(Err(e))
            }
        }
    }
}

impl<T: 'static> Seq<T> {
    /// Release this handle into a std iterator of pull results.
    pub fn into_results(mut self) -> IntoResults<T> {
        IntoResults::new(self.release())
    }
}
