//! Core trait for single-pass sources.
//!
//! A [`Producer`] is the raw pull protocol underneath every [`Seq`]: each call
//! to [`pull`](Producer::pull) either hands out the next element, reports
//! exhaustion with [`Maybe::None`], or fails. A producer makes no promise
//! about what happens when it is pulled again after reporting `None`; the
//! [`Seq`] wrapping it decides that (see [`Seq::fuse`]).
//!
//! Every combinator in this crate is a small state machine implementing
//! `Producer` over one or two parent sequences.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::{Maybe, Producer, Seq, SeqError};
//!
//! struct Countdown(u32);
//!
//! impl Producer for Countdown {
//!     type Item = u32;
//!
//!     fn pull(&mut self) -> Result<Maybe<u32>, SeqError> {
//!         if self.0 == 0 {
//!             return Ok(Maybe::None);
//!         }
//!         self.0 -= 1;
//!         Ok(Maybe::Some(self.0 + 1))
//!     }
//! }
//!
//! let mut seq = Seq::new(Countdown(3));
//! assert_eq!(seq.collect::<Vec<_>>().unwrap(), vec![3, 2, 1]);
//! ```

use crate::{Maybe, SeqError};

/// A single-pass source of elements.
pub trait Producer {
    /// Type of element handed out by each pull
    type Item;

    /// Produce the next element, `None` once exhausted.
    fn pull(&mut self) -> Result<Maybe<Self::Item>, SeqError>;

    /// Erase the concrete type behind a `Box`.
    fn boxed(self) -> Box<dyn Producer<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Maybe<Self::Item>, SeqError> {
        (**self).pull()
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Result<Maybe<Self::Item>, SeqError> {
        (**self).pull()
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Result<Maybe<Self::Item>, SeqError> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }
}

/// Adapts a std [`Iterator`] into an infallible producer.
#[derive(Debug, Clone)]
pub struct Source<I>(I);

impl<I> Source<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Source(iter)
    }
}

impl<I> Producer for Source<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Maybe<Self::Item>, SeqError> {
        Ok(self.0.next().into())
    }
}

/// A producer driven by a closure; see [`from_fn`](crate::build::from_fn).
pub struct FromFn<F>(F);

impl<F> FromFn<F> {
    pub fn new(f: F) -> Self {
        FromFn(f)
    }
}

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        Ok((self.0)())
    }
}
