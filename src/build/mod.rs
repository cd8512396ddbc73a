//! Building sequences from scratch.
//!
//! ```rust
//! use pullseq::build::{once, repeat, successors};
//! use pullseq::Maybe;
//!
//! let mut powers = successors(Maybe::Some(1_u32), |n| n.checked_mul(2).into());
//! let tail = repeat(0_u32).take(2);
//! let all = powers.take(4).chain(once(99)).chain(tail).collect::<Vec<_>>();
//! assert_eq!(all.unwrap(), vec![1, 2, 4, 8, 99, 0, 0]);
//! ```

mod func;

pub use func::{Once, OnceWith, Repeat, RepeatWith, Successors};

use crate::producer::Source;
use crate::{IntoSeq, Maybe, Seq};

/// Convert anything sequence-like into a [`Seq`].
pub fn seq<S>(source: S) -> Seq<S::Item>
where
    S: IntoSeq,
{
    source.into_seq()
}

/// A sequence with no elements.
pub fn empty<T: 'static>() -> Seq<T> {
    Seq::new(Source::new(std::iter::empty()))
}

/// A sequence of exactly one element.
pub fn once<T: 'static>(value: T) -> Seq<T> {
    Seq::new(func::Once::new(value))
}

/// A sequence of one element computed on the first pull.
pub fn once_with<T, F>(f: F) -> Seq<T>
where
    T: 'static,
    F: FnOnce() -> T + 'static,
{
    Seq::new(func::OnceWith::new(f))
}

/// An endless sequence of clones of `value`.
pub fn repeat<T: Clone + 'static>(value: T) -> Seq<T> {
    Seq::new(func::Repeat::new(value))
}

/// An endless sequence of the results of `f`.
pub fn repeat_with<T, F>(f: F) -> Seq<T>
where
    T: 'static,
    F: FnMut() -> T + 'static,
{
    Seq::new(func::RepeatWith::new(f))
}

/// A sequence pulling from `f`, ending at the first `None`.
///
/// Unlike [`Seq::from_fn`], `f` is never called again once it returned
/// `None`.
pub fn from_fn<T, F>(f: F) -> Seq<T>
where
    T: 'static,
    F: FnMut() -> Maybe<T> + 'static,
{
    let mut seq = Seq::from_fn(f);
    seq.fuse();
    seq
}

/// A sequence over anything iterable.
pub fn from_iter<I>(iter: I) -> Seq<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    Seq::from_iter(iter)
}

/// Start from `first` and compute each element from the previous one until
/// `succ` returns `None`.
pub fn successors<T, F>(first: Maybe<T>, succ: F) -> Seq<T>
where
    T: 'static,
    F: FnMut(&T) -> Maybe<T> + 'static,
{
    Seq::new(func::Successors::new(first, succ))
}

/// Pair up two sequences; see [`Seq::zip`].
pub fn zip<A, B>(a: A, b: B) -> Seq<(A::Item, B::Item)>
where
    A: IntoSeq,
    A::Item: 'static,
    B: IntoSeq,
    B::Item: 'static,
{
    a.into_seq().zip(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_empty_and_once() {
        assert_eq!(empty::<i32>().count(), Ok(0));
        assert_eq!(once("x").collect::<Vec<_>>(), Ok(vec!["x"]));
        assert_eq!(once_with(|| 2 + 2).collect::<Vec<_>>(), Ok(vec![4]));
    }

    #[test]
    fn test_repeat_is_bounded_by_take() {
        assert_eq!(repeat('z').take(3).collect::<String>(), Ok("zzz".to_string()));

        let mut n = 0;
        let counted = repeat_with(move || {
            n += 1;
            n
        })
        .take(4)
        .collect::<Vec<_>>();
        assert_eq!(counted, Ok(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_from_fn_stops_at_first_none() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut seq = from_fn(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                Maybe::None
            } else {
                Maybe::Some(counter.get())
            }
        });

        assert_eq!(seq.next(), Ok(Maybe::Some(1)));
        assert_eq!(seq.next(), Ok(Maybe::None));
        assert_eq!(seq.next(), Ok(Maybe::None));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_seq_and_from_iter() {
        assert_eq!(seq(vec![1, 2]).collect::<Vec<_>>(), Ok(vec![1, 2]));
        assert_eq!(from_iter("ab".chars()).collect::<String>(), Ok("ab".to_string()));
    }

    #[test]
    fn test_successors() {
        let mut countdown = successors(Maybe::Some(3_u8), |n| n.checked_sub(1).into());
        assert_eq!(countdown.collect::<Vec<_>>(), Ok(vec![3, 2, 1, 0]));
        assert_eq!(successors(Maybe::<u8>::None, |_| Maybe::Some(1)).count(), Ok(0));
    }

    #[test]
    fn test_zip_function() {
        assert_eq!(
            zip(vec![1, 2, 3], "ab".chars()).collect::<Vec<_>>(),
            Ok(vec![(1, 'a'), (2, 'b')])
        );
    }
}
