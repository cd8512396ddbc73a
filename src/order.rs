//! Lexicographic comparison of two sequences.
//!
//! Both operands are pulled in lockstep until a pair differs or one side
//! runs out; the side that runs out first orders first. Every operation here
//! releases the receiver and takes `other` by value.

use std::cmp::Ordering;

use crate::error::namespaced;
use crate::{IntoSeq, Maybe, Seq, SeqError, ToNumber};

impl<T: 'static> Seq<T> {
    fn cmp_with<S, F>(&mut self, other: S, mut compare: F) -> Result<Ordering, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        F: FnMut(T, S::Item) -> Result<Ordering, SeqError>,
    {
        let mut left = self.release();
        let mut right = other.into_seq();
        loop {
            match (left.pull()?, right.pull()?) {
                (Maybe::None, Maybe::None) => return Ok(Ordering::Equal),
                (Maybe::None, Maybe::Some(_)) => return Ok(Ordering::Less),
                (Maybe::Some(_), Maybe::None) => return Ok(Ordering::Greater),
                (Maybe::Some(a), Maybe::Some(b)) => match compare(a, b)? {
                    Ordering::Equal => {}
                    unequal => return Ok(unequal),
                },
            }
        }
    }

    fn numeric_cmp<S>(&mut self, other: S) -> Result<Ordering, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        self.cmp_with(other, |a, b| {
            let difference = a.to_number()? - b.to_number()?;
            Ok(difference.partial_cmp(&0.0).unwrap_or(Ordering::Equal))
        })
    }

    /// Compare numerically, element by element.
    ///
    /// A pair whose difference is not a number (NaN) compares equal.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use pullseq::Seq;
    ///
    /// assert_eq!(Seq::from_iter(vec![1, 2]).cmp(vec![1, 3]).unwrap(), Ordering::Less);
    /// assert_eq!(Seq::from_iter(vec![1, 2]).cmp(vec![1]).unwrap(), Ordering::Greater);
    /// assert_eq!(Seq::from_iter(vec![1.0]).cmp(vec![1]).unwrap(), Ordering::Equal);
    /// ```
    pub fn cmp<S>(&mut self, other: S) -> Result<Ordering, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        namespaced("cmp", "other", || self.numeric_cmp(other))
    }

    /// Compare element by element with `compare`.
    pub fn cmp_by<S, F>(&mut self, other: S, mut compare: F) -> Result<Ordering, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        F: FnMut(T, S::Item) -> Ordering,
    {
        namespaced("cmp_by", "other, compare", || {
            self.cmp_with(other, |a, b| Ok(compare(a, b)))
        })
    }

    /// Numerically less than `other`.
    pub fn lt<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        namespaced("lt", "other", || Ok(self.numeric_cmp(other)?.is_lt()))
    }

    /// Numerically less than or equal to `other`.
    pub fn le<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        namespaced("le", "other", || Ok(self.numeric_cmp(other)?.is_le()))
    }

    /// Numerically greater than `other`.
    pub fn gt<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        namespaced("gt", "other", || Ok(self.numeric_cmp(other)?.is_gt()))
    }

    /// Numerically greater than or equal to `other`.
    pub fn ge<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        T: ToNumber,
        S: IntoSeq,
        S::Item: ToNumber + 'static,
    {
        namespaced("ge", "other", || Ok(self.numeric_cmp(other)?.is_ge()))
    }

    fn eq_with<S, F>(&mut self, other: S, mut same: F) -> Result<bool, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        F: FnMut(T, S::Item) -> bool,
    {
        let mut left = self.release();
        let mut right = other.into_seq();
        loop {
            match (left.pull()?, right.pull()?) {
                (Maybe::None, Maybe::None) => return Ok(true),
                (Maybe::Some(a), Maybe::Some(b)) => {
                    if !same(a, b) {
                        return Ok(false);
                    }
                }
                _ => return Ok(false),
            }
        }
    }

    /// Returns `true` if both sequences hold equal elements and run out
    /// together.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// assert!(Seq::from_iter(vec!["a", "b"]).eq(vec!["a", "b"]).unwrap());
    /// assert!(!Seq::from_iter(vec!["a"]).eq(vec!["a", "b"]).unwrap());
    /// ```
    pub fn eq<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        T: PartialEq<S::Item>,
    {
        namespaced("eq", "other", || self.eq_with(other, |a, b| a == b))
    }

    /// Like [`eq`](Seq::eq), with `same` deciding element equality.
    pub fn eq_by<S, F>(&mut self, other: S, same: F) -> Result<bool, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        F: FnMut(T, S::Item) -> bool,
    {
        namespaced("eq_by", "other, same", || self.eq_with(other, same))
    }

    /// Negation of [`eq`](Seq::eq).
    pub fn ne<S>(&mut self, other: S) -> Result<bool, SeqError>
    where
        S: IntoSeq,
        S::Item: 'static,
        T: PartialEq<S::Item>,
    {
        namespaced("ne", "other", || Ok(!self.eq_with(other, |a, b| a == b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_lexicographic() {
        assert_eq!(Seq::from_iter(vec![1, 2, 3]).cmp(vec![1, 2, 3]), Ok(Ordering::Equal));
        assert_eq!(Seq::from_iter(vec![1, 2]).cmp(vec![1, 2, 3]), Ok(Ordering::Less));
        assert_eq!(Seq::from_iter(vec![2]).cmp(vec![1, 9]), Ok(Ordering::Greater));
        assert_eq!(
            Seq::from_iter(Vec::<i32>::new()).cmp(Vec::<i32>::new()),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_cmp_nan_compares_equal() {
        assert_eq!(
            Seq::from_iter(vec![f64::NAN, 1.0]).cmp(vec![0.0, 2.0]),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn test_cmp_stops_at_first_difference() {
        let mut pulls = 0;
        let right = Seq::from_fn(move || {
            pulls += 1;
            assert!(pulls <= 2, "right side pulled past the difference");
            Maybe::Some(pulls)
        });
        assert_eq!(Seq::from_iter(vec![1, 5, 0]).cmp(right), Ok(Ordering::Greater));
    }

    #[test]
    fn test_cmp_by() {
        let mut words = Seq::from_iter(vec!["b", "aa"]);
        assert_eq!(
            words.cmp_by(vec!["a", "bb"], |a, b| a.len().cmp(&b.len())),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_relational_ops() {
        assert_eq!(Seq::from_iter(vec![1]).lt(vec![2]), Ok(true));
        assert_eq!(Seq::from_iter(vec![1]).le(vec![1]), Ok(true));
        assert_eq!(Seq::from_iter(vec![1, 0]).gt(vec![1]), Ok(true));
        assert_eq!(Seq::from_iter(vec![1]).ge(vec![1, 0]), Ok(false));
    }

    #[test]
    fn test_eq_family() {
        assert_eq!(Seq::from_iter(vec![1, 2]).eq(vec![1, 2]), Ok(true));
        assert_eq!(Seq::from_iter(vec![1, 2]).eq(vec![1]), Ok(false));
        assert_eq!(Seq::from_iter(vec![1, 2]).ne(vec![2, 1]), Ok(true));
        assert_eq!(
            Seq::from_iter(vec!["A", "b"]).eq_by(vec!["a", "B"], |x, y| x.eq_ignore_ascii_case(y)),
            Ok(true)
        );
    }

    #[test]
    fn test_comparison_releases_receiver() {
        let mut seq = Seq::from_iter(vec![1]);
        assert_eq!(seq.eq(Seq::from_iter(vec![1])), Ok(true));
        let err = seq.cmp(vec![1]).unwrap_err();
        assert!(err.is_consumed());
        assert_eq!(
            err.to_string(),
            "Seq<T>::cmp(other) ~ this sequence has been consumed and cannot be used"
        );
    }
}
