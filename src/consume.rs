//! Terminal operations.
//!
//! Everything here except [`Seq::all`] and [`Seq::any`] releases the
//! receiver and pulls it to exhaustion (or until the answer is known). The
//! first failing pull aborts the operation with its error.

use std::cmp::Ordering;

use either::Either;

use crate::error::namespaced;
use crate::{Maybe, Seq, SeqError, ToNumber};

impl<T: 'static> Seq<T> {
    /// Returns `true` if `f` accepts every element, stopping at the first
    /// rejection. The handle stays live.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut seq = Seq::from_iter(vec![2, 4, 5, 6]);
    /// assert!(!seq.all(|x| x % 2 == 0).unwrap());
    /// assert_eq!(seq.next().unwrap(), Maybe::Some(6));
    /// ```
    pub fn all<F>(&mut self, mut f: F) -> Result<bool, SeqError>
    where
        F: FnMut(T) -> bool,
    {
        namespaced("all", "f", || {
            while let Maybe::Some(item) = self.pull()? {
                if !f(item) {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Returns `true` if `f` accepts some element, stopping at the first
    /// match. The handle stays live.
    pub fn any<F>(&mut self, mut f: F) -> Result<bool, SeqError>
    where
        F: FnMut(T) -> bool,
    {
        namespaced("any", "f", || {
            while let Maybe::Some(item) = self.pull()? {
                if f(item) {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    /// Accumulate every element into `init` with `f`.
    pub fn fold<B, F>(&mut self, init: B, mut f: F) -> Result<B, SeqError>
    where
        F: FnMut(B, T) -> B,
    {
        namespaced("fold", "init, f", || {
            let mut acc = init;
            for item in self.drain() {
                acc = f(acc, item?);
            }
            Ok(acc)
        })
    }

    /// Fold using the first element as the initial value.
    pub fn reduce<F>(&mut self, mut f: F) -> Result<Maybe<T>, SeqError>
    where
        F: FnMut(T, T) -> T,
    {
        namespaced("reduce", "f", || {
            let mut acc = Maybe::None;
            for item in self.drain() {
                let item = item?;
                acc = Maybe::Some(match acc {
                    Maybe::Some(prev) => f(prev, item),
                    Maybe::None => item,
                });
            }
            Ok(acc)
        })
    }

    /// Call `f` on every element.
    pub fn for_each<F>(&mut self, mut f: F) -> Result<(), SeqError>
    where
        F: FnMut(T),
    {
        namespaced("for_each", "f", || {
            for item in self.drain() {
                f(item?);
            }
            Ok(())
        })
    }

    /// Sum the numeric view of every element.
    ///
    /// # Errors
    ///
    /// [`SeqError::Conversion`] on the first element without a numeric view.
    pub fn sum(&mut self) -> Result<f64, SeqError>
    where
        T: ToNumber,
    {
        namespaced("sum", "", || {
            let mut total = 0.0;
            for item in self.drain() {
                total += item?.to_number()?;
            }
            Ok(total)
        })
    }

    /// Multiply the numeric view of every element.
    pub fn product(&mut self) -> Result<f64, SeqError>
    where
        T: ToNumber,
    {
        namespaced("product", "", || {
            let mut total = 1.0;
            for item in self.drain() {
                total *= item?.to_number()?;
            }
            Ok(total)
        })
    }

    /// Drain into any collection.
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(vec![3, 1, 3]);
    /// let set: BTreeSet<_> = seq.collect().unwrap();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn collect<C>(&mut self) -> Result<C, SeqError>
    where
        C: FromIterator<T>,
    {
        namespaced("collect", "", || self.drain().collect())
    }

    /// Drain into an existing collection, returning it.
    ///
    /// Nothing is added to `target` if a pull fails.
    pub fn collect_into<'c, C>(&mut self, target: &'c mut C) -> Result<&'c mut C, SeqError>
    where
        C: Extend<T>,
    {
        namespaced("collect_into", "target", || {
            let items = self.drain().collect::<Result<Vec<_>, _>>()?;
            target.extend(items);
            Ok(target)
        })
    }

    /// Number of elements left.
    pub fn count(&mut self) -> Result<usize, SeqError> {
        namespaced("count", "", || {
            let mut n = 0;
            for item in self.drain() {
                item?;
                n += 1;
            }
            Ok(n)
        })
    }

    /// The final element, `None` if there were none.
    pub fn last(&mut self) -> Result<Maybe<T>, SeqError> {
        namespaced("last", "", || {
            let mut last = Maybe::None;
            for item in self.drain() {
                last = Maybe::Some(item?);
            }
            Ok(last)
        })
    }

    /// Index of the first element `predicate` accepts.
    pub fn position<P>(&mut self, mut predicate: P) -> Result<Maybe<usize>, SeqError>
    where
        P: FnMut(T) -> bool,
    {
        namespaced("position", "predicate", || {
            for (i, item) in self.drain().enumerate() {
                if predicate(item?) {
                    return Ok(Maybe::Some(i));
                }
            }
            Ok(Maybe::None)
        })
    }

    /// The first element `predicate` accepts.
    pub fn find<P>(&mut self, mut predicate: P) -> Result<Maybe<T>, SeqError>
    where
        P: FnMut(&T) -> bool,
    {
        namespaced("find", "predicate", || {
            for item in self.drain() {
                let item = item?;
                if predicate(&item) {
                    return Ok(Maybe::Some(item));
                }
            }
            Ok(Maybe::None)
        })
    }

    /// The first `Some` result of `f`.
    pub fn find_map<U, F>(&mut self, mut f: F) -> Result<Maybe<U>, SeqError>
    where
        F: FnMut(T) -> Maybe<U>,
    {
        namespaced("find_map", "f", || {
            for item in self.drain() {
                if let Maybe::Some(found) = f(item?) {
                    return Ok(Maybe::Some(found));
                }
            }
            Ok(Maybe::None)
        })
    }

    /// Split into the elements `predicate` accepts and those it rejects.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(1..=5);
    /// let (even, odd): (Vec<_>, Vec<_>) = seq.partition(|x| x % 2 == 0).unwrap();
    /// assert_eq!(even, vec![2, 4]);
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    pub fn partition<B, P>(&mut self, mut predicate: P) -> Result<(B, B), SeqError>
    where
        B: Default + Extend<T>,
        P: FnMut(&T) -> bool,
    {
        namespaced("partition", "predicate", || {
            let (mut accepted, mut rejected) = (B::default(), B::default());
            for item in self.drain() {
                let item = item?;
                if predicate(&item) {
                    accepted.extend(Some(item));
                } else {
                    rejected.extend(Some(item));
                }
            }
            Ok((accepted, rejected))
        })
    }

    /// Split by the side of the [`Either`] each element maps to.
    pub fn partition_map<L, R, F>(&mut self, mut f: F) -> Result<(Vec<L>, Vec<R>), SeqError>
    where
        F: FnMut(T) -> Either<L, R>,
    {
        namespaced("partition_map", "f", || {
            let (mut left, mut right) = (Vec::new(), Vec::new());
            for item in self.drain() {
                match f(item?) {
                    Either::Left(l) => left.push(l),
                    Either::Right(r) => right.push(r),
                }
            }
            Ok((left, right))
        })
    }

    /// Returns `true` if every element `predicate` accepts comes before every
    /// element it rejects.
    pub fn is_partitioned<P>(&mut self, mut predicate: P) -> Result<bool, SeqError>
    where
        P: FnMut(T) -> bool,
    {
        namespaced("is_partitioned", "predicate", || {
            let mut rejected_seen = false;
            for item in self.drain() {
                match (predicate(item?), rejected_seen) {
                    (true, true) => return Ok(false),
                    (false, _) => rejected_seen = true,
                    (true, false) => {}
                }
            }
            Ok(true)
        })
    }

    /// Returns `true` if the numeric view never decreases.
    ///
    /// A pair involving NaN is out of order.
    ///
    /// The whole sequence is drained, so a later element without a numeric
    /// view fails the call even if an earlier pair was out of order.
    pub fn is_sorted(&mut self) -> Result<bool, SeqError>
    where
        T: ToNumber,
    {
        namespaced("is_sorted", "", || {
            let mut sorted = true;
            let mut prev: Option<f64> = None;
            for item in self.drain() {
                let n = item?.to_number()?;
                if let Some(p) = prev {
                    sorted &= in_order(&p, &n);
                }
                prev = Some(n);
            }
            Ok(sorted)
        })
    }

    /// Returns `true` if `less_or_equal` holds for every adjacent pair.
    pub fn is_sorted_by<F>(&mut self, mut less_or_equal: F) -> Result<bool, SeqError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        namespaced("is_sorted_by", "compare", || {
            let mut sorted = true;
            let mut prev: Option<T> = None;
            for item in self.drain() {
                let item = item?;
                if let Some(ref p) = prev {
                    sorted &= less_or_equal(p, &item);
                }
                prev = Some(item);
            }
            Ok(sorted)
        })
    }

    /// Returns `true` if the keys never decrease; an incomparable pair is out of order.
    pub fn is_sorted_by_key<K, F>(&mut self, mut key: F) -> Result<bool, SeqError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        namespaced("is_sorted_by_key", "key", || {
            let mut sorted = true;
            let mut prev: Option<K> = None;
            for item in self.drain() {
                let k = key(&item?);
                if let Some(ref p) = prev {
                    sorted &= in_order(p, &k);
                }
                prev = Some(k);
            }
            Ok(sorted)
        })
    }

    /// The numerically smallest element; the first one wins ties.
    pub fn min(&mut self) -> Result<Maybe<T>, SeqError>
    where
        T: ToNumber,
    {
        namespaced("min", "", || {
            self.select_numeric(|candidate, best| candidate < best)
        })
    }

    /// The numerically largest element; the last one wins ties.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut seq = Seq::from_iter(vec![1.0, 3.5, -2.0]);
    /// assert_eq!(seq.max().unwrap(), Maybe::Some(3.5));
    /// ```
    pub fn max(&mut self) -> Result<Maybe<T>, SeqError>
    where
        T: ToNumber,
    {
        namespaced("max", "", || {
            self.select_numeric(|candidate, best| candidate >= best)
        })
    }

    fn select_numeric<F>(&mut self, mut replaces: F) -> Result<Maybe<T>, SeqError>
    where
        T: ToNumber,
        F: FnMut(f64, f64) -> bool,
    {
        let mut best: Option<(T, f64)> = None;
        for item in self.drain() {
            let item = item?;
            let n = item.to_number()?;
            best = match best {
                Some((_, b)) if replaces(n, b) => Some((item, n)),
                Some(kept) => Some(kept),
                None => Some((item, n)),
            };
        }
        Ok(best.map(|(item, _)| item).into())
    }

    /// The smallest element under `compare`; the first one wins ties.
    ///
    /// Elements are compared in one pass rather than sorted, so among equal
    /// minima this keeps the earliest, as [`Iterator::min_by`] does.
    pub fn min_by<F>(&mut self, mut compare: F) -> Result<Maybe<T>, SeqError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        namespaced("min_by", "compare", || {
            self.select_by(|candidate, best| compare(candidate, best) == Ordering::Less)
        })
    }

    /// The largest element under `compare`; the last one wins ties.
    ///
    /// Elements are compared in one pass rather than sorted, so among equal
    /// maxima this keeps the latest, as [`Iterator::max_by`] does.
    pub fn max_by<F>(&mut self, mut compare: F) -> Result<Maybe<T>, SeqError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        namespaced("max_by", "compare", || {
            self.select_by(|candidate, best| compare(candidate, best) != Ordering::Less)
        })
    }

    /// The element with the smallest key; the last one wins ties.
    ///
    /// ```rust
    /// use pullseq::{Maybe, Seq};
    ///
    /// let mut words = Seq::from_iter(vec!["bb", "a", "c"]);
    /// assert_eq!(words.min_by_key(|w| w.len()).unwrap(), Maybe::Some("c"));
    /// ```
    pub fn min_by_key<K, F>(&mut self, mut key: F) -> Result<Maybe<T>, SeqError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        namespaced("min_by_key", "key", || {
            self.select_by_key(&mut key, |candidate, best| {
                partial_order(candidate, best) != Ordering::Greater
            })
        })
    }

    /// The element with the largest key; the last one wins ties.
    pub fn max_by_key<K, F>(&mut self, mut key: F) -> Result<Maybe<T>, SeqError>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        namespaced("max_by_key", "key", || {
            self.select_by_key(&mut key, |candidate, best| {
                partial_order(candidate, best) != Ordering::Less
            })
        })
    }

    fn select_by<F>(&mut self, mut replaces: F) -> Result<Maybe<T>, SeqError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut best = Maybe::None;
        for item in self.drain() {
            let item = item?;
            best = match best {
                Maybe::Some(b) if !replaces(&item, &b) => Maybe::Some(b),
                _ => Maybe::Some(item),
            };
        }
        Ok(best)
    }

    fn select_by_key<K, F, R>(&mut self, key: &mut F, mut replaces: R) -> Result<Maybe<T>, SeqError>
    where
        F: FnMut(&T) -> K,
        R: FnMut(&K, &K) -> bool,
    {
        let mut best: Option<(T, K)> = None;
        for item in self.drain() {
            let item = item?;
            let k = key(&item);
            best = match best {
                Some((b, bk)) if !replaces(&k, &bk) => Some((b, bk)),
                _ => Some((item, k)),
            };
        }
        Ok(best.map(|(item, _)| item).into())
    }
}

impl<A: 'static, B: 'static> Seq<(A, B)> {
    /// Split a sequence of pairs into two collections.
    pub fn unzip<FromA, FromB>(&mut self) -> Result<(FromA, FromB), SeqError>
    where
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        namespaced("unzip", "", || {
            let (mut left, mut right) = (FromA::default(), FromB::default());
            for pair in self.drain() {
                let (a, b) = pair?;
                left.extend(Some(a));
                right.extend(Some(b));
            }
            Ok((left, right))
        })
    }
}

/// `a <= b`; an incomparable pair is out of order.
fn in_order<K: PartialOrd>(a: &K, b: &K) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal))
}

/// Incomparable values order as equal.
fn partial_order<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
