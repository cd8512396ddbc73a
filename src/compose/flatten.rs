//! Flattening nested sequences.

use crate::{Maybe, Producer, Seq, SeqError, TryIntoSeq};

/// Yields the elements of each element in turn.
///
/// An element that is not sequence-like fails the pull that reached it with
/// [`SeqError::Flatten`].
pub struct Flatten<T>
where
    T: TryIntoSeq,
{
    seq: Seq<T>,
    current: Option<Seq<T::Item>>,
}

impl<T> Producer for Flatten<T>
where
    T: TryIntoSeq + 'static,
    T::Item: 'static,
{
    type Item = T::Item;

    fn pull(&mut self) -> Result<Maybe<T::Item>, SeqError> {
        loop {
            if let Some(ref mut inner) = self.current {
                match inner.pull()? {
                    Maybe::Some(item) => return Ok(Maybe::Some(item)),
                    Maybe::None => self.current = None,
                }
            }
            match self.seq.pull()? {
                Maybe::Some(element) => {
                    let inner = element.try_into_seq().map_err(SeqError::Flatten)?;
                    self.current = Some(inner);
                }
                Maybe::None => return Ok(Maybe::None),
            }
        }
    }
}

impl<T> Seq<T>
where
    T: TryIntoSeq + 'static,
    T::Item: 'static,
{
    /// Yield the elements of every element in turn.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut nested = Seq::from_iter(vec![vec![1, 2], vec![], vec![3]]);
    /// assert_eq!(nested.flatten().collect::<Vec<_>>().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(&mut self) -> Seq<T::Item> {
        Seq::derived(Flatten {
            seq: self.release(),
            current: None,
        })
    }
}

impl<T: 'static> Seq<T> {
    /// Map every element to a sequence and flatten the result.
    pub fn flat_map<U, F>(&mut self, f: F) -> Seq<U::Item>
    where
        U: TryIntoSeq + 'static,
        U::Item: 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.map(f).flatten()
    }
}
