//! The conversion boundary.
//!
//! Three traits decide what may enter a sequence:
//!
//! - [`IntoSeq`] for values that are always sequence-like (anything
//!   iterable, and `Seq` itself).
//! - [`TryIntoSeq`] for values that may or may not be sequence-like, used by
//!   [`Seq::flatten`] on each element.
//! - [`ToNumber`] for elements of numeric folds and comparisons.
//!
//! With the `json` feature, [`serde_json::Value`] implements the fallible
//! pair: arrays flatten, numbers sum.

use std::collections::VecDeque;

use crate::{ConversionError, Maybe, Outcome, Seq};

/// Infallible conversion into a [`Seq`].
pub trait IntoSeq {
    type Item;

    fn into_seq(self) -> Seq<Self::Item>;
}

impl<I> IntoSeq for I
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    type Item = I::Item;

    fn into_seq(self) -> Seq<Self::Item> {
        Seq::from_iter(self)
    }
}

impl<T: 'static> IntoSeq for Seq<T> {
    type Item = T;

    fn into_seq(self) -> Seq<T> {
        self
    }
}

/// Fallible conversion into a [`Seq`].
///
/// ```rust
/// use pullseq::{ConversionError, TryIntoSeq};
///
/// let mut seq = vec![1, 2].try_into_seq().unwrap();
/// assert_eq!(seq.count().unwrap(), 2);
///
/// # #[cfg(feature = "json")]
/// assert_eq!(
///     serde_json::json!("text").try_into_seq().unwrap_err(),
///     ConversionError::Sequence,
/// );
/// ```
pub trait TryIntoSeq {
    type Item;

    fn try_into_seq(self) -> Result<Seq<Self::Item>, ConversionError>;
}

impl<T: 'static> TryIntoSeq for Seq<T> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(self)
    }
}

impl<T: 'static> TryIntoSeq for Vec<T> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

impl<T: 'static, const N: usize> TryIntoSeq for [T; N] {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

impl<T: 'static> TryIntoSeq for VecDeque<T> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

impl<T: 'static> TryIntoSeq for Maybe<T> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

impl<T: 'static> TryIntoSeq for Option<T> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

impl<T: 'static, E> TryIntoSeq for Outcome<T, E> {
    type Item = T;

    fn try_into_seq(self) -> Result<Seq<T>, ConversionError> {
        Ok(Seq::from_iter(self))
    }
}

#[cfg(feature = "json")]
impl TryIntoSeq for serde_json::Value {
    type Item = serde_json::Value;

    fn try_into_seq(self) -> Result<Seq<Self::Item>, ConversionError> {
        match self {
            serde_json::Value::Array(items) => Ok(Seq::from_iter(items)),
            _ => Err(ConversionError::Sequence),
        }
    }
}

/// Numeric view of an element, used by `sum`, `product`, `min`, `max`, `cmp`
/// and `is_sorted`.
pub trait ToNumber {
    fn to_number(&self) -> Result<f64, ConversionError>;
}

macro_rules! impl_to_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToNumber for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn to_number(&self) -> Result<f64, ConversionError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_to_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> ToNumber for &T
where
    T: ToNumber + ?Sized,
{
    fn to_number(&self) -> Result<f64, ConversionError> {
        (**self).to_number()
    }
}

#[cfg(feature = "json")]
impl ToNumber for serde_json::Value {
    fn to_number(&self) -> Result<f64, ConversionError> {
        self.as_f64().ok_or(ConversionError::Number)
    }
}
