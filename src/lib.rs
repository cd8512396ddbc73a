//! # pullseq: lazy, single-pass pull sequences
//!
//! A [`Seq<T>`] wraps a [`Producer`] and hands out its elements one pull at a
//! time. Combinators build new sequences without pulling anything; terminal
//! operations drain them.
//!
//! ## Core Types
//!
//! - **[`Seq<T>`]**: the sequence handle, with derived combinators, forking,
//!   comparison and terminal operations
//! - **[`Producer`]**: the raw pull protocol behind every sequence
//! - **[`Maybe<T>`]** / **[`Slot<T>`]**: an optional value and its mutable cell
//! - **[`Outcome<T, E>`]**: success or failure
//!
//! ## Ownership
//!
//! A sequence is consumed by the first combinator or terminal operation
//! applied to it. The handle stays in scope, but pulling it again fails with
//! [`SeqError::Consumed`]:
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let mut numbers = seq(vec![1, 2, 3, 4]);
//! let mut evens = numbers.filter(|n| n % 2 == 0);
//!
//! assert_eq!(evens.collect::<Vec<_>>().unwrap(), vec![2, 4]);
//! assert!(numbers.count().unwrap_err().is_consumed());
//! ```
//!
//! Use [`Seq::cloned`] to read the same elements twice:
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let mut left = seq(vec!["a", "b"]);
//! let mut right = left.cloned();
//!
//! assert!(left.eq(right.map(|s| s)).unwrap());
//! ```
//!
//! ## Features
//!
//! - `json` (default): [`serde_json::Value`] crosses the conversion boundary,
//!   so JSON arrays can be flattened and JSON numbers summed.

pub mod build;
pub mod compose;
mod consume;
mod convert;
mod error;
pub mod fork;
mod iter;
mod maybe;
mod order;
mod outcome;
pub mod prelude;
mod producer;
mod seq;
mod slot;

pub use convert::{IntoSeq, ToNumber, TryIntoSeq};
pub use error::{ConversionError, SeqError};
pub use iter::IntoResults;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use producer::{FromFn, Producer, Source};
pub use seq::Seq;
pub use slot::Slot;
