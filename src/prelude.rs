//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Maybe, Outcome, Producer, Seq, SeqError, Slot};

// Conversion boundary
pub use crate::{IntoSeq, ToNumber, TryIntoSeq};

// Most common constructors
pub use crate::build::{empty, from_fn, once, repeat, seq, successors};
