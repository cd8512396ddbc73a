//! Derived sequences.
//!
//! Every combinator here releases its parent and returns a new, fused
//! [`Seq`](crate::Seq). Nothing is pulled until the derived sequence is.

mod chain;
mod flatten;
mod map;
mod slice;

pub use chain::{Chain, Intersperse, Zip};
pub use flatten::Flatten;
pub use map::{Enumerate, Filter, FilterMap, Inspect, Map, MapWhile, Scan};
pub use slice::{Skip, SkipWhile, StepBy, Take, TakeWhile};
