//! Forking a sequence into independent readers.
//!
//! [`Seq::cloned`](crate::Seq::cloned) tees a sequence into two branches that
//! each see every remaining element; [`Seq::cycle`](crate::Seq::cycle) builds
//! on the same tee to replay a sequence forever.

mod cycle;
mod tee;

pub use cycle::Cycle;
pub use tee::Branch;
