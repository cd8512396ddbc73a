//! Endless replay of a sequence.

use tracing::trace;

use super::tee::tee;
use crate::{Maybe, Producer, Seq, SeqError};

/// Replays its source lap after lap.
///
/// The first lap is pulled live through one fork branch while the other
/// branch records it. When a lap ends, the recording seeds the next fork.
pub struct Cycle<T> {
    lap: Seq<T>,
    rest: Seq<T>,
    yielded: bool,
    laps: usize,
}

impl<T: Clone + 'static> Cycle<T> {
    fn new(source: Seq<T>) -> Self {
        let (lap, rest) = tee(source);
        Cycle {
            lap: Seq::derived(lap),
            rest: Seq::derived(rest),
            yielded: false,
            laps: 0,
        }
    }
}

impl<T: Clone + 'static> Producer for Cycle<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Maybe<T>, SeqError> {
        if let Maybe::Some(item) = self.lap.pull()? {
            self.yielded = true;
            return Ok(Maybe::Some(item));
        }
        if !self.yielded {
            return Ok(Maybe::None);
        }

        let mut recorded = Vec::new();
        while let Maybe::Some(item) = self.rest.pull()? {
            recorded.push(item);
        }
        self.laps += 1;
        trace!(lap = self.laps, len = recorded.len(), "cycle restarting");

        *self = Cycle {
            laps: self.laps,
            ..Cycle::new(Seq::from_iter(recorded))
        };
        self.pull()
    }
}

impl<T: Clone + 'static> Seq<T> {
    /// Repeat this sequence forever.
    ///
    /// An empty sequence cycles to an empty sequence.
    ///
    /// ```rust
    /// use pullseq::Seq;
    ///
    /// let mut seq = Seq::from_iter(vec![1, 2]);
    /// let looped = seq.cycle().take(5).collect::<Vec<_>>().unwrap();
    /// assert_eq!(looped, vec![1, 2, 1, 2, 1]);
    /// ```
    pub fn cycle(&mut self) -> Seq<T> {
        Seq::derived(Cycle::new(self.release()))
    }
}
