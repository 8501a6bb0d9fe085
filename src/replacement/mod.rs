//! Page-replacement policies.
//!
//! Each simulator owns an independent [`FrameStore`] and walks a reference
//! string one position at a time:
//! - [`FifoSimulator`] - evicts the longest-resident page
//! - [`LruSimulator`] - evicts the least recently referenced page
//! - [`OptimalSimulator`] - evicts the page used furthest in the future
//!
//! The free functions [`fifo`], [`lru`] and [`optimal`] run a whole
//! reference string and return the fault count. They are pure: no state
//! survives between calls.

mod fifo;
mod frame_store;
mod lru;
mod optimal;
mod stats;

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::common::{FrameSize, Result};

pub use fifo::FifoSimulator;
pub use frame_store::FrameStore;
pub use lru::LruSimulator;
pub use optimal::{next_use, NextUse, OptimalSimulator};
pub use stats::RunStats;

/// Outcome of a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,

    /// The page had to be loaded, displacing `evicted` if frames were full.
    Fault { evicted: Option<P> },
}

impl<P> Access<P> {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// A stateful page-replacement simulator.
///
/// Callers feed positions in increasing order, starting at 0, always with
/// the same reference string. Optimal needs the whole string for lookahead,
/// which is why every call receives it.
pub trait Simulator<P> {
    /// Process `reference[position]`.
    fn access(&mut self, position: usize, reference: &[P]) -> Access<P>;

    /// Pages currently resident.
    fn frames(&self) -> &FrameStore<P>;

    /// Counters accumulated so far.
    fn stats(&self) -> RunStats;
}

/// Drive `simulator` over the entire reference string.
pub fn simulate<P, S: Simulator<P>>(mut simulator: S, reference: &[P]) -> RunStats {
    for position in 0..reference.len() {
        simulator.access(position, reference);
    }
    simulator.stats()
}

/// The available replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display label.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Run this policy over `reference` with `frame_size` frames.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
    pub fn run<P: Eq + Hash + Clone>(self, reference: &[P], frame_size: usize) -> Result<RunStats> {
        let frames = FrameSize::new(frame_size)?;
        let stats = match self {
            Policy::Fifo => simulate(FifoSimulator::new(frames), reference),
            Policy::Lru => simulate(LruSimulator::new(frames), reference),
            Policy::Optimal => simulate(OptimalSimulator::new(frames), reference),
        };
        debug!(policy = self.name(), frames = frame_size, faults = stats.faults, "policy finished");
        Ok(stats)
    }

    /// Fault count of this policy over `reference`.
    pub fn faults<P: Eq + Hash + Clone>(self, reference: &[P], frame_size: usize) -> Result<usize> {
        Ok(self.run(reference, frame_size)?.faults as usize)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Count FIFO page faults.
///
/// # Example
/// ```
/// assert_eq!(pagesim::fifo(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3).unwrap(), 9);
/// ```
///
/// # Errors
/// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
pub fn fifo<P: Eq + Hash + Clone>(reference: &[P], frame_size: usize) -> Result<usize> {
    Policy::Fifo.faults(reference, frame_size)
}

/// Count LRU page faults.
///
/// # Errors
/// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
pub fn lru<P: Eq + Hash + Clone>(reference: &[P], frame_size: usize) -> Result<usize> {
    Policy::Lru.faults(reference, frame_size)
}

/// Count Optimal page faults.
///
/// # Errors
/// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
pub fn optimal<P: Eq + Hash + Clone>(reference: &[P], frame_size: usize) -> Result<usize> {
    Policy::Optimal.faults(reference, frame_size)
}
