//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has been resident the longest. Re-referencing a
//! resident page does not change its position in the queue.

use std::collections::VecDeque;
use std::hash::Hash;

use tracing::trace;

use super::{Access, FrameStore, RunStats, Simulator};
use crate::common::FrameSize;

/// A FIFO page-replacement simulator.
pub struct FifoSimulator<P> {
    frames: FrameStore<P>,

    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<P>,

    stats: RunStats,
}

impl<P: Eq + Hash + Clone> FifoSimulator<P> {
    /// Create a FIFO simulator with empty frames.
    pub fn new(frames: FrameSize) -> Self {
        Self {
            frames: FrameStore::new(frames),
            queue: VecDeque::with_capacity(frames.get()),
            stats: RunStats::new(),
        }
    }
}

impl<P: Eq + Hash + Clone> Simulator<P> for FifoSimulator<P> {
    fn access(&mut self, position: usize, reference: &[P]) -> Access<P> {
        let page = &reference[position];

        let access = if self.frames.contains(page) {
            Access::Hit
        } else {
            let mut evicted = None;
            if self.frames.is_full() {
                if let Some(oldest) = self.queue.pop_front() {
                    self.frames.remove(&oldest);
                    evicted = Some(oldest);
                }
            }
            self.frames.insert(page.clone());
            self.queue.push_back(page.clone());
            trace!(position, evicted = evicted.is_some(), "fifo fault");
            Access::Fault { evicted }
        };

        self.stats.record(&access);
        access
    }

    fn frames(&self) -> &FrameStore<P> {
        &self.frames
    }

    fn stats(&self) -> RunStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(frames: usize) -> FifoSimulator<u32> {
        FifoSimulator::new(FrameSize::new(frames).unwrap())
    }

    #[test]
    fn test_fifo_basic() {
        let reference = [1, 2, 3, 4];
        let mut s = sim(3);

        assert_eq!(s.access(0, &reference), Access::Fault { evicted: None });
        assert_eq!(s.access(1, &reference), Access::Fault { evicted: None });
        assert_eq!(s.access(2, &reference), Access::Fault { evicted: None });

        // Full: oldest arrival goes first
        assert_eq!(s.access(3, &reference), Access::Fault { evicted: Some(1) });
        assert_eq!(s.frames().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let reference = [0, 1, 0, 2];
        let mut s = sim(2);

        s.access(0, &reference);
        s.access(1, &reference);
        assert_eq!(s.access(2, &reference), Access::Hit); // Hit should NOT reorder

        // FIFO: page 0 arrived first, so it is evicted despite the recent hit
        assert_eq!(s.access(3, &reference), Access::Fault { evicted: Some(0) });
    }

    #[test]
    fn test_fifo_stats() {
        let reference = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
        let mut s = sim(3);
        for position in 0..reference.len() {
            s.access(position, &reference);
        }

        let stats = s.stats();
        assert_eq!(stats.faults, 9);
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.evictions, 6);
    }
}
