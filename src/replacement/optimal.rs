//! Optimal (Belady / clairvoyant) replacement policy.
//!
//! On a fault with full frames, evicts the resident page whose next
//! reference lies furthest in the future. A page that is never referenced
//! again beats any page with a finite next use.
//!
//! # Performance
//! - `access()`: O(F × N) on eviction, a forward scan of the remaining
//!   reference string for each of the F resident pages
//!
//! Fine for classroom-sized inputs. Precomputing a next-occurrence table
//! would make eviction O(F) without changing any decision.

use std::hash::Hash;

use tracing::trace;

use super::{Access, FrameStore, RunStats, Simulator};
use crate::common::FrameSize;

/// When a page is next referenced after the current position.
///
/// Ordered so that `Never` is greater than every `At`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    At(usize),
    Never,
}

/// Find the first position strictly after `position` that references `page`.
pub fn next_use<P: PartialEq>(reference: &[P], position: usize, page: &P) -> NextUse {
    reference
        .iter()
        .enumerate()
        .skip(position + 1)
        .find(|(_, p)| *p == page)
        .map_or(NextUse::Never, |(at, _)| NextUse::At(at))
}

/// An Optimal page-replacement simulator.
pub struct OptimalSimulator<P> {
    frames: FrameStore<P>,
    stats: RunStats,
}

impl<P: Eq + Hash + Clone> OptimalSimulator<P> {
    /// Create an Optimal simulator with empty frames.
    pub fn new(frames: FrameSize) -> Self {
        Self {
            frames: FrameStore::new(frames),
            stats: RunStats::new(),
        }
    }

    /// The resident page used furthest in the future.
    ///
    /// Ties (in practice, several pages that are never used again) keep the
    /// first page in resident order.
    fn victim(&self, reference: &[P], position: usize) -> Option<P> {
        let mut victim: Option<(&P, NextUse)> = None;
        for page in &self.frames {
            let next = next_use(reference, position, page);
            match victim {
                Some((_, furthest)) if next <= furthest => {}
                _ => victim = Some((page, next)),
            }
        }
        victim.map(|(page, _)| page.clone())
    }
}

impl<P: Eq + Hash + Clone> Simulator<P> for OptimalSimulator<P> {
    fn access(&mut self, position: usize, reference: &[P]) -> Access<P> {
        let page = &reference[position];

        let access = if self.frames.contains(page) {
            Access::Hit
        } else {
            let mut evicted = None;
            if self.frames.is_full() {
                if let Some(victim) = self.victim(reference, position) {
                    self.frames.remove(&victim);
                    evicted = Some(victim);
                }
            }
            self.frames.insert(page.clone());
            trace!(position, evicted = evicted.is_some(), "optimal fault");
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

    fn sim(frames: usize) -> OptimalSimulator<u32> {
        OptimalSimulator::new(FrameSize::new(frames).unwrap())
    }

    #[test]
    fn test_next_use() {
        let reference = [1, 2, 3, 1, 2];
        assert_eq!(next_use(&reference, 0, &1), NextUse::At(3));
        assert_eq!(next_use(&reference, 3, &1), NextUse::Never);
        assert_eq!(next_use(&reference, 0, &9), NextUse::Never);
        // Strictly after: the current position never counts
        assert_eq!(next_use(&reference, 1, &2), NextUse::At(4));
        assert_eq!(next_use(&reference, 4, &2), NextUse::Never);
    }

    #[test]
    fn test_next_use_ordering() {
        assert!(NextUse::Never > NextUse::At(usize::MAX));
        assert!(NextUse::At(5) > NextUse::At(2));
    }

    #[test]
    fn test_optimal_evicts_furthest() {
        // At position 3, page 1 is next used at 4, page 2 at 6, page 3 at 5
        let reference = [1, 2, 3, 4, 1, 3, 2];
        let mut s = sim(3);
        for position in 0..3 {
            s.access(position, &reference);
        }

        assert_eq!(s.access(3, &reference), Access::Fault { evicted: Some(2) });
    }

    #[test]
    fn test_optimal_never_again_wins() {
        let reference = [1, 2, 3, 1, 2];
        let mut s = sim(2);
        s.access(0, &reference);
        s.access(1, &reference);

        // Neither page is "never again": 1 at 3, 2 at 4 -> evict 2
        assert_eq!(s.access(2, &reference), Access::Fault { evicted: Some(2) });
        assert_eq!(s.access(3, &reference), Access::Hit);
        // 1 and 3 both never used again: first in resident order goes
        assert_eq!(s.access(4, &reference), Access::Fault { evicted: Some(1) });
    }

    #[test]
    fn test_optimal_stats() {
        let reference = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
        let mut s = sim(3);
        for position in 0..reference.len() {
            s.access(position, &reference);
        }

        assert_eq!(s.stats().faults, 7);
        assert_eq!(s.stats().evictions, 4);
    }
}
