//! Side-by-side comparison of every replacement policy.
//!
//! [`compare`] runs FIFO, LRU and Optimal over the same reference string
//! and frame size. Each policy gets its own simulator, so the three runs
//! share nothing and [`compare_parallel`] can run them on scoped threads.

use std::hash::Hash;
use std::thread;

use tracing::debug;

use crate::common::{FrameSize, Result};
use crate::replacement::{Policy, RunStats};

/// Results of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub frame_size: FrameSize,
    pub fifo: RunStats,
    pub lru: RunStats,
    pub optimal: RunStats,
}

impl Comparison {
    /// Stats for a single policy.
    pub fn get(&self, policy: Policy) -> &RunStats {
        match policy {
            Policy::Fifo => &self.fifo,
            Policy::Lru => &self.lru,
            Policy::Optimal => &self.optimal,
        }
    }

    /// Fault count for a single policy.
    pub fn faults(&self, policy: Policy) -> u64 {
        self.get(policy).faults
    }

    /// `(policy, stats)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &RunStats)> + '_ {
        Policy::ALL.into_iter().map(move |policy| (policy, self.get(policy)))
    }

    /// Largest fault count across all policies.
    pub fn max_faults(&self) -> u64 {
        self.iter().map(|(_, stats)| stats.faults).max().unwrap_or(0)
    }
}

/// Run every policy, one after the other.
///
/// # Errors
/// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
pub fn compare<P: Eq + Hash + Clone>(reference: &[P], frame_size: usize) -> Result<Comparison> {
    let frames = FrameSize::new(frame_size)?;
    debug!(references = reference.len(), frames = frame_size, "comparing policies");

    Ok(Comparison {
        frame_size: frames,
        fifo: Policy::Fifo.run(reference, frame_size)?,
        lru: Policy::Lru.run(reference, frame_size)?,
        optimal: Policy::Optimal.run(reference, frame_size)?,
    })
}

/// Run every policy on its own thread.
///
/// Produces exactly the same [`Comparison`] as [`compare`].
///
/// # Errors
/// Returns `Error::InvalidFrameSize` if `frame_size` is 0.
pub fn compare_parallel<P>(reference: &[P], frame_size: usize) -> Result<Comparison>
where
    P: Eq + Hash + Clone + Sync,
{
    let frames = FrameSize::new(frame_size)?;
    debug!(references = reference.len(), frames = frame_size, "comparing policies in parallel");

    let [fifo, lru, optimal] = thread::scope(|s| {
        let handles = Policy::ALL.map(|policy| s.spawn(move || policy.run(reference, frame_size)));
        handles.map(|handle| match handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        })
    });

    Ok(Comparison {
        frame_size: frames,
        fifo: fifo?,
        lru: lru?,
        optimal: optimal?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_compare_basic() {
        let cmp = compare(&BELADY, 3).unwrap();

        assert_eq!(cmp.frame_size.get(), 3);
        assert_eq!(cmp.faults(Policy::Fifo), 9);
        assert_eq!(cmp.faults(Policy::Lru), 10);
        assert_eq!(cmp.faults(Policy::Optimal), 7);
        assert_eq!(cmp.max_faults(), 10);
    }

    #[test]
    fn test_compare_iter_order() {
        let cmp = compare(&BELADY, 4).unwrap();
        let faults: Vec<_> = cmp.iter().map(|(p, s)| (p, s.faults)).collect();

        assert_eq!(
            faults,
            vec![(Policy::Fifo, 10), (Policy::Lru, 8), (Policy::Optimal, 6)]
        );
    }

    #[test]
    fn test_compare_parallel_matches_sequential() {
        for frames in 1..=5 {
            assert_eq!(
                compare_parallel(&BELADY, frames).unwrap(),
                compare(&BELADY, frames).unwrap()
            );
        }
    }

    #[test]
    fn test_compare_zero_frames() {
        assert!(matches!(compare(&BELADY, 0), Err(Error::InvalidFrameSize(0))));
        assert!(matches!(
            compare_parallel(&BELADY, 0),
            Err(Error::InvalidFrameSize(0))
        ));
    }

    #[test]
    fn test_compare_empty_reference() {
        let empty: [u32; 0] = [];
        let cmp = compare(&empty, 2).unwrap();
        assert_eq!(cmp.max_faults(), 0);
    }
}
