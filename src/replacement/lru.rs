//! LRU (Least Recently Used) replacement policy.
//!
//! Tracks the position of every page's most recent reference. On a fault
//! with full frames, the resident page whose last reference is furthest
//! back is evicted.
//!
//! # Performance
//! - `access()`: O(F) on eviction, where F is the frame size
//! - Space: O(D) where D is the number of distinct pages seen

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use super::{Access, FrameStore, RunStats, Simulator};
use crate::common::FrameSize;

/// An LRU page-replacement simulator.
pub struct LruSimulator<P> {
    frames: FrameStore<P>,

    /// Page -> position of its most recent reference.
    ///
    /// Entries outlive eviction; only resident pages are ever consulted.
    last_used: HashMap<P, usize>,

    stats: RunStats,
}

impl<P: Eq + Hash + Clone> LruSimulator<P> {
    /// Create an LRU simulator with empty frames.
    pub fn new(frames: FrameSize) -> Self {
        Self {
            frames: FrameStore::new(frames),
            last_used: HashMap::new(),
            stats: RunStats::new(),
        }
    }

    /// The resident page with the smallest recorded position.
    ///
    /// Ties keep the first page in resident order.
    fn victim(&self) -> Option<P> {
        let mut victim: Option<(&P, usize)> = None;
        for page in &self.frames {
            let last = self.last_used.get(page).copied().unwrap_or(0);
            match victim {
                Some((_, oldest)) if oldest <= last => {}
                _ => victim = Some((page, last)),
            }
        }
        victim.map(|(page, _)| page.clone())
    }
}

impl<P: Eq + Hash + Clone> Simulator<P> for LruSimulator<P> {
    fn access(&mut self, position: usize, reference: &[P]) -> Access<P> {
        let page = &reference[position];

        let access = if self.frames.contains(page) {
            Access::Hit
        } else {
            let mut evicted = None;
            if self.frames.is_full() {
                if let Some(victim) = self.victim() {
                    self.frames.remove(&victim);
                    evicted = Some(victim);
                }
            }
            self.frames.insert(page.clone());
            trace!(position, evicted = evicted.is_some(), "lru fault");
            Access::Fault { evicted }
        };

        // Recency moves on every reference, after the eviction decision.
        self.last_used.insert(page.clone(), position);

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
