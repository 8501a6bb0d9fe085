//! Per-run statistics for a simulator.

use std::fmt;

use super::Access;

/// Counters collected while a simulator walks a reference string.
///
/// `faults` is the number every entry point ultimately reports; the other
/// counters come for free and are shown in the detailed summary.
///
/// # Example
/// ```
/// use pagesim::replacement::Policy;
///
/// let stats = Policy::Fifo.run(&[1, 2, 1, 3], 2).unwrap();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.evictions, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of references processed.
    pub references: u64,

    /// Number of references that found their page resident.
    pub hits: u64,

    /// Number of references that had to load their page.
    pub faults: u64,

    /// Number of faults that displaced a resident page.
    pub evictions: u64,
}

impl RunStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for the outcome of one reference.
    pub fn record<P>(&mut self, access: &Access<P>) {
        self.references += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.references,
            self.faults,
            self.hits,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = RunStats::new();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = RunStats::new();

        stats.record::<u32>(&Access::Fault { evicted: None });
        stats.record::<u32>(&Access::Hit);
        stats.record(&Access::Fault { evicted: Some(7u32) });
        stats.record::<u32>(&Access::Hit);

        assert_eq!(stats.references, 4);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.fault_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let stats = RunStats {
            references: 20,
            hits: 5,
            faults: 15,
            evictions: 12,
        };
        let display = format!("{}", stats);

        assert!(display.contains("faults: 15"));
        assert!(display.contains("evictions: 12"));
        assert!(display.contains("75.00%"));
    }
}
