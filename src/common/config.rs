//! Configuration for a simulation run.

use std::path::PathBuf;

/// Default width of the longest bar in the fault chart, in characters.
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Upper bound on the chart width accepted from the command line.
///
/// Wider charts wrap on ordinary terminals and stop being readable.
pub const MAX_CHART_WIDTH: usize = 200;

/// Separator between values in a reference-string file row.
pub const FILE_DELIMITER: char = ',';

/// Where the reference string comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pages typed directly, separated by whitespace and/or commas.
    Manual(String),

    /// A delimited text file; only its first row is read.
    File(PathBuf),
}

/// Everything needed to produce a [`Workload`](crate::input::Workload).
///
/// `frame_size` is kept as the raw number the user supplied. Validation
/// happens in [`input::resolve`](crate::input::resolve), never here.
///
/// # Example
/// ```
/// use pagesim::common::config::{InputSource, SimConfig};
///
/// let config = SimConfig::new(InputSource::Manual("1 2 3".into()), 3);
/// assert_eq!(config.frame_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub source: InputSource,
    pub frame_size: usize,
}

impl SimConfig {
    pub fn new(source: InputSource, frame_size: usize) -> Self {
        Self { source, frame_size }
    }
}
