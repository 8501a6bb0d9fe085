//! Text rendering of a [`Comparison`].
//!
//! Produces the fault summary and a horizontal bar chart with one labelled
//! bar per policy. Everything renders to a `String`; printing is left to
//! the caller.

use std::fmt::Write;

use crate::common::config::{DEFAULT_CHART_WIDTH, MAX_CHART_WIDTH};
use crate::comparison::Comparison;
use crate::replacement::Policy;

const BAR_CHAR: char = '#';

/// How a comparison is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Length of the longest bar, clamped to `1..=MAX_CHART_WIDTH`.
    pub chart_width: usize,
    pub show_chart: bool,
    /// Append per-policy hit/eviction counters.
    pub detailed: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            chart_width: DEFAULT_CHART_WIDTH,
            show_chart: true,
            detailed: false,
        }
    }
}

/// Render the full report.
pub fn render(cmp: &Comparison, options: &ReportOptions) -> String {
    let mut out = summary(cmp);
    if options.detailed {
        out.push('\n');
        out.push_str(&details(cmp));
    }
    if options.show_chart {
        out.push('\n');
        out.push_str(&chart(cmp, options.chart_width));
    }
    out
}

/// Plain fault counts, one line per policy.
///
/// # Example
/// ```
/// use pagesim::comparison::compare;
/// use pagesim::report::summary;
///
/// let cmp = compare(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3).unwrap();
/// assert!(summary(&cmp).contains("FIFO Page Faults: 9"));
/// ```
pub fn summary(cmp: &Comparison) -> String {
    let mut out = String::from("--- Page Fault Summary ---\n");
    for (policy, stats) in cmp.iter() {
        let _ = writeln!(out, "{} Page Faults: {}", policy, stats.faults);
    }
    out
}

/// Full counters per policy.
pub fn details(cmp: &Comparison) -> String {
    let mut out = String::new();
    for (policy, stats) in cmp.iter() {
        let _ = writeln!(out, "{:<width$} {}", policy, stats, width = label_width());
    }
    out
}

/// Horizontal bar chart of fault counts.
///
/// The policy with the most faults gets a bar of `width` characters; the
/// others are scaled against it. A policy with at least one fault always
/// gets at least one character.
pub fn chart(cmp: &Comparison, width: usize) -> String {
    let width = width.clamp(1, MAX_CHART_WIDTH);
    let max = cmp.max_faults();
    let label = label_width();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Page Faults Comparison ({} frames)",
        cmp.frame_size.get()
    );
    for (policy, stats) in cmp.iter() {
        let len = bar_len(stats.faults, max, width);
        let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
        let _ = writeln!(
            out,
            "{:<label$} | {} {}",
            policy.name(),
            bar,
            stats.faults,
            label = label
        );
    }
    out
}

fn bar_len(faults: u64, max: u64, width: usize) -> usize {
    if faults == 0 || max == 0 {
        return 0;
    }
    let scaled = (faults as f64 / max as f64 * width as f64).round() as usize;
    scaled.max(1)
}

fn label_width() -> usize {
    Policy::ALL.iter().map(|p| p.name().len()).max().unwrap_or(0)
}
