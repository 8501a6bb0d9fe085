//! pagesim - compare page-replacement policies on a reference string.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           pagesim                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │   input/          SimConfig → Workload (pages, frame size)   │
//! │                              ↓                               │
//! │   comparison/     runs every policy on the same workload     │
//! │                              ↓                               │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │  replacement/   FIFO | LRU | Optimal                   │  │
//! │  │                 one FrameStore per simulator per run   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                              ↓                               │
//! │   report/         summary text + bar chart                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameSize, Error, config)
//! - [`replacement`] - The simulators and their frame store
//! - [`comparison`] - Runs all policies side by side
//! - [`input`] - Reference-string parsing and the interactive prompt
//! - [`report`] - Text summary and chart
//!
//! # Quick Start
//! ```
//! use pagesim::comparison::compare;
//!
//! let reference = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
//! let cmp = compare(&reference, 3).unwrap();
//!
//! assert_eq!(cmp.fifo.faults, 10);
//! assert_eq!(cmp.lru.faults, 9);
//! assert_eq!(cmp.optimal.faults, 7);
//! ```

pub mod common;
pub mod comparison;
pub mod input;
pub mod replacement;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameSize, Result};

pub use comparison::{compare, compare_parallel, Comparison};
pub use replacement::{fifo, lru, optimal, Policy, RunStats};
