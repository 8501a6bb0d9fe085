//! Common types and utilities shared across pagesim.
//!
//! This module contains the primitives used throughout the crate:
//! - Configuration constants and [`SimConfig`](config::SimConfig)
//! - Error types
//! - The validated [`FrameSize`]

pub mod config;
pub mod error;
mod frame_size;

pub use error::{Error, Result};
pub use frame_size::FrameSize;
