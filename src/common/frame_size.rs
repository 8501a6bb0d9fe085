//! Frame size type.

use std::fmt;

use crate::common::{Error, Result};

/// Number of frames available to a simulator.
///
/// A `FrameSize` is always at least 1; the only way to build one is
/// through [`FrameSize::new`], which rejects zero.
///
/// # Example
/// ```
/// use pagesim::FrameSize;
///
/// let frames = FrameSize::new(3).unwrap();
/// assert_eq!(frames.get(), 3);
/// assert!(FrameSize::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameSize(usize);

impl FrameSize {
    /// Create a new FrameSize.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameSize` if `frames` is 0.
    #[inline]
    pub fn new(frames: usize) -> Result<Self> {
        if frames == 0 {
            return Err(Error::InvalidFrameSize(frames));
        }
        Ok(FrameSize(frames))
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for FrameSize {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        FrameSize::new(frames)
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frames({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_new() {
        let frames = FrameSize::new(10).unwrap();
        assert_eq!(frames.get(), 10);
    }

    #[test]
    fn test_frame_size_rejects_zero() {
        match FrameSize::new(0) {
            Err(Error::InvalidFrameSize(0)) => {}
            other => panic!("Expected InvalidFrameSize, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_size_try_from() {
        assert_eq!(FrameSize::try_from(4).unwrap(), FrameSize::new(4).unwrap());
        assert!(FrameSize::try_from(0).is_err());
    }

    #[test]
    fn test_frame_size_display() {
        assert_eq!(format!("{}", FrameSize::new(42).unwrap()), "Frames(42)");
    }
}
