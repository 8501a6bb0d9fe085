//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`
/// (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulators themselves only ever return [`Error::InvalidFrameSize`].
/// Every other variant comes from the input layer, which must reject bad
/// input before a simulator is invoked.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference-string file or the console.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame size must hold at least one page.
    #[error("Invalid frame size: {0} (must be at least 1)")]
    InvalidFrameSize(usize),

    /// The input source produced no pages at all.
    #[error("Reference string is empty")]
    EmptyReferenceString,

    /// A token in the reference string is not a page number.
    ///
    /// `position` is the zero-based index of the token within its row.
    #[error("Invalid page {token:?} at position {position}")]
    InvalidPage { token: String, position: usize },

    /// The frame size text could not be parsed as an integer.
    #[error("Invalid frame size input: {0:?}")]
    InvalidFrameInput(String),

    /// Interactive menu received something other than `1` or `2`.
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),
}
