//! Reference-string input.
//!
//! Turns user input into a validated [`Workload`]. Two sources exist:
//! - manual entry: page numbers separated by whitespace and/or commas
//! - a delimited file: the first row, comma-separated, values trimmed
//!
//! Nothing reaches the simulators unless the reference string is non-empty
//! and the frame size is at least 1.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::common::config::{InputSource, SimConfig, FILE_DELIMITER};
use crate::common::{Error, FrameSize, Result};

/// Page number as read from user input.
pub type Page = u64;

/// A validated simulation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub pages: Vec<Page>,
    pub frame_size: FrameSize,
}

impl Workload {
    /// Validate and bundle a reference string with a frame size.
    ///
    /// # Errors
    /// - `Error::EmptyReferenceString` if `pages` is empty
    /// - `Error::InvalidFrameSize` if `frame_size` is 0
    pub fn new(pages: Vec<Page>, frame_size: usize) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyReferenceString);
        }
        let frame_size = FrameSize::new(frame_size)?;
        Ok(Self { pages, frame_size })
    }
}

/// Resolve a configuration into a workload, reading the file if needed.
///
/// # Errors
/// Any parse or I/O failure, an empty reference string, or a zero frame size.
pub fn resolve(config: &SimConfig) -> Result<Workload> {
    let pages = match &config.source {
        InputSource::Manual(text) => parse_pages(text)?,
        InputSource::File(path) => read_pages_from_file(path)?,
    };
    let workload = Workload::new(pages, config.frame_size)?;
    info!(
        pages = workload.pages.len(),
        frames = workload.frame_size.get(),
        "workload resolved"
    );
    Ok(workload)
}

/// Parse manually entered pages.
///
/// Tokens may be separated by any mix of whitespace and commas.
///
/// # Example
/// ```
/// use pagesim::input::parse_pages;
///
/// assert_eq!(parse_pages("7 0, 1,2").unwrap(), vec![7, 0, 1, 2]);
/// assert!(parse_pages("7 x").is_err());
/// ```
pub fn parse_pages(text: &str) -> Result<Vec<Page>> {
    text.split(|c: char| c.is_whitespace() || c == FILE_DELIMITER)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| parse_page(token, position))
        .collect()
}

/// Parse one delimited row. Every field must hold a page number.
pub fn parse_row(row: &str) -> Result<Vec<Page>> {
    if row.trim().is_empty() {
        return Ok(Vec::new());
    }
    row.split(FILE_DELIMITER)
        .enumerate()
        .map(|(position, token)| parse_page(token.trim(), position))
        .collect()
}

/// Read the first row of a delimited file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidPage` if a field is not a page number
pub fn read_pages_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Page>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let row = contents.lines().next().unwrap_or("");
    let row = row.strip_prefix('\u{feff}').unwrap_or(row);

    let pages = parse_row(row)?;
    debug!(path = %path.display(), pages = pages.len(), "read reference string");
    Ok(pages)
}

/// Parse a frame size as typed by the user.
///
/// Zero parses fine; [`Workload::new`] is where it gets rejected.
pub fn parse_frame_size(text: &str) -> Result<usize> {
    let text = text.trim();
    text.parse()
        .map_err(|_| Error::InvalidFrameInput(text.to_string()))
}

fn parse_page(token: &str, position: usize) -> Result<Page> {
    token.parse().map_err(|_| Error::InvalidPage {
        token: token.to_string(),
        position,
    })
}

/// Ask the user for a workload on `output`, reading answers from `input`.
///
/// ```text
/// Enter '1' to input manually, '2' to read from CSV file: 2
/// Enter the path to the CSV file: refs.csv
/// Page reference string loaded: [7, 0, 1, 2]
/// Enter the frame size: 3
/// ```
///
/// # Errors
/// An unknown menu choice, unparsable input, an empty reference string,
/// a zero frame size, or end of input before all answers were given.
pub fn prompt_workload<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Workload> {
    let choice = prompt(
        input,
        output,
        "Enter '1' to input manually, '2' to read from CSV file: ",
    )?;

    let pages = match choice.as_str() {
        "1" => {
            let text = prompt(
                input,
                output,
                "Enter the page reference string (space separated): ",
            )?;
            parse_pages(&text)?
        }
        "2" => {
            let path = prompt(input, output, "Enter the path to the CSV file: ")?;
            let pages = read_pages_from_file(&path)?;
            if pages.is_empty() {
                return Err(Error::EmptyReferenceString);
            }
            writeln!(output, "Page reference string loaded: {:?}", pages)?;
            pages
        }
        _ => return Err(Error::InvalidChoice(choice)),
    };

    let frames = prompt(input, output, "Enter the frame size: ")?;
    Workload::new(pages, parse_frame_size(&frames)?)
}

/// Print `message` and read one trimmed line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input ended before an answer was given",
        )));
    }
    Ok(line.trim().to_string())
}
