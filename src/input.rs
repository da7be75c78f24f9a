//! Puzzle input loading.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Reads `path` and splits it into lines.
///
/// A single trailing empty line left by a final newline is dropped; any other
/// blank lines are kept, since puzzle inputs often use them as separators.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(split_lines(&contents))
}

/// Reads the file named by the first command line argument
pub fn read_lines_from_args() -> Result<Vec<String>> {
    let path = std::env::args().nth(1).ok_or(Error::MissingInputPath)?;
    read_lines(path)
}

pub fn split_lines(contents: &str) -> Vec<String> {
    let mut lines: Vec<String> = contents.split('\n').map(str::to_string).collect();
    if lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }
    lines
}
