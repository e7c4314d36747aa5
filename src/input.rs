//! Input reading for repoherd.
//!
//! The repositories file is UTF-8 text with one `owner/name`-style
//! identifier per line. `Identifiers` is a lazy, single forward pass over
//! that source: identifiers come out in file order, empty lines produce no
//! identifier, and a trailing newline does not synthesize a spurious empty
//! final identifier.
//!
//! Failing to open the file is the one fatal condition in the system; it
//! is surfaced as [`Error::Input`] so the run can abort with a clear
//! diagnostic before any task is dispatched.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{Error, Result};

/// Open the repositories file and return a lazy identifier iterator.
pub fn open(path: &Path) -> Result<Identifiers<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Identifiers::new(BufReader::new(file)))
}

/// Lazy iterator over repository identifiers in a line-oriented source.
pub struct Identifiers<R> {
    lines: Lines<R>,
}

impl<R: BufRead> Identifiers<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for Identifiers<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                // Trimming handles both blank lines and Windows line
                // endings; whitespace-only lines produce no task.
                Ok(line) => {
                    let identifier = line.trim();
                    if !identifier.is_empty() {
                        return Some(Ok(identifier.to_string()));
                    }
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}
