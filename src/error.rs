//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repoherd` application. It uses the `thiserror` library to create an
//! `Error` enum covering the anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! The error taxonomy mirrors how failures propagate through a run:
//!
//! - **`Input`** is the one fatal error: if the repositories file cannot be
//!   opened or read, no tasks can be produced and the run aborts.
//! - **`GitClone`** is a per-task error: it is caught at the task boundary,
//!   converted into a failure outcome for that one repository, and never
//!   aborts sibling clones.
//! - **`Io`** wraps stray I/O errors from std.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repoherd operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repositories input file could not be opened or read.
    ///
    /// This is the only fatal error in the system: without the input there
    /// is nothing to dispatch, so the run aborts with a non-zero exit.
    #[error("Could not open repositories file {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// A git clone operation failed.
    ///
    /// Includes the remote URL and the error text reported by the
    /// transport. Always handled at the task boundary; it never unwinds
    /// into the dispatcher.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
