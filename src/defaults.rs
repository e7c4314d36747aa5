//! Default values for repoherd configuration.
//!
//! This module provides centralized default values used by the CLI,
//! ensuring consistency and avoiding duplication.

/// Default input file listing the repositories to clone, one per line.
///
/// Can be overridden by the `--file` CLI flag or the `REPOHERD_FILE`
/// environment variable.
pub const INPUT_FILE: &str = "repos.txt";

/// Default git platform host used to build SSH-style remote URLs.
pub const PLATFORM_HOST: &str = "github.com";

/// Default directory into which repositories are cloned.
pub const OUTPUT_DIR: &str = "./projects";
