//! Destination builders for repoherd.
//!
//! Pure functions deriving, for each repository identifier, the local
//! clone path and the SSH-style remote URL. Identifiers are opaque: no
//! syntax validation happens here, and identifiers containing path
//! separators deliberately produce nested destination directories
//! (`org/name` lands under `<root>/org/name`). Malformed identifiers
//! surface only as clone failures.

use std::path::{Path, PathBuf};

/// Local destination path for `identifier` under `output_root`.
pub fn local_path(output_root: &Path, identifier: &str) -> PathBuf {
    output_root.join(identifier)
}

/// SSH-style remote reference for `identifier` on `platform_host`,
/// e.g. `git@github.com:org/name`.
pub fn remote_url(platform_host: &str, identifier: &str) -> String {
    format!("git@{}:{}", platform_host, identifier)
}
