//! Output-root provisioning.
//!
//! Before dispatch begins, the output root (and all intermediate segments)
//! is created if absent; a pre-existing directory is a no-op. Failure here
//! is deliberately non-fatal: a root that exists with restricted
//! permissions on a subpath should not block attempting other
//! repositories, so the run warns and proceeds, letting individual clones
//! fail naturally if they cannot write.

use std::fs;
use std::path::Path;

use log::warn;

/// Best-effort recursive creation of the output root.
pub fn ensure_output_root(root: &Path) {
    if let Err(e) = fs::create_dir_all(root) {
        warn!("Could not create output directory {}: {}", root.display(), e);
    }
}
