//! System-git clone transport.
//!
//! Clones go through the system `git` command, which automatically handles:
//! - SSH keys from ~/.ssh/ and the ssh-agent
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig
//!
//! `git clone` creates the destination directory (including intermediate
//! segments) itself. There is deliberately no pre-check for an existing
//! destination: cloning into an already-populated directory fails via git
//! and is treated as an ordinary per-task failure.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Clone `url` into `target_dir`.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up\n\
                Error: {}",
                stderr.trim_end()
            )
        } else {
            stderr.trim_end().to_string()
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message,
        });
    }

    Ok(())
}
