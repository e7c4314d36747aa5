//! Batch data model: the configuration for one run and the per-repository
//! units of work derived from it.
//!
//! A `BatchJob` is immutable once a run starts. Every identifier read from
//! the input file becomes exactly one `CloneTask`, and every task ends in
//! exactly one terminal `TaskOutcome` — no task is silently dropped, none
//! is double-reported.

use std::path::PathBuf;

use crate::dest;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchJob {
    /// Path to the line-oriented file listing repository identifiers.
    pub input_file: PathBuf,
    /// Domain of the git platform, e.g. `github.com`.
    pub platform_host: String,
    /// Root directory repositories are cloned under.
    pub output_root: PathBuf,
}

/// One unit of work: a repository identifier plus its derived destinations.
///
/// Created by the dispatcher when an identifier is read; dropped when the
/// clone for it returns.
#[derive(Debug, Clone)]
pub struct CloneTask {
    /// The `owner/name`-style identifier, exactly as read from the input.
    pub identifier: String,
    /// Local destination path, `<output_root>/<identifier>`.
    pub local_path: PathBuf,
    /// SSH-style remote reference, `git@<host>:<identifier>`.
    pub remote_url: String,
}

impl CloneTask {
    /// Derive the task for `identifier` within `job`.
    pub fn new(job: &BatchJob, identifier: String) -> Self {
        Self {
            local_path: dest::local_path(&job.output_root, &identifier),
            remote_url: dest::remote_url(&job.platform_host, &identifier),
            identifier,
        }
    }
}

/// Terminal state of one clone task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The clone completed successfully.
    Success { identifier: String },
    /// The clone failed; `message` carries the transport's error text.
    Failure { identifier: String, message: String },
}

impl TaskOutcome {
    /// The identifier this outcome belongs to.
    pub fn identifier(&self) -> &str {
        match self {
            TaskOutcome::Success { identifier } => identifier,
            TaskOutcome::Failure { identifier, .. } => identifier,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TaskOutcome::Failure { .. })
    }
}
