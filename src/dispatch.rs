//! # Batch Dispatch
//!
//! The concurrent orchestrator: fans one clone task out per repository
//! identifier, waits for all of them, and reports per-task failures.
//!
//! ## Design
//!
//! Clone operations go through the `CloneTransport` trait rather than
//! calling the system git directly. This separates orchestration from the
//! transport so tests can substitute mock transports and simulate
//! failures without network access or a git binary. `SystemGit` is the
//! default implementation used by the CLI.
//!
//! ## Concurrency
//!
//! Reading and dispatch are interleaved: as each identifier comes off the
//! input it is echoed and a scoped thread is spawned for its clone. The
//! fan-out is unbounded by design — one thread per identifier, with
//! backpressure left to the remote host and the OS. Tasks share no
//! mutable state; each owns its `CloneTask` and signals its terminal
//! `TaskOutcome` over an mpsc channel. The scope join is the completion
//! barrier, after which the dispatching thread drains the channel and
//! prints failure lines serially, so output never interleaves.
//!
//! There is no cancellation and no timeout: once dispatched, a task runs
//! to completion, and a failing task never aborts its siblings.

use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::batch::{BatchJob, CloneTask, TaskOutcome};
use crate::error::Result;
use crate::{input, provision};

/// Trait for the clone transport - allows mocking in tests
pub trait CloneTransport: Send + Sync {
    /// Clone `url` into `target_dir`, creating the destination as needed.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// The default transport, which uses the system `git` command.
pub struct SystemGit;

impl CloneTransport for SystemGit {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }
}

/// Aggregate accounting for one finished batch.
///
/// Every dispatched task is counted exactly once, as a success or a
/// failure; `dispatched == succeeded + failed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub dispatched: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Run one clone task to its terminal outcome.
///
/// Per-task failures are converted here, at the task boundary, into a
/// `TaskOutcome::Failure`; they never propagate to the dispatcher.
fn execute_task(task: CloneTask, transport: &dyn CloneTransport) -> TaskOutcome {
    match transport.clone_repo(&task.remote_url, &task.local_path) {
        Ok(()) => TaskOutcome::Success {
            identifier: task.identifier,
        },
        Err(e) => TaskOutcome::Failure {
            identifier: task.identifier,
            message: e.to_string(),
        },
    }
}

/// Execute the whole batch described by `job`.
///
/// Opens the input file (the one fatal error), provisions the output
/// root, dispatches one concurrent clone per identifier, and blocks until
/// every task has reached a terminal state. Failed clones are printed to
/// stderr as `[ERROR] <identifier> <error>`; the batch itself still
/// completes successfully.
pub fn run(job: &BatchJob, transport: &dyn CloneTransport) -> Result<BatchSummary> {
    let identifiers = input::open(&job.input_file)?;

    provision::ensure_output_root(&job.output_root);

    let (tx, rx) = mpsc::channel::<TaskOutcome>();
    let mut dispatched = 0usize;

    thread::scope(|scope| -> Result<()> {
        for identifier in identifiers {
            let identifier = identifier?;
            println!("{}", identifier);

            let task = CloneTask::new(job, identifier);
            dispatched += 1;

            let tx = tx.clone();
            scope.spawn(move || {
                // The receiver outlives the scope, so the send cannot fail.
                let _ = tx.send(execute_task(task, transport));
            });
        }
        Ok(())
    })?;
    drop(tx);

    // All tasks are terminal once the scope joins; drain their outcomes
    // and report failures serially so lines never interleave.
    let mut succeeded = 0usize;
    let mut failed = 0usize;
    for outcome in rx {
        match outcome {
            TaskOutcome::Success { identifier } => {
                debug!("Cloned {}", identifier);
                succeeded += 1;
            }
            TaskOutcome::Failure {
                identifier,
                message,
            } => {
                eprintln!("[ERROR] {} {}", identifier, message);
                failed += 1;
            }
        }
    }

    debug!(
        "Batch complete: {} dispatched, {} succeeded, {} failed",
        dispatched, succeeded, failed
    );

    Ok(BatchSummary {
        dispatched,
        succeeded,
        failed,
    })
}
