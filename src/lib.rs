//! # repoherd Library
//!
//! Core functionality for cloning a batch of git repositories in parallel.
//! It is designed to be used by the `repoherd` command-line tool but can
//! also be integrated into other applications that need to fan a list of
//! repositories out into concurrent clone operations.
//!
//! ## Core Concepts
//!
//! - **Batch model (`batch`)**: `BatchJob` describes one run (input file,
//!   platform host, output root); each identifier read from the input
//!   becomes one ephemeral `CloneTask` and ends in exactly one
//!   `TaskOutcome`.
//! - **Input (`input`)**: a lazy iterator over repository identifiers, one
//!   per non-empty line of the input file.
//! - **Destinations (`dest`)**: pure helpers deriving the local clone path
//!   and the SSH-style remote URL from an identifier.
//! - **Provisioning (`provision`)**: best-effort creation of the output
//!   root before any clone starts.
//! - **Dispatch (`dispatch`)**: the concurrent orchestrator. One thread per
//!   identifier, no fan-out cap, a join barrier at the end, and per-task
//!   failure isolation. Clones go through the `CloneTransport` trait so the
//!   transport can be mocked in tests.
//! - **Transport (`git`)**: the default transport, shelling out to the
//!   system `git` binary so ambient credentials (ssh-agent, credential
//!   helpers) keep working.
//!
//! ## Execution Flow
//!
//! 1. Open the input file (the only fatal error in the system).
//! 2. Provision the output root (warn and continue on failure).
//! 3. For each identifier, as it is read: echo it and spawn a clone task.
//! 4. Wait for every task to reach a terminal state.
//! 5. Report failures and the total wall-clock duration.

pub mod batch;
pub mod defaults;
pub mod dest;
pub mod dispatch;
pub mod error;
pub mod git;
pub mod input;
pub mod provision;

#[cfg(test)]
mod dest_proptest;
