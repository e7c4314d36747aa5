//! CLI argument parsing and batch execution

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use repoherd::batch::BatchJob;
use repoherd::defaults;
use repoherd::dispatch::{self, SystemGit};

/// repoherd - Clone a list of git repositories in parallel
#[derive(Parser, Debug)]
#[command(name = "repoherd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File that contains the repositories to clone, one per line
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = defaults::INPUT_FILE,
        env = "REPOHERD_FILE"
    )]
    file: std::path::PathBuf,

    /// Domain of the git platform
    #[arg(
        short,
        long,
        value_name = "HOST",
        default_value = defaults::PLATFORM_HOST,
        env = "REPOHERD_PLATFORM"
    )]
    platform: String,

    /// Directory into which to clone the repositories
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = defaults::OUTPUT_DIR,
        env = "REPOHERD_OUTPUT"
    )]
    output_dir: std::path::PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the batch clone.
    ///
    /// Exits 0 once the batch completes, regardless of individual clone
    /// failures; only the fatal input-open error produces a non-zero exit.
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .init();

        let job = BatchJob {
            input_file: self.file,
            platform_host: self.platform,
            output_root: self.output_dir,
        };

        println!("Cloning repositories...");
        let start_time = Instant::now();

        let summary = dispatch::run(&job, &SystemGit)?;

        let duration = start_time.elapsed();
        log::debug!(
            "{} of {} clones succeeded",
            summary.succeeded,
            summary.dispatched
        );
        println!("Total time taken: {:.2} seconds", duration.as_secs_f64());

        Ok(())
    }
}
