//! CLI for the fetchtask plugin: the host request surface as subcommands.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fetchtask_core::config;
use std::path::PathBuf;

use commands::{run_execute, run_fetch, run_schema, run_validate};

/// Top-level CLI for the fetchtask HTTP fetch task.
#[derive(Debug, Parser)]
#[command(name = "fetchtask")]
#[command(about = "fetchtask: HTTP fetch task plugin for build pipelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Execute a task request document and print the execution response.
    Execute {
        /// Path to the request JSON; read from stdin when omitted.
        request: Option<PathBuf>,
    },

    /// Print the task configuration schema for the host's form builder.
    Schema,

    /// Validate a task configuration document (this plugin has no rules).
    Validate {
        /// Path to the request JSON; read from stdin when omitted.
        request: Option<PathBuf>,
    },

    /// Fetch directly from flags, without a request document.
    Fetch {
        /// Base HTTP/HTTPS URL to fetch from.
        url: String,

        /// Comma- or newline-separated file names appended to the URL.
        #[arg(long)]
        files: Option<String>,

        /// Subdirectory of the working directory to download into.
        #[arg(long)]
        destination: Option<String>,

        /// Working directory (defaults to the current directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let options = config::load_or_init()?;
        tracing::debug!("loaded options: {:?}", options);

        match cli.command {
            CliCommand::Execute { request } => run_execute(request.as_deref(), &options),
            CliCommand::Schema => run_schema(),
            CliCommand::Validate { request } => run_validate(request.as_deref()),
            CliCommand::Fetch {
                url,
                files,
                destination,
                dir,
            } => run_fetch(
                &url,
                files.as_deref(),
                destination.as_deref(),
                dir.as_deref(),
                &options,
            ),
        }
    }
}
