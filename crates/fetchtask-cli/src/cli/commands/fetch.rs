//! `fetchtask fetch` – direct fetch from command-line flags.

use anyhow::Result;
use fetchtask_core::config::FetchOptions;
use fetchtask_core::protocol::{ConfigEntry, TaskRequest};
use fetchtask_core::task::{self, Console};
use std::path::Path;

/// Console printing straight to stdout; the terminal is the job console
/// for direct runs.
struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }
}

pub fn run_fetch(
    url: &str,
    files: Option<&str>,
    destination: Option<&str>,
    dir: Option<&Path>,
    options: &FetchOptions,
) -> Result<()> {
    let working_directory = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let mut request = TaskRequest::default();
    request.context.working_directory = working_directory.display().to_string();
    request
        .config
        .insert("url".to_string(), ConfigEntry::with_value(url));
    if let Some(files) = files {
        request
            .config
            .insert("files".to_string(), ConfigEntry::with_value(files));
    }
    if let Some(destination) = destination {
        request
            .config
            .insert("destination".to_string(), ConfigEntry::with_value(destination));
    }

    let result = task::run_task(&request, options, &StdoutConsole);
    for message in result.messages() {
        println!("{}", message);
    }

    // With the default failure_reporting = "always" this exits nonzero
    // even for clean downloads; "on-error" in config.toml changes that.
    if result.is_failure() {
        anyhow::bail!("task reported failure");
    }
    Ok(())
}
