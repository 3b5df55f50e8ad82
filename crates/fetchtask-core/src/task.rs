//! Task orchestration: fetch every configured URL into the working
//! directory and aggregate the outcomes into a single result.
//!
//! Processing is strictly sequential; each URL reaches a terminal outcome
//! (downloaded, rejected, or errored) and releases its HTTP handle before
//! the next one is attempted. One URL's failure never aborts the rest.

use crate::config::{FailureReporting, FetchOptions};
use crate::fetcher::{self, FetchError};
use crate::protocol::TaskRequest;
use crate::url_list::enumerate_urls;
use crate::url_model;
use std::fs;
use std::path::{Path, PathBuf};

/// Sink for the human-readable lines the host shows next to a running job.
pub trait Console {
    fn print_line(&self, line: &str);
}

/// Console that forwards to the tracing log.
#[derive(Debug, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn print_line(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Terminal classification of one URL attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 response stored to disk under `filename`.
    Downloaded { filename: String },
    /// Non-200 response; `body` is the server's error text.
    Rejected { status: u32, body: String },
    /// The attempt raised an error before a body could be stored.
    Failed(FetchError),
}

impl FetchOutcome {
    /// Message recorded in the result trail for this attempt.
    pub fn message(&self) -> String {
        match self {
            FetchOutcome::Downloaded { filename } => {
                format!("File '{}' downloaded", filename)
            }
            FetchOutcome::Rejected { body, .. } => body.clone(),
            FetchOutcome::Failed(err) => err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Downloaded { .. })
    }
}

/// Aggregate result of one task execution: the ordered message trail and
/// the overall failure flag. Finalized once; immutable afterwards.
#[derive(Debug, Default)]
pub struct TaskResult {
    messages: Vec<String>,
    failure: bool,
}

impl TaskResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn set_failure(&mut self) {
        self.failure = true;
    }

    pub fn is_failure(&self) -> bool {
        self.failure
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The joined message trail, order-preserving.
    pub fn message(&self) -> String {
        self.messages.join(", ")
    }
}

/// Executes the task described by `request`: resolves the working
/// directory, enumerates the fetch URLs, downloads each in order, and
/// aggregates per-URL outcomes.
///
/// With [`FailureReporting::Always`] the failure flag is set after every
/// attempt, successful or not, matching the behavior hosts observe from
/// the legacy plugin; with [`FailureReporting::OnError`] only rejected or
/// errored attempts set it. When the flag is still clear after the last
/// URL, `"HTTP Task executed!"` is appended.
pub fn run_task(request: &TaskRequest, options: &FetchOptions, console: &dyn Console) -> TaskResult {
    let url = request.config_value("url");
    let files = request.config_value("files");
    let destination = request.config_value("destination");

    console.print_line(&format!(
        "Launching command on: {}",
        request.context.working_directory
    ));

    let working_dir = resolve_working_dir(&request.context.working_directory, destination);

    let mut result = TaskResult::default();
    for target in enumerate_urls(url, files) {
        let outcome = match fetch_one(&target, &working_dir, options) {
            Ok(outcome) => outcome,
            Err(err) => FetchOutcome::Failed(err),
        };
        tracing::debug!(url = %target, success = outcome.is_success(), "fetch finished");

        result.add_message(outcome.message());
        match options.failure_reporting {
            FailureReporting::Always => result.set_failure(),
            FailureReporting::OnError => {
                if !outcome.is_success() {
                    result.set_failure();
                }
            }
        }
    }

    if !result.is_failure() {
        result.add_message("HTTP Task executed!");
    }
    result
}

/// Absolute working directory for file writes: the context directory,
/// extended by the optional destination subdirectory, which is created
/// recursively. Creation failure is not special-cased here; it surfaces
/// as the later file-write failure.
fn resolve_working_dir(working_directory: &str, destination: &str) -> PathBuf {
    let base = PathBuf::from(working_directory);
    let mut dir = if base.is_absolute() {
        base
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(base),
            Err(_) => base,
        }
    };

    if !destination.trim().is_empty() {
        dir = dir.join(destination);
        if let Err(err) = fs::create_dir_all(&dir) {
            tracing::warn!("could not create destination {}: {}", dir.display(), err);
        }
    }
    dir
}

/// One URL attempt: GET, check the status, derive the filename, store the
/// body. Every early return releases the HTTP handle before the caller
/// records the outcome.
fn fetch_one(
    url: &str,
    working_dir: &Path,
    options: &FetchOptions,
) -> Result<FetchOutcome, FetchError> {
    let response = fetcher::fetch(url, options)?;

    if response.status() != 200 {
        return Ok(FetchOutcome::Rejected {
            status: response.status(),
            body: response.text_lossy(),
        });
    }

    let filename = url_model::derive_filename(
        url,
        response.header("Content-Disposition"),
        options.filename_parsing,
    )?;
    response.store_to(&working_dir.join(&filename))?;

    Ok(FetchOutcome::Downloaded { filename })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_message_joins_in_order() {
        let mut result = TaskResult::default();
        result.add_message("File 'a.txt' downloaded");
        result.add_message("File 'b.txt' downloaded");
        assert_eq!(
            result.message(),
            "File 'a.txt' downloaded, File 'b.txt' downloaded"
        );
        assert!(!result.is_failure());
    }

    #[test]
    fn failure_flag_is_sticky() {
        let mut result = TaskResult::default();
        result.set_failure();
        result.add_message("whatever");
        assert!(result.is_failure());
    }

    #[test]
    fn downloaded_outcome_message() {
        let outcome = FetchOutcome::Downloaded {
            filename: "report.pdf".to_string(),
        };
        assert_eq!(outcome.message(), "File 'report.pdf' downloaded");
        assert!(outcome.is_success());
    }

    #[test]
    fn rejected_outcome_uses_body_text() {
        let outcome = FetchOutcome::Rejected {
            status: 404,
            body: "not here".to_string(),
        };
        assert_eq!(outcome.message(), "not here");
        assert!(!outcome.is_success());
    }

    #[test]
    fn destination_extends_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_working_dir(&dir.path().display().to_string(), "sub/deeper");
        assert_eq!(resolved, dir.path().join("sub/deeper"));
        assert!(resolved.is_dir());
    }

    #[test]
    fn blank_destination_keeps_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_working_dir(&dir.path().display().to_string(), "  ");
        assert_eq!(resolved, dir.path());
    }
}
