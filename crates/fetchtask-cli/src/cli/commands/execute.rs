//! `fetchtask execute` – run an execution request and print the response.

use anyhow::{Context, Result};
use fetchtask_core::config::FetchOptions;
use fetchtask_core::protocol::{ExecutionResponse, TaskRequest};
use fetchtask_core::task::{self, TracingConsole};
use std::io::Read;
use std::path::Path;

pub fn run_execute(request_path: Option<&Path>, options: &FetchOptions) -> Result<()> {
    let raw = read_request(request_path)?;
    let request = TaskRequest::from_json(&raw).context("malformed execution request")?;

    let result = task::run_task(&request, options, &TracingConsole);
    let response = ExecutionResponse::from_result(&result);
    tracing::info!(status = response.status_code(), "task executed");

    println!("{}", response.to_json()?);
    Ok(())
}

/// Request document from a file, or stdin when no path was given.
pub(super) fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read request from {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
