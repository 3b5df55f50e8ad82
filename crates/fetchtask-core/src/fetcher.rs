//! Blocking HTTP GET via libcurl.
//!
//! One `Easy` handle per request, scoped to [`fetch`]: the handle is
//! dropped on every exit path before control returns to the caller.
//! Status, headers, and body are buffered so the caller can check the
//! response code before deciding where the body goes.

use crate::config::FetchOptions;
use crate::url_model::MalformedDisposition;
use std::path::{Path, PathBuf};
use std::str;
use std::time::Duration;
use thiserror::Error;

/// Error raised by one URL attempt, classified at the recovery boundary.
/// Non-2xx responses are not errors; they come back as a [`FetchResponse`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failure: malformed URL, DNS, connect, TLS, or timeout.
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// Creating or writing the destination file failed.
    #[error("failed to write '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Content-Disposition header the filename extraction cannot handle.
    #[error(transparent)]
    Header(#[from] MalformedDisposition),
}

/// A completed GET: status code, response headers, and the buffered body.
#[derive(Debug)]
pub struct FetchResponse {
    status: u32,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn status(&self) -> u32 {
        self.status
    }

    /// First header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Writes the body to `path`, creating or overwriting the file.
    pub fn store_to(&self, path: &Path) -> Result<(), FetchError> {
        std::fs::write(path, &self.body).map_err(|source| FetchError::Filesystem {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Body rendered as text (used for non-200 responses).
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one GET and buffers the full response.
///
/// Follows redirects like the platform HTTP stacks this plugin replaces;
/// timeouts come from `options`. No retry.
pub fn fetch(url: &str, options: &FetchOptions) -> Result<FetchResponse, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(options.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(options.request_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(FetchResponse {
        status,
        headers: parse_headers(&header_lines),
        body,
    })
}

/// Parse collected header lines into name/value pairs.
///
/// A redirected transfer delivers one header block per hop; each status
/// line resets the collection so only the final response's headers remain.
fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
