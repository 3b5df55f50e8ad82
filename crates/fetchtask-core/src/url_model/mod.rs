//! Filename derivation from URL path or Content-Disposition header.
//!
//! Two modes: `Exact` reproduces the legacy plugin's fixed-offset header
//! slicing byte for byte, `Tolerant` parses the header leniently and
//! sanitizes the result for Linux filesystems.

mod content_disposition;
mod exact;
mod path;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use exact::{exact_filename, MalformedDisposition};
pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

use crate::config::FilenameParsing;

/// Default filename when URL path and Content-Disposition yield nothing usable
/// (tolerant mode only).
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives the target filename for a fetched URL.
///
/// `Exact` keeps the legacy edge behaviors, including the empty-string
/// result for headers without a usable `filename=`; the error case covers
/// headers the fixed-offset slice cannot handle. `Tolerant` never fails:
/// it falls back to the last URL path segment and finally to
/// `download.bin`.
pub fn derive_filename(
    url: &str,
    content_disposition: Option<&str>,
    mode: FilenameParsing,
) -> Result<String, MalformedDisposition> {
    match mode {
        FilenameParsing::Exact => exact_filename(url, content_disposition),
        FilenameParsing::Tolerant => Ok(tolerant_filename(url, content_disposition)),
    }
}

fn tolerant_filename(url: &str, content_disposition: Option<&str>) -> String {
    let candidate = content_disposition
        .and_then(parse_content_disposition_filename)
        .filter(|s| !s.is_empty())
        .or_else(|| filename_from_url_path(url));

    let raw = match candidate {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
