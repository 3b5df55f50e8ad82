//! Fixed-offset filename extraction matching the legacy plugin.

use thiserror::Error;

/// Header value the fixed-offset slice cannot handle: shorter than the
/// slice bounds, or cut on a multi-byte character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed Content-Disposition header: {header:?}")]
pub struct MalformedDisposition {
    pub header: String,
}

/// Filename extraction with the legacy plugin's exact rules.
///
/// Without a header the result is everything after the last `/` of the URL
/// (the whole URL when it has none). With a header, the value is sliced
/// from ten characters past the first `filename=` match through the end
/// minus one character, dropping the closing quote of a `filename="…"`
/// pair. No match, or a match at the very start of the value, yields an
/// empty string; callers get that empty string back unchanged rather than
/// a substituted default.
pub fn exact_filename(
    url: &str,
    disposition: Option<&str>,
) -> Result<String, MalformedDisposition> {
    let Some(disposition) = disposition else {
        return Ok(match url.rfind('/') {
            Some(at) => url[at + 1..].to_string(),
            None => url.to_string(),
        });
    };

    match disposition.find("filename=") {
        Some(at) if at > 0 => disposition
            .get(at + 10..disposition.len() - 1)
            .map(str::to_string)
            .ok_or_else(|| MalformedDisposition {
                header: disposition.to_string(),
            }),
        _ => Ok(String::new()),
    }
}
