//! Filename extraction from the URL path.

/// Last non-empty path segment of `raw`, for use as a filename hint.
///
/// Returns `None` when the URL does not parse or the path has no usable
/// segment (root path, trailing slash only, or a `.`/`..` segment).
pub fn filename_from_url_path(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
