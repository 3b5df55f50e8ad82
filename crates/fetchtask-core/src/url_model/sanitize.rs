//! Linux-safe filename sanitization.

const NAME_MAX: usize = 255;

/// Rewrites a candidate filename so it is safe to create on Linux.
///
/// Path separators, NUL, control characters, and whitespace become `_`
/// (runs collapse to a single one); leading and trailing dots, spaces, and
/// underscores are trimmed; the result is capped at NAME_MAX bytes on a
/// char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        let replaced = c == '/'
            || c == '\\'
            || c == '\0'
            || c.is_control()
            || c == ' '
            || c == '\t'
            || c == '_';
        if replaced {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == '_' || c == ' ');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }

    let mut cut = NAME_MAX;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(sanitize_filename("a/b\\c.txt"), "a_b_c.txt");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename("  ..  file.txt  ..  "), "file.txt");
    }

    #[test]
    fn collapses_underscore_runs() {
        assert_eq!(sanitize_filename("file___name.txt"), "file_name.txt");
    }

    #[test]
    fn replaces_control_chars() {
        assert_eq!(sanitize_filename("file\x00name.txt"), "file_name.txt");
    }

    #[test]
    fn caps_length_on_char_boundary() {
        let long = "é".repeat(200); // 400 bytes
        let out = sanitize_filename(&long);
        assert!(out.len() <= NAME_MAX);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
