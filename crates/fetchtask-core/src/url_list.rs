//! Fetch URL enumeration from task configuration.

/// Expands a base URL and an optional file list into the ordered list of
/// URLs to fetch.
///
/// With a blank `files` value the base URL itself is the single target.
/// Otherwise the base URL is normalized to end with `/` and each non-blank
/// comma- or newline-separated entry is appended to it, in input order.
/// The result is never empty: when every entry is blank the base URL is
/// the fallback.
pub fn enumerate_urls(base_url: &str, files: &str) -> Vec<String> {
    let mut urls = Vec::new();

    if !files.trim().is_empty() {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        for name in files.split(|c| c == ',' || c == '\n') {
            let name = name.trim();
            if !name.is_empty() {
                urls.push(format!("{}{}", base, name));
            }
        }
    }

    if urls.is_empty() {
        urls.push(base_url.to_string());
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_files_yields_base_url() {
        assert_eq!(enumerate_urls("http://x.com", ""), vec!["http://x.com"]);
        assert_eq!(enumerate_urls("http://x.com", "   "), vec!["http://x.com"]);
    }

    #[test]
    fn comma_separated_list() {
        assert_eq!(
            enumerate_urls("http://x.com", "a.txt, b.txt"),
            vec!["http://x.com/a.txt", "http://x.com/b.txt"]
        );
    }

    #[test]
    fn newline_separated_list_with_trailing_slash() {
        assert_eq!(
            enumerate_urls("http://x.com/", "a.txt\nb.txt"),
            vec!["http://x.com/a.txt", "http://x.com/b.txt"]
        );
    }

    #[test]
    fn tokens_are_trimmed_and_blanks_discarded() {
        assert_eq!(
            enumerate_urls("http://x.com", " a.txt ,\n, \n b.txt "),
            vec!["http://x.com/a.txt", "http://x.com/b.txt"]
        );
    }

    #[test]
    fn all_blank_tokens_fall_back_to_base_url() {
        assert_eq!(enumerate_urls("http://x.com", " ,\n, "), vec!["http://x.com"]);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            enumerate_urls("http://x.com", "z.bin,a.bin,m.bin"),
            vec!["http://x.com/z.bin", "http://x.com/a.bin", "http://x.com/m.bin"]
        );
    }
}
