//! Slug derivation: content-relative file path -> URL slug.
//!
//! ```text
//! blog/post-1.md      -> /blog/post-1/
//! blog/index.md       -> /blog/
//! index.md            -> /
//! products/mug.md     -> /products/mug/
//! ```

use std::path::Path;

use crate::config::{SlugCase, SlugConfig, SlugMode};
use crate::core::UrlPath;

/// File stem that collapses into its directory.
const INDEX_STEM: &str = "index";

/// Characters never allowed in a URL segment.
const UNSAFE_CHARS: &[char] = &[
    '<', '>', ':', '"', '|', '?', '*', '#', '%', '\\', '[', ']', '{', '}', '^', '`',
];

/// Derive the slug of a file at `relative` (relative to the content root).
///
/// The result always starts and ends with `/`. Backslash separators are
/// accepted so paths recorded on Windows map to the same slug.
pub fn derive_slug(relative: &Path, config: &SlugConfig) -> UrlPath {
    let normalized = relative.to_string_lossy().replace('\\', "/");
    let mut parts: Vec<&str> = normalized
        .split('/')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .collect();

    if let Some(last) = parts.pop() {
        let stem = Path::new(last)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(last);
        if stem != INDEX_STEM {
            parts.push(stem);
        }
    }

    let segments: Vec<String> = parts
        .iter()
        .map(|part| slugify_segment(part, config))
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        UrlPath::new("/")
    } else {
        UrlPath::new(&format!("/{}/", segments.join("/")))
    }
}

/// Slugify one path segment according to `config`.
pub fn slugify_segment(segment: &str, config: &SlugConfig) -> String {
    let sep = config.separator.as_char();
    match config.path {
        SlugMode::No => segment.to_string(),
        SlugMode::Safe => apply_case(&safe(segment, sep), config.case, sep),
        SlugMode::Ascii => apply_case(&safe(&deunicode::deunicode(segment), sep), config.case, sep),
        SlugMode::Full => apply_case(&full(&deunicode::deunicode(segment), sep), config.case, sep),
    }
}

/// Drop unsafe characters, turn whitespace into the separator.
fn safe(segment: &str, sep: char) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c.is_whitespace() {
            push_separator(&mut out, sep);
        } else if !c.is_control() && !UNSAFE_CHARS.contains(&c) {
            out.push(c);
        }
    }
    out.trim_matches(sep).to_string()
}

/// Keep ASCII alphanumerics only, everything else becomes one separator.
fn full(segment: &str, sep: char) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            push_separator(&mut out, sep);
        }
    }
    out.trim_matches(sep).to_string()
}

fn push_separator(out: &mut String, sep: char) {
    if !out.is_empty() && !out.ends_with(sep) {
        out.push(sep);
    }
}

fn apply_case(segment: &str, case: SlugCase, sep: char) -> String {
    match case {
        SlugCase::Lower => segment.to_lowercase(),
        SlugCase::Upper => segment.to_uppercase(),
        SlugCase::Preserve => segment.to_string(),
        SlugCase::Capitalize => segment
            .split(sep)
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(&sep.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlugSeparator;
    use std::path::PathBuf;

    fn slug(path: &str) -> String {
        derive_slug(Path::new(path), &SlugConfig::default())
            .as_str()
            .to_string()
    }

    fn config(path: SlugMode, case: SlugCase) -> SlugConfig {
        SlugConfig {
            path,
            separator: SlugSeparator::Dash,
            case,
        }
    }

    #[test]
    fn test_directory_structure() {
        assert_eq!(slug("blog/post-1.md"), "/blog/post-1/");
        assert_eq!(slug("products/mug.md"), "/products/mug/");
        assert_eq!(slug("a/b/c/d.markdown"), "/a/b/c/d/");
    }

    #[test]
    fn test_index_collapses() {
        assert_eq!(slug("index.md"), "/");
        assert_eq!(slug("blog/index.md"), "/blog/");
        assert_eq!(slug("products/index.md"), "/products/");
    }

    #[test]
    fn test_only_last_extension_removed() {
        assert_eq!(slug("notes/v1.2.md"), "/notes/v1.2/");
    }

    #[test]
    fn test_backslash_separators() {
        assert_eq!(slug("blog\\post-1.md"), "/blog/post-1/");
    }

    #[test]
    fn test_slug_invariants() {
        for path in ["a.md", "x/y.md", "index.md", "./a/../b.md", "deep/er/index.md"] {
            let s = slug(path);
            assert!(s.starts_with('/') && s.ends_with('/'), "{path} -> {s}");
            assert!(!s.contains("//"), "{path} -> {s}");
        }
    }

    #[test]
    fn test_no_content_root_segment() {
        let root = PathBuf::from("/site/content");
        let file = root.join("blog/post-1.md");
        let relative = file.strip_prefix(&root).unwrap();
        let s = derive_slug(relative, &SlugConfig::default());
        assert_eq!(s.as_str(), "/blog/post-1/");
        assert!(!s.as_str().contains("content"));
    }

    #[test]
    fn test_safe_mode() {
        let cfg = config(SlugMode::Safe, SlugCase::Lower);
        assert_eq!(slugify_segment("Hello World?", &cfg), "hello-world");
        assert_eq!(slugify_segment("中文 标题", &cfg), "中文-标题");
    }

    #[test]
    fn test_ascii_and_full_modes() {
        let ascii = config(SlugMode::Ascii, SlugCase::Preserve);
        assert_eq!(slugify_segment("Café Crème", &ascii), "Cafe-Creme");

        let full = config(SlugMode::Full, SlugCase::Lower);
        assert_eq!(slugify_segment("Café & Crème!!", &full), "cafe-creme");
    }

    #[test]
    fn test_capitalize() {
        let cfg = config(SlugMode::Safe, SlugCase::Capitalize);
        assert_eq!(slugify_segment("coffee mug", &cfg), "Coffee-Mug");
    }

    #[test]
    fn test_no_mode_is_verbatim() {
        let cfg = config(SlugMode::No, SlugCase::Lower);
        assert_eq!(slugify_segment("My Post", &cfg), "My Post");
    }
}
