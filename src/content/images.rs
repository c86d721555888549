//! Front-matter image path normalization.
//!
//! Front-matter often names images by their public path (`/img/mug.png`),
//! while the markdown pipeline resolves images relative to the source
//! file. Values that point at an existing file in the static directory are
//! rewritten relative to the node's directory:
//!
//! ```text
//! static/img/mug.png
//! content/products/mug.md   image: /img/mug.png
//!                        -> image: ../../static/img/mug.png
//! ```

use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use super::JsonMap;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "avif"];

/// Rewrite absolute image references in `frontmatter`.
///
/// `node_dir` is the directory containing the source file and
/// `static_dir` the static files root. Returns the number of rewritten values.
pub fn normalize_image_paths(frontmatter: &mut JsonMap, node_dir: &Path, static_dir: &Path) -> usize {
    frontmatter
        .values_mut()
        .map(|value| normalize_value(value, node_dir, static_dir))
        .sum()
}

fn normalize_value(value: &mut Value, node_dir: &Path, static_dir: &Path) -> usize {
    match value {
        Value::String(s) => match resolve_image(s, node_dir, static_dir) {
            Some(relative) => {
                *s = relative;
                1
            }
            None => 0,
        },
        Value::Array(items) => items
            .iter_mut()
            .map(|item| normalize_value(item, node_dir, static_dir))
            .sum(),
        Value::Object(map) => map
            .values_mut()
            .map(|item| normalize_value(item, node_dir, static_dir))
            .sum(),
        _ => 0,
    }
}

fn resolve_image(value: &str, node_dir: &Path, static_dir: &Path) -> Option<String> {
    let stripped = value.strip_prefix('/')?;
    if stripped.starts_with('/') || !is_image(stripped) {
        return None;
    }

    let target = static_dir.join(stripped);
    if !target.is_file() {
        return None;
    }

    let relative = relative_path(&target, node_dir);
    Some(relative.to_string_lossy().replace('\\', "/"))
}

fn is_image(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|i| ext.eq_ignore_ascii_case(i)))
}

/// Path of `target` relative to directory `base`.
///
/// Both paths must be of the same kind (both absolute or both relative to
/// the same directory).
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = target.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();

    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    relative
}
