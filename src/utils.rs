//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Split a class attribute value into its class tokens.
///
/// Tokens are separated by any run of whitespace; empty tokens are dropped.
///
/// # Examples
///
/// ```
/// use icon_purge::utils::class_tokens;
///
/// let tokens: Vec<&str> = class_tokens("icon  icon-home\tactive").collect();
/// assert_eq!(tokens, ["icon", "icon-home", "active"]);
/// assert_eq!(class_tokens("   ").count(), 0);
/// ```
pub fn class_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Lexically normalize a path: drop `.` components and fold `..` into the parent.
///
/// The file system is never consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolve `path` against `root` (unless it is already absolute) and normalize it.
pub fn resolve_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    normalize_path(&root.join(path))
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
