use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::utils::normalize_path;

/// Result of scanning the entry directories.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Source files in walk order: entries in configuration order, each
    /// directory sorted by file name.
    pub files: Vec<String>,
    /// Directory entries that could not be read.
    pub warnings: Vec<String>,
}

/// Collect every `.jsx`/`.tsx` file under `entry_dirs`.
///
/// An excluded path prunes its own subtree only; its siblings are still
/// visited. Paths are compared after lexical normalization, so the excluded
/// paths must be resolved against the same root as the entries.
pub fn scan_files(entry_dirs: &[PathBuf], excluded_paths: &[PathBuf]) -> ScanResult {
    let excluded: HashSet<PathBuf> = excluded_paths.iter().map(|p| normalize_path(p)).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = ScanResult::default();

    for dir in entry_dirs {
        let walker = WalkDir::new(normalize_path(dir))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !excluded.contains(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.warnings.push(format!("cannot access path: {}", e));
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) {
                let path_str = path.to_string_lossy().into_owned();
                // Overlapping entries yield the same file twice.
                if seen.insert(path_str.clone()) {
                    result.files.push(path_str);
                }
            }
        }
    }

    result
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsx") || ext.eq_ignore_ascii_case("tsx"))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn file_names(result: &ScanResult) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| {
                Path::new(f)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn test_scan_jsx_and_tsx_only() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("App.jsx")).unwrap();
        File::create(dir_path.join("Icon.tsx")).unwrap();
        File::create(dir_path.join("utils.ts")).unwrap();
        File::create(dir_path.join("index.js")).unwrap();
        File::create(dir_path.join("iconfont.css")).unwrap();

        let result = scan_files(&[dir_path.to_path_buf()], &[]);

        assert_eq!(file_names(&result), ["App.jsx", "Icon.tsx"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_sorted_and_nested() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let components = dir_path.join("components");
        fs::create_dir(&components).unwrap();
        File::create(components.join("Button.tsx")).unwrap();
        File::create(dir_path.join("b.jsx")).unwrap();
        File::create(dir_path.join("a.jsx")).unwrap();

        let result = scan_files(&[dir_path.to_path_buf()], &[]);

        assert_eq!(file_names(&result), ["a.jsx", "b.jsx", "Button.tsx"]);
        assert!(result.files[2].ends_with("components/Button.tsx"));
    }

    #[test]
    fn test_excluded_directory_keeps_siblings() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");

        let legacy = src.join("legacy");
        fs::create_dir_all(&legacy).unwrap();
        File::create(legacy.join("Old.jsx")).unwrap();

        let pages = src.join("pages");
        fs::create_dir_all(&pages).unwrap();
        File::create(pages.join("Home.jsx")).unwrap();
        File::create(src.join("App.jsx")).unwrap();
        File::create(src.join("zz.jsx")).unwrap();

        let result = scan_files(&[src.clone()], &[src.join("legacy")]);

        assert_eq!(file_names(&result), ["App.jsx", "Home.jsx", "zz.jsx"]);
    }

    #[test]
    fn test_excluded_file_and_unnormalized_paths() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        File::create(src.join("App.jsx")).unwrap();
        File::create(src.join("Debug.jsx")).unwrap();

        let result = scan_files(
            &[dir.path().join("./src/")],
            &[dir.path().join("src/../src/./Debug.jsx")],
        );

        assert_eq!(file_names(&result), ["App.jsx"]);
    }

    #[test]
    fn test_excluded_entry_yields_nothing() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        File::create(src.join("App.jsx")).unwrap();

        let result = scan_files(&[src.clone()], &[src]);

        assert!(result.files.is_empty());
    }

    #[test]
    fn test_overlapping_entries_are_deduplicated() {
        let dir = tempdir().unwrap();
        let components = dir.path().join("src").join("components");
        fs::create_dir_all(&components).unwrap();
        File::create(components.join("Button.tsx")).unwrap();

        let result = scan_files(&[dir.path().join("src"), components], &[]);

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_missing_entry_is_a_warning() {
        let dir = tempdir().unwrap();

        let result = scan_files(&[dir.path().join("missing")], &[]);

        assert!(result.files.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_is_scannable_file() {
        assert!(is_scannable_file(Path::new("App.jsx")));
        assert!(is_scannable_file(Path::new("App.tsx")));
        assert!(is_scannable_file(Path::new("LEGACY.JSX")));
        assert!(!is_scannable_file(Path::new("app.ts")));
        assert!(!is_scannable_file(Path::new("app.js")));
        assert!(!is_scannable_file(Path::new("jsx")));
    }
}
