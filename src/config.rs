use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::utils::resolve_path;

pub const CONFIG_FILE_NAME: &str = "react-unused-icon-purge.json";

const KNOWN_FIELDS: &[&str] = &[
    "entry",
    "iconfontCssPath",
    "fontTTFPath",
    "iconPrefix",
    "excludeClasses",
    "excludeFilePath",
];

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directories to scan, relative to the project root.
    pub entry: Vec<String>,
    pub iconfont_css_path: String,
    #[serde(rename = "fontTTFPath")]
    pub font_ttf_path: String,
    /// Base icon class (e.g. `icon`); its rule is copied into the pruned stylesheet.
    pub icon_prefix: String,
    /// Classes kept regardless of what the scan finds.
    #[serde(default)]
    pub exclude_classes: Vec<String>,
    /// Paths pruned from the directory walk, relative to the project root.
    #[serde(default)]
    pub exclude_file_path: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry: vec!["src".to_string()],
            iconfont_css_path: "src/assets/iconfont/iconfont.css".to_string(),
            font_ttf_path: "src/assets/iconfont/iconfont.ttf".to_string(),
            icon_prefix: "iconfont".to_string(),
            exclude_classes: Vec::new(),
            exclude_file_path: Vec::new(),
        }
    }
}

impl Config {
    pub fn entry_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.entry.iter().map(|e| resolve_path(root, e)).collect()
    }

    pub fn excluded_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.exclude_file_path
            .iter()
            .map(|p| resolve_path(root, p))
            .collect()
    }

    pub fn css_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.iconfont_css_path)
    }

    pub fn font_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.font_ttf_path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Load and validate the configuration.
///
/// `explicit` overrides the default `<root>/react-unused-icon-purge.json`.
/// All violated constraints are collected before failing, and referenced
/// paths are checked against the file system relative to `root`.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => resolve_path(root, path),
        None => root.join(CONFIG_FILE_NAME),
    };
    if !path.is_file() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
        path: path.clone(),
        source,
    })?;
    let document: Map<String, Value> =
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.clone(),
            source,
        })?;

    let violations = validate_document(&document, root);
    if !violations.is_empty() {
        return Err(ConfigError::Invalid { path, violations });
    }

    serde_json::from_value(Value::Object(document))
        .map_err(|source| ConfigError::Malformed { path, source })
}

/// Check a raw configuration document, returning one message per violation.
pub fn validate_document(document: &Map<String, Value>, root: &Path) -> Vec<String> {
    let mut violations = Vec::new();

    for key in document.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            violations.push(format!("unknown field `{}`", key));
        }
    }

    match document.get("entry") {
        None => violations.push("`entry` is required".to_string()),
        Some(Value::Array(items)) if items.is_empty() => {
            violations.push("`entry` must list at least one directory".to_string())
        }
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(dir) if resolve_path(root, dir).is_dir() => {}
                    Some(dir) => violations.push(format!(
                        "`entry[{}]` directory does not exist: {}",
                        i, dir
                    )),
                    None => violations.push(format!("`entry[{}]` must be a string", i)),
                }
            }
        }
        Some(_) => violations.push("`entry` must be an array of directory paths".to_string()),
    }

    check_file_field(
        document,
        "iconfontCssPath",
        &["css"],
        root,
        &mut violations,
    );
    check_file_field(
        document,
        "fontTTFPath",
        FONT_EXTENSIONS,
        root,
        &mut violations,
    );

    match document.get("iconPrefix") {
        None => violations.push("`iconPrefix` is required".to_string()),
        Some(Value::String(prefix)) if prefix.trim().is_empty() => {
            violations.push("`iconPrefix` must not be empty".to_string())
        }
        Some(Value::String(_)) => {}
        Some(_) => violations.push("`iconPrefix` must be a string".to_string()),
    }

    for field in ["excludeClasses", "excludeFilePath"] {
        match document.get(field) {
            None => {}
            Some(Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        violations.push(format!("`{}[{}]` must be a string", field, i));
                    }
                }
            }
            Some(_) => violations.push(format!("`{}` must be an array of strings", field)),
        }
    }

    violations
}

fn check_file_field(
    document: &Map<String, Value>,
    field: &str,
    extensions: &[&str],
    root: &Path,
    violations: &mut Vec<String>,
) {
    let value = match document.get(field) {
        None => {
            violations.push(format!("`{}` is required", field));
            return;
        }
        Some(Value::String(value)) => value,
        Some(_) => {
            violations.push(format!("`{}` must be a string", field));
            return;
        }
    };

    let has_extension = Path::new(value)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| ext.eq_ignore_ascii_case(x)));
    if !has_extension {
        let expected = extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(" or ");
        violations.push(format!("`{}` must end in {}: {}", field, expected, value));
    } else if !resolve_path(root, value).is_file() {
        violations.push(format!("`{}` file does not exist: {}", field, value));
    }
}
