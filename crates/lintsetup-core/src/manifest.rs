//! package.json script and engine updates
//!
//! The manifest is handled as a loosely typed JSON object: only the
//! `scripts` and `engines` maps are touched, everything else must survive
//! the round trip byte-for-byte in content and key order.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest filename probed in the project directory
pub const MANIFEST_FILE: &str = "package.json";

/// Scripts merged into package.json when requested
pub const SCRIPTS: &[(&str, &str)] = &[
    ("lint", "eslint ."),
    ("lint:fix", "eslint . --fix"),
    ("format", "prettier --write ."),
    ("format:check", "prettier --check ."),
];

/// Engine constraints merged into package.json when requested
pub const ENGINES: &[(&str, &str)] = &[("node", ">=18.18.0")];

/// Errors from the manifest read-modify-write cycle
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path} does not contain a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of an update attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestUpdate {
    /// No package.json in the directory; nothing was written
    Skipped,
    /// package.json was rewritten with the requested entries
    Updated,
}

/// Merge the fixed script and/or engine tables into `dir`'s package.json.
///
/// A missing manifest is a no-op, not an error. Within `scripts` and
/// `engines` new entries win on name conflicts; every other key in the
/// manifest is preserved as-is. The file is rewritten with 2-space
/// indentation and a single trailing newline.
pub fn update_manifest(
    dir: &Path,
    add_scripts: bool,
    add_engines: bool,
) -> Result<ManifestUpdate, ManifestError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(ManifestUpdate::Skipped);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::Read {
        path: path.clone(),
        source: e,
    })?;

    let mut manifest: Value = serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject { path: path.clone() })?;

    if add_scripts {
        merge_entries(root, "scripts", SCRIPTS);
    }
    if add_engines {
        merge_entries(root, "engines", ENGINES);
    }

    let mut serialized = serde_json::to_string_pretty(&manifest).map_err(|e| {
        ManifestError::Parse {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;
    serialized.push('\n');

    std::fs::write(&path, serialized).map_err(|e| ManifestError::Write { path, source: e })?;

    Ok(ManifestUpdate::Updated)
}

/// Merge fixed entries into the named sub-map, creating it if absent.
/// New entries override same-named existing ones; a non-object value under
/// `key` is replaced with a fresh map.
fn merge_entries(root: &mut Map<String, Value>, key: &str, entries: &[(&str, &str)]) {
    let section = root
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !section.is_object() {
        *section = Value::Object(Map::new());
    }

    if let Some(map) = section.as_object_mut() {
        for (name, value) in entries {
            map.insert((*name).to_string(), Value::String((*value).to_string()));
        }
    }
}
