//! `denom.json` persistence.
//!
//! # API pattern
//!
//! Every function takes the project directory explicitly, so tests run
//! against a `TempDir` and never touch the real working directory. The
//! CLI passes its resolved cwd.
//!
//! Write flow: serialize → `denom.json.tmp` sibling → `rename`. The
//! `.tmp` lives in the same directory as the target (same filesystem).

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ManifestError;
use crate::schema;
use crate::store::ConfigStore;

/// Fixed manifest file name in the project root.
pub const MANIFEST_FILE_NAME: &str = "denom.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<dir>/denom.json` — pure, no I/O.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE_NAME)
}

/// Whether `<dir>/denom.json` exists.
pub fn exists(dir: &Path) -> bool {
    manifest_path(dir).exists()
}

// ---------------------------------------------------------------------------
// Structural transform
// ---------------------------------------------------------------------------

/// Re-nest the store's flat dot-path keys into a JSON document.
///
/// Keys are emitted in schema order, and sibling keys sharing a prefix
/// (`main.entry`, `main.args`) merge into one nested object. Script lists
/// stay a single array-valued leaf.
pub fn to_document(store: &ConfigStore) -> Value {
    let mut root = serde_json::Map::new();
    for entry in schema::entries() {
        if let Some(value) = store.get(entry.key) {
            insert_nested(&mut root, entry.key, value.to_json());
        }
    }
    Value::Object(root)
}

fn insert_nested(map: &mut serde_json::Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            map.insert(key.to_owned(), value);
        }
        Some((head, rest)) => {
            let slot = map
                .entry(head.to_owned())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            // No schema key is a prefix of another, so the slot is
            // always an object here.
            if let Value::Object(nested) = slot {
                insert_nested(nested, rest, value);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load and validate `<dir>/denom.json` into a fresh store.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path context) on malformed JSON, and
/// `ManifestError::Validation` when the document fails the schema.
pub fn load(dir: &Path) -> Result<ConfigStore, ManifestError> {
    let path = manifest_path(dir);
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    let document: Value = serde_json::from_str(&contents)
        .map_err(|e| ManifestError::Parse { path: path.clone(), source: e })?;

    let mut store = ConfigStore::new();
    store
        .ingest(&document)
        .map_err(|e| ManifestError::Validation { path, source: e })?;
    Ok(store)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the store to `<dir>/denom.json`.
pub fn save(dir: &Path, store: &ConfigStore) -> Result<(), ManifestError> {
    let path = manifest_path(dir);
    let tmp_path = dir.join(format!("{MANIFEST_FILE_NAME}.tmp"));

    let mut json = serde_json::to_string_pretty(&to_document(store))?;
    json.push('\n');
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
