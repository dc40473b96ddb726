//! Domain types for the denom manifest store.
//!
//! Values are kept in their manifest-facing shapes; numbers stay as
//! `serde_json::Number` so saving a loaded manifest reproduces it exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Script entries
// ---------------------------------------------------------------------------

/// One named script from the manifest's `scripts` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(
        rename = "denoOptions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub deno_options: Vec<String>,
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.path)
    }
}

// ---------------------------------------------------------------------------
// Stored values
// ---------------------------------------------------------------------------

/// A validated value held by the store under one dot-path key.
///
/// The variant is fixed by the schema kind of the key, so consumers can
/// match without re-checking types.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    StringList(Vec<String>),
    Scripts(Vec<ScriptEntry>),
}

impl ConfigValue {
    /// The stored value rendered back into a JSON document fragment.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::String(s) => serde_json::Value::String(s.clone()),
            ConfigValue::Number(n) => serde_json::Value::Number(n.clone()),
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::StringList(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
            ConfigValue::Scripts(entries) => serde_json::Value::Array(
                entries.iter().map(ScriptEntry::to_json).collect(),
            ),
        }
    }

    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string-list payload, if this is a string-list value.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::StringList(items) => Some(items),
            _ => None,
        }
    }
}

impl ScriptEntry {
    /// Serialize into a manifest-shaped JSON object. `args` and
    /// `denoOptions` are always materialized, even when empty, so the
    /// saved form is stable.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        obj.insert("name".into(), serde_json::Value::String(self.name.clone()));
        obj.insert("path".into(), serde_json::Value::String(self.path.clone()));
        obj.insert(
            "args".into(),
            serde_json::Value::Array(
                self.args
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
        );
        obj.insert(
            "denoOptions".into(),
            serde_json::Value::Array(
                self.deno_options
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
        );
        serde_json::Value::Object(obj)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
