//! The schema-driven configuration store.
//!
//! A flat map from dot-path keys to validated values. Every write goes
//! through the schema, so readers never re-check types. Ingest validates
//! the whole document into a staging buffer first; a rejected document
//! leaves the store untouched.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::{self, Kind};
use crate::types::{ConfigValue, ScriptEntry};

/// Manifest-facing name of a JSON value's runtime type.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Typed, dot-path-addressable key/value store backing `denom.json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    values: BTreeMap<String, ConfigValue>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a nested JSON document and flatten it into the store.
    ///
    /// The root must be a JSON object. Nested objects extend the dot-path;
    /// every leaf must match a schema entry. Staged entries are committed
    /// only after the whole document validates, overwriting any existing
    /// values at the same keys.
    pub fn ingest(&mut self, document: &Value) -> Result<(), ValidationError> {
        let root = match document {
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::UnsupportedType {
                    key: "(root)".to_owned(),
                    actual: json_type_name(other).to_owned(),
                })
            }
        };

        let mut staged = Vec::new();
        collect("", root, &mut staged)?;
        for (key, value) in staged {
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Exact-match lookup. Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Validate and store a single leaf value.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), ValidationError> {
        let validated = validate_leaf(key, &value)?;
        self.values.insert(key.to_owned(), validated);
        Ok(())
    }

    /// First script whose name matches, if any.
    pub fn find_script(&self, name: &str) -> Option<&ScriptEntry> {
        match self.get(schema::KEY_SCRIPTS)? {
            ConfigValue::Scripts(entries) => entries.iter().find(|e| e.name == name),
            _ => None,
        }
    }

    /// Re-nest the flat keys back into a JSON document.
    pub fn to_document(&self) -> Value {
        crate::manifest::to_document(self)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn collect(
    prefix: &str,
    object: &serde_json::Map<String, Value>,
    staged: &mut Vec<(String, ConfigValue)>,
) -> Result<(), ValidationError> {
    for (segment, value) in object {
        let key = join_key(prefix, segment);
        match value {
            Value::Object(nested) => collect(&key, nested, staged)?,
            leaf => staged.push((key.clone(), validate_leaf(&key, leaf)?)),
        }
    }
    Ok(())
}

fn validate_leaf(key: &str, value: &Value) -> Result<ConfigValue, ValidationError> {
    let kind = schema::lookup(key).ok_or_else(|| ValidationError::UnknownKey {
        key: key.to_owned(),
    })?;

    if value.is_null() {
        return Err(ValidationError::UnsupportedType {
            key: key.to_owned(),
            actual: "null".to_owned(),
        });
    }

    let mismatch = || ValidationError::TypeMismatch {
        key: key.to_owned(),
        expected: kind,
        actual: json_type_name(value).to_owned(),
    };

    match kind {
        Kind::String => match value {
            Value::String(s) => Ok(ConfigValue::String(s.clone())),
            _ => Err(mismatch()),
        },
        Kind::Number => match value {
            Value::Number(n) => Ok(ConfigValue::Number(n.clone())),
            _ => Err(mismatch()),
        },
        Kind::Boolean => match value {
            Value::Bool(b) => Ok(ConfigValue::Bool(*b)),
            _ => Err(mismatch()),
        },
        Kind::StringList => match value {
            Value::Array(items) => Ok(ConfigValue::StringList(string_items(key, items)?)),
            _ => Err(mismatch()),
        },
        Kind::ScriptList => match value {
            Value::Array(items) => Ok(ConfigValue::Scripts(script_items(key, items)?)),
            _ => Err(mismatch()),
        },
    }
}

/// Decode a StringList array. Non-string scalars are a kind mismatch;
/// nested arrays, objects, and nulls cannot be stored at all.
fn string_items(key: &str, items: &[Value]) -> Result<Vec<String>, ValidationError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => out.push(s.clone()),
            Value::Bool(_) | Value::Number(_) => {
                return Err(ValidationError::TypeMismatch {
                    key: key.to_owned(),
                    expected: Kind::StringList,
                    actual: json_type_name(item).to_owned(),
                })
            }
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Err(ValidationError::UnsupportedType {
                    key: key.to_owned(),
                    actual: json_type_name(item).to_owned(),
                })
            }
        }
    }
    Ok(out)
}

/// Decode the scripts array element by element. `name` and `path` are
/// required and non-empty; `args` and `denoOptions` default to empty.
fn script_items(key: &str, items: &[Value]) -> Result<Vec<ScriptEntry>, ValidationError> {
    let mut out: Vec<ScriptEntry> = Vec::with_capacity(items.len());
    for item in items {
        let obj = match item {
            Value::Object(obj) => obj,
            other => {
                return Err(ValidationError::TypeMismatch {
                    key: key.to_owned(),
                    expected: Kind::ScriptList,
                    actual: json_type_name(other).to_owned(),
                })
            }
        };

        let name = required_string(key, obj, "name")?;
        let path = required_string(key, obj, "path")?;
        let args = optional_string_list(key, obj, "args")?;
        let deno_options = optional_string_list(key, obj, "denoOptions")?;

        if out.iter().any(|e| e.name == name) {
            return Err(ValidationError::DuplicateScriptName { name });
        }
        out.push(ScriptEntry {
            name,
            path,
            args,
            deno_options,
        });
    }
    Ok(out)
}

fn required_string(
    key: &str,
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | None => Err(ValidationError::MissingRequiredField {
            field,
            key: key.to_owned(),
        }),
        Some(other) => Err(ValidationError::TypeMismatch {
            key: key.to_owned(),
            expected: Kind::String,
            actual: json_type_name(other).to_owned(),
        }),
    }
}

fn optional_string_list(
    key: &str,
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ValidationError> {
    match obj.get(field) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => string_items(key, items),
        Some(other) => Err(ValidationError::TypeMismatch {
            key: key.to_owned(),
            expected: Kind::StringList,
            actual: json_type_name(other).to_owned(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
