//! The fixed manifest schema.
//!
//! Every key a `denom.json` may contain is declared here, together with the
//! value kind the store will accept for it. Changing the schema means
//! changing this table — there is no runtime mutation.

use std::fmt;

/// The schema-declared value kind for a manifest key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    StringList,
    ScriptList,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Number => write!(f, "number"),
            Kind::Boolean => write!(f, "boolean"),
            Kind::StringList => write!(f, "string[]"),
            Kind::ScriptList => write!(f, "object[]"),
        }
    }
}

/// One recognized dot-path key and its expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub key: &'static str,
    pub kind: Kind,
}

pub const KEY_NAME: &str = "name";
pub const KEY_VERSION: &str = "version";
pub const KEY_AUTHOR: &str = "author";
pub const KEY_MAIN_ENTRY: &str = "main.entry";
pub const KEY_MAIN_ARGS: &str = "main.args";
pub const KEY_MAIN_DENO_OPTIONS: &str = "main.denoOptions";
pub const KEY_DENO_VERSION: &str = "deno.version";
pub const KEY_SCRIPTS: &str = "scripts";

/// Default main entry file, used when `main.entry` is not set.
pub const DEFAULT_MAIN_ENTRY: &str = "main.ts";

static SCHEMA: [SchemaEntry; 8] = [
    SchemaEntry { key: KEY_NAME, kind: Kind::String },
    SchemaEntry { key: KEY_VERSION, kind: Kind::String },
    SchemaEntry { key: KEY_AUTHOR, kind: Kind::String },
    SchemaEntry { key: KEY_MAIN_ENTRY, kind: Kind::String },
    SchemaEntry { key: KEY_MAIN_ARGS, kind: Kind::StringList },
    SchemaEntry { key: KEY_MAIN_DENO_OPTIONS, kind: Kind::StringList },
    SchemaEntry { key: KEY_DENO_VERSION, kind: Kind::String },
    SchemaEntry { key: KEY_SCRIPTS, kind: Kind::ScriptList },
];

/// Resolve the expected kind for a dot-path key, or `None` for an
/// unrecognized key.
pub fn lookup(key: &str) -> Option<Kind> {
    SCHEMA.iter().find(|e| e.key == key).map(|e| e.kind)
}

/// The full set of recognized keys.
pub fn entries() -> &'static [SchemaEntry] {
    &SCHEMA
}
