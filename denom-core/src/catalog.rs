//! Read-only script lookup over a [`ConfigStore`].

use crate::schema;
use crate::store::ConfigStore;
use crate::types::{ConfigValue, ScriptEntry};

/// Borrowed view of the store's `scripts` value.
///
/// Thin by design: the store already guarantees the value's shape, so the
/// catalog only answers "which scripts are there" and "which one is named X".
pub struct ScriptCatalog<'a> {
    store: &'a ConfigStore,
}

impl<'a> ScriptCatalog<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// All declared scripts in manifest order; empty when the manifest
    /// declares none.
    pub fn list(&self) -> &'a [ScriptEntry] {
        match self.store.get(schema::KEY_SCRIPTS) {
            Some(ConfigValue::Scripts(entries)) => entries,
            _ => &[],
        }
    }

    /// The script with the given name, if declared.
    pub fn resolve(&self, name: &str) -> Option<&'a ScriptEntry> {
        self.store.find_script(name)
    }
}
