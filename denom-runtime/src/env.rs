//! Environment variables passed to spawned scripts.
//!
//! The defaults point Deno's cache and install root into the project
//! directory, so a denom project is self-contained. Custom variables can
//! be layered on top; which side wins on a key collision is an explicit
//! choice of the caller, not a global.

use std::collections::HashMap;
use std::path::Path;

pub const ENV_DENO_DIR: &str = "DENO_DIR";
pub const ENV_DENO_INSTALL_ROOT: &str = "DENO_INSTALL_ROOT";

/// Which side of the default/custom split wins on a key collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvPrecedence {
    #[default]
    DefaultsWin,
    CustomWins,
}

/// The environment mapping handed to every spawned script.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    defaults: HashMap<String, String>,
    custom: HashMap<String, String>,
    precedence: EnvPrecedence,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentConfig {
    /// Built-in defaults: `DENO_DIR=deno`, `DENO_INSTALL_ROOT=deno/bin`
    /// (native separators), resolved against the script's working
    /// directory by the runtime itself.
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert(ENV_DENO_DIR.to_owned(), "deno".to_owned());
        defaults.insert(
            ENV_DENO_INSTALL_ROOT.to_owned(),
            Path::new("deno").join("bin").to_string_lossy().into_owned(),
        );
        Self {
            defaults,
            custom: HashMap::new(),
            precedence: EnvPrecedence::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: EnvPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Add or replace a custom variable.
    pub fn set_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.insert(key.into(), value.into());
    }

    /// Merge defaults and custom variables according to the precedence
    /// flag.
    pub fn resolved(&self) -> HashMap<String, String> {
        let (base, overlay) = match self.precedence {
            EnvPrecedence::DefaultsWin => (&self.custom, &self.defaults),
            EnvPrecedence::CustomWins => (&self.defaults, &self.custom),
        };
        let mut merged = base.clone();
        merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}
