//! `denom run [$script] [args...]` — execute through the installed runtime.

use anyhow::{bail, Context, Result};
use clap::Args;

use denom_core::manifest::{self, MANIFEST_FILE_NAME};
use denom_core::schema::{DEFAULT_MAIN_ENTRY, KEY_MAIN_ARGS, KEY_MAIN_DENO_OPTIONS, KEY_MAIN_ENTRY};
use denom_core::{ConfigValue, ScriptCatalog};
use denom_runtime::{installer, EnvironmentConfig, ScriptRunner};

/// Arguments for `denom run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// `$<name>` selects a script from the manifest; everything else is
    /// appended to the script's argument list. With no `$` selector the
    /// main entry file runs.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// What the manifest resolved the run target to.
struct Target {
    path: String,
    args: Vec<String>,
    deno_options: Vec<String>,
    origin: String,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let dir = std::env::current_dir().context("cannot resolve current directory")?;
        let store = manifest::load(&dir)
            .with_context(|| format!("cannot load {MANIFEST_FILE_NAME}"))?;

        let (selector, extra) = match self.tokens.split_first() {
            Some((first, rest)) if first.starts_with('$') => {
                (Some(first[1..].to_owned()), rest.to_vec())
            }
            _ => (None, self.tokens.clone()),
        };

        let mut target = match selector {
            Some(name) => {
                let catalog = ScriptCatalog::new(&store);
                let entry = catalog
                    .resolve(&name)
                    .with_context(|| format!("no script named '{name}' in {MANIFEST_FILE_NAME}"))?;
                Target {
                    path: entry.path.clone(),
                    args: entry.args.clone(),
                    deno_options: entry.deno_options.clone(),
                    origin: format!("script '{name}'"),
                }
            }
            None => Target {
                path: store
                    .get(KEY_MAIN_ENTRY)
                    .and_then(ConfigValue::as_str)
                    .unwrap_or(DEFAULT_MAIN_ENTRY)
                    .to_owned(),
                args: string_list(&store, KEY_MAIN_ARGS),
                deno_options: string_list(&store, KEY_MAIN_DENO_OPTIONS),
                origin: format!("'{KEY_MAIN_ENTRY}'"),
            },
        };
        target.args.extend(extra);

        if !dir.join(&target.path).exists() {
            bail!(
                "script file '{}' ({} in {MANIFEST_FILE_NAME}) does not exist",
                target.path,
                target.origin
            );
        }

        let env = EnvironmentConfig::new();
        let runner = ScriptRunner::new(installer::binary_path(&dir), &env);
        runner.execute(&dir, &target.path, &target.deno_options, &target.args)?;
        Ok(())
    }
}

fn string_list(store: &denom_core::ConfigStore, key: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(ConfigValue::as_string_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}
