//! `denom init` — interactive first-time project setup.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use denom_core::manifest::{self, MANIFEST_FILE_NAME};
use denom_core::schema::{
    DEFAULT_MAIN_ENTRY, KEY_AUTHOR, KEY_MAIN_ENTRY, KEY_NAME, KEY_VERSION,
};
use denom_core::ConfigStore;
use denom_runtime::{installer, RuntimeInstaller};

use crate::prompt;

const DEFAULT_PROJECT_NAME: &str = "MyDenomProject";
const DEFAULT_PROJECT_VERSION: &str = "0.0.1";
const DEFAULT_AUTHOR: &str = "Unknown";

/// Arguments for `denom init`.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Accept every default without prompting (also skips the
    /// re-initialization confirmation).
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Write the manifest but do not download the Deno runtime.
    #[arg(long)]
    pub skip_install: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let dir = std::env::current_dir().context("cannot resolve current directory")?;

        if manifest::exists(&dir) && !self.yes {
            let again =
                prompt::confirm("Project already initialized. Do you want to initialize again?")?;
            if !again {
                return Ok(());
            }
        }

        let mut store = ConfigStore::new();
        for (key, question, default) in [
            (KEY_NAME, "Project Name", DEFAULT_PROJECT_NAME),
            (KEY_VERSION, "Version", DEFAULT_PROJECT_VERSION),
            (KEY_AUTHOR, "Author", DEFAULT_AUTHOR),
            (KEY_MAIN_ENTRY, "Main entry file", DEFAULT_MAIN_ENTRY),
        ] {
            let answer = if self.yes {
                default.to_owned()
            } else {
                prompt::ask(question, default)?
            };
            store
                .set(key, json!(answer))
                .with_context(|| format!("invalid value for '{key}'"))?;
        }

        println!("{}", format!("Generating {MANIFEST_FILE_NAME} ...").green());
        manifest::save(&dir, &store)
            .with_context(|| format!("failed to write {MANIFEST_FILE_NAME}"))?;

        if !self.skip_install {
            let runtime = RuntimeInstaller::latest();
            let bin_dir = installer::install_dir(&dir);

            println!(
                "{}",
                format!("Downloading {} ...", runtime.version_tag()).green()
            );
            let archive = runtime
                .download(&bin_dir)
                .with_context(|| format!("failed to download {}", runtime.version_tag()))?;

            println!(
                "{}",
                format!("Unpacking {} ...", runtime.version_tag()).green()
            );
            runtime
                .unpack(&archive, &bin_dir, true)
                .with_context(|| format!("failed to unpack {}", runtime.version_tag()))?;
        }

        println!("{}", "✓ Go and make an awesome project!".green());
        Ok(())
    }
}
