//! `denom update` — re-install the Deno runtime.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use denom_core::manifest::{self, MANIFEST_FILE_NAME};
use denom_core::schema::KEY_DENO_VERSION;
use denom_core::ConfigValue;
use denom_runtime::{installer, RuntimeInstaller};

/// Arguments for `denom update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let dir = std::env::current_dir().context("cannot resolve current directory")?;
        let store = manifest::load(&dir)
            .with_context(|| format!("cannot load {MANIFEST_FILE_NAME}"))?;

        let runtime = match store.get(KEY_DENO_VERSION).and_then(ConfigValue::as_str) {
            Some(version) => RuntimeInstaller::pinned(version),
            None => RuntimeInstaller::latest(),
        };

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

        println!("{}", format!("✓ Installed {}", runtime.version_tag()).green());
        Ok(())
    }
}
