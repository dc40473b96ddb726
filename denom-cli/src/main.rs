//! denom — project bootstrap CLI for the Deno scripting runtime.
//!
//! # Usage
//!
//! ```text
//! denom                              (initialize, same as `denom init`)
//! denom init [--yes] [--skip-install]
//! denom run [$script] [args...]      (alias: r)
//! denom update                       (alias: u)
//! denom version                      (alias: v, also -v / --version)
//! ```

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{init::InitArgs, run::RunArgs, update::UpdateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "denom",
    about = "Bootstrap and run Deno scripting projects",
    long_about = None,
    disable_version_flag = true,
)]
struct Cli {
    /// Print version information.
    #[arg(short = 'v', long = "version")]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a denom project in the current directory.
    Init(InitArgs),

    /// Run a declared script (`$name`) or the main entry file.
    #[command(alias = "r")]
    Run(RunArgs),

    /// Re-install the Deno runtime, honoring a pinned `deno.version`.
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Print version information.
    #[command(alias = "v")]
    Version,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        return commands::version::run();
    }
    match cli.command {
        // Bare `denom` bootstraps a project, like the explicit form.
        None => InitArgs::default().run(),
        Some(Commands::Init(args)) => args.run(),
        Some(Commands::Run(args)) => args.run(),
        Some(Commands::Update(args)) => args.run(),
        Some(Commands::Version) => commands::version::run(),
    }
}
