//! Script execution through the installed runtime binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::EnvironmentConfig;
use crate::error::ExecError;

const COMMAND_RUN: &str = "run";

/// Argument vector for one script run:
/// `run <denoOptions...> <script> <args...>`.
pub fn build_invocation(deno_options: &[String], script: &str, args: &[String]) -> Vec<String> {
    let mut argv = Vec::with_capacity(2 + deno_options.len() + args.len());
    argv.push(COMMAND_RUN.to_owned());
    argv.extend(deno_options.iter().cloned());
    argv.push(script.to_owned());
    argv.extend(args.iter().cloned());
    argv
}

/// Spawns the runtime binary and forwards its output.
///
/// One child at a time, no retries, no timeout. The child runs with the
/// project directory as cwd and the resolved environment mapping layered
/// over the parent's.
pub struct ScriptRunner<'a> {
    binary: PathBuf,
    env: &'a EnvironmentConfig,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(binary: PathBuf, env: &'a EnvironmentConfig) -> Self {
        Self { binary, env }
    }

    /// Run `script` to completion. On exit 0 the captured stdout goes to
    /// the caller's stdout; on failure the captured stderr is printed and
    /// the exit code is returned as [`ExecError::Failed`].
    pub fn execute(
        &self,
        project_dir: &Path,
        script: &str,
        deno_options: &[String],
        args: &[String],
    ) -> Result<(), ExecError> {
        if !self.binary.exists() {
            return Err(ExecError::BinaryMissing {
                path: self.binary.clone(),
            });
        }

        let argv = build_invocation(deno_options, script, args);
        let output = Command::new(&self.binary)
            .args(&argv)
            .current_dir(project_dir)
            .envs(self.env.resolved())
            .output()
            .map_err(|e| ExecError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        if output.status.success() {
            std::io::stdout().write_all(&output.stdout)?;
            Ok(())
        } else {
            std::io::stderr().write_all(&output.stderr)?;
            Err(ExecError::Failed {
                code: output.status.code().unwrap_or(-1),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
