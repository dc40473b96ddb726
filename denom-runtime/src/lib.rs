//! denom runtime library — binary install, environment, script execution.
//!
//! Public API surface:
//! - [`installer`] — [`RuntimeInstaller`] download / unpack
//! - [`env`] — [`EnvironmentConfig`] and [`EnvPrecedence`]
//! - [`runner`] — [`ScriptRunner`]
//! - [`error`] — [`InstallError`], [`ExecError`]

pub mod env;
pub mod error;
pub mod installer;
pub mod runner;

pub use env::{EnvPrecedence, EnvironmentConfig};
pub use error::{ExecError, InstallError};
pub use installer::RuntimeInstaller;
pub use runner::ScriptRunner;
