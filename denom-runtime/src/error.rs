//! Error types for denom-runtime.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while downloading or unpacking the Deno runtime.
#[derive(Debug, Error)]
pub enum InstallError {
    /// No release artifact exists for this OS/architecture pair.
    #[error("unsupported platform: {os}/{arch}")]
    UnsupportedPlatform {
        os: &'static str,
        arch: &'static str,
    },

    /// HTTP request failed or returned a non-success status.
    #[error("failed to download {version_tag} from {url}: {source}")]
    Download {
        version_tag: String,
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The downloaded archive could not be unpacked.
    #[error("failed to unpack {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while running a script through the installed binary.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The runtime binary is not installed where the project expects it.
    #[error("deno binary not found at {path}; run 'denom' to install it")]
    BinaryMissing { path: PathBuf },

    /// The child process could not be started at all.
    #[error("failed to spawn {binary}: {source}")]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script ran and exited non-zero. `-1` when killed by a signal.
    #[error("script exited with status {code}")]
    Failed { code: i32 },

    /// Forwarding captured output to the caller failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
