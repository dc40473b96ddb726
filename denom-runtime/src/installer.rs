//! Downloading and unpacking the Deno runtime binary.
//!
//! Release archives come from the official GitHub releases, either the
//! latest build or a version pinned in the manifest. The archive lands
//! next to its destination and is removed after a successful unpack.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};

use crate::error::InstallError;

const LATEST_URL_BASE: &str = "https://github.com/denoland/deno/releases/latest/download";
const VERSIONED_URL_BASE: &str = "https://github.com/denoland/deno/releases/download";

#[cfg(windows)]
pub const BINARY_NAME: &str = "deno.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "deno";

/// Release target triple for the running host.
pub fn platform_target() -> Result<&'static str, InstallError> {
    if cfg!(all(target_os = "linux", target_arch = "x86_64")) {
        Ok("x86_64-unknown-linux-gnu")
    } else if cfg!(all(target_os = "linux", target_arch = "aarch64")) {
        Ok("aarch64-unknown-linux-gnu")
    } else if cfg!(all(target_os = "macos", target_arch = "x86_64")) {
        Ok("x86_64-apple-darwin")
    } else if cfg!(all(target_os = "macos", target_arch = "aarch64")) {
        Ok("aarch64-apple-darwin")
    } else if cfg!(all(target_os = "windows", target_arch = "x86_64")) {
        Ok("x86_64-pc-windows-msvc")
    } else {
        Err(InstallError::UnsupportedPlatform {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        })
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<root>/deno/bin` — where the binary is unpacked.
pub fn install_dir(root: &Path) -> PathBuf {
    root.join("deno").join("bin")
}

/// `<root>/deno/bin/deno` (`deno.exe` on Windows).
pub fn binary_path(root: &Path) -> PathBuf {
    install_dir(root).join(BINARY_NAME)
}

/// Whether the runtime binary is already present under `root`.
pub fn is_installed(root: &Path) -> bool {
    binary_path(root).exists()
}

/// Hex SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

// ---------------------------------------------------------------------------
// Installer
// ---------------------------------------------------------------------------

/// Fetches and unpacks one release of the Deno runtime.
pub struct RuntimeInstaller {
    url_base: String,
    version_tag: String,
}

impl RuntimeInstaller {
    /// Track the latest published release.
    pub fn latest() -> Self {
        Self {
            url_base: LATEST_URL_BASE.to_owned(),
            version_tag: "deno@latest".to_owned(),
        }
    }

    /// Pin a specific release. Accepts the version with or without the
    /// release tag's leading `v`.
    pub fn pinned(version: &str) -> Self {
        let bare = version.strip_prefix('v').unwrap_or(version);
        Self {
            url_base: format!("{VERSIONED_URL_BASE}/v{bare}"),
            version_tag: format!("deno@{bare}"),
        }
    }

    /// Human-facing tag (`deno@latest` or `deno@<version>`) for status
    /// messages.
    pub fn version_tag(&self) -> &str {
        &self.version_tag
    }

    /// Full URL of the release archive for this host.
    pub fn download_url(&self) -> Result<String, InstallError> {
        Ok(format!("{}/{}", self.url_base, archive_name()?))
    }

    /// Stream the release archive into `dest_dir`, returning the archive
    /// path.
    pub fn download(&self, dest_dir: &Path) -> Result<PathBuf, InstallError> {
        let url = self.download_url()?;
        std::fs::create_dir_all(dest_dir)?;

        let response = ureq::get(&url).call().map_err(|e| InstallError::Download {
            version_tag: self.version_tag.clone(),
            url: url.clone(),
            source: Box::new(e),
        })?;

        let archive = dest_dir.join(archive_name()?);
        let mut file = File::create(&archive)?;
        std::io::copy(&mut response.into_reader(), &mut file)?;
        Ok(archive)
    }

    /// Unpack a downloaded archive into `dest`.
    ///
    /// On extraction failure the partially-unpacked destination is
    /// removed best-effort before the error is returned. With
    /// `remove_archive` the archive file is deleted after a successful
    /// unpack.
    pub fn unpack(
        &self,
        archive: &Path,
        dest: &Path,
        remove_archive: bool,
    ) -> Result<(), InstallError> {
        std::fs::create_dir_all(dest)?;
        let file = File::open(archive)?;
        let mut tarball = tar::Archive::new(GzDecoder::new(file));
        if let Err(e) = tarball.unpack(dest) {
            let _ = std::fs::remove_dir_all(dest);
            return Err(InstallError::Archive {
                path: archive.to_path_buf(),
                source: e,
            });
        }
        if remove_archive {
            std::fs::remove_file(archive)?;
        }
        Ok(())
    }

    /// Download and unpack into `<root>/deno/bin`, returning the binary
    /// path.
    pub fn install(&self, root: &Path) -> Result<PathBuf, InstallError> {
        let bin_dir = install_dir(root);
        let archive = self.download(&bin_dir)?;
        self.unpack(&archive, &bin_dir, true)?;
        Ok(binary_path(root))
    }
}

fn archive_name() -> Result<String, InstallError> {
    Ok(format!("deno-{}.tar.gz", platform_target()?))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    /// Build a tar.gz containing a single `deno` file with the given
    /// contents.
    fn fake_release_archive(dir: &Path, contents: &[u8]) -> PathBuf {
        let payload = dir.join(BINARY_NAME);
        std::fs::write(&payload, contents).unwrap();

        let archive_path = dir.join("deno-test.tar.gz");
        let file = File::create(&archive_path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.append_path_with_name(&payload, BINARY_NAME).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
        archive_path
    }

    #[test]
    fn latest_and_pinned_urls_differ() {
        let latest = RuntimeInstaller::latest();
        let pinned = RuntimeInstaller::pinned("1.40.0");
        assert_eq!(latest.version_tag(), "deno@latest");
        assert_eq!(pinned.version_tag(), "deno@1.40.0");

        let latest_url = latest.download_url().expect("url");
        let pinned_url = pinned.download_url().expect("url");
        assert!(latest_url.contains("/releases/latest/download/"));
        assert!(pinned_url.contains("/releases/download/v1.40.0/"));
        assert!(pinned_url.ends_with(".tar.gz"));
    }

    #[test]
    fn pinned_accepts_a_leading_v() {
        let pinned = RuntimeInstaller::pinned("v1.40.0");
        assert_eq!(pinned.version_tag(), "deno@1.40.0");
        assert!(pinned.download_url().expect("url").contains("/v1.40.0/"));
    }

    #[test]
    fn unpack_places_the_binary() {
        let work = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let archive = fake_release_archive(work.path(), b"#!/bin/sh\nexit 0\n");

        let installer = RuntimeInstaller::latest();
        installer
            .unpack(&archive, &install_dir(root.path()), false)
            .expect("unpack");

        assert!(is_installed(root.path()));
        assert!(archive.exists(), "archive kept without remove_archive");
    }

    #[test]
    fn unpack_removes_archive_when_asked() {
        let work = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let archive = fake_release_archive(work.path(), b"payload");

        RuntimeInstaller::latest()
            .unpack(&archive, &install_dir(root.path()), true)
            .expect("unpack");
        assert!(!archive.exists());
    }

    #[test]
    fn reinstall_overwrites_the_binary() {
        let work = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let bin_dir = install_dir(root.path());
        let installer = RuntimeInstaller::latest();

        let first = fake_release_archive(work.path(), b"release one");
        installer.unpack(&first, &bin_dir, true).expect("unpack");
        let before = sha256_hex(&std::fs::read(binary_path(root.path())).unwrap());

        let second = fake_release_archive(work.path(), b"release two");
        installer.unpack(&second, &bin_dir, true).expect("unpack");
        let after = sha256_hex(&std::fs::read(binary_path(root.path())).unwrap());

        assert_ne!(before, after);
    }

    #[test]
    fn failed_unpack_cleans_up_destination() {
        let work = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let garbage = work.path().join("deno-test.tar.gz");
        std::fs::write(&garbage, b"not a gzip stream").unwrap();

        let dest = install_dir(root.path());
        let err = RuntimeInstaller::latest()
            .unpack(&garbage, &dest, false)
            .expect_err("unpack should fail");
        assert!(matches!(err, InstallError::Archive { .. }));
        assert!(!dest.exists(), "partial destination removed");
    }

    #[test]
    fn binary_path_is_under_deno_bin() {
        let root = Path::new("/project");
        let path = binary_path(root);
        assert!(path.starts_with("/project/deno/bin"));
        assert!(path.ends_with(BINARY_NAME));
    }

    #[test]
    fn sha256_hex_is_stable() {
        assert_eq!(
            sha256_hex(b"denom"),
            sha256_hex(b"denom"),
        );
        assert_ne!(sha256_hex(b"a"), sha256_hex(b"b"));
        assert_eq!(sha256_hex(b"").len(), 64);
    }
}
