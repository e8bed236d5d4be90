//! Supportconfig archive staging.
//!
//! A supportconfig tarball is unpacked into a temporary directory and the
//! logs root is the single top-level entry inside it. The staging directory
//! is removed when the run finishes unless the user asked to keep it.

use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported tarball compressions, detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Gzip,
    Xz,
    Bzip2,
}

impl ArchiveKind {
    /// Detect the compression from the archive file name.
    pub fn from_path(path: &Path) -> Option<ArchiveKind> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with("tar.gz") {
            Some(ArchiveKind::Gzip)
        } else if name.ends_with("txz") {
            Some(ArchiveKind::Xz)
        } else if name.ends_with("tar.bz2") {
            Some(ArchiveKind::Bzip2)
        } else {
            None
        }
    }
}

/// An unpacked archive awaiting collection and eventual cleanup.
#[derive(Debug)]
pub struct StagedArchive {
    dir: PathBuf,
}

impl StagedArchive {
    /// Unpack `archive` into a fresh staging directory.
    pub fn unpack(archive: &Path) -> anyhow::Result<StagedArchive> {
        if !archive.is_file() {
            bail!("supportconfig tarball does not exist: {}", archive.display());
        }
        let Some(kind) = ArchiveKind::from_path(archive) else {
            bail!(
                "supportconfig tarball format is unknown: {} (expected tar.gz, txz or tar.bz2)",
                archive.display()
            );
        };

        let dir = tempfile::Builder::new()
            .prefix("logweave-")
            .tempdir()
            .context("failed to create staging directory")?
            .keep();

        let file = fs::File::open(archive)
            .with_context(|| format!("failed to open {}", archive.display()))?;
        let unpacked = match kind {
            ArchiveKind::Gzip => tar::Archive::new(flate2::read::GzDecoder::new(file)).unpack(&dir),
            ArchiveKind::Xz => tar::Archive::new(xz2::read::XzDecoder::new(file)).unpack(&dir),
            ArchiveKind::Bzip2 => tar::Archive::new(bzip2::read::BzDecoder::new(file)).unpack(&dir),
        };
        unpacked.with_context(|| format!("failed to unpack {}", archive.display()))?;
        tracing::debug!(archive = %archive.display(), staging = %dir.display(), "unpacked supportconfig");

        Ok(StagedArchive { dir })
    }

    /// The logs root inside the staging directory: supportconfigs wrap
    /// everything in one top-level directory.
    pub fn logs_root(&self) -> anyhow::Result<PathBuf> {
        let first = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to list {}", self.dir.display()))?
            .next()
            .transpose()
            .with_context(|| format!("failed to list {}", self.dir.display()))?;
        match first {
            Some(entry) => Ok(entry.path()),
            None => bail!("unpacked archive is empty: {}", self.dir.display()),
        }
    }

    /// Remove the staging directory, or report where it was kept.
    pub fn cleanup(self, keep: bool) -> anyhow::Result<()> {
        if keep {
            println!("    * Staging directory kept at: {}", self.dir.display());
            return Ok(());
        }
        fs::remove_dir_all(&self.dir)
            .with_context(|| format!("failed to remove staging directory {}", self.dir.display()))
    }
}
