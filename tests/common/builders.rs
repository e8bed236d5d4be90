//! Builders for on-disk log trees and supportconfig tarballs.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of log files laid out like a server's filesystem.
pub struct LogsTree {
    dir: TempDir,
}

impl LogsTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write one file at `rel`, creating intermediate directories.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A full four-source tree, flat-file layout.
pub fn full_tree() -> LogsTree {
    LogsTree::new()
        .with_file("salt-events.txt", super::BUS_LOG)
        .with_file("master", super::MASTER_LOG)
        .with_file("api", super::API_LOG)
        .with_file("rhn_web_ui.log", super::WEB_UI_LOG)
}

/// Build a `tar.gz` supportconfig holding the full tree under one top-level
/// directory, returning the archive path. The archive lives in `dir`.
pub fn full_targz(dir: &Path) -> PathBuf {
    let archive = dir.join("scc_uyuni_211111.tar.gz");
    let file = fs::File::create(&archive).unwrap();
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (rel, content) in [
        ("salt-events.txt", super::BUS_LOG),
        ("var/log/salt/master", super::MASTER_LOG),
        ("var/log/salt/api", super::API_LOG),
        ("var/log/rhn/rhn_web_ui.log", super::WEB_UI_LOG),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(
                &mut header,
                format!("scc_uyuni_211111/{rel}"),
                content.as_bytes(),
            )
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
    archive
}
