//! Test helpers for writing catalogues and running commands in memory.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Catalogue with two routable museums and one without coordinates.
pub(super) const SAMPLE_CATALOGUE: &str = r#"[
    {"id": 1, "name": "Rijksmuseum", "address": "Museumstraat 1",
     "coords": {"lat": 52.3600, "lng": 4.8852}},
    {"id": 2, "name": "Royal Palace", "address": "Dam 1",
     "coords": {"lat": 52.3702, "lng": 4.8952}},
    {"id": 3, "name": "Closed Archive", "address": "Somewhere 1"}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding `museums.json`.
#[derive(Debug)]
pub(super) struct CatalogueDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl CatalogueDir {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("museums.json");
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn sample() -> Self {
        Self::with_contents(SAMPLE_CATALOGUE)
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}
