//! Recording of raw endpoint replies, for building offline test fixtures.
//! Compiled only when the `test-mode` feature is enabled.
//!
//! A reply from `endpoint` requested with `key` lands in
//! `<TS_FIXDIR or tests/fixtures>/<endpoint>_<key>.<ext>`. Incremental feeds pass their
//! cursor as the key, so every step of a watch or map session is kept as its own file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("TS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name for one reply. Keys are instrument codes or cursors, but anything outside
/// `[A-Za-z0-9_-]` is replaced so a key can never escape the fixture directory.
pub(crate) fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{endpoint}_{key}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<Option<PathBuf>, std::io::Error> {
    record_fixture_in(&fixture_dir(), endpoint, key, ext, body)
}

/// Write `body` under `dir`. Blank replies are skipped and reported as `None`: an idle
/// market watch answers with nothing, and that must not replace a recorded snapshot.
pub(crate) fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<Option<PathBuf>, std::io::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture_name(endpoint, key, ext));
    fs::write(&path, body)?;
    Ok(Some(path))
}
