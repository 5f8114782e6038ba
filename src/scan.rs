//! Directory scanning for SVG sources.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension recognized as an icon source.
pub const SVG_EXTENSION: &str = ".svg";

/// Lists the SVG files directly inside `dir`.
///
/// The scan is not recursive and skips anything that is not a regular file,
/// including directories whose name ends in `.svg`. Entries come back in
/// listing order, which is unspecified; callers sort before emitting.
pub fn scan_svgs(dir: &Path) -> Result<Vec<PathBuf>> {
    let scan_error = |source: io::Error| Error::Scan {
        dir: dir.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(dir).map_err(scan_error)?;
    if !metadata.is_dir() {
        return Err(scan_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| scan_error(err.into()))?;
        let is_svg = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(SVG_EXTENSION));
        if entry.file_type().is_file() && is_svg {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = paths.len(), "scanned icon directory");
    Ok(paths)
}
