//! File-write utilities shared by the store, export, and service install.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Replace `path` with `contents` without ever exposing a partially written
/// file: the bytes go to a temp file in the destination directory first and
/// are moved into place with a rename.
///
/// This protects against torn writes only. Two processes rewriting the same
/// file still race with last-write-wins semantics.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), io::Error> {
    let dir = parent_dir(path);
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Create the destination's parent directory when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), io::Error> {
    let dir = parent_dir(path);
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
