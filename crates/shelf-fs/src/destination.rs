//! Output destination resolution
//!
//! Generated shelves go either to a caller-chosen path or to a fresh,
//! uniquely named file under a dedicated subdirectory of the system temp
//! directory. Nothing here touches process-wide temp settings.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result, io};

/// Directory that receives generated shelves when no path is given.
pub fn temp_shelf_dir(temp_dir_name: &str) -> PathBuf {
    std::env::temp_dir().join(temp_dir_name)
}

/// Resolve the path the merged shelf is written to.
///
/// With an explicit path, its parent directory must already exist. Without
/// one, the temp subdirectory is created if needed and a new empty file with
/// the shelf extension is reserved inside it.
pub fn resolve_destination(
    explicit: Option<&Path>,
    temp_dir_name: &str,
    extension: &str,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.is_dir() {
            return Err(Error::DestinationDirMissing {
                path: parent.to_path_buf(),
            });
        }
        return Ok(path.to_path_buf());
    }

    let dir = temp_shelf_dir(temp_dir_name);
    reserve_temp_file(&dir, extension)
}

/// Write `content` to the resolved destination and return its path.
///
/// A temp destination reserved by this call is removed again when the write
/// fails, so failed runs leave nothing behind in the temp shelf directory.
pub fn write_to_destination(
    explicit: Option<&Path>,
    temp_dir_name: &str,
    extension: &str,
    content: &[u8],
) -> Result<PathBuf> {
    let destination = resolve_destination(explicit, temp_dir_name, extension)?;
    match explicit {
        Some(_) => io::write_atomic(&destination, content)?,
        None => write_reserved(&destination, content)?,
    }
    Ok(destination)
}

fn write_reserved(reserved: &Path, content: &[u8]) -> Result<()> {
    io::write_atomic(reserved, content).inspect_err(|_| {
        if let Err(e) = fs::remove_file(reserved) {
            tracing::warn!(
                path = %reserved.display(),
                error = %e,
                "Failed to remove reserved shelf file"
            );
        }
    })
}

/// Reserve a uniquely named, persistent file inside `dir`.
fn reserve_temp_file(dir: &Path, extension: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let suffix = format!(".{extension}");
    let reserved = tempfile::Builder::new()
        .prefix("shelf_")
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?
        .into_temp_path()
        .keep()
        .map_err(|e| Error::io(dir, e.error))?;

    tracing::debug!(path = %reserved.display(), "Reserved temporary shelf file");
    Ok(reserved)
}
