use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::zone::Zone;

/// Errors that can occur while writing zone files to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to write a zone or manifest file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Zone name cannot be used as a file name inside the output directory.
    #[error("zone name {0:?} is not usable as a file name")]
    UnsafeZoneName(String),
}

/// Create the output directory (and any missing parents) if absent.
///
/// On Unix new directories get mode 0755.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Resolve the path of a zone file inside `dir`.
///
/// Zone names are built from address octets and domain labels, so a name
/// containing a path separator or dot-dot component means corrupt input;
/// refusing it keeps every write inside the output directory.
pub fn zone_file_path(dir: &Path, zone: &str) -> Result<PathBuf, WriteError> {
    let unsafe_name = zone.is_empty()
        || zone.starts_with('.')
        || zone.contains('/')
        || zone.contains('\\')
        || zone.split('.').any(|label| label.is_empty());
    if unsafe_name {
        return Err(WriteError::UnsafeZoneName(zone.to_string()));
    }
    Ok(dir.join(zone))
}

/// Render `zone` and write it into `dir` under its own name.
///
/// The file handle is opened, written, and closed before returning, so a
/// run over hundreds of zones never holds more than one descriptor.
pub fn write_zone(dir: &Path, zone: &Zone) -> Result<PathBuf, WriteError> {
    let path = zone_file_path(dir, &zone.name)?;
    fs::write(&path, zone.render()).map_err(|source| WriteError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
