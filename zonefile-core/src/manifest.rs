use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::writer::{zone_file_path, WriteError};

/// File name of the rendered manifest inside the output directory.
pub const MANIFEST_FILE: &str = "named.zones";

/// One `zone { ... };` declaration in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub zone: String,
    pub file: String,
}

/// Ordered list of zone declarations for a named.conf include file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Append a declaration for a zone whose backing file shares its name.
    pub fn push(&mut self, zone: impl Into<String>) {
        let zone = zone.into();
        let file = zone.clone();
        self.entries.push(ManifestEntry { zone, file });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the manifest body, one declaration per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "zone \"{}\" {{ type master; file \"{}\"; }};\n",
                entry.zone, entry.file
            ));
        }
        out
    }

    /// Write the manifest into `dir` as [`MANIFEST_FILE`].
    pub fn write(&self, dir: &Path) -> Result<PathBuf, WriteError> {
        let path = zone_file_path(dir, MANIFEST_FILE)?;
        std::fs::write(&path, self.render()).map_err(|source| WriteError::WriteFile {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
