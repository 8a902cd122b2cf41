// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::data::DataSet;
use crate::error::{Result, TrackerError};

/// Write the export file described by `export`, replacing any previous one.
/// The file is flushed and synced before returning the path written to.
pub fn write_export(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, ds, export.include_headers, export.format.delim())?;

    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    debug!(path = %path.display(), rows = ds.len(), "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(TrackerError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out/prices.csv")));
    }

    #[test]
    fn file_in_the_way_of_a_directory() {
        let p = std::env::temp_dir().join("crypto_tracker_not_a_dir");
        fs::write(&p, "x").unwrap();
        assert!(matches!(ensure_directory(&p), Err(TrackerError::Config(_))));
    }
}
