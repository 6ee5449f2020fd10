//! Resolves the CLI's single positional argument into a concrete file list.
//!
//! Per spec.md's §6, the argument is one of: a single file, a comma- or
//! space-separated list of files, or a directory (non-recursive, every
//! recognized-extension file inside it). An empty argument falls back to
//! the working directory.

use std::path::{Path, PathBuf};

use crate::error::{DriverError, DriverResult};

const RECOGNIZED_EXTENSIONS: &[&str] = &["jack", "vm", "asm"];

pub fn discover_inputs(spec: &str, working_dir: &Path) -> DriverResult<Vec<PathBuf>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return list_directory(working_dir);
    }

    let pieces: Vec<&str> = spec
        .split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if pieces.len() > 1 {
        let mut paths = Vec::with_capacity(pieces.len());
        for piece in pieces {
            paths.push(resolve_one(piece, working_dir));
        }
        return Ok(paths);
    }

    let path = resolve_one(pieces[0], working_dir);
    if path.is_dir() {
        list_directory(&path)
    } else {
        Ok(vec![path])
    }
}

fn resolve_one(piece: &str, working_dir: &Path) -> PathBuf {
    let path = Path::new(piece);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

fn list_directory(dir: &Path) -> DriverResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| DriverError::Io(dir.to_path_buf(), e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DriverError::Io(dir.to_path_buf(), e))?;
        let path = entry.path();
        let is_recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext));
        if path.is_file() && is_recognized {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
