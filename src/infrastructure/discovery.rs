//! Markdown file discovery

use crate::error::{QiitaError, Result};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the markdown files directly inside `dir`.
///
/// Only regular files (after following symlinks) whose name ends in `.md` are
/// returned; subdirectories are not descended into. Paths are absolute and in
/// directory-listing order.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let root = absolute_dir(dir)?;
    let discovery_error = |source: io::Error| QiitaError::Discovery {
        path: root.clone(),
        source,
    };

    let metadata = std::fs::metadata(&root).map_err(discovery_error)?;
    if !metadata.is_dir() {
        return Err(discovery_error(io::Error::other("not a directory")));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| {
            discovery_error(
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other("symlink loop")),
            )
        })?;

        if entry.file_type().is_file() && is_markdown_name(entry.file_name().to_str()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_markdown_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| n.ends_with(".md"))
}

fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| QiitaError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(dir))
}
