// src/catalog/builder.rs
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{Catalog, CatalogError, FileRow, FilterSpec};
use crate::utils::format::{format_size, format_time};

pub fn build(directory: &Path, filter: &FilterSpec) -> Result<Catalog, CatalogError> {
    debug!("building catalog: dir={:?} filter={}", directory, filter.name);

    let dir_meta = fs::metadata(directory).map_err(|source| {
        warn!("cannot access {:?}: {}", directory, source);
        CatalogError::DirectoryAccess {
            path: directory.to_path_buf(),
            source,
        }
    })?;
    if !dir_meta.is_dir() {
        return Err(CatalogError::DirectoryAccess {
            path: directory.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut rows = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| scan_error(directory, err))?;

        // symlinks resolve to their target: a link to a regular file is a
        // regular file, a link to a directory or a dangling link is not
        let file_type = entry.file_type();
        let metadata = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) => meta,
                Err(_) => continue,
            }
        } else if file_type.is_file() {
            entry
                .metadata()
                .map_err(|err| scan_error(directory, err))?
        } else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !filter.matches(&name) {
            continue;
        }

        let modified = metadata
            .modified()
            .map_err(|source| CatalogError::FileMetadata {
                path: entry.path().to_path_buf(),
                source,
            })?;

        rows.push(FileRow {
            name,
            size_display: format_size(metadata.len()),
            modified_display: format_time(modified),
        });
    }

    info!(
        "catalog built: dir={:?} filter={} rows={}",
        directory,
        filter.name,
        rows.len()
    );
    Ok(Catalog { rows })
}

// a failure on the directory itself is an access error, a failure on one of
// its entries aborts the scan as a metadata error
fn scan_error(directory: &Path, err: walkdir::Error) -> CatalogError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| directory.to_path_buf());
    let depth = err.depth();
    let source = io::Error::from(err);
    if depth == 0 {
        CatalogError::DirectoryAccess { path, source }
    } else {
        CatalogError::FileMetadata { path, source }
    }
}
