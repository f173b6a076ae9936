// src/catalog/mod.rs
pub mod builder;

pub use builder::build;

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: &'static str,
    // lowercase, dot-prefixed; an empty list matches every regular file
    pub extensions: &'static [&'static str],
}

impl FilterSpec {
    pub fn matches(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext))
    }
}

pub const FILTER_SPECS: &[FilterSpec] = &[
    FilterSpec { name: "All Files", extensions: &[] },
    FilterSpec { name: "Music", extensions: &[".mp3", ".wav", ".flac"] },
    FilterSpec { name: "Video", extensions: &[".mp4", ".mkv", ".avi"] },
    FilterSpec { name: "Images", extensions: &[".jpg", ".jpeg", ".png", ".gif"] },
    FilterSpec { name: "Archives", extensions: &[".zip", ".rar", ".7z"] },
    FilterSpec { name: "Documents", extensions: &[".pdf", ".docx", ".txt"] },
];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FileRow {
    pub name: String,
    pub size_display: String,
    pub modified_display: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub rows: Vec<FileRow>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot access directory {path}: {source}")]
    DirectoryAccess { path: PathBuf, source: io::Error },

    #[error("cannot read metadata for {path}: {source}")]
    FileMetadata { path: PathBuf, source: io::Error },
}
