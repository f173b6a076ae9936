// src/export/mod.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::Catalog;

pub const EXPORT_HEADERS: [&str; 3] = ["Name", "Size", "Modified Date"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    EmptyCatalog,

    #[error("cannot encode listing: {0}")]
    Encode(#[from] csv::Error),

    #[error("cannot write {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub fn write_catalog(
    catalog: &Catalog,
    headers: &[&str],
    destination: &Path,
) -> Result<(), ExportError> {
    if catalog.is_empty() {
        warn!("export refused: catalog is empty");
        return Err(ExportError::EmptyCatalog);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in &catalog.rows {
        writer.serialize(row)?;
    }
    let encoded = writer.into_inner().map_err(|err| ExportError::Io {
        path: destination.to_path_buf(),
        source: io::Error::other(err.to_string()),
    })?;

    // staged next to the destination and renamed into place: the
    // destination either holds the complete listing or is never created
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut staged = NamedTempFile::new_in(parent).map_err(|source| ExportError::Io {
        path: destination.to_path_buf(),
        source,
    })?;
    staged.write_all(&encoded).map_err(|source| ExportError::Io {
        path: destination.to_path_buf(),
        source,
    })?;
    staged.persist(destination).map_err(|err| ExportError::Io {
        path: destination.to_path_buf(),
        source: err.error,
    })?;

    info!("exported {} rows to {:?}", catalog.len(), destination);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FileRow;

    fn row(name: &str, size: &str, modified: &str) -> FileRow {
        FileRow {
            name: name.to_string(),
            size_display: size.to_string(),
            modified_display: modified.to_string(),
        }
    }

    fn read_records(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_catalog_is_refused_and_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let err = write_catalog(&Catalog::default(), &EXPORT_HEADERS, &dest).unwrap_err();
        assert!(matches!(err, ExportError::EmptyCatalog));
        assert!(!dest.exists());
    }

    #[test]
    fn test_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let catalog = Catalog {
            rows: vec![row("a.txt", "1.00 KB", "2024-01-01 00:00:00")],
        };

        write_catalog(&catalog, &EXPORT_HEADERS, &dest).unwrap();

        let records = read_records(&dest);
        assert_eq!(
            records,
            vec![
                vec!["Name".to_string(), "Size".into(), "Modified Date".into()],
                vec!["a.txt".to_string(), "1.00 KB".into(), "2024-01-01 00:00:00".into()],
            ]
        );
    }

    #[test]
    fn test_fields_with_delimiters_and_quotes_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let tricky = "weird, \"name\".txt";
        let catalog = Catalog {
            rows: vec![row(tricky, "0.00 B", "2024-06-30 12:34:56")],
        };

        write_catalog(&catalog, &EXPORT_HEADERS, &dest).unwrap();

        let records = read_records(&dest);
        assert_eq!(records[1][0], tricky);
    }

    #[test]
    fn test_rows_keep_catalog_order() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let catalog = Catalog {
            rows: vec![
                row("z.txt", "1.00 KB", "2024-01-01 00:00:00"),
                row("a.txt", "2.00 KB", "2024-01-02 00:00:00"),
            ],
        };

        write_catalog(&catalog, &EXPORT_HEADERS, &dest).unwrap();

        let records = read_records(&dest);
        assert_eq!(records[1][0], "z.txt");
        assert_eq!(records[2][0], "a.txt");
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("out.csv");
        let catalog = Catalog {
            rows: vec![row("a.txt", "1.00 KB", "2024-01-01 00:00:00")],
        };

        let err = write_catalog(&catalog, &EXPORT_HEADERS, &dest).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!dest.exists());
    }
}
