//! Notebook loading from disk.
//!
//! The file is read fully and closed before any check runs.

use crate::models::notebook::{Notebook, ShapeError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("Notebook not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read notebook {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Notebook {} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Notebook {} has an unexpected shape: {source}", path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
}

/// Load a notebook from `path`.
///
/// Existence is checked before reading so a missing file always reports
/// `NotFound` rather than an I/O error.
pub fn load_notebook(path: &Path) -> Result<Notebook, NotebookError> {
    if !path.exists() {
        return Err(NotebookError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let data = fs::read_to_string(path).map_err(|source| NotebookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_notebook(path, &data)
}

/// Parse notebook text; `path` is only used for error context.
pub fn parse_notebook(path: &Path, data: &str) -> Result<Notebook, NotebookError> {
    let doc: serde_json::Value =
        serde_json::from_str(data).map_err(|source| NotebookError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    Notebook::from_json(&doc).map_err(|source| NotebookError::Shape {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::CellKind;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("nb.ipynb");
        fs::write(
            &p,
            r###"{"cells": [{"cell_type": "markdown", "source": ["## 1.1 Intro\n", "text"]}]}"###,
        )
        .unwrap();
        let nb = load_notebook(&p).unwrap();
        assert_eq!(nb.len(), 1);
        assert_eq!(nb.cells[0].kind, CellKind::Markdown);
        assert_eq!(nb.cells[0].source, "## 1.1 Intro\ntext");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_notebook(&dir.path().join("absent.ipynb")).unwrap_err();
        assert!(matches!(err, NotebookError::NotFound { .. }));
        assert!(err.to_string().starts_with("Notebook not found at"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_notebook(Path::new("x.ipynb"), "{ not json").unwrap_err();
        assert!(matches!(err, NotebookError::Malformed { .. }));
        let err = parse_notebook(Path::new("x.ipynb"), "\"just a string\"").unwrap_err();
        assert!(matches!(err, NotebookError::Shape { .. }));
    }

    #[test]
    fn test_missing_cells_field_is_tolerated() {
        let nb = parse_notebook(Path::new("x.ipynb"), r#"{"nbformat": 4}"#).unwrap();
        assert!(nb.is_empty());
    }
}
