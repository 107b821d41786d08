//! Notebook document model: an ordered list of cells.
//!
//! Parsing is tolerant per cell: unknown `cell_type` values become
//! `CellKind::Other` and an absent or oddly shaped `source` becomes an
//! empty string. Only the document shape itself (top-level object, `cells`
//! array when present) is enforced.

use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cell discriminator. Checks only look at markdown and code cells.
pub enum CellKind {
    Markdown,
    Code,
    Other,
}

impl CellKind {
    fn from_json(v: Option<&Json>) -> Self {
        match v.and_then(Json::as_str) {
            Some("markdown") => CellKind::Markdown,
            Some("code") => CellKind::Code,
            _ => CellKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One notebook cell with its zero-based position and joined source.
pub struct Cell {
    pub index: usize,
    pub kind: CellKind,
    pub source: String,
}

impl Cell {
    pub fn new(index: usize, kind: CellKind, source: impl Into<String>) -> Self {
        Cell {
            index,
            kind,
            source: source.into(),
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.kind == CellKind::Markdown
    }

    pub fn is_code(&self) -> bool {
        self.kind == CellKind::Code
    }

    /// First line of the source (empty when the source is empty).
    pub fn first_line(&self) -> &str {
        self.source.split('\n').next().unwrap_or("")
    }

    fn from_json(index: usize, v: &Json) -> Self {
        let kind = CellKind::from_json(v.get("cell_type"));
        let source = join_source(v.get("source"));
        Cell {
            index,
            kind,
            source,
        }
    }
}

/// Concatenate a `source` field stored either as one string or as an array
/// of line fragments. Non-string fragments are skipped.
fn join_source(v: Option<&Json>) -> String {
    match v {
        Some(Json::String(s)) => s.clone(),
        Some(Json::Array(parts)) => parts.iter().filter_map(Json::as_str).collect(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A loaded notebook. Immutable once constructed.
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Why a JSON value could not be read as a notebook.
pub enum ShapeError {
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("'cells' is not an array")]
    CellsNotArray,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Notebook { cells }
    }

    /// Build a notebook from an already parsed JSON document.
    ///
    /// A missing `cells` field yields an empty notebook.
    pub fn from_json(doc: &Json) -> Result<Self, ShapeError> {
        let obj = doc.as_object().ok_or(ShapeError::NotAnObject)?;
        let cells = match obj.get("cells") {
            None => Vec::new(),
            Some(Json::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, c)| Cell::from_json(i, c))
                .collect(),
            Some(_) => return Err(ShapeError::CellsNotArray),
        };
        Ok(Notebook { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
