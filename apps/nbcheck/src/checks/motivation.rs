//! Motivation paragraphs for numbered subsections.
//!
//! A markdown cell whose first line looks like `## 3.2 Title` opens a
//! subsection. The motivation marker must appear in that cell or in a
//! markdown cell at position `index + 1` or `index + 2`. The window is
//! positional: code cells inside it are skipped but still use up a slot.

use crate::config::RuleSet;
use crate::models::notebook::Cell;
use crate::models::Finding;
use regex::Regex;
use std::sync::LazyLock;

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+\d+\.\d+\s+").expect("valid heading pattern"));

/// Number of cells after the heading searched for the marker.
const WINDOW: usize = 2;

pub fn check(cells: &[Cell], rules: &RuleSet, _fix_suggestions: bool) -> Vec<Finding> {
    let marker = rules.motivation_marker.as_str();
    let mut out = Vec::new();
    for (pos, cell) in cells.iter().enumerate() {
        if !cell.is_markdown() || !is_section_heading(cell) {
            continue;
        }
        let in_window = cells
            .iter()
            .skip(pos + 1)
            .take(WINDOW)
            .filter(|c| c.is_markdown())
            .any(|c| c.source.contains(marker));
        if cell.source.contains(marker) || in_window {
            continue;
        }
        out.push(Finding::warning(
            cell.index,
            format!(
                "Cell {}: Section '{}' may be missing a motivation paragraph",
                cell.index,
                cell.first_line().trim()
            ),
        ));
    }
    out
}

/// Only the first line of the source is tested.
fn is_section_heading(cell: &Cell) -> bool {
    SECTION_HEADING.is_match(cell.first_line())
}
