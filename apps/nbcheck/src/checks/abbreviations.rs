//! Forbidden abbreviations in markdown cells.
//!
//! A hit is a whole-word occurrence of a table term that is not directly
//! flanked by a backtick on either side. Backticks delimit inline code,
//! where abbreviations are allowed.

use crate::config::RuleSet;
use crate::models::notebook::Cell;
use crate::models::Finding;
use regex::Regex;

/// Emit one issue per occurrence, terms in table order.
pub fn check(cells: &[Cell], rules: &RuleSet, _fix_suggestions: bool) -> Vec<Finding> {
    let matchers: Vec<(Regex, &str, &str)> = rules
        .abbreviations
        .iter()
        .filter(|a| !a.term.is_empty())
        .filter_map(|a| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(&a.term))).ok()?;
            Some((re, a.term.as_str(), a.expansion.as_str()))
        })
        .collect();

    let mut out = Vec::new();
    for cell in cells.iter().filter(|c| c.is_markdown()) {
        for (re, term, expansion) in &matchers {
            for _ in bare_occurrences(re, &cell.source) {
                out.push(Finding::issue(
                    cell.index,
                    format!(
                        "Cell {}: Found abbreviation '{}' (should be '{}')",
                        cell.index, term, expansion
                    ),
                ));
            }
        }
    }
    out
}

/// Byte offsets of matches not adjacent to a backtick.
fn bare_occurrences<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = usize> + 'a {
    let bytes = text.as_bytes();
    re.find_iter(text)
        .filter(move |m| {
            let before = m.start().checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(m.end()).copied();
            before != Some(b'`') && after != Some(b'`')
        })
        .map(|m| m.start())
}
