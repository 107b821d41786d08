//! Line discipline for code cells: at most `max_code_lines` significant
//! lines, except in plotting cells.

use crate::config::RuleSet;
use crate::models::notebook::Cell;
use crate::models::Finding;

pub fn check(cells: &[Cell], rules: &RuleSet, fix_suggestions: bool) -> Vec<Finding> {
    let mut out = Vec::new();
    for cell in cells.iter().filter(|c| c.is_code()) {
        if rules.is_plotting(&cell.source) {
            continue;
        }
        let n = significant_lines(&cell.source, rules);
        if n <= rules.max_code_lines {
            continue;
        }
        out.push(Finding::issue(
            cell.index,
            format!(
                "Cell {}: Code cell has {} lines (should be ≤{} lines)",
                cell.index, n, rules.max_code_lines
            ),
        ));
        if fix_suggestions {
            out.push(Finding::issue(
                cell.index,
                "  → Suggestion: Split this cell into multiple cells, each doing one conceptual operation",
            ));
        }
    }
    out
}

/// Count lines that are neither blank nor comment-only.
pub fn significant_lines(source: &str, rules: &RuleSet) -> usize {
    source
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty() && !rules.is_comment(l))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::CellKind;
    use crate::models::Severity;

    fn code(index: usize, s: &str) -> Cell {
        Cell::new(index, CellKind::Code, s)
    }

    #[test]
    fn test_two_lines_pass_three_fail() {
        let rules = RuleSet::default();
        let two = code(0, "# E[X]: mean (Expectation)\nx = 1\n\n   \ny = x + 1\n# done");
        assert_eq!(significant_lines(&two.source, &rules), 2);
        assert!(check(&[two], &rules, false).is_empty());

        let three = code(4, "a = 1\nb = 2\nc = a + b\n");
        let out = check(&[three], &rules, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Issue);
        assert_eq!(out[0].message, "Cell 4: Code cell has 3 lines (should be ≤2 lines)");
    }

    #[test]
    fn test_plotting_cells_are_exempt() {
        let rules = RuleSet::default();
        let src = (0..10)
            .map(|i| format!("v{i} = {i}"))
            .chain(std::iter::once("PLT.show()".to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(check(&[code(0, &src)], &rules, false).is_empty());

        let titled = "a = 1\nb = 2\nax.set_Title('x')";
        assert!(check(&[code(1, titled)], &rules, false).is_empty());
    }

    #[test]
    fn test_fix_suggestion_adds_advisory_issue() {
        let rules = RuleSet::default();
        let out = check(&[code(2, "a = 1\nb = 2\nc = 3")], &rules, true);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].severity, Severity::Issue);
        assert!(out[1].message.contains("Suggestion: Split this cell"));
    }

    #[test]
    fn test_markdown_cells_ignored() {
        let rules = RuleSet::default();
        let md = Cell::new(0, CellKind::Markdown, "a\nb\nc\nd");
        assert!(check(&[md], &rules, true).is_empty());
    }
}
