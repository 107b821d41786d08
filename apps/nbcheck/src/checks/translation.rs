//! Translation comments on cells that implement statistical formulas.
//!
//! Expected first line: `# [Formula]: [Explanation] ([Concept])`. Only the
//! comment marker and the colon are verified.
//!
//! Plot cells are skipped using the narrower `translation_skip_keywords`
//! table, so a statistics cell that mentions `hist` or `title` is still
//! checked.

use crate::config::RuleSet;
use crate::models::notebook::Cell;
use crate::models::Finding;

pub fn check(cells: &[Cell], rules: &RuleSet, fix_suggestions: bool) -> Vec<Finding> {
    let mut out = Vec::new();
    for cell in cells.iter().filter(|c| c.is_code()) {
        if cell.source.trim().is_empty() || rules.skips_translation(&cell.source) {
            continue;
        }
        if !rules.has_stats_operation(&cell.source) {
            continue;
        }
        let first = cell.first_line().trim();
        if !rules.is_comment(first) {
            out.push(Finding::warning(
                cell.index,
                format!(
                    "Cell {}: Statistical operation without translation comment",
                    cell.index
                ),
            ));
            if fix_suggestions {
                out.push(Finding::warning(
                    cell.index,
                    "  → Suggestion: Add comment like '# [Formula]: [Plain English] ([Concept])'",
                ));
            }
        } else if !first.contains(':') {
            out.push(Finding::warning(
                cell.index,
                format!(
                    "Cell {}: Translation comment may not follow pattern",
                    cell.index
                ),
            ));
            if fix_suggestions {
                out.push(Finding::warning(
                    cell.index,
                    "  → Expected pattern: '# [LaTeX]: [Explanation] ([Concept])'",
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::CellKind;
    use crate::models::Severity;

    fn code(index: usize, s: &str) -> Cell {
        Cell::new(index, CellKind::Code, s)
    }

    fn run(cells: &[Cell], fix: bool) -> Vec<Finding> {
        check(cells, &RuleSet::default(), fix)
    }

    #[test]
    fn test_translation_comment_with_colon_is_accepted() {
        let cell = code(0, "# E[X]: average value (Expectation)\nm = np.mean(x)");
        assert!(run(&[cell], true).is_empty());
    }

    #[test]
    fn test_missing_comment_warns_once() {
        let cell = code(3, "print(x)\nm = np.mean(x)");
        let out = run(&[cell], false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);
        assert_eq!(
            out[0].message,
            "Cell 3: Statistical operation without translation comment"
        );
    }

    #[test]
    fn test_comment_without_colon_warns() {
        let out = run(&[code(1, "  # average value\nm = x.mean()")], false);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].message,
            "Cell 1: Translation comment may not follow pattern"
        );
    }

    #[test]
    fn test_fix_suggestions_add_advisory_warnings() {
        let out = run(&[code(0, "m = np.mean(x)")], true);
        assert_eq!(out.len(), 2);
        assert!(out[1].message.contains("[Formula]: [Plain English] ([Concept])"));

        let out = run(&[code(0, "# average\nm = np.mean(x)")], true);
        assert_eq!(out.len(), 2);
        assert!(out[1].message.contains("Expected pattern"));
        assert!(out.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_histogram_statistics_cell_still_needs_comment() {
        let cell = code(0, "counts, edges = np.histogram(estimates)");
        let out = run(&[cell], false);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].message,
            "Cell 0: Statistical operation without translation comment"
        );

        let titled = code(1, "# Var(X): spread (Variance)\nv = x.var()  # title later");
        assert!(run(&[titled], false).is_empty());
    }

    #[test]
    fn test_skips_plotting_empty_and_non_stats_cells() {
        let cells = [
            code(0, "plt.hist(np.mean(x))"),
            code(1, "   \n"),
            code(2, "x = [1, 2, 3]"),
            // Keywords are case sensitive.
            code(3, "m = NP.MEAN(x)"),
            Cell::new(4, CellKind::Markdown, "np.mean"),
        ];
        assert!(run(&cells, true).is_empty());
    }
}
