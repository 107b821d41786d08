//! Lint runner composing the four checks.
//!
//! Produces a `LintResult` with issues and warnings split by severity and
//! a summary. Each run builds fresh accumulators; nothing is carried
//! between runs.

use crate::checks::CHECKS;
use crate::config::RuleSet;
use crate::models::notebook::Notebook;
use crate::models::{LintResult, Severity, Summary};

#[derive(Debug, Clone, Copy, Default)]
/// Per-run switches.
pub struct LintOptions {
    /// Append advisory entries after findings.
    pub fix_suggestions: bool,
}

/// Run every check in order without progress reporting.
pub fn run_lint(notebook: &Notebook, rules: &RuleSet, opts: LintOptions) -> LintResult {
    run_lint_with(notebook, rules, opts, |_| {})
}

/// Run every check in order, calling `on_check` with each check's progress
/// label just before it runs.
pub fn run_lint_with(
    notebook: &Notebook,
    rules: &RuleSet,
    opts: LintOptions,
    mut on_check: impl FnMut(&str),
) -> LintResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    for def in CHECKS.iter() {
        on_check(def.label);
        for finding in (def.run)(&notebook.cells, rules, opts.fix_suggestions) {
            match finding.severity {
                Severity::Issue => issues.push(finding),
                Severity::Warning => warnings.push(finding),
            }
        }
    }
    let summary = Summary {
        issues: issues.len(),
        warnings: warnings.len(),
        cells: notebook.len(),
    };
    LintResult {
        issues,
        warnings,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::{Cell, CellKind};
    use crate::models::Outcome;

    fn sample() -> Notebook {
        Notebook::new(vec![
            Cell::new(0, CellKind::Markdown, "## 2.1 Estimators\nThe MLE is..."),
            Cell::new(1, CellKind::Code, "a = 1\nb = 2\nc = 3"),
            Cell::new(2, CellKind::Code, "m = np.mean(x)"),
        ])
    }

    #[test]
    fn test_findings_split_by_severity_in_check_order() {
        let res = run_lint(&sample(), &RuleSet::default(), LintOptions::default());
        assert_eq!(res.summary.issues, 2);
        assert_eq!(res.summary.warnings, 2);
        assert_eq!(res.summary.cells, 3);
        assert!(res.issues[0].message.contains("abbreviation 'MLE'"));
        assert!(res.issues[1].message.contains("Code cell has 3 lines"));
        assert!(res.warnings[0].message.contains("motivation paragraph"));
        assert!(res.warnings[1].message.contains("translation comment"));
        assert_eq!(res.outcome(), Outcome::Fail);
    }

    #[test]
    fn test_progress_labels_follow_fixed_order() {
        let mut labels = Vec::new();
        run_lint_with(
            &sample(),
            &RuleSet::default(),
            LintOptions::default(),
            |l| labels.push(l.to_string()),
        );
        assert_eq!(
            labels,
            vec![
                "Checking for abbreviations...",
                "Checking for motivation paragraphs...",
                "Checking code cell line discipline...",
                "Checking for translation comments...",
            ]
        );
    }

    #[test]
    fn test_warnings_only_still_pass() {
        let nb = Notebook::new(vec![Cell::new(0, CellKind::Code, "m = np.mean(x)")]);
        let res = run_lint(&nb, &RuleSet::default(), LintOptions::default());
        assert!(res.issues.is_empty());
        assert_eq!(res.warnings.len(), 1);
        assert_eq!(res.outcome(), Outcome::PassWithWarnings);
        assert!(res.passed());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let nb = sample();
        let rules = RuleSet::default();
        let opts = LintOptions {
            fix_suggestions: true,
        };
        assert_eq!(run_lint(&nb, &rules, opts), run_lint(&nb, &rules, opts));
    }

    #[test]
    fn test_empty_notebook_is_clean() {
        let res = run_lint(&Notebook::default(), &RuleSet::default(), LintOptions::default());
        assert_eq!(res.outcome(), Outcome::Clean);
    }
}
