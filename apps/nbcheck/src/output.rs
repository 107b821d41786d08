//! Console report rendering.
//!
//! Rendering is pure (`render_*` return strings) so the layout can be
//! tested; the `print_*` wrappers write to stdout. Colors follow the
//! `NO_COLOR` convention.

use crate::models::{Finding, LintResult, Outcome};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use std::path::Path;

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Banner naming the notebook file.
pub fn render_banner(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    format!("\n{}\nValidating: {}\n{}\n", rule(), name, rule())
}

/// Final one-line verdict for a run.
pub fn summary_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Clean => "✅ Notebook passes all validation checks!",
        Outcome::PassWithWarnings => {
            "✅ Notebook has no critical issues (warnings can be reviewed)"
        }
        Outcome::Fail => "❌ Notebook has issues that should be fixed",
    }
}

fn push_items(out: &mut String, items: &[Finding]) {
    for f in items {
        out.push_str("  ");
        out.push_str(&f.message);
        out.push('\n');
    }
}

/// Results section: issues, warnings, and the verdict.
pub fn render_results(res: &LintResult, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\nVALIDATION RESULTS ({} cells)\n{}\n\n",
        rule(),
        res.summary.cells,
        rule()
    ));

    if res.issues.is_empty() {
        let line = "✅ No critical issues found!";
        if color {
            out.push_str(&line.green().to_string());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    } else {
        let head = format!("❌ ISSUES FOUND ({}):", res.summary.issues);
        if color {
            out.push_str(&head.red().bold().to_string());
        } else {
            out.push_str(&head);
        }
        out.push_str("\n\n");
        push_items(&mut out, &res.issues);
    }

    if !res.warnings.is_empty() {
        let head = format!("⚠️  WARNINGS ({}):", res.summary.warnings);
        out.push('\n');
        if color {
            out.push_str(&head.yellow().bold().to_string());
        } else {
            out.push_str(&head);
        }
        out.push_str("\n\n");
        push_items(&mut out, &res.warnings);
    }

    out.push_str(&format!("\n{}\n", rule()));
    let verdict = summary_line(res.outcome());
    if color {
        out.push_str(&verdict.bold().to_string());
    } else {
        out.push_str(verdict);
    }
    out.push_str(&format!("\n{}\n", rule()));
    out
}

pub fn print_banner(path: &Path) {
    println!("{}", render_banner(path));
}

pub fn print_progress(label: &str) {
    println!("{}", label);
}

pub fn print_results(res: &LintResult) {
    println!("{}", render_results(res, use_colors()));
}
