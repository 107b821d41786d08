//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nbcheck",
    version,
    about = "Lint statistical-education notebooks",
    long_about = "nbcheck — validate a notebook against the concisely rigorous style guide.\n\nChecks: abbreviations in markdown, motivation paragraphs for numbered sections, two-line discipline for code cells, and translation comments on statistical code.",
    after_help = "Exit status: 0 when no issues are found (warnings allowed), 1 otherwise.\n\nExamples:\n  nbcheck notebooks/02_estimators.ipynb\n  nbcheck notebooks/02_estimators.ipynb --fix-suggestions"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to the notebook (.ipynb)")]
    pub notebook: PathBuf,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Append a fix suggestion after each finding that has one")]
    pub fix_suggestions: bool,
}
