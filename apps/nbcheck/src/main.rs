//! nbcheck CLI binary entry point.
//! Loads the notebook, runs the checks, prints the report, and maps the
//! result to an exit status. Everything, diagnostics included, goes to
//! stdout.

use clap::error::ErrorKind;
use clap::Parser;
use nbcheck::cli::Cli;
use nbcheck::config::RuleSet;
use nbcheck::lint::{self, LintOptions};
use nbcheck::loader;
use nbcheck::output;
use nbcheck::utils;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors go to stdout and exit 1, not clap's default 2.
                print!("{}", e.render());
                std::process::exit(1);
            }
        },
    };

    if !cli.notebook.exists() {
        println!(
            "{} Notebook not found at {}",
            utils::error_prefix(),
            cli.notebook.display()
        );
        std::process::exit(1);
    }

    let notebook = match loader::load_notebook(&cli.notebook) {
        Ok(nb) => nb,
        Err(e) => {
            println!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    };
    if notebook.is_empty() {
        println!("{} Notebook has no cells.", utils::note_prefix());
    }

    let rules = RuleSet::default();
    let opts = LintOptions {
        fix_suggestions: cli.fix_suggestions,
    };
    output::print_banner(&cli.notebook);
    let result = lint::run_lint_with(&notebook, &rules, opts, output::print_progress);
    output::print_results(&result);

    std::process::exit(if result.passed() { 0 } else { 1 });
}
