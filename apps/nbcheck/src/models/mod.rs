//! Shared data models for notebook cells and lint outputs.

pub mod notebook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a finding. Only issues affect the pass/fail outcome.
pub enum Severity {
    Issue,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single lint finding attached to a cell.
pub struct Finding {
    pub cell_index: usize,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn issue(cell_index: usize, message: impl Into<String>) -> Self {
        Finding {
            cell_index,
            severity: Severity::Issue,
            message: message.into(),
        }
    }

    pub fn warning(cell_index: usize, message: impl Into<String>) -> Self {
        Finding {
            cell_index,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Aggregated counts shown in the results section headers.
pub struct Summary {
    pub issues: usize,
    pub warnings: usize,
    pub cells: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Three-way classification of a lint run.
pub enum Outcome {
    Clean,
    PassWithWarnings,
    Fail,
}

impl Outcome {
    /// Warnings never gate the result; only issues do.
    pub fn passed(self) -> bool {
        !matches!(self, Outcome::Fail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lint results container. Findings keep check order, then append order.
pub struct LintResult {
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub summary: Summary,
}

impl LintResult {
    pub fn outcome(&self) -> Outcome {
        match (self.issues.is_empty(), self.warnings.is_empty()) {
            (false, _) => Outcome::Fail,
            (true, true) => Outcome::Clean,
            (true, false) => Outcome::PassWithWarnings,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome().passed()
    }
}
