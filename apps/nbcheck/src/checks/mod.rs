//! The four style checks. Each is a pure function over the cell list and
//! returns its own findings; none depends on another's output.

pub mod abbreviations;
pub mod discipline;
pub mod motivation;
pub mod translation;

use crate::config::RuleSet;
use crate::models::notebook::Cell;
use crate::models::Finding;

/// Signature shared by all checks. The flag enables fix-suggestion
/// advisories.
pub type CheckFn = fn(&[Cell], &RuleSet, bool) -> Vec<Finding>;

/// A check paired with the progress label printed before it runs.
pub struct CheckDef {
    pub label: &'static str,
    pub run: CheckFn,
}

/// Checks in execution order.
pub const CHECKS: [CheckDef; 4] = [
    CheckDef {
        label: "Checking for abbreviations...",
        run: abbreviations::check,
    },
    CheckDef {
        label: "Checking for motivation paragraphs...",
        run: motivation::check,
    },
    CheckDef {
        label: "Checking code cell line discipline...",
        run: discipline::check,
    },
    CheckDef {
        label: "Checking for translation comments...",
        run: translation::check,
    },
];
