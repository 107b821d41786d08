//! nbcheck core library.
//!
//! Validates computational notebooks against the "concisely rigorous" style
//! guide for statistical-education material. The linter is read-only: it
//! loads one notebook, runs four independent checks, and reports issues
//! (which fail the run) and warnings (which do not).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Rule tables (abbreviations, keyword sets) and overrides.
//! - `loader`: Reading a notebook file into cells.
//! - `checks`: The four checks, each a pure function over cells.
//! - `lint`: Runs the checks in order and collects findings.
//! - `models`: Cells, findings, and lint result structs.
//! - `output`: Console report rendering.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod lint;
pub mod loader;
pub mod models;
pub mod output;
pub mod utils;
