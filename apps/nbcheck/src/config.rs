//! Rule tables and their optional file-based overrides.
//!
//! The built-in tables (`RuleSet::default()`) cover the style guide's
//! abbreviation list, plotting keywords, and statistical keywords. A
//! `RulesCfg` loaded from TOML or YAML can be merged over them:
//! - `abbreviations`: entries replace the expansion of an existing term or
//!   are appended as new terms (table order is report order).
//! - `plotting_keywords`, `translation_skip_keywords`, `stats_keywords`:
//!   replace the defaults when set.
//! - `max_code_lines`, `comment_marker`, `motivation_marker`: replace the
//!   defaults when set.
//!
//! Overrides precedence: config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// A forbidden abbreviation and the expansion to write instead.
pub struct Abbreviation {
    pub term: String,
    pub expansion: String,
}

impl Abbreviation {
    pub fn new(term: &str, expansion: &str) -> Self {
        Abbreviation {
            term: term.to_string(),
            expansion: expansion.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved rule tables used by the checks.
pub struct RuleSet {
    pub abbreviations: Vec<Abbreviation>,
    /// Matched against the lowercased source.
    pub plotting_keywords: Vec<String>,
    /// Narrower plotting test used by the translation-comment check.
    /// Matched against the lowercased source.
    pub translation_skip_keywords: Vec<String>,
    /// Matched case-sensitively.
    pub stats_keywords: Vec<String>,
    pub max_code_lines: usize,
    pub comment_marker: String,
    pub motivation_marker: String,
}

const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("RV", "Random Variable"),
    ("PMF", "Probability Mass Function"),
    ("PDF", "Probability Density Function"),
    ("CDF", "Cumulative Distribution Function"),
    ("SE", "Standard Error"),
    ("SD", "Standard Deviation"),
    ("MSE", "Mean Squared Error"),
    ("MVUE", "Minimum Variance Unbiased Estimator"),
    ("CRLB", "Cramér-Rao Lower Bound"),
    ("MLE", "Maximum Likelihood Estimator"),
    ("LLN", "Law of Large Numbers"),
    ("CLT", "Central Limit Theorem"),
    ("IID", "Independent and Identically Distributed"),
    ("WLLN", "Weak Law of Large Numbers"),
    ("SLLN", "Strong Law of Large Numbers"),
];

const DEFAULT_PLOTTING_KEYWORDS: &[&str] = &[
    "plt.", "plot", "scatter", "hist", "xlabel", "ylabel", "title", "legend",
];

const DEFAULT_TRANSLATION_SKIP_KEYWORDS: &[&str] = &["plt.", "plot"];

const DEFAULT_STATS_KEYWORDS: &[&str] = &[
    ".mean()",
    ".var()",
    ".std()",
    "np.mean",
    "np.var",
    "np.std",
    "stats.",
    "rvs(",
    "sem(",
    "ttest",
    "interval",
    "fisher_information",
    "bias",
    "mse",
    "estimates",
    "sample_mean",
    "standard_error",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|(t, e)| Abbreviation::new(t, e))
                .collect(),
            plotting_keywords: strings(DEFAULT_PLOTTING_KEYWORDS),
            translation_skip_keywords: strings(DEFAULT_TRANSLATION_SKIP_KEYWORDS),
            stats_keywords: strings(DEFAULT_STATS_KEYWORDS),
            max_code_lines: 2,
            comment_marker: "#".to_string(),
            motivation_marker: "Motivation:".to_string(),
        }
    }
}

impl RuleSet {
    /// Expansion for `term`, if it is in the table.
    pub fn expansion(&self, term: &str) -> Option<&str> {
        self.abbreviations
            .iter()
            .find(|a| a.term == term)
            .map(|a| a.expansion.as_str())
    }

    /// A cell is a plotting cell when its lowercased source contains any
    /// plotting keyword.
    pub fn is_plotting(&self, source: &str) -> bool {
        contains_any_lowercased(source, &self.plotting_keywords)
    }

    /// Cells skipped by the translation-comment check. Only explicit plot
    /// calls count here; `hist` or `title` alone do not.
    pub fn skips_translation(&self, source: &str) -> bool {
        contains_any_lowercased(source, &self.translation_skip_keywords)
    }

    pub fn has_stats_operation(&self, source: &str) -> bool {
        self.stats_keywords.iter().any(|k| source.contains(k.as_str()))
    }

    pub fn is_comment(&self, trimmed_line: &str) -> bool {
        trimmed_line.starts_with(self.comment_marker.as_str())
    }
}

fn contains_any_lowercased(source: &str, keywords: &[String]) -> bool {
    let lower = source.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Optional rule overrides as read from a file.
pub struct RulesCfg {
    #[serde(default)]
    pub abbreviations: Option<Vec<Abbreviation>>,
    #[serde(default)]
    pub plotting_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub translation_skip_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub stats_keywords: Option<Vec<String>>,
    pub max_code_lines: Option<usize>,
    pub comment_marker: Option<String>,
    pub motivation_marker: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read rules file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Rules file {} is not valid TOML: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Rules file {} is not valid YAML: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Rules file {} has an empty '{field}'", path.display())]
    Empty { path: PathBuf, field: &'static str },
}

/// Merge `cfg` over the built-in tables.
pub fn resolve_rules(cfg: RulesCfg) -> RuleSet {
    let mut rules = RuleSet::default();
    for entry in cfg.abbreviations.unwrap_or_default() {
        match rules.abbreviations.iter_mut().find(|a| a.term == entry.term) {
            Some(existing) => existing.expansion = entry.expansion,
            None => rules.abbreviations.push(entry),
        }
    }
    if let Some(kw) = cfg.plotting_keywords {
        rules.plotting_keywords = kw.into_iter().map(|k| k.to_lowercase()).collect();
    }
    if let Some(kw) = cfg.translation_skip_keywords {
        rules.translation_skip_keywords = kw.into_iter().map(|k| k.to_lowercase()).collect();
    }
    if let Some(kw) = cfg.stats_keywords {
        rules.stats_keywords = kw;
    }
    if let Some(n) = cfg.max_code_lines {
        rules.max_code_lines = n;
    }
    if let Some(m) = cfg.comment_marker {
        rules.comment_marker = m;
    }
    if let Some(m) = cfg.motivation_marker {
        rules.motivation_marker = m;
    }
    rules
}

/// Load rule overrides from a `.toml`, `.yaml`, or `.yml` file and merge
/// them over the defaults. Unknown extensions are read as TOML.
pub fn load_rules(path: &Path) -> Result<RuleSet, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let cfg: RulesCfg = if is_yaml {
        serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };
    // Empty markers would match every line.
    for (field, value) in [
        ("comment_marker", cfg.comment_marker.as_deref()),
        ("motivation_marker", cfg.motivation_marker.as_deref()),
    ] {
        if value.is_some_and(str::is_empty) {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
                field,
            });
        }
    }
    Ok(resolve_rules(cfg))
}
