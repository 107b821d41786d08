//! Supporting helpers: colored diagnostic prefixes shared by the binary.

use owo_colors::OwoColorize;

/// Colors are on unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(icon: &str, word: &str, paint: fn(&str) -> String) -> String {
    let text = format!("{} {}:", icon, word);
    if use_colors() {
        paint(&text)
    } else {
        text
    }
}

pub fn error_prefix() -> String {
    prefix("✖", "error", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("▲", "note", |s| s.yellow().bold().to_string())
}
