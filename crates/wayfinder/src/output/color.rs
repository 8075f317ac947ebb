//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:   green   (completed mutations, connected graph)
//!   - Warning:   yellow  (nothing changed, load warnings)
//!   - Error:     red     (failed operations, unreachable places)
//!   - Place:     cyan    (place names)
//!   - Distance:  magenta (lengths and totals)
//!   - Muted:     dimmed  (field labels, arrows)
//!   - Emphasis:  bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Green text for successful outcomes.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Red text for failures.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Yellow text for warnings.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Cyan text for informational output.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

pub(crate) fn place(name: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return name.to_string();
    }
    name.cyan().to_string()
}

pub(crate) fn distance(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.magenta().to_string()
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

pub(crate) fn arrow(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "->" } else { "→" };
    dimmed(icon, config)
}

pub(crate) fn two_way_arrow(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "<->" } else { "↔" };
    dimmed(icon, config)
}

pub(crate) fn ok_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "+" } else { "✓" };
    success(icon, config)
}

pub(crate) fn fail_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "x" } else { "✗" };
    error(icon, config)
}
