//! Display-label formatting for category names and field keys.
//!
//! All functions are pure. The rules are deliberately asymmetric between
//! category labels (both underscore segments capitalized) and field labels
//! (prefix only), which is what the dashboard has always shown.

use phf::phf_map;

/// Reserved key rendered as an enumerated dropdown instead of free text.
pub const LOG_LEVEL_KEY: &str = "log_level";

/// The fixed set of values the log-level dropdown offers.
pub const LOG_LEVELS: [&str; 6] = ["notset", "debug", "info", "warning", "error", "critical"];

/// Field labels that expand to a longer form after capitalization.
static LONG_FORM_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "Cache dir" => "Cache directory",
    "Results dir" => "Results directory",
    "Executor dir" => "Executor directory",
    "Log stdout" => "Log standard out",
    "Log dir" => "Log directory",
    "Base dir" => "Base directory",
};

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Split on the first underscore only; everything after it is one segment.
fn split_once_underscore(name: &str) -> Option<(&str, &str)> {
    name.split_once('_')
}

/// Label for a top-level category: both segments capitalized, with a few
/// acronym categories rendered fully upper-case.
pub fn category_label(name: &str) -> String {
    match split_once_underscore(name) {
        Some((prefix, suffix)) => format!("{} {}", capitalize(prefix), capitalize(suffix)),
        None => match name {
            "sdk" | "dask" => name.to_uppercase(),
            _ => capitalize(name),
        },
    }
}

/// Label for a submenu entry under an expanded category.
pub fn submenu_label(name: &str) -> String {
    match split_once_underscore(name) {
        Some((prefix, suffix)) => format!("{} {}", capitalize(prefix), capitalize(suffix)),
        None => match name {
            "slurm" | "dask" => name.to_uppercase(),
            _ => capitalize(name),
        },
    }
}

/// Label for a form field: only the prefix is capitalized, then a handful of
/// abbreviated names expand to their long form.
pub fn field_label(name: &str) -> String {
    let formatted = match split_once_underscore(name) {
        Some((prefix, suffix)) => format!("{} {}", capitalize(prefix), suffix),
        None => match name {
            "sdk" => name.to_uppercase(),
            _ => capitalize(name),
        },
    };
    LONG_FORM_LABELS
        .get(formatted.as_str())
        .map(|long| long.to_string())
        .unwrap_or(formatted)
}

/// Index the dropdown opens at for the current value, falling back to the
/// first option when the value is not in the set.
pub fn log_level_index(value: &str) -> usize {
    LOG_LEVELS.iter().position(|level| *level == value).unwrap_or(0)
}
