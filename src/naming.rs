//! Type-name construction for declarations.
use once_cell::sync::Lazy;
use regex::Regex;

/// A run of separators (or the start of input) followed by an optional lowercase letter.
static WORD_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[_\-\s]+)([a-z]?)").unwrap()
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap()
});

/// `extra_data` → `ExtraData`: drop every separator and upper-case the letter after it.
pub fn title_case(snake: &str) -> String {
    WORD_START
        .replace_all(snake, |caps: &regex::Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// `#/components/schemas/widget_kind` → `WidgetKind`.
pub fn reference_name(ref_path: &str) -> String {
    let last = ref_path.rsplit('/').next().unwrap_or(ref_path);
    title_case(last)
}

/// Name for a nested shape that has no title of its own: `Widget` + `extra_data` → `WidgetExtraData`.
pub fn synthesized_name(parent: &str, field: &str) -> String {
    format!("{parent}{}", title_case(field))
}

/// Field keys that are not plain identifiers are written as string literals.
pub fn property_key(name: &str) -> String {
    if IDENTIFIER.is_match(name) {
        name.to_string()
    } else {
        serde_json::Value::from(name).to_string()
    }
}
