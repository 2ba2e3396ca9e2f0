use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_TO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camelCase regex"));
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym regex"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_\-\s]+").expect("valid separator regex"));

/// Turns a camelCase or snake_case field name into a title-cased label.
///
/// `sum_sales` becomes `Sum Sales`, `avgOrderValue` becomes `Avg Order Value`.
/// Acronyms keep their casing (`HTTPStatus` becomes `HTTP Status`).
pub fn humanize(name: &str) -> String {
    let spaced = LOWER_TO_UPPER.replace_all(name, "$1 $2");
    let spaced = ACRONYM_BOUNDARY.replace_all(&spaced, "$1 $2");

    SEPARATORS
        .split(&spaced)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
