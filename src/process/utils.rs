use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A cell counts as missing when it is empty or whitespace only.
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Drop leftover `<...>` markup and trim the result.
pub fn strip_tags(raw: &str) -> String {
    TAG_RE.replace_all(raw, "").trim().to_string()
}

/// Remove every whitespace char, including the ones inside the text.
pub fn remove_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `value` if it has content, otherwise `placeholder`.
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if is_blank(value) {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
