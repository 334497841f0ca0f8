use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_FIELD_LENGTH: usize = 1000;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Tag pattern is not a valid regex"));

/// Normalise an untrusted text field before it is validated or stored.
///
/// Tag-like substrings and NUL characters are removed, surrounding
/// whitespace is trimmed and the result is capped at `MAX_FIELD_LENGTH`
/// characters. Applying it to its own output is a no-op.
pub fn sanitize(input: &str) -> String {
    // Postgres text columns reject NUL.
    let stripped = TAG_PATTERN.replace_all(input, "").replace('\0', "");
    let truncated: String = stripped.trim().chars().take(MAX_FIELD_LENGTH).collect();
    truncated.trim_end().to_string()
}

/// Sanitize an optional field, collapsing empty results into `None`.
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize).filter(|value| !value.is_empty())
}
