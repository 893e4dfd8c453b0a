//! String helpers applied to raw form values before they are parsed.

/// Literal token a form submits for an explicitly empty value.
pub const NULL_TOKEN: &str = "null";

/// Literal token a checkbox companion field submits for an unchecked box.
pub const FALSE_TOKEN: &str = "false";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Remove digit-group spaces (plain and no-break) and turn `.` into the
/// locale decimal separator. Only used ahead of numeric parsing.
#[must_use]
pub fn strip_formatting(raw: &str, decimal_separator: char) -> String {
    raw.chars()
        .filter(|c| *c != ' ' && *c != NO_BREAK_SPACE)
        .map(|c| if c == '.' { decimal_separator } else { c })
        .collect()
}

/// Empty, or exactly the `null` token (case-sensitive).
#[must_use]
pub fn is_logical_null(raw: &str) -> bool {
    raw.is_empty() || raw == NULL_TOKEN
}

///
/// TESTS
///
