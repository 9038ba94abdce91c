use crate::error::CaseError;

/// Delimiter used when the caller does not supply one.
pub const DEFAULT_DELIMITER: char = '_';

const PATTERN_METACHARS: &[char] = &[
    '.', '?', '*', '+', '-', '^', '$', '[', ']', '{', '}', '(', ')', '|', '\\',
];

/// Pick the delimiter to use, falling back to `_`.
pub fn resolve(delimiter: Option<char>) -> char {
    delimiter.unwrap_or(DEFAULT_DELIMITER)
}

/// Parse a delimiter written as a string (config files, CLI flags).
///
/// An empty string means "use the default". Letters are accepted; the
/// resulting conversions are well defined even if rarely useful.
pub fn parse(raw: &str) -> Result<char, CaseError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(DEFAULT_DELIMITER),
        (Some(ch), None) => Ok(ch),
        _ => Err(CaseError::InvalidDelimiter(raw.to_string())),
    }
}

pub fn is_metachar(delimiter: char) -> bool {
    PATTERN_METACHARS.contains(&delimiter)
}

/// Return the delimiter in a form that can be embedded in a regex.
pub fn escape(delimiter: char) -> String {
    if is_metachar(delimiter) {
        format!("\\{}", delimiter)
    } else {
        delimiter.to_string()
    }
}
