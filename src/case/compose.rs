//! Composing camelCase, StudlyCaps and delimited identifiers.

use super::delimiter::resolve;
use super::tokenizer::Scan;
use super::word::{capitalize, can_mark_head, has_uppercase, is_head_acronym, WordKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    /// camelCase: the first word keeps its case.
    AsIs,
    /// StudlyCaps: the first word is capitalized like the rest.
    Capitalized,
}

fn compose(text: &str, delimiter: char, head: Head) -> String {
    let scan = Scan::new(text, delimiter);
    let mut out = String::with_capacity(text.len());

    for (idx, word) in scan.words.iter().enumerate() {
        if idx > 0 && scan.words[idx - 1].needs_separator(word) && !out.ends_with(delimiter) {
            out.push(delimiter);
        }

        if idx == 0 && head == Head::AsIs && !scan.leading_delimiter {
            out.push_str(word.text);
            // A lower-case leading acronym stays lower-case, marked by one
            // delimiter, but only when the tokenizer can read the marker back.
            if word.kind == WordKind::Acronym && can_mark_head(word.text) {
                out.push(delimiter);
            }
            continue;
        }

        match word.kind {
            WordKind::Acronym => out.push_str(&word.text.to_ascii_uppercase()),
            WordKind::Regular => out.push_str(&capitalize(word.text)),
        }
    }

    out
}

/// Convert to camelCase.
///
/// ```
/// use intact_case::camelize;
///
/// assert_eq!(camelize("get_http_response", None), "getHttpResponse");
/// assert_eq!(camelize("get_http__response", None), "getHTTPResponse");
/// assert_eq!(camelize("xml__http_request", None), "xml_HttpRequest");
/// ```
pub fn camelize(text: &str, delimiter: Option<char>) -> String {
    compose(text, resolve(delimiter), Head::AsIs)
}

/// Convert to StudlyCaps (PascalCase).
///
/// ```
/// use intact_case::to_studly_caps;
///
/// assert_eq!(to_studly_caps("get_http_response", None), "GetHttpResponse");
/// assert_eq!(to_studly_caps("xml__http_request", None), "XMLHttpRequest");
/// ```
pub fn to_studly_caps(text: &str, delimiter: Option<char>) -> String {
    compose(text, resolve(delimiter), Head::Capitalized)
}

/// Whether a delimiter goes in front of the capital at byte `i`.
fn starts_word(text: &str, i: usize, delimiter: char) -> bool {
    let bytes = text.as_bytes();
    let prev = bytes[i - 1];

    if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
        return true;
    }

    let before = &text[..i];
    if let Some(word) = before.strip_suffix(delimiter) {
        return is_head_acronym(word, &text[word.len()..], delimiter);
    }

    bytes.get(i + 1).map_or(false, u8::is_ascii_lowercase)
}

/// Convert camelCase / StudlyCaps to lower-case words joined by `delimiter`.
///
/// With `as_vendor_prefix`, text starting with a capital also gets a leading
/// delimiter (`MozTransform` becomes `-moz-transform`).
pub fn delimiterize(text: &str, delimiter: Option<char>, as_vendor_prefix: bool) -> String {
    let delimiter = resolve(delimiter);

    if !has_uppercase(text) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    if as_vendor_prefix && text.starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push(delimiter);
    }

    for (i, ch) in text.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() && starts_word(text, i, delimiter) {
            out.push(delimiter);
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

/// `delimiterize` with `-`.
pub fn hyphenated(text: &str, as_vendor_prefix: bool) -> String {
    delimiterize(text, Some('-'), as_vendor_prefix)
}

/// Force StudlyCaps, whatever the input style.
pub fn uc_first(text: &str, delimiter: Option<char>) -> String {
    to_studly_caps(&delimiterize(text, delimiter, false), delimiter)
}

/// Force camelCase with a lower-case first word, whatever the input style.
pub fn lc_first(text: &str, delimiter: Option<char>) -> String {
    camelize(&delimiterize(text, delimiter, false), delimiter)
}
