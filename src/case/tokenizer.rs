//! Splitting identifiers into words.

use super::delimiter::resolve;
use super::word::{capitalize, has_uppercase, is_head_acronym, Word, WordKind};

/// The words of an identifier, plus whether it started with the delimiter.
#[derive(Debug)]
pub(crate) struct Scan<'a> {
    pub words: Vec<Word<'a>>,
    pub leading_delimiter: bool,
}

impl<'a> Scan<'a> {
    /// Read `text` with the strategy matching its form.
    pub fn new(text: &'a str, delimiter: char) -> Self {
        let words = if has_uppercase(text) {
            scan_camel(text, delimiter)
        } else {
            scan_delimited(text, delimiter)
        };

        Self {
            words,
            leading_delimiter: text.starts_with(delimiter),
        }
    }
}

fn is_lower_or_digit(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

fn run_end(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(bytes.len(), |offset| start + offset)
}

/// Scan camelCase / StudlyCaps text.
///
/// Only ASCII bytes ever start or end a word, so every slice taken here lies
/// on a char boundary even when the text contains other characters.
pub(crate) fn scan_camel(text: &str, delimiter: char) -> Vec<Word<'_>> {
    let bytes = text.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_uppercase() {
            let caps_end = run_end(bytes, i, |b| b.is_ascii_uppercase());

            if bytes.get(caps_end).map_or(false, u8::is_ascii_lowercase) {
                // The last capital of the run starts the next regular word.
                let head = caps_end - 1;
                if head > i {
                    words.push(Word::new(&text[i..head], WordKind::Acronym));
                }
                let end = run_end(bytes, caps_end, is_lower_or_digit);
                words.push(Word::new(&text[head..end], WordKind::Regular));
                i = end;
            } else {
                let end = run_end(bytes, caps_end, |b| b.is_ascii_digit());
                let kind = if caps_end - i > 1 {
                    WordKind::Acronym
                } else {
                    WordKind::Regular
                };
                words.push(Word::new(&text[i..end], kind));
                i = end;
            }
        } else if is_lower_or_digit(b) {
            let end = run_end(bytes, i, is_lower_or_digit);
            let word = &text[i..end];

            if i == 0 && is_head_acronym(word, &text[end..], delimiter) {
                words.push(Word::new(word, WordKind::Acronym));
                i = end + delimiter.len_utf8();
            } else {
                words.push(Word::new(word, WordKind::Regular));
                i = end;
            }
        } else {
            i += 1;
        }
    }

    words
}

/// Scan delimiter-separated lower-case text.
///
/// A word followed by an empty segment (`http__x`, `xml_` at the end) is an
/// acronym.
pub(crate) fn scan_delimited(text: &str, delimiter: char) -> Vec<Word<'_>> {
    let segments: Vec<&str> = text.split(delimiter).collect();
    let mut words = Vec::new();

    for (idx, &segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let marked = segments.get(idx + 1).map_or(false, |next| next.is_empty());
        let kind = if marked {
            WordKind::Acronym
        } else {
            WordKind::Regular
        };
        words.push(Word::new(segment, kind));
    }

    words
}

/// Split an identifier into its words.
///
/// Text containing a capital letter is read as camelCase/StudlyCaps,
/// anything else as delimited. Unless `raw_first_word` is set, an all
/// lower-case first word of a camelCase string is reported in Studly form
/// (`getHttp` gives `Get`, `xml_Http` gives `XML`).
pub fn tokenize(text: &str, delimiter: Option<char>, raw_first_word: bool) -> Vec<String> {
    let delimiter = resolve(delimiter);

    if !text.bytes().any(|b| b.is_ascii_alphabetic()) {
        return Vec::new();
    }

    if !has_uppercase(text) {
        return scan_delimited(text, delimiter)
            .iter()
            .map(|word| word.text.to_string())
            .collect();
    }

    let words = scan_camel(text, delimiter);
    let mut tokens: Vec<String> = words.iter().map(|word| word.text.to_string()).collect();

    if !raw_first_word {
        if let (Some(first), Some(token)) = (words.first(), tokens.first_mut()) {
            if !has_uppercase(first.text) {
                *token = match first.kind {
                    WordKind::Acronym => first.text.to_ascii_uppercase(),
                    WordKind::Regular => capitalize(first.text),
                };
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_preserved() {
        assert_eq!(
            tokenize("XMLHttpRequest", None, false),
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(
            tokenize("getHTTPResponse", None, false),
            vec!["Get", "HTTP", "Response"]
        );
        assert_eq!(tokenize("parseURL", None, false), vec!["Parse", "URL"]);
    }

    #[test]
    fn test_raw_first_word() {
        assert_eq!(
            tokenize("getHTTPResponse", None, true),
            vec!["get", "HTTP", "Response"]
        );
        assert_eq!(
            tokenize("xml_HttpRequest", None, true),
            vec!["xml", "Http", "Request"]
        );
    }

    #[test]
    fn test_head_acronym_is_upcased() {
        assert_eq!(
            tokenize("xml_HttpRequest", None, false),
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(tokenize("io-Stream", Some('-'), false), vec!["IO", "Stream"]);
        // A single letter cannot be a head acronym.
        assert_eq!(tokenize("a_BCat", None, false), vec!["A", "B", "Cat"]);
    }

    #[test]
    fn test_delimited_form() {
        assert_eq!(
            tokenize("get_http_response", None, false),
            vec!["get", "http", "response"]
        );
        assert_eq!(tokenize("kebab-case", Some('-'), false), vec!["kebab", "case"]);
        assert_eq!(
            tokenize("xml__http_request", None, false),
            vec!["xml", "http", "request"]
        );
        assert_eq!(tokenize("_moz_transform_", None, false), vec!["moz", "transform"]);
    }

    #[test]
    fn test_adjacent_short_words() {
        assert_eq!(tokenize("HTTP_XML", None, false), vec!["HTTP", "XML"]);
        assert_eq!(tokenize("a_B_C", None, false), vec!["A", "B", "C"]);
        assert_eq!(tokenize("A_BCat", None, false), vec!["A", "B", "Cat"]);
        assert_eq!(tokenize("getA", None, false), vec!["Get", "A"]);
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(tokenize("Vec3Buffer", None, false), vec!["Vec3", "Buffer"]);
        assert_eq!(tokenize("HTTP2Server", None, false), vec!["HTTP2", "Server"]);
        assert_eq!(tokenize("md5Hash", None, false), vec!["Md5", "Hash"]);
        assert_eq!(tokenize("utf8_string", None, false), vec!["utf8", "string"]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(tokenize("", None, false).is_empty());
        assert!(tokenize("___", None, false).is_empty());
        assert!(tokenize("123", None, false).is_empty());
    }

    #[test]
    fn test_non_ascii_is_skipped_in_camel_form() {
        assert_eq!(tokenize("fooÜBar", None, true), vec!["foo", "Bar"]);
    }

    #[test]
    fn test_scan_delimited_marks_acronyms() {
        let words = scan_delimited("get_http__response_xml_", '_');
        let kinds: Vec<_> = words.iter().map(|w| (w.text, w.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("get", WordKind::Regular),
                ("http", WordKind::Acronym),
                ("response", WordKind::Regular),
                ("xml", WordKind::Acronym),
            ]
        );
    }

    #[test]
    fn test_scan_records_leading_delimiter() {
        assert!(Scan::new("-moz-transform", '-').leading_delimiter);
        assert!(!Scan::new("MozTransform", '-').leading_delimiter);
    }
}
