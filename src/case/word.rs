//! Word classification shared by the tokenizer and the composers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UPPERCASE: Regex = Regex::new(r"[A-Z]").unwrap();
}

/// Whether the text is written in camel/Studly form rather than delimited form.
pub fn has_uppercase(text: &str) -> bool {
    UPPERCASE.is_match(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    Acronym,
    Regular,
}

/// One semantic word, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub kind: WordKind,
}

impl<'a> Word<'a> {
    pub fn new(text: &'a str, kind: WordKind) -> Self {
        Self { text, kind }
    }

    /// Classify a caller-supplied token: upper-case with two or more
    /// characters is an acronym, anything else a regular word.
    pub fn classify(text: &'a str) -> Self {
        let is_acronym = text.len() > 1
            && has_uppercase(text)
            && !text.bytes().any(|b| b.is_ascii_lowercase());
        let kind = if is_acronym {
            WordKind::Acronym
        } else {
            WordKind::Regular
        };
        Self::new(text, kind)
    }

    pub fn is_acronym(&self) -> bool {
        self.kind == WordKind::Acronym
    }

    pub fn is_single(&self) -> bool {
        self.text.chars().count() == 1
    }

    /// Acronyms and one-letter words run together when concatenated.
    fn is_short(&self) -> bool {
        self.is_acronym() || self.is_single()
    }

    /// Whether camel/Studly output must keep a delimiter between `self` and
    /// `next` so the pair still tokenizes as two words.
    pub fn needs_separator(&self, next: &Word<'_>) -> bool {
        self.is_short() && next.is_short()
    }
}

/// Only lower-case words of two or more letters can carry the head marker.
pub fn can_mark_head(word: &str) -> bool {
    word.len() > 1 && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// A lower-case first word of two or more letters written as `xml_Http`: the
/// trailing delimiter marks it as an acronym in camelCase.
pub fn is_head_acronym(word: &str, rest: &str, delimiter: char) -> bool {
    can_mark_head(word)
        && rest
            .strip_prefix(delimiter)
            .map_or(false, |after| after.starts_with(|c: char| c.is_ascii_uppercase()))
}

/// Upper-case the first character, leaving the rest alone.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
