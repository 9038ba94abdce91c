use super::delimiter::resolve;
use super::word::{has_uppercase, Word};

/// Join tokens back into one identifier.
///
/// All lower-case tokens are joined with the delimiter. As soon as one token
/// carries a capital the result is camelCase/StudlyCaps: the delimiter only
/// survives between two short words (acronyms, single letters) that would
/// otherwise run together.
///
/// ```
/// use intact_case::compound;
///
/// assert_eq!(compound(&["get", "HTTP", "Response"], None), "getHTTPResponse");
/// assert_eq!(compound(&["get", "http", "response"], None), "get_http_response");
/// ```
pub fn compound<S: AsRef<str>>(tokens: &[S], delimiter: Option<char>) -> String {
    let delimiter = resolve(delimiter);
    let words: Vec<Word<'_>> = tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| !token.is_empty())
        .map(Word::classify)
        .collect();
    let camel = words.iter().any(|word| has_uppercase(word.text));

    let mut out = String::new();
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 && (!camel || words[idx - 1].needs_separator(word)) {
            out.push(delimiter);
        }
        out.push_str(word.text);
    }

    out
}
