//! Level-aware tokenization of the bracket notation.
//!
//! The serialized form nests cuts with square brackets, so a comma only
//! separates items when it occurs at bracket depth zero. This module is the
//! single depth-tracking scanner shared by every caller that has to
//! distinguish "this level" from "nested levels".

/// Trims ASCII whitespace from both ends of a token.
#[inline]
pub fn strip(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\n' || c == '\r' || c == '\t')
}

/// Splits `s` at the first occurrence of `delimiter` at bracket depth zero.
///
/// Returns the stripped token before the delimiter and the stripped
/// remainder. If no top-level delimiter exists, the whole input is the token
/// and the remainder is empty.
pub fn split_first(s: &str, delimiter: char) -> (&str, &str) {
    let mut depth: i64 = 0;
    for (i, c) in s.char_indices() {
        if c == delimiter && depth == 0 {
            return (strip(&s[..i]), strip(&s[i + c.len_utf8()..]));
        }
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
    }
    (strip(s), "")
}

/// Splits `s` into its top-level items.
///
/// Commas inside nested `[...]` are not separators. An input with no
/// top-level delimiter yields a single item.
pub fn split_level(s: &str, delimiter: char) -> Vec<&str> {
    let mut items = Vec::new();
    let mut rest = s;
    loop {
        let (first, tail) = split_first(rest, delimiter);
        items.push(first);
        if tail.is_empty() {
            return items;
        }
        rest = tail;
    }
}

/// Returns true iff square brackets in `s` are balanced: the running depth
/// never goes negative and ends at zero.
pub fn balanced(s: &str) -> bool {
    let mut depth: i64 = 0;
    for c in s.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
