//! camelCase identifier splitting

/// Character class used to find word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    /// Uppercase letter
    Upper,
    /// Lowercase letter
    Lower,
    /// Decimal or other numeric character
    Digit,
    /// Anything else (punctuation, whitespace, symbols)
    Other,
}

/// Classify a single character.
fn kind_of(c: char) -> CharKind {
    if c.is_uppercase() {
        CharKind::Upper
    } else if c.is_lowercase() {
        CharKind::Lower
    } else if c.is_numeric() {
        CharKind::Digit
    } else {
        CharKind::Other
    }
}

/// Split an identifier-like string on camelCase boundaries and lowercase it.
///
/// Words are maximal runs of characters of the same class, with one
/// adjustment: an uppercase run immediately followed by lowercase yields its
/// last letter to the following word, so `"HTTPServer"` splits into `"HTTP"`
/// and `"Server"`. Letter/digit and alphanumeric/other transitions also start
/// a new word. The words are joined with single spaces, whitespace runs in
/// the input collapse into the joining space, and the result is lowercased.
///
/// Never fails; the empty string maps to the empty string.
///
/// ```
/// use selection_translator::core::tokenizer::split_camel_case;
///
/// assert_eq!(split_camel_case("camelCase"), "camel case");
/// assert_eq!(split_camel_case("HTTPServer2Name"), "http server 2 name");
/// ```
pub fn split_camel_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut words: Vec<String> = Vec::new();
    let mut start = 0;
    let mut prev = kind_of(chars[0]);

    for i in 1..chars.len() {
        let kind = kind_of(chars[i]);
        if kind == prev {
            continue;
        }
        if prev == CharKind::Upper && kind == CharKind::Lower {
            // Acronym followed by a regular word: the last uppercase letter
            // belongs to the word that starts here.
            if i - 1 > start {
                words.push(chars[start..i - 1].iter().collect());
            }
            start = i - 1;
        } else {
            words.push(chars[start..i].iter().collect());
            start = i;
        }
        prev = kind;
    }
    words.push(chars[start..].iter().collect());

    // Whitespace runs act as separators of their own; collapsing here keeps
    // the output free of consecutive spaces.
    let joined = words.join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
