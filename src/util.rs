//! Shared utility functions
//!
//! Case conversion and identifier derivation used by the compiler and the
//! per-language renderers.

use regex::Regex;
use std::sync::OnceLock;

/// Convert snake_case to PascalCase
///
/// # Examples
/// ```
/// use tapegen::util::to_pascal_case;
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("foo"), "Foo");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert snake_case to camelCase
///
/// # Examples
/// ```
/// use tapegen::util::to_camel_case;
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("foo"), "foo");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase or camelCase to snake_case
///
/// Acronym runs stay together: `HTTPServer` becomes `http_server`.
///
/// # Examples
/// ```
/// use tapegen::util::to_snake_case;
/// assert_eq!(to_snake_case("HelloWorld"), "hello_world");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let after_lower = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            let ends_acronym = prev.is_some_and(|p| p.is_ascii_uppercase())
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if after_lower || ends_acronym {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

fn non_identifier_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid identifier regex"))
}

/// Derive a canonical snake_case identifier from arbitrary text
///
/// Runs of characters that cannot appear in an identifier collapse to one
/// `_`, leading and trailing separators are dropped, and a leading digit
/// gets a `bf_` prefix. Returns `None` when nothing usable is left.
///
/// # Examples
/// ```
/// use tapegen::util::identifier_from;
/// assert_eq!(identifier_from("Hello World!").as_deref(), Some("hello_world"));
/// assert_eq!(identifier_from("99-bottles").as_deref(), Some("bf_99_bottles"));
/// assert_eq!(identifier_from("--"), None);
/// ```
pub fn identifier_from(text: &str) -> Option<String> {
    let words: Vec<String> = non_identifier_chars()
        .split(text)
        .filter(|w| !w.is_empty())
        .map(to_snake_case)
        .collect();

    if words.is_empty() {
        return None;
    }

    let ident = words.join("_");
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("bf_{}", ident))
    } else {
        Some(ident)
    }
}

/// Whether `s` is a plain ASCII identifier (letter or `_`, then alphanumerics)
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
