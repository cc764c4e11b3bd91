//! # Name Normalisation
//!
//! Names and breeds are stored in title case and compared without regard to
//! case. Both helpers work on Unicode scalar values, so names such as
//! "mäyräkoira" fold the same way as ASCII ones.

/// Converts `s` to title case.
///
/// Leading and trailing whitespace is dropped, runs of inner whitespace
/// collapse to a single space, the first character of every token is
/// uppercased and the rest lowercased.
pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// True when `s` has no visible characters.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
