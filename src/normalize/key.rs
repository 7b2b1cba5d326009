//! Column label -> canonical (camelCase) key.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("valid regex"));

/// Shape of every key produced by [`to_camel_case`].
static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z0-9]+(?:[A-Z][a-z0-9]*)*)?$").expect("valid regex"));

/// Convert an arbitrary column label into a camelCase identifier.
///
/// Anything that is not an ASCII letter, digit or space acts as a word separator. The first word
/// is lowercased; every following word is capitalized. Labels that are already canonical are
/// returned unchanged, which makes the function idempotent.
///
/// ```
/// use tabular_json::normalize::to_camel_case;
///
/// assert_eq!(to_camel_case("First Name"), "firstName");
/// assert_eq!(to_camel_case("ID#"), "id");
/// assert_eq!(to_camel_case("firstName"), "firstName");
/// ```
pub fn to_camel_case(label: &str) -> String {
    if CANONICAL.is_match(label) {
        return label.to_owned();
    }

    let spaced = NON_WORD.replace_all(label, " ");
    let mut out = String::with_capacity(label.len());
    for (idx, word) in spaced.split_whitespace().enumerate() {
        if idx == 0 {
            out.push_str(&word.to_ascii_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    out
}
