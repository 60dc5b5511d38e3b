const HONORIFICS: [&str; 4] = ["Mr.", "Mrs.", "Ms.", "Dr."];
const SUFFIXES: [&str; 4] = ["Jr.", "Sr.", "III", "IV"];

fn is_one_of(token: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| token.eq_ignore_ascii_case(candidate))
}

/// Format a raw name as `"Last, First"`, followed by ` (Prefix/Suffix)` when
/// an honorific or suffix was present.
///
/// A single remaining token is used as both first and last name. Blank input
/// formats as `", "`.
pub fn format_name(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut rest = tokens.as_slice();

    let prefix = match rest.split_first() {
        Some((first, tail)) if is_one_of(first, &HONORIFICS) => {
            rest = tail;
            Some(*first)
        }
        _ => None,
    };

    let suffix = match rest.split_last() {
        Some((last, init)) if is_one_of(last, &SUFFIXES) => {
            rest = init;
            Some(*last)
        }
        _ => None,
    };

    let first_name = rest.first().copied().unwrap_or("");
    let last_name = rest.last().copied().unwrap_or("");
    let base = format!("{last_name}, {first_name}");

    let tag = [prefix, suffix].into_iter().flatten().collect::<Vec<_>>().join("/");
    if tag.is_empty() {
        base
    } else {
        format!("{base} ({tag})")
    }
}

/// Lowercased last whitespace-delimited token of the raw name.
///
/// Suffixes are not stripped here, so "John Smith Jr." sorts under "jr.".
pub fn sort_key(raw: &str) -> String {
    raw.split_whitespace()
        .next_back()
        .unwrap_or("")
        .to_lowercase()
}
