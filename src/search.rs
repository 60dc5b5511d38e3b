use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{DirectoryError, Result};
use crate::types::DisplayRecord;

/// Lowercase with diacritics stripped, so "Zoë" and "zoe" compare equal.
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Records whose formatted name contains `query`, ignoring case and accents,
/// in their original order.
pub fn filter<'a>(records: &'a [DisplayRecord], query: &str) -> Vec<&'a DisplayRecord> {
    let needle = fold(query);
    records
        .iter()
        .filter(|r| fold(&r.formatted_name).contains(&needle))
        .collect()
}

/// Pick exactly one record.
///
/// A numeric selector is looked up by id. Anything else is matched against
/// formatted names; an exact name (ignoring case and accents) wins over
/// substring hits.
pub fn select<'a>(records: &'a [DisplayRecord], selector: &str) -> Result<&'a DisplayRecord> {
    let selector = selector.trim();

    if let Ok(id) = selector.parse::<i64>() {
        return records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DirectoryError::UserNotFound(selector.to_string()));
    }

    let folded = fold(selector);
    if let Some(exact) = records
        .iter()
        .find(|r| fold(&r.formatted_name) == folded)
    {
        return Ok(exact);
    }

    match filter(records, selector).as_slice() {
        [] => Err(DirectoryError::UserNotFound(selector.to_string())),
        [only] => Ok(*only),
        many => Err(DirectoryError::AmbiguousSelection {
            query: selector.to_string(),
            matches: many.iter().map(|r| r.formatted_name.clone()).collect(),
        }),
    }
}
