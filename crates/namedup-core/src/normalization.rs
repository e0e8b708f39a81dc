//! Name normalization for duplicate comparison
//!
//! Names are reduced to a first + last form, optionally swapped, and turned
//! into sort keys: the lower-cased characters of the name in code point
//! order. Two names share a sort key iff they are case-insensitive anagrams,
//! which makes the key insensitive to the order of the name parts.

use crate::error::{NameDupError, Result};

fn require_name<'a>(name: &'a str, operation: &str) -> Result<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameDupError::invalid(format!(
            "{operation}: empty names are not allowed"
        )));
    }
    Ok(trimmed)
}

/// Reduce a full name to its first and last token.
///
/// Names with fewer than three tokens come back trimmed but otherwise as
/// given, including their inner spacing.
pub fn strip_middle_names(full_name: &str) -> Result<String> {
    let trimmed = require_name(full_name, "strip_middle_names")?;
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    if tokens.len() < 3 {
        return Ok(trimmed.to_string());
    }

    Ok(format!("{} {}", tokens[0], tokens[tokens.len() - 1]))
}

/// Case-folded, character-sorted form of `s`.
///
/// Whitespace is part of the key, so keys only compare equal between names
/// joined with the same spacing.
pub fn sort_key(s: &str) -> Result<String> {
    require_name(s, "sort_key")?;
    let mut chars: Vec<char> = s.to_lowercase().chars().collect();
    chars.sort_unstable();
    Ok(chars.into_iter().collect())
}

/// Swap the parts of a reduced `first last` name.
///
/// Single-token names are returned unchanged. More than two tokens is an
/// error: strip middle names first.
pub fn swap_first_last(name: &str) -> Result<String> {
    let trimmed = require_name(name, "swap_first_last")?;
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens.as_slice() {
        [_] => Ok(name.to_string()),
        [first, last] => Ok(format!("{last} {first}")),
        _ => Err(NameDupError::invalid(format!(
            "swap_first_last: {name:?} has more than a first and last name"
        ))),
    }
}

/// The final token of a name, or the whole trimmed name if it has only one.
pub fn last_token(full_name: &str) -> Result<String> {
    let trimmed = require_name(full_name, "last_token")?;
    Ok(trimmed
        .split_whitespace()
        .last()
        .unwrap_or(trimmed)
        .to_string())
}

/// Split a reduced name into `(first, last)`.
///
/// Returns `None` for single-token names.
pub(crate) fn split_first_last(reduced: &str) -> Result<Option<(&str, &str)>> {
    let tokens: Vec<&str> = reduced.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err(NameDupError::invalid("empty names are not allowed")),
        [_] => Ok(None),
        [first, last] => Ok(Some((first, last))),
        _ => Err(NameDupError::invalid(format!(
            "{reduced:?} has more than a first and last name"
        ))),
    }
}
