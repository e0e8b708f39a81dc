//! Levenshtein edit distance

use crate::error::{NameDupError, Result};

/// Minimum number of single-character insertions, deletions or
/// substitutions needed to turn `source` into `target`.
///
/// Characters are compared as Unicode scalar values. Both inputs must be
/// non-empty; names are never empty, so an empty string here is a caller
/// error rather than a zero-length edit.
///
/// # Examples
/// ```
/// use namedup_core::edit_distance::distance;
/// assert_eq!(distance("test", "tent").unwrap(), 1);
/// assert_eq!(distance("GUMBO", "GAMBOL").unwrap(), 2);
/// assert!(distance("", "test").is_err());
/// ```
pub fn distance(source: &str, target: &str) -> Result<usize> {
    if source.is_empty() || target.is_empty() {
        return Err(NameDupError::invalid(
            "edit distance is not defined for empty names",
        ));
    }

    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // table[i][j] = distance between source[..i] and target[..j]
    let mut table = vec![vec![0usize; target.len() + 1]; source.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=source.len() {
        for j in 1..=target.len() {
            let substitution = usize::from(source[i - 1] != target[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    Ok(table[source.len()][target.len()])
}
