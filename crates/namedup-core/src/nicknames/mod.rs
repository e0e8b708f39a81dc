//! First-name variant lookup
//!
//! Maps a canonical first name (e.g. `William`) to the nicknames and
//! alternate spellings it is known by (`Bill`, `Will`, ...). The table is
//! built once from line-oriented sources of the form
//!
//! ```text
//! William - Bill, Billy, Will
//! ```
//!
//! and is read-only afterwards.

mod builtin;
mod sources;

use std::collections::HashMap;

use tracing::debug;

use crate::error::{NameDupError, Result};

pub use builtin::BUILTIN_NICKNAMES;
pub use sources::NicknameSource;

/// Canonical first name → known variants.
///
/// Keys are case-sensitive as loaded. When several lines share a key their
/// variant lists are appended; repeated variants are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NicknameTable {
    variants: HashMap<String, Vec<String>>,
}

impl NicknameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the text of one data source.
    pub fn load(source: &str) -> Result<Self> {
        let mut table = Self::new();
        table.merge_source(source, "inline")?;
        Ok(table)
    }

    /// Parse `source` and append its entries to this table.
    ///
    /// Blank lines and `#` comments are skipped. A line without a `-`
    /// delimiter, or with nothing before it, fails the whole source and
    /// leaves the table untouched. Returns the number of entry lines read.
    pub fn merge_source(&mut self, source: &str, label: &str) -> Result<usize> {
        let entries = parse_source(source)?;
        let count = entries.len();

        for (name, variants) in entries {
            self.variants.entry(name).or_default().extend(variants);
        }

        debug!(
            source = label,
            lines = count,
            names = self.variants.len(),
            "loaded nickname source"
        );
        Ok(count)
    }

    /// Known variants of `first_name`, if any.
    pub fn variants_of(&self, first_name: &str) -> Option<&[String]> {
        self.variants.get(first_name).map(|v| v.as_slice())
    }

    /// Whether `first_name` has an entry.
    pub fn contains(&self, first_name: &str) -> bool {
        self.variants.contains_key(first_name)
    }

    /// Number of canonical names.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

fn parse_source(source: &str) -> Result<Vec<(String, Vec<String>)>> {
    let mut entries = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let corrupt = || NameDupError::DataSourceCorrupt {
            line: index + 1,
            content: raw.to_string(),
        };

        let (name, variants) = line.split_once('-').ok_or_else(corrupt)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(corrupt());
        }

        let variants: Vec<String> = variants
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        entries.push((name.to_string(), variants));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_single_line() {
        let table = NicknameTable::load("William - Bill, Will").unwrap();
        assert_eq!(
            table.variants_of("William"),
            Some(&["Bill".to_string(), "Will".to_string()][..])
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = NicknameTable::load("William - Bill").unwrap();
        assert!(table.variants_of("william").is_none());
        assert!(table.variants_of("Bill").is_none());
    }

    #[test]
    fn repeated_keys_append() {
        let table = NicknameTable::load("Robert - Bob, Rob\nRobert - Bobby, Rob").unwrap();
        assert_eq!(
            table.variants_of("Robert").unwrap(),
            &["Bob", "Rob", "Bobby", "Rob"]
        );
    }

    #[test]
    fn splits_on_first_delimiter_only() {
        let table = NicknameTable::load("Mary - Mary-Ann, Molly").unwrap();
        assert_eq!(table.variants_of("Mary").unwrap(), &["Mary-Ann", "Molly"]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let table = NicknameTable::load("# header\n\nJohn - Jack\n   \n").unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains("John"));
    }

    #[test]
    fn drops_empty_variants() {
        let table = NicknameTable::load("Peter - Pete, ,").unwrap();
        assert_eq!(table.variants_of("Peter").unwrap(), &["Pete"]);
    }

    #[test]
    fn missing_delimiter_is_corrupt() {
        let err = NicknameTable::load("John - Jack\nWilliam Bill").unwrap_err();
        match err {
            NameDupError::DataSourceCorrupt { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "William Bill");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_name_is_corrupt() {
        assert!(matches!(
            NicknameTable::load(" - Bill"),
            Err(NameDupError::DataSourceCorrupt { line: 1, .. })
        ));
    }

    #[test]
    fn failed_merge_leaves_table_untouched() {
        let mut table = NicknameTable::load("John - Jack").unwrap();
        assert!(table.merge_source("John - Johnny\nbroken", "test").is_err());
        assert_eq!(table.variants_of("John").unwrap(), &["Jack"]);
    }
}
