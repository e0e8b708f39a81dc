//! Nickname data compiled into namedup-core

use super::NicknameTable;
use crate::error::Result;

/// Default first-name variants, one `Name - Variant, ...` entry per line.
pub const BUILTIN_NICKNAMES: &str = include_str!("../../data/first_names.txt");

impl NicknameTable {
    /// Table holding only the built-in variants.
    pub fn builtin() -> Result<Self> {
        let mut table = Self::new();
        table.merge_source(BUILTIN_NICKNAMES, "builtin")?;
        Ok(table)
    }
}
