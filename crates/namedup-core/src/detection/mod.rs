//! Duplicate detection over ordered batches of names

mod detector;
mod registry;

pub use detector::{DuplicateDetector, DuplicatePair, MatchTier};
pub use registry::Registry;

#[cfg(feature = "native")]
use crate::error::NameDupError;
#[cfg(feature = "native")]
use crate::nicknames::NicknameTable;

/// Check a batch against the built-in nickname table.
///
/// `names` is nullable on the foreign side; a missing batch is reported as
/// `NullInput`.
#[cfg(feature = "native")]
#[uniffi::export]
pub fn check_duplicates_export(
    names: Option<Vec<String>>,
) -> std::result::Result<Vec<DuplicatePair>, NameDupError> {
    let detector = DuplicateDetector::new(NicknameTable::builtin()?);
    detector.check_optional(names.as_deref())
}
