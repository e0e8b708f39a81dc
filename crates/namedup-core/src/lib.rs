//! namedup-core: duplicate detection for person names
//!
//! This library provides:
//! - Levenshtein edit distance
//! - Name normalization (middle-name stripping, part swapping, sort keys)
//! - First-name nickname tables loaded from line-oriented sources
//! - A three-tier duplicate detector (identical, reordered, nickname/typo)
//!
//! Detection is exposed to Swift/Kotlin via UniFFI when the `native`
//! feature is enabled.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod detection;
pub mod edit_distance;
pub mod error;
pub mod nicknames;
pub mod normalization;

pub use config::{DetectorConfig, RegistryKey};
pub use detection::{DuplicateDetector, DuplicatePair, MatchTier, Registry};
pub use error::{NameDupError, Result};
pub use nicknames::{NicknameSource, NicknameTable};
