//! Three-tier duplicate detection
//!
//! Each name is reduced to first + last and checked, in order, for:
//! 1. an identical name (same sort key),
//! 2. the same name with its parts swapped,
//! 3. a nickname of the first name and/or a near-miss of the last name.
//!
//! A name that matches nothing becomes the canonical representative for
//! everything that matches it later. The scan is a fold over the input, so
//! the result depends on input order.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::registry::Registry;
use crate::config::{DetectorConfig, RegistryKey};
use crate::edit_distance::distance;
use crate::error::{NameDupError, Result};
use crate::nicknames::NicknameTable;
use crate::normalization::{
    last_token, sort_key, split_first_last, strip_middle_names, swap_first_last,
};

/// A name judged to duplicate an earlier one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DuplicatePair {
    /// Input text of the duplicate
    pub duplicate: String,
    /// Input text of the first-seen name it matches
    pub canonical: String,
}

impl DuplicatePair {
    pub fn new(duplicate: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            duplicate: duplicate.into(),
            canonical: canonical.into(),
        }
    }
}

/// Which tier produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Identical,
    Reordered,
    Fuzzy,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchTier::Identical => "identical",
            MatchTier::Reordered => "reordered",
            MatchTier::Fuzzy => "fuzzy",
        };
        f.write_str(name)
    }
}

/// Accumulator threaded through one scan
#[derive(Debug, Default)]
struct Scan {
    registry: Registry,
    duplicates: Vec<DuplicatePair>,
}

/// Detects duplicate names in an ordered batch.
///
/// The nickname table is shared read-only; every call to
/// [`check_duplicates`](Self::check_duplicates) starts from an empty
/// registry, so runs are independent of each other.
#[derive(Debug, Clone)]
pub struct DuplicateDetector {
    nicknames: Arc<NicknameTable>,
    config: DetectorConfig,
}

impl DuplicateDetector {
    /// Detector with the default configuration.
    pub fn new(nicknames: impl Into<Arc<NicknameTable>>) -> Self {
        Self {
            nicknames: nicknames.into(),
            config: DetectorConfig::default(),
        }
    }

    /// Detector with an explicit configuration, validated up front.
    pub fn with_config(
        nicknames: impl Into<Arc<NicknameTable>>,
        config: DetectorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            nicknames: nicknames.into(),
            config,
        })
    }

    pub fn nicknames(&self) -> &NicknameTable {
        &self.nicknames
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Find duplicates in `names`, in the order they are discovered.
    ///
    /// Fails on an empty batch. Any entry that cannot be normalized (for
    /// example a blank string) aborts the whole run.
    pub fn check_duplicates<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<DuplicatePair>> {
        if names.is_empty() {
            return Err(NameDupError::invalid("input names are empty"));
        }

        let scan = names
            .iter()
            .try_fold(Scan::default(), |scan, name| self.scan_entry(scan, name.as_ref()))?;

        info!(
            scanned = names.len(),
            duplicates = scan.duplicates.len(),
            canonical = scan.registry.len(),
            "duplicate scan finished"
        );
        Ok(scan.duplicates)
    }

    /// Like [`check_duplicates`](Self::check_duplicates), for callers whose
    /// batch may be missing altogether.
    pub fn check_optional<S: AsRef<str>>(
        &self,
        names: Option<&[S]>,
    ) -> Result<Vec<DuplicatePair>> {
        match names {
            Some(names) => self.check_duplicates(names),
            None => Err(NameDupError::NullInput("input names are missing".to_string())),
        }
    }

    fn scan_entry(&self, mut scan: Scan, entry: &str) -> Result<Scan> {
        let reduced = strip_middle_names(entry)?;

        match self.find_match(&reduced, &scan.registry)? {
            Some((tier, canonical)) => {
                debug!(%tier, duplicate = entry, canonical = %canonical, "duplicate found");
                scan.duplicates.push(DuplicatePair::new(entry, canonical));
            }
            None => {
                let key = match self.config.registry_key {
                    RegistryKey::Original => sort_key(entry)?,
                    RegistryKey::Reduced => sort_key(&reduced)?,
                };
                trace!(canonical = entry, "new canonical name");
                scan.registry.insert(key, entry.to_string());
            }
        }

        Ok(scan)
    }

    fn find_match(
        &self,
        reduced: &str,
        registry: &Registry,
    ) -> Result<Option<(MatchTier, String)>> {
        if let Some(hit) = registry.get(&sort_key(reduced)?) {
            return Ok(Some((MatchTier::Identical, hit.to_string())));
        }

        if let Some(hit) = registry.get(&sort_key(&swap_first_last(reduced)?)?) {
            return Ok(Some((MatchTier::Reordered, hit.to_string())));
        }

        if self.config.fuzzy_matching {
            if let Some(hit) = self.fuzzy_match(reduced, registry)? {
                return Ok(Some((MatchTier::Fuzzy, hit.to_string())));
            }
        }

        Ok(None)
    }

    /// Look for a registered name that differs from `reduced` only by a
    /// known first-name variant and/or a close last name.
    ///
    /// `reduced` must already be stripped to first + last; single-token
    /// names never match here.
    pub fn fuzzy_match<'r>(
        &self,
        reduced: &str,
        registry: &'r Registry,
    ) -> Result<Option<&'r str>> {
        let Some((first_name, last_name)) = split_first_last(reduced)? else {
            return Ok(None);
        };

        let first_variants = self.nicknames.variants_of(first_name).unwrap_or(&[]);
        let last_candidates = self.last_name_candidates(last_name, registry)?;

        match (first_variants.is_empty(), last_candidates.is_empty()) {
            (false, false) => {
                for first in first_variants {
                    for last in &last_candidates {
                        if let Some(hit) = probe(registry, first, last)? {
                            return Ok(Some(hit));
                        }
                    }
                }
            }
            (false, true) => {
                for first in first_variants {
                    if let Some(hit) = probe(registry, first, last_name)? {
                        return Ok(Some(hit));
                    }
                }
            }
            (true, false) => {
                for last in &last_candidates {
                    if let Some(hit) = probe(registry, first_name, last)? {
                        return Ok(Some(hit));
                    }
                }
            }
            (true, true) => {}
        }

        Ok(None)
    }

    /// Distinct last names in the registry within the configured distance
    /// of `last_name`, in registry order.
    fn last_name_candidates(&self, last_name: &str, registry: &Registry) -> Result<Vec<String>> {
        let mut candidates: Vec<String> = Vec::new();

        for name in registry.names() {
            let candidate = last_token(name)?;
            if candidates.contains(&candidate) {
                continue;
            }
            if distance(last_name, &candidate)? <= self.config.max_last_name_distance {
                candidates.push(candidate);
            }
        }

        Ok(candidates)
    }
}

fn probe<'r>(registry: &'r Registry, first: &str, last: &str) -> Result<Option<&'r str>> {
    Ok(registry.get(&sort_key(&format!("{first} {last}"))?))
}
