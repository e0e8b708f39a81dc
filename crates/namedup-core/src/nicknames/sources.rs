//! Layered nickname sources
//!
//! Tables are assembled in order: builtin, user (`~/.namedup/nicknames.txt`),
//! project (`.namedup/nicknames.txt`), then any explicit file. Every layer
//! appends to the names already loaded.

use std::path::{Path, PathBuf};

use super::NicknameTable;
use crate::error::{NameDupError, Result};

const DATA_DIR: &str = ".namedup";
const DATA_FILE: &str = "nicknames.txt";

/// Where a layer of nickname data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicknameSource {
    /// Compiled into namedup-core
    Builtin,
    /// Loaded from ~/.namedup/nicknames.txt
    User,
    /// Loaded from .namedup/nicknames.txt under a project root
    Project(PathBuf),
    /// An explicitly named file
    File(PathBuf),
}

impl NicknameSource {
    /// File backing this source, if any.
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            NicknameSource::Builtin => None,
            NicknameSource::User => dirs::home_dir().map(|h| h.join(DATA_DIR).join(DATA_FILE)),
            NicknameSource::Project(root) => Some(root.join(DATA_DIR).join(DATA_FILE)),
            NicknameSource::File(path) => Some(path.clone()),
        }
    }

    fn label(&self) -> String {
        match self {
            NicknameSource::Builtin => "builtin".to_string(),
            _ => self
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}

impl NicknameTable {
    /// Build a table from the standard locations.
    ///
    /// User and project files are optional and skipped when absent.
    pub fn load_standard(project_root: Option<&Path>, include_builtin: bool) -> Result<Self> {
        let mut table = Self::new();

        if include_builtin {
            table.merge(&NicknameSource::Builtin)?;
        }

        let user = NicknameSource::User;
        if user.path().is_some_and(|p| p.is_file()) {
            table.merge(&user)?;
        }

        if let Some(root) = project_root {
            let project = NicknameSource::Project(root.to_path_buf());
            if project.path().is_some_and(|p| p.is_file()) {
                table.merge(&project)?;
            }
        }

        Ok(table)
    }

    /// Read a single file into a fresh table.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut table = Self::new();
        table.merge_file(path)?;
        Ok(table)
    }

    /// Append the entries of `path`. A missing file is an error.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        self.merge(&NicknameSource::File(path.to_path_buf()))
    }

    /// Append the entries of one source.
    pub fn merge(&mut self, source: &NicknameSource) -> Result<usize> {
        if *source == NicknameSource::Builtin {
            return self.merge_source(super::BUILTIN_NICKNAMES, "builtin");
        }

        let path = source.path().ok_or_else(|| {
            NameDupError::Io(format!("no file location for nickname source {source:?}"))
        })?;
        let content = std::fs::read_to_string(&path)?;
        self.merge_source(&content, &source.label())
    }
}
