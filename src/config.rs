//! Run configuration for the generator.
//!
//! A run is fully described by the input root, the output root, and the
//! output-tree layout convention. File-name conventions shared by the walker
//! and the emitter live here as constants.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Folder-local default-data file; inherited down the tree when absent.
pub const DEFAULT_DATA_FILE: &str = "default.yaml";

/// Folder-local save-data file; copied only when present, no fallback chain.
pub const SAVE_DATA_FILE: &str = "save-data.yaml";

/// Relative input root used when no `--input-dir` is given.
pub const OLD_CONFIG_DIR: &str = "old-config";

/// Relative output root used when no `--output-dir` is given.
pub const NEW_CONFIG_DIR: &str = "new-config";

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the input config tree (domain -> version -> API folders)
    pub input_root: PathBuf,
    /// Root of the mirrored output tree
    pub output_root: PathBuf,
    /// Output-tree layout convention
    pub layout: OutputLayout,
}

/// Output-tree layout convention.
///
/// Two conventions exist in the wild and are deliberately not merged:
///
/// - [`OutputLayout::Nested`] (default): any `*.ts` file whose name contains
///   "generator" may export several generator symbols; each symbol becomes a
///   `{folder}_{symbol}` unit subfolder (with an ordinal suffix when one file
///   yields more than one symbol). A file with no matching symbol emits
///   nothing.
/// - [`OutputLayout::Flat`]: only a file named exactly `generator.ts` is
///   considered, the folder itself is the unit, and the class name derives
///   from the folder name. When no symbol is detected the import falls back
///   to the literal `generator` binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// One numbered unit subfolder per extracted symbol (multi-generator)
    #[default]
    Nested,
    /// The folder itself is the unit (single-generator-per-folder)
    Flat,
}

impl OutputLayout {
    /// Canonical lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLayout::Nested => "nested",
            OutputLayout::Flat => "flat",
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" => Ok(OutputLayout::Nested),
            "flat" => Ok(OutputLayout::Flat),
            other => Err(Error::config(format!(
                "Unknown output layout '{other}' (expected 'nested' or 'flat')"
            ))),
        }
    }
}
