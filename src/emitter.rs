//! Output-unit emission: data-file copies plus the rendered class adapter.
//!
//! The emitter is handed one fully resolved [`UnitSpec`] per generator symbol
//! and materializes it on disk. The class template is fixed-shape - plain
//! placeholder substitution, no conditionals or loops - so the generated
//! adapter always exposes the same contract the external mock-action runtime
//! expects (save-data/default-data accessors, name, description, a delegating
//! generator call, and two always-valid hooks). The rendered output is written
//! verbatim; no syntax validation is performed on it.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::info;

use crate::config::{DEFAULT_DATA_FILE, SAVE_DATA_FILE};
use crate::error::Result;

/// Fixed output filename for the copied generator source
pub const GENERATOR_OUTPUT_FILE: &str = "generator.ts";

/// Fixed output filename for the rendered class adapter
pub const CLASS_OUTPUT_FILE: &str = "class.ts";

const CLASS_TEMPLATE: &str = include_str!("../templates/class.ts.tera");

/// Everything the emitter needs to materialize one output unit
#[derive(Debug, Clone)]
pub struct UnitSpec {
    /// Output folder for this unit; created if absent
    pub unit_dir: PathBuf,
    /// Source generator file, copied verbatim into the unit
    pub generator_source: PathBuf,
    /// Extracted generator symbol, used as import binding and call target
    pub symbol: String,
    /// Derived class identifier for the rendered adapter
    pub class_name: String,
    /// Human-readable name (symbol or folder name, depending on layout)
    pub display_name: String,
    /// Resolved default-data file to copy, if any
    pub default_data: Option<PathBuf>,
    /// Folder-local save-data file to copy, if any
    pub save_data: Option<PathBuf>,
}

#[derive(Serialize)]
struct ClassContext<'a> {
    generator_fn: &'a str,
    class_name: &'a str,
    display_name: &'a str,
}

/// Renders the class adapter source for a unit without touching the
/// filesystem.
pub fn render_class(unit: &UnitSpec) -> Result<String> {
    let context = Context::from_serialize(ClassContext {
        generator_fn: &unit.symbol,
        class_name: &unit.class_name,
        display_name: &unit.display_name,
    })?;
    Ok(Tera::one_off(CLASS_TEMPLATE, &context, false)?)
}

/// Materializes one output unit: creates the unit folder, copies the
/// generator and data files, and writes the rendered `class.ts`.
///
/// Existing files are overwritten; a missing optional data file is a normal
/// state and skipped silently. Filesystem failures propagate as fatal.
pub fn emit(unit: &UnitSpec) -> Result<()> {
    fs::create_dir_all(&unit.unit_dir)?;

    fs::copy(
        &unit.generator_source,
        unit.unit_dir.join(GENERATOR_OUTPUT_FILE),
    )?;

    if let Some(default_data) = &unit.default_data {
        if default_data.is_file() {
            fs::copy(default_data, unit.unit_dir.join(DEFAULT_DATA_FILE))?;
        }
    }

    if let Some(save_data) = &unit.save_data {
        if save_data.is_file() {
            fs::copy(save_data, unit.unit_dir.join(SAVE_DATA_FILE))?;
        }
    }

    let rendered = render_class(unit)?;
    fs::write(unit.unit_dir.join(CLASS_OUTPUT_FILE), rendered)?;

    info!(
        symbol = %unit.symbol,
        unit = %unit.unit_dir.display(),
        "Generated class.ts"
    );
    Ok(())
}
