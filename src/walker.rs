//! Recursive traversal of the input config tree.
//!
//! The walk mirrors the input hierarchy into the output root: domain folders,
//! then version folders, then arbitrarily nested API folders. Each visited
//! folder is scanned for generator files, the effective default-data source is
//! resolved (folder-local file beats the inherited ancestor one), and the
//! emitter is invoked once per extracted symbol. The *resolved* default-data
//! path is threaded down the recursion so deeper folders always see the
//! nearest ancestor's default.
//!
//! Sibling order is folder-listing order; no ordering guarantee is made.
//! Re-running never deletes stale outputs from a previous run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DEFAULT_DATA_FILE, GeneratorConfig, OutputLayout, SAVE_DATA_FILE};
use crate::emitter::{self, UnitSpec};
use crate::error::{Error, Result};
use crate::scanner;
use crate::utils;

/// Symbol imported by the flat-layout class when no export matched
pub const FLAT_FALLBACK_SYMBOL: &str = "generator";

/// Exact generator filename recognized by the flat layout
const FLAT_GENERATOR_FILE: &str = "generator.ts";

/// Counters accumulated over one run and logged as the final summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Folders visited at or below the version level
    pub folders_visited: usize,
    /// Output units emitted (one per generator symbol)
    pub units_emitted: usize,
}

/// Runs one full generation pass over the config tree.
///
/// Lists domain folders under the input root, notes each domain's
/// `default.yaml` as the inherited fallback, and walks every version folder
/// beneath it. A missing input root halts the run before anything is written.
pub fn run(config: &GeneratorConfig) -> Result<GenerationSummary> {
    if !config.input_root.is_dir() {
        return Err(Error::InputRoot(config.input_root.clone()));
    }

    let mut summary = GenerationSummary::default();

    for domain in list_subdirs(&config.input_root)? {
        let domain_default = domain.join(DEFAULT_DATA_FILE);
        let out_domain = config.output_root.join(file_name_of(&domain));

        for version in list_subdirs(&domain)? {
            let out_version = out_domain.join(file_name_of(&version));
            walk(
                config,
                &version,
                &out_version,
                Some(domain_default.as_path()),
                &mut summary,
            )?;
        }
    }

    info!(
        folders = summary.folders_visited,
        units = summary.units_emitted,
        "All API folders, class.ts, and generator.ts files processed"
    );
    Ok(summary)
}

/// Processes one folder and recurses into its children.
fn walk(
    config: &GeneratorConfig,
    input: &Path,
    output: &Path,
    inherited_default: Option<&Path>,
    summary: &mut GenerationSummary,
) -> Result<()> {
    fs::create_dir_all(output)?;
    summary.folders_visited += 1;

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }

    let resolved_default = resolve_default_data(input, inherited_default);
    let save_data = existing_file(input.join(SAVE_DATA_FILE));

    for generator_path in files.iter().filter(|p| is_generator_file(p, config.layout)) {
        match config.layout {
            OutputLayout::Nested => process_nested(
                generator_path,
                input,
                output,
                resolved_default.as_deref(),
                save_data.as_deref(),
                summary,
            )?,
            OutputLayout::Flat => process_flat(
                generator_path,
                input,
                output,
                resolved_default.as_deref(),
                save_data.as_deref(),
                summary,
            )?,
        }
    }

    for subdir in &subdirs {
        let out_child = output.join(file_name_of(subdir));
        walk(config, subdir, &out_child, resolved_default.as_deref(), summary)?;
    }

    Ok(())
}

/// Emits one numbered unit subfolder per symbol extracted from the file.
///
/// Unit names derive only from the folder name and the symbol, so two
/// generator files in the same folder that each export the same single
/// symbol target the same unit path; the later file in listing order
/// overwrites the earlier one.
fn process_nested(
    generator_path: &Path,
    input: &Path,
    output: &Path,
    default_data: Option<&Path>,
    save_data: Option<&Path>,
    summary: &mut GenerationSummary,
) -> Result<()> {
    let source = fs::read_to_string(generator_path)?;
    let symbols = scanner::extract_generator_symbols(&source);
    if symbols.is_empty() {
        debug!(
            file = %generator_path.display(),
            "No exported generator symbol found, skipping"
        );
        return Ok(());
    }

    let folder_name = file_name_of(input);
    let multiple = symbols.len() > 1;

    for (index, symbol) in symbols.iter().enumerate() {
        let mut unit_name = format!("{folder_name}_{symbol}");
        if multiple {
            unit_name.push_str(&format!("_{}", index + 1));
        }

        emitter::emit(&UnitSpec {
            unit_dir: output.join(unit_name),
            generator_source: generator_path.to_path_buf(),
            symbol: symbol.clone(),
            class_name: utils::symbol_class_name(symbol),
            display_name: symbol.clone(),
            default_data: default_data.map(Path::to_path_buf),
            save_data: save_data.map(Path::to_path_buf),
        })?;
        summary.units_emitted += 1;
    }

    Ok(())
}

/// Emits the folder itself as a single unit, with the folder-derived class
/// name and the fixed fallback symbol when no export matched.
fn process_flat(
    generator_path: &Path,
    input: &Path,
    output: &Path,
    default_data: Option<&Path>,
    save_data: Option<&Path>,
    summary: &mut GenerationSummary,
) -> Result<()> {
    let source = fs::read_to_string(generator_path)?;
    let symbol = scanner::extract_single_symbol(&source)
        .unwrap_or_else(|| FLAT_FALLBACK_SYMBOL.to_string());
    let folder_name = file_name_of(input);

    emitter::emit(&UnitSpec {
        unit_dir: output.to_path_buf(),
        generator_source: generator_path.to_path_buf(),
        symbol,
        class_name: utils::folder_class_name(&folder_name),
        display_name: folder_name,
        default_data: default_data.map(Path::to_path_buf),
        save_data: save_data.map(Path::to_path_buf),
    })?;
    summary.units_emitted += 1;

    Ok(())
}

/// Resolves a folder's effective default-data source: the folder-local file
/// when present, else the inherited ancestor file, else none. This is an
/// override chain, not a merge.
fn resolve_default_data(folder: &Path, inherited: Option<&Path>) -> Option<PathBuf> {
    let local = folder.join(DEFAULT_DATA_FILE);
    if local.is_file() {
        return Some(local);
    }
    inherited.filter(|p| p.is_file()).map(Path::to_path_buf)
}

fn is_generator_file(path: &Path, layout: OutputLayout) -> bool {
    let name = file_name_of(path);
    match layout {
        OutputLayout::Nested => {
            name.to_lowercase().contains("generator") && name.ends_with(".ts")
        }
        OutputLayout::Flat => name == FLAT_GENERATOR_FILE,
    }
}

fn list_subdirs(path: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_data_prefers_local_file() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("api");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join(DEFAULT_DATA_FILE), "local: true\n").unwrap();

        let inherited = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(&inherited, "inherited: true\n").unwrap();

        let resolved = resolve_default_data(&folder, Some(inherited.as_path())).unwrap();
        assert_eq!(resolved, folder.join(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_resolve_default_data_falls_back_to_inherited() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("api");
        fs::create_dir(&folder).unwrap();

        let inherited = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(&inherited, "inherited: true\n").unwrap();

        let resolved = resolve_default_data(&folder, Some(inherited.as_path())).unwrap();
        assert_eq!(resolved, inherited);
    }

    #[test]
    fn test_resolve_default_data_none_when_neither_exists() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("api");
        fs::create_dir(&folder).unwrap();

        let ghost = dir.path().join(DEFAULT_DATA_FILE);
        assert_eq!(resolve_default_data(&folder, Some(ghost.as_path())), None);
        assert_eq!(resolve_default_data(&folder, None), None);
    }

    #[test]
    fn test_is_generator_file_nested_convention() {
        let layout = OutputLayout::Nested;
        assert!(is_generator_file(Path::new("generator.ts"), layout));
        assert!(is_generator_file(Path::new("userGenerator.ts"), layout));
        assert!(is_generator_file(Path::new("GENERATOR.extra.ts"), layout));
        assert!(!is_generator_file(Path::new("generator.js"), layout));
        assert!(!is_generator_file(Path::new("helpers.ts"), layout));
    }

    #[test]
    fn test_is_generator_file_flat_convention() {
        let layout = OutputLayout::Flat;
        assert!(is_generator_file(Path::new("generator.ts"), layout));
        assert!(!is_generator_file(Path::new("userGenerator.ts"), layout));
        assert!(!is_generator_file(Path::new("Generator.ts"), layout));
    }
}
