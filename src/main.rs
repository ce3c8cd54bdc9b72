//! actionforge CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

use actionforge::config::{GeneratorConfig, NEW_CONFIG_DIR, OLD_CONFIG_DIR, OutputLayout};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "actionforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate mock-action class files from a config tree
    Generate {
        /// Input config tree root (defaults to ./old-config)
        #[arg(long)]
        input_dir: Option<PathBuf>,
        /// Output tree root (defaults to ./new-config)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Output layout convention: "nested" or "flat"
        #[arg(long, default_value = "nested")]
        layout: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            input_dir,
            output_dir,
            layout,
        } => generate(input_dir, output_dir, layout)?,
    }
    Ok(())
}

/// Resolves CLI arguments into a run configuration and executes one pass.
fn generate(
    input_dir: &Option<PathBuf>,
    output_dir: &Option<PathBuf>,
    layout: &str,
) -> anyhow::Result<()> {
    let layout: OutputLayout = layout
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid output layout '{}': {}", layout, e))?;

    // Fixed relative subfolder names when the directories are not given.
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = GeneratorConfig {
        input_root: input_dir.clone().unwrap_or_else(|| cwd.join(OLD_CONFIG_DIR)),
        output_root: output_dir
            .clone()
            .unwrap_or_else(|| cwd.join(NEW_CONFIG_DIR)),
        layout,
    };

    info!(
        input = %config.input_root.display(),
        output = %config.output_root.display(),
        layout = %config.layout,
        "Generating mock-action classes"
    );

    let summary = actionforge::run(&config).context("Generation failed")?;

    info!(
        folders = summary.folders_visited,
        units = summary.units_emitted,
        "Successfully generated mock-action classes"
    );
    Ok(())
}
