//! actionforge - scaffolds mock-action wrapper classes from a tree of
//! generator scripts.
//!
//! The library walks an input config tree (domain -> version -> nested API
//! folders), discovers generator source files by filename convention, extracts
//! exported generator symbols with a lexical scan, and emits one output unit
//! per symbol: a copied `generator.ts`, copied `default.yaml`/`save-data.yaml`
//! data files, and a rendered `class.ts` adapter for the external mock-action
//! runtime.
//!
//! Everything is synchronous and single-threaded; each invocation reprocesses
//! the whole tree from scratch and never deletes stale outputs.
#![deny(unsafe_code)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod scanner;
pub mod utils;
pub mod walker;

pub use config::{GeneratorConfig, OutputLayout};
pub use error::{Error, Result};
pub use walker::{GenerationSummary, run};
