// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Translation model for the elmi code generator.
//!
//! ```text
//! translations.json → TranslationTree → build_model → Model → codegen
//! ```
//!
//! The [`Model`] is the only contract between this crate and the code
//! builder: it groups sanitized, validated entries by module path and is
//! never mutated after [`build_model`] returns it.

mod builder;
mod config;
mod error;
mod file;
mod mode;
mod model;
mod placeholder;
mod tree;

pub mod sanitize;

pub use builder::build_model;
pub use config::{CONFIG_FILE, Config};
pub use error::{Error, Result, StructureError};
pub use file::TranslationFile;
pub use mode::GenerationMode;
pub use model::{CUSTOM_SUFFIX, Entry, EntryKind, Model, ModulePath, Parameter, ROOT_MODULE};
pub use placeholder::extract_parameters;
pub use tree::TranslationTree;
