//! Elm code generation for the elmi translation code generator.
//!
//! Turns a validated [`Model`](elmi18n_model::Model) into one Elm module per
//! model module, calling the `I18Next` runtime package.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`elm`] - Elm syntax nodes (imports, accessor functions, module files)
//! - [`language`] - Generator trait and result types
//! - [`render`] - Model to rendered units
//! - [`generator`] - Writing rendered units to disk

pub mod builder;
pub mod elm;
pub mod generator;
pub mod language;
pub mod render;

pub use generator::Generator;
pub use language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
pub use render::{render, render_module, unit_path};
