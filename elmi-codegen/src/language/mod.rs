//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`GenerateResult`] - Result of code generation
//! - [`CleanResult`] - Result of cleaning previously generated files
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
