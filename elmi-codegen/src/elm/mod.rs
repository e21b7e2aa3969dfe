//! Elm syntax nodes used by the generated translation modules.
//!
//! Generated code targets the `I18Next` package: `t` for plain lookups,
//! `tr` for lookups with replacements and `customTr` for custom rendering.

mod function;
mod import;
mod literal;
mod module_file;

pub use function::TranslationFn;
pub use import::Import;
pub use literal::string_literal;
pub use module_file::ModuleFile;

/// The runtime package every generated module imports.
pub const RUNTIME_MODULE: &str = "I18Next";
/// Type of the loaded translations value.
pub const TRANSLATIONS_TYPE: &str = "Translations";
/// Argument name of the translations value.
pub const TRANSLATIONS_ARG: &str = "translations";
/// Argument name of the custom lift function.
pub const LIFT_ARG: &str = "nonPlaceholderLift";
/// Placeholder delimiter constructor.
pub const DELIMS: &str = "Curly";
/// Plain lookup without replacements.
pub const T_FN: &str = "t";
/// Plain lookup with replacements.
pub const TR_FN: &str = "tr";
/// Custom lookup.
pub const CUSTOM_TR_FN: &str = "customTr";
