//! Core utilities for the elmi translation code generator.
//!
//! This crate provides the string helpers and file primitives shared by
//! the model builder, the code builder and the command line tool.

mod case;
mod file;

// Identifier casing
pub use case::{capitalize, decapitalize, split_words, to_camel_case, to_pascal_case};
// File operations
pub use file::{File, WriteResult, remove_path};
