//! Foundation types for the upgrader.
//!
//! This module provides the primitives every other layer builds on:
//! - [`SourceLocation`] - (file, line, column) of a model element's defining token
//! - [`TextRange`], [`TextSize`] - byte offsets into a text buffer
//! - Domain constants (version markers, file extensions, prelude namespace)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod location;

pub use location::SourceLocation;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
