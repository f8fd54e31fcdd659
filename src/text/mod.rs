//! Text engine: everything that works on raw file text rather than the model.
//!
//! - [`PositionTranslator`] converts (line, column) pairs to byte offsets
//!   against the *current* text.
//! - [`IdlCursor`] is a rewindable scanner that knows how to skip IDL trivia.
//! - [`PatchBuffer`] owns one file's text and applies line and range edits.
//!
//! All offset math re-scans from the start of the text. That is linear in
//! the file size per lookup, which is fine for model files.

mod cursor;
mod patch;
mod position;

#[cfg(test)]
mod tests;

pub use cursor::{IdlCursor, is_shape_id_character};
pub use patch::{LineEnding, PatchBuffer};
pub use position::PositionTranslator;
pub(crate) use position::to_text_size;

use thiserror::Error;

/// Errors raised by the text engine.
///
/// These carry only text coordinates; the upgrade layer attaches the file,
/// shape, and trait they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A (line, column) pair has no corresponding character in the text.
    #[error("no text at line {line}, column {column}")]
    PositionNotFound { line: u32, column: u32 },

    /// A line-based edit addressed a line the buffer does not have.
    #[error("line {line} is out of range for a buffer of {line_count} line(s)")]
    LineOutOfRange { line: usize, line_count: usize },

    /// A range edit fell outside the buffer or split a character.
    #[error("range {start}..{end} is invalid for a buffer of {len} byte(s)")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Scanning backward for a trait sigil reached the start of the text.
    #[error("no `@` found at or before byte offset {offset}")]
    SigilNotFound { offset: usize },
}
