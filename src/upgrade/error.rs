//! Error types for upgrade operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ShapeId;
use crate::text::TextError;

/// Errors that abort the upgrade of one file.
///
/// Every variant names the file; all but I/O errors also name the shape (and
/// trait, where one was involved) the failing edit was computed for. No
/// partial output is produced for a file that fails.
#[derive(Debug, Error)]
pub enum UpgradeError {
    /// A model location has no corresponding text; the model and the file
    /// are out of sync.
    #[error("{file}:{line}:{column}: no text for {}; the model does not match the file", describe(.shape, .trait_id.as_ref()))]
    PositionNotFound {
        file: String,
        shape: ShapeId,
        trait_id: Option<ShapeId>,
        line: u32,
        column: u32,
    },

    /// No `@` precedes a trait's recorded value location.
    #[error("{file}: no `@` found before byte {offset} for {}", describe(.shape, Some(.trait_id)))]
    TraitStartNotFound {
        file: String,
        shape: ShapeId,
        trait_id: ShapeId,
        offset: usize,
    },

    /// Enum lowering produced no `enum` declaration line.
    #[error("{file}: serializing `{shape}` as a native enum produced no `enum` line")]
    SerializationMismatch { file: String, shape: ShapeId },

    /// A member targets a shape neither the model nor the prelude defines.
    #[error("{file}: member `{member}` targets unknown shape `{target}`")]
    UnresolvedTarget {
        file: String,
        member: ShapeId,
        target: ShapeId,
    },

    /// A text edit was rejected by the patch buffer.
    #[error("{file}: cannot edit text for `{shape}`: {source}")]
    Edit {
        file: String,
        shape: ShapeId,
        #[source]
        source: TextError,
    },

    /// Reading the file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The batch was cancelled before this file was started.
    #[error("{}: upgrade cancelled", .path.display())]
    Cancelled { path: PathBuf },
}

impl UpgradeError {
    /// Attach file, shape, and trait context to a text engine error.
    pub fn from_text(
        file: &str,
        shape: &ShapeId,
        trait_id: Option<&ShapeId>,
        error: TextError,
    ) -> Self {
        match (error, trait_id) {
            (TextError::PositionNotFound { line, column }, _) => Self::PositionNotFound {
                file: file.to_string(),
                shape: shape.clone(),
                trait_id: trait_id.cloned(),
                line,
                column,
            },
            (TextError::SigilNotFound { offset }, Some(trait_id)) => Self::TraitStartNotFound {
                file: file.to_string(),
                shape: shape.clone(),
                trait_id: trait_id.clone(),
                offset,
            },
            (source, _) => Self::Edit {
                file: file.to_string(),
                shape: shape.clone(),
                source,
            },
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the model and the file disagree (as opposed to an I/O or
    /// lowering failure).
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::PositionNotFound { .. } | Self::TraitStartNotFound { .. } | Self::Edit { .. }
        )
    }
}

/// Errors produced by [`EnumLowering`](super::EnumLowering) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    /// The serialized model has no line starting with `enum`.
    #[error("serializing `{shape}` produced no `enum` line")]
    SerializationMismatch { shape: ShapeId },
}

impl LoweringError {
    /// Attach the file being upgraded.
    pub fn in_file(self, file: &str) -> UpgradeError {
        match self {
            Self::SerializationMismatch { shape } => UpgradeError::SerializationMismatch {
                file: file.to_string(),
                shape,
            },
        }
    }
}

fn describe(shape: &ShapeId, trait_id: Option<&ShapeId>) -> String {
    match trait_id {
        Some(trait_id) => format!("trait `{trait_id}` on `{shape}`"),
        None => format!("`{shape}`"),
    }
}
