//! Legacy forms the upgrader recognizes but leaves as written.

use crate::base::SourceLocation;
use crate::model::ShapeId;

/// A 1.0 construct that was not rewritten. The rest of the file is still
/// upgraded; these are reported alongside the output, not as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum UnsupportedLegacyForm {
    /// A legacy `@enum` with an unnamed entry (or no entries), which has no
    /// native enum equivalent.
    ValueOnlyEnum {
        shape: ShapeId,
        location: SourceLocation,
    },
    /// A trait that needs erasing but is not written in front of its shape,
    /// e.g. one added by an `apply` statement.
    DetachedTrait {
        shape: ShapeId,
        trait_id: ShapeId,
        location: SourceLocation,
    },
}

impl UnsupportedLegacyForm {
    pub fn shape(&self) -> &ShapeId {
        match self {
            Self::ValueOnlyEnum { shape, .. } | Self::DetachedTrait { shape, .. } => shape,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::ValueOnlyEnum { location, .. } | Self::DetachedTrait { location, .. } => location,
        }
    }
}

impl std::fmt::Display for UnsupportedLegacyForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueOnlyEnum { shape, location } => write!(
                f,
                "{location}: `{shape}` uses a value-only @enum and was left unchanged"
            ),
            Self::DetachedTrait {
                shape,
                trait_id,
                location,
            } => write!(
                f,
                "{location}: `{trait_id}` on `{shape}` is not written in front of the shape and was left unchanged"
            ),
        }
    }
}
