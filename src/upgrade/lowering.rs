//! Native enum text for a string shape's legacy `@enum` trait.

use super::error::LoweringError;
use crate::base::constants::ENUM_KEYWORD;
use crate::model::serialize::{IdlSerializer, ModelSerializer};
use crate::model::transform::change_string_enums_to_enum_shapes;
use crate::model::{Model, Shape, TraitKind};

/// Produces the `enum Name { ... }` declaration that replaces a string shape
/// with a named legacy enum.
///
/// The returned text starts with the `enum` keyword line, holds one line per
/// member, and has no trailing line break. Only the declaration is produced;
/// the shape's other traits stay where they are written.
pub trait EnumLowering {
    fn lower_enum_trait(&self, shape: &Shape) -> Result<String, LoweringError>;
}

/// Lowers through the model: strips the shape to its `@enum` trait, converts
/// it with [`change_string_enums_to_enum_shapes`], serializes the result, and
/// keeps everything from the first line starting with `enum`.
#[derive(Debug, Clone, Default)]
pub struct SerializerRoundTrip {
    serializer: IdlSerializer,
}

impl SerializerRoundTrip {
    /// Indent member lines with `indent`.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            serializer: IdlSerializer::with_indent(indent),
        }
    }
}

impl EnumLowering for SerializerRoundTrip {
    fn lower_enum_trait(&self, shape: &Shape) -> Result<String, LoweringError> {
        let stripped = shape.retain_traits(|t| t.kind() == TraitKind::Enum);
        let model = Model::builder().add_shape(stripped).build();
        let model = change_string_enums_to_enum_shapes(&model);
        let files = self.serializer.serialize(&model);

        let serialized = files.into_values().next().unwrap_or_default();
        let mut lines: Vec<&str> = serialized
            .lines()
            .skip_while(|line| !line.starts_with(ENUM_KEYWORD))
            .collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        if lines.is_empty() {
            return Err(LoweringError::SerializationMismatch {
                shape: shape.id().clone(),
            });
        }
        Ok(lines.join("\n"))
    }
}
