//! The `smithy.api` prelude shapes a 1.0 model can target.

use super::shape::ShapeType;
use super::shape_id::ShapeId;
use crate::base::constants::PRELUDE_NAMESPACE;

/// Prelude simple shapes: (name, type).
///
/// The `Primitive*` shapes are the 1.0 spellings of always-defaulted members;
/// the loader reports them with their type, and [`boxed_name`] maps them to
/// the shape name a 2.0 file uses instead.
const SHAPES: &[(&str, ShapeType)] = &[
    ("String", ShapeType::String),
    ("Blob", ShapeType::Blob),
    ("BigInteger", ShapeType::BigInteger),
    ("BigDecimal", ShapeType::BigDecimal),
    ("Timestamp", ShapeType::Timestamp),
    ("Document", ShapeType::Document),
    ("Boolean", ShapeType::Boolean),
    ("PrimitiveBoolean", ShapeType::Boolean),
    ("Byte", ShapeType::Byte),
    ("PrimitiveByte", ShapeType::Byte),
    ("Short", ShapeType::Short),
    ("PrimitiveShort", ShapeType::Short),
    ("Integer", ShapeType::Integer),
    ("PrimitiveInteger", ShapeType::Integer),
    ("Long", ShapeType::Long),
    ("PrimitiveLong", ShapeType::Long),
    ("Float", ShapeType::Float),
    ("PrimitiveFloat", ShapeType::Float),
    ("Double", ShapeType::Double),
    ("PrimitiveDouble", ShapeType::Double),
    ("Unit", ShapeType::Structure),
];

const PRIMITIVE_PREFIX: &str = "Primitive";

pub fn is_prelude(id: &ShapeId) -> bool {
    id.namespace() == PRELUDE_NAMESPACE
}

/// Type of a prelude shape, if `id` names one.
pub fn shape_type(id: &ShapeId) -> Option<ShapeType> {
    if !is_prelude(id) || id.member().is_some() {
        return None;
    }
    SHAPES
        .iter()
        .find(|(name, _)| *name == id.name())
        .map(|(_, shape_type)| *shape_type)
}

/// Whether `id` is one of the 1.0 `Primitive*` prelude aliases.
pub fn is_legacy_primitive(id: &ShapeId) -> bool {
    boxed_name(id).is_some()
}

/// `PrimitiveInteger` → `Integer`, for prelude `Primitive*` shapes only.
pub fn boxed_name(id: &ShapeId) -> Option<&str> {
    shape_type(id)?;
    id.name()
        .strip_prefix(PRIMITIVE_PREFIX)
        .filter(|rest| !rest.is_empty())
}

/// The `smithy.api#Unit` shape native enum members target.
pub fn unit() -> ShapeId {
    ShapeId::from_parts(PRELUDE_NAMESPACE, "Unit")
}
