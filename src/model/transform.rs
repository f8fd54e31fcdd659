//! Model-to-model transforms.

use super::prelude;
use super::{EnumDefinition, HasTraits, MemberShape, Model, Node, Shape, ShapeType, Trait, TraitKind};
use crate::base::SourceLocation;

/// Convert every string shape whose legacy `@enum` names all of its entries
/// into a native `enum` shape.
///
/// Each entry becomes a member named after the entry, targeting `Unit` and
/// carrying `@enumValue` plus whatever documentation, tags, or deprecation
/// the entry had. The shape keeps its other traits. Shapes with value-only
/// entries are left as they are.
pub fn change_string_enums_to_enum_shapes(model: &Model) -> Model {
    let shapes = model.shapes().map(|shape| {
        match named_enum_definitions(shape) {
            Some(definitions) => lower_to_enum_shape(shape, &definitions),
            None => shape.clone(),
        }
    });
    Model::builder().add_shapes(shapes).build()
}

/// Entries of `shape`'s legacy enum if the shape can become a native enum.
pub(crate) fn named_enum_definitions(shape: &Shape) -> Option<Vec<EnumDefinition>> {
    if shape.shape_type() != ShapeType::String {
        return None;
    }
    let definitions = shape.find_trait(TraitKind::Enum)?.enum_definitions()?;
    let all_named = !definitions.is_empty() && definitions.iter().all(|d| d.name.is_some());
    all_named.then_some(definitions)
}

fn lower_to_enum_shape(shape: &Shape, definitions: &[EnumDefinition]) -> Shape {
    let traits = shape
        .traits()
        .iter()
        .filter(|t| t.kind() != TraitKind::Enum)
        .cloned()
        .collect();
    let members = definitions
        .iter()
        .filter_map(|definition| {
            let name = definition.name.as_deref()?;
            Some(enum_member(shape, name, definition))
        })
        .collect();
    shape.rebuild(ShapeType::Enum, traits, members)
}

fn enum_member(shape: &Shape, name: &str, definition: &EnumDefinition) -> MemberShape {
    let none = SourceLocation::none;
    let mut member = MemberShape::new(shape.id().with_member(name), prelude::unit(), none())
        .with_trait(Trait::prelude(
            TraitKind::EnumValue,
            Some(Node::string(&definition.value)),
            none(),
        ));
    if let Some(documentation) = &definition.documentation {
        member = member.with_trait(Trait::documentation(documentation, none()));
    }
    if !definition.tags.is_empty() {
        let tags = Node::Array(definition.tags.iter().map(Node::string).collect());
        member = member.with_trait(Trait::prelude(TraitKind::Tags, Some(tags), none()));
    }
    if definition.deprecated {
        member = member.with_trait(Trait::annotation(TraitKind::Deprecated, none()));
    }
    member
}
