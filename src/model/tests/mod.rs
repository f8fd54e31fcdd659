
use crate::base::SourceLocation;
use crate::model::{EnumDefinition, Shape, ShapeId, ShapeType, Trait};

pub(super) fn id(s: &str) -> ShapeId {
    s.parse().unwrap()
}

pub(super) fn at(line: u32, column: u32) -> SourceLocation {
    SourceLocation::new("main.smithy", line, column)
}

/// `string Suit` with a named legacy enum, as a 1.0 file declares it.
pub(super) fn suit() -> Shape {
    let definitions = [
        EnumDefinition::named("DIAMOND", "diamond"),
        EnumDefinition::named("CLUB", "club"),
        EnumDefinition::named("HEART", "heart"),
        EnumDefinition::named("SPADE", "spade"),
    ];
    Shape::new(id("smithy.example#Suit"), ShapeType::String, at(10, 1))
        .with_trait(Trait::legacy_enum(&definitions, at(4, 7)))
}
