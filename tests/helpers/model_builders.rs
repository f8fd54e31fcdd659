//! Builders for the shapes a loader would produce for fixture text.

use smithy_upgrade::model::{
    EnumDefinition, MemberShape, Model, Shape, ShapeId, ShapeType, Trait, TraitKind,
};

use super::source_fixtures::{Fixture, MIXED_V1};

pub const NAMESPACE: &str = "smithy.example";

pub fn id(s: &str) -> ShapeId {
    s.parse().unwrap()
}

/// A shape of `namespace`, located at `needle`.
pub fn shape(fx: &Fixture, shape_type: ShapeType, name: &str, needle: &str) -> Shape {
    Shape::new(
        ShapeId::from_parts(NAMESPACE, name),
        shape_type,
        fx.at(needle),
    )
}

/// A member of `container` located at `name:`.
pub fn member(fx: &Fixture, container: &Shape, name: &str, target: &str) -> MemberShape {
    MemberShape::new(
        container.id().with_member(name),
        id(target),
        fx.at(&format!("{name}:")),
    )
}

/// The model of [`MIXED_V1`] as recorded in `file`.
pub fn mixed_model(file: &str) -> (Fixture, Model) {
    let fx = Fixture::new(file, MIXED_V1);

    let suit = shape(&fx, ShapeType::String, "Suit", "string Suit").with_trait(
        Trait::legacy_enum(
            &[
                EnumDefinition::named("DIAMOND", "diamond"),
                EnumDefinition::named("CLUB", "club"),
                EnumDefinition::named("HEART", "heart"),
                EnumDefinition::named("SPADE", "spade"),
            ],
            fx.at("[\n"),
        ),
    );

    let count = shape(&fx, ShapeType::Integer, "Count", "integer Count")
        .with_trait(Trait::annotation(TraitKind::Box, fx.at("@box")));

    let card = shape(&fx, ShapeType::Structure, "Card", "structure Card");
    let card = card
        .clone()
        .with_member(member(&fx, &card, "suit", "smithy.example#Suit"))
        .with_member(
            member(&fx, &card, "rank", "smithy.api#PrimitiveInteger")
                .with_trait(Trait::documentation("Face value.", fx.at("/// Face"))),
        )
        .with_member(
            member(&fx, &card, "weight", "smithy.api#PrimitiveFloat")
                .with_trait(Trait::annotation(TraitKind::Box, fx.nth("@box", 1))),
        )
        .with_member(
            member(&fx, &card, "faceUp", "smithy.api#PrimitiveBoolean")
                .with_trait(Trait::annotation(TraitKind::Required, fx.at("@required"))),
        );

    let model = Model::builder()
        .add_shape(suit)
        .add_shape(count)
        .add_shape(card)
        .build();
    (fx, model)
}
