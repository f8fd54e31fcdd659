//! End-to-end upgrades of whole files.

use rstest::rstest;
use smithy_upgrade::model::{MemberShape, Model, Node, ShapeType, Trait, TraitKind};
use smithy_upgrade::{UpgradeOptions, Upgrader};

use crate::helpers::*;

const FILE: &str = "model/main.smithy";

fn minimal_model(fx: &Fixture) -> Model {
    Model::builder()
        .add_shape(shape(fx, ShapeType::String, "Foo", "string Foo"))
        .build()
}

#[test]
fn test_minimal_file_only_changes_version() {
    let fx = Fixture::new(FILE, MINIMAL_V1);
    let model = minimal_model(&fx);

    let outcome = Upgrader::new(&model).upgrade_source(FILE, &fx.text).unwrap();
    assert_eq!(outcome.text, MINIMAL_V2);
    assert!(outcome.notices.is_empty());
}

#[test]
fn test_mixed_file() {
    let (fx, model) = mixed_model(FILE);
    let outcome = Upgrader::new(&model).upgrade_source(FILE, &fx.text).unwrap();
    assert_eq!(outcome.text, MIXED_V2);
}

#[test]
fn test_upgrading_twice_is_idempotent() {
    let (fx, model) = mixed_model(FILE);
    let upgrader = Upgrader::new(&model);

    let once = upgrader.upgrade_source(FILE, &fx.text).unwrap().text;
    let twice = upgrader.upgrade_source(FILE, &once).unwrap().text;
    assert_eq!(once, twice);
}

#[test]
fn test_shapes_from_other_files_are_ignored() {
    let (fx, model) = mixed_model("model/other.smithy");
    let outcome = Upgrader::new(&model).upgrade_source(FILE, &fx.text).unwrap();
    assert_eq!(outcome.text, fx.text.replacen("\"1.0\"", "\"2.0\"", 1));
}

#[rstest]
#[case::legacy("$version: \"1.0\"\n\nnamespace a\n", "$version: \"2.0\"\n\nnamespace a\n")]
#[case::legacy_short("$version: \"1\"\nnamespace a\n", "$version: \"2.0\"\nnamespace a\n")]
#[case::after_comment("// c\n$version:\"1.0\"\n", "// c\n$version: \"2.0\"\n")]
#[case::missing("namespace a\n", "$version: \"2.0\"\n\nnamespace a\n")]
#[case::missing_trailing_newline("namespace a", "$version: \"2.0\"\n\nnamespace a\n")]
#[case::crlf("namespace a\r\n", "$version: \"2.0\"\r\n\r\nnamespace a\r\n")]
fn test_version_header(#[case] input: &str, #[case] expected: &str) {
    let model = Model::default();
    let outcome = Upgrader::new(&model).upgrade_source(FILE, input).unwrap();
    assert_eq!(outcome.text, expected);
    assert_eq!(outcome.text.matches("$version").count(), 1);
}

#[test]
fn test_skip_upgraded_can_be_turned_off() {
    let text = "$version: \"2.0\"\n\nnamespace smithy.example\n\n@box\ninteger Count";
    let fx = Fixture::new(FILE, text);
    let model = Model::builder()
        .add_shape(
            shape(&fx, ShapeType::Integer, "Count", "integer")
                .with_trait(Trait::annotation(TraitKind::Box, fx.at("@box"))),
        )
        .build();

    let skipped = Upgrader::new(&model).upgrade_source(FILE, text).unwrap();
    assert_eq!(skipped.text, text);

    let options = UpgradeOptions {
        skip_upgraded: false,
        ..UpgradeOptions::default()
    };
    let forced = Upgrader::with_options(&model, options)
        .upgrade_source(FILE, text)
        .unwrap();
    assert_eq!(
        forced.text,
        "$version: \"2.0\"\n\nnamespace smithy.example\n\ninteger Count\n"
    );
}

#[test]
fn test_indented_member_keeps_its_indentation() {
    let text = "namespace smithy.example\n\nstructure Foo {\n\t\tflag: PrimitiveBoolean\n}\n";
    let fx = Fixture::new(FILE, text);
    let foo = shape(&fx, ShapeType::Structure, "Foo", "structure");
    let flag_location = fx.at("flag:");
    let foo = foo.clone().with_member(
        MemberShape::new(
            foo.id().with_member("flag"),
            id("smithy.api#PrimitiveBoolean"),
            flag_location.clone(),
        )
        .with_trait(Trait::prelude(
            TraitKind::Default,
            Some(Node::Boolean(false)),
            flag_location,
        )),
    );
    let model = Model::builder().add_shape(foo).build();

    let outcome = Upgrader::new(&model).upgrade_source(FILE, text).unwrap();
    assert_eq!(
        outcome.text,
        "$version: \"2.0\"\n\nnamespace smithy.example\n\nstructure Foo {\n\t\t@default(false)\n\t\tflag: Boolean\n}\n"
    );
}
