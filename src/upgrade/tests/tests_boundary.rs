//! Tests for trait span detection

use std::ops::Range;

use super::{at, id};
use crate::base::SourceLocation;
use crate::model::{Node, Trait, TraitKind};
use crate::text::TextError;
use crate::upgrade::TraitBoundaryLocator;

const TEXT: &str = r#"namespace smithy.example

@box
// keep me?
@documentation("hi")
integer Count
"#;

fn traits() -> Vec<Trait> {
    vec![
        Trait::documentation("hi", at(TEXT, r#""hi""#)),
        Trait::annotation(TraitKind::Box, at(TEXT, "@box")),
    ]
}

fn span_text(target: &Trait) -> Option<&'static str> {
    let owner = at(TEXT, "integer Count");
    TraitBoundaryLocator::new(TEXT)
        .locate(&owner, &traits(), target)
        .unwrap()
        .map(|range| &TEXT[Range::<usize>::from(range)])
}

#[test]
fn test_annotation_span_runs_to_next_trait() {
    let traits = traits();
    assert_eq!(span_text(&traits[1]), Some("@box\n// keep me?\n"));
}

#[test]
fn test_value_trait_span_starts_at_sigil() {
    let traits = traits();
    assert_eq!(span_text(&traits[0]), Some("@documentation(\"hi\")\n"));
}

#[test]
fn test_inline_traits_are_sorted_by_position() {
    let owner = at(TEXT, "integer Count");
    let traits = traits();
    let inline = TraitBoundaryLocator::inline_traits(&owner, &traits);
    let kinds: Vec<_> = inline.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TraitKind::Box, TraitKind::Documentation]);
}

#[test]
fn test_synthetic_and_unlocated_traits_have_no_span() {
    let owner = at(TEXT, "integer Count");
    let synthetic = Trait::prelude(TraitKind::Default, Some(Node::from(0i64)), owner.clone());
    let unlocated = Trait::annotation(TraitKind::Box, SourceLocation::none());
    let locator = TraitBoundaryLocator::new(TEXT);

    assert_eq!(locator.locate(&owner, &[synthetic.clone()], &synthetic), Ok(None));
    assert_eq!(locator.locate(&owner, &[unlocated.clone()], &unlocated), Ok(None));
}

#[test]
fn test_missing_sigil() {
    let text = "namespace smithy.example\n\ninteger Count\n";
    let owner = at(text, "integer Count");
    let misplaced = Trait::new(id("smithy.example#meta"), None, at(text, "namespace"));

    assert_eq!(
        TraitBoundaryLocator::new(text).locate(&owner, &[misplaced.clone()], &misplaced),
        Err(TextError::SigilNotFound { offset: 0 })
    );
}

#[test]
fn test_sigil_in_comment_inside_trait_value_is_skipped() {
    let text = "namespace smithy.example\n\n@tags(\n    // see @internal\n    [\"a\"])\n@box\ninteger Count\n";
    let owner = at(text, "integer Count");
    let traits = vec![
        Trait::new(id("smithy.api#tags"), Some(Node::Array(vec![Node::string("a")])), at(text, "[")),
        Trait::annotation(TraitKind::Box, at(text, "@box")),
    ];
    let span = TraitBoundaryLocator::new(text)
        .locate(&owner, &traits, &traits[0])
        .unwrap()
        .map(|range| &text[Range::<usize>::from(range)]);

    assert_eq!(span, Some("@tags(\n    // see @internal\n    [\"a\"])\n"));
}

#[test]
fn test_unrelated_text_before_value_is_not_a_trait_start() {
    let text = "namespace smithy.example\n\n@box\nstring Name\n[\"a\"]\ninteger Count\n";
    let owner = at(text, "integer Count");
    let stray = Trait::new(id("smithy.api#tags"), None, at(text, "["));

    assert!(matches!(
        TraitBoundaryLocator::new(text).locate(&owner, &[stray.clone()], &stray),
        Err(TextError::SigilNotFound { .. })
    ));
}
