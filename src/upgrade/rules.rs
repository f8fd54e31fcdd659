//! Per-shape upgrade rules.
//!
//! Each [`UpgradeUnit`] is one shape or one member. A unit computes every
//! offset it needs against the current text before making its first edit,
//! and then applies its edits from the highest offset down. Units are applied
//! to the buffer bottom-up (see [`Upgrader`](super::Upgrader)), so a unit
//! only ever edits text at or after positions no unprocessed unit relies on.

use super::boundary::TraitBoundaryLocator;
use super::error::UpgradeError;
use super::lowering::EnumLowering;
use super::notice::UnsupportedLegacyForm;
use crate::base::constants::PRELUDE_NAMESPACE;
use crate::base::{SourceLocation, TextRange, TextSize};
use crate::model::transform::named_enum_definitions;
use crate::model::{
    HasTraits, MemberShape, Model, Node, Shape, ShapeId, ShapeType, Trait, TraitKind, prelude,
};
use crate::text::{IdlCursor, PatchBuffer, PositionTranslator, TextError, is_shape_id_character};

// ============================================================================
// Units
// ============================================================================

/// One independently editable part of a file.
#[derive(Debug, Clone, Copy)]
pub enum UpgradeUnit<'m> {
    Shape(&'m Shape),
    Member {
        container: &'m Shape,
        member: &'m MemberShape,
    },
}

impl<'m> UpgradeUnit<'m> {
    /// Every shape and member of `model` declared in `file`, bottom-up.
    pub fn collect(model: &'m Model, file: &str) -> Vec<UpgradeUnit<'m>> {
        let mut units = Vec::new();
        for shape in model.shapes().filter(|s| s.location().file() == file) {
            units.push(UpgradeUnit::Shape(shape));
            for member in shape.members() {
                if member.location().file() == file {
                    units.push(UpgradeUnit::Member {
                        container: shape,
                        member,
                    });
                }
            }
        }
        units.sort_by(|a, b| b.location().line_col().cmp(&a.location().line_col()));
        units
    }

    pub fn id(&self) -> &'m ShapeId {
        match self {
            UpgradeUnit::Shape(shape) => shape.id(),
            UpgradeUnit::Member { member, .. } => member.id(),
        }
    }

    pub fn location(&self) -> &'m SourceLocation {
        match self {
            UpgradeUnit::Shape(shape) => shape.location(),
            UpgradeUnit::Member { member, .. } => member.location(),
        }
    }

    fn traits(&self) -> &'m [Trait] {
        match self {
            UpgradeUnit::Shape(shape) => shape.traits(),
            UpgradeUnit::Member { member, .. } => member.traits(),
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Shared state for applying units to one file.
pub(crate) struct RuleContext<'a, L> {
    pub model: &'a Model,
    pub file: &'a str,
    pub lowering: &'a L,
    pub notices: &'a mut Vec<UnsupportedLegacyForm>,
}

/// Apply the rules for `unit` to `buffer`.
pub(crate) fn apply<L: EnumLowering>(
    unit: UpgradeUnit<'_>,
    buffer: &mut PatchBuffer,
    cx: &mut RuleContext<'_, L>,
) -> Result<(), UpgradeError> {
    match unit {
        UpgradeUnit::Shape(shape) => match shape.shape_type() {
            ShapeType::String if shape.has_trait(TraitKind::Enum) => {
                upgrade_string_enum(shape, buffer, cx)
            }
            _ => upgrade_shape(unit, buffer, cx),
        },
        UpgradeUnit::Member { container, member } => {
            upgrade_member(unit, container, member, buffer, cx)
        }
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Any shape: drop a legacy `@box`.
fn upgrade_shape<L>(
    unit: UpgradeUnit<'_>,
    buffer: &mut PatchBuffer,
    cx: &mut RuleContext<'_, L>,
) -> Result<(), UpgradeError> {
    let mut spans = Vec::new();
    box_span(unit, buffer, cx, &mut spans)?;
    erase_spans(unit, buffer, cx, spans)
}

/// A string shape with a legacy `@enum`: replace the declaration with a
/// native enum and drop the trait.
fn upgrade_string_enum<L: EnumLowering>(
    shape: &Shape,
    buffer: &mut PatchBuffer,
    cx: &mut RuleContext<'_, L>,
) -> Result<(), UpgradeError> {
    let unit = UpgradeUnit::Shape(shape);
    let Some(enum_trait) = shape.find_trait(TraitKind::Enum) else {
        return upgrade_shape(unit, buffer, cx);
    };

    if named_enum_definitions(shape).is_none() {
        notice(
            cx,
            UnsupportedLegacyForm::ValueOnlyEnum {
                shape: shape.id().clone(),
                location: shape.location().clone(),
            },
        );
        return upgrade_shape(unit, buffer, cx);
    }

    let mut spans = Vec::new();
    let Some(enum_span) = trait_span(unit, enum_trait, buffer, cx)? else {
        return upgrade_shape(unit, buffer, cx);
    };
    spans.push(enum_span);
    box_span(unit, buffer, cx, &mut spans)?;

    let declaration = cx.lowering.lower_enum_trait(shape).map_err(|e| e.in_file(cx.file))?;
    let (line, prefix) = line_prefix(buffer, shape.location())
        .map_err(|e| UpgradeError::from_text(cx.file, shape.id(), None, e))?;

    // The enum block replaces the declaration line. Text in front of the
    // declaration on that line (indentation or traits) is kept on the
    // first line so that the precomputed trait spans stay valid.
    let continuation = if prefix.trim().is_empty() { prefix.as_str() } else { "" };
    let block: Vec<String> = declaration
        .lines()
        .enumerate()
        .map(|(i, text)| match i {
            0 => format!("{prefix}{text}"),
            _ => format!("{continuation}{text}"),
        })
        .collect();

    let file = cx.file;
    let edit = |e| UpgradeError::from_text(file, shape.id(), Some(enum_trait.id()), e);
    for (i, text) in block.iter().enumerate() {
        buffer.insert_line(line + 1 + i, text).map_err(edit)?;
    }
    buffer.erase_line(line).map_err(edit)?;
    tracing::trace!(shape = %shape.id(), members = block.len().saturating_sub(2), "lowered enum");

    erase_spans(unit, buffer, cx, spans)
}

// ============================================================================
// Members
// ============================================================================

/// A member: rewrite a written `Primitive*` target to its boxed name, then
/// either add the default a 1.0 member had implicitly or drop a legacy `@box`.
fn upgrade_member<L>(
    unit: UpgradeUnit<'_>,
    container: &Shape,
    member: &MemberShape,
    buffer: &mut PatchBuffer,
    cx: &mut RuleContext<'_, L>,
) -> Result<(), UpgradeError> {
    let target_type = cx.model.shape_type_of(member.target()).ok_or_else(|| {
        UpgradeError::UnresolvedTarget {
            file: cx.file.to_string(),
            member: member.id().clone(),
            target: member.target().clone(),
        }
    })?;
    let file = cx.file;
    let text_error = |e| UpgradeError::from_text(file, member.id(), None, e);

    let target_edit = match boxed_target_name(member.target(), target_type) {
        Some(boxed) => target_rewrite(buffer.as_str(), member.location(), boxed).map_err(text_error)?,
        None => None,
    };

    let mut spans = Vec::new();
    let default_edit = match default_value(container.shape_type(), member, target_type) {
        Some(value) => Some(default_insertion(buffer, member.location(), &value).map_err(text_error)?),
        None => {
            box_span(unit, buffer, cx, &mut spans)?;
            None
        }
    };

    if let Some((range, boxed)) = target_edit {
        tracing::trace!(member = %member.id(), %boxed, "rewrite target");
        buffer.replace(range, &boxed).map_err(text_error)?;
    }
    match default_edit {
        Some(DefaultInsertion::Line { line, text }) => {
            tracing::trace!(member = %member.id(), %text, "insert default line");
            buffer.insert_line(line, &text).map_err(text_error)?;
        }
        Some(DefaultInsertion::Inline { offset, text }) => {
            tracing::trace!(member = %member.id(), %text, "insert default inline");
            buffer.insert(offset, &text).map_err(text_error)?;
        }
        None => {}
    }
    erase_spans(unit, buffer, cx, spans)
}

/// The prelude name a written `Primitive*` target is replaced with.
///
/// The loader may already have swapped the alias for the boxed prelude shape
/// (adding a synthetic default in its place), so a prelude target with an
/// implicit 1.0 default also names the replacement.
fn boxed_target_name(target: &ShapeId, target_type: ShapeType) -> Option<&str> {
    match prelude::boxed_name(target) {
        Some(boxed) => Some(boxed),
        None => (prelude::is_prelude(target) && target_type.had_default_value_in_1_0())
            .then(|| target.name()),
    }
}

/// Range of the target written after the member's `:` and its boxed
/// spelling, or `None` unless the text names a prelude `Primitive*` shape.
fn target_rewrite(
    text: &str,
    location: &SourceLocation,
    boxed: &str,
) -> Result<Option<(TextRange, String)>, TextError> {
    let mut cursor = IdlCursor::new(text);
    cursor.rewind(location)?;
    cursor.consume_while(|c| c != ':');
    if cursor.eof() {
        tracing::warn!(%location, "member has no `:` before the end of the file");
        return Ok(None);
    }
    cursor.skip();
    cursor.ws();

    let start = cursor.position();
    let written = cursor.consume_while(is_shape_id_character);
    if written.is_empty() {
        tracing::warn!(%location, "member has no written target");
        return Ok(None);
    }
    let (namespace, name) = match written.rsplit_once('#') {
        Some((namespace, name)) => (Some(namespace), name),
        None => (None, written),
    };
    let aliased = namespace.is_none_or(|ns| ns == PRELUDE_NAMESPACE)
        && prelude::is_legacy_primitive(&ShapeId::from_parts(PRELUDE_NAMESPACE, name));
    if !aliased {
        return Ok(None);
    }
    let replacement = match namespace {
        Some(namespace) => format!("{namespace}#{boxed}"),
        None => boxed.to_string(),
    };
    Ok(Some((TextRange::new(start, cursor.position()), replacement)))
}

/// The `@default` value to add in front of `member`, if it needs one.
///
/// A 1.0 member targeting an unboxed number or boolean was implicitly zero
/// or false. It needs an explicit default unless it is `@required`, `@box`ed,
/// or already has a default written in the file. The loader marks such
/// members with a default trait located at the member itself; that trait has
/// no text of its own and is only ever written once, here. Without that
/// marker only structure members targeting a `Primitive*` alias qualify;
/// list, map, and union members never get one.
fn default_value(
    container_type: ShapeType,
    member: &MemberShape,
    target_type: ShapeType,
) -> Option<Node> {
    if !target_type.had_default_value_in_1_0()
        || member.has_trait(TraitKind::Required)
        || member.has_trait(TraitKind::Box)
    {
        return None;
    }

    let default = member.find_trait(TraitKind::Default);
    let synthetic = default.filter(|t| t.location() == member.location());
    if default.is_some() && synthetic.is_none() {
        return None;
    }
    if synthetic.is_none()
        && (container_type != ShapeType::Structure || !prelude::is_legacy_primitive(member.target()))
    {
        return None;
    }

    let value = synthetic
        .and_then(Trait::value)
        .filter(|v| !matches!(v, Node::Null) && !v.is_empty_object())
        .cloned();
    Some(value.unwrap_or_else(|| zero_value(target_type)))
}

fn zero_value(shape_type: ShapeType) -> Node {
    match shape_type {
        ShapeType::Boolean => Node::Boolean(false),
        t if t.is_number() => Node::from(0i64),
        _ => Node::string(""),
    }
}

enum DefaultInsertion {
    /// A new line before the member's line, indented like the member.
    Line { line: usize, text: String },
    /// In front of the member on its own line, when other text precedes it.
    Inline { offset: TextSize, text: String },
}

fn default_insertion(
    buffer: &PatchBuffer,
    location: &SourceLocation,
    value: &Node,
) -> Result<DefaultInsertion, TextError> {
    let annotation = format!("@default({})", value.to_idl());
    let (line, prefix) = line_prefix(buffer, location)?;
    if prefix.trim().is_empty() {
        Ok(DefaultInsertion::Line {
            line,
            text: format!("{prefix}{annotation}"),
        })
    } else {
        let offset = PositionTranslator::new(buffer.as_str()).offset_of(location)?;
        Ok(DefaultInsertion::Inline {
            offset,
            text: format!("{annotation} "),
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The line `location` is on and the text in front of it on that line.
fn line_prefix(buffer: &PatchBuffer, location: &SourceLocation) -> Result<(usize, String), TextError> {
    let translator = PositionTranslator::new(buffer.as_str());
    let start = translator.offset(location.line(), 1)?;
    let end = translator.offset_of(location)?;
    let prefix = buffer.as_str()[usize::from(start)..usize::from(end)].to_string();
    Ok((location.line() as usize, prefix))
}

/// Span of `t` on `unit`, or a notice if it is not written in front of it.
fn trait_span<L>(
    unit: UpgradeUnit<'_>,
    t: &Trait,
    buffer: &PatchBuffer,
    cx: &mut RuleContext<'_, L>,
) -> Result<Option<TextRange>, UpgradeError> {
    let span = TraitBoundaryLocator::new(buffer.as_str())
        .locate(unit.location(), unit.traits(), t)
        .map_err(|e| UpgradeError::from_text(cx.file, unit.id(), Some(t.id()), e))?;
    if span.is_none() {
        notice(
            cx,
            UnsupportedLegacyForm::DetachedTrait {
                shape: unit.id().clone(),
                trait_id: t.id().clone(),
                location: t.location().clone(),
            },
        );
    }
    Ok(span)
}

fn box_span<L>(
    unit: UpgradeUnit<'_>,
    buffer: &PatchBuffer,
    cx: &mut RuleContext<'_, L>,
    spans: &mut Vec<TextRange>,
) -> Result<(), UpgradeError> {
    let Some(box_trait) = unit.traits().iter().find(|t| t.kind() == TraitKind::Box) else {
        return Ok(());
    };
    if let Some(span) = trait_span(unit, box_trait, buffer, cx)? {
        spans.push(span);
    }
    Ok(())
}

/// Erase precomputed spans, last first.
fn erase_spans<L>(
    unit: UpgradeUnit<'_>,
    buffer: &mut PatchBuffer,
    cx: &RuleContext<'_, L>,
    mut spans: Vec<TextRange>,
) -> Result<(), UpgradeError> {
    spans.sort_by_key(|span| std::cmp::Reverse(span.start()));
    for span in spans {
        tracing::trace!(unit = %unit.id(), ?span, "erase trait");
        buffer
            .erase(span)
            .map_err(|e| UpgradeError::from_text(cx.file, unit.id(), None, e))?;
    }
    Ok(())
}

fn notice<L>(cx: &mut RuleContext<'_, L>, form: UnsupportedLegacyForm) {
    tracing::warn!("{form}");
    cx.notices.push(form);
}
