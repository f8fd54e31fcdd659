//! IDL 2.0 rendering of a [`Model`].
//!
//! The output is a canonical form, not a copy of any source text: shapes are
//! sorted by name, traits by ID with documentation first, and every shape in
//! a namespace lands in one `<namespace>.smithy` file.

use std::collections::BTreeMap;

use super::prelude;
use super::{HasTraits, MemberShape, Model, Node, Shape, ShapeType, Trait, TraitKind};
use crate::base::constants::{DOC_COMMENT_PREFIX, IDL_EXTENSION, TARGET_VERSION, TRAIT_SIGIL};

/// Renders a model as IDL files, keyed by file name.
pub trait ModelSerializer {
    fn serialize(&self, model: &Model) -> BTreeMap<String, String>;
}

/// Serializer producing IDL 2.0 text.
#[derive(Debug, Clone)]
pub struct IdlSerializer {
    indent: String,
}

impl Default for IdlSerializer {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl IdlSerializer {
    /// Use `indent` for member lines instead of four spaces.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    fn write_file(&self, namespace: &str, shapes: &[&Shape]) -> String {
        let mut out = format!("$version: \"{TARGET_VERSION}\"\n\nnamespace {namespace}\n");
        for shape in shapes {
            out.push('\n');
            self.write_shape(shape, namespace, &mut out);
        }
        out
    }

    fn write_shape(&self, shape: &Shape, namespace: &str, out: &mut String) {
        write_traits(shape.traits(), namespace, "", out);
        out.push_str(shape.shape_type().keyword());
        out.push(' ');
        out.push_str(shape.id().name());

        let block = shape.shape_type().has_members()
            || matches!(
                shape.shape_type(),
                ShapeType::Service | ShapeType::Operation | ShapeType::Resource
            );
        if !block {
            out.push('\n');
            return;
        }
        if shape.members().is_empty() {
            out.push_str(" {}\n");
            return;
        }
        out.push_str(" {\n");
        for member in shape.members() {
            self.write_member(shape.shape_type(), member, namespace, out);
        }
        out.push_str("}\n");
    }

    fn write_member(
        &self,
        container: ShapeType,
        member: &MemberShape,
        namespace: &str,
        out: &mut String,
    ) {
        let is_enum = matches!(container, ShapeType::Enum | ShapeType::IntEnum);
        let traits: Vec<Trait> = member
            .traits()
            .iter()
            .filter(|t| !(is_enum && t.kind() == TraitKind::EnumValue))
            .cloned()
            .collect();
        write_traits(&traits, namespace, &self.indent, out);

        out.push_str(&self.indent);
        out.push_str(member.member_name());
        if is_enum {
            if let Some(value) = member
                .find_trait(TraitKind::EnumValue)
                .and_then(Trait::value)
            {
                out.push_str(" = ");
                out.push_str(&value.to_idl());
            }
        } else {
            out.push_str(": ");
            out.push_str(&member.target().relative_to(namespace));
        }
        out.push('\n');
    }
}

impl ModelSerializer for IdlSerializer {
    fn serialize(&self, model: &Model) -> BTreeMap<String, String> {
        let mut namespaces: BTreeMap<&str, Vec<&Shape>> = BTreeMap::new();
        for shape in model.shapes().filter(|s| !prelude::is_prelude(s.id())) {
            namespaces
                .entry(shape.id().namespace())
                .or_default()
                .push(shape);
        }

        namespaces
            .into_iter()
            .map(|(namespace, mut shapes)| {
                shapes.sort_by(|a, b| a.id().name().cmp(b.id().name()));
                let file = format!("{namespace}.{IDL_EXTENSION}");
                (file, self.write_file(namespace, &shapes))
            })
            .collect()
    }
}

fn write_traits(traits: &[Trait], namespace: &str, indent: &str, out: &mut String) {
    let mut sorted: Vec<&Trait> = traits.iter().collect();
    sorted.sort_by_key(|t| (t.kind() != TraitKind::Documentation, t.id().to_string()));

    for t in sorted {
        if t.kind() == TraitKind::Documentation
            && let Some(text) = t.value().and_then(Node::as_str)
        {
            for line in text.lines() {
                out.push_str(indent);
                out.push_str(DOC_COMMENT_PREFIX);
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
                out.push('\n');
            }
            continue;
        }

        out.push_str(indent);
        out.push(TRAIT_SIGIL);
        out.push_str(&t.id().relative_to(namespace));
        match t.value() {
            None => {}
            Some(value) if value.is_empty_object() => {}
            Some(Node::Object(_)) => {
                // Structured values drop the outer braces: `@trait(key: value)`.
                let rendered = t.value().map(Node::to_idl).unwrap_or_default();
                let inner = rendered
                    .strip_prefix("{ ")
                    .and_then(|s| s.strip_suffix(" }"))
                    .unwrap_or(&rendered);
                out.push('(');
                out.push_str(inner);
                out.push(')');
            }
            Some(value) => {
                out.push('(');
                out.push_str(&value.to_idl());
                out.push(')');
            }
        }
        out.push('\n');
    }
}
