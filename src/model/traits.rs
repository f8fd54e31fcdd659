//! Trait applications and the legacy enum trait's value.

use super::node::Node;
use super::shape_id::ShapeId;
use crate::base::SourceLocation;
use crate::base::constants::PRELUDE_NAMESPACE;

/// Well-known prelude traits the upgrader and transforms look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitKind {
    Box,
    Default,
    Required,
    Enum,
    EnumValue,
    Documentation,
    Tags,
    Deprecated,
    Other,
}

impl TraitKind {
    /// Name of the trait shape in the prelude namespace.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            TraitKind::Box => "box",
            TraitKind::Default => "default",
            TraitKind::Required => "required",
            TraitKind::Enum => "enum",
            TraitKind::EnumValue => "enumValue",
            TraitKind::Documentation => "documentation",
            TraitKind::Tags => "tags",
            TraitKind::Deprecated => "deprecated",
            TraitKind::Other => return None,
        })
    }

    pub fn of(id: &ShapeId) -> Self {
        if id.namespace() != PRELUDE_NAMESPACE || id.member().is_some() {
            return TraitKind::Other;
        }
        match id.name() {
            "box" => TraitKind::Box,
            "default" => TraitKind::Default,
            "required" => TraitKind::Required,
            "enum" => TraitKind::Enum,
            "enumValue" => TraitKind::EnumValue,
            "documentation" => TraitKind::Documentation,
            "tags" => TraitKind::Tags,
            "deprecated" => TraitKind::Deprecated,
            _ => TraitKind::Other,
        }
    }

    /// The absolute trait ID, or `None` for [`TraitKind::Other`].
    pub fn id(self) -> Option<ShapeId> {
        self.name()
            .map(|name| ShapeId::from_parts(PRELUDE_NAMESPACE, name))
    }
}

/// A trait applied to a shape or member.
///
/// `location` is where the loader recorded the application. For traits with
/// a parenthesized value this is the value node, not the `@` that starts the
/// trait's text; for documentation comments it is the `///`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    id: ShapeId,
    value: Option<Node>,
    location: SourceLocation,
}

impl Trait {
    pub fn new(id: ShapeId, value: Option<Node>, location: SourceLocation) -> Self {
        Self {
            id,
            value,
            location,
        }
    }

    /// A prelude trait by kind. `kind` must not be [`TraitKind::Other`].
    pub fn prelude(kind: TraitKind, value: Option<Node>, location: SourceLocation) -> Self {
        let id = kind
            .id()
            .unwrap_or_else(|| ShapeId::from_parts(PRELUDE_NAMESPACE, "unknown"));
        Self::new(id, value, location)
    }

    /// An annotation trait (`@box`, `@required`), whose value is `{}`.
    pub fn annotation(kind: TraitKind, location: SourceLocation) -> Self {
        Self::prelude(kind, Some(Node::Object(Default::default())), location)
    }

    /// A documentation trait with `text` as its value.
    pub fn documentation(text: &str, location: SourceLocation) -> Self {
        Self::prelude(TraitKind::Documentation, Some(Node::string(text)), location)
    }

    /// A legacy `@enum` trait listing `definitions`.
    pub fn legacy_enum(definitions: &[EnumDefinition], location: SourceLocation) -> Self {
        let value = Node::Array(definitions.iter().map(EnumDefinition::to_node).collect());
        Self::prelude(TraitKind::Enum, Some(value), location)
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn kind(&self) -> TraitKind {
        TraitKind::of(&self.id)
    }

    pub fn value(&self) -> Option<&Node> {
        self.value.as_ref()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Entries of a legacy `@enum` trait, or `None` if this is not one or
    /// its value is malformed.
    pub fn enum_definitions(&self) -> Option<Vec<EnumDefinition>> {
        if self.kind() != TraitKind::Enum {
            return None;
        }
        self.value
            .as_ref()?
            .as_array()?
            .iter()
            .map(EnumDefinition::from_node)
            .collect()
    }
}

/// One entry of a legacy `@enum` trait.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumDefinition {
    pub value: String,
    pub name: Option<String>,
    pub documentation: Option<String>,
    pub tags: Vec<String>,
    pub deprecated: bool,
}

impl EnumDefinition {
    /// A named entry, the only form that can become a native enum member.
    pub fn named(name: &str, value: &str) -> Self {
        Self {
            value: value.to_string(),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// A value-only entry.
    pub fn value_only(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn with_documentation(mut self, documentation: &str) -> Self {
        self.documentation = Some(documentation.to_string());
        self
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn from_node(node: &Node) -> Option<Self> {
        let value = node.get("value")?.as_str()?.to_string();
        let tags = match node.get("tags") {
            Some(tags) => tags
                .as_array()?
                .iter()
                .map(|tag| tag.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()?,
            None => Vec::new(),
        };
        Some(Self {
            value,
            name: node.get("name").and_then(Node::as_str).map(str::to_string),
            documentation: node
                .get("documentation")
                .and_then(Node::as_str)
                .map(str::to_string),
            tags,
            deprecated: node.get("deprecated").and_then(Node::as_bool).unwrap_or(false),
        })
    }

    pub fn to_node(&self) -> Node {
        let mut entries = vec![("value", Node::string(&self.value))];
        if let Some(name) = &self.name {
            entries.push(("name", Node::string(name)));
        }
        if let Some(documentation) = &self.documentation {
            entries.push(("documentation", Node::string(documentation)));
        }
        if !self.tags.is_empty() {
            entries.push((
                "tags",
                Node::Array(self.tags.iter().map(Node::string).collect()),
            ));
        }
        if self.deprecated {
            entries.push(("deprecated", Node::Boolean(true)));
        }
        Node::object(entries)
    }
}
