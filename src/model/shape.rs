//! Shapes and members.

use super::shape_id::ShapeId;
use super::traits::{Trait, TraitKind};
use crate::base::SourceLocation;

/// The closed set of shape types the IDL defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Blob,
    Boolean,
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    Document,
    Enum,
    IntEnum,
    List,
    Set,
    Map,
    Structure,
    Union,
    Service,
    Operation,
    Resource,
}

impl ShapeType {
    /// The keyword that declares a shape of this type.
    pub fn keyword(self) -> &'static str {
        match self {
            ShapeType::Blob => "blob",
            ShapeType::Boolean => "boolean",
            ShapeType::String => "string",
            ShapeType::Byte => "byte",
            ShapeType::Short => "short",
            ShapeType::Integer => "integer",
            ShapeType::Long => "long",
            ShapeType::Float => "float",
            ShapeType::Double => "double",
            ShapeType::BigInteger => "bigInteger",
            ShapeType::BigDecimal => "bigDecimal",
            ShapeType::Timestamp => "timestamp",
            ShapeType::Document => "document",
            ShapeType::Enum => "enum",
            ShapeType::IntEnum => "intEnum",
            ShapeType::List => "list",
            ShapeType::Set => "set",
            ShapeType::Map => "map",
            ShapeType::Structure => "structure",
            ShapeType::Union => "union",
            ShapeType::Service => "service",
            ShapeType::Operation => "operation",
            ShapeType::Resource => "resource",
        }
    }

    pub fn is_number(self) -> bool {
        matches!(
            self,
            ShapeType::Byte
                | ShapeType::Short
                | ShapeType::Integer
                | ShapeType::Long
                | ShapeType::Float
                | ShapeType::Double
                | ShapeType::BigInteger
                | ShapeType::BigDecimal
        )
    }

    /// Types whose members were implicitly zero/false in IDL 1.0 unless boxed.
    pub fn had_default_value_in_1_0(self) -> bool {
        matches!(
            self,
            ShapeType::Byte
                | ShapeType::Short
                | ShapeType::Integer
                | ShapeType::Long
                | ShapeType::Float
                | ShapeType::Double
                | ShapeType::Boolean
        )
    }

    /// Types declared with a `{ ... }` member block.
    pub fn has_members(self) -> bool {
        matches!(
            self,
            ShapeType::Enum
                | ShapeType::IntEnum
                | ShapeType::List
                | ShapeType::Set
                | ShapeType::Map
                | ShapeType::Structure
                | ShapeType::Union
        )
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Traits attached to a shape or member, kept in the order they were added.
pub trait HasTraits {
    fn traits(&self) -> &[Trait];

    fn find_trait(&self, kind: TraitKind) -> Option<&Trait> {
        self.traits().iter().find(|t| t.kind() == kind)
    }

    fn has_trait(&self, kind: TraitKind) -> bool {
        self.find_trait(kind).is_some()
    }
}

/// A member of a container shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShape {
    id: ShapeId,
    target: ShapeId,
    traits: Vec<Trait>,
    location: SourceLocation,
}

impl MemberShape {
    /// `id` must be a member ID (`ns#Container$name`).
    pub fn new(id: ShapeId, target: ShapeId, location: SourceLocation) -> Self {
        Self {
            id,
            target,
            traits: Vec::new(),
            location,
        }
    }

    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.push(t);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn member_name(&self) -> &str {
        self.id.member().unwrap_or_default()
    }

    pub fn target(&self) -> &ShapeId {
        &self.target
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl HasTraits for MemberShape {
    fn traits(&self) -> &[Trait] {
        &self.traits
    }
}

/// A top-level shape, with its members in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    shape_type: ShapeType,
    traits: Vec<Trait>,
    members: Vec<MemberShape>,
    location: SourceLocation,
}

impl Shape {
    pub fn new(id: ShapeId, shape_type: ShapeType, location: SourceLocation) -> Self {
        Self {
            id,
            shape_type,
            traits: Vec::new(),
            members: Vec::new(),
            location,
        }
    }

    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.push(t);
        self
    }

    pub fn with_member(mut self, member: MemberShape) -> Self {
        self.members.push(member);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn members(&self) -> &[MemberShape] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberShape> {
        self.members.iter().find(|m| m.member_name() == name)
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// A copy of this shape carrying only the traits `keep` accepts.
    pub fn retain_traits(&self, mut keep: impl FnMut(&Trait) -> bool) -> Self {
        let mut shape = self.clone();
        shape.traits.retain(|t| keep(t));
        shape
    }

    /// A copy of this shape with a different type, traits, and members.
    pub(crate) fn rebuild(
        &self,
        shape_type: ShapeType,
        traits: Vec<Trait>,
        members: Vec<MemberShape>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            shape_type,
            traits,
            members,
            location: self.location.clone(),
        }
    }
}

impl HasTraits for Shape {
    fn traits(&self) -> &[Trait] {
        &self.traits
    }
}
