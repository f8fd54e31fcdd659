//! Read-only semantic model of IDL shapes, as produced by a model loader.
//!
//! The loader itself is not part of this crate: callers fill a [`Model`]
//! through [`ModelBuilder`] from whatever parser they use. The upgrader only
//! needs what a loader knows after assembly:
//!
//! - every top-level [`Shape`] with its [`ShapeType`] and [`SourceLocation`],
//! - every member with its target and location,
//! - every [`Trait`] with its ID, [`Node`] value, and location.
//!
//! [`transform`] and [`serialize`] implement the two model-level operations
//! enum lowering builds on.
//!
//! [`SourceLocation`]: crate::base::SourceLocation

mod node;
pub mod prelude;
mod shape;
mod shape_id;
mod traits;

pub mod serialize;
pub mod transform;

#[cfg(test)]
mod tests;

pub use node::{Node, Number};
pub use shape::{HasTraits, MemberShape, Shape, ShapeType};
pub use shape_id::{ShapeId, ShapeIdError};
pub use traits::{EnumDefinition, Trait, TraitKind};

use indexmap::IndexMap;

/// A loaded model: top-level shapes keyed by ID, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    shapes: IndexMap<ShapeId, Shape>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes whose source location is in `file`.
    pub fn shapes_in_file<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes().filter(move |shape| shape.location().file() == file)
    }

    /// Type of the shape `id` names, looking in the model and then the prelude.
    pub fn shape_type_of(&self, id: &ShapeId) -> Option<ShapeType> {
        self.get(id)
            .map(Shape::shape_type)
            .or_else(|| prelude::shape_type(id))
    }
}

/// Collects shapes into a [`Model`]. A later shape with the same ID replaces
/// an earlier one.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    shapes: IndexMap<ShapeId, Shape>,
}

impl ModelBuilder {
    pub fn add_shape(mut self, shape: Shape) -> Self {
        self.insert(shape);
        self
    }

    pub fn add_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        for shape in shapes {
            self.insert(shape);
        }
        self
    }

    pub fn insert(&mut self, shape: Shape) {
        self.shapes.insert(shape.id().clone(), shape);
    }

    pub fn build(self) -> Model {
        Model {
            shapes: self.shapes,
        }
    }
}
