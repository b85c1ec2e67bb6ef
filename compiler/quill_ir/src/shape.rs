//! Shape predicates for narrowing block-or-entity results.
//!
//! Shapes are the opaque type tests the alias/entity subsystem hands to
//! expressions: an `EntityShape` matches entities of one kind, an
//! `ItemShape` matches blocks belonging to a named alias class. The
//! expression core only ever tests instances against them and asks an
//! entity shape for its concrete result type.

use std::fmt;

use crate::types::TypeDesc;
use crate::world::{Block, BlockKind, Entity, EntityKind};

/// A predicate over entities: "is this an X?".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntityShape {
    pub kind: EntityKind,
}

impl EntityShape {
    pub const fn new(kind: EntityKind) -> Self {
        EntityShape { kind }
    }

    /// Test a live entity against this shape.
    pub const fn is_instance(&self, entity: &Entity) -> bool {
        entity.kind as u32 == self.kind as u32
    }

    /// The concrete result type of a value narrowed by this shape.
    pub const fn concrete_type(&self) -> TypeDesc {
        TypeDesc::Entity(self.kind)
    }
}

impl fmt::Display for EntityShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())
    }
}

/// A predicate over blocks: an alias class like "any door".
///
/// An empty kind list admits every block, which is how the bare
/// `clicked block` form (no alias given) behaves.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ItemShape {
    pub name: &'static str,
    pub kinds: &'static [BlockKind],
}

impl ItemShape {
    pub const fn new(name: &'static str, kinds: &'static [BlockKind]) -> Self {
        ItemShape { name, kinds }
    }

    /// Test a block against this alias class.
    pub fn is_of_kind(&self, block: &Block) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&block.kind)
    }
}

impl fmt::Display for ItemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The auxiliary literal captured by the block-or-entity alternative.
///
/// Mutually exclusive by construction: a parse captures either an entity
/// shape or an item shape, never both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ShapeLiteral {
    Entity(EntityShape),
    Item(ItemShape),
}

impl ShapeLiteral {
    pub const fn is_entity(&self) -> bool {
        matches!(self, ShapeLiteral::Entity(_))
    }

    /// The entity shape, if this literal is one.
    pub const fn as_entity(&self) -> Option<EntityShape> {
        match self {
            ShapeLiteral::Entity(shape) => Some(*shape),
            ShapeLiteral::Item(_) => None,
        }
    }
}

impl fmt::Display for ShapeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeLiteral::Entity(shape) => write!(f, "{shape}"),
            ShapeLiteral::Item(shape) => write!(f, "{shape}"),
        }
    }
}
