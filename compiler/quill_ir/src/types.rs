//! Type descriptors for expression results.
//!
//! A `TypeDesc` is what an expression *declares* it returns, computed
//! without any event instance. Descriptors carry enough precision for
//! downstream consumers to rely on: an entity result narrowed by a shape
//! predicate is declared as that shape's concrete kind, not as a generic
//! entity supertype.

use std::fmt;

use crate::value::Value;
use crate::world::EntityKind;

/// Statically-declared result type of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDesc {
    /// Top type: admits every value. Used as the registration supertype
    /// for expressions whose precise type is only known after parsing.
    Any,
    /// A block reference.
    Block,
    /// Any entity, regardless of kind.
    AnyEntity,
    /// An entity of one specific kind.
    Entity(EntityKind),
    /// An integer (slot indices).
    Int,
    /// An inventory reference.
    Inventory,
    /// An inventory click kind.
    Click,
    /// An inventory action.
    Action,
}

impl TypeDesc {
    /// Display name of this descriptor.
    pub const fn name(self) -> &'static str {
        match self {
            TypeDesc::Any => "any",
            TypeDesc::Block => "block",
            TypeDesc::AnyEntity => "entity",
            TypeDesc::Entity(kind) => kind.name(),
            TypeDesc::Int => "integer",
            TypeDesc::Inventory => "inventory",
            TypeDesc::Click => "click kind",
            TypeDesc::Action => "inventory action",
        }
    }

    /// Check whether a runtime value is assignable to this descriptor.
    pub const fn admits(self, value: &Value) -> bool {
        match (self, value) {
            (TypeDesc::Any, _) => true,
            (TypeDesc::Block, Value::Block(_)) => true,
            (TypeDesc::AnyEntity, Value::Entity(_)) => true,
            // Precise narrowing: only the declared kind is assignable.
            (TypeDesc::Entity(kind), Value::Entity(entity)) => entity.kind as u32 == kind as u32,
            (TypeDesc::Int, Value::Int(_)) => true,
            (TypeDesc::Inventory, Value::Inventory(_)) => true,
            (TypeDesc::Click, Value::Click(_)) => true,
            (TypeDesc::Action, Value::Action(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
