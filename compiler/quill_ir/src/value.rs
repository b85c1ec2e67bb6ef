//! Runtime values produced by expression evaluation.

use std::fmt;

use smallvec::SmallVec;

use crate::types::TypeDesc;
use crate::world::{Block, ClickKind, Entity, InventoryAction, InventoryRef};

/// A value extracted from an event by an expression.
///
/// Values are owned copies, never views into the event that produced them:
/// the host may drop or reuse the event object the moment evaluation
/// returns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Block(Block),
    Entity(Entity),
    Int(i64),
    Inventory(InventoryRef),
    Click(ClickKind),
    Action(InventoryAction),
}

/// Result sequence of one evaluation.
///
/// Singleton-optimized: expressions that yield at most one value never
/// allocate. An empty sequence is the no-value condition, not an error.
pub type ValueSeq = SmallVec<[Value; 1]>;

impl Value {
    /// The most precise descriptor admitting this value.
    pub const fn type_desc(&self) -> TypeDesc {
        match self {
            Value::Block(_) => TypeDesc::Block,
            Value::Entity(entity) => TypeDesc::Entity(entity.kind),
            Value::Int(_) => TypeDesc::Int,
            Value::Inventory(_) => TypeDesc::Inventory,
            Value::Click(_) => TypeDesc::Click,
            Value::Action(_) => TypeDesc::Action,
        }
    }

    /// Short name of this value's type, for messages.
    pub const fn type_name(&self) -> &'static str {
        self.type_desc().name()
    }

    /// The integer payload, if this is an `Int`.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The entity payload, if this is an `Entity`.
    pub const fn as_entity(&self) -> Option<Entity> {
        match self {
            Value::Entity(entity) => Some(*entity),
            _ => None,
        }
    }

    /// The block payload, if this is a `Block`.
    pub const fn as_block(&self) -> Option<Block> {
        match self {
            Value::Block(block) => Some(*block),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Block(block) => write!(f, "{block}"),
            Value::Entity(entity) => write!(f, "{entity}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Inventory(inventory) => write!(f, "{inventory}"),
            Value::Click(click) => write!(f, "{click}"),
            Value::Action(action) => write!(f, "{action}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockKind, BlockPos, EntityKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_type_desc_is_precise() {
        let entity = Value::Entity(Entity::new(EntityKind::Zombie, 1));
        assert_eq!(entity.type_desc(), TypeDesc::Entity(EntityKind::Zombie));

        let block = Value::Block(Block::new(BlockKind::Stone, BlockPos::new(1, 2, 3)));
        assert_eq!(block.type_desc(), TypeDesc::Block);
        assert_eq!(Value::Int(5).type_desc(), TypeDesc::Int);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_entity(), None);

        let entity = Entity::new(EntityKind::Sheep, 9);
        assert_eq!(Value::Entity(entity).as_entity(), Some(entity));
        assert_eq!(Value::Entity(entity).as_block(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Int(13)), "13");
        assert_eq!(
            format!("{}", Value::Entity(Entity::new(EntityKind::Villager, 2))),
            "villager #2"
        );
    }
}
