//! The closed event payload model.
//!
//! Scripts are compiled against an event *kind* (what the surrounding
//! trigger listens to) and evaluated against event *instances* (one live
//! payload per dispatch). `EventKind` identifies the former, `Event` the
//! latter, and `EventKindSet` expresses "one of these kinds" queries the
//! way the compile-time context check needs them.

use bitflags::bitflags;

use crate::world::{Block, ClickKind, Entity, InventoryAction, InventoryRef};

/// Kind of event a trigger can listen to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventKind {
    /// A player interacted with a block (or with air).
    InteractBlock,
    /// A player right-clicked an entity.
    InteractEntity,
    /// A player right-clicked a precise position on an entity.
    InteractEntityAt,
    /// A player clicked a slot in an open inventory view.
    InventoryClick,
}

impl EventKind {
    /// Display name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::InteractBlock => "block click",
            EventKind::InteractEntity => "entity click",
            EventKind::InteractEntityAt => "entity click at position",
            EventKind::InventoryClick => "inventory click",
        }
    }
}

bitflags! {
    /// A set of event kinds, used for "is the current event one of {...}"
    /// queries during compilation.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct EventKindSet: u8 {
        const INTERACT_BLOCK = 1;
        const INTERACT_ENTITY = 1 << 1;
        const INTERACT_ENTITY_AT = 1 << 2;
        const INVENTORY_CLICK = 1 << 3;

        /// Both entity-interaction kinds.
        const ENTITY_INTERACTION = Self::INTERACT_ENTITY.bits() | Self::INTERACT_ENTITY_AT.bits();
    }
}

impl EventKindSet {
    /// The singleton set for one kind.
    pub const fn from_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::InteractBlock => EventKindSet::INTERACT_BLOCK,
            EventKind::InteractEntity => EventKindSet::INTERACT_ENTITY,
            EventKind::InteractEntityAt => EventKindSet::INTERACT_ENTITY_AT,
            EventKind::InventoryClick => EventKindSet::INVENTORY_CLICK,
        }
    }

    /// Check whether a kind is a member of this set.
    pub const fn contains_kind(self, kind: EventKind) -> bool {
        self.contains(Self::from_kind(kind))
    }
}

/// One live event payload, borrowed for the duration of an evaluation.
///
/// Closed set: every payload shape the engine understands is a variant
/// here. Match sites that only care about some variants keep a defensive
/// catch-all arm producing the no-value result, so growth of this enum
/// degrades gracefully instead of crashing evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A player interacted with a block. Some interaction sub-kinds (air
    /// clicks) fire without a clicked block.
    InteractBlock { block: Option<Block> },
    /// A player right-clicked an entity.
    InteractEntity { target: Entity },
    /// A player right-clicked a precise position on an entity.
    InteractEntityAt { target: Entity },
    /// A player clicked an inventory slot. `slot` is the logical index
    /// within the clicked inventory; `raw_slot` is the index within the
    /// whole open view.
    InventoryClick {
        click: ClickKind,
        action: InventoryAction,
        inventory: InventoryRef,
        slot: i32,
        raw_slot: i32,
    },
}

impl Event {
    /// The kind of this payload.
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::InteractBlock { .. } => EventKind::InteractBlock,
            Event::InteractEntity { .. } => EventKind::InteractEntity,
            Event::InteractEntityAt { .. } => EventKind::InteractEntityAt,
            Event::InventoryClick { .. } => EventKind::InventoryClick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockKind, BlockPos, EntityKind, InventoryOwner};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entity_interaction_set_covers_both_kinds() {
        let set = EventKindSet::ENTITY_INTERACTION;
        assert!(set.contains_kind(EventKind::InteractEntity));
        assert!(set.contains_kind(EventKind::InteractEntityAt));
        assert!(!set.contains_kind(EventKind::InteractBlock));
        assert!(!set.contains_kind(EventKind::InventoryClick));
    }

    #[test]
    fn test_from_kind_is_singleton() {
        for kind in [
            EventKind::InteractBlock,
            EventKind::InteractEntity,
            EventKind::InteractEntityAt,
            EventKind::InventoryClick,
        ] {
            let set = EventKindSet::from_kind(kind);
            assert_eq!(set.bits().count_ones(), 1);
            assert!(set.contains_kind(kind));
        }
    }

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::InteractBlock.name(), "block click");
        assert_eq!(EventKind::InventoryClick.name(), "inventory click");
    }

    #[test]
    fn test_event_kind_matches_payload() {
        let block = Event::InteractBlock {
            block: Some(Block::new(BlockKind::Chest, BlockPos::new(0, 64, 0))),
        };
        assert_eq!(block.kind(), EventKind::InteractBlock);

        let entity = Event::InteractEntityAt {
            target: Entity::new(EntityKind::Sheep, 7),
        };
        assert_eq!(entity.kind(), EventKind::InteractEntityAt);

        let click = Event::InventoryClick {
            click: ClickKind::Left,
            action: InventoryAction::PickupAll,
            inventory: InventoryRef::new(InventoryOwner::Container, 27),
            slot: 3,
            raw_slot: 3,
        };
        assert_eq!(click.kind(), EventKind::InventoryClick);
    }
}
