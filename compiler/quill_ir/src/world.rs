//! Game-world domain types.
//!
//! The engine proper treats these as opaque payload data: scripts observe
//! them through expressions, but nothing in this workspace implements
//! world simulation. Only the handful of kinds the test scripts exercise
//! are listed; the host server maps its own registries onto these.

use std::fmt;

/// Material kind of a block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    Air,
    Stone,
    Dirt,
    Chest,
    Furnace,
    OakDoor,
    IronDoor,
    Lever,
}

impl BlockKind {
    /// Display name as it appears in scripts.
    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Air => "air",
            BlockKind::Stone => "stone",
            BlockKind::Dirt => "dirt",
            BlockKind::Chest => "chest",
            BlockKind::Furnace => "furnace",
            BlockKind::OakDoor => "oak door",
            BlockKind::IronDoor => "iron door",
            BlockKind::Lever => "lever",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// World position of a block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        BlockPos { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A block in the world.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub kind: BlockKind,
    pub pos: BlockPos,
}

impl Block {
    pub const fn new(kind: BlockKind, pos: BlockPos) -> Self {
        Block { kind, pos }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.pos)
    }
}

/// Species of an entity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EntityKind {
    Zombie,
    Skeleton,
    Villager,
    Sheep,
    ItemFrame,
    ArmorStand,
}

impl EntityKind {
    /// Display name as it appears in scripts.
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Zombie => "zombie",
            EntityKind::Skeleton => "skeleton",
            EntityKind::Villager => "villager",
            EntityKind::Sheep => "sheep",
            EntityKind::ItemFrame => "item frame",
            EntityKind::ArmorStand => "armor stand",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live entity, identified by its server-assigned id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub id: u64,
}

impl Entity {
    pub const fn new(kind: EntityKind, id: u64) -> Self {
        Entity { kind, id }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.id)
    }
}

/// How an inventory slot was clicked.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClickKind {
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    Middle,
    NumberKey,
    Drop,
    ControlDrop,
    DoubleClick,
}

impl ClickKind {
    pub const fn name(self) -> &'static str {
        match self {
            ClickKind::Left => "left click",
            ClickKind::ShiftLeft => "shift left click",
            ClickKind::Right => "right click",
            ClickKind::ShiftRight => "shift right click",
            ClickKind::Middle => "middle click",
            ClickKind::NumberKey => "number key",
            ClickKind::Drop => "drop key",
            ClickKind::ControlDrop => "control drop key",
            ClickKind::DoubleClick => "double click",
        }
    }
}

impl fmt::Display for ClickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the server decided the click does to the inventory.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InventoryAction {
    PickupAll,
    PickupHalf,
    PickupOne,
    PlaceAll,
    PlaceOne,
    MoveToOtherInventory,
    HotbarSwap,
    DropOneSlot,
    NothingHappened,
}

impl InventoryAction {
    pub const fn name(self) -> &'static str {
        match self {
            InventoryAction::PickupAll => "pick up all",
            InventoryAction::PickupHalf => "pick up half",
            InventoryAction::PickupOne => "pick up one",
            InventoryAction::PlaceAll => "place all",
            InventoryAction::PlaceOne => "place one",
            InventoryAction::MoveToOtherInventory => "move to other inventory",
            InventoryAction::HotbarSwap => "hotbar swap",
            InventoryAction::DropOneSlot => "drop one from slot",
            InventoryAction::NothingHappened => "nothing",
        }
    }
}

impl fmt::Display for InventoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who owns an open inventory view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InventoryOwner {
    Player,
    Container,
    Crafting,
}

/// Reference to one inventory in an open view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InventoryRef {
    pub owner: InventoryOwner,
    pub size: u32,
}

impl InventoryRef {
    pub const fn new(owner: InventoryOwner, size: u32) -> Self {
        InventoryRef { owner, size }
    }
}

impl fmt::Display for InventoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            InventoryOwner::Player => write!(f, "player inventory ({} slots)", self.size),
            InventoryOwner::Container => write!(f, "container inventory ({} slots)", self.size),
            InventoryOwner::Crafting => write!(f, "crafting inventory ({} slots)", self.size),
        }
    }
}
