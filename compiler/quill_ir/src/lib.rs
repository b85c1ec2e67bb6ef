//! Quill IR - Shared types for the Quill scripting engine.
//!
//! This crate provides the types every other engine crate speaks in:
//! - Source location spans (`Span`)
//! - Game-world domain types (`Block`, `Entity`, `ClickKind`, ...)
//! - The closed event payload model (`Event`, `EventKind`, `EventKindSet`)
//! - Runtime values and result sequences (`Value`, `ValueSeq`)
//! - Type descriptors (`TypeDesc`)
//! - Shape predicates for narrowing results (`EntityShape`, `ItemShape`)
//!
//! # Event model
//!
//! `Event` is a closed tagged-variant enum rather than an open trait
//! hierarchy: every event payload the engine understands is a variant, and
//! consumers match exhaustively with a defensive catch-all arm. New event
//! kinds are added here, in one place, and every match site is forced to
//! decide what they mean.
//!
//! # Values
//!
//! Evaluation results are owned copies extracted from an event, never views
//! into it. `ValueSeq` is singleton-optimized because most expressions
//! yield at most one value per evaluation; an empty sequence is the
//! ordinary "no value for this event" outcome, not an error.

mod event;
mod shape;
mod span;
mod types;
mod value;
mod world;

pub use event::{Event, EventKind, EventKindSet};
pub use shape::{EntityShape, ItemShape, ShapeLiteral};
pub use span::Span;
pub use types::TypeDesc;
pub use value::{Value, ValueSeq};
pub use world::{
    Block, BlockKind, BlockPos, ClickKind, Entity, EntityKind, InventoryAction, InventoryOwner,
    InventoryRef,
};
