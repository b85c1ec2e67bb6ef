//! Quill Exprs - Expression system for the Quill engine.
//!
//! This crate provides:
//! - The syntax-alternative catalog and mark-tagged pattern compiler
//!   (`ClickTarget`, `compile_pattern`)
//! - Parse outcomes as reported by the host pattern matcher
//!   (`ParseOutcome`)
//! - Compile-time context validation and the resolved expression
//!   (`CompileContext`, `ClickedExpr`)
//! - The expression registry the host bootstraps from
//!   (`ExpressionRegistry`, `register_clicked`)
//!
//! # Architecture
//!
//! An expression that parses as one of several mutually-exclusive
//! alternatives couples three decisions:
//! 1. **Which alternative matched** - the matcher reports the mark tag
//!    embedded in the compiled pattern, and the catalog maps it back to an
//!    alternative.
//! 2. **Whether that alternative is legal here** - validated once, at
//!    parse time, against the event kind the surrounding trigger is being
//!    compiled for. Rejection surfaces a diagnostic and aborts only this
//!    expression.
//! 3. **What a live event yields** - evaluation dispatches on the
//!    alternative and the event's variant, producing an owned, possibly
//!    empty result sequence. Empty is the ordinary no-value outcome.
//!
//! The resolved configuration is immutable after validation, so
//! evaluation is a pure `&self` function and instances are freely shared
//! across event-dispatch threads.

mod catalog;
mod clicked;
mod context;
mod registry;
mod syntax;


use quill_ir::{Event, TypeDesc, ValueSeq};

pub use catalog::{compile_pattern, ClickTarget};
pub use clicked::ClickedExpr;
pub use context::CompileContext;
pub use registry::{
    register_clicked, ExpressionCategory, ExpressionMeta, ExpressionRegistry, Registration,
    RegistryError,
};
pub use syntax::{marked_branch, ParseOutcome, CHOICE_DELIMITER, MARK_DELIMITER};

/// The evaluation surface an expression exposes to the host engine.
pub trait Expression {
    /// Extract this expression's values from one live event.
    ///
    /// Pure: borrows the event for the duration of the call and returns
    /// owned copies. An empty sequence means "no value for this event".
    fn evaluate(&self, event: &Event) -> ValueSeq;

    /// The statically-declared result type.
    ///
    /// Computable without an event instance; every value `evaluate` can
    /// ever produce is admitted by this descriptor.
    fn declared_type(&self) -> TypeDesc;

    /// Whether this expression yields at most one value per evaluation.
    fn is_single(&self) -> bool;

    /// Human-readable reconstruction for diagnostics and debugging.
    fn describe(&self) -> String;
}
