//! The clicked-target expression.
//!
//! `the clicked (block|<shape>|slot|inventory|action|inventory action)` -
//! what the player clicked in the event the surrounding trigger listens
//! to. Which alternative parsed, whether it is legal in that trigger, and
//! what a live event yields are resolved in that order: the first two at
//! parse time, the third per evaluation.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Event, EventKindSet, ShapeLiteral, TypeDesc, Value, ValueSeq};
use smallvec::smallvec;

use crate::catalog::ClickTarget;
use crate::context::CompileContext;
use crate::syntax::ParseOutcome;
use crate::Expression;

/// The resolved clicked-target expression.
///
/// Constructed once by [`ClickedExpr::resolve`] and immutable thereafter;
/// evaluation takes `&self` and may run concurrently for different events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickedExpr {
    target: ClickTarget,
    shape: Option<ShapeLiteral>,
    raw_slot: bool,
}

impl ClickedExpr {
    /// Validate a parse outcome against the compile-time event context.
    ///
    /// This is the only constructor: an illegal alternative never becomes
    /// an expression. The returned diagnostic aborts this expression's
    /// construction and nothing else.
    pub fn resolve(outcome: &ParseOutcome, ctx: &CompileContext) -> Result<Self, Diagnostic> {
        let target = ClickTarget::from_tag(outcome.mark);
        match target {
            ClickTarget::BlockOrEntity => match outcome.literal {
                Some(ShapeLiteral::Entity(shape)) => {
                    if !ctx.is_current_any(EventKindSet::ENTITY_INTERACTION) {
                        return Err(Diagnostic::error(ErrorCode::E2201)
                            .with_message(format!(
                                "the expression 'clicked {shape}' may only be used in an entity click event"
                            ))
                            .with_label(outcome.span, "not an entity click event"));
                    }
                    Ok(ClickedExpr {
                        target,
                        shape: Some(ShapeLiteral::Entity(shape)),
                        raw_slot: false,
                    })
                }
                shape => {
                    // None or an item shape: this is the block form.
                    if !ctx.is_current_any(EventKindSet::INTERACT_BLOCK) {
                        return Err(Diagnostic::error(ErrorCode::E2202)
                            .with_message(
                                "the expression 'clicked block' may only be used in a block click event",
                            )
                            .with_label(outcome.span, "not a block click event"));
                    }
                    Ok(ClickedExpr {
                        target,
                        shape,
                        raw_slot: false,
                    })
                }
            },
            ClickTarget::Slot
            | ClickTarget::Inventory
            | ClickTarget::Click
            | ClickTarget::Action => {
                if outcome.literal.is_some() {
                    // Only the block-or-entity branch captures a literal;
                    // anything else means the matcher and catalog disagree.
                    return Err(Diagnostic::error(ErrorCode::E9001)
                        .with_message(format!(
                            "shape literal captured for the '{}' alternative",
                            target.display_name()
                        ))
                        .with_label(outcome.span, "unexpected shape literal")
                        .with_note("the compiled pattern and the syntax catalog may be out of sync"));
                }
                if !ctx.is_current_any(EventKindSet::INVENTORY_CLICK) {
                    return Err(Diagnostic::error(ErrorCode::E2203)
                        .with_message(format!(
                            "the expression '{}' may only be used in an inventory click event",
                            target.display_name()
                        ))
                        .with_label(outcome.span, "not an inventory click event"));
                }
                Ok(ClickedExpr {
                    target,
                    shape: None,
                    raw_slot: target == ClickTarget::Slot && outcome.has_modifier("raw"),
                })
            }
        }
    }

    /// The alternative this expression resolved to.
    pub fn target(&self) -> ClickTarget {
        self.target
    }

    /// Whether the raw slot index was requested.
    pub fn is_raw_slot(&self) -> bool {
        self.raw_slot
    }

    /// Extract this expression's value from one live event.
    ///
    /// Events of a variant the validator excluded produce the empty
    /// sequence rather than failing; the host event model may grow kinds
    /// this expression never asked about.
    pub fn evaluate(&self, event: &Event) -> ValueSeq {
        match self.target {
            ClickTarget::BlockOrEntity => self.evaluate_block_or_entity(event),
            ClickTarget::Slot => match event {
                Event::InventoryClick { slot, raw_slot, .. } => {
                    let index = if self.raw_slot { *raw_slot } else { *slot };
                    smallvec![Value::Int(i64::from(index))]
                }
                _ => ValueSeq::new(),
            },
            ClickTarget::Inventory => match event {
                Event::InventoryClick { inventory, .. } => {
                    smallvec![Value::Inventory(*inventory)]
                }
                _ => ValueSeq::new(),
            },
            ClickTarget::Click => match event {
                Event::InventoryClick { click, .. } => smallvec![Value::Click(*click)],
                _ => ValueSeq::new(),
            },
            ClickTarget::Action => match event {
                Event::InventoryClick { action, .. } => smallvec![Value::Action(*action)],
                _ => ValueSeq::new(),
            },
        }
    }

    fn evaluate_block_or_entity(&self, event: &Event) -> ValueSeq {
        match event {
            Event::InteractBlock { block } => {
                if matches!(self.shape, Some(ShapeLiteral::Entity(_))) {
                    // Entity form on a block event: the validator bars
                    // this pairing, so an arriving one is host drift.
                    return ValueSeq::new();
                }
                let Some(block) = block else {
                    // Air clicks carry no block; no value, not an error.
                    return ValueSeq::new();
                };
                match self.shape {
                    Some(ShapeLiteral::Item(item)) if !item.is_of_kind(block) => ValueSeq::new(),
                    _ => smallvec![Value::Block(*block)],
                }
            }
            Event::InteractEntity { target } | Event::InteractEntityAt { target } => {
                let Some(ShapeLiteral::Entity(shape)) = self.shape else {
                    return ValueSeq::new();
                };
                if shape.is_instance(target) {
                    // The singleton's runtime type is the shape's concrete
                    // kind, matching `declared_type` exactly.
                    smallvec![Value::Entity(*target)]
                } else {
                    ValueSeq::new()
                }
            }
            _ => ValueSeq::new(),
        }
    }

    /// The statically-declared result type of this configuration.
    ///
    /// Consistent with every value [`ClickedExpr::evaluate`] can produce:
    /// an entity shape narrows the declared type to its concrete kind.
    pub fn declared_type(&self) -> TypeDesc {
        match (self.target, self.shape) {
            (ClickTarget::BlockOrEntity, Some(ShapeLiteral::Entity(shape))) => {
                shape.concrete_type()
            }
            (ClickTarget::BlockOrEntity, _) => TypeDesc::Block,
            (target, _) => target.result_type(),
        }
    }

    /// Human-readable reconstruction of the parsed expression.
    pub fn describe(&self) -> String {
        match self.target {
            ClickTarget::BlockOrEntity => match self.shape {
                Some(shape) => format!("the clicked {shape}"),
                None => String::from("the clicked block"),
            },
            target => format!("the {}", target.display_name()),
        }
    }
}

impl Expression for ClickedExpr {
    fn evaluate(&self, event: &Event) -> ValueSeq {
        ClickedExpr::evaluate(self, event)
    }

    fn declared_type(&self) -> TypeDesc {
        ClickedExpr::declared_type(self)
    }

    fn is_single(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        ClickedExpr::describe(self)
    }
}
