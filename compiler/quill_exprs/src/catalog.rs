//! The clicked-target alternative catalog and pattern compiler.

use quill_ir::TypeDesc;

use crate::syntax::marked_branch;

/// The closed set of syntax alternatives of the clicked-target expression.
///
/// Order in [`ClickTarget::ALL`] is alternation precedence: when patterns
/// could ambiguously overlap, the first listed branch wins.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClickTarget {
    /// `clicked block`, `clicked <item shape>`, `clicked <entity shape>`.
    BlockOrEntity,
    /// `clicked [raw] slot`.
    Slot,
    /// `clicked inventory`.
    Inventory,
    /// `clicked action` (the click kind).
    Click,
    /// `clicked inventory action`.
    Action,
}

impl ClickTarget {
    /// All alternatives, in precedence order.
    pub const ALL: [ClickTarget; 5] = [
        ClickTarget::BlockOrEntity,
        ClickTarget::Slot,
        ClickTarget::Inventory,
        ClickTarget::Click,
        ClickTarget::Action,
    ];

    /// The designated default alternative for unknown parse marks.
    pub const DEFAULT: ClickTarget = ClickTarget::BlockOrEntity;

    /// Stable numeric tag embedded in the compiled pattern.
    pub const fn tag(self) -> u32 {
        match self {
            ClickTarget::BlockOrEntity => 1,
            ClickTarget::Slot => 2,
            ClickTarget::Inventory => 3,
            ClickTarget::Click => 4,
            ClickTarget::Action => 5,
        }
    }

    /// The fixed result type of this alternative.
    ///
    /// For `BlockOrEntity` this is the *default* result type; a configured
    /// entity shape narrows it further (see `ClickedExpr::declared_type`).
    pub const fn result_type(self) -> TypeDesc {
        match self {
            ClickTarget::BlockOrEntity => TypeDesc::Block,
            ClickTarget::Slot => TypeDesc::Int,
            ClickTarget::Inventory => TypeDesc::Inventory,
            ClickTarget::Click => TypeDesc::Click,
            ClickTarget::Action => TypeDesc::Action,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            ClickTarget::BlockOrEntity => "clicked block/item/entity",
            ClickTarget::Slot => "clicked slot",
            ClickTarget::Inventory => "clicked inventory",
            ClickTarget::Click => "clicked action",
            ClickTarget::Action => "clicked inventory action",
        }
    }

    /// The pattern fragment for this alternative.
    pub const fn syntax_fragment(self) -> &'static str {
        match self {
            ClickTarget::BlockOrEntity => "(block|%-*itemshape/entityshape%)",
            ClickTarget::Slot => "[raw] slot",
            ClickTarget::Inventory => "inventory",
            ClickTarget::Click => "action",
            ClickTarget::Action => "inventory( |-)action",
        }
    }

    /// Look up an alternative by its parse mark.
    ///
    /// Unknown tags fall back to [`ClickTarget::DEFAULT`] rather than
    /// failing. A fallback normally means the compiled pattern and the
    /// catalog have drifted apart, so it is logged loudly.
    pub fn from_tag(tag: u32) -> ClickTarget {
        for target in ClickTarget::ALL {
            if target.tag() == tag {
                return target;
            }
        }
        tracing::warn!(
            tag,
            "unknown clicked-target parse mark, falling back to default alternative"
        );
        ClickTarget::DEFAULT
    }
}

/// Compile the full clicked-target pattern for the host matcher.
///
/// Each alternative contributes one mark-tagged branch; branch order is
/// the catalog's precedence order.
pub fn compile_pattern() -> String {
    let mut pattern = String::from("[the] clicked (");
    let last = ClickTarget::ALL.len() - 1;
    for (index, target) in ClickTarget::ALL.iter().enumerate() {
        pattern.push_str(&marked_branch(
            target.tag(),
            target.syntax_fragment(),
            index == last,
        ));
    }
    pattern.push(')');
    pattern
}
