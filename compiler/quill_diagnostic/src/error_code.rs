use std::fmt;

/// Error codes for all engine diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E2xxx: Semantic/context errors (parse-time validation)
/// - E9xxx: Internal consistency errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Semantic/Context Errors (E2xxx)
    /// Entity-narrowed expression used outside an entity-interaction event
    E2201,
    /// Block expression used outside a block-interaction event
    E2202,
    /// Inventory expression used outside an inventory-click event
    E2203,

    // Internal Consistency Errors (E9xxx)
    /// Parse outcome inconsistent with the syntax catalog
    E9001,
}

impl ErrorCode {
    /// The code as it appears in rendered diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E2201 => "E2201",
            ErrorCode::E2202 => "E2202",
            ErrorCode::E2203 => "E2203",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of what this code means.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E2201 => {
                "entity-narrowed expression used outside an entity-interaction event"
            }
            ErrorCode::E2202 => "block expression used outside a block-interaction event",
            ErrorCode::E2203 => "inventory expression used outside an inventory-click event",
            ErrorCode::E9001 => "parse outcome inconsistent with the syntax catalog",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
