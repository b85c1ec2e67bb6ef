//! Expression registry.
//!
//! The host engine bootstraps by registering every expression it knows:
//! an id, the declared result supertype, a parse-precedence category, the
//! compiled pattern string handed to the matcher, and the documentation
//! metadata the script reference is generated from.

use quill_ir::TypeDesc;
use rustc_hash::FxHashMap;

use crate::catalog::compile_pattern;

/// Parse-precedence category of an expression.
///
/// The matcher tries categories in order, so a `Simple` expression wins
/// over a `Combined` one when both could match the same text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExpressionCategory {
    /// A fixed phrase with no leading sub-expression.
    Simple,
    /// A property of another expression (`x of %...%`).
    Property,
    /// Combines arbitrary sub-expressions.
    Combined,
}

/// Documentation metadata carried with a registration.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ExpressionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub since: &'static str,
    /// Names of the event docs this expression is listed under.
    pub events: &'static [&'static str],
}

/// One registered expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub id: &'static str,
    /// Supertype of everything the expression can declare post-parse.
    pub result_supertype: TypeDesc,
    pub category: ExpressionCategory,
    /// Compiled pattern string handed to the matcher.
    pub pattern: String,
    pub meta: ExpressionMeta,
}

/// Error raised when a registration cannot be accepted.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("expression `{0}` is already registered")]
    DuplicateId(&'static str),
}

/// Registry of every expression the host engine knows.
#[derive(Default)]
pub struct ExpressionRegistry {
    entries: FxHashMap<&'static str, Registration>,
}

impl ExpressionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an expression, rejecting duplicate ids.
    pub fn register(&mut self, registration: Registration) -> Result<(), RegistryError> {
        if self.entries.contains_key(registration.id) {
            return Err(RegistryError::DuplicateId(registration.id));
        }
        tracing::debug!(
            id = registration.id,
            pattern = %registration.pattern,
            "registered expression"
        );
        self.entries.insert(registration.id, registration);
        Ok(())
    }

    /// Look up a registration by id.
    pub fn get(&self, id: &str) -> Option<&Registration> {
        self.entries.get(id)
    }

    /// Iterate over all registrations, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.values()
    }

    /// Number of registered expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Register the clicked-target expression.
pub fn register_clicked(registry: &mut ExpressionRegistry) -> Result<(), RegistryError> {
    registry.register(Registration {
        id: "clicked",
        result_supertype: TypeDesc::Any,
        category: ExpressionCategory::Simple,
        pattern: compile_pattern(),
        meta: ExpressionMeta {
            name: "Clicked Block/Entity",
            description: "The clicked block, entity, slot, inventory, click kind or \
                          inventory action - only useful in click events",
            examples: &[
                "message \"You clicked on a %type of clicked entity%!\"",
                "clicked block is a chest:",
                "\tshow the inventory of the clicked block to the player",
            ],
            since: "0.1.0",
            events: &["click"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_clicked() {
        let mut registry = ExpressionRegistry::new();
        match register_clicked(&mut registry) {
            Ok(()) => {}
            Err(err) => panic!("registration failed: {err}"),
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().count(), 1);

        let registration = match registry.get("clicked") {
            Some(registration) => registration,
            None => panic!("clicked expression not registered"),
        };
        assert_eq!(registration.result_supertype, TypeDesc::Any);
        assert_eq!(registration.category, ExpressionCategory::Simple);
        assert_eq!(registration.pattern, compile_pattern());
        assert_eq!(registration.meta.events, &["click"][..]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = ExpressionRegistry::new();
        assert_eq!(register_clicked(&mut registry), Ok(()));
        assert_eq!(
            register_clicked(&mut registry),
            Err(RegistryError::DuplicateId("clicked"))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExpressionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get("clicked"), None);
    }
}
