//! Core traits for the ddlsmith engine
//!
//! This module defines the small capability traits shared across the
//! schema model and the DDL builders, so activation handling can be
//! written once and applied uniformly.

use crate::types::ActivationState;

// ============================================================================
// Activatable Trait
// ============================================================================

/// Trait for schema elements that carry an activation flag
///
/// Types implementing this trait can be soft-disabled by the authoring
/// layer. The DDL builders use this seam to decide whether an element
/// renders as live SQL or as a comment, without re-deriving the logic
/// per builder.
///
/// # Example
///
/// ```rust,ignore
/// use ddlsmith_core::Activatable;
///
/// struct KeyColumn {
///     name: String,
///     is_activated: bool,
/// }
///
/// impl Activatable for KeyColumn {
///     fn is_activated(&self) -> bool {
///         self.is_activated
///     }
/// }
/// ```
pub trait Activatable {
    /// Whether the element is active (included as live SQL)
    fn is_activated(&self) -> bool;
}

/// Derive the aggregate activation state for a collection of elements
///
/// An empty collection is treated as active; the builders render
/// degenerate input as-is rather than suppressing it.
pub fn aggregate_activation<'a, T, I>(items: I) -> ActivationState
where
    T: Activatable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ActivationState::from_flags(items.into_iter().map(Activatable::is_activated))
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for schema elements that have a name
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;

    /// Check if the name matches (case-insensitive)
    fn name_matches(&self, other: &str) -> bool {
        self.name().eq_ignore_ascii_case(other)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestElement {
        active: bool,
    }

    impl Activatable for TestElement {
        fn is_activated(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn test_aggregate_activation() {
        let all_active = [TestElement { active: true }, TestElement { active: true }];
        assert_eq!(aggregate_activation(&all_active), ActivationState::Active);

        let mixed = [TestElement { active: true }, TestElement { active: false }];
        assert_eq!(aggregate_activation(&mixed), ActivationState::Partial);

        let none: [TestElement; 0] = [];
        assert_eq!(aggregate_activation(&none), ActivationState::Active);
    }

    struct TestNamed;

    impl Named for TestNamed {
        fn name(&self) -> &str {
            "Orders"
        }
    }

    #[test]
    fn test_name_matches() {
        assert!(TestNamed.name_matches("orders"));
        assert!(!TestNamed.name_matches("users"));
    }
}
