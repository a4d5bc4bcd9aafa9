//! Core types used throughout the ddlsmith engine
//!
//! This module contains the fundamental types shared by the schema model
//! and the DDL builders, most importantly the activation state machine
//! that governs whether a schema element is rendered as live SQL or as
//! an inert comment.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for column unique identifiers (as assigned by the
/// authoring layer; used to resolve stored key references)
pub type ColumnId = uuid::Uuid;

/// Type alias for key-reference identifiers
pub type KeyId = uuid::Uuid;

// ============================================================================
// Activation State
// ============================================================================

/// Rendering state of a schema element or multi-column constraint.
///
/// Every element of the input graph carries an activation flag so the
/// authoring layer can soft-disable elements without deleting them.
/// Rendering follows a fixed state machine:
///
/// - [`Active`](ActivationState::Active) — normal SQL text
/// - [`Inactive`](ActivationState::Inactive) — the same text wrapped as
///   a comment (the statement stays syntactically valid)
/// - [`Partial`](ActivationState::Partial) — only meaningful for
///   multi-column constraints: the text is computed from the active-only
///   column subset and rendered normally, since the reduced statement is
///   still structurally valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationState {
    /// All member elements are active
    Active,
    /// All member elements are inactive
    Inactive,
    /// Some member elements are active, some inactive
    Partial,
}

impl ActivationState {
    /// Derive the state from per-element activation flags.
    ///
    /// An empty set is treated as active: there is nothing to suppress,
    /// and the builders render degenerate input as-is.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut any_active = false;
        let mut any_inactive = false;

        for flag in flags {
            if flag {
                any_active = true;
            } else {
                any_inactive = true;
            }
        }

        match (any_active, any_inactive) {
            (_, false) => ActivationState::Active,
            (false, true) => ActivationState::Inactive,
            (true, true) => ActivationState::Partial,
        }
    }

    /// Whether the element should be rendered as live SQL
    ///
    /// Partial constraints render live (with a reduced column set), so
    /// only a fully inactive element is suppressed.
    pub fn renders_live(&self) -> bool {
        !matches!(self, ActivationState::Inactive)
    }
}

// ============================================================================
// Tests
// ============================================================================
