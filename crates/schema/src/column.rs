//! Column definitions for tables and composite types
//!
//! This module contains the `ColumnDefinition` struct, the normalized
//! per-column input consumed by the type decorator and the column-line
//! renderer.

use ddlsmith_core::{Activatable, Named};
use serde::{Deserialize, Serialize};

// ============================================================================
// ColumnDefinition
// ============================================================================

/// A fully resolved column (or composite-type attribute).
///
/// At most one of `length`, `precision`+`scale`, or `time_precision` is
/// applied when the type is decorated; the choice is made solely by the
/// type's class (character/bit types use length, numeric types use
/// precision and scale, temporal types use time precision and the
/// timezone flag). The fields are all carried here so hydration stays a
/// pure field mapping and the decorator owns the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Base SQL type name (e.g. `varchar`, `numeric`, `timestamp`)
    #[serde(rename = "type")]
    pub sql_type: String,

    /// Whether the column accepts NULL
    pub nullable: bool,

    /// Whether the column is an inline PRIMARY KEY
    pub primary_key: bool,

    /// Whether the column is inline UNIQUE
    pub unique: bool,

    /// Default-value literal, exactly as authored
    pub default: Option<String>,

    /// Bounded length for character/bit types
    pub length: Option<u32>,

    /// Precision for numeric types
    pub precision: Option<u32>,

    /// Scale for `numeric`
    pub scale: Option<u32>,

    /// Fractional-seconds precision for time/timestamp types
    pub time_precision: Option<u32>,

    /// Whether a temporal type carries ` WITH TIME ZONE`
    pub with_timezone: bool,

    /// Collation rule (character types only)
    pub collation_rule: Option<String>,

    /// Whether the column renders as live SQL or as a comment
    pub is_activated: bool,

    /// Column description, emitted as `COMMENT ON COLUMN`
    pub comment: Option<String>,

    /// Enum labels when the column's type is a user-defined enum
    pub enum_values: Vec<String>,

    /// Range subtype when the column's type is a user-defined range
    pub range_subtype: Option<String>,

    /// Interval field restriction (type `interval` only)
    pub interval_options: Option<String>,
}

impl ColumnDefinition {
    /// Create a new column with the given name and base type
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            primary_key: false,
            unique: false,
            default: None,
            length: None,
            precision: None,
            scale: None,
            time_precision: None,
            with_timezone: false,
            collation_rule: None,
            is_activated: true,
            comment: None,
            enum_values: Vec::new(),
            range_subtype: None,
            interval_options: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the column NOT NULL
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark the column as an inline primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark the column as inline unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set a default-value literal
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the bounded length
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set precision (and optionally scale)
    pub fn with_precision(mut self, precision: u32, scale: Option<u32>) -> Self {
        self.precision = Some(precision);
        self.scale = scale;
        self
    }

    /// Set the fractional-seconds precision
    pub fn with_time_precision(mut self, precision: u32) -> Self {
        self.time_precision = Some(precision);
        self
    }

    /// Render the type with ` WITH TIME ZONE`
    pub fn with_timezone(mut self) -> Self {
        self.with_timezone = true;
        self
    }

    /// Set the collation rule
    pub fn with_collation(mut self, rule: impl Into<String>) -> Self {
        self.collation_rule = Some(rule.into());
        self
    }

    /// Soft-disable the column
    pub fn deactivated(mut self) -> Self {
        self.is_activated = false;
        self
    }

    /// Set the column description
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Activatable for ColumnDefinition {
    fn is_activated(&self) -> bool {
        self.is_activated
    }
}

impl Named for ColumnDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_column_defaults() {
        let col = ColumnDefinition::new("title", "varchar");
        assert!(col.nullable);
        assert!(col.is_activated);
        assert!(!col.primary_key);
        assert_eq!(col.sql_type, "varchar");
    }

    #[test]
    fn test_builder_chain() {
        let col = ColumnDefinition::new("price", "numeric")
            .not_null()
            .with_precision(10, Some(2))
            .with_default("0");

        assert!(!col.nullable);
        assert_eq!(col.precision, Some(10));
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.default.as_deref(), Some("0"));
    }

    #[test]
    fn test_primary_key_implies_not_null() {
        let col = ColumnDefinition::new("id", "bigint").primary_key();
        assert!(col.primary_key);
        assert!(!col.nullable);
    }

    #[test]
    fn test_deactivated() {
        let col = ColumnDefinition::new("legacy", "text").deactivated();
        assert!(!col.is_activated());
    }
}
