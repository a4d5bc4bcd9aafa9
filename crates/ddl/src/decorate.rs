//! Type and default-value decoration
//!
//! Decides, per column, how to render a base type name with
//! length/precision/scale/timezone qualifiers, and how to render
//! default-value literals based on type class. The rule chain is fixed:
//! the first matching rule wins and there is no fallthrough once
//! matched. Unknown type names fall through every rule and come back
//! unchanged — a documented limitation, not an error.

use ddlsmith_schema::ColumnDefinition;

use crate::catalog;

/// Keyword literals that pass through default quoting unchanged
const CONSTANT_DEFAULTS: &[&str] = &["current_timestamp", "null"];

// ============================================================================
// Type decoration
// ============================================================================

/// Render a base type name with its qualifiers.
///
/// Decision order:
/// 1. character/bit family with a length → `TYPE(length)`
/// 2. `numeric` with a precision → `TYPE(precision[,scale])`
/// 3. other numeric types with a precision → `TYPE(precision)`
/// 4. time/timestamp with a time precision or timezone flag →
///    `TYPE[(p)][ WITH TIME ZONE]`
/// 5. anything else → the base name unchanged
pub fn decorate_type(sql_type: &str, column: &ColumnDefinition) -> String {
    if catalog::can_have_length(sql_type) {
        if let Some(length) = column.length {
            return format!("{sql_type}({length})");
        }
    }

    if catalog::can_have_precision(sql_type) && catalog::can_have_scale(sql_type) {
        if let Some(precision) = column.precision {
            return match column.scale {
                Some(scale) => format!("{sql_type}({precision},{scale})"),
                None => format!("{sql_type}({precision})"),
            };
        }
    }

    if catalog::can_have_precision(sql_type) {
        if let Some(precision) = column.precision {
            return format!("{sql_type}({precision})");
        }
    }

    if catalog::can_have_time_precision(sql_type)
        && (column.time_precision.is_some() || column.with_timezone)
    {
        let with_precision = match column.time_precision {
            Some(precision) => format!("{sql_type}({precision})"),
            None => sql_type.to_string(),
        };
        return if column.with_timezone {
            format!("{with_precision} WITH TIME ZONE")
        } else {
            with_precision
        };
    }

    sql_type.to_string()
}

// ============================================================================
// Default decoration
// ============================================================================

/// Render a default-value literal for the given type.
///
/// String- and date/time-class types are single-quoted with internal
/// quotes doubled, except for the recognized keyword literals
/// (`CURRENT_TIMESTAMP`, `NULL`, matched case-insensitively) which pass
/// through bare. Every other class passes through unmodified.
pub fn decorate_default(sql_type: &str, value: &str) -> String {
    let is_quoted_class = catalog::is_string(sql_type) || catalog::is_date_time(sql_type);
    let is_constant = CONSTANT_DEFAULTS
        .iter()
        .any(|keyword| value.eq_ignore_ascii_case(keyword));

    if is_quoted_class && !is_constant {
        format!("'{}'", value.trim().replace('\'', "''"))
    } else {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> ColumnDefinition {
        ColumnDefinition::new("c", "varchar")
    }

    #[test]
    fn test_decorate_varchar_length() {
        let col = column().with_length(50);
        assert_eq!(decorate_type("varchar", &col), "varchar(50)");
    }

    #[test]
    fn test_decorate_numeric_precision_scale() {
        let col = column().with_precision(10, Some(2));
        assert_eq!(decorate_type("numeric", &col), "numeric(10,2)");

        let col = column().with_precision(10, None);
        assert_eq!(decorate_type("numeric", &col), "numeric(10)");
    }

    #[test]
    fn test_decorate_timestamp_with_timezone() {
        let col = column().with_time_precision(3).with_timezone();
        assert_eq!(
            decorate_type("timestamp", &col),
            "timestamp(3) WITH TIME ZONE"
        );
    }

    #[test]
    fn test_decorate_timezone_without_precision() {
        let col = column().with_timezone();
        assert_eq!(decorate_type("time", &col), "time WITH TIME ZONE");
    }

    #[test]
    fn test_length_wins_over_other_attributes() {
        let mut col = column().with_length(8);
        col.precision = Some(10);
        assert_eq!(decorate_type("bit", &col), "bit(8)");
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let col = column().with_length(10);
        assert_eq!(decorate_type("geography", &col), "geography");
    }

    #[test]
    fn test_plain_type_without_attributes() {
        assert_eq!(decorate_type("integer", &column()), "integer");
    }

    #[test]
    fn test_decorate_default_quotes_strings() {
        assert_eq!(decorate_default("varchar", "hello"), "'hello'");
        assert_eq!(decorate_default("text", "it's"), "'it''s'");
    }

    #[test]
    fn test_decorate_default_keyword_passthrough() {
        assert_eq!(
            decorate_default("timestamp", "CURRENT_TIMESTAMP"),
            "CURRENT_TIMESTAMP"
        );
        assert_eq!(decorate_default("varchar", "NULL"), "NULL");
    }

    #[test]
    fn test_decorate_default_numeric_passthrough() {
        assert_eq!(decorate_default("integer", "42"), "42");
        assert_eq!(decorate_default("boolean", "true"), "true");
    }
}
