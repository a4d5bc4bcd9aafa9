//! Activation rendering: the "comment out if inactive" decorator
//!
//! A single reusable decorator applied uniformly across column, key,
//! foreign-key, and check rendering, so no builder re-derives the
//! activation logic. Deactivated whole-line fragments get a `-- ` prefix
//! per line (safe inside a comma-joined list: the line comment swallows
//! its own trailing comma); deactivated in-line fragments are wrapped in
//! `/* … */`.

use ddlsmith_core::Activatable;

// ============================================================================
// comment_if_deactivated
// ============================================================================

/// Return the fragment unchanged when active, or a syntactically safe
/// commented form when not.
///
/// `part_of_line` selects the block form `/* … */` for fragments that
/// sit inside a larger line or list; otherwise every line of the
/// fragment is prefixed with `-- `.
pub fn comment_if_deactivated(statement: &str, is_activated: bool, part_of_line: bool) -> String {
    if is_activated {
        return statement.to_string();
    }

    if part_of_line {
        format!("/* {statement} */")
    } else {
        statement
            .lines()
            .map(|line| format!("-- {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// Key-set helpers
// ============================================================================

/// Whether a non-empty key set is fully deactivated.
///
/// An empty set reports `false`: there is nothing to suppress, and the
/// builders render degenerate input as-is.
pub fn check_all_keys_deactivated<T: Activatable>(keys: &[T]) -> bool {
    !keys.is_empty() && keys.iter().all(|key| !key.is_activated())
}

/// Rendered constraints split into the active and inactive groups,
/// input order preserved within each
#[derive(Debug, Clone, Default)]
pub struct DividedConstraints {
    /// Constraints emitted as live SQL
    pub activated: Vec<String>,

    /// Constraints consolidated into a comment block
    pub deactivated: Vec<String>,
}

/// Split items into activated and deactivated statement groups
pub fn divide_into_activated_and_deactivated<T, F>(items: &[T], to_statement: F) -> DividedConstraints
where
    T: Activatable,
    F: Fn(&T) -> String,
{
    let mut divided = DividedConstraints::default();

    for item in items {
        let statement = to_statement(item);
        if item.is_activated() {
            divided.activated.push(statement);
        } else {
            divided.deactivated.push(statement);
        }
    }

    divided
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl Activatable for Flag {
        fn is_activated(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_fragment_is_unchanged() {
        assert_eq!(comment_if_deactivated("\"id\" bigint", true, false), "\"id\" bigint");
        assert_eq!(comment_if_deactivated("\"id\" bigint", true, true), "\"id\" bigint");
    }

    #[test]
    fn test_inactive_whole_line() {
        assert_eq!(
            comment_if_deactivated("\"legacy\" text,", false, false),
            "-- \"legacy\" text,"
        );
    }

    #[test]
    fn test_inactive_multiline() {
        assert_eq!(
            comment_if_deactivated("line one\nline two", false, false),
            "-- line one\n-- line two"
        );
    }

    #[test]
    fn test_inactive_part_of_line() {
        assert_eq!(
            comment_if_deactivated("PRIMARY KEY (\"id\")", false, true),
            "/* PRIMARY KEY (\"id\") */"
        );
    }

    #[test]
    fn test_check_all_keys_deactivated() {
        assert!(check_all_keys_deactivated(&[Flag(false), Flag(false)]));
        assert!(!check_all_keys_deactivated(&[Flag(false), Flag(true)]));
        // Empty input is not "all deactivated"
        assert!(!check_all_keys_deactivated::<Flag>(&[]));
    }

    #[test]
    fn test_divide_preserves_order_within_groups() {
        let items = [Flag(true), Flag(false), Flag(true), Flag(false)];
        let divided = divide_into_activated_and_deactivated(&items, |item| {
            format!("{}", item.is_activated())
        });

        assert_eq!(divided.activated, vec!["true", "true"]);
        assert_eq!(divided.deactivated, vec!["false", "false"]);
    }
}
