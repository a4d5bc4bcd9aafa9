//! Table-level modifiers: temporary/unlogged prefix and trailing options
//!
//! Renders the clauses that surround the parenthesized element list of a
//! `CREATE TABLE` statement. Option order is fixed: INHERITS, PARTITION
//! BY, USING, ON COMMIT, WITH, TABLESPACE, AS. Each clause is omitted
//! entirely when its input is empty, so no dangling keywords appear.

use ddlsmith_schema::TableOptions;

use crate::naming::wrap_in_quotes;

// ============================================================================
// Temporary / unlogged prefix
// ============================================================================

/// The persistence keyword between `CREATE` and `TABLE`.
///
/// `TEMPORARY` wins over `UNLOGGED` when both are set; the two are
/// mutually exclusive in the dialect.
pub fn table_temporary_value(temporary: bool, unlogged: bool) -> &'static str {
    if temporary {
        " TEMPORARY"
    } else if unlogged {
        " UNLOGGED"
    } else {
        ""
    }
}

// ============================================================================
// Trailing options
// ============================================================================

/// Render the trailing option clauses, each on its own line.
///
/// Returns an empty string when no option is set.
pub fn table_options(options: &TableOptions) -> String {
    if options.is_empty() {
        return String::new();
    }

    let mut out = String::new();

    if let Some(parent) = &options.inherits {
        out.push_str(&format!("\nINHERITS ({})", wrap_in_quotes(parent)));
    }

    if let Some(partitioning) = &options.partitioning {
        let key: Vec<String> = partitioning
            .composite_partition_key
            .iter()
            .map(|column| wrap_in_quotes(column))
            .collect();
        out.push_str(&format!(
            "\nPARTITION BY {} ({})",
            partitioning.method,
            key.join(", ")
        ));
    }

    if let Some(method) = &options.using_method {
        out.push_str(&format!("\nUSING {method}"));
    }

    if let Some(on_commit) = &options.on_commit {
        out.push_str(&format!("\nON COMMIT {on_commit}"));
    }

    if !options.storage_parameters.is_empty() {
        let parameters: Vec<String> = options
            .storage_parameters
            .iter()
            .map(|parameter| format!("{}={}", parameter.name, parameter.value))
            .collect();
        out.push_str(&format!("\nWITH (\n\t{}\n)", parameters.join(",\n\t")));
    }

    if let Some(tablespace) = &options.tablespace {
        out.push_str(&format!("\nTABLESPACE {tablespace}"));
    }

    if let Some(select) = &options.select_statement {
        out.push_str(&format!("\nAS {select}"));
    }

    out
}

// ============================================================================
// Tests
// ============================================================================
