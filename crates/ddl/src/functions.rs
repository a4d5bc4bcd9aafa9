//! `CREATE FUNCTION` / `CREATE PROCEDURE` scripts
//!
//! Routine bodies are emitted verbatim inside dollar quoting; the
//! signature, return type, and language come from the spec structs.

use ddlsmith_schema::{FunctionSpec, ProcedureSpec};

use crate::naming::{function_arguments, name_prefixed_with_schema};

fn or_replace_keyword(or_replace: bool) -> &'static str {
    if or_replace { " OR REPLACE" } else { "" }
}

/// Render one `CREATE FUNCTION` statement
pub fn create_function(function: &FunctionSpec, schema_name: &str) -> String {
    format!(
        "CREATE{} FUNCTION {} ({})\n\tRETURNS {}\n\tLANGUAGE {}\nAS $BODY$\n{}\n$BODY$;",
        or_replace_keyword(function.or_replace),
        name_prefixed_with_schema(&function.name, schema_name),
        function_arguments(&function.arguments),
        function.return_type,
        function.language,
        function.body,
    )
}

/// Render one `CREATE PROCEDURE` statement
pub fn create_procedure(procedure: &ProcedureSpec, schema_name: &str) -> String {
    format!(
        "CREATE{} PROCEDURE {} ({})\n\tLANGUAGE {}\nAS $BODY$\n{}\n$BODY$;",
        or_replace_keyword(procedure.or_replace),
        name_prefixed_with_schema(&procedure.name, schema_name),
        function_arguments(&procedure.arguments),
        procedure.language,
        procedure.body,
    )
}

/// All function statements of a schema, blank-line separated; empty
/// input renders an empty string
pub fn functions_script(functions: &[FunctionSpec], schema_name: &str) -> String {
    functions
        .iter()
        .map(|function| create_function(function, schema_name))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// All procedure statements of a schema, blank-line separated
pub fn procedures_script(procedures: &[ProcedureSpec], schema_name: &str) -> String {
    procedures
        .iter()
        .map(|procedure| create_procedure(procedure, schema_name))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// Tests
// ============================================================================
