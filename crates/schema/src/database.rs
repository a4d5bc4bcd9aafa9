//! Database (schema) specifications, functions, and procedures
//!
//! `DatabaseSpec` is the input for `CREATE SCHEMA`; it also carries the
//! user-defined functions and procedures whose scripts are appended to
//! the schema statement.

use serde::{Deserialize, Serialize};

// ============================================================================
// FunctionArgument
// ============================================================================

/// One argument of a function or procedure signature.
///
/// Rendered as `mode name type DEFAULT expression`, with absent parts
/// omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionArgument {
    /// Argument mode: `IN`, `OUT`, `INOUT`, `VARIADIC`
    #[serde(default)]
    pub mode: Option<String>,

    /// Argument name
    #[serde(default)]
    pub name: Option<String>,

    /// Argument type
    #[serde(rename = "type")]
    pub arg_type: String,

    /// Default expression
    #[serde(default)]
    pub default_expression: Option<String>,
}

impl FunctionArgument {
    /// Create a positional argument of the given type
    pub fn new(arg_type: impl Into<String>) -> Self {
        Self {
            mode: None,
            name: None,
            arg_type: arg_type.into(),
            default_expression: None,
        }
    }

    /// Create a named argument
    pub fn named(name: impl Into<String>, arg_type: impl Into<String>) -> Self {
        Self {
            mode: None,
            name: Some(name.into()),
            arg_type: arg_type.into(),
            default_expression: None,
        }
    }
}

// ============================================================================
// FunctionSpec / ProcedureSpec
// ============================================================================

/// A user-defined function attached to the schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name
    pub name: String,

    /// Emit `CREATE OR REPLACE`
    #[serde(default)]
    pub or_replace: bool,

    /// Signature arguments
    #[serde(default)]
    pub arguments: Vec<FunctionArgument>,

    /// Return type
    pub return_type: String,

    /// Implementation language (e.g. `plpgsql`, `sql`)
    pub language: String,

    /// Function body, emitted inside dollar quoting
    pub body: String,
}

/// A user-defined procedure attached to the schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureSpec {
    /// Procedure name
    pub name: String,

    /// Emit `CREATE OR REPLACE`
    #[serde(default)]
    pub or_replace: bool,

    /// Signature arguments
    #[serde(default)]
    pub arguments: Vec<FunctionArgument>,

    /// Implementation language
    pub language: String,

    /// Procedure body, emitted inside dollar quoting
    pub body: String,
}

// ============================================================================
// DatabaseSpec
// ============================================================================

/// The input for one `CREATE SCHEMA` statement group.
///
/// `database_name` doubles as the default schema used to qualify table,
/// type, and routine names that have no schema of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSpec {
    /// Schema name
    pub database_name: String,

    /// Emit `IF NOT EXISTS`
    pub if_not_exist: bool,

    /// Schema description, emitted as `COMMENT ON SCHEMA`
    pub comments: Option<String>,

    /// User-defined functions
    pub udfs: Vec<FunctionSpec>,

    /// User-defined procedures
    pub procedures: Vec<ProcedureSpec>,
}

impl DatabaseSpec {
    /// Create a database spec with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            database_name: name.into(),
            if_not_exist: false,
            comments: None,
            udfs: Vec::new(),
            procedures: Vec::new(),
        }
    }

    /// Emit `IF NOT EXISTS`
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }

    /// Set the schema description
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_spec_builder() {
        let db = DatabaseSpec::new("shop")
            .if_not_exist()
            .with_comments("Web shop schema");

        assert_eq!(db.database_name, "shop");
        assert!(db.if_not_exist);
        assert_eq!(db.comments.as_deref(), Some("Web shop schema"));
    }

    #[test]
    fn test_function_argument_deserializes_sparse_json() {
        let arg: FunctionArgument = serde_json::from_str(r#"{"type": "integer"}"#).unwrap();
        assert_eq!(arg.arg_type, "integer");
        assert!(arg.mode.is_none());
        assert!(arg.name.is_none());
    }
}
