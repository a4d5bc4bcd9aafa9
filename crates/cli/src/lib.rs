//! # ddlsmith CLI
//!
//! Command-line interface for the ddlsmith DDL synthesis engine.
//!
//! ## Commands
//!
//! - `generate` - Render the full DDL script from an exported schema document
//! - `check` - Parse and hydrate a document, reporting what it contains
//! - `types` - List the supported type names and their capabilities
//!

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use ddlsmith_core::{DdlError, DdlResult};
use ddlsmith_ddl::DdlProvider;
use ddlsmith_schema::raw::RawSchemaDocument;
use ddlsmith_schema::{hydrate_database, hydrate_table, hydrate_udt};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Argument parsing
// ============================================================================

/// Schema-to-DDL synthesis for PostgreSQL-style dialects
#[derive(Debug, Parser)]
#[command(name = "ddlsmith", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the full DDL script from an exported schema document
    Generate {
        /// Path to the exported schema document (JSON)
        schema: PathBuf,

        /// Write the script to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and hydrate a schema document without generating DDL
    Check {
        /// Path to the exported schema document (JSON)
        schema: PathBuf,
    },

    /// List the supported type names and their capabilities
    Types,
}

// ============================================================================
// Entry points
// ============================================================================

/// Parse arguments from the environment and run
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run an already-parsed invocation
pub fn run_with(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { schema, output } => generate(&schema, output.as_deref()),
        Commands::Check { schema } => check(&schema),
        Commands::Types => {
            print_types();
            Ok(())
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn load_document(path: &Path) -> DdlResult<RawSchemaDocument> {
    if !path.exists() {
        return Err(DdlError::SchemaNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|error| DdlError::FileRead {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    serde_json::from_str(&text)
        .map_err(|error| DdlError::invalid_schema(format!("{}: {error}", path.display())))
}

/// Render the full DDL script for one schema document.
///
/// Section order matches dependency order: the schema statement group
/// first, then user-defined types, then tables.
pub fn generate_script(document: &RawSchemaDocument) -> String {
    let provider = DdlProvider::new();
    let db = hydrate_database(
        &document.container,
        document.udfs.clone(),
        document.procedures.clone(),
    );

    let mut sections = vec![provider.create_database(&db)];

    for raw in &document.udts {
        sections.push(provider.create_udt(&hydrate_udt(raw, &db.database_name)));
    }

    for entry in &document.tables {
        let table = hydrate_table(&entry.table_data, &entry.entity_data, &entry.json_schema);
        sections.push(provider.create_table(&table, &db, entry.entity_data.is_activated));
    }

    let mut script = sections.join("\n\n");
    script.push('\n');
    script
}

fn generate(schema: &Path, output: Option<&Path>) -> Result<()> {
    let document = load_document(schema)?;
    tracing::info!(
        tables = document.tables.len(),
        udts = document.udts.len(),
        "generating DDL script"
    );
    let script = generate_script(&document);

    match output {
        Some(path) => {
            fs::write(path, &script).map_err(|error| DdlError::FileWrite {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;
            println!("{} wrote {}", "✓".green(), path.display());
        }
        None => print!("{script}"),
    }

    Ok(())
}

fn check(schema: &Path) -> Result<()> {
    let document = load_document(schema)?;

    let schema_name = if document.container.name.is_empty() {
        "(unnamed)".to_string()
    } else {
        document.container.name.clone()
    };

    println!("{} {}", "schema:".bold(), schema_name);
    println!("{} {}", "tables:".bold(), document.tables.len());
    println!("{} {}", "types:".bold(), document.udts.len());
    println!(
        "{} {}",
        "routines:".bold(),
        document.udfs.len() + document.procedures.len()
    );

    for entry in &document.tables {
        let table = hydrate_table(&entry.table_data, &entry.entity_data, &entry.json_schema);
        let marker = if entry.entity_data.is_activated {
            "✓".green()
        } else {
            "−".yellow()
        };
        println!(
            "  {marker} {} ({} columns, {} foreign keys)",
            table.name,
            table.columns.len(),
            table.foreign_key_constraints.len()
        );
    }

    println!("{}", "document is valid".green());
    Ok(())
}

fn print_types() {
    let provider = DdlProvider::new();

    println!("{:<20} {:<8} {:<11} {:<7} {}", "name".bold(), "length", "precision", "scale", "time precision");
    for descriptor in provider.types_descriptors() {
        let flag = |value: bool| if value { "yes" } else { "" };
        println!(
            "{:<20} {:<8} {:<11} {:<7} {}",
            descriptor.name,
            flag(descriptor.can_have_length),
            flag(descriptor.can_have_precision),
            flag(descriptor.can_have_scale),
            flag(descriptor.can_have_time_precision),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_document() -> RawSchemaDocument {
        serde_json::from_str(
            r#"{
                "container": {"name": "shop"},
                "tables": [{
                    "table_data": {
                        "name": "users",
                        "columns": [
                            {"name": "id", "type": "bigint", "nullable": false},
                            {"name": "email", "type": "varchar", "length": 255}
                        ]
                    }
                }],
                "udts": [{"name": "mood", "type": "enum", "enum": ["sad", "happy"]}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_script_section_order() {
        let script = generate_script(&sample_document());
        let schema_at = script.find("CREATE SCHEMA \"shop\";").unwrap();
        let udt_at = script.find("CREATE TYPE \"shop\".\"mood\"").unwrap();
        let table_at = script.find("CREATE TABLE \"shop\".\"users\"").unwrap();

        assert!(schema_at < udt_at);
        assert!(udt_at < table_at);
        assert!(script.ends_with("\n"));
    }

    #[test]
    fn test_generate_script_empty_document() {
        let script = generate_script(&RawSchemaDocument::default());
        assert_eq!(script, "CREATE SCHEMA \"\";\n");
    }

    #[test]
    fn test_load_document_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let error = load_document(file.path()).unwrap_err();
        assert!(error.is_schema());
    }

    #[test]
    fn test_load_document_missing_file() {
        let error = load_document(Path::new("no_such_file.json")).unwrap_err();
        assert!(matches!(error, DdlError::SchemaNotFound(_)));
    }

    #[test]
    fn test_generate_writes_output_file() {
        let mut schema = tempfile::NamedTempFile::new().unwrap();
        write!(schema, r#"{{"container": {{"name": "shop"}}}}"#).unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        generate(schema.path(), Some(output.path())).unwrap();
        let written = fs::read_to_string(output.path()).unwrap();
        assert!(written.contains("CREATE SCHEMA \"shop\";"));
    }
}
