//! # ddlsmith Schema Model
//!
//! This crate provides the normalized schema model for the ddlsmith DDL
//! synthesis engine, together with the raw input shapes produced by the
//! external authoring layer and the hydration functions that map between
//! the two.
//!
//! ## Core Concepts
//!
//! - **ColumnDefinition**: A fully resolved column with type decoration
//!   attributes (length, precision, scale, time precision, timezone)
//! - **KeyConstraint**: A compound PRIMARY KEY or UNIQUE constraint with
//!   per-column activation
//! - **ForeignKeyDescriptor**: A foreign-key relation whose activation is
//!   recomputed on every render
//! - **TableSpec / DatabaseSpec / UserDefinedType**: The statement-level
//!   inputs consumed by the DDL builders
//! - **Hydration**: The mapping step from the loosely-shaped authoring
//!   document (`raw` module) into this normalized model
//!

// Module declarations
pub mod column;
pub mod constraint;
pub mod database;
pub mod hydrate;
pub mod keys;
pub mod raw;
pub mod table;
pub mod udt;

// Re-export commonly used types at crate root
pub use column::ColumnDefinition;
pub use constraint::{
    CheckConstraint, ForeignKeyDescriptor, KeyColumn, KeyConstraint, KeyConstraintKind,
};
pub use database::{DatabaseSpec, FunctionArgument, FunctionSpec, ProcedureSpec};
pub use hydrate::{
    hydrate_check_constraint, hydrate_column, hydrate_database, hydrate_foreign_key,
    hydrate_table, hydrate_udt,
};
pub use raw::{RawSchemaDocument, RawTableEntry};
pub use table::{Partitioning, StorageParameter, TableOptions, TableSpec};
pub use udt::{UdtKind, UserDefinedType};

// Re-export core types that are commonly used with the model
pub use ddlsmith_core::{Activatable, ActivationState, DdlError, DdlResult, Named};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
