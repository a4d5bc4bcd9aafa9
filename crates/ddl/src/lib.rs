//! # ddlsmith DDL Builders
//!
//! DDL synthesis engine: turns the normalized schema model into
//! PostgreSQL-style Data Definition Language text.
//!
//! ## Features
//!
//! - **Type Decoration**: length/precision/scale/timezone qualifiers and
//!   default-literal quoting per type class
//! - **Constraint Building**: PRIMARY KEY, UNIQUE, CHECK, and foreign-key
//!   fragments with the activation model (active, inactive, partial)
//! - **Table Options**: inheritance, partitioning, storage parameters,
//!   tablespace, `USING`, `ON COMMIT`, `AS SELECT`
//! - **Statement Assembly**: `CREATE SCHEMA` / `CREATE TABLE` /
//!   `CREATE TYPE` / routine scripts, composed via typed builders
//! - **Type Catalog**: static, read-only descriptors for the supported
//!   type names and their decoration capabilities
//!
//! Every operation is a synchronous, side-effect-free transformation
//! from an input object graph to an output string. The engine never
//! fails: malformed input degrades to best-effort text.

// ============================================================================
// Modules
// ============================================================================

pub mod activation;
pub mod catalog;
pub mod constraints;
pub mod decorate;
pub mod functions;
pub mod naming;
pub mod provider;
pub mod statement;
pub mod table;
pub mod udt;

// ============================================================================
// Re-exports
// ============================================================================

pub use activation::{DividedConstraints, comment_if_deactivated};
pub use catalog::{TypeClass, TypeDescriptor, default_type, has_type, types_descriptors};
pub use constraints::ConstraintStatement;
pub use decorate::{decorate_default, decorate_type};
pub use provider::DdlProvider;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
