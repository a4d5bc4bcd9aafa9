//! # ddlsmith Core
//!
//! Core types, traits, and error handling for the ddlsmith DDL synthesis
//! engine.
//!
//! This crate provides the foundational building blocks used throughout
//! the ddlsmith ecosystem, including:
//!
//! - **Types**: Activation state, identifier aliases
//! - **Traits**: Common behaviors like `Activatable` and `Named`
//! - **Errors**: Unified error handling with `DdlError` and `DdlResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DdlError, DdlResult};
pub use traits::{Activatable, Named, aggregate_activation};
pub use types::{ActivationState, ColumnId, KeyId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
