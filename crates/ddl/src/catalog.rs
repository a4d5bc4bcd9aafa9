//! Static type catalog
//!
//! Process-wide, immutable lookup tables for the supported type names,
//! their decoration capabilities, and the mapping from the authoring
//! layer's abstract type classes to concrete dialect types. Initialized
//! once as `'static` data, exposed only through read-only accessors.

use serde::Serialize;

// ============================================================================
// TypeDescriptor
// ============================================================================

/// Broad class of a SQL type, driving decoration and default quoting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    Character,
    Bit,
    Numeric,
    Temporal,
    Boolean,
    Binary,
    Json,
    Uuid,
    Network,
    Geometric,
    TextSearch,
    Other,
}

/// One entry of the type table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeDescriptor {
    /// Canonical type name
    pub name: &'static str,

    /// Type class
    pub class: TypeClass,

    /// Supports a bounded length qualifier: `TYPE(length)`
    pub can_have_length: bool,

    /// Supports a precision qualifier: `TYPE(precision)`
    pub can_have_precision: bool,

    /// Supports a scale qualifier: `TYPE(precision,scale)`
    pub can_have_scale: bool,

    /// Supports a fractional-seconds precision and ` WITH TIME ZONE`
    pub can_have_time_precision: bool,
}

const fn descriptor(name: &'static str, class: TypeClass) -> TypeDescriptor {
    TypeDescriptor {
        name,
        class,
        can_have_length: matches!(class, TypeClass::Character | TypeClass::Bit),
        can_have_precision: matches!(class, TypeClass::Numeric),
        can_have_scale: false,
        can_have_time_precision: false,
    }
}

/// The full type table, in presentation order
static TYPE_DESCRIPTORS: &[TypeDescriptor] = &[
    // Character types
    descriptor("char", TypeClass::Character),
    descriptor("varchar", TypeClass::Character),
    TypeDescriptor {
        name: "text",
        class: TypeClass::Character,
        can_have_length: false,
        can_have_precision: false,
        can_have_scale: false,
        can_have_time_precision: false,
    },
    // Bit strings
    descriptor("bit", TypeClass::Bit),
    descriptor("varbit", TypeClass::Bit),
    // Numeric types
    descriptor("smallint", TypeClass::Numeric),
    descriptor("integer", TypeClass::Numeric),
    descriptor("bigint", TypeClass::Numeric),
    TypeDescriptor {
        name: "numeric",
        class: TypeClass::Numeric,
        can_have_length: false,
        can_have_precision: true,
        can_have_scale: true,
        can_have_time_precision: false,
    },
    descriptor("real", TypeClass::Numeric),
    descriptor("double precision", TypeClass::Numeric),
    descriptor("smallserial", TypeClass::Numeric),
    descriptor("serial", TypeClass::Numeric),
    descriptor("bigserial", TypeClass::Numeric),
    descriptor("money", TypeClass::Numeric),
    // Temporal types
    descriptor("date", TypeClass::Temporal),
    TypeDescriptor {
        name: "time",
        class: TypeClass::Temporal,
        can_have_length: false,
        can_have_precision: false,
        can_have_scale: false,
        can_have_time_precision: true,
    },
    TypeDescriptor {
        name: "timestamp",
        class: TypeClass::Temporal,
        can_have_length: false,
        can_have_precision: false,
        can_have_scale: false,
        can_have_time_precision: true,
    },
    descriptor("interval", TypeClass::Temporal),
    // Everything else
    descriptor("boolean", TypeClass::Boolean),
    descriptor("bytea", TypeClass::Binary),
    descriptor("json", TypeClass::Json),
    descriptor("jsonb", TypeClass::Json),
    descriptor("uuid", TypeClass::Uuid),
    descriptor("inet", TypeClass::Network),
    descriptor("cidr", TypeClass::Network),
    descriptor("macaddr", TypeClass::Network),
    descriptor("point", TypeClass::Geometric),
    descriptor("line", TypeClass::Geometric),
    descriptor("polygon", TypeClass::Geometric),
    descriptor("tsvector", TypeClass::TextSearch),
    descriptor("tsquery", TypeClass::TextSearch),
    descriptor("oid", TypeClass::Other),
    descriptor("xml", TypeClass::Other),
];

/// Mapping from the authoring layer's abstract type classes to a
/// concrete dialect type
static DEFAULT_TYPES: &[(&str, &str)] = &[
    ("string", "varchar"),
    ("number", "numeric"),
    ("boolean", "boolean"),
    ("binary", "bytea"),
    ("date", "date"),
    ("time", "time"),
    ("timestamp", "timestamp"),
    ("object", "jsonb"),
    ("array", "jsonb"),
    ("uuid", "uuid"),
];

// ============================================================================
// Accessors
// ============================================================================

/// All type descriptors, for host-side type-selection UI
pub fn types_descriptors() -> &'static [TypeDescriptor] {
    TYPE_DESCRIPTORS
}

/// Look up one descriptor by name
pub fn type_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
    TYPE_DESCRIPTORS.iter().find(|d| d.name == name)
}

/// Membership check against the type table
pub fn has_type(name: &str) -> bool {
    type_descriptor(name).is_some()
}

/// Concrete dialect type for an abstract authoring-layer class, if known
pub fn default_type(abstract_type: &str) -> Option<&'static str> {
    DEFAULT_TYPES
        .iter()
        .find(|(key, _)| *key == abstract_type)
        .map(|(_, value)| *value)
}

// ============================================================================
// Capability predicates
// ============================================================================

/// Character/bit family: supports `TYPE(length)`
pub fn can_have_length(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| d.can_have_length)
}

/// Numeric family: supports `TYPE(precision)`
pub fn can_have_precision(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| d.can_have_precision)
}

/// `numeric` only: supports `TYPE(precision,scale)`
pub fn can_have_scale(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| d.can_have_scale)
}

/// time/timestamp: supports `TYPE(p)` and ` WITH TIME ZONE`
pub fn can_have_time_precision(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| d.can_have_time_precision)
}

/// String-class types whose default literals are quoted
pub fn is_string(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| matches!(d.class, TypeClass::Character | TypeClass::Bit))
}

/// Date/time-class types whose default literals are quoted
pub fn is_date_time(name: &str) -> bool {
    type_descriptor(name).is_some_and(|d| matches!(d.class, TypeClass::Temporal))
}

// ============================================================================
// Tests
// ============================================================================
