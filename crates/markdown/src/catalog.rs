//! Catalog extraction: the user-visible subset of a schema's types.

use crate::types::{IntrospectionResponse, SchemaType};

/// Name prefix reserved for introspection-internal types (`__Schema`,
/// `__Type`, ...).
pub const INTROSPECTION_PREFIX: &str = "__";

/// Returns the schema's documentable types in declaration order.
///
/// Filtering is purely by name: introspection-internal types are dropped,
/// and every other type passes through regardless of kind.
#[must_use]
pub fn extract_types(response: &IntrospectionResponse) -> Vec<&SchemaType> {
    response
        .data
        .schema
        .types
        .iter()
        .filter(|type_def| !type_def.name().starts_with(INTROSPECTION_PREFIX))
        .collect()
}

/// Projects a catalog onto its type names, preserving order.
#[must_use]
pub fn type_names<'a>(types: &[&'a SchemaType]) -> Vec<&'a str> {
    types.iter().map(|type_def| type_def.name()).collect()
}
