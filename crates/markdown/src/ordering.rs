//! Ordering documents: which types are documented, and in what sequence.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::SchemaType;

/// The `{ "types": [...] }` JSON document shared by both CLI operations.
///
/// `list-types` writes one describing the whole catalog; `build-document`
/// reads one back as the ordering. The round trip is the intended workflow:
/// generate the full list, then edit it down to the types to document, in
/// the order they should appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeList {
    pub types: Vec<String>,
}

impl TypeList {
    /// Parses a type list from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::ParseOrdering)
    }

    /// Serializes the list as pretty-printed JSON (2-space indentation).
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::SerializeTypeList)
    }
}

/// Resolves an ordering against a catalog.
///
/// Each slot of the result corresponds to the ordering entry at the same
/// index: the first catalog type whose name matches, or `None` when the
/// entry matches nothing. The result's length and order follow the
/// ordering; the catalog's own order never influences it.
#[must_use]
pub fn resolve_ordering<'a>(
    names: &[String],
    types: &[&'a SchemaType],
) -> Vec<Option<&'a SchemaType>> {
    names
        .iter()
        .map(|name| {
            types
                .iter()
                .copied()
                .find(|type_def| type_def.name() == name.as_str())
        })
        .collect()
}
