//! Shared load/write helpers for CLI commands.

use anyhow::{Context, Result};
use graphql_markdown::{parse_introspection, IntrospectionResponse, TypeList};
use std::path::Path;

/// Reads and parses an introspection response from a JSON file.
pub async fn load_introspection(path: &Path) -> Result<IntrospectionResponse> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read schema from {}", path.display()))?;
    parse_introspection(&raw)
        .with_context(|| format!("Failed to parse schema from {}", path.display()))
}

/// Reads and parses an ordering file.
pub async fn load_ordering(path: &Path) -> Result<TypeList> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read ordering from {}", path.display()))?;
    TypeList::from_json(&raw)
        .with_context(|| format!("Failed to parse ordering from {}", path.display()))
}

/// Writes command output, creating or truncating the target file.
pub async fn write_output(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write to {}", path.display()))
}
