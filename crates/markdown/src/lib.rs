//! GraphQL introspection to Markdown documentation.
//!
//! This crate turns the JSON result of a GraphQL introspection query into
//! Markdown reference documentation. An externally supplied ordering
//! decides which types are documented and in what sequence; objects, input
//! objects, and interfaces render as heading-plus-table blocks, everything
//! else renders as empty text.
//!
//! # Examples
//!
//! ## One-step conversion
//!
//! ```
//! use graphql_markdown::{introspection_to_markdown, parse_introspection, RenderOptions, TypeList};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let response = parse_introspection(r#"{ "data": { "__schema": { "types": [] } } }"#)?;
//! let ordering = TypeList { types: vec![] };
//! let markdown = introspection_to_markdown(&response, &ordering, &RenderOptions::default());
//! assert!(markdown.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Step-by-step usage
//!
//! ```no_run
//! use graphql_markdown::{
//!     extract_types, parse_introspection, render_document, resolve_ordering, RenderOptions,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = std::fs::read_to_string("introspection.json")?;
//! let response = parse_introspection(&raw)?;
//!
//! let types = extract_types(&response);
//! let ordering = vec!["Query".to_string(), "Widget".to_string()];
//! let included = resolve_ordering(&ordering, &types);
//!
//! let markdown = render_document(&included, &RenderOptions::default());
//! println!("{markdown}");
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod ordering;
mod render;
mod types;

pub use catalog::{extract_types, type_names, INTROSPECTION_PREFIX};
pub use error::{Error, Result};
pub use ordering::{resolve_ordering, TypeList};
pub use render::{render_document, render_type, RenderOptions};
pub use types::*;

/// Renders the Markdown document for an introspected schema and an ordering.
///
/// This is a convenience function that combines [`extract_types`],
/// [`resolve_ordering`], and [`render_document`] into a single call.
/// Ordering entries that match no catalog type are skipped.
#[must_use]
#[tracing::instrument(skip(response, ordering, options), fields(
    types = response.data.schema.types.len(),
    ordered = ordering.types.len()
))]
pub fn introspection_to_markdown(
    response: &IntrospectionResponse,
    ordering: &TypeList,
    options: &RenderOptions,
) -> String {
    let types = extract_types(response);
    let included = resolve_ordering(&ordering.types, &types);
    render_document(&included, options)
}
