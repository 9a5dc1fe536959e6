//! The `list-types` command.

use anyhow::{Context, Result};
use colored::Colorize;
use graphql_markdown::{extract_types, type_names, TypeList};
use std::path::Path;

use crate::commands::common;
use crate::OutputOptions;

/// Extracts the catalog from an introspection file and writes its type
/// names as a pretty-printed JSON list.
#[tracing::instrument(skip(output_opts))]
pub async fn run(schema_path: &Path, types_path: &Path, output_opts: OutputOptions) -> Result<()> {
    let response = common::load_introspection(schema_path).await?;

    let types = extract_types(&response);
    let list = TypeList {
        types: type_names(&types)
            .into_iter()
            .map(str::to_owned)
            .collect(),
    };

    let json = list
        .to_pretty_json()
        .context("Failed to serialize type list")?;
    common::write_output(types_path, &json).await?;

    if output_opts.show_info {
        println!(
            "{} Wrote {} type names to {}",
            "✓".green(),
            list.types.len(),
            types_path.display().to_string().cyan()
        );
    }

    Ok(())
}
