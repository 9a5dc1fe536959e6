//! The `build-document` command.

use anyhow::Result;
use colored::Colorize;
use graphql_markdown::{extract_types, render_document, resolve_ordering, RenderOptions};
use std::path::Path;

use crate::commands::common;
use crate::OutputOptions;

/// Renders the ordered Markdown document for an introspection file.
#[tracing::instrument(skip(output_opts))]
pub async fn run(
    schema_path: &Path,
    ordering_path: &Path,
    doc_path: &Path,
    output_opts: OutputOptions,
) -> Result<()> {
    let response = common::load_introspection(schema_path).await?;
    let ordering = common::load_ordering(ordering_path).await?;

    let types = extract_types(&response);
    let included = resolve_ordering(&ordering.types, &types);

    if output_opts.show_info {
        for (name, resolved) in ordering.types.iter().zip(&included) {
            if resolved.is_none() {
                eprintln!(
                    "{} Ordering entry {} does not match any schema type; skipping",
                    "⚠".yellow(),
                    name.cyan()
                );
            }
        }
    }

    let markdown = render_document(&included, &RenderOptions::default());
    common::write_output(doc_path, &markdown).await?;

    if output_opts.show_info {
        let rendered = included.iter().filter(|slot| slot.is_some()).count();
        println!(
            "{} Documented {} of {} ordered types to {}",
            "✓".green(),
            rendered,
            ordering.types.len(),
            doc_path.display().to_string().cyan()
        );
    }

    Ok(())
}
