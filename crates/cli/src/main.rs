mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-md")]
#[command(about = "Generate Markdown documentation from GraphQL introspection results", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Suppress informational output (success messages, warnings)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a JSON file listing the schema's documentable type names
    ///
    /// The output doubles as a template for the ordering file consumed by
    /// `build-document`: edit it down to the types to document, in the
    /// order they should appear.
    ListTypes {
        /// Path to the JSON result of a GraphQL introspection query
        #[arg(long, value_name = "FILE")]
        schema: PathBuf,

        /// Path to write the type list to
        #[arg(long, value_name = "FILE")]
        types: PathBuf,
    },

    /// Write a Markdown document for the schema, sequenced by an ordering file
    BuildDocument {
        /// Path to the JSON result of a GraphQL introspection query
        #[arg(long, value_name = "FILE")]
        schema: PathBuf,

        /// Path to the ordering file selecting and sequencing the documented types
        #[arg(long, value_name = "FILE")]
        ordering: PathBuf,

        /// Path to write the Markdown document to
        #[arg(long, value_name = "FILE")]
        doc: PathBuf,
    },
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success messages, warnings)
    pub show_info: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    match cli.command {
        Commands::ListTypes { schema, types } => {
            commands::list_types::run(&schema, &types, output_opts).await
        }
        Commands::BuildDocument {
            schema,
            ordering,
            doc,
        } => commands::build_document::run(&schema, &ordering, &doc, output_opts).await,
    }
}

/// Initialize basic tracing
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
