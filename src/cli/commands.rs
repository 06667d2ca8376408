use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line interface for the AsyncAPI README generator
///
/// Provides commands for rendering the Markdown overview of a generated
/// service from an AsyncAPI specification.
#[derive(Parser)]
#[command(name = "asyncapi-readme-gen")]
#[command(about = "AsyncAPI README generator CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render README.md from an AsyncAPI spec and write it to disk
    Generate {
        /// Path to the AsyncAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory for the README (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing README without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Render README.md from an AsyncAPI spec to stdout
    Print {
        /// Path to the AsyncAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The AsyncAPI spec cannot be loaded or parsed
/// - The document is missing its required title
/// - The README cannot be rendered or written
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            spec,
            output,
            force,
            dry_run,
        } => {
            crate::generator::generate_readme_from_spec(
                spec.as_path(),
                output.as_deref(),
                *force,
                *dry_run,
            )?;
            Ok(())
        }
        Commands::Print { spec } => {
            let content = crate::generator::render_readme_from_spec(spec.as_path())?;
            print!("{content}");
            Ok(())
        }
    }
}
