//! # CLI Module
//!
//! Command-line interface for the AsyncAPI README generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render `README.md` from an AsyncAPI specification and write it to disk:
//!
//! ```bash
//! asyncapi-readme-gen generate --spec asyncapi.yaml --output my-service
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to the AsyncAPI specification (required)
//! - `--output <DIR>` - Output directory (default: current directory)
//! - `--force` - Overwrite an existing README
//! - `--dry-run` - Report what would be written without writing
//!
//! ### `print`
//!
//! Render the README to stdout instead of a file:
//!
//! ```bash
//! asyncapi-readme-gen print --spec asyncapi.yaml
//! ```
//!
//! ## Logging
//!
//! Trace output is controlled by `RUST_LOG` via `tracing-subscriber`'s
//! env-filter, e.g. `RUST_LOG=asyncapi_readme=debug`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
