//! # asyncapi-readme
//!
//! Renders the Markdown overview (`README.md`) of an AsyncAPI-generated
//! service from its [AsyncAPI](https://www.asyncapi.com/) specification.
//!
//! ## Overview
//!
//! Code generators that turn an AsyncAPI document into a Rust service need a
//! human-readable entry point describing what was generated: which servers
//! and protocols the service talks to, which channels and message types it
//! handles, and how to embed the generated library in an application. This
//! crate is that documentation step, packaged as a library plus a small CLI
//! so it can run standalone or inside a larger generation pipeline.
//!
//! ## Architecture
//!
//! The crate is organized into three modules:
//!
//! - **[`spec`]** - AsyncAPI document model, loading, and metadata extraction
//! - **[`generator`]** - README template rendering and file emission
//! - **[`cli`]** - Command-line interface for the `asyncapi-readme-gen` binary
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(asyncapi-readme-gen)
//!     participant Load as spec::load_document
//!     participant Build as spec::build_readme_meta
//!     participant Render as generator::render_readme
//!     participant FS as File System
//!
//!     User->>CLI: generate --spec asyncapi.yaml
//!     CLI->>Load: load_document("asyncapi.yaml")
//!     Load->>Load: Parse YAML/JSON
//!     Load-->>CLI: AsyncApiDoc
//!     CLI->>Build: build_readme_meta(&doc)
//!     Build->>Build: Walk info, servers,<br/>channels, operations, messages
//!     Build-->>CLI: ReadmeMeta
//!     CLI->>Render: render_readme(&meta)
//!     Render->>Render: Apply Askama template
//!     Render-->>CLI: GeneratedFile (README.md)
//!     CLI->>FS: Write README.md
//!     CLI-->>User: ✅ Generated README
//! ```
//!
//! The extraction and rendering stages are pure functions with no I/O:
//! loading and file emission own all filesystem access, so the same document
//! always renders to byte-identical output and independent invocations need
//! no coordination.
//!
//! ## Quick Start
//!
//! ```no_run
//! use asyncapi_readme::generator::render_readme;
//! use asyncapi_readme::spec::{build_readme_meta, load_document};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = load_document(Path::new("asyncapi.yaml"))?;
//! let meta = build_readme_meta(&doc)?;
//! let file = render_readme(&meta)?;
//! assert_eq!(file.name, "README.md");
//! # Ok(())
//! # }
//! ```
//!
//! ## Tolerance for Sparse Documents
//!
//! AsyncAPI documents are frequently partial while a service is being
//! designed. Every field except `info.title` may be absent: versions and
//! descriptions fall back to fixed placeholder text, servers without a
//! protocol contribute nothing to the protocol list, operations without
//! messages read as empty, and unnamed messages are skipped. Only a missing
//! title aborts generation.

pub mod cli;
pub mod generator;
pub mod spec;

pub use generator::{
    generate_readme_from_spec, render_readme, render_readme_from_spec, GeneratedFile,
    README_FILE_NAME,
};
pub use spec::{
    build_readme_meta, load_document, AsyncApiDoc, ChannelEntry, DocumentInfo, MessageRef,
    OperationEntry, OrderedSet, ReadmeMeta, ServerEntry,
};
