use askama::Template;
use serde::Serialize;

use crate::spec::{ChannelEntry, OrderedSet, ReadmeMeta, ServerEntry};

/// Logical file name of the rendered artifact
pub const README_FILE_NAME: &str = "README.md";

/// Interpolation text for a server field the document left unset
///
/// The upstream template renders absent protocol/host fields as the literal
/// word `undefined` in the server bullet. That is almost certainly an
/// oversight in the original, but it is observable output, so it is kept
/// rather than replaced with a nicer placeholder. See DESIGN.md.
const UNSET_FIELD: &str = "undefined";

/// Fallback description for server and channel bullets
const NO_DESCRIPTION: &str = "No description";

/// A rendered artifact as a (name, content) pair
///
/// The renderer never touches storage; writing the file is the host's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}

/// Template data for the generated README.md
#[derive(Template)]
#[template(path = "README.md.txt", escape = "none")]
pub struct ReadmeTemplateData {
    /// Document title, verbatim
    pub title: String,
    /// Comma-joined protocol list, or "generic"
    pub protocol_list: String,
    /// Title sanitized into a Cargo dependency name
    pub dependency_name: String,
    /// Title sanitized into a Rust identifier
    pub identifier_name: String,
    /// One bullet per server, newline-joined
    pub server_list: String,
    /// One bullet per channel, newline-joined
    pub channel_list: String,
    /// One bullet per distinct message name, newline-joined
    pub message_list: String,
    /// Document version (extractor-defaulted)
    pub version: String,
    /// Document description (extractor-defaulted)
    pub description: String,
}

impl ReadmeTemplateData {
    /// Build the template context from extracted document metadata
    pub fn from_meta(meta: &ReadmeMeta) -> Self {
        Self {
            title: meta.info.title.clone(),
            protocol_list: protocol_list(&meta.protocols),
            dependency_name: sanitize_name(&meta.info.title, '-'),
            identifier_name: sanitize_name(&meta.info.title, '_'),
            server_list: server_bullets(&meta.servers),
            channel_list: channel_bullets(&meta.channels),
            message_list: message_bullets(&meta.message_types),
            version: meta.info.version.clone(),
            description: meta.info.description.clone(),
        }
    }
}

/// Render the README document for extracted metadata
///
/// Pure transform; identical input yields byte-identical output.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_readme(meta: &ReadmeMeta) -> anyhow::Result<GeneratedFile> {
    let content = ReadmeTemplateData::from_meta(meta).render()?;
    Ok(GeneratedFile {
        name: README_FILE_NAME.to_string(),
        content,
    })
}

/// Sanitize a document title into a flat package/module name
///
/// Lower-cases the title, then maps every character outside `a-z0-9` to the
/// filler character, one filler per offending character. Consecutive fillers
/// are not collapsed and leading/trailing fillers are not trimmed; the
/// result length always matches the lower-cased input.
pub fn sanitize_name(title: &str, filler: char) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                filler
            }
        })
        .collect()
}

/// Comma-joined protocol list, falling back to "generic" when empty
pub fn protocol_list(protocols: &OrderedSet) -> String {
    if protocols.is_empty() {
        "generic".to_string()
    } else {
        protocols.join(", ")
    }
}

/// One `- **name**: protocol://host - description` bullet per server
pub fn server_bullets(servers: &[ServerEntry]) -> String {
    servers
        .iter()
        .map(|server| {
            format!(
                "- **{}**: {}://{} - {}",
                server.name,
                server.protocol.as_deref().unwrap_or(UNSET_FIELD),
                server.host.as_deref().unwrap_or(UNSET_FIELD),
                server.description.as_deref().unwrap_or(NO_DESCRIPTION),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `- **name**: address - description` bullet per channel
///
/// A channel without an address falls back to its name.
pub fn channel_bullets(channels: &[ChannelEntry]) -> String {
    channels
        .iter()
        .map(|channel| {
            format!(
                "- **{}**: {} - {}",
                channel.name,
                channel.address.as_deref().unwrap_or(&channel.name),
                channel.description.as_deref().unwrap_or(NO_DESCRIPTION),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `- name` bullet per distinct message name, first-seen order
pub fn message_bullets(message_types: &OrderedSet) -> String {
    message_types
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}
