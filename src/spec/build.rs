use anyhow::anyhow;

use super::document::AsyncApiDoc;
use super::types::{
    ChannelEntry, DocumentInfo, MessageRef, OperationEntry, OrderedSet, ReadmeMeta, ServerEntry,
};

/// Fallback version when the document's `info.version` is absent
const DEFAULT_VERSION: &str = "1.0.0";
/// Fallback description when the document's `info.description` is absent
const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Extract README metadata from an AsyncAPI document
///
/// Walks the document's info, servers, channels, operations, and messages
/// and normalizes them into the flat [`ReadmeMeta`] representation consumed
/// by the renderer. The walk is tolerant of partially populated documents:
/// every field except `info.title` may be absent and is either defaulted
/// here or recorded as unset. Iteration order over servers, channels, and
/// operations follows the document and is preserved, since it determines
/// the line order of the rendered lists.
///
/// # Errors
///
/// Returns an error only when the `info` section or its `title` field is
/// missing; the transform cannot produce meaningful output without a title.
pub fn build_readme_meta(doc: &AsyncApiDoc) -> anyhow::Result<ReadmeMeta> {
    let info = doc
        .info()
        .ok_or_else(|| anyhow!("AsyncAPI document has no info section"))?;
    let title = info
        .title()
        .ok_or_else(|| anyhow!("AsyncAPI document is missing the required info.title field"))?
        .to_string();
    let version = info.version().unwrap_or(DEFAULT_VERSION).to_string();
    let description = info
        .description()
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    let mut protocols = OrderedSet::new();
    let mut servers = Vec::new();
    for (name, server) in doc.servers() {
        let protocol = server.protocol().map(|p| p.to_lowercase());
        if let Some(protocol) = &protocol {
            protocols.insert(protocol);
        }
        servers.push(ServerEntry {
            name,
            protocol,
            host: server.host().map(str::to_string),
            description: server.description().map(str::to_string),
        });
    }

    let mut channels = Vec::new();
    let mut message_types = OrderedSet::new();
    for (name, channel) in doc.channels() {
        let mut operations = Vec::new();
        for (op_name, operation) in channel.operations() {
            let mut messages = Vec::new();
            for message in operation.messages() {
                // only named messages feed the global message-type set;
                // the per-operation list records every entry
                if let Some(message_name) = message.name() {
                    if !message_name.is_empty() {
                        message_types.insert(message_name);
                    }
                }
                messages.push(MessageRef {
                    name: message.name().map(str::to_string),
                });
            }
            operations.push(OperationEntry {
                name: op_name,
                action: operation.action().map(str::to_string),
                messages,
            });
        }
        channels.push(ChannelEntry {
            name,
            address: channel.address().map(str::to_string),
            description: channel.description().map(str::to_string),
            operations,
        });
    }

    tracing::debug!(
        servers = servers.len(),
        channels = channels.len(),
        protocols = protocols.len(),
        message_types = message_types.len(),
        "extracted README metadata"
    );

    Ok(ReadmeMeta {
        info: DocumentInfo {
            title,
            version,
            description,
        },
        servers,
        protocols,
        channels,
        message_types,
    })
}
