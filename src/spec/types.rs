use serde::Serialize;

/// Flat metadata extracted from an AsyncAPI document
///
/// This is the intermediate representation between the extractor and the
/// README renderer. It is created fresh per invocation and never written
/// back into; the renderer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadmeMeta {
    pub info: DocumentInfo,
    pub servers: Vec<ServerEntry>,
    /// Distinct lower-cased protocols across all servers, first-seen order
    pub protocols: OrderedSet,
    pub channels: Vec<ChannelEntry>,
    /// Distinct message names across all operations, first-seen order
    pub message_types: OrderedSet,
}

/// Title, version, and description of the document
///
/// Version and description are already defaulted by the extractor, so the
/// renderer never needs a fallback for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// One entry of the document's `servers` mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerEntry {
    pub name: String,
    /// Lower-cased protocol; unset when the server declares none
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub description: Option<String>,
}

/// One entry of the document's `channels` mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEntry {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub operations: Vec<OperationEntry>,
}

/// One operation of a channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationEntry {
    pub name: String,
    pub action: Option<String>,
    pub messages: Vec<MessageRef>,
}

/// Reference to a message inside an operation's message list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRef {
    pub name: Option<String>,
}

/// String set that iterates in first-seen insertion order
///
/// Inserting a value that is already present is a no-op and does not change
/// its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderedSet(Vec<String>);

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning whether it was newly added
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_set_keeps_first_seen_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("kafka"));
        assert!(set.insert("amqp"));
        assert!(set.insert("mqtt"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["kafka", "amqp", "mqtt"]);
    }

    #[test]
    fn test_ordered_set_reinsert_is_noop() {
        let mut set = OrderedSet::new();
        set.insert("kafka");
        set.insert("amqp");
        assert!(!set.insert("kafka"));
        assert_eq!(set.len(), 2);
        // position of "kafka" is unchanged
        assert_eq!(set.iter().next(), Some("kafka"));
    }

    #[test]
    fn test_ordered_set_join() {
        let mut set = OrderedSet::new();
        assert_eq!(set.join(", "), "");
        set.insert("ws");
        set.insert("wss");
        assert_eq!(set.join(", "), "ws, wss");
    }
}
