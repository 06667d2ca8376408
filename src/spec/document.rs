use anyhow::Context;
use serde_yaml::Value;

/// Parsed AsyncAPI document exposing read-only accessors over its sections
///
/// This is a thin wrapper over the YAML/JSON value tree produced by the
/// loader. Every accessor returns an optional value instead of failing:
/// a missing key, a null node, or a node of the wrong shape all read as
/// absent. Iteration over `servers`, `channels`, and `operations` follows
/// the order the mappings appear in the source document.
#[derive(Debug, Clone)]
pub struct AsyncApiDoc {
    root: Value,
}

impl AsyncApiDoc {
    /// Wrap an already parsed document value
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from YAML text (JSON is accepted as a YAML subset)
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML.
    pub fn from_str(text: &str) -> anyhow::Result<Self> {
        let root: Value =
            serde_yaml::from_str(text).context("failed to parse AsyncAPI document")?;
        Ok(Self::new(root))
    }

    /// The `info` section, if present
    pub fn info(&self) -> Option<Info<'_>> {
        self.root.get("info").map(|node| Info { node })
    }

    /// Named server objects in document order
    pub fn servers(&self) -> Vec<(String, Server<'_>)> {
        named_entries(&self.root, "servers")
            .into_iter()
            .map(|(name, node)| (name, Server { node }))
            .collect()
    }

    /// Named channel objects in document order
    pub fn channels(&self) -> Vec<(String, Channel<'_>)> {
        named_entries(&self.root, "channels")
            .into_iter()
            .map(|(name, node)| (name, Channel { node }))
            .collect()
    }
}

/// The `info` section of a document
#[derive(Debug, Clone, Copy)]
pub struct Info<'a> {
    node: &'a Value,
}

impl Info<'_> {
    pub fn title(&self) -> Option<&str> {
        str_field(self.node, "title")
    }

    pub fn version(&self) -> Option<&str> {
        str_field(self.node, "version")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(self.node, "description")
    }
}

/// A single entry of the `servers` mapping
#[derive(Debug, Clone, Copy)]
pub struct Server<'a> {
    node: &'a Value,
}

impl Server<'_> {
    pub fn protocol(&self) -> Option<&str> {
        str_field(self.node, "protocol")
    }

    pub fn host(&self) -> Option<&str> {
        str_field(self.node, "host")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(self.node, "description")
    }
}

/// A single entry of the `channels` mapping
#[derive(Debug, Clone, Copy)]
pub struct Channel<'a> {
    node: &'a Value,
}

impl Channel<'_> {
    pub fn address(&self) -> Option<&str> {
        str_field(self.node, "address")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(self.node, "description")
    }

    /// Named operation objects of this channel in document order
    pub fn operations(&self) -> Vec<(String, Operation<'_>)> {
        named_entries(self.node, "operations")
            .into_iter()
            .map(|(name, node)| (name, Operation { node }))
            .collect()
    }
}

/// A single entry of a channel's `operations` mapping
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    node: &'a Value,
}

impl Operation<'_> {
    pub fn action(&self) -> Option<&str> {
        str_field(self.node, "action")
    }

    /// The operation's message list; empty when the document declares none
    pub fn messages(&self) -> Vec<Message<'_>> {
        self.node
            .get("messages")
            .and_then(Value::as_sequence)
            .map(|seq| seq.iter().map(|node| Message { node }).collect())
            .unwrap_or_default()
    }
}

/// One message object inside an operation's message list
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    node: &'a Value,
}

impl Message<'_> {
    pub fn name(&self) -> Option<&str> {
        str_field(self.node, "name")
    }
}

/// Read a string field from a mapping node
///
/// Absent key, non-mapping parent, and non-string value all read as `None`.
fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

/// Collect the string-keyed entries of a nested mapping in document order
fn named_entries<'a>(node: &'a Value, key: &str) -> Vec<(String, &'a Value)> {
    node.get(key)
        .and_then(Value::as_mapping)
        .map(|mapping| {
            mapping
                .iter()
                .filter_map(|(k, v)| k.as_str().map(|name| (name.to_string(), v)))
                .collect()
        })
        .unwrap_or_default()
}
