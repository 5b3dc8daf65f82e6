//! Surface document model
//!
//! Defines the wire-facing types for a surface description message:
//! - Message kinds (initial render, partial update, data update)
//! - Nodes (typed, id-keyed, with child references)
//! - Documents (a kind plus an ordered, flat node list)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Message kinds a surface document can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// First full render of a surface
    InitialRender,
    /// Incremental structural update to an existing surface
    PartialUpdate,
    /// Data-only refresh, structure unchanged
    DataUpdate,
}

impl MessageKind {
    /// All recognized kinds, in wire order
    pub const ALL: [MessageKind; 3] = [
        MessageKind::InitialRender,
        MessageKind::PartialUpdate,
        MessageKind::DataUpdate,
    ];

    /// Wire name of this kind
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::InitialRender => "initial-render",
            MessageKind::PartialUpdate => "partial-update",
            MessageKind::DataUpdate => "data-update",
        }
    }
}

impl Default for MessageKind {
    fn default() -> Self {
        MessageKind::InitialRender
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial-render" => Ok(MessageKind::InitialRender),
            "partial-update" => Ok(MessageKind::PartialUpdate),
            "data-update" => Ok(MessageKind::DataUpdate),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Error for an unrecognized message kind string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl std::fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown message kind: '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

/// One declared element in a surface document
///
/// Nodes are flat; hierarchy exists only via `children` id references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceNode {
    /// Node type, checked against the component catalog
    #[serde(rename = "type")]
    pub node_type: String,
    /// Identifier, unique within a document
    pub id: String,
    /// Arbitrary component properties (may be empty, never absent on the wire)
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    /// Ordered child node ids, each resolving to another declared node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

impl SurfaceNode {
    /// Create new node
    #[inline]
    #[must_use]
    pub fn new(node_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            id: id.into(),
            properties: IndexMap::new(),
            children: None,
        }
    }

    /// With a property
    #[inline]
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// With child references
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = Some(children);
        self
    }

    /// Child ids, empty when none are declared
    #[inline]
    #[must_use]
    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A surface description message: a kind plus an ordered, flat node list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDocument {
    /// Message kind
    pub kind: MessageKind,
    /// Declared nodes, in wire order
    pub nodes: Vec<SurfaceNode>,
    /// Opaque timestamp, passed through unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Opaque metadata, passed through unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, Value>>,
}

impl SurfaceDocument {
    /// Create new empty document
    #[inline]
    #[must_use]
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            timestamp: None,
            metadata: None,
        }
    }

    /// With a node appended
    #[inline]
    #[must_use]
    pub fn with_node(mut self, node: SurfaceNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// With a timestamp
    #[inline]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Look up a declared node by id (first declaration wins)
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SurfaceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of declared nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document declares no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for SurfaceDocument {
    fn default() -> Self {
        Self::new(MessageKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn kind_wire_names_round_trip() {
        for kind in MessageKind::ALL {
            let parsed: MessageKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn kind_rejects_unknown() {
        let err = "full-render".parse::<MessageKind>().unwrap_err();
        assert_eq!(err.0, "full-render");
    }

    #[test]
    fn kind_serde_kebab_case() {
        let json = serde_json::to_string(&MessageKind::PartialUpdate).unwrap();
        assert_eq!(json, "\"partial-update\"");
    }

    #[test]
    fn node_builder() {
        let node = SurfaceNode::new("card", "summary")
            .with_property("title", json!("Overview"))
            .with_children(vec!["body".to_string()]);

        assert_eq!(node.node_type, "card");
        assert_eq!(node.child_ids(), ["body".to_string()]);
        assert_eq!(node.properties["title"], json!("Overview"));
    }

    #[test]
    fn node_wire_field_names() {
        let node: SurfaceNode = serde_json::from_value(json!({
            "type": "text",
            "id": "t1",
            "properties": { "content": "hi" }
        }))
        .unwrap();
        assert_eq!(node.node_type, "text");
        assert!(node.children.is_none());
    }

    #[test]
    fn node_properties_default_empty() {
        let node: SurfaceNode =
            serde_json::from_value(json!({ "type": "text", "id": "t1" })).unwrap();
        assert!(node.properties.is_empty());
    }

    #[test]
    fn document_lookup() {
        let doc = SurfaceDocument::new(MessageKind::InitialRender)
            .with_node(SurfaceNode::new("container", "root"))
            .with_node(SurfaceNode::new("text", "body"));

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.node("body").unwrap().node_type, "text");
        assert!(doc.node("missing").is_none());
    }

    #[test]
    fn document_default_kind_is_initial_render() {
        assert_eq!(SurfaceDocument::default().kind, MessageKind::InitialRender);
    }
}
