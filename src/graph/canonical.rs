use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::{EdgeDocument, GraphDocument, NodeDocument};

/// The canonical, shape-agnostic in-memory graph.
///
/// This is what the layout engine and every rendering caller operate on,
/// regardless of whether the origin document was Flow- or Agent-shaped.
/// Normalization guarantees that node ids are unique and that every edge
/// references existing nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalGraph {
    pub nodes: Vec<CanonicalNode>,
    pub edges: Vec<CanonicalEdge>,
}

impl CanonicalGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&CanonicalNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Converts the graph back into a Flow-shaped document for storage.
    ///
    /// Re-normalizing the result yields an identical graph; node metadata and
    /// positions ride along untouched.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            id: None,
            name: None,
            description: None,
            nodes: Some(self.nodes.iter().map(node_document).collect()),
            functions: None,
            edges: Some(self.edges.iter().map(edge_document).collect()),
            extra: serde_json::Map::new(),
        }
    }
}

fn node_document(node: &CanonicalNode) -> NodeDocument {
    NodeDocument {
        id: node.id.clone(),
        name: Some(node.name.clone()),
        description: node.description.clone(),
        kind: Some(node.kind.label().to_string()),
        position: node.position,
        metadata: node.metadata.clone(),
    }
}

fn edge_document(edge: &CanonicalEdge) -> EdgeDocument {
    EdgeDocument {
        source: edge.source.clone(),
        target: edge.target.clone(),
        source_handle: edge.source_handle.clone(),
        target_handle: edge.target_handle.clone(),
    }
}

/// A single node of a canonical graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Opaque pass-through fields (schemas, language, integrations) preserved
    /// verbatim for round-trip fidelity.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// A directed connection between two nodes of the same graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEdge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// Polymorphic node tag. A plain label, not a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Function,
    Condition,
    Action,
    Agent,
    Flow,
}

impl NodeKind {
    /// Maps a document `kind`/`type` label to a known tag. Unknown labels
    /// return `None` and the caller falls back to `Function`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "function" => Some(NodeKind::Function),
            "condition" => Some(NodeKind::Condition),
            "action" => Some(NodeKind::Action),
            "agent" => Some(NodeKind::Agent),
            "flow" => Some(NodeKind::Flow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Function => "function",
            NodeKind::Condition => "condition",
            NodeKind::Action => "action",
            NodeKind::Agent => "agent",
            NodeKind::Flow => "flow",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A 2D position in logical canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
