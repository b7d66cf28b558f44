//! Common test utilities for building graph documents and canonical graphs.
use nagare::prelude::*;

/// Creates a canonical node with the given id, no extras.
#[allow(dead_code)]
pub fn node(id: &str) -> CanonicalNode {
    CanonicalNode {
        id: id.to_string(),
        name: id.to_string(),
        description: None,
        kind: NodeKind::Function,
        position: None,
        metadata: serde_json::Map::new(),
    }
}

/// Creates a bare edge between two node ids.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> CanonicalEdge {
    CanonicalEdge {
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
    }
}

/// Creates a canonical graph from node ids and edge pairs.
#[allow(dead_code)]
pub fn graph(node_ids: &[&str], edge_pairs: &[(&str, &str)]) -> CanonicalGraph {
    CanonicalGraph {
        nodes: node_ids.iter().map(|id| node(id)).collect(),
        edges: edge_pairs.iter().map(|(s, t)| edge(s, t)).collect(),
    }
}

/// Creates the Flow-shaped chain document `a -> b -> c`.
#[allow(dead_code)]
pub fn create_chain_document() -> GraphDocument {
    GraphDocument::from_json(
        r#"{
            "nodes": [ { "id": "a" }, { "id": "b" }, { "id": "c" } ],
            "edges": [
                { "source": "a", "target": "b" },
                { "source": "b", "target": "c" }
            ]
        }"#,
    )
    .expect("chain document should parse")
}

/// Creates an Agent-shaped document with one function.
#[allow(dead_code)]
pub fn create_agent_document() -> GraphDocument {
    GraphDocument::from_json(r#"{ "functions": [ { "id": "f1" } ], "edges": [] }"#)
        .expect("agent document should parse")
}

/// Creates the diamond graph `a -> {b, c} -> d`. Ranks: a=0, b=c=1, d=2.
#[allow(dead_code)]
pub fn create_diamond_graph() -> CanonicalGraph {
    graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    )
}

/// Creates the three-node cycle `a -> b -> c -> a`.
#[allow(dead_code)]
pub fn create_cyclic_graph() -> CanonicalGraph {
    graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")])
}
