//! Tests for shape discrimination and document normalization.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_flow_document_normalizes_nodes_and_edges() {
    let doc = create_chain_document();
    assert!(doc.is_flow_shaped());
    assert!(!doc.is_agent_shaped());

    let (graph, report) = normalize_with_report(&doc);
    assert!(report.is_clean());
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.nodes[0].id, "a");
    assert_eq!(graph.edges[0].source, "a");
    assert_eq!(graph.edges[0].target, "b");
}

#[test]
fn test_agent_document_matches_equivalent_flow_document() {
    let agent = create_agent_document();
    assert!(agent.is_agent_shaped());

    let flow = GraphDocument::from_json(r#"{ "nodes": [ { "id": "f1" } ], "edges": [] }"#)
        .expect("flow document should parse");

    let from_agent = normalize(&agent);
    let from_flow = normalize(&flow);

    assert_eq!(from_agent.nodes.len(), 1);
    assert_eq!(from_agent.nodes[0].id, "f1");
    assert_eq!(from_agent.edges.len(), 0);
    assert_eq!(from_agent, from_flow);
}

#[test]
fn test_ambiguous_document_prefers_flow_nodes() {
    let doc = GraphDocument::from_json(
        r#"{
            "nodes": [ { "id": "n1" } ],
            "functions": [ { "id": "f1" }, { "id": "f2" } ]
        }"#,
    )
    .expect("ambiguous document should parse");
    assert!(doc.is_flow_shaped());
    assert!(doc.is_agent_shaped());
    assert_eq!(DocumentShape::of(&doc), DocumentShape::Flow);

    let graph = normalize(&doc);
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].id, "n1");
    // The losing field stays on the document untouched.
    assert_eq!(doc.functions.as_ref().unwrap().len(), 2);
}

#[test]
fn test_document_without_nodes_or_functions_is_empty() {
    let doc = GraphDocument::from_json(r#"{ "name": "stub" }"#).expect("stub should parse");
    assert_eq!(DocumentShape::of(&doc), DocumentShape::Empty);

    let (graph, report) = normalize_with_report(&doc);
    assert!(graph.is_empty());
    assert!(graph.edges.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_dangling_edges_are_dropped_and_reported() {
    let doc = GraphDocument::from_json(
        r#"{
            "nodes": [ { "id": "a" }, { "id": "b" } ],
            "edges": [
                { "source": "a", "target": "b" },
                { "source": "a", "target": "ghost" },
                { "source": "phantom", "target": "b" }
            ]
        }"#,
    )
    .expect("document should parse");

    let (graph, report) = normalize_with_report(&doc);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(report.dropped_edges.len(), 2);
    assert_eq!(report.dropped_edges[0].missing, "ghost");
    assert_eq!(report.dropped_edges[1].missing, "phantom");
    // Every surviving edge references existing nodes.
    for edge in &graph.edges {
        assert!(graph.contains_node(&edge.source));
        assert!(graph.contains_node(&edge.target));
    }
}

#[test]
fn test_edges_without_nodes_all_drop() {
    let doc = GraphDocument::from_json(
        r#"{ "edges": [ { "source": "a", "target": "b" } ] }"#,
    )
    .expect("document should parse");

    let (graph, report) = normalize_with_report(&doc);
    assert!(graph.is_empty());
    assert!(graph.edges.is_empty());
    assert_eq!(report.dropped_edges.len(), 1);
}

#[test]
fn test_duplicate_node_ids_keep_first_occurrence() {
    let doc = GraphDocument::from_json(
        r#"{
            "nodes": [
                { "id": "a", "name": "First" },
                { "id": "a", "name": "Second" },
                { "id": "b" }
            ]
        }"#,
    )
    .expect("document should parse");

    let (graph, report) = normalize_with_report(&doc);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.node("a").unwrap().name, "First");
    assert_eq!(report.duplicate_nodes, vec!["a".to_string()]);
}

#[test]
fn test_normalization_is_idempotent() {
    let doc = GraphDocument::from_json(
        r#"{
            "nodes": [
                {
                    "id": "a",
                    "name": "Entry",
                    "description": "Starts the flow",
                    "kind": "condition",
                    "position": { "x": 10.0, "y": 20.0 },
                    "schema": { "fields": ["email"] }
                },
                { "id": "b" }
            ],
            "edges": [
                { "source": "a", "target": "b", "sourceHandle": "out-0" }
            ]
        }"#,
    )
    .expect("document should parse");

    let first = normalize(&doc);
    let (second, report) = normalize_with_report(&first.to_document());
    assert!(report.is_clean());
    assert_eq!(first, second);
}

#[test]
fn test_metadata_fields_are_preserved() {
    let doc = GraphDocument::from_json(
        r#"{
            "nodes": [
                { "id": "n", "language": "en", "integrations": ["crm"] }
            ]
        }"#,
    )
    .expect("document should parse");

    let graph = normalize(&doc);
    let node = graph.node("n").unwrap();
    assert_eq!(node.metadata["language"], serde_json::json!("en"));
    assert_eq!(node.metadata["integrations"], serde_json::json!(["crm"]));

    // And they survive the trip back into a document.
    let stored = graph.to_document();
    let restored = normalize(&stored);
    assert_eq!(restored.node("n").unwrap().metadata, node.metadata);
}

#[test]
fn test_node_defaults() {
    let doc = GraphDocument::from_json(
        r#"{ "nodes": [ { "id": "bare" }, { "id": "odd", "kind": "webhook" } ] }"#,
    )
    .expect("document should parse");

    let graph = normalize(&doc);
    let bare = graph.node("bare").unwrap();
    assert_eq!(bare.name, "bare");
    assert_eq!(bare.kind, NodeKind::Function);
    assert!(bare.position.is_none());

    // Unrecognized kind labels also fall back to Function.
    assert_eq!(graph.node("odd").unwrap().kind, NodeKind::Function);
}

#[test]
fn test_into_graph_for_documents() {
    let doc = create_chain_document();
    let graph = doc.into_graph().expect("document conversion is infallible");
    assert_eq!(graph.nodes.len(), 3);
}

#[test]
fn test_graph_builders_match_document_normalization() {
    let built = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let normalized = normalize(&create_chain_document());
    assert_eq!(built, normalized);
}
