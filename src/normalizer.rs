//! Normalization of persisted Flow/Agent documents into canonical graphs.
//!
//! `normalize` is total: any document produces a graph, and a document with
//! neither `nodes` nor `functions` produces an empty one. Violations that
//! would break the graph invariants (dangling edges, duplicate node ids) are
//! repaired by dropping the offending entry, and surfaced through the report
//! since this layer performs no logging or I/O of its own.

use ahash::AHashSet;

use crate::document::{GraphDocument, NodeDocument};
use crate::graph::{CanonicalEdge, CanonicalGraph, CanonicalNode, NodeKind};

/// An edge removed during normalization because one endpoint was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEdge {
    pub source: String,
    pub target: String,
    /// The endpoint id that did not resolve to a node.
    pub missing: String,
}

/// What normalization had to repair. Worth logging by the caller, never fatal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizationReport {
    pub dropped_edges: Vec<DroppedEdge>,
    /// Node ids that appeared more than once; only the first occurrence is kept.
    pub duplicate_nodes: Vec<String>,
}

impl NormalizationReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_edges.is_empty() && self.duplicate_nodes.is_empty()
    }
}

/// Normalizes a persisted document into a canonical graph.
pub fn normalize(doc: &GraphDocument) -> CanonicalGraph {
    normalize_with_report(doc).0
}

/// Normalizes a persisted document, also reporting every repair made.
pub fn normalize_with_report(doc: &GraphDocument) -> (CanonicalGraph, NormalizationReport) {
    let mut report = NormalizationReport::default();

    let entries = doc.extract_nodes();
    let mut nodes = Vec::with_capacity(entries.len());
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            report.duplicate_nodes.push(entry.id.clone());
            continue;
        }
        nodes.push(canonical_node(entry));
    }

    let mut edges = Vec::new();
    for entry in doc.extract_edges() {
        let missing = if !seen.contains(entry.source.as_str()) {
            Some(&entry.source)
        } else if !seen.contains(entry.target.as_str()) {
            Some(&entry.target)
        } else {
            None
        };
        match missing {
            Some(endpoint) => report.dropped_edges.push(DroppedEdge {
                source: entry.source.clone(),
                target: entry.target.clone(),
                missing: endpoint.clone(),
            }),
            None => edges.push(CanonicalEdge {
                source: entry.source.clone(),
                target: entry.target.clone(),
                source_handle: entry.source_handle.clone(),
                target_handle: entry.target_handle.clone(),
            }),
        }
    }

    (CanonicalGraph { nodes, edges }, report)
}

fn canonical_node(entry: &NodeDocument) -> CanonicalNode {
    // Unknown and absent kind labels both fall back to Function, so equivalent
    // Flow- and Agent-shaped inputs normalize to identical graphs.
    let kind = entry
        .kind
        .as_deref()
        .and_then(NodeKind::from_label)
        .unwrap_or(NodeKind::Function);

    CanonicalNode {
        id: entry.id.clone(),
        name: entry.name.clone().unwrap_or_else(|| entry.id.clone()),
        description: entry.description.clone(),
        kind,
        position: entry.position,
        metadata: entry.metadata.clone(),
    }
}
