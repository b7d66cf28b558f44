use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

use crate::error::ArtifactError;
use crate::graph::{CanonicalEdge, CanonicalNode, NodeKind, Position};
use crate::layout::{Anchor, Direction, PositionedGraph, PositionedNode};

/// A positioned graph frozen to disk, together with the direction it was
/// computed for. Lets a caller skip re-running layout when nothing changed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub direction: Direction,
    pub graph: PositionedGraph,
}

// Wire structs for bincode. Node metadata is arbitrary JSON, which bincode
// cannot decode back (no self-describing format), so it rides as a JSON
// string per node.
#[derive(Serialize, Deserialize)]
struct SnapshotNode {
    id: String,
    name: String,
    description: Option<String>,
    kind: NodeKind,
    x: f64,
    y: f64,
    rank: usize,
    order: usize,
    source_anchor: Anchor,
    target_anchor: Anchor,
    metadata_json: String,
}

// Canonical types carry `skip_serializing_if` attributes for clean JSON,
// which would desynchronize bincode's positional encoding, so edges get a
// plain wire struct as well.
#[derive(Serialize, Deserialize)]
struct SnapshotEdge {
    source: String,
    target: String,
    source_handle: Option<String>,
    target_handle: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct SnapshotPayload {
    direction: Direction,
    nodes: Vec<SnapshotNode>,
    edges: Vec<SnapshotEdge>,
}

impl LayoutSnapshot {
    pub fn new(direction: Direction, graph: PositionedGraph) -> Self {
        Self { direction, graph }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the snapshot to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        let nodes = self
            .graph
            .nodes
            .iter()
            .map(|positioned| {
                let position = positioned.node.position.unwrap_or_default();
                let metadata_json = serde_json::to_string(&positioned.node.metadata)
                    .map_err(|e| ArtifactError::Encode(e.to_string()))?;
                Ok(SnapshotNode {
                    id: positioned.node.id.clone(),
                    name: positioned.node.name.clone(),
                    description: positioned.node.description.clone(),
                    kind: positioned.node.kind,
                    x: position.x,
                    y: position.y,
                    rank: positioned.rank,
                    order: positioned.order,
                    source_anchor: positioned.source_anchor,
                    target_anchor: positioned.target_anchor,
                    metadata_json,
                })
            })
            .collect::<Result<Vec<_>, ArtifactError>>()?;

        let edges = self
            .graph
            .edges
            .iter()
            .map(|edge| SnapshotEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
                source_handle: edge.source_handle.clone(),
                target_handle: edge.target_handle.clone(),
            })
            .collect();

        let payload = SnapshotPayload {
            direction: self.direction,
            nodes,
            edges,
        };
        encode_to_vec(&payload, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (payload, _): (SnapshotPayload, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ArtifactError::Decode(e.to_string()))?;

        let nodes = payload
            .nodes
            .into_iter()
            .map(|snapshot| {
                let metadata = serde_json::from_str(&snapshot.metadata_json)
                    .map_err(|e| ArtifactError::Decode(e.to_string()))?;
                Ok(PositionedNode {
                    node: CanonicalNode {
                        id: snapshot.id,
                        name: snapshot.name,
                        description: snapshot.description,
                        kind: snapshot.kind,
                        position: Some(Position {
                            x: snapshot.x,
                            y: snapshot.y,
                        }),
                        metadata,
                    },
                    rank: snapshot.rank,
                    order: snapshot.order,
                    source_anchor: snapshot.source_anchor,
                    target_anchor: snapshot.target_anchor,
                })
            })
            .collect::<Result<Vec<_>, ArtifactError>>()?;

        let edges = payload
            .edges
            .into_iter()
            .map(|edge| CanonicalEdge {
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(Self {
            direction: payload.direction,
            graph: PositionedGraph { nodes, edges },
        })
    }
}
