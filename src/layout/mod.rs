//! Layered (Sugiyama-style) placement for canonical graphs.
//!
//! The graphs handled here are shallow workflow DAGs with tens of nodes, so a
//! fast layering heuristic beats optimal crossing minimization. The pipeline:
//! rank every node by longest path from a source, order each rank by the
//! median position of its neighbors, then map (rank, order) to coordinates
//! along the requested direction.
//!
//! The engine is a pure function: no shared layout state survives between
//! calls, the input graph is never touched, and cycles or dangling edges
//! cannot make it fail or loop.

use std::str::FromStr;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::DirectionParseError;
use crate::graph::{CanonicalEdge, CanonicalGraph, CanonicalNode, Position};

mod ordering;
mod rank;

const ORDERING_PASSES: usize = 4;

/// Which way the graph reads once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TopToBottom,
    LeftToRight,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tb" | "top-to-bottom" => Ok(Direction::TopToBottom),
            "lr" | "left-to-right" => Ok(Direction::LeftToRight),
            other => Err(DirectionParseError(other.to_string())),
        }
    }
}

/// The side of a node card where edges attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

/// Spacing parameters. The card size matches the visual node box; the gaps
/// keep same-rank cards from touching.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    pub node_width: f64,
    pub node_height: f64,
    pub node_gap: f64,
    pub rank_gap: f64,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            node_width: 280.0,
            node_height: 120.0,
            node_gap: 60.0,
            rank_gap: 80.0,
        }
    }
}

/// A canonical node with its computed placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub node: CanonicalNode,
    pub rank: usize,
    pub order: usize,
    pub source_anchor: Anchor,
    pub target_anchor: Anchor,
}

/// The output of a layout call: every node positioned, edges passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionedGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<CanonicalEdge>,
}

impl PositionedGraph {
    /// Collapses the placement back into a canonical graph, keeping the
    /// computed positions on the nodes. Rank, order and anchors are render
    /// details and do not persist.
    pub fn into_graph(self) -> CanonicalGraph {
        CanonicalGraph {
            nodes: self.nodes.into_iter().map(|p| p.node).collect(),
            edges: self.edges,
        }
    }
}

/// Lays out a canonical graph with the default style.
pub fn layout(graph: &CanonicalGraph, direction: Direction) -> PositionedGraph {
    layout_with_style(graph, direction, &LayoutStyle::default())
}

/// Lays out a canonical graph.
///
/// Rank and order assignment are independent of `direction`; the direction
/// only decides which axis ranks advance along and where edges anchor.
pub fn layout_with_style(
    graph: &CanonicalGraph,
    direction: Direction,
    style: &LayoutStyle,
) -> PositionedGraph {
    if graph.nodes.is_empty() {
        return PositionedGraph {
            nodes: Vec::new(),
            edges: graph.edges.clone(),
        };
    }

    let index: AHashMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    // Edges that do not resolve to two known nodes are ignored here rather
    // than rejected; normalization reports them upstream.
    let edges: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .filter_map(|e| {
            Some((
                *index.get(e.source.as_str())?,
                *index.get(e.target.as_str())?,
            ))
        })
        .collect();

    let forward = rank::drop_back_edges(graph.nodes.len(), &edges);
    let ranks = rank::assign_ranks(graph.nodes.len(), &forward);
    let layers = ordering::order_within_ranks(&ranks, &forward, ORDERING_PASSES);

    let mut orders = vec![0usize; graph.nodes.len()];
    for layer in &layers {
        for (order, &node) in layer.iter().enumerate() {
            orders[node] = order;
        }
    }

    let (source_anchor, target_anchor) = match direction {
        Direction::TopToBottom => (Anchor::Bottom, Anchor::Top),
        Direction::LeftToRight => (Anchor::Right, Anchor::Left),
    };

    let nodes = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, canonical)| {
            let mut node = canonical.clone();
            node.position = Some(position_for(ranks[i], orders[i], direction, style));
            PositionedNode {
                node,
                rank: ranks[i],
                order: orders[i],
                source_anchor,
                target_anchor,
            }
        })
        .collect();

    PositionedGraph {
        nodes,
        edges: graph.edges.clone(),
    }
}

fn position_for(rank: usize, order: usize, direction: Direction, style: &LayoutStyle) -> Position {
    match direction {
        Direction::TopToBottom => Position {
            x: order as f64 * (style.node_width + style.node_gap),
            y: rank as f64 * (style.node_height + style.rank_gap),
        },
        Direction::LeftToRight => Position {
            x: rank as f64 * (style.node_width + style.rank_gap),
            y: order as f64 * (style.node_height + style.node_gap),
        },
    }
}
