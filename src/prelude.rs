//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! nagare crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let doc = GraphDocument::from_json(&json)?;
//!
//! let (graph, report) = normalize_with_report(&doc);
//! for dropped in &report.dropped_edges {
//!     eprintln!("dropped edge {} -> {}", dropped.source, dropped.target);
//! }
//!
//! let positioned = layout(&graph, Direction::TopToBottom);
//! println!("Positioned {} nodes", positioned.nodes.len());
//! # Ok(())
//! # }
//! ```

// Document model and shape discrimination
pub use crate::document::{DocumentId, DocumentShape, EdgeDocument, GraphDocument, NodeDocument};

// Canonical graph types and conversion
pub use crate::graph::{
    CanonicalEdge, CanonicalGraph, CanonicalNode, IntoGraph, LayoutSnapshot, NodeKind, Position,
};

// Normalization
pub use crate::normalizer::{DroppedEdge, NormalizationReport, normalize, normalize_with_report};

// Layout engine
pub use crate::layout::{
    Anchor, Direction, LayoutStyle, PositionedGraph, PositionedNode, layout, layout_with_style,
};

// Error types
pub use crate::error::{ArtifactError, ConversionError, DirectionParseError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
