//! # Nagare - Graph Normalization and Layered Layout Engine
//!
//! **Nagare** normalizes the heterogeneous graph documents persisted by
//! node-based editors — workflow "flows" and capability "agents" — into one
//! canonical in-memory graph, and assigns every node a 2D position with a
//! layered (Sugiyama-style) layout so the graph is ready to render.
//!
//! ## Core Workflow
//!
//! Both steps are pure functions over immutable inputs: no I/O, no shared
//! state, safe to call from any number of concurrent rendering contexts.
//!
//! 1.  **Load Your Document**: fetch the raw Flow- or Agent-shaped JSON from
//!     your store and parse it into a [`GraphDocument`](document::GraphDocument)
//!     (or implement [`IntoGraph`](graph::IntoGraph) for your own format).
//! 2.  **Normalize**: [`normalize`](normalizer::normalize) reconciles both
//!     shapes into a [`CanonicalGraph`](graph::CanonicalGraph), repairing
//!     dangling edges instead of failing.
//! 3.  **Layout**: [`layout`](layout::layout) ranks, orders and positions
//!     every node for a top-to-bottom or left-to-right reading.
//! 4.  **Render or Persist**: draw the positioned graph, or convert it back
//!     into a Flow-shaped document for storage.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let doc = GraphDocument::from_json(
//!         r#"{
//!             "_id": { "$oid": "64f0c2a9e4b0d8a1b2c3d4e5" },
//!             "name": "Welcome journey",
//!             "nodes": [
//!                 { "id": "signup", "name": "Signup trigger", "kind": "action" },
//!                 { "id": "email", "name": "Send welcome email", "kind": "action" },
//!                 { "id": "score", "name": "Lead scoring", "kind": "function" }
//!             ],
//!             "edges": [
//!                 { "source": "signup", "target": "email" },
//!                 { "source": "email", "target": "score" }
//!             ]
//!         }"#,
//!     )?;
//!
//!     let (graph, report) = normalize_with_report(&doc);
//!     assert!(report.is_clean());
//!
//!     let positioned = layout(&graph, Direction::TopToBottom);
//!     for node in &positioned.nodes {
//!         let position = node.node.position.unwrap();
//!         println!("{}: rank {} at ({}, {})", node.node.id, node.rank, position.x, position.y);
//!     }
//!
//!     // Persist the placement back as a Flow-shaped document.
//!     let stored = positioned.into_graph().to_document();
//!     assert!(stored.is_flow_shaped());
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod layout;
pub mod normalizer;
pub mod prelude;
