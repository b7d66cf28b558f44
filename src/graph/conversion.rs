use super::canonical::CanonicalGraph;
use crate::document::GraphDocument;
use crate::error::ConversionError;
use crate::normalizer;

/// A trait for custom data models that can be converted into a `CanonicalGraph`.
///
/// This is the extension point for source formats the library does not know
/// about. The built-in `GraphDocument` implements it via normalization; your
/// own structs can implement it to feed the layout engine directly.
///
/// # Example
///
/// ```rust
/// use nagare::prelude::*;
///
/// struct StepList {
///     steps: Vec<String>,
/// }
///
/// impl IntoGraph for StepList {
///     fn into_graph(self) -> std::result::Result<CanonicalGraph, ConversionError> {
///         if self.steps.is_empty() {
///             return Err(ConversionError::Validation("no steps".to_string()));
///         }
///         let nodes = self
///             .steps
///             .iter()
///             .map(|step| CanonicalNode {
///                 id: step.clone(),
///                 name: step.clone(),
///                 description: None,
///                 kind: NodeKind::Action,
///                 position: None,
///                 metadata: serde_json::Map::new(),
///             })
///             .collect();
///         let edges = self
///             .steps
///             .windows(2)
///             .map(|pair| CanonicalEdge {
///                 source: pair[0].clone(),
///                 target: pair[1].clone(),
///                 source_handle: None,
///                 target_handle: None,
///             })
///             .collect();
///         Ok(CanonicalGraph { nodes, edges })
///     }
/// }
///
/// let list = StepList {
///     steps: vec!["fetch".to_string(), "score".to_string(), "notify".to_string()],
/// };
/// let graph = list.into_graph().unwrap();
/// assert_eq!(graph.nodes.len(), 3);
/// assert_eq!(graph.edges.len(), 2);
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a canonical graph.
    fn into_graph(self) -> Result<CanonicalGraph, ConversionError>;
}

impl IntoGraph for GraphDocument {
    fn into_graph(self) -> Result<CanonicalGraph, ConversionError> {
        Ok(normalizer::normalize(&self))
    }
}
