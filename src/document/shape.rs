use std::time::{SystemTime, UNIX_EPOCH};

use super::types::{EdgeDocument, GraphDocument, NodeDocument};

/// The discriminant of the persisted document tagged union.
///
/// Computed once at normalization entry instead of probing fields at every
/// call site. A document carrying both `nodes` and `functions` is treated as
/// Flow-shaped; the tie-break is fixed and deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Flow,
    Agent,
    Empty,
}

impl DocumentShape {
    pub fn of(doc: &GraphDocument) -> Self {
        if doc.nodes.is_some() {
            DocumentShape::Flow
        } else if doc.functions.is_some() {
            DocumentShape::Agent
        } else {
            DocumentShape::Empty
        }
    }

    /// Short label used for fallback display ids.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentShape::Flow => "flow",
            DocumentShape::Agent => "agent",
            DocumentShape::Empty => "document",
        }
    }
}

impl GraphDocument {
    /// True iff the document carries a `nodes` field.
    pub fn is_flow_shaped(&self) -> bool {
        self.nodes.is_some()
    }

    /// True iff the document carries a `functions` field.
    pub fn is_agent_shaped(&self) -> bool {
        self.functions.is_some()
    }

    /// The node entries to normalize: `nodes` if present, else `functions`,
    /// else nothing.
    pub fn extract_nodes(&self) -> &[NodeDocument] {
        match DocumentShape::of(self) {
            DocumentShape::Flow => self.nodes.as_deref().unwrap_or(&[]),
            DocumentShape::Agent => self.functions.as_deref().unwrap_or(&[]),
            DocumentShape::Empty => &[],
        }
    }

    /// The edge entries to normalize; absent `edges` means none.
    pub fn extract_edges(&self) -> &[EdgeDocument] {
        self.edges.as_deref().unwrap_or(&[])
    }

    /// The persisted identifier normalized to a plain string.
    ///
    /// When no identifier is stored, a `"<shape>-<millis>"` fallback is
    /// synthesized from the wall clock. The fallback is good enough as a
    /// render key for the current pass only: it changes across calls and
    /// must never be persisted.
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(id) => id.as_str().to_string(),
            None => {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis())
                    .unwrap_or(0);
                format!("{}-{}", DocumentShape::of(self).label(), millis)
            }
        }
    }

    /// Case-insensitive substring match against name or description.
    /// An empty term always matches.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        let contains = |field: Option<&str>| {
            field.is_some_and(|text| text.to_lowercase().contains(&term))
        };
        contains(self.name.as_deref()) || contains(self.description.as_deref())
    }
}
