//! Graph element identity as seen by the selection stream

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a graph element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Node,
    Edge,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Edge => "edge",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ElementKind::Node => "●",
            ElementKind::Edge => "─",
        }
    }
}

/// A selected graph element, produced by the interaction layer on every
/// selection change. Deselection is expressed as `None` on the stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedElement {
    pub id: String,
    pub kind: ElementKind,
}

impl SelectedElement {
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Node,
        }
    }

    pub fn edge(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Edge,
        }
    }

    pub fn is_node(&self) -> bool {
        self.kind == ElementKind::Node
    }
}

impl fmt::Display for SelectedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.name(), self.id)
    }
}
