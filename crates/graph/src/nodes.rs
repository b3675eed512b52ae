//! Node types for the EDS graph.

use crate::Attrs;
use graphedes_formalism::eds;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A character span in the source sentence (start inclusive, end exclusive).
pub type Span = (i64, i64);

/// The role of a node, read from its variable sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Instance variable (`x`)
    Variable,

    /// Event (`e`)
    Event,

    /// Quantifier; nodes with no sort
    Quantifier,

    /// Any other sort (`i`, `u`, `p`, `h`)
    Other(String),
}

impl NodeRole {
    /// Read a role from an optional variable sort.
    pub fn from_sort(sort: Option<&str>) -> Self {
        match sort {
            None | Some("q") => NodeRole::Quantifier,
            Some("x") => NodeRole::Variable,
            Some("e") => NodeRole::Event,
            Some(other) => NodeRole::Other(other.to_string()),
        }
    }

    /// Outline color used when node roles are colored.
    pub fn color(&self) -> &'static str {
        match self {
            NodeRole::Event => "red",
            NodeRole::Variable => "black",
            NodeRole::Quantifier | NodeRole::Other(_) => "blue",
        }
    }
}

/// Typed metadata attached to a converted node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdsNode {
    pub predicate: String,
    pub span: Span,
    /// Never absent; empty when the record had none.
    pub properties: IndexMap<String, String>,
    pub constant: Option<String>,
    pub role: NodeRole,
}

impl From<&eds::Node> for EdsNode {
    fn from(node: &eds::Node) -> Self {
        EdsNode {
            predicate: node.predicate.clone(),
            span: (node.cfrom(), node.cto()),
            properties: node.properties.clone().unwrap_or_default(),
            constant: node.carg.clone(),
            role: NodeRole::from_sort(node.node_type.as_deref()),
        }
    }
}

/// A node weight in the [`EdsGraph`](crate::EdsGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node identifier, reused from the EDS record.
    pub id: String,
    /// Set by the converter, removed by [`clean`](crate::render::clean).
    pub meta: Option<EdsNode>,
    /// The input record, when the converter was asked to keep it.
    pub raw: Option<eds::Node>,
    /// Presentation attributes.
    pub attrs: Attrs,
}

impl GraphNode {
    /// A node with no metadata and no attributes.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: None,
            raw: None,
            attrs: Attrs::new(),
        }
    }

    pub fn with_meta(id: impl Into<String>, meta: EdsNode) -> Self {
        Self {
            meta: Some(meta),
            ..Self::bare(id)
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Whether any internal metadata is still attached.
    pub fn has_metadata(&self) -> bool {
        self.meta.is_some() || self.raw.is_some()
    }
}
