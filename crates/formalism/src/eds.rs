//! Elementary Dependency Structure records.
//!
//! An [`Eds`] is a flat list of [`Node`]s; the dependency edges live on their
//! source node as a role-to-target map, so a node can hold at most one outgoing
//! edge per role.

use crate::lnk::Lnk;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of an EDS graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within its graph (`e2`, `x4`, `_1`).
    pub id: String,
    /// Predicate symbol (`_dog_n_1`, `udef_q`).
    pub predicate: String,
    /// Variable sort of the node (`x`, `e`, ...); quantifiers have none.
    pub node_type: Option<String>,
    /// Outgoing edges, role name to target node id.
    pub edges: IndexMap<String, String>,
    /// Morphosemantic properties, in source order.
    pub properties: Option<IndexMap<String, String>>,
    /// Constant argument (named entities, numbers).
    pub carg: Option<String>,
    /// Surface alignment.
    pub lnk: Lnk,
}

impl Node {
    /// Create a node with no sort, edges, properties or alignment.
    pub fn new(id: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            predicate: predicate.into(),
            node_type: None,
            edges: IndexMap::new(),
            properties: None,
            carg: None,
            lnk: Lnk::None,
        }
    }

    /// Start character offset (`-1` if unaligned).
    pub fn cfrom(&self) -> i64 {
        self.lnk.cfrom()
    }

    /// End character offset (`-1` if unaligned).
    pub fn cto(&self) -> i64 {
        self.lnk.cto()
    }
}

/// An Elementary Dependency Structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eds {
    /// Id of the top node, if any.
    pub top: Option<String>,
    /// Nodes in source order.
    pub nodes: Vec<Node>,
}

impl Eds {
    pub fn new(top: Option<String>, nodes: Vec<Node>) -> Self {
        Self { top, nodes }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All edges as `(source, role, target)` triples, in node order then role order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.nodes.iter().flat_map(|node| {
            node.edges
                .iter()
                .map(move |(role, target)| (node.id.as_str(), role.as_str(), target.as_str()))
        })
    }
}
