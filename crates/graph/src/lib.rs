//! # graphedes-graph
//!
//! Conversion of EDS records into an attributed directed graph, and rendering
//! of that graph into a Graphviz DOT document.
//!
//! ## Features
//!
//! - **Conversion**: one node per EDS node, one edge per `(source, target)` pair,
//!   each carrying typed metadata ([`EdsNode`], [`EdsEdge`])
//! - **Rendering stages**: [`render::label`], [`render::color`], [`render::clean`],
//!   [`render::inject_defaults`], [`render::to_dot`] and [`render::stylize`],
//!   each usable on its own
//! - **DOT output**: a small document model ([`dot::DotDocument`]) that prints
//!   itself as DOT text
//!
//! ## Example
//!
//! ```rust
//! use graphedes_formalism::InputFormat;
//! use graphedes_graph::{convert, render, ConvertConfig, RenderConfig};
//!
//! let eds = InputFormat::Eds.decode("{x4:\n x4:_dog_n_1<4:7>[]\n}").unwrap();
//! let graph = convert(&eds, &ConvertConfig::default()).unwrap();
//! assert_eq!(graph.node_count(), 1);
//!
//! let doc = render(graph, &RenderConfig::default()).unwrap();
//! let text = doc.to_string();
//! assert!(text.starts_with("strict digraph {"));
//! assert!(text.contains(r#"color="blue""#));
//! ```

mod builder;
pub mod dot;
mod edges;
mod error;
mod nodes;
pub mod render;

pub use builder::{convert, ConvertConfig, EdsGraphBuilder};
pub use dot::DotDocument;
pub use edges::{EdgeRole, EdgeRoleError, EdsEdge, GraphEdge};
pub use error::{GraphBuildError, RenderError};
pub use nodes::{EdsNode, GraphNode, NodeRole, Span};
pub use render::{render, RenderConfig};

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Ordered string attributes of a node, edge or graph.
pub type Attrs = IndexMap<String, String>;

/// An attributed directed graph built from an EDS.
///
/// Nodes are keyed by their EDS id. There is at most one edge per ordered
/// pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct EdsGraph {
    /// The underlying directed graph
    graph: DiGraph<GraphNode, GraphEdge>,

    /// Index of nodes by id, in insertion order
    ids: IndexMap<String, NodeIndex>,

    /// Graph-level attributes
    attrs: Attrs,
}

impl EdsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn inner(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }

    /// Look up a node index by id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index(id).and_then(|ix| self.graph.node_weight(ix))
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        let ix = self.node_index(id)?;
        self.graph.node_weight_mut(ix)
    }

    /// Get the edge from `source` to `target`.
    pub fn edge(&self, source: &str, target: &str) -> Option<&GraphEdge> {
        self.edge_index(source, target)
            .and_then(|ix| self.graph.edge_weight(ix))
    }

    pub fn edge_mut(&mut self, source: &str, target: &str) -> Option<&mut GraphEdge> {
        let ix = self.edge_index(source, target)?;
        self.graph.edge_weight_mut(ix)
    }

    fn edge_index(&self, source: &str, target: &str) -> Option<EdgeIndex> {
        let a = self.node_index(source)?;
        let b = self.node_index(target)?;
        self.graph.find_edge(a, b)
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Mutable iteration over nodes in insertion order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut GraphNode> {
        self.graph.node_weights_mut()
    }

    /// Iterate over edges as `(source id, target id, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &GraphEdge)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight(),
            )
        })
    }

    /// Mutable iteration over edge weights, paired with their endpoint ids.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = (String, String, &mut GraphEdge)> {
        let ends: Vec<(String, String)> = self
            .graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].id.clone(),
                    self.graph[e.target()].id.clone(),
                )
            })
            .collect();
        ends.into_iter()
            .zip(self.graph.edge_weights_mut())
            .map(|((source, target), weight)| (source, target, weight))
    }

    /// Add a node, or update the node with the same id.
    ///
    /// On update the metadata is replaced when the new node carries some, and
    /// the new attributes are merged over the existing ones.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(ix) = self.node_index(&node.id) {
            let existing = &mut self.graph[ix];
            if node.meta.is_some() {
                existing.meta = node.meta;
            }
            if node.raw.is_some() {
                existing.raw = node.raw;
            }
            existing.attrs.extend(node.attrs);
            return ix;
        }
        let id = node.id.clone();
        let ix = self.graph.add_node(node);
        self.ids.insert(id, ix);
        ix
    }

    /// Add an edge between two existing nodes, replacing any edge already
    /// present between them. Returns `None` if either endpoint is unknown.
    pub fn add_edge(&mut self, source: &str, target: &str, edge: GraphEdge) -> Option<EdgeIndex> {
        let a = self.node_index(source)?;
        let b = self.node_index(target)?;
        Some(self.graph.update_edge(a, b, edge))
    }

    /// Graph-level attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// Whether any node has an edge to itself.
    pub fn has_self_loops(&self) -> bool {
        self.graph.edge_references().any(|e| e.source() == e.target())
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Split into nodes and edges, consuming the graph.
    pub(crate) fn into_parts(self) -> (Vec<GraphNode>, Vec<(String, String, GraphEdge)>, Attrs) {
        let (nodes, edges) = self.graph.into_nodes_edges();
        let edges = edges
            .into_iter()
            .map(|e| {
                let source = nodes[e.source().index()].weight.id.clone();
                let target = nodes[e.target().index()].weight.id.clone();
                (source, target, e.weight)
            })
            .collect();
        let nodes = nodes.into_iter().map(|n| n.weight).collect();
        (nodes, edges, self.attrs)
    }
}
