//! Metadata stripping and default-style entries.

use crate::nodes::GraphNode;
use crate::EdsGraph;

/// Name of the default node-style entry.
pub const DEFAULT_NODE: &str = "node";
/// Name of the default edge-style entry.
pub const DEFAULT_EDGE: &str = "edge";

/// Drop the EDS metadata (and any raw record) from every node and edge,
/// leaving only presentation attributes. Running it twice changes nothing.
pub fn clean(mut graph: EdsGraph) -> EdsGraph {
    for node in graph.nodes_mut() {
        node.meta = None;
        node.raw = None;
    }
    for (_, _, edge) in graph.edges_mut() {
        edge.meta = None;
    }
    graph
}

/// Add the `node` and `edge` default-style entries.
///
/// The entries come first in node order. If the graph already has a node with
/// one of these names, its attributes are kept.
pub fn inject_defaults(graph: EdsGraph) -> EdsGraph {
    let mut out = EdsGraph::new();
    out.add_node(GraphNode::bare(DEFAULT_NODE));
    out.add_node(GraphNode::bare(DEFAULT_EDGE));

    let (nodes, edges, attrs) = graph.into_parts();
    *out.attrs_mut() = attrs;
    for node in nodes {
        out.add_node(node);
    }
    for (source, target, edge) in edges {
        out.add_edge(&source, &target, edge);
    }
    out
}
