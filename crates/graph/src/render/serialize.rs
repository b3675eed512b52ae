//! Hand-off to the DOT document and font styling.

use super::cleanup::{DEFAULT_EDGE, DEFAULT_NODE};
use crate::dot::{DotDocument, DotEdge, DotNode};
use crate::error::RenderError;
use crate::EdsGraph;

/// Build a DOT document from a cleaned graph.
///
/// Fails if any node or edge still carries EDS metadata. The document is
/// `strict` unless the graph has a self loop.
pub fn to_dot(graph: &EdsGraph) -> Result<DotDocument, RenderError> {
    let mut doc = DotDocument::new(!graph.has_self_loops());
    doc.attrs = graph.attrs().clone();

    for node in graph.nodes() {
        if node.has_metadata() {
            return Err(RenderError::UnstrippedMetadata {
                id: node.id.clone(),
            });
        }
        doc.add_node(DotNode {
            name: node.id.clone(),
            attrs: node.attrs.clone(),
        });
    }

    for (source, target, edge) in graph.edges() {
        if edge.meta.is_some() {
            return Err(RenderError::UnstrippedMetadata {
                id: format!("{} -> {}", source, target),
            });
        }
        let mut dot_edge = DotEdge::new(source, target);
        dot_edge.attrs = edge.attrs.clone();
        doc.add_edge(dot_edge);
    }

    Ok(doc)
}

/// Apply global font styling to a document.
///
/// With a font, `fontname` is set on the first `node` and `edge` entries
/// (added if missing). Every node with a `color` gets the same `fontcolor`.
pub fn stylize(mut doc: DotDocument, font: Option<&str>) -> DotDocument {
    if let Some(font) = font {
        doc.get_or_insert_node(DEFAULT_NODE).set("fontname", font);
        doc.get_or_insert_node(DEFAULT_EDGE).set("fontname", font);
    }

    for node in doc.nodes_mut() {
        if let Some(color) = node.get("color").map(str::to_string) {
            node.set("fontcolor", color);
        }
    }

    doc
}
