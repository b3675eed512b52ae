//! Presentation attributes: labels and colors.

use crate::error::RenderError;
use crate::nodes::EdsNode;
use crate::EdsGraph;
use html_escape::encode_quoted_attribute as escape;

/// Set the `label` attribute of every node and edge.
///
/// A node label is an HTML-like table: the predicate, the span as
/// `<start,end>`, then one row per property. An edge label is the quoted role
/// name. All text is markup-escaped.
pub fn label(mut graph: EdsGraph) -> Result<EdsGraph, RenderError> {
    for node in graph.nodes_mut() {
        let meta = node
            .meta
            .as_ref()
            .ok_or_else(|| RenderError::MissingNodeMetadata {
                id: node.id.clone(),
            })?;
        let label = node_label(meta);
        node.attrs.insert("label".to_string(), label);
    }

    for (source, target, edge) in graph.edges_mut() {
        let meta = edge.meta.ok_or(RenderError::MissingEdgeMetadata {
            source_id: source,
            target,
        })?;
        let label = format!("\"{}\"", escape(&meta.role.to_string()));
        edge.attrs.insert("label".to_string(), label);
    }

    Ok(graph)
}

fn node_label(meta: &EdsNode) -> String {
    let span = format!("<{},{}>", meta.span.0, meta.span.1);
    let rows: String = meta
        .properties
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<tr><td sides="l" border="1" align="left">{}</td><td sides="r" border="1" align="left">{}</td></tr>"#,
                escape(key),
                escape(value)
            )
        })
        .collect();

    format!(
        r#"<<table align="center" border="0" cellspacing="0"><tr><td colspan="2">{}</td></tr><tr><td colspan="2">{}</td></tr>{}</table>>"#,
        escape(&meta.predicate),
        escape(&span),
        rows
    )
}

/// Set the `color` attribute of every node from its role.
pub fn color(mut graph: EdsGraph) -> Result<EdsGraph, RenderError> {
    for node in graph.nodes_mut() {
        let meta = node
            .meta
            .as_ref()
            .ok_or_else(|| RenderError::MissingNodeMetadata {
                id: node.id.clone(),
            })?;
        let color = meta.role.color();
        node.attrs.insert("color".to_string(), color.to_string());
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{EdgeRole, EdsEdge, GraphEdge};
    use crate::nodes::{GraphNode, NodeRole};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn meta(predicate: &str, role: NodeRole) -> EdsNode {
        EdsNode {
            predicate: predicate.to_string(),
            span: (4, 7),
            properties: IndexMap::new(),
            constant: None,
            role,
        }
    }

    #[test]
    fn test_node_label_layout() {
        let mut dog = meta("_dog_n_1", NodeRole::Variable);
        dog.properties.insert("NUM".into(), "sg".into());
        assert_eq!(
            node_label(&dog),
            concat!(
                r#"<<table align="center" border="0" cellspacing="0">"#,
                r#"<tr><td colspan="2">_dog_n_1</td></tr>"#,
                r#"<tr><td colspan="2">&lt;4,7&gt;</td></tr>"#,
                r#"<tr><td sides="l" border="1" align="left">NUM</td>"#,
                r#"<td sides="r" border="1" align="left">sg</td></tr>"#,
                "</table>>"
            )
        );
    }

    #[test]
    fn test_label_escapes_markup() {
        let mut graph = EdsGraph::new();
        graph.add_node(GraphNode::with_meta(
            "x1",
            meta(r#"_a<b>&"c"_n"#, NodeRole::Variable),
        ));
        let graph = label(graph).unwrap();
        let text = &graph.node("x1").unwrap().attrs["label"];
        let inner = text
            .strip_prefix(r#"<<table align="center" border="0" cellspacing="0">"#)
            .and_then(|t| t.strip_suffix("</table>>"))
            .unwrap();
        let cell = inner
            .strip_prefix(r#"<tr><td colspan="2">"#)
            .and_then(|t| t.split("</td>").next())
            .unwrap();
        assert_eq!(cell, "_a&lt;b&gt;&amp;&quot;c&quot;_n");
    }

    #[test]
    fn test_edge_label_is_quoted_role() {
        let mut graph = EdsGraph::new();
        graph.add_node(GraphNode::with_meta("e2", meta("_and_c", NodeRole::Event)));
        graph.add_node(GraphNode::with_meta("x4", meta("_dog_n_1", NodeRole::Variable)));
        graph.add_edge("e2", "x4", GraphEdge::new(EdsEdge { role: EdgeRole::LIndex }));
        let graph = label(graph).unwrap();
        assert_eq!(graph.edge("e2", "x4").unwrap().attrs["label"], "\"L-INDEX\"");
    }

    #[test]
    fn test_label_requires_metadata() {
        let mut graph = EdsGraph::new();
        graph.add_node(GraphNode::bare("x9"));
        assert_eq!(
            label(graph).unwrap_err(),
            RenderError::MissingNodeMetadata { id: "x9".into() }
        );
    }

    #[test]
    fn test_label_requires_edge_metadata() {
        let mut graph = EdsGraph::new();
        graph.add_node(GraphNode::with_meta("e2", meta("_bark_v_1", NodeRole::Event)));
        graph.add_node(GraphNode::with_meta("x4", meta("_dog_n_1", NodeRole::Variable)));
        graph.add_edge("e2", "x4", GraphEdge::default());
        assert_eq!(
            label(graph).unwrap_err(),
            RenderError::MissingEdgeMetadata {
                source_id: "e2".into(),
                target: "x4".into(),
            }
        );
    }

    #[test]
    fn test_color_by_role() {
        let mut graph = EdsGraph::new();
        graph.add_node(GraphNode::with_meta("e2", meta("_bark_v_1", NodeRole::Event)));
        graph.add_node(GraphNode::with_meta("x4", meta("_dog_n_1", NodeRole::Variable)));
        graph.add_node(GraphNode::with_meta("_1", meta("_the_q", NodeRole::Quantifier)));
        graph.add_node(GraphNode::with_meta("i5", meta("_p", NodeRole::Other("i".into()))));
        let graph = color(graph).unwrap();
        let colors: Vec<&str> = graph.nodes().map(|n| n.attrs["color"].as_str()).collect();
        assert_eq!(colors, vec!["red", "black", "blue", "blue"]);
    }
}
