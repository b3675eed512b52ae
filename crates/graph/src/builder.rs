//! Builder for constructing an EdsGraph from an EDS.

use crate::edges::{EdgeRole, EdsEdge, GraphEdge};
use crate::error::GraphBuildError;
use crate::nodes::{EdsNode, GraphNode};
use crate::EdsGraph;
use graphedes_formalism::Eds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for [`convert`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Keep a copy of each input record on [`GraphNode::raw`].
    pub include_raw_node: bool,

    /// Create a bare node for an edge endpoint that is not in the input,
    /// instead of failing with [`GraphBuildError::UnknownNode`].
    pub allow_dangling_edges: bool,
}

/// Convert an EDS into an [`EdsGraph`].
pub fn convert(eds: &Eds, config: &ConvertConfig) -> Result<EdsGraph, GraphBuildError> {
    EdsGraphBuilder::new(config.clone()).build(eds)
}

/// Builder for constructing a graph from an EDS.
pub struct EdsGraphBuilder {
    graph: EdsGraph,
    config: ConvertConfig,
}

impl EdsGraphBuilder {
    /// Create a new builder.
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            graph: EdsGraph::new(),
            config,
        }
    }

    /// Build the graph.
    pub fn build(mut self, eds: &Eds) -> Result<EdsGraph, GraphBuildError> {
        // Phase 1: nodes
        self.add_nodes(eds);

        // Phase 2: edges
        self.add_edges(eds)?;

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "converted EDS"
        );
        Ok(self.graph)
    }

    fn add_nodes(&mut self, eds: &Eds) {
        for record in &eds.nodes {
            let mut node = GraphNode::with_meta(record.id.clone(), EdsNode::from(record));
            if self.config.include_raw_node {
                node.raw = Some(record.clone());
            }
            self.graph.add_node(node);
        }
    }

    fn add_edges(&mut self, eds: &Eds) -> Result<(), GraphBuildError> {
        for (source, role, target) in eds.edges() {
            let role: EdgeRole = role
                .parse()
                .map_err(|error| GraphBuildError::InvalidEdgeRole {
                    source_id: source.to_string(),
                    target: target.to_string(),
                    error,
                })?;

            for end in [source, target] {
                if self.graph.node_index(end).is_some() {
                    continue;
                }
                if !self.config.allow_dangling_edges {
                    return Err(GraphBuildError::UnknownNode {
                        source_id: source.to_string(),
                        target: target.to_string(),
                        missing: end.to_string(),
                    });
                }
                debug!(id = end, "creating node for dangling edge endpoint");
                self.graph.add_node(GraphNode::bare(end));
            }

            self.graph
                .add_edge(source, target, GraphEdge::new(EdsEdge { role }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeRole;
    use graphedes_formalism::eds::Node;
    use graphedes_formalism::Lnk;
    use pretty_assertions::assert_eq;

    fn node(id: &str, predicate: &str, sort: Option<&str>) -> Node {
        let mut node = Node::new(id, predicate);
        node.node_type = sort.map(str::to_string);
        node
    }

    fn dog_barks() -> Eds {
        let mut the = node("_1", "_the_q", None);
        the.edges.insert("BV".into(), "x4".into());
        let mut dog = node("x4", "_dog_n_1", Some("x"));
        dog.lnk = Lnk::span(4, 7);
        dog.properties = Some([("NUM".to_string(), "sg".to_string())].into_iter().collect());
        let mut bark = node("e2", "_bark_v_1", Some("e"));
        bark.edges.insert("ARG1".into(), "x4".into());
        Eds::new(Some("e2".into()), vec![the, dog, bark])
    }

    #[test]
    fn test_counts_preserved() {
        let graph = convert(&dog_barks(), &ConvertConfig::default()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_node_metadata() {
        let graph = convert(&dog_barks(), &ConvertConfig::default()).unwrap();
        let dog = graph.node("x4").and_then(|n| n.meta.as_ref()).unwrap();
        assert_eq!(dog.predicate, "_dog_n_1");
        assert_eq!(dog.span, (4, 7));
        assert_eq!(dog.role, NodeRole::Variable);
        assert_eq!(dog.properties.len(), 1);

        let the = graph.node("_1").and_then(|n| n.meta.as_ref()).unwrap();
        assert_eq!(the.role, NodeRole::Quantifier);
        assert_eq!(the.span, (-1, -1));
        assert!(the.properties.is_empty());
        assert!(graph.node("_1").unwrap().raw.is_none());
    }

    #[test]
    fn test_edge_metadata() {
        let graph = convert(&dog_barks(), &ConvertConfig::default()).unwrap();
        let roles: Vec<(&str, &str, EdgeRole)> = graph
            .edges()
            .map(|(s, t, e)| (s, t, e.meta.map(|m| m.role).unwrap()))
            .collect();
        assert_eq!(
            roles,
            vec![("_1", "x4", EdgeRole::Bv), ("e2", "x4", EdgeRole::Arg(1))]
        );
    }

    #[test]
    fn test_include_raw_node() {
        let eds = dog_barks();
        let config = ConvertConfig {
            include_raw_node: true,
            ..ConvertConfig::default()
        };
        let graph = convert(&eds, &config).unwrap();
        assert_eq!(graph.node("x4").unwrap().raw.as_ref(), eds.node("x4"));
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        let mut conj = node("e2", "_and_c", Some("e"));
        conj.edges.insert("L-INDEX".into(), "x4".into());
        conj.edges.insert("ARG1".into(), "x4".into());
        let eds = Eds::new(None, vec![conj, node("x4", "_dog_n_1", Some("x"))]);

        let graph = convert(&eds, &ConvertConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.edge("e2", "x4").and_then(|e| e.meta).map(|m| m.role),
            Some(EdgeRole::Arg(1))
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut q = node("_1", "_the_q", None);
        q.edges.insert("RSTR".into(), "x4".into());
        let eds = Eds::new(None, vec![q, node("x4", "_dog_n_1", Some("x"))]);
        let err = convert(&eds, &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, GraphBuildError::InvalidEdgeRole { .. }));
    }

    #[test]
    fn test_dangling_edge_rejected_by_default() {
        let mut bark = node("e2", "_bark_v_1", Some("e"));
        bark.edges.insert("ARG1".into(), "x9".into());
        let eds = Eds::new(None, vec![bark]);
        let err = convert(&eds, &ConvertConfig::default()).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::UnknownNode {
                source_id: "e2".into(),
                target: "x9".into(),
                missing: "x9".into(),
            }
        );
    }

    #[test]
    fn test_dangling_edge_creates_bare_node() {
        let mut bark = node("e2", "_bark_v_1", Some("e"));
        bark.edges.insert("ARG1".into(), "x9".into());
        let eds = Eds::new(None, vec![bark]);
        let config = ConvertConfig {
            allow_dangling_edges: true,
            ..ConvertConfig::default()
        };
        let graph = convert(&eds, &config).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.node("x9").unwrap().meta.is_none());
        assert_eq!(graph.edge_count(), 1);
    }
}
