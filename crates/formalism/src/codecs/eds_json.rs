//! EDS JSON codec.
//!
//! ```json
//! {
//!   "top": "e2",
//!   "nodes": {
//!     "x4": {"label": "_dog_n_1", "lnk": {"from": 4, "to": 7},
//!            "type": "x", "properties": {"NUM": "sg"}, "edges": {}}
//!   }
//! }
//! ```
//!
//! Node order follows the order of the `nodes` object.

use super::LnkRepr;
use crate::eds::{Eds, Node};
use crate::error::FormalismError;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EdsRepr {
    top: Option<String>,
    #[serde(default)]
    nodes: IndexMap<String, NodeRepr>,
}

#[derive(Debug, Deserialize)]
struct NodeRepr {
    label: String,
    lnk: Option<LnkRepr>,
    #[serde(rename = "type")]
    sort: Option<String>,
    properties: Option<IndexMap<String, String>>,
    #[serde(default)]
    edges: IndexMap<String, String>,
    carg: Option<String>,
}

/// Decode one EDS from its JSON form.
pub fn decode(source: &str) -> Result<Eds, FormalismError> {
    let repr: EdsRepr = serde_json::from_str(source).map_err(|source| FormalismError::Json {
        format: "eds_json",
        source,
    })?;

    let nodes = repr
        .nodes
        .into_iter()
        .map(|(id, n)| Node {
            id,
            predicate: n.label,
            node_type: n.sort,
            edges: n.edges,
            properties: n.properties,
            carg: n.carg,
            lnk: n.lnk.map(Into::into).unwrap_or_default(),
        })
        .collect();

    Ok(Eds::new(repr.top, nodes))
}
