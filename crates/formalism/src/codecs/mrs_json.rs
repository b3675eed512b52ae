//! MRS JSON codec.
//!
//! ```json
//! {
//!   "top": "h0", "index": "e2",
//!   "relations": [
//!     {"label": "h1", "predicate": "_bark_v_1", "lnk": {"from": 8, "to": 14},
//!      "arguments": {"ARG0": "e2", "ARG1": "x3"}}
//!   ],
//!   "constraints": [{"relation": "qeq", "high": "h0", "low": "h1"}],
//!   "variables": {"e2": {"type": "e", "properties": {"TENSE": "pres"}}}
//! }
//! ```
//!
//! Constraints with `high`/`low` become handle constraints; those with
//! `left`/`right` become individual constraints.

use super::LnkRepr;
use crate::error::FormalismError;
use crate::mrs::{Ep, HandleConstraint, IndividualConstraint, Mrs};
use crate::predicate;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MrsRepr {
    top: Option<String>,
    index: Option<String>,
    #[serde(default)]
    relations: Vec<RelationRepr>,
    #[serde(default)]
    constraints: Vec<ConstraintRepr>,
    #[serde(default)]
    variables: IndexMap<String, VariableRepr>,
    lnk: Option<LnkRepr>,
    surface: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelationRepr {
    label: String,
    predicate: String,
    lnk: Option<LnkRepr>,
    surface: Option<String>,
    #[serde(default)]
    arguments: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConstraintRepr {
    Handle {
        relation: String,
        high: String,
        low: String,
    },
    Individual {
        relation: String,
        left: String,
        right: String,
    },
}

#[derive(Debug, Deserialize)]
struct VariableRepr {
    #[serde(default)]
    properties: IndexMap<String, String>,
}

/// Decode one MRS from its JSON form.
pub fn decode(source: &str) -> Result<Mrs, FormalismError> {
    let repr: MrsRepr = serde_json::from_str(source).map_err(|source| FormalismError::Json {
        format: "mrs_json",
        source,
    })?;

    let mut mrs = Mrs {
        top: repr.top,
        index: repr.index,
        lnk: repr.lnk.map(Into::into).unwrap_or_default(),
        surface: repr.surface,
        ..Mrs::default()
    };

    mrs.rels = repr
        .relations
        .into_iter()
        .map(|rel| {
            let mut ep = Ep::new(predicate::normalize(&rel.predicate), rel.label);
            ep.lnk = rel.lnk.map(Into::into).unwrap_or_default();
            ep.surface = rel.surface;
            ep.args = rel.arguments;
            ep
        })
        .collect();

    for constraint in repr.constraints {
        match constraint {
            ConstraintRepr::Handle {
                relation,
                high,
                low,
            } => mrs.hcons.push(HandleConstraint {
                hi: high,
                relation,
                lo: low,
            }),
            ConstraintRepr::Individual {
                relation,
                left,
                right,
            } => mrs.icons.push(IndividualConstraint {
                left,
                relation,
                right,
            }),
        }
    }

    for (var, v) in repr.variables {
        mrs.add_properties(&var, v.properties);
    }

    Ok(mrs)
}
