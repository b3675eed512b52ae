//! MRS to EDS conversion.
//!
//! Every EP becomes one EDS node. A non-quantifier EP is identified by its
//! intrinsic variable; quantifiers get generated ids (`_1`, `_2`, ...) and a
//! `BV` edge to the EP they quantify. Scopal arguments (handles) point at the
//! representative EP of the scope they select.

use crate::eds::{Eds, Node};
use crate::mrs::{Ep, Mrs, BOUND_VARIABLE_ROLE, CONSTANT_ROLE, INTRINSIC_ROLE};
use crate::{predicate, variable};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Derive the EDS of an MRS.
pub fn eds_from_mrs(mrs: &Mrs) -> Eds {
    let ivmap = intrinsic_map(mrs);
    let reps = representatives(mrs);
    let qeqs: HashMap<&str, &str> = mrs
        .hcons
        .iter()
        .filter(|hc| hc.relation == "qeq")
        .map(|hc| (hc.hi.as_str(), hc.lo.as_str()))
        .collect();
    let ids = node_ids(mrs);

    // Resolve an argument value to the index of the EP it points at.
    let resolve = |value: &str| -> Option<usize> {
        ivmap
            .get(value)
            .copied()
            .or_else(|| reps.get(value).copied())
            .or_else(|| qeqs.get(value).and_then(|lo| reps.get(lo).copied()))
    };

    let top = mrs
        .top
        .as_deref()
        .and_then(|top| {
            qeqs.get(top)
                .and_then(|lo| reps.get(lo).copied())
                .or_else(|| reps.get(top).copied())
        })
        .or_else(|| mrs.index.as_deref().and_then(|ix| ivmap.get(ix).copied()))
        .map(|i| ids[i].clone());

    let nodes = mrs
        .rels
        .iter()
        .enumerate()
        .map(|(i, ep)| {
            let mut node = Node::new(ids[i].clone(), ep.predicate.clone());
            node.lnk = ep.lnk.clone();
            node.carg = ep.carg().map(str::to_string);

            if ep.is_quantifier() {
                if let Some(target) = ep.iv().and_then(|iv| ivmap.get(iv)) {
                    node.edges
                        .insert(BOUND_VARIABLE_ROLE.to_string(), ids[*target].clone());
                }
                return node;
            }

            if let Some(iv) = ep.iv() {
                node.node_type = variable::sort(iv).map(str::to_string);
                node.properties = Some(mrs.properties(iv).cloned().unwrap_or_default());
            }

            for (role, value) in &ep.args {
                if role == INTRINSIC_ROLE || role == CONSTANT_ROLE {
                    continue;
                }
                match resolve(value) {
                    Some(target) => {
                        node.edges.insert(role.clone(), ids[target].clone());
                    }
                    None => debug!(
                        predicate = %ep.predicate,
                        role = %role,
                        value = %value,
                        "dropping argument with no target EP"
                    ),
                }
            }
            node
        })
        .collect();

    Eds::new(top, nodes)
}

/// Map intrinsic variables to the first non-quantifier EP that introduces them.
fn intrinsic_map(mrs: &Mrs) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for (i, ep) in mrs.rels.iter().enumerate() {
        if ep.is_quantifier() {
            continue;
        }
        if let Some(iv) = ep.iv() {
            map.entry(iv).or_insert(i);
        }
    }
    map
}

/// Pick the representative EP of every scope label.
fn representatives(mrs: &Mrs) -> HashMap<&str, usize> {
    let mut scopes: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (i, ep) in mrs.rels.iter().enumerate() {
        scopes.entry(ep.label.as_str()).or_default().push(i);
    }

    scopes
        .into_iter()
        .filter_map(|(label, members)| {
            // Intrinsic variables used as a plain argument by a sibling EP.
            let args: HashSet<&str> = members
                .iter()
                .flat_map(|&i| mrs.rels[i].args.iter())
                .filter(|(role, _)| *role != INTRINSIC_ROLE && *role != CONSTANT_ROLE)
                .map(|(_, value)| value.as_str())
                .collect();

            let mut candidates: Vec<usize> = members
                .iter()
                .copied()
                .filter(|&i| mrs.rels[i].iv().is_none_or(|iv| !args.contains(iv)))
                .collect();
            if candidates.is_empty() {
                candidates = members;
            }
            candidates.sort_by_key(|&i| priority(&mrs.rels[i]));
            candidates.first().map(|&i| (label, i))
        })
        .collect()
}

/// Events before other non-quantifiers before quantifiers; surface predicates
/// before abstract ones of the same rank.
fn priority(ep: &Ep) -> u8 {
    let rank = if ep.is_quantifier() {
        2
    } else if ep.iv().and_then(variable::sort) == Some("e") {
        0
    } else {
        1
    };
    rank * 2 + u8::from(predicate::is_abstract(&ep.predicate))
}

fn node_ids(mrs: &Mrs) -> Vec<String> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut counter = 0;
    mrs.rels
        .iter()
        .map(|ep| match ep.iv() {
            Some(iv) if !ep.is_quantifier() && used.insert(iv) => iv.to_string(),
            _ => {
                counter += 1;
                format!("_{}", counter)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lnk::Lnk;
    use crate::mrs::HandleConstraint;
    use pretty_assertions::assert_eq;

    /// "The dog barks."
    fn dog_barks() -> Mrs {
        let mut the = Ep::new("_the_q", "h4")
            .with_arg("ARG0", "x3")
            .with_arg("RSTR", "h5")
            .with_arg("BODY", "h6");
        the.lnk = Lnk::span(0, 3);
        let mut dog = Ep::new("_dog_n_1", "h7").with_arg("ARG0", "x3");
        dog.lnk = Lnk::span(4, 7);
        let mut bark = Ep::new("_bark_v_1", "h1")
            .with_arg("ARG0", "e2")
            .with_arg("ARG1", "x3");
        bark.lnk = Lnk::span(8, 14);

        let mut mrs = Mrs {
            top: Some("h0".to_string()),
            index: Some("e2".to_string()),
            rels: vec![the, dog, bark],
            hcons: vec![HandleConstraint::qeq("h0", "h1"), HandleConstraint::qeq("h5", "h7")],
            ..Mrs::default()
        };
        mrs.add_properties("x3", [("NUM".to_string(), "sg".to_string())]);
        mrs
    }

    #[test]
    fn test_dog_barks() {
        let eds = eds_from_mrs(&dog_barks());
        assert_eq!(eds.top.as_deref(), Some("e2"));

        let ids: Vec<&str> = eds.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["_1", "x3", "e2"]);

        let edges: Vec<_> = eds.edges().collect();
        assert_eq!(edges, vec![("_1", "BV", "x3"), ("e2", "ARG1", "x3")]);
    }

    #[test]
    fn test_sorts_and_properties() {
        let eds = eds_from_mrs(&dog_barks());
        let the = eds.node("_1").unwrap();
        assert_eq!(the.node_type, None);
        assert_eq!(the.properties, None);

        let dog = eds.node("x3").unwrap();
        assert_eq!(dog.node_type.as_deref(), Some("x"));
        assert_eq!(
            dog.properties.as_ref().and_then(|p| p.get("NUM")).map(String::as_str),
            Some("sg")
        );
        assert_eq!(dog.lnk, Lnk::span(4, 7));

        let bark = eds.node("e2").unwrap();
        assert_eq!(bark.properties.as_ref().map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_scopal_argument_points_at_representative() {
        // "Kim thinks it rains": ARG2 of think selects the rain scope via qeq.
        let think = Ep::new("_think_v_1", "h1")
            .with_arg("ARG0", "e2")
            .with_arg("ARG1", "x3")
            .with_arg("ARG2", "h8");
        let kim = Ep::new("named", "h4").with_arg("ARG0", "x3").with_arg("CARG", "Kim");
        let rain = Ep::new("_rain_v_1", "h9").with_arg("ARG0", "e10");
        let mrs = Mrs {
            top: Some("h0".to_string()),
            index: Some("e2".to_string()),
            rels: vec![think, kim, rain],
            hcons: vec![HandleConstraint::qeq("h0", "h1"), HandleConstraint::qeq("h8", "h9")],
            ..Mrs::default()
        };

        let eds = eds_from_mrs(&mrs);
        let edges: Vec<_> = eds.edges().collect();
        assert_eq!(edges, vec![("e2", "ARG1", "x3"), ("e2", "ARG2", "e10")]);
        assert_eq!(eds.node("x3").unwrap().carg.as_deref(), Some("Kim"));
    }

    #[test]
    fn test_representative_prefers_head_of_scope() {
        // "big dog": the adjective's ARG1 is the noun's variable, so the noun
        // is not the head; the adjective (an event) is.
        let big = Ep::new("_big_a_1", "h7")
            .with_arg("ARG0", "e8")
            .with_arg("ARG1", "x3");
        let dog = Ep::new("_dog_n_1", "h7").with_arg("ARG0", "x3");
        let mrs = Mrs {
            top: Some("h0".to_string()),
            rels: vec![dog, big],
            hcons: vec![HandleConstraint::qeq("h0", "h7")],
            ..Mrs::default()
        };
        assert_eq!(eds_from_mrs(&mrs).top.as_deref(), Some("e8"));
    }

    #[test]
    fn test_unresolvable_argument_is_dropped() {
        let rain = Ep::new("_rain_v_1", "h1")
            .with_arg("ARG0", "e2")
            .with_arg("ARG1", "i3");
        let mrs = Mrs {
            index: Some("e2".to_string()),
            rels: vec![rain],
            ..Mrs::default()
        };
        let eds = eds_from_mrs(&mrs);
        assert_eq!(eds.top.as_deref(), Some("e2"));
        assert_eq!(eds.edges().count(), 0);
    }

    #[test]
    fn test_repeated_intrinsic_variable_gets_fresh_id() {
        let a = Ep::new("_a_n_1", "h1").with_arg("ARG0", "x3");
        let b = Ep::new("compound", "h1").with_arg("ARG0", "x3");
        let eds = eds_from_mrs(&Mrs {
            rels: vec![a, b],
            ..Mrs::default()
        });
        let ids: Vec<&str> = eds.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["x3", "_1"]);
    }
}
