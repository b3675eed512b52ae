//! Native EDS text codec.
//!
//! ```text
//! {e2:
//!  _1:_the_q<0:3>[BV x4]
//!  x4:_dog_n_1<4:7>{x PERS 3, NUM sg}[]
//!  e2:_bark_v_1<8:14>{e SF prop, TENSE pres}[ARG1 x4]
//! }
//! ```
//!
//! Each node is `ID:PREDICATE`, then an optional alignment, an optional
//! constant in `("...")`, an optional `{SORT PROP VAL, ...}` block and the
//! `[ROLE TARGET, ...]` edge list. The top id before the first node is
//! optional, as is a leading `|` on node lines.

use super::primitives::{lnk, string_lit, symbol, Extra};
use crate::eds::{Eds, Node};
use crate::error::FormalismError;
use chumsky::prelude::*;
use indexmap::IndexMap;

/// Decode one EDS from its native text form.
pub fn decode(source: &str) -> Result<Eds, FormalismError> {
    eds()
        .parse(source)
        .into_result()
        .map_err(|errs| super::syntax_error("eds", source, errs))
}

/// Parse a `{SORT PROP VAL, ...}` block.
fn properties<'src>(
) -> impl Parser<'src, &'src str, (Option<String>, IndexMap<String, String>), Extra<'src>> + Clone
{
    let pair = symbol().padded().then(symbol().padded());

    symbol()
        .padded()
        .or_not()
        .then(
            pair.separated_by(just(','))
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .padded()
        .delimited_by(just('{'), just('}'))
        .map(|(sort, pairs)| {
            let props = pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (sort.map(str::to_string), props)
        })
}

/// Parse a `[ROLE TARGET, ...]` edge list.
fn edges<'src>() -> impl Parser<'src, &'src str, IndexMap<String, String>, Extra<'src>> + Clone {
    symbol()
        .padded()
        .then(symbol().padded())
        .separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
        .delimited_by(just('['), just(']'))
        .map(|pairs| {
            pairs
                .into_iter()
                .map(|(role, target)| (role.to_string(), target.to_string()))
                .collect()
        })
}

/// Parse one node line.
fn node<'src>() -> impl Parser<'src, &'src str, Node, Extra<'src>> + Clone {
    let predicate = choice((string_lit(), symbol().map(str::to_string)));
    let carg = string_lit()
        .padded()
        .delimited_by(just('('), just(')'));

    just('|')
        .padded()
        .or_not()
        .ignore_then(symbol())
        .then_ignore(just(':'))
        .then(predicate)
        .then(lnk().or_not())
        .then(carg.padded().or_not())
        .then(properties().padded().or_not())
        .then(edges().or_not())
        .padded()
        .map(|(((((id, predicate), lnk), carg), props), edges)| {
            let mut node = Node::new(id, predicate);
            node.lnk = lnk.unwrap_or_default();
            node.carg = carg;
            if let Some((sort, properties)) = props {
                node.node_type = sort;
                node.properties = Some(properties);
            }
            node.edges = edges.unwrap_or_default();
            node
        })
}

/// Parse a whole EDS.
fn eds<'src>() -> impl Parser<'src, &'src str, Eds, Extra<'src>> {
    // A node line also starts with `ID:`, so the top id only counts when
    // another node or the closing brace follows it.
    let node_head = just('|')
        .padded()
        .or_not()
        .then(symbol())
        .then(just(':'))
        .ignored();
    let top_id = symbol()
        .then_ignore(just(':'))
        .then_ignore(text::whitespace())
        .then_ignore(choice((node_head, just('}').ignored())).rewind())
        .map(|id: &str| Some(id.to_string()));
    let top = choice((top_id, just(':').to(None)))
        .or_not()
        .map(Option::flatten);

    top.padded()
        .then(node().repeated().collect::<Vec<_>>())
        .delimited_by(just('{'), just('}'))
        .padded()
        .then_ignore(end())
        .map(|(top, nodes)| Eds::new(top, nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lnk::Lnk;
    use pretty_assertions::assert_eq;

    const BARKS: &str = r#"{e2:
 _1:_the_q<0:3>[BV x4]
 x4:_dog_n_1<4:7>{x PERS 3, NUM sg, IND +}[]
 e2:_bark_v_1<8:14>{e SF prop, TENSE pres, MOOD indicative}[ARG1 x4]
}"#;

    #[test]
    fn test_decode_full_graph() {
        let eds = decode(BARKS).unwrap();
        assert_eq!(eds.top.as_deref(), Some("e2"));
        assert_eq!(eds.nodes.len(), 3);

        let dog = eds.node("x4").unwrap();
        assert_eq!(dog.predicate, "_dog_n_1");
        assert_eq!(dog.lnk, Lnk::span(4, 7));
        assert_eq!(dog.node_type.as_deref(), Some("x"));
        let props: Vec<(&str, &str)> = dog
            .properties
            .as_ref()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(props, vec![("PERS", "3"), ("NUM", "sg"), ("IND", "+")]);

        let edges: Vec<_> = eds.edges().collect();
        assert_eq!(edges, vec![("_1", "BV", "x4"), ("e2", "ARG1", "x4")]);
    }

    #[test]
    fn test_quantifier_has_no_sort() {
        let eds = decode(BARKS).unwrap();
        let the = eds.node("_1").unwrap();
        assert_eq!(the.node_type, None);
        assert_eq!(the.properties, None);
    }

    #[test]
    fn test_decode_without_top() {
        let eds = decode("{x4:_dog_n_1<4:7>[]}").unwrap();
        assert_eq!(eds.top, None);
        assert_eq!(eds.nodes.len(), 1);
        assert_eq!(eds.nodes[0].id, "x4");
    }

    #[test]
    fn test_decode_top_with_single_node() {
        let eds = decode("{x4:\n x4:_dog_n_1<4:7>[]\n}").unwrap();
        assert_eq!(eds.top.as_deref(), Some("x4"));
        assert_eq!(eds.nodes[0].cfrom(), 4);
        assert_eq!(eds.nodes[0].cto(), 7);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("{}").unwrap(), Eds::default());
        assert_eq!(decode("{e2:\n}").unwrap().top.as_deref(), Some("e2"));
    }

    #[test]
    fn test_decode_carg_and_fragment_marker() {
        let eds = decode("{e2:\n |x3:named<0:3>(\"Kim\"){x PERS 3}[]\n}").unwrap();
        let kim = &eds.nodes[0];
        assert_eq!(kim.carg.as_deref(), Some("Kim"));
        assert_eq!(kim.predicate, "named");
    }

    #[test]
    fn test_decode_unaligned_node() {
        let eds = decode("{e2:\n e2:_rain_v_1{e}[]\n}").unwrap();
        let rain = &eds.nodes[0];
        assert_eq!(rain.lnk, Lnk::None);
        assert_eq!(rain.cfrom(), -1);
        assert_eq!(rain.node_type.as_deref(), Some("e"));
    }

    #[test]
    fn test_decode_rejects_unclosed_edges() {
        let err = decode("{e2:\n e2:_bark_v_1<8:14>[ARG1 x4\n}").unwrap_err();
        assert!(!err.syntax_errors().is_empty());
    }
}
