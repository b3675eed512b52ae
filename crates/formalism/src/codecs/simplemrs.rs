//! SimpleMRS codec.
//!
//! ```text
//! [ LTOP: h0
//!   INDEX: e2 [ e SF: prop TENSE: pres ]
//!   RELS: < [ _the_q<0:3> LBL: h4 ARG0: x3 [ x PERS: 3 NUM: sg ] RSTR: h5 BODY: h6 ]
//!           [ _dog_n_1<4:7> LBL: h7 ARG0: x3 ]
//!           [ _bark_v_1<8:14> LBL: h1 ARG0: e2 ARG1: x3 ] >
//!   HCONS: < h0 qeq h1 h5 qeq h7 >
//!   ICONS: < > ]
//! ```
//!
//! Variable properties may be attached to any occurrence of a variable; they
//! are merged into [`Mrs::variables`]. Predicates are normalized with
//! [`predicate::normalize`](crate::predicate::normalize).

use super::primitives::{lnk, string_lit, symbol, Extra};
use crate::error::FormalismError;
use crate::lnk::Lnk;
use crate::mrs::{Ep, HandleConstraint, IndividualConstraint, Mrs};
use crate::predicate;
use chumsky::prelude::*;

/// A variable occurrence with the properties written next to it.
#[derive(Debug, Clone)]
struct Var<'src> {
    name: &'src str,
    props: Option<Vec<(&'src str, &'src str)>>,
}

/// An argument value: a variable or a constant string.
#[derive(Debug, Clone)]
enum Value<'src> {
    Str(String),
    Var(Var<'src>),
}

#[derive(Debug, Clone)]
struct EpParts<'src> {
    predicate: String,
    lnk: Option<Lnk>,
    surface: Option<String>,
    label: Var<'src>,
    args: Vec<(&'src str, Value<'src>)>,
}

#[derive(Debug, Clone)]
struct MrsParts<'src> {
    lnk: Option<Lnk>,
    surface: Option<String>,
    top: Option<Var<'src>>,
    index: Option<Var<'src>>,
    rels: Vec<EpParts<'src>>,
    hcons: Vec<(Var<'src>, &'src str, Var<'src>)>,
    icons: Vec<(Var<'src>, &'src str, Var<'src>)>,
}

/// Decode one MRS from SimpleMRS text.
pub fn decode(source: &str) -> Result<Mrs, FormalismError> {
    mrs()
        .padded()
        .then_ignore(end())
        .parse(source)
        .into_result()
        .map(assemble)
        .map_err(|errs| super::syntax_error("mrs", source, errs))
}

/// Decode ACE parser output: the first line is dropped and the first MRS
/// after it is read. Anything after that MRS is ignored.
pub fn decode_ace(source: &str) -> Result<Mrs, FormalismError> {
    match source.split_once('\n') {
        Some((_, rest)) if !rest.trim().is_empty() => {}
        _ => return Err(FormalismError::EmptyAceOutput),
    }

    none_of('\n')
        .repeated()
        .then(just('\n'))
        .ignore_then(mrs().padded())
        .then_ignore(any().repeated())
        .parse(source)
        .into_result()
        .map(assemble)
        .map_err(|errs| super::syntax_error("ace", source, errs))
}

/// Parse a `KEY: value` prefix.
fn keyword<'src>(name: &'static str) -> impl Parser<'src, &'src str, (), Extra<'src>> + Clone {
    just(name).padded().then(just(':')).ignored()
}

/// Parse a variable with optional `[ SORT PROP: VAL ... ]` properties.
fn var<'src>() -> impl Parser<'src, &'src str, Var<'src>, Extra<'src>> + Clone {
    let prop = symbol()
        .padded()
        .then_ignore(just(':'))
        .then(symbol().padded());

    let props = symbol()
        .padded()
        .ignore_then(prop.repeated().collect::<Vec<_>>())
        .delimited_by(just('['), just(']'));

    symbol()
        .then(props.padded().or_not())
        .map(|(name, props)| Var { name, props })
}

/// Parse one `[ PRED<lnk> LBL: h ROLE: value ... ]` predication.
fn ep<'src>() -> impl Parser<'src, &'src str, EpParts<'src>, Extra<'src>> + Clone {
    let predicate = choice((string_lit(), symbol().map(str::to_string)));
    let value = choice((string_lit().map(Value::Str), var().map(Value::Var)));
    let arg = symbol()
        .padded()
        .then_ignore(just(':'))
        .then(value.padded());

    just('[')
        .padded()
        .ignore_then(predicate)
        .then(lnk().or_not())
        .then(string_lit().padded().or_not())
        .then_ignore(keyword("LBL"))
        .then(var().padded())
        .then(arg.repeated().collect::<Vec<_>>())
        .then_ignore(just(']').padded())
        .map(|((((predicate, lnk), surface), label), args)| EpParts {
            predicate,
            lnk,
            surface,
            label,
            args,
        })
}

/// Parse a `NAME: < v rel v ... >` constraint list.
fn constraints<'src>(
    name: &'static str,
) -> impl Parser<'src, &'src str, Vec<(Var<'src>, &'src str, Var<'src>)>, Extra<'src>> + Clone {
    let item = var()
        .padded()
        .then(symbol().padded())
        .then(var().padded())
        .map(|((left, rel), right)| (left, rel, right));

    keyword(name).ignore_then(
        item.repeated()
            .collect::<Vec<_>>()
            .padded()
            .delimited_by(just('<'), just('>'))
            .padded(),
    )
}

/// Parse a whole MRS.
fn mrs<'src>() -> impl Parser<'src, &'src str, MrsParts<'src>, Extra<'src>> + Clone {
    let top = choice((keyword("LTOP"), keyword("TOP"))).ignore_then(var().padded());
    let index = keyword("INDEX").ignore_then(var().padded());
    let rels = keyword("RELS").ignore_then(
        ep().repeated()
            .collect::<Vec<_>>()
            .padded()
            .delimited_by(just('<'), just('>'))
            .padded(),
    );

    just('[')
        .padded()
        .ignore_then(lnk().padded().or_not())
        .then(string_lit().padded().or_not())
        .then(top.or_not())
        .then(index.or_not())
        .then(rels)
        .then(constraints("HCONS").or_not())
        .then(constraints("ICONS").or_not())
        .then_ignore(just(']'))
        .map(
            |((((((lnk, surface), top), index), rels), hcons), icons)| MrsParts {
                lnk,
                surface,
                top,
                index,
                rels,
                hcons: hcons.unwrap_or_default(),
                icons: icons.unwrap_or_default(),
            },
        )
}

/// Record the properties written next to a variable occurrence.
fn record(mrs: &mut Mrs, var: &Var<'_>) {
    if let Some(props) = &var.props {
        mrs.add_properties(
            var.name,
            props.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        );
    }
}

fn assemble(parts: MrsParts<'_>) -> Mrs {
    let mut mrs = Mrs {
        lnk: parts.lnk.unwrap_or_default(),
        surface: parts.surface,
        ..Mrs::default()
    };

    if let Some(top) = &parts.top {
        record(&mut mrs, top);
        mrs.top = Some(top.name.to_string());
    }
    if let Some(index) = &parts.index {
        record(&mut mrs, index);
        mrs.index = Some(index.name.to_string());
    }

    for rel in parts.rels {
        record(&mut mrs, &rel.label);
        let mut ep = Ep::new(predicate::normalize(&rel.predicate), rel.label.name);
        ep.lnk = rel.lnk.unwrap_or_default();
        ep.surface = rel.surface;
        for (role, value) in rel.args {
            let value = match value {
                Value::Str(s) => s,
                Value::Var(v) => {
                    record(&mut mrs, &v);
                    v.name.to_string()
                }
            };
            ep.args.insert(role.to_uppercase(), value);
        }
        mrs.rels.push(ep);
    }

    for (hi, relation, lo) in parts.hcons {
        record(&mut mrs, &hi);
        record(&mut mrs, &lo);
        mrs.hcons.push(HandleConstraint {
            hi: hi.name.to_string(),
            relation: relation.to_lowercase(),
            lo: lo.name.to_string(),
        });
    }

    for (left, relation, right) in parts.icons {
        record(&mut mrs, &left);
        record(&mut mrs, &right);
        mrs.icons.push(IndividualConstraint {
            left: left.name.to_string(),
            relation: relation.to_string(),
            right: right.name.to_string(),
        });
    }

    mrs
}
