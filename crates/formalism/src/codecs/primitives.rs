//! Primitive parsers shared by the text codecs.
//!
//! This module contains parsers for bare symbols, string literals, integers
//! and surface alignments (`<0:3>`).

use crate::lnk::Lnk;
use chumsky::prelude::*;

/// Span type for both text grammars.
pub type Span = SimpleSpan<usize>;

/// Parser extra state: rich errors over characters.
pub type Extra<'src> = extra::Err<Rich<'src, char, Span>>;

/// Characters that end a bare symbol.
const DELIMITERS: &[char] = &['[', ']', '{', '}', '<', '>', '(', ')', ':', ',', '"', '|'];

/// Parse a bare symbol: a run of non-space, non-delimiter characters.
pub fn symbol<'src>() -> impl Parser<'src, &'src str, &'src str, Extra<'src>> + Clone {
    any()
        .filter(|c: &char| !c.is_whitespace() && !DELIMITERS.contains(c))
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse a double-quoted string literal with backslash escapes.
pub fn string_lit<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    let escape = just('\\').ignore_then(any());

    just('"')
        .ignore_then(
            choice((escape, none_of(['\\', '"'])))
                .repeated()
                .collect::<String>(),
        )
        .then_ignore(just('"'))
}

/// Parse an optionally negative decimal integer.
pub fn integer<'src>() -> impl Parser<'src, &'src str, i64, Extra<'src>> + Clone {
    just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("invalid integer '{}': {}", s, e)))
        })
}

/// Parse a surface alignment: `<0:3>`, `<1#2>`, `<@5>` or `<1 2 3>`.
pub fn lnk<'src>() -> impl Parser<'src, &'src str, Lnk, Extra<'src>> + Clone {
    let char_span = integer()
        .then_ignore(just(':'))
        .then(integer())
        .map(|(from, to)| Lnk::CharSpan { from, to });

    let chart_span = integer()
        .then_ignore(just('#'))
        .then(integer())
        .map(|(from, to)| Lnk::ChartSpan { from, to });

    let edge = just('@').ignore_then(integer()).map(Lnk::Edge);

    let tokens = integer()
        .separated_by(just(' ').repeated().at_least(1))
        .collect::<Vec<_>>()
        .map(Lnk::Tokens);

    choice((char_span, chart_span, edge, tokens)).delimited_by(just('<'), just('>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_stops_at_delimiters() {
        let result = symbol().then_ignore(any().repeated()).parse("_dog_n_1<4:7>");
        assert_eq!(result.into_result().ok(), Some("_dog_n_1"));
    }

    #[test]
    fn test_string_lit_escapes() {
        let result = string_lit().parse(r#""say \"hi\"""#).into_result().ok();
        assert_eq!(result, Some("say \"hi\"".to_string()));
    }

    #[test]
    fn test_integer_negative() {
        assert_eq!(integer().parse("-1").into_result().ok(), Some(-1));
        assert_eq!(integer().parse("42").into_result().ok(), Some(42));
    }

    #[test]
    fn test_lnk_forms() {
        assert_eq!(lnk().parse("<4:7>").into_result().ok(), Some(Lnk::span(4, 7)));
        assert_eq!(
            lnk().parse("<1#3>").into_result().ok(),
            Some(Lnk::ChartSpan { from: 1, to: 3 })
        );
        assert_eq!(lnk().parse("<@5>").into_result().ok(), Some(Lnk::Edge(5)));
        assert_eq!(lnk().parse("<1 2>").into_result().ok(), Some(Lnk::Tokens(vec![1, 2])));
        assert_eq!(lnk().parse("<-1:-1>").into_result().ok(), Some(Lnk::span(-1, -1)));
    }
}
