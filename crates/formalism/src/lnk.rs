//! Surface alignment of nodes and predications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node or predication sits in the source sentence.
///
/// Only [`Lnk::CharSpan`] carries character offsets; the other forms are kept
/// so that nothing is lost when a record is inspected, but they report `-1`
/// from [`Lnk::cfrom`] and [`Lnk::cto`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lnk {
    /// No alignment given.
    #[default]
    None,
    /// `<from:to>` character offsets, start inclusive, end exclusive.
    CharSpan { from: i64, to: i64 },
    /// `<from#to>` chart vertices.
    ChartSpan { from: i64, to: i64 },
    /// `<t1 t2 ...>` token identifiers.
    Tokens(Vec<i64>),
    /// `<@n>` edge identifier.
    Edge(i64),
}

impl Lnk {
    /// Character span shorthand.
    pub fn span(from: i64, to: i64) -> Self {
        Lnk::CharSpan { from, to }
    }

    /// Start character offset, or `-1` when the alignment is not a character span.
    pub fn cfrom(&self) -> i64 {
        match self {
            Lnk::CharSpan { from, .. } => *from,
            _ => -1,
        }
    }

    /// End character offset, or `-1` when the alignment is not a character span.
    pub fn cto(&self) -> i64 {
        match self {
            Lnk::CharSpan { to, .. } => *to,
            _ => -1,
        }
    }
}

impl fmt::Display for Lnk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lnk::None => Ok(()),
            Lnk::CharSpan { from, to } => write!(f, "<{}:{}>", from, to),
            Lnk::ChartSpan { from, to } => write!(f, "<{}#{}>", from, to),
            Lnk::Tokens(tokens) => {
                let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                write!(f, "<{}>", tokens.join(" "))
            }
            Lnk::Edge(id) => write!(f, "<@{}>", id),
        }
    }
}
