//! Edge types for the EDS graph.

use crate::Attrs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The role of a dependency edge.
///
/// Each role has an integer code: `BV` is 0, `L-INDEX` -1, `R-INDEX` -2 and
/// `ARG<n>` is `n`. Codes outside that scheme are kept as [`EdgeRole::Raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeRole {
    /// Quantifier to the variable it binds.
    Bv,
    /// Left conjunct of a coordination.
    LIndex,
    /// Right conjunct of a coordination.
    RIndex,
    /// Numbered argument, `ARG<n>`.
    Arg(u32),
    /// A negative code with no name; rendered as the bare integer.
    Raw(i64),
}

/// Failure to read an edge role name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeRoleError {
    #[error("unknown edge role '{0}'")]
    Unknown(String),
}

impl EdgeRole {
    /// The integer code of this role.
    ///
    /// `BV` and `ARG0` share code 0, so `Arg(0)` does not survive a trip
    /// through [`EdgeRole::from_code`]; names round-trip through the enum.
    pub fn code(self) -> i64 {
        match self {
            EdgeRole::Bv => 0,
            EdgeRole::LIndex => -1,
            EdgeRole::RIndex => -2,
            EdgeRole::Arg(n) => i64::from(n),
            EdgeRole::Raw(n) => n,
        }
    }

    /// The role for an integer code. Code 0 always decodes to `Bv`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => EdgeRole::Bv,
            -1 => EdgeRole::LIndex,
            -2 => EdgeRole::RIndex,
            n => match u32::try_from(n) {
                Ok(n) => EdgeRole::Arg(n),
                Err(_) => EdgeRole::Raw(n),
            },
        }
    }
}

impl FromStr for EdgeRole {
    type Err = EdgeRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || EdgeRoleError::Unknown(s.to_string());
        match s {
            "BV" => Ok(EdgeRole::Bv),
            "L-INDEX" => Ok(EdgeRole::LIndex),
            "R-INDEX" => Ok(EdgeRole::RIndex),
            _ => match s.strip_prefix("ARG") {
                Some(n) if is_canonical_index(n) => {
                    n.parse().map(EdgeRole::Arg).map_err(|_| unknown())
                }
                Some(_) => Err(unknown()),
                None => s.parse().map(EdgeRole::from_code).map_err(|_| unknown()),
            },
        }
    }
}

/// Plain decimal digits with no sign and no leading zero.
fn is_canonical_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeRole::Bv => f.write_str("BV"),
            EdgeRole::LIndex => f.write_str("L-INDEX"),
            EdgeRole::RIndex => f.write_str("R-INDEX"),
            EdgeRole::Arg(n) => write!(f, "ARG{}", n),
            EdgeRole::Raw(n) => write!(f, "{}", n),
        }
    }
}

/// Typed metadata attached to a converted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdsEdge {
    pub role: EdgeRole,
}

/// An edge weight in the [`EdsGraph`](crate::EdsGraph).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Set by the converter, removed by [`clean`](crate::render::clean).
    pub meta: Option<EdsEdge>,
    /// Presentation attributes.
    pub attrs: Attrs,
}

impl GraphEdge {
    pub fn new(meta: EdsEdge) -> Self {
        Self {
            meta: Some(meta),
            attrs: Attrs::new(),
        }
    }
}
