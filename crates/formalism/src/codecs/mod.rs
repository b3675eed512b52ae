//! Codecs that read semantic representations into [`Eds`](crate::Eds) or
//! [`Mrs`](crate::Mrs) records.
//!
//! - [`eds_native`] - native EDS text (`{e2: e2:_bark_v_1<8:14>[ARG1 x4] ...}`)
//! - [`eds_json`] - EDS JSON
//! - [`simplemrs`] - SimpleMRS text and ACE output
//! - [`mrs_json`] - MRS JSON

pub mod eds_json;
pub mod eds_native;
pub mod mrs_json;
mod primitives;
pub mod simplemrs;

use crate::error::{FormalismError, ParseErrorInfo};
use crate::lnk::Lnk;
use chumsky::error::Rich;
use serde::{Deserialize, Serialize};

/// JSON shape of a character span, shared by both JSON codecs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LnkRepr {
    from: i64,
    to: i64,
}

impl From<LnkRepr> for Lnk {
    fn from(repr: LnkRepr) -> Self {
        Lnk::span(repr.from, repr.to)
    }
}

/// Collect chumsky errors into a [`FormalismError::Syntax`].
fn syntax_error(
    format: &'static str,
    source: &str,
    errors: Vec<Rich<'_, char, primitives::Span>>,
) -> FormalismError {
    FormalismError::Syntax {
        format,
        errors: errors
            .iter()
            .map(|e| ParseErrorInfo::from_rich(source, e))
            .collect(),
    }
}
