//! # graphedes-formalism
//!
//! Record types and codecs for the DELPH-IN semantic formalisms that
//! graphedes draws: Minimal Recursion Semantics (MRS) and Elementary
//! Dependency Structures (EDS).
//!
//! This crate provides:
//!
//! - **EDS records** ([`Eds`], [`eds::Node`]) as consumed by the graph converter
//! - **MRS records** ([`Mrs`], [`mrs::Ep`]) and their conversion to EDS
//! - **Codecs** for native EDS text, EDS JSON, SimpleMRS, MRS JSON and ACE output
//! - **Error reporting** with source spans via ariadne
//!
//! ## Quick Start
//!
//! ```rust
//! use graphedes_formalism::InputFormat;
//!
//! let source = r#"{e2:
//!  _1:_the_q<0:3>[BV x4]
//!  x4:_dog_n_1<4:7>{x PERS 3, NUM sg}[]
//!  e2:_bark_v_1<8:14>{e SF prop, TENSE pres}[ARG1 x4]
//! }"#;
//!
//! let eds = InputFormat::Eds.decode(source).unwrap();
//! assert_eq!(eds.top.as_deref(), Some("e2"));
//! assert_eq!(eds.nodes.len(), 3);
//! assert_eq!(eds.edges().count(), 2);
//! ```
//!
//! ## Supported Formats
//!
//! | Selector | Format | Path to EDS |
//! |----------|--------|-------------|
//! | `eds` | native EDS text | direct |
//! | `eds_json` | EDS JSON | direct |
//! | `mrs` | SimpleMRS | [`eds_from_mrs`] |
//! | `mrs_json` | MRS JSON | [`eds_from_mrs`] |
//! | `ace` | ACE parser output (first line dropped, rest SimpleMRS) | [`eds_from_mrs`] |

pub mod codecs;
mod convert;
pub mod eds;
pub mod error;
mod format;
pub mod lnk;
pub mod mrs;
pub mod predicate;
pub mod variable;

pub use convert::eds_from_mrs;
pub use eds::Eds;
pub use error::{ErrorReporter, FormalismError, ParseErrorInfo};
pub use format::InputFormat;
pub use lnk::Lnk;
pub use mrs::Mrs;
