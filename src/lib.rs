//! # graphedes
//!
//! Turn DELPH-IN semantic representations into Graphviz DOT graphs.
//!
//! | Module | Crate | Description |
//! |--------|-------|-------------|
//! | [`formalism`] | `graphedes-formalism` | MRS and EDS records, codecs, MRS to EDS |
//! | [`graph`] | `graphedes-graph` | EDS to digraph conversion, rendering, DOT model |
//!
//! ## Quick Start
//!
//! ```rust
//! use graphedes::{sketch, InputFormat, SketchConfig};
//!
//! let doc = sketch("{x4:\n x4:_dog_n_1<4:7>[]\n}", InputFormat::Eds, &SketchConfig::default())
//!     .unwrap();
//! assert!(doc.to_string().contains("_dog_n_1"));
//! ```

pub use graphedes_formalism as formalism;
pub use graphedes_graph as graph;

pub use graphedes_formalism::{Eds, FormalismError, InputFormat};
pub use graphedes_graph::{
    convert, render, ConvertConfig, DotDocument, EdsGraph, GraphBuildError, RenderConfig,
    RenderError,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for the whole [`sketch`] pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub convert: ConvertConfig,
    pub render: RenderConfig,
}

/// Any failure of the [`sketch`] pipeline.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Decode(#[from] FormalismError),

    #[error(transparent)]
    Convert(#[from] GraphBuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Decode `text`, convert it and render it to a DOT document.
pub fn sketch(
    text: &str,
    format: InputFormat,
    config: &SketchConfig,
) -> Result<DotDocument, SketchError> {
    let eds = format.decode(text)?;
    tracing::debug!(%format, top = ?eds.top, "sketching");
    let graph = convert(&eds, &config.convert)?;
    Ok(render(graph, &config.render)?)
}
