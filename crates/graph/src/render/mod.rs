//! Rendering of an [`EdsGraph`] into a DOT document.
//!
//! The stages run in a fixed order, each consuming the graph of the one
//! before:
//!
//! 1. [`label`] - node and edge labels
//! 2. [`color`] - node colors by role (optional)
//! 3. [`clean`] - strip EDS metadata
//! 4. [`inject_defaults`] - `node` / `edge` default-style entries
//! 5. [`to_dot`] - build the [`DotDocument`]
//! 6. [`stylize`] - fonts
//!
//! [`render`] runs all of them.

mod attributes;
mod cleanup;
mod serialize;

pub use attributes::{color, label};
pub use cleanup::{clean, inject_defaults, DEFAULT_EDGE, DEFAULT_NODE};
pub use serialize::{stylize, to_dot};

use crate::dot::DotDocument;
use crate::error::RenderError;
use crate::EdsGraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color node outlines by role.
    pub use_node_role_colors: bool,
    /// Font for node and edge text.
    pub font: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_node_role_colors: true,
            font: None,
        }
    }
}

/// Run every rendering stage on `graph`.
pub fn render(graph: EdsGraph, config: &RenderConfig) -> Result<DotDocument, RenderError> {
    let mut graph = label(graph)?;
    if config.use_node_role_colors {
        graph = color(graph)?;
    }
    let graph = inject_defaults(clean(graph));

    let doc = stylize(to_dot(&graph)?, config.font.as_deref());
    debug!(
        nodes = doc.nodes().len(),
        edges = doc.edges().len(),
        "rendered DOT document"
    );
    Ok(doc)
}
