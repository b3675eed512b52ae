//! Error types for graph construction and rendering.

use crate::edges::EdgeRoleError;
use thiserror::Error;

/// Errors that can occur while converting an EDS into a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphBuildError {
    /// An edge carries a role name with no integer code
    #[error("edge {source_id} -> {target}: {error}")]
    InvalidEdgeRole {
        source_id: String,
        target: String,
        #[source]
        error: EdgeRoleError,
    },

    /// An edge endpoint is not a node of the input
    #[error("edge {source_id} -> {target} refers to unknown node '{missing}'")]
    UnknownNode {
        source_id: String,
        target: String,
        missing: String,
    },
}

/// Errors raised by the rendering stages.
///
/// All of them mean a stage was handed a graph that did not come out of the
/// previous stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("node '{id}' has no EDS metadata")]
    MissingNodeMetadata { id: String },

    #[error("edge {source_id} -> {target} has no EDS metadata")]
    MissingEdgeMetadata { source_id: String, target: String },

    /// Metadata was not stripped before serialization
    #[error("node or edge '{id}' still carries EDS metadata; run `clean` before `to_dot`")]
    UnstrippedMetadata { id: String },
}
