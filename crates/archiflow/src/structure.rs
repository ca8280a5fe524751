//! In-memory diagram structure.
//!
//! A [`Diagram`] is assembled through a [`DiagramBuilder`], which checks that
//! every edge and cluster only refers to nodes already declared in the same
//! diagram. The result is immutable; it is handed to a renderer once and then
//! dropped.

mod diagram;
mod graph_base;

pub use diagram::{Cluster, Diagram, DiagramBuilder, Edge, Node};

use thiserror::Error;

/// Errors raised while declaring a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("diagram `{diagram}`: node `{node}` is not declared")]
    UnknownNode { diagram: String, node: String },

    #[error("diagram `{diagram}`: node `{node}` is declared more than once")]
    DuplicateNode { diagram: String, node: String },

    #[error("diagram `{diagram}`: node `{node}` is already in cluster `{cluster}`")]
    AlreadyClustered {
        diagram: String,
        node: String,
        cluster: String,
    },
}
