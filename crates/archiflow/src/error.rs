//! Error types for Archiflow operations.
//!
//! This module provides the main error type [`ArchiflowError`] which wraps
//! the failures of each pipeline stage: configuration, graph construction,
//! and export.

use std::io;

use thiserror::Error;

use crate::{export, structure::GraphError};

/// The main error type for Archiflow operations.
#[derive(Debug, Error)]
pub enum ArchiflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),
}
