//! Archiflow - declarative architecture diagrams rendered through Graphviz.
//!
//! A diagram is declared as typed, labeled nodes and directed edges through a
//! [`DiagramBuilder`], lowered to DOT, and handed to Graphviz for layout and
//! rasterization. The [`Driver`](driver::Driver) walks a fixed
//! [catalog](catalog::iterations) of diagrams and renders each one in turn.

pub mod catalog;
pub mod config;
pub mod driver;
pub mod export;

mod error;
mod structure;

pub use archiflow_core::{color, identifier, semantic};

pub use error::ArchiflowError;
pub use structure::{Cluster, Diagram, DiagramBuilder, Edge, GraphError, Node};

use log::info;

use config::AppConfig;
use driver::{Driver, RunSummary};
use export::GraphvizRenderer;

/// Render the built-in catalog with Graphviz.
///
/// `only` restricts rendering to the named diagrams; pass an empty slice to
/// render all of them.
///
/// # Errors
///
/// Returns `ArchiflowError` for configuration, graph construction or
/// rendering failures, and for unknown names in `only`.
///
/// # Examples
///
/// ```rust,no_run
/// use archiflow::config::AppConfig;
///
/// let summary = archiflow::render_catalog(AppConfig::default(), &[])
///     .expect("Failed to render");
/// println!("{} diagrams written", summary.rendered().len());
/// ```
pub fn render_catalog(config: AppConfig, only: &[String]) -> Result<RunSummary, ArchiflowError> {
    info!(format = config.output().format().extension(); "Rendering with Graphviz");

    let mut driver = Driver::new(config, GraphvizRenderer::new());
    driver.run_selected(&catalog::iterations(), only)
}
