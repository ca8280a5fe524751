//! Enumerate-and-render over a catalog.

use std::path::PathBuf;

use log::{debug, info};

use crate::{
    catalog::DiagramDefinition, config::AppConfig, error::ArchiflowError, export::Renderer,
    structure::Diagram,
};

/// Renders catalog definitions one after another with a [`Renderer`].
///
/// Each diagram is built, rendered and dropped before the next one is
/// started. The first failure stops the run.
#[derive(Debug)]
pub struct Driver<R> {
    config: AppConfig,
    renderer: R,
}

/// What a completed run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    rendered: Vec<PathBuf>,
}

impl RunSummary {
    /// Output files, in rendering order.
    pub fn rendered(&self) -> &[PathBuf] {
        &self.rendered
    }
}

impl<R: Renderer> Driver<R> {
    pub fn new(config: AppConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Where `diagram` is written under the configured output directory.
    pub fn output_path(&self, diagram: &Diagram) -> PathBuf {
        self.config.output().directory().join(diagram.file_name())
    }

    /// Render every definition in `catalog`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first construction or rendering error; diagrams after it
    /// are not rendered.
    pub fn run(&mut self, catalog: &[DiagramDefinition]) -> Result<RunSummary, ArchiflowError> {
        let mut summary = RunSummary::default();

        info!(
            diagrams_count = catalog.len(),
            output_dir:? = self.config.output().directory();
            "Rendering catalog",
        );

        for definition in catalog {
            info!(diagram = definition.name(); "Building diagram");
            let diagram = definition.instantiate(&self.config)?;

            let path = self.output_path(&diagram);
            debug!(diagram = diagram.name(), path:? = path; "Rendering diagram");
            self.renderer.render(&diagram, &path)?;

            summary.rendered.push(path);
        }

        info!(rendered_count = summary.rendered.len(); "Catalog rendered");
        Ok(summary)
    }

    /// Render only the definitions whose names appear in `only`, keeping
    /// catalog order. An empty `only` renders everything.
    ///
    /// # Errors
    ///
    /// [`ArchiflowError::Catalog`] if a name in `only` is not in `catalog`;
    /// nothing is rendered in that case. Otherwise as [`Driver::run`].
    pub fn run_selected(
        &mut self,
        catalog: &[DiagramDefinition],
        only: &[String],
    ) -> Result<RunSummary, ArchiflowError> {
        if only.is_empty() {
            return self.run(catalog);
        }

        if let Some(unknown) = only
            .iter()
            .find(|name| !catalog.iter().any(|def| def.name() == name.as_str()))
        {
            let known: Vec<_> = catalog.iter().map(DiagramDefinition::name).collect();
            return Err(ArchiflowError::Catalog(format!(
                "unknown diagram `{unknown}` (known: {})",
                known.join(", ")
            )));
        }

        let selected: Vec<DiagramDefinition> = catalog
            .iter()
            .filter(|def| only.iter().any(|name| name == def.name()))
            .copied()
            .collect();
        self.run(&selected)
    }
}
