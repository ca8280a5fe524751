//! Rendering through the Graphviz `dot` executable.

use std::{fs, io, path::Path};

use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::PrinterContext,
};
use log::{debug, info, trace};

use archiflow_core::semantic::OutputFormat;

use super::{Error, Renderer, dot, ensure_parent_exists};
use crate::structure::Diagram;

/// Renders diagrams with Graphviz.
///
/// [`OutputFormat::Dot`] is written directly from the lowered graph; every
/// other format requires the `dot` executable on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphvizRenderer;

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&mut self, diagram: &Diagram, path: &Path) -> Result<(), Error> {
        ensure_parent_exists(path)?;

        let graph = dot::to_graph(diagram);
        trace!(graph:?; "Lowered graph");

        let Some(format) = graphviz_format(diagram.format()) else {
            fs::write(path, dot::print(&graph))?;
            info!(path:? = path; "DOT source written");
            return Ok(());
        };

        debug!(format = diagram.format().extension(), path:? = path; "Invoking Graphviz");
        let args = vec![
            CommandArg::Format(format),
            CommandArg::Output(path.to_string_lossy().into_owned()),
        ];
        exec(graph, &mut PrinterContext::default(), args).map_err(|source| Error::Graphviz {
            path: path.to_path_buf(),
            source,
        })?;

        if !path.is_file() {
            return Err(Error::Graphviz {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no output file was produced"),
            });
        }

        info!(path:? = path; "Diagram rendered");
        Ok(())
    }
}

fn graphviz_format(format: OutputFormat) -> Option<Format> {
    match format {
        OutputFormat::Png => Some(Format::Png),
        OutputFormat::Svg => Some(Format::Svg),
        OutputFormat::Jpg => Some(Format::Jpg),
        OutputFormat::Pdf => Some(Format::Pdf),
        OutputFormat::Dot => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use archiflow_core::semantic::NodeKind;

    use super::*;
    use crate::structure::DiagramBuilder;

    fn diagram(format: OutputFormat) -> Diagram {
        let mut builder = DiagramBuilder::new("Iteration-1", "iteration-1");
        builder.format(format);
        builder.node("user", NodeKind::Mobile, "User").unwrap();
        builder
            .node("app", NodeKind::Application, "HelloWorld")
            .unwrap();
        builder.edge("user", "app").unwrap();
        builder.build()
    }

    #[test]
    fn test_dot_format_written_without_graphviz() {
        let dir = tempdir().unwrap();
        let diagram = diagram(OutputFormat::Dot);
        let path = dir.path().join(diagram.file_name());

        GraphvizRenderer::new().render(&diagram, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, dot::to_dot_string(&diagram));
    }

    #[test]
    fn test_missing_output_directory_fails_before_rendering() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        for format in [OutputFormat::Dot, OutputFormat::Png] {
            let diagram = diagram(format);
            let path = missing.join(diagram.file_name());

            let err = GraphvizRenderer::new().render(&diagram, &path).unwrap_err();
            assert!(matches!(err, Error::MissingOutputDirectory(ref p) if *p == missing));
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_graphviz_format_mapping() {
        assert!(graphviz_format(OutputFormat::Dot).is_none());
        assert!(matches!(graphviz_format(OutputFormat::Png), Some(Format::Png)));
        assert!(matches!(graphviz_format(OutputFormat::Svg), Some(Format::Svg)));
    }
}
