//! Error adapter for converting ArchiflowError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use archiflow::{ArchiflowError, GraphError, export};

/// Adapter giving an [`ArchiflowError`] a diagnostic code and, where there is
/// an obvious remedy, a help message.
pub struct ErrorAdapter<'a>(pub &'a ArchiflowError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ArchiflowError::Io(_) => "archiflow::io",
            ArchiflowError::Config(_) => "archiflow::config",
            ArchiflowError::Graph(_) => "archiflow::graph",
            ArchiflowError::Export(_) => "archiflow::export",
            ArchiflowError::Catalog(_) => "archiflow::catalog",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            ArchiflowError::Graph(GraphError::UnknownNode { .. }) => {
                "declare the node before connecting it"
            }
            ArchiflowError::Graph(GraphError::DuplicateNode { .. }) => {
                "node keys must be unique within a diagram"
            }
            ArchiflowError::Export(export::Error::MissingOutputDirectory(_)) => {
                "create the directory first or pass --output-dir"
            }
            ArchiflowError::Export(export::Error::Graphviz { .. }) => {
                "install Graphviz so that `dot` is on PATH, or use --format dot"
            }
            ArchiflowError::Catalog(_) => "run with --list to see the available diagrams",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn code(err: &ArchiflowError) -> Option<String> {
        ErrorAdapter(err).code().map(|c| c.to_string())
    }

    fn help(err: &ArchiflowError) -> Option<String> {
        ErrorAdapter(err).help().map(|h| h.to_string())
    }

    #[test]
    fn test_codes() {
        let graph = ArchiflowError::Graph(GraphError::UnknownNode {
            diagram: "Iteration0".to_string(),
            node: "app".to_string(),
        });
        let catalog = ArchiflowError::Catalog("unknown diagram".to_string());

        assert_eq!(code(&graph).as_deref(), Some("archiflow::graph"));
        assert_eq!(code(&catalog).as_deref(), Some("archiflow::catalog"));
    }

    #[test]
    fn test_missing_directory_help() {
        let err = ArchiflowError::Export(export::Error::MissingOutputDirectory(PathBuf::from(
            "/output",
        )));

        assert!(help(&err).unwrap().contains("--output-dir"));
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Export error: output directory `/output` does not exist"
        );
    }

    #[test]
    fn test_no_help_for_config_errors() {
        let err = ArchiflowError::Config("bad".to_string());

        assert!(help(&err).is_none());
        assert!(ErrorAdapter(&err).labels().is_none());
    }
}
