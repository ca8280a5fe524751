//! Rendering of finished diagrams to files.
//!
//! The [`Renderer`] trait is the seam between the driver and the backend.
//! [`GraphvizRenderer`] lowers diagrams to DOT (see [`dot`]) and lets the
//! Graphviz toolchain lay out and rasterize them.

pub mod dot;

mod graphviz;

pub use graphviz::GraphvizRenderer;

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::structure::Diagram;

/// Something that can turn a [`Diagram`] into a file at a given path.
pub trait Renderer {
    /// Render `diagram` to `path`.
    ///
    /// # Errors
    ///
    /// Implementations fail if the file cannot be produced. Nothing is
    /// guaranteed about partially written output.
    fn render(&mut self, diagram: &Diagram, path: &Path) -> Result<(), Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, diagram: &Diagram, path: &Path) -> Result<(), Error> {
        (**self).render(diagram, path)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("output directory `{}` does not exist", .0.display())]
    MissingOutputDirectory(PathBuf),

    #[error("Graphviz failed to render `{}`: {source}", .path.display())]
    Graphviz {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Fails with [`Error::MissingOutputDirectory`] unless the directory that
/// will hold `path` exists.
pub fn ensure_parent_exists(path: &Path) -> Result<(), Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingOutputDirectory(parent.to_path_buf()))
    }
}
