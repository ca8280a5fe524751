//! Configuration types for Archiflow rendering.
//!
//! This module provides configuration structures that control where diagrams
//! are written and how they are presented. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output, layout and style settings.
//! - [`OutputConfig`] - Output directory and [`OutputFormat`].
//! - [`LayoutConfig`] - Default [`Direction`] and [`Splines`] hints.
//! - [`StyleConfig`] - Visual styling options such as background color and font.
//!
//! Per-diagram hints declared in the catalog take precedence over the layout
//! defaults configured here.
//!
//! # Example
//!
//! ```
//! # use archiflow::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().directory().to_str(), Some("/output"));
//! assert!(config.style().background_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use archiflow_core::{
    color::Color,
    semantic::{Direction, OutputFormat, Splines},
};

/// Directory diagrams are written to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "/output";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    pub fn new(output: OutputConfig, layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            output,
            layout,
            style,
        }
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the output section, keeping layout and style.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Replaces the layout section, keeping output and style.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Where and in which format diagrams are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    directory: PathBuf,

    #[serde(default)]
    format: OutputFormat,
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: OutputFormat::default(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory every diagram file is written into. It must
    ///   already exist when rendering starts.
    /// * `format` - Output format for all diagrams.
    pub fn new(directory: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Default layout hints applied to every diagram.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    direction: Direction,

    #[serde(default)]
    splines: Splines,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified hints.
    pub fn new(direction: Direction, splines: Splines) -> Self {
        Self { direction, splines }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn splines(&self) -> Splines {
        self.splines
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to Graphviz defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family for titles, node labels and edge labels.
    #[serde(default)]
    font: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(background_color: Option<String>, font: Option<String>) -> Self {
        Self {
            background_color,
            font,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }
}
