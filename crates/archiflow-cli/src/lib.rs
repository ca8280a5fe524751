//! CLI logic for the Archiflow diagram renderer.
//!
//! This module contains the core CLI logic: it merges command-line overrides
//! into the loaded configuration and renders the catalog.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use archiflow::{
    ArchiflowError,
    catalog,
    config::{AppConfig, LayoutConfig, OutputConfig},
};

/// Run the Archiflow CLI application
///
/// With `--list`, prints the catalog as `name<TAB>file stem` lines and
/// returns. Otherwise renders the catalog, or the diagrams named by `--only`.
///
/// # Errors
///
/// Returns `ArchiflowError` for:
/// - Configuration loading errors
/// - Unknown diagram names
/// - Graph construction errors
/// - Rendering errors, including a missing output directory
pub fn run(args: &Args) -> Result<(), ArchiflowError> {
    if args.list {
        for definition in catalog::iterations() {
            println!("{}\t{}", definition.name(), definition.file_stem());
        }
        return Ok(());
    }

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    info!(
        output_dir = app_config.output().directory().display().to_string(),
        format = app_config.output().format().extension();
        "Processing catalog"
    );

    let summary = archiflow::render_catalog(app_config, &args.only)?;

    info!(rendered_count = summary.rendered().len(); "Diagrams exported successfully");

    Ok(())
}

/// Command-line flags win over file settings.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let output = config.output();
    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| output.directory().to_path_buf());
    let format = args.format.unwrap_or(output.format());
    let output = OutputConfig::new(directory, format);

    let layout = config.layout();
    let layout = LayoutConfig::new(
        args.direction.unwrap_or(layout.direction()),
        args.splines.unwrap_or(layout.splines()),
    );

    config.with_output(output).with_layout(layout)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use archiflow::semantic::{Direction, OutputFormat, Splines};

    use super::*;

    #[test]
    fn test_overrides_replace_file_settings() {
        let args = Args {
            output_dir: Some(PathBuf::from("elsewhere")),
            format: Some(OutputFormat::Svg),
            direction: Some(Direction::BottomToTop),
            ..Default::default()
        };

        let config = apply_overrides(AppConfig::default(), &args);

        assert_eq!(config.output().directory(), Path::new("elsewhere"));
        assert_eq!(config.output().format(), OutputFormat::Svg);
        assert_eq!(config.layout().direction(), Direction::BottomToTop);
        assert_eq!(config.layout().splines(), Splines::Ortho);
    }

    #[test]
    fn test_no_overrides_keep_file_settings() {
        let file_config = AppConfig::default()
            .with_output(OutputConfig::new("from-file", OutputFormat::Pdf))
            .with_layout(LayoutConfig::new(Direction::TopToBottom, Splines::Line));

        let config = apply_overrides(file_config, &Args::default());

        assert_eq!(config.output().directory(), Path::new("from-file"));
        assert_eq!(config.output().format(), OutputFormat::Pdf);
        assert_eq!(config.layout().direction(), Direction::TopToBottom);
        assert_eq!(config.layout().splines(), Splines::Line);
    }
}
