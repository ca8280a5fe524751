//! Command-line argument definitions for the Archiflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional: with none, the whole catalog is
//! rendered with the configured (or default) settings.

use std::path::PathBuf;

use clap::Parser;

use archiflow::semantic::{Direction, OutputFormat, Splines};

/// Render the architecture iteration diagrams
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the diagrams are written to (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format: png, svg, jpg, pdf or dot (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Rank direction: LR, RL, TB or BT (overrides the config file)
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Edge routing: ortho, curved, spline, polyline or line (overrides the
    /// config file; diagrams that pick their own routing keep it)
    #[arg(short, long)]
    pub splines: Option<Splines>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render only the named diagram; may be repeated
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// List the diagrams in the catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
