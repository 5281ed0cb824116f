//! CLI argument definitions (build.rs compatible).
//!
//! Only clap types live here, with no dependencies on other crate modules,
//! so build.rs can include this file to render the man page.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line of hex colors per row
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    Yaml,
}

/// Interpolation space for mixing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorSpaceArg {
    #[default]
    Oklab,
    Oklch,
    Srgb,
    SrgbLinear,
    Lab,
    Lch,
    Hsl,
    Hsv,
}

/// Easing applied to the mix percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CurveTypeArg {
    /// Percentages used as-is
    #[default]
    Linear,
    /// Smooth S-curve (Hermite)
    Smoothstep,
    /// Smoother S-curve (Ken Perlin)
    Smootherstep,
    /// Ease-in (accelerating start)
    SmoothStart,
    /// Ease-out (decelerating end)
    SmoothEnd,
    /// Configurable S-curve (use with --mix-strength)
    Sigmoid,
}

/// Tint and shade ramps between a base color and its dark and light endpoints.
#[derive(Parser, Debug)]
#[command(name = "pavlette")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base color of a row; repeat for more rows. Any CSS color or hsb(h, s%, b%)
    #[arg(short, long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Dark endpoint for every row (default: hsb(<hue>, 50%, 5%))
    #[arg(long, value_name = "COLOR")]
    pub dark: Option<String>,

    /// Light endpoint for every row (default: hsb(<hue>, 50%, 100%))
    #[arg(long, value_name = "COLOR")]
    pub light: Option<String>,

    /// Mixes on each side of the base color
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub step_count: Option<u8>,

    /// Interpolation space for mixing
    #[arg(long, value_enum)]
    pub color_space: Option<ColorSpaceArg>,

    /// Easing curve applied to mix percentages
    #[arg(long, value_enum)]
    pub mix_curve: Option<CurveTypeArg>,

    /// Sigmoid curve strength (0.1-5.0)
    #[arg(long)]
    pub mix_strength: Option<f32>,

    /// Output colors in grey scale
    #[arg(short, long)]
    pub grey_scale: bool,

    /// Do not share hue between the reference colors of new rows
    #[arg(long)]
    pub no_hue_sync: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print each row's reference colors instead of the ramps
    #[arg(long)]
    pub references: bool,

    /// Launch interactive TUI
    #[arg(short, long)]
    pub interactive: bool,

    /// Load settings from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save effective settings to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: pavlette.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
