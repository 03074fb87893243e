//! Command-line arguments and layered configuration.
//!
//! Priority, lowest to highest: built-in defaults, the JSON file named by
//! `--config` / `SWATCH_CONFIG`, then individual flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use swatch_core::{ParseOptions, Scheme, ShortHex};

/// Default log filter when neither `RUST_LOG` nor `--log-level` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Parse, convert and adjust colors")]
pub struct Cli {
    /// JSON configuration file.
    #[arg(long, env = "SWATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags that override values loaded from the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Output format.
    #[arg(long, value_enum, env = "SWATCH_FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `swatch_core=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Expand `#RGB` / `#RGBA` by doubling each digit, as CSS does.
    #[arg(long, global = true)]
    pub css_short_hex: bool,

    /// Only accept lowercase function names (`rgb(...)`, not `RGB(...)`).
    #[arg(long, global = true)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show a color as hex, RGBA and HSLA.
    Parse { color: String },
    /// Print a color as `#RRGGBB` / `#RRGGBBAA`.
    Hex { color: String },
    /// Set lightness to AMOUNT percent.
    Lighten {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Raise saturation by AMOUNT percent.
    Saturate {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Lower saturation by AMOUNT percent.
    Desaturate {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Remove all saturation.
    Greyscale { color: String },
    /// Rotate hue by DEGREES.
    Spin {
        color: String,
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Add AMOUNT percent to each RGB channel.
    Brighten {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Interpolate AMOUNT percent of the way from FROM to TO.
    Mix {
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Multiply two colors channel by channel.
    Multiply { lhs: String, rhs: String },
    /// Generate a triad or tetrad from a base color.
    Scheme { scheme: Scheme, color: String },
    /// Generate random opaque colors.
    Random {
        /// Seed for a reproducible sequence.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of colors to generate.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One hex color per line.
    #[default]
    Text,
    /// Tagged JSON objects.
    Json,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Parser behaviour.
    pub parse: ParseOptions,
    /// Output format.
    pub format: OutputFormat,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            format: OutputFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CliConfig {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build the effective configuration for a command line.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(&cli.overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(level) = &overrides.log_level {
            self.log_level.clone_from(level);
        }
        if overrides.css_short_hex {
            self.parse.short_hex = ShortHex::Doubled;
        }
        if overrides.case_sensitive {
            self.parse.case_insensitive = false;
        }
    }
}
