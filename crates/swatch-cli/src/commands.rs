//! Command execution and output rendering.

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use swatch_core::{Color, Hsla, Parser, Rgba, adjust, random, random_with};

use crate::config::{CliConfig, Command, OutputFormat};

/// One color in every representation the CLI reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgba: Rgba,
    pub hsla: Hsla,
}

impl From<Color> for ColorReport {
    fn from(color: Color) -> Self {
        Self {
            hex: color.to_hex(),
            rgba: color.to_rgba(),
            hsla: color.to_hsla(),
        }
    }
}

/// Result of a command, before formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Output {
    /// A single color, reported in full (`parse`).
    Detail(ColorReport),
    /// A single color.
    Color(ColorReport),
    /// An ordered set of colors (`scheme`, `random`).
    Palette(Vec<ColorReport>),
}

/// Execute a command against the resolved configuration.
pub fn run(command: &Command, config: &CliConfig) -> anyhow::Result<Output> {
    let parser = Parser::new(config.parse.clone());
    let read = |text: &str| -> anyhow::Result<Color> {
        parser
            .parse(text)
            .with_context(|| format!("invalid color {text:?}"))
    };
    let single = |color: Color| Output::Color(color.into());

    let output = match command {
        Command::Parse { color } => Output::Detail(read(color)?.into()),
        Command::Hex { color } => single(read(color)?),
        Command::Lighten { color, amount } => {
            single(adjust::lighten(read(color)?.to_hsla(), *amount).into())
        }
        Command::Saturate { color, amount } => {
            single(adjust::saturate(read(color)?.to_hsla(), *amount).into())
        }
        Command::Desaturate { color, amount } => {
            single(adjust::desaturate(read(color)?.to_hsla(), *amount).into())
        }
        Command::Greyscale { color } => single(adjust::greyscale(read(color)?.to_hsla()).into()),
        Command::Spin { color, degrees } => {
            single(adjust::spin(read(color)?.to_hsla(), *degrees).into())
        }
        Command::Brighten { color, amount } => {
            single(adjust::brighten(read(color)?.to_rgba(), *amount).into())
        }
        Command::Mix { from, to, amount } => {
            let mixed = adjust::mix(read(from)?.to_rgba(), read(to)?.to_rgba(), *amount);
            single(mixed.into())
        }
        Command::Multiply { lhs, rhs } => {
            single(adjust::multiply(read(lhs)?.to_rgba(), read(rhs)?.to_rgba()).into())
        }
        Command::Scheme { scheme, color } => {
            let base = read(color)?.to_hsla();
            Output::Palette(
                scheme
                    .generate(base)
                    .into_iter()
                    .map(|hsla| Color::from(hsla).into())
                    .collect(),
            )
        }
        Command::Random { seed, count } => {
            let colors: Vec<Rgba> = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(*seed);
                    (0..*count).map(|_| random_with(&mut rng)).collect()
                }
                None => (0..*count).map(|_| random()).collect(),
            };
            Output::Palette(colors.into_iter().map(|c| Color::from(c).into()).collect())
        }
    };

    tracing::debug!(?output, "command finished");
    Ok(output)
}

/// Format an [`Output`] for stdout.
pub fn render(output: &Output, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).context("serializing output as JSON")
        }
        OutputFormat::Text => Ok(match output {
            Output::Detail(report) => describe(report),
            Output::Color(report) => report.hex.clone(),
            Output::Palette(reports) => reports
                .iter()
                .map(|r| r.hex.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }),
    }
}

fn describe(report: &ColorReport) -> String {
    let [r, g, b, _] = report.rgba.to_bytes();
    let hsla = report.hsla;
    format!(
        "{}\nrgba({r}, {g}, {b}, {:.3})\nhsla({:.1}, {:.1}%, {:.1}%, {:.3})",
        report.hex,
        report.rgba.a,
        hsla.h,
        hsla.s * 100.0,
        hsla.l * 100.0,
        hsla.a
    )
}
