//! Output formatting for route, landmark and distance listings.
//!
//! Route bodies are rendered by the library's [`RouteSummary::render`]; this
//! module picks the mode, handles JSON, and decorates listings with the
//! terminal palette.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use klroute_lib::{RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Markdown.
    Rich,
    /// Compact "Path / Total Distance" note.
    Note,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Rich => Some(RouteRenderMode::RichText),
            OutputFormat::Note => Some(RouteRenderMode::Note),
            OutputFormat::Json => None,
        }
    }
}

/// Distance from the listing's source to one landmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub landmark: String,
    /// `None` when the landmark cannot be reached.
    pub distance: Option<f64>,
}

#[derive(Serialize)]
struct DistanceTable<'a> {
    from: &'a str,
    distances: &'a [DistanceRow],
}

/// Write a route summary in the requested format.
pub fn render_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format.render_mode() {
        Some(mode) => out.write_all(summary.render(mode).as_bytes()),
        None => write_json(out, summary),
    }
}

/// Write the landmark listing in the requested format.
pub fn render_landmarks<W: Write>(
    out: &mut W,
    landmarks: &[&str],
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &landmarks),
        OutputFormat::Rich => {
            writeln!(out, "**Landmarks** ({})", landmarks.len())?;
            for name in landmarks {
                writeln!(out, "* {name}")?;
            }
            Ok(())
        }
        OutputFormat::Text | OutputFormat::Note => {
            for name in landmarks {
                writeln!(out, "{}{name}{}", palette.white_bold, palette.reset)?;
            }
            Ok(())
        }
    }
}

/// Write the single-source distance listing in the requested format.
pub fn render_distances<W: Write>(
    out: &mut W,
    from: &str,
    rows: &[DistanceRow],
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &DistanceTable {
                from,
                distances: rows,
            },
        ),
        OutputFormat::Rich => {
            writeln!(out, "**Distances from** _{from}_")?;
            writeln!(out)?;
            writeln!(out, "| Landmark | Distance |")?;
            writeln!(out, "|---|---:|")?;
            for row in rows {
                match row.distance {
                    Some(d) => writeln!(out, "| {} | `{d:.1}` |", row.landmark)?,
                    None => writeln!(out, "| {} | _unreachable_ |", row.landmark)?,
                }
            }
            Ok(())
        }
        OutputFormat::Note => {
            for row in rows {
                match row.distance {
                    Some(d) => writeln!(out, "{}: {d:.1} units", row.landmark)?,
                    None => writeln!(out, "{}: unreachable", row.landmark)?,
                }
            }
            Ok(())
        }
        OutputFormat::Text => {
            let width = rows
                .iter()
                .map(|row| row.landmark.chars().count())
                .max()
                .unwrap_or(0);
            writeln!(out, "{}Distances from {from}:{}", palette.gray, palette.reset)?;
            for row in rows {
                match row.distance {
                    Some(d) => writeln!(
                        out,
                        "  {:<width$}  {}{d:>6.1}{}",
                        row.landmark, palette.green, palette.reset
                    )?,
                    None => writeln!(
                        out,
                        "  {:<width$}  {}unreachable{}",
                        row.landmark, palette.red, palette.reset
                    )?,
                }
            }
            Ok(())
        }
    }
}

/// Warning shown when a route is requested from a landmark to itself.
pub fn same_landmark_warning(name: &str, palette: ColorPalette) -> String {
    format!(
        "{}Warning:{} source and destination are the same ({name}); nothing to route.",
        palette.yellow, palette.reset
    )
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
