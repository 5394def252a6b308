//! Landmarks command handler.

use std::io;

use anyhow::{Context, Result};

use klroute_cli::output::{render_landmarks, OutputFormat};
use klroute_cli::terminal::ColorPalette;
use klroute_lib::Graph;

/// List every landmark in the network in insertion order.
pub fn handle_landmarks(graph: &Graph, format: OutputFormat) -> Result<()> {
    let landmarks: Vec<&str> = graph.vertices().collect();
    render_landmarks(
        &mut io::stdout().lock(),
        &landmarks,
        format,
        ColorPalette::detect(),
    )
    .context("failed to write landmark listing")
}
