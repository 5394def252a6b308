//! Distances command handler.

use std::io;

use anyhow::{Context, Result};

use klroute_cli::output::{render_distances, DistanceRow, OutputFormat};
use klroute_cli::terminal::ColorPalette;
use klroute_lib::{compute_shortest_paths, Error as LibError, Graph};

use super::route::format_unknown_landmark_message;

/// Print the distance from `from` to every landmark using a single engine run.
pub fn handle_distances(graph: &Graph, from: &str, format: OutputFormat) -> Result<()> {
    let paths = compute_shortest_paths(graph, from).map_err(|err| match err {
        LibError::UnknownVertex { name, suggestions } => {
            anyhow::anyhow!(format_unknown_landmark_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;

    let rows = graph
        .vertices()
        .map(|landmark| {
            Ok(DistanceRow {
                landmark: landmark.to_string(),
                distance: paths.distance_to(landmark)?,
            })
        })
        .collect::<klroute_lib::Result<Vec<_>>>()?;

    tracing::debug!(
        from = paths.source(),
        reachable = paths.settled_count(),
        total = rows.len(),
        "distance table ready"
    );

    render_distances(
        &mut io::stdout().lock(),
        paths.source(),
        &rows,
        format,
        ColorPalette::detect(),
    )
    .context("failed to write distance listing")
}
