//! Landmark network loading.
//!
//! Networks are described as CSV with one connection per row:
//!
//! ```text
//! from,to,distance
//! KLCC,KL Tower,1.6
//! Putrajaya,,
//! ```
//!
//! A row with an empty `to` and `distance` declares a standalone landmark.
//! Headers are matched case-insensitively and accept a few synonyms
//! (`source`/`a`, `target`/`b`, `weight`/`cost`).

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};

/// Environment variable consulted when no network file is given explicitly.
pub const NETWORK_ENV_VAR: &str = "KLROUTE_NETWORK";

/// Built-in Kuala Lumpur landmark network.
const DEFAULT_NETWORK_CSV: &str = include_str!("../data/kl_landmarks.csv");

const FROM: &str = "from";
const TO: &str = "to";
const DISTANCE: &str = "distance";

/// Load a network description from a CSV file.
pub fn load_network(path: &Path) -> Result<Graph> {
    let file = fs::File::open(path)?;
    let graph = load_network_from_reader(file)?;
    info!(
        path = %path.display(),
        landmarks = graph.vertex_count(),
        connections = graph.edge_count(),
        "loaded network"
    );
    Ok(graph)
}

/// Load a network description from any reader (file or in-memory buffer).
pub fn load_network_from_reader<R: Read>(reader: R) -> Result<Graph> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut builder = GraphBuilder::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let from = field(&record, &columns, FROM);
        let to = field(&record, &columns, TO);
        let distance = field(&record, &columns, DISTANCE);

        if from.is_empty() {
            if to.is_empty() && distance.is_empty() {
                continue;
            }
            return Err(Error::NetworkData {
                line,
                message: "missing 'from' landmark".to_string(),
            });
        }

        builder.add_vertex(from);
        if to.is_empty() && distance.is_empty() {
            continue;
        }
        if to.is_empty() {
            return Err(Error::NetworkData {
                line,
                message: format!("connection from '{from}' has no 'to' landmark"),
            });
        }

        let weight = distance.parse::<f64>().map_err(|e| Error::NetworkData {
            line,
            message: format!("invalid distance '{distance}' for {from} - {to}: {e}"),
        })?;

        builder.add_vertex(to);
        builder.add_edge(from, to, weight)?;
    }

    let graph = builder.build();
    debug!(
        landmarks = graph.vertex_count(),
        connections = graph.edge_count(),
        "parsed network description"
    );
    Ok(graph)
}

/// The Kuala Lumpur landmark network bundled with the library.
pub fn default_network() -> Result<Graph> {
    load_network_from_reader(DEFAULT_NETWORK_CSV.as_bytes())
}

/// Resolve which network file to use.
///
/// An explicit path wins, then [`NETWORK_ENV_VAR`]. `None` means the
/// built-in network should be used.
pub fn resolve_network_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    env::var_os(NETWORK_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the network selected by [`resolve_network_path`].
pub fn load_configured_network(explicit: Option<&Path>) -> Result<Graph> {
    match resolve_network_path(explicit) {
        Some(path) => load_network(&path),
        None => {
            debug!("using built-in landmark network");
            default_network()
        }
    }
}

fn field<'r>(
    record: &'r StringRecord,
    columns: &BTreeMap<&'static str, usize>,
    name: &str,
) -> &'r str {
    columns
        .get(name)
        .and_then(|&i| record.get(i))
        .unwrap_or("")
}

fn resolve_columns(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalize = |s: &str| {
        s.to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
    };
    let normalized: Vec<String> = headers.iter().map(normalize).collect();

    let synonyms: &[(&'static str, &[&str])] = &[
        (FROM, &["from", "source", "a"]),
        (TO, &["to", "target", "b"]),
        (DISTANCE, &["distance", "weight", "cost"]),
    ];

    let mut columns = BTreeMap::new();
    for (canon, alts) in synonyms {
        if let Some(i) = normalized.iter().position(|h| alts.contains(&h.as_str())) {
            columns.insert(*canon, i);
        }
    }

    let missing: Vec<&str> = [FROM, TO, DISTANCE]
        .into_iter()
        .filter(|c| !columns.contains_key(c))
        .collect();
    if !missing.is_empty() {
        return Err(Error::NetworkData {
            line: 1,
            message: format!(
                "missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    Ok(columns)
}
