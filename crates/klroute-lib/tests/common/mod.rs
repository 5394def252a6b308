//! Shared fixtures for the library integration tests.

use std::path::PathBuf;

use klroute_lib::{Graph, GraphBuilder};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Builder for the four-landmark graph A-B (2), B-C (3), A-C (7), C-D (1)
/// plus an isolated landmark E.
pub fn scenario_builder() -> GraphBuilder {
    let mut builder = Graph::builder();
    for label in ["A", "B", "C", "D", "E"] {
        builder.add_vertex(label);
    }
    builder.add_edge("A", "B", 2.0).expect("A-B");
    builder.add_edge("B", "C", 3.0).expect("B-C");
    builder.add_edge("A", "C", 7.0).expect("A-C");
    builder.add_edge("C", "D", 1.0).expect("C-D");
    builder
}

#[allow(dead_code)]
pub fn scenario_graph() -> Graph {
    scenario_builder().build()
}

#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
