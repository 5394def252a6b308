//! KL Route library entry points.
//!
//! This crate holds the shortest-path engine behind the landmark route
//! planner: an undirected weighted [`Graph`] of named landmarks, single-source
//! Dijkstra via [`compute_shortest_paths`], and predecessor-based route
//! reconstruction via [`build_route`]. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!
//! ```
//! use klroute_lib::{build_route, compute_shortest_paths, Graph};
//!
//! let mut builder = Graph::builder();
//! for label in ["A", "B", "C", "D"] {
//!     builder.add_vertex(label);
//! }
//! builder.add_edge("A", "B", 2.0)?;
//! builder.add_edge("B", "C", 3.0)?;
//! builder.add_edge("A", "C", 7.0)?;
//! builder.add_edge("C", "D", 1.0)?;
//! let graph = builder.build();
//!
//! let paths = compute_shortest_paths(&graph, "A")?;
//! let route = build_route(&graph, paths.predecessors(), "A", "D")?;
//! assert_eq!(route.iter().collect::<Vec<_>>(), ["A", "B", "C", "D"]);
//! assert_eq!(paths.distance_to("D")?, Some(6.0));
//! # Ok::<(), klroute_lib::Error>(())
//! ```

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, VertexId};
pub use network::{
    default_network, load_configured_network, load_network, load_network_from_reader,
    resolve_network_path, NETWORK_ENV_VAR,
};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{compute_shortest_paths, DistanceMap, PredecessorMap, ShortestPaths};
pub use route::{build_route, Route, RouteLeg};
pub use routing::{plan_route, plan_routes_from, RoutePlan, RouteRequest};
