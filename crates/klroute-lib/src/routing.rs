//! Route planning between named landmarks.
//!
//! This module provides:
//! - [`RouteRequest`] - A start/goal pair by label
//! - [`RoutePlan`] - A planned route with per-leg and total distance
//! - [`plan_route`] - Main entry point for a single query
//! - [`plan_routes_from`] - Many goals answered from one engine run
//!
//! # Example
//!
//! ```
//! use klroute_lib::{default_network, plan_route, RouteRequest};
//!
//! let graph = default_network()?;
//! let plan = plan_route(&graph, &RouteRequest::new("KLCC", "KL Sentral"))?;
//! println!("{} hops, {:.1} km", plan.hop_count(), plan.total_distance);
//! # Ok::<(), klroute_lib::Error>(())
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::{compute_shortest_paths, ShortestPaths};
use crate::route::RouteLeg;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub legs: Vec<RouteLeg>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// `true` when start and goal are the same landmark.
    pub fn is_trivial(&self) -> bool {
        self.start == self.goal
    }
}

/// Compute the shortest route for a single request.
///
/// Unknown labels fail with suggestions attached. An unreachable goal is
/// reported as [`Error::RouteNotFound`].
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    graph.resolve(&request.goal)?;
    let paths = compute_shortest_paths(graph, &request.start)?;
    plan_from_paths(&paths, &request.goal)?.ok_or_else(|| Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    })
}

/// Plan routes from one start to many goals with a single engine run.
///
/// Unreachable goals map to `None`. Results follow the order of `goals`.
pub fn plan_routes_from<S: AsRef<str>>(
    graph: &Graph,
    start: &str,
    goals: &[S],
) -> Result<Vec<(String, Option<RoutePlan>)>> {
    let paths = compute_shortest_paths(graph, start)?;
    goals
        .iter()
        .map(|goal| {
            let goal = goal.as_ref();
            Ok((goal.to_string(), plan_from_paths(&paths, goal)?))
        })
        .collect()
}

fn plan_from_paths(paths: &ShortestPaths<'_>, goal: &str) -> Result<Option<RoutePlan>> {
    let route = paths.route_to(goal)?;
    if route.is_empty() {
        return Ok(None);
    }

    let legs = route.legs(paths.graph())?;
    let total_distance = paths.distance_to(goal)?.unwrap_or_default();

    Ok(Some(RoutePlan {
        start: paths.source().to_string(),
        goal: goal.to_string(),
        steps: route.into_vertices(),
        legs,
        total_distance,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn sample() -> Graph {
        let mut builder = GraphBuilder::new();
        for label in ["A", "B", "C", "Island"] {
            builder.add_vertex(label);
        }
        builder.add_edge("A", "B", 2.0).unwrap();
        builder.add_edge("B", "C", 3.0).unwrap();
        builder.build()
    }

    #[test]
    fn route_plan_hop_count() {
        let plan = plan_route(&sample(), &RouteRequest::new("A", "C")).unwrap();
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.total_distance, 5.0);
        assert_eq!(plan.legs.len(), 2);
        assert!(!plan.is_trivial());
    }

    #[test]
    fn same_start_and_goal_is_trivial() {
        let plan = plan_route(&sample(), &RouteRequest::new("B", "B")).unwrap();
        assert!(plan.is_trivial());
        assert_eq!(plan.steps, vec!["B".to_string()]);
        assert_eq!(plan.hop_count(), 0);
        assert_eq!(plan.total_distance, 0.0);
        assert!(plan.legs.is_empty());
    }

    #[test]
    fn unreachable_goal_is_route_not_found() {
        let err = plan_route(&sample(), &RouteRequest::new("A", "Island")).unwrap_err();
        assert!(matches!(err, Error::RouteNotFound { .. }));
        assert_eq!(err.to_string(), "no route found between A and Island");
    }

    #[test]
    fn unknown_goal_is_reported_before_search() {
        let err = plan_route(&sample(), &RouteRequest::new("A", "Nowhere")).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex { ref name, .. } if name == "Nowhere"));
    }

    #[test]
    fn many_goals_share_one_run() {
        let plans = plan_routes_from(&sample(), "A", &["C", "Island", "A"]).unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].1.as_ref().map(|p| p.total_distance), Some(5.0));
        assert!(plans[1].1.is_none());
        assert_eq!(plans[2].1.as_ref().map(RoutePlan::hop_count), Some(0));
    }
}
