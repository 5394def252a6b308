use serde::Serialize;
use tracing::error;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::path::PredecessorMap;

/// Ordered landmarks from a source to a target, both inclusive.
///
/// An empty route is the canonical "no path exists" answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    vertices: Vec<String>,
}

/// One hop of a route with the weight of the edge it travels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl Route {
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<String> {
        self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }

    /// Consecutive hops with their edge weights.
    ///
    /// Fails with [`Error::UnknownVertex`] if a step is not in `graph`, and
    /// with [`Error::RouteNotFound`] if two consecutive steps are not
    /// directly connected.
    pub fn legs(&self, graph: &Graph) -> Result<Vec<RouteLeg>> {
        self.vertices
            .windows(2)
            .map(|pair| {
                let distance =
                    graph
                        .edge_weight(&pair[0], &pair[1])?
                        .ok_or_else(|| Error::RouteNotFound {
                            start: pair[0].clone(),
                            goal: pair[1].clone(),
                        })?;
                Ok(RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Sum of the edge weights along the route; zero for single-step and
    /// empty routes.
    pub fn total_weight(&self, graph: &Graph) -> Result<f64> {
        Ok(self.legs(graph)?.iter().map(|leg| leg.distance).sum())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Turn a predecessor map into the route from `source` to `target`.
///
/// Returns `[source]` when both labels are equal and an empty route when
/// `target` was never reached from `source`.
pub fn build_route(
    graph: &Graph,
    predecessors: &PredecessorMap,
    source: &str,
    target: &str,
) -> Result<Route> {
    let start = graph.resolve(source)?;
    let goal = graph.resolve(target)?;
    build_route_from(graph, predecessors, start, goal)
}

pub(crate) fn build_route_from(
    graph: &Graph,
    predecessors: &PredecessorMap,
    start: VertexId,
    goal: VertexId,
) -> Result<Route> {
    if start == goal {
        return Ok(labelled(graph, vec![start]));
    }

    // A well-formed map reaches the source in fewer than |V| steps.
    let limit = graph.vertex_count();
    let mut path = vec![goal];
    let mut current = goal;
    let mut steps = 0usize;

    while current != start {
        let Some(previous) = predecessors.get(current) else {
            return Ok(Route::default());
        };

        steps += 1;
        if steps > limit {
            error!(
                start = graph.name(start),
                goal = graph.name(goal),
                steps,
                "predecessor map contains a cycle"
            );
            return Err(Error::PredecessorCycleDetected {
                start: graph.name(start).to_string(),
                goal: graph.name(goal).to_string(),
                steps,
            });
        }

        path.push(previous);
        current = previous;
    }

    path.reverse();
    Ok(labelled(graph, path))
}

fn labelled(graph: &Graph, ids: Vec<VertexId>) -> Route {
    Route {
        vertices: ids
            .into_iter()
            .map(|id| graph.name(id).to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn chain(labels: &[&str]) -> Graph {
        let mut builder = GraphBuilder::new();
        for label in labels {
            builder.add_vertex(*label);
        }
        for pair in labels.windows(2) {
            builder.add_edge(pair[0], pair[1], 1.0).unwrap();
        }
        builder.build()
    }

    fn id(graph: &Graph, label: &str) -> VertexId {
        graph.vertex_id(label).unwrap()
    }

    #[test]
    fn same_source_and_target_yield_single_step() {
        let graph = chain(&["A", "B"]);
        let empty = PredecessorMap::new(graph.vertex_count());

        let route = build_route(&graph, &empty, "B", "B").unwrap();
        assert_eq!(route.vertices(), ["B".to_string()]);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn walks_predecessors_back_to_source() {
        let graph = chain(&["A", "B", "C"]);
        let mut predecessors = PredecessorMap::new(graph.vertex_count());
        predecessors.set(id(&graph, "B"), id(&graph, "A"));
        predecessors.set(id(&graph, "C"), id(&graph, "B"));

        let route = build_route(&graph, &predecessors, "A", "C").unwrap();
        assert_eq!(route.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(route.source(), Some("A"));
        assert_eq!(route.target(), Some("C"));
    }

    #[test]
    fn missing_predecessor_means_no_route() {
        let graph = chain(&["A", "B", "C"]);
        let mut predecessors = PredecessorMap::new(graph.vertex_count());
        predecessors.set(id(&graph, "C"), id(&graph, "B"));

        let route = build_route(&graph, &predecessors, "A", "C").unwrap();
        assert!(route.is_empty());
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn cycle_in_predecessors_is_detected() {
        let graph = chain(&["A", "B", "C"]);
        let mut predecessors = PredecessorMap::new(graph.vertex_count());
        predecessors.set(id(&graph, "B"), id(&graph, "C"));
        predecessors.set(id(&graph, "C"), id(&graph, "B"));

        let err = build_route(&graph, &predecessors, "A", "C").unwrap_err();
        match err {
            Error::PredecessorCycleDetected { start, goal, steps } => {
                assert_eq!(start, "A");
                assert_eq!(goal, "C");
                assert_eq!(steps, graph.vertex_count() + 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let graph = chain(&["A", "B"]);
        let predecessors = PredecessorMap::new(graph.vertex_count());
        assert!(matches!(
            build_route(&graph, &predecessors, "A", "Z"),
            Err(Error::UnknownVertex { .. })
        ));
    }

    #[test]
    fn legs_carry_edge_weights() {
        let mut builder = GraphBuilder::new();
        for label in ["A", "B", "C"] {
            builder.add_vertex(label);
        }
        builder.add_edge("A", "B", 2.5).unwrap();
        builder.add_edge("B", "C", 0.5).unwrap();
        let graph = builder.build();

        let mut predecessors = PredecessorMap::new(graph.vertex_count());
        predecessors.set(id(&graph, "B"), id(&graph, "A"));
        predecessors.set(id(&graph, "C"), id(&graph, "B"));
        let route = build_route(&graph, &predecessors, "A", "C").unwrap();

        let legs = route.legs(&graph).unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].distance, 2.5);
        assert_eq!(route.total_weight(&graph).unwrap(), 3.0);
        assert_eq!(Route::default().total_weight(&graph).unwrap(), 0.0);
    }
}
