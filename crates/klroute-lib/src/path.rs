use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::route::{build_route_from, Route};

/// Best known distance from the source to every vertex of a graph.
///
/// Unreached vertices hold `f64::INFINITY` internally and are reported as
/// `None` by the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap {
    distances: Vec<f64>,
}

impl DistanceMap {
    fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; vertex_count],
        }
    }

    /// Distance to `id`, or `None` when the vertex is unreachable.
    pub fn get(&self, id: VertexId) -> Option<f64> {
        self.distances
            .get(id.index())
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    fn raw(&self, id: VertexId) -> f64 {
        self.distances[id.index()]
    }

    fn set(&mut self, id: VertexId, distance: f64) {
        self.distances[id.index()] = distance;
    }
}

/// Predecessor of every vertex on its shortest known path from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    predecessors: Vec<Option<VertexId>>,
}

impl PredecessorMap {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            predecessors: vec![None; vertex_count],
        }
    }

    /// Predecessor of `id`; `None` for the source and for unreached vertices.
    pub fn get(&self, id: VertexId) -> Option<VertexId> {
        self.predecessors.get(id.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub(crate) fn set(&mut self, id: VertexId, predecessor: VertexId) {
        self.predecessors[id.index()] = Some(predecessor);
    }
}

/// Result of one single-source engine run.
///
/// Distances and predecessors cover every vertex of the graph, so any number
/// of targets can be queried without rerunning the engine.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: VertexId,
    distances: DistanceMap,
    predecessors: PredecessorMap,
    settle_order: Vec<VertexId>,
}

impl<'g> ShortestPaths<'g> {
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Label of the source vertex.
    pub fn source(&self) -> &'g str {
        self.graph.name(self.source)
    }

    pub fn source_id(&self) -> VertexId {
        self.source
    }

    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Shortest distance to `target`, `None` when it is unreachable.
    pub fn distance_to(&self, target: &str) -> Result<Option<f64>> {
        let id = self.graph.resolve(target)?;
        Ok(self.distances.get(id))
    }

    pub fn predecessor_of(&self, target: &str) -> Result<Option<&'g str>> {
        let id = self.graph.resolve(target)?;
        Ok(self.predecessors.get(id).map(|p| self.graph.name(p)))
    }

    pub fn is_reachable(&self, target: &str) -> Result<bool> {
        Ok(self.distance_to(target)?.is_some())
    }

    /// Route from the source to `target`; empty when `target` is unreachable.
    pub fn route_to(&self, target: &str) -> Result<Route> {
        let goal = self.graph.resolve(target)?;
        build_route_from(self.graph, &self.predecessors, self.source, goal)
    }

    /// Reachable labels with their distances, in the order they were settled.
    pub fn reachable(&self) -> impl Iterator<Item = (&'g str, f64)> + '_ {
        self.settle_order
            .iter()
            .map(move |&id| (self.graph.name(id), self.distances.raw(id)))
    }

    pub fn settled_count(&self) -> usize {
        self.settle_order.len()
    }
}

/// Run Dijkstra's algorithm from `source` over the whole graph.
///
/// Weights are re-checked before the search starts; a negative weight fails
/// the run with [`Error::NegativeWeightUnsupported`], and a path length that
/// overflows fails it with [`Error::InvalidWeight`]. Frontier entries with
/// equal distance are settled in vertex insertion order.
pub fn compute_shortest_paths<'g>(graph: &'g Graph, source: &str) -> Result<ShortestPaths<'g>> {
    let start = graph.resolve(source)?;
    ensure_non_negative(graph)?;

    let vertex_count = graph.vertex_count();
    let mut distances = DistanceMap::new(vertex_count);
    let mut predecessors = PredecessorMap::new(vertex_count);
    let mut settled = vec![false; vertex_count];
    let mut settle_order = Vec::with_capacity(vertex_count);
    let mut queue = BinaryHeap::new();
    let mut stale = 0usize;

    distances.set(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node.index()] {
            stale += 1;
            continue;
        }
        settled[entry.node.index()] = true;
        settle_order.push(entry.node);

        let current_distance = distances.raw(entry.node);
        for edge in graph.edges(entry.node) {
            let next = edge.target;
            if settled[next.index()] {
                continue;
            }

            let next_cost = current_distance + edge.weight;
            if !next_cost.is_finite() {
                return Err(Error::InvalidWeight {
                    from: graph.name(entry.node).to_string(),
                    to: graph.name(next).to_string(),
                    weight: edge.weight,
                });
            }
            if next_cost < distances.raw(next) {
                distances.set(next, next_cost);
                predecessors.set(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(
        source,
        settled = settle_order.len(),
        stale,
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        graph,
        source: start,
        distances,
        predecessors,
        settle_order,
    })
}

fn ensure_non_negative(graph: &Graph) -> Result<()> {
    for from in graph.ids() {
        let negative = graph
            .edges(from)
            .iter()
            .find(|e| e.weight < 0.0 || e.weight.is_nan());
        if let Some(edge) = negative {
            return Err(Error::NegativeWeightUnsupported {
                from: graph.name(from).to_string(),
                to: graph.name(edge.target).to_string(),
                weight: edge.weight,
            });
        }
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: VertexId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
