use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Dense identifier assigned to a landmark when it is first added to a graph.
///
/// Identifiers follow insertion order and are only meaningful for the graph
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Half of an undirected connection, stored in the adjacency list of its tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: f64,
}

/// Mutable construction phase for a [`Graph`].
///
/// All validation happens here so that a built graph only ever contains
/// known endpoints and finite, non-negative weights whose sum is finite, so no
/// path length can overflow.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    total_weight: f64,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark. Adding a label that already exists returns its
    /// existing identifier and changes nothing.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }

        let id = VertexId(self.labels.len());
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two existing landmarks with an undirected edge.
    ///
    /// When the pair is already connected only the lower of the two weights
    /// is kept. A weight that would push the sum of all weights past
    /// `f64::MAX` is rejected as [`Error::InvalidWeight`].
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }

        let from = self.lookup(a)?;
        let to = self.lookup(b)?;
        if from == to {
            return Err(Error::SelfLoop {
                name: a.to_string(),
            });
        }

        if let Some(existing) = self.adjacency[from.0].iter().position(|e| e.target == to) {
            let current = self.adjacency[from.0][existing].weight;
            if weight < current {
                debug!(
                    from = a,
                    to = b,
                    old = current,
                    new = weight,
                    "lowering duplicate edge"
                );
                self.set_weight(from, to, weight);
                self.set_weight(to, from, weight);
                self.total_weight -= current - weight;
            } else {
                debug!(
                    from = a,
                    to = b,
                    kept = current,
                    ignored = weight,
                    "ignoring heavier duplicate edge"
                );
            }
            return Ok(());
        }

        let total_weight = self.total_weight + weight;
        if !total_weight.is_finite() {
            return Err(Error::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }
        self.total_weight = total_weight;

        self.adjacency[from.0].push(Edge { target: to, weight });
        self.adjacency[to.0].push(Edge {
            target: from,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Freeze the builder into an immutable graph.
    pub fn build(self) -> Graph {
        debug!(
            vertices = self.labels.len(),
            edges = self.edge_count,
            "graph built"
        );
        Graph {
            labels: Arc::new(self.labels),
            index: Arc::new(self.index),
            adjacency: Arc::new(self.adjacency),
            edge_count: self.edge_count,
        }
    }

    fn lookup(&self, label: &str) -> Result<VertexId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(label))
    }

    fn set_weight(&mut self, from: VertexId, to: VertexId, weight: f64) {
        if let Some(edge) = self.adjacency[from.0].iter_mut().find(|e| e.target == to) {
            edge.weight = weight;
        }
    }
}

/// Undirected, weighted landmark graph used by the shortest-path engine.
///
/// Cloning is cheap: storage is shared, and the graph can be handed to any
/// number of concurrent engine runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Arc<Vec<String>>,
    index: Arc<HashMap<String, VertexId>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
    edge_count: usize,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Landmark labels in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected connections.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get(id.0).map(String::as_str)
    }

    /// Resolve a label, attaching close matches to the error when it is unknown.
    pub fn resolve(&self, label: &str) -> Result<VertexId> {
        self.vertex_id(label).ok_or_else(|| Error::UnknownVertex {
            name: label.to_string(),
            suggestions: self.fuzzy_matches(label, 3),
        })
    }

    /// Adjacent landmarks of `label` with their connecting weights.
    pub fn neighbors(&self, label: &str) -> Result<Vec<(&str, f64)>> {
        let id = self.resolve(label)?;
        Ok(self
            .edges(id)
            .iter()
            .map(|edge| (self.name(edge.target), edge.weight))
            .collect())
    }

    /// Weight of the direct connection between `a` and `b`, if any.
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<Option<f64>> {
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;
        Ok(self
            .edges(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight))
    }

    /// Labels similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .labels
            .iter()
            .map(|label| {
                let score = strsim::jaro_winkler(&needle, &label.to_lowercase());
                (score, label.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    /// Outgoing half-edges of a vertex issued by this graph.
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.adjacency
            .get(id.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.labels.len()).map(VertexId)
    }

    pub(crate) fn name(&self, id: VertexId) -> &str {
        self.label(id).unwrap_or("<unknown>")
    }

    /// Assemble a graph without builder validation.
    #[cfg(test)]
    pub(crate) fn from_parts(labels: Vec<String>, adjacency: Vec<Vec<Edge>>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), VertexId(i)))
            .collect();
        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
        Self {
            labels: Arc::new(labels),
            index: Arc::new(index),
            adjacency: Arc::new(adjacency),
            edge_count,
        }
    }
}
