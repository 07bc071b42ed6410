//! Core graph storage, edge mutation, and structural queries.

use std::hash::Hash;

use fg_core::NonEmpty;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// A directed graph over caller-supplied node values.
///
/// Nodes are opaque identity keys: the graph never inspects them beyond
/// equality and hashing, so their identity must not change while they
/// participate in the graph. Storage is an adjacency map from each node to
/// the set of nodes it points to. A node gains a key on its first outgoing
/// edge; a node that only ever appears as a destination has no key of its
/// own.
///
/// Every iteration order (keys, destination sets, and each derived query)
/// is insertion order. Path enumeration relies on this for deterministic
/// discovery order, so the ordering is a contract of the type rather than
/// an implementation detail.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) adjacency: IndexMap<T, IndexSet<T>>,
}

impl<T> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Link one or more destinations to the given source.
    ///
    /// Ensures `source` has a destination set (creating an empty one if
    /// absent) and inserts each destination into it. Returns how many
    /// destinations were newly recorded; re-adding an existing edge
    /// contributes 0 and leaves the set order untouched. Self-loops are
    /// stored like any other edge.
    pub fn add_edges(&mut self, source: T, destinations: NonEmpty<T>) -> usize {
        let edges = self.adjacency.entry(source).or_default();
        let before = edges.len();

        for destination in destinations {
            edges.insert(destination);
        }

        let added = edges.len() - before;
        trace!(added, "recorded edges");
        added
    }

    /// Link a single destination to the given source.
    pub fn add_edge(&mut self, source: T, destination: T) -> usize {
        self.add_edges(source, NonEmpty::new(destination))
    }

    /// Remove edges from `source`, optionally limited to the listed
    /// destinations.
    ///
    /// With a non-empty `destinations` slice, deletes each listed
    /// destination if present and returns how many were actually removed;
    /// `source` keeps its key even when its set becomes empty. With an
    /// empty slice, removes `source`'s key entirely and returns its prior
    /// out-degree (0 if `source` had no key). An unknown source is a no-op
    /// in both forms.
    pub fn remove_edges(&mut self, source: &T, destinations: &[T]) -> usize {
        if destinations.is_empty() {
            let removed = self
                .adjacency
                .shift_remove(source)
                .map_or(0, |edges| edges.len());
            trace!(removed, "cleared source");
            return removed;
        }

        let Some(edges) = self.adjacency.get_mut(source) else {
            return 0;
        };
        let removed = destinations
            .iter()
            .filter(|destination| edges.shift_remove(*destination))
            .count();
        trace!(removed, "removed edges");
        removed
    }

    /// All nodes with at least one tracked outgoing edge, in key order.
    pub fn sources(&self) -> IndexSet<T> {
        self.adjacency.keys().cloned().collect()
    }

    /// All nodes reachable by at least one edge, in first-appearance order.
    pub fn destinations(&self) -> IndexSet<T> {
        self.adjacency.values().flatten().cloned().collect()
    }

    /// Nodes with outgoing edges but no incoming edge (graph roots).
    pub fn starters(&self) -> IndexSet<T> {
        let destinations = self.destinations();
        self.adjacency
            .keys()
            .filter(|node| !destinations.contains(*node))
            .cloned()
            .collect()
    }

    /// Nodes with an incoming edge but no tracked outgoing edge (sinks).
    ///
    /// A source whose set was emptied via the listed-destination removal
    /// form keeps its key and therefore does not become a stopper.
    pub fn stoppers(&self) -> IndexSet<T> {
        self.destinations()
            .into_iter()
            .filter(|node| !self.adjacency.contains_key(node))
            .collect()
    }

    /// The direct destinations of `node`, in insertion order.
    ///
    /// Unknown nodes yield an empty list; the query registers nothing.
    pub fn neighbors(&self, node: &T) -> Vec<T> {
        self.adjacency
            .get(node)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    /// Whether the graph tracks no sources at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `node` currently has a tracked destination set.
    pub fn contains(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }
}
