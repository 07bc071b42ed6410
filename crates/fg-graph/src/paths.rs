//! Simple-path enumeration and shortest-path selection.

use std::hash::Hash;

use indexmap::IndexSet;
use tracing::debug;

use crate::graph::Graph;

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Enumerate every simple path from the effective start set to the
    /// effective stop set.
    ///
    /// With `start` given, the start set is just that node; otherwise it is
    /// [`starters`](Graph::starters). Likewise `stop` versus
    /// [`stoppers`](Graph::stoppers). A start that is itself in the stop set
    /// yields the single-node path and is not expanded. Arrival at a stop
    /// node completes a path even when the stop has further outgoing edges.
    ///
    /// Paths appear in discovery order: start-set order, then the insertion
    /// order of each node's destination set at every expansion. Shortest-path
    /// tie-breaking depends on this order, so it is part of the contract.
    ///
    /// The simple-path guard (no node repeats within a path) guarantees
    /// termination on cyclic graphs, but the number of paths can grow
    /// exponentially with edge density.
    pub fn paths(&self, start: Option<&T>, stop: Option<&T>) -> Vec<Vec<T>> {
        let starts: IndexSet<T> = match start {
            Some(node) => IndexSet::from([node.clone()]),
            None => self.starters(),
        };
        let stops: IndexSet<T> = match stop {
            Some(node) => IndexSet::from([node.clone()]),
            None => self.stoppers(),
        };

        let mut found = Vec::new();
        let mut prefix = Vec::new();

        for start in &starts {
            if stops.contains(start) {
                found.push(vec![start.clone()]);
                continue;
            }
            self.expand(start, &mut prefix, &stops, &mut found);
        }

        debug!(paths = found.len(), "enumerated simple paths");
        found
    }

    /// Shortest path between the effective start and stop sets.
    ///
    /// Fewest nodes wins; ties go to the first-discovered path. `None` when
    /// no path connects the requested endpoints.
    pub fn shortest(&self, start: Option<&T>, stop: Option<&T>) -> Option<Vec<T>> {
        self.paths(start, stop).into_iter().min_by_key(Vec::len)
    }

    /// Depth-first expansion of `current`, accumulating completed paths.
    ///
    /// `prefix` holds the path so far excluding `current` and is restored
    /// before returning. A neighbor anywhere in the extended prefix is
    /// skipped, so every emitted path is simple and the recursion is
    /// bounded by the node count.
    fn expand(&self, current: &T, prefix: &mut Vec<T>, stops: &IndexSet<T>, found: &mut Vec<Vec<T>>) {
        prefix.push(current.clone());

        if let Some(edges) = self.adjacency.get(current) {
            for next in edges {
                if prefix.contains(next) {
                    continue;
                }
                if stops.contains(next) {
                    let mut path = prefix.clone();
                    path.push(next.clone());
                    found.push(path);
                    continue;
                }
                self.expand(next, prefix, stops, found);
            }
        }

        prefix.pop();
    }
}
