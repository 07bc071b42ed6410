//! Benchmark framework for flowgraph path enumeration.

use std::time::Instant;

use fg_graph::Graph;
use serde::{Deserialize, Serialize};

/// Shape of a generated benchmark graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GraphShape {
    /// Single chain 0 → 1 → … → nodes-1.
    Chain,
    /// Layered DAG: `depth` layers of `width` nodes each, every node wired
    /// to the whole next layer. Total path count is width^depth.
    Layered { width: usize, depth: usize },
    /// Ring 0 → 1 → … → nodes-1 → 0, with one terminal hung off node 0 so
    /// enumeration has somewhere to stop.
    Cycle,
}

/// A benchmark scenario definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkScenario {
    /// Unique identifier for this benchmark.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Graph shape to generate.
    pub shape: GraphShape,
    /// Node count for shapes that take one (ignored by `Layered`).
    pub nodes: usize,
}

/// A single run's timing breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    pub build_time_s: f64,
    pub paths_time_s: f64,
    pub shortest_time_s: f64,
    pub path_count: usize,
    pub edge_count: usize,
}

/// Aggregated statistics for multiple runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub run_count: usize,
    pub paths_time_median_s: f64,
    pub paths_time_min_s: f64,
    pub paths_time_max_s: f64,
}

/// Complete benchmark result for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub scenario: BenchmarkScenario,
    pub runs: Vec<RunMetrics>,
    pub aggregate: AggregateMetrics,
}

/// Collection of benchmark results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Generate the graph for a scenario.
pub fn build_graph(scenario: &BenchmarkScenario) -> Graph<usize> {
    let mut graph = Graph::new();
    match scenario.shape {
        GraphShape::Chain => {
            for i in 0..scenario.nodes.saturating_sub(1) {
                graph.add_edge(i, i + 1);
            }
        }
        GraphShape::Layered { width, depth } => {
            // Node id = layer * width + slot.
            for layer in 0..depth.saturating_sub(1) {
                for from in 0..width {
                    for to in 0..width {
                        graph.add_edge(layer * width + from, (layer + 1) * width + to);
                    }
                }
            }
        }
        GraphShape::Cycle => {
            let ring = scenario.nodes.max(2);
            for i in 0..ring {
                graph.add_edge(i, (i + 1) % ring);
            }
            graph.add_edge(0, ring);
        }
    }
    graph
}

/// Endpoints to enumerate between for a scenario.
///
/// Chain and layered graphs have natural starters and stoppers; a ring has
/// neither, so enumeration runs from node 0 to the hung-off terminal.
fn endpoints(scenario: &BenchmarkScenario) -> (Option<usize>, Option<usize>) {
    match scenario.shape {
        GraphShape::Chain | GraphShape::Layered { .. } => (None, None),
        GraphShape::Cycle => (Some(0), Some(scenario.nodes.max(2))),
    }
}

/// Run a single benchmark scenario N times.
pub fn run_scenario(scenario: &BenchmarkScenario, times: usize) -> BenchmarkResult {
    let mut runs = Vec::new();

    for _ in 0..times {
        let started = Instant::now();
        let graph = build_graph(scenario);
        let build_time_s = started.elapsed().as_secs_f64();

        let (from, to) = endpoints(scenario);

        let started = Instant::now();
        let paths = graph.paths(from.as_ref(), to.as_ref());
        let paths_time_s = started.elapsed().as_secs_f64();

        let started = Instant::now();
        let _ = graph.shortest(from.as_ref(), to.as_ref());
        let shortest_time_s = started.elapsed().as_secs_f64();

        runs.push(RunMetrics {
            build_time_s,
            paths_time_s,
            shortest_time_s,
            path_count: paths.len(),
            edge_count: graph.edge_count(),
        });
    }

    let aggregate = compute_aggregates(&runs);

    BenchmarkResult {
        scenario: scenario.clone(),
        runs,
        aggregate,
    }
}

fn compute_aggregates(runs: &[RunMetrics]) -> AggregateMetrics {
    if runs.is_empty() {
        return AggregateMetrics {
            run_count: 0,
            paths_time_median_s: 0.0,
            paths_time_min_s: 0.0,
            paths_time_max_s: 0.0,
        };
    }

    let mut paths_times: Vec<_> = runs.iter().map(|r| r.paths_time_s).collect();
    paths_times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    AggregateMetrics {
        run_count: runs.len(),
        paths_time_median_s: paths_times[paths_times.len() / 2],
        paths_time_min_s: *paths_times.first().unwrap_or(&0.0),
        paths_time_max_s: *paths_times.last().unwrap_or(&0.0),
    }
}

/// Default set of benchmark scenarios.
pub fn default_benchmarks() -> Vec<BenchmarkScenario> {
    vec![
        BenchmarkScenario {
            id: "chain_1k".to_string(),
            name: "Chain, 1000 nodes".to_string(),
            shape: GraphShape::Chain,
            nodes: 1000,
        },
        BenchmarkScenario {
            id: "layered_3x6".to_string(),
            name: "Layered DAG, 3 wide x 6 deep".to_string(),
            shape: GraphShape::Layered { width: 3, depth: 6 },
            nodes: 0,
        },
        BenchmarkScenario {
            id: "layered_4x5".to_string(),
            name: "Layered DAG, 4 wide x 5 deep".to_string(),
            shape: GraphShape::Layered { width: 4, depth: 5 },
            nodes: 0,
        },
        BenchmarkScenario {
            id: "cycle_64".to_string(),
            name: "Ring with terminal, 64 nodes".to_string(),
            shape: GraphShape::Cycle,
            nodes: 64,
        },
    ]
}
