//! Standalone benchmark runner for flowgraph.

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use fg_bench::{BenchmarkSuite, default_benchmarks, run_scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("flowgraph Benchmark Suite");
    println!("=========================\n");

    let benchmarks = default_benchmarks();
    println!("Running {} benchmarks, 5 runs each...\n", benchmarks.len());

    let mut results = Vec::new();

    for (idx, scenario) in benchmarks.iter().enumerate() {
        print!("[{}/{}] {} ... ", idx + 1, benchmarks.len(), scenario.name);
        std::io::Write::flush(&mut std::io::stdout())?;

        let result = run_scenario(scenario, 5);
        println!(
            "OK ({} paths, {:.6}s median)",
            result.runs.first().map_or(0, |r| r.path_count),
            result.aggregate.paths_time_median_s
        );
        results.push(result);
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)?
        .as_secs()
        .to_string();
    let suite = BenchmarkSuite { timestamp, results };

    let report_path = "flowgraph-bench.json";
    fs::write(report_path, serde_json::to_string_pretty(&suite)?)?;
    println!("\nReport written to {report_path}");

    Ok(())
}
