//! Selection sort benchmark suite.
//!
//! Run with: `cargo run --bin benchmark --release -- [FLAGS] [OUTPUT]`
//!
//! Flags:
//!   --sweep-only     Run only the distribution sweep (CSV export)
//!   --compare-only   Run only the standard-vs-bidirectional comparison
//!
//! `OUTPUT` is the CSV path for the sweep (default `benchmark_results.csv`).
//! With no flags, both phases run.

mod data;
mod statistics;

use crate::data::Distribution;
use crate::statistics::{calculate_stats, calculate_stats_u64, Stats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use selsort::{is_sorted, metrics, SelectionSorter};
use std::fs;
use std::io::{self, Write};
use std::process;

// ============================================================================
// BENCHMARK CONFIGURATION
// ============================================================================

/// Input sizes for the distribution sweep
const INPUT_SIZES: &[usize] = &[100, 500, 1000, 2000, 5000, 10_000];

/// Unmeasured runs before each configuration
const WARMUP_RUNS: usize = 3;

/// Measured runs per configuration
const MEASUREMENT_RUNS: usize = 5;

/// Sizes for the standard-vs-bidirectional comparison
const COMPARE_SIZES: &[usize] = &[1000, 5000, 10_000];

/// Seed for reproducible input generation
const SEED: u64 = 42;

// ============================================================================
// DISTRIBUTION SWEEP
// ============================================================================

struct SweepRow {
    distribution: Distribution,
    size: usize,
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    time_ms: f64,
}

impl SweepRow {
    fn csv_line(&self) -> String {
        // Same shape as the library's per-call row, prefixed with the
        // distribution label; allocations are always zero here.
        format!(
            "{},{},{},{},{},0,{:.3}",
            self.distribution.label(),
            self.size,
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.time_ms
        )
    }
}

fn measure_configuration(rng: &mut StdRng, dist: Distribution, size: usize) -> SweepRow {
    for _ in 0..WARMUP_RUNS {
        let mut arr = dist.generate(rng, size);
        SelectionSorter::new().sort(&mut arr);
    }

    let mut total_comparisons: u64 = 0;
    let mut total_swaps: u64 = 0;
    let mut total_accesses: u64 = 0;
    let mut total_nanos: u128 = 0;

    for _ in 0..MEASUREMENT_RUNS {
        let mut arr = dist.generate(rng, size);
        let mut sorter = SelectionSorter::new();
        sorter.sort(&mut arr);

        if !is_sorted(&arr) {
            eprintln!(
                "ERROR: output not sorted ({} n={})",
                dist.label(),
                size
            );
            process::exit(1);
        }

        let m = sorter.metrics();
        total_comparisons += m.comparisons();
        total_swaps += m.swaps();
        total_accesses += m.array_accesses();
        total_nanos += m.elapsed_nanos();
    }

    let runs = MEASUREMENT_RUNS as u64;
    SweepRow {
        distribution: dist,
        size,
        comparisons: total_comparisons / runs,
        swaps: total_swaps / runs,
        array_accesses: total_accesses / runs,
        time_ms: (total_nanos / MEASUREMENT_RUNS as u128) as f64 / 1_000_000.0,
    }
}

fn run_sweep(output_path: &str) {
    println!();
    println!("Distribution Sweep");
    println!("==================");

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut csv = format!("DataType,{}\n", metrics::CSV_HEADER);

    for dist in Distribution::ALL {
        println!();
        println!("Testing {} data:", dist.label());

        for &size in INPUT_SIZES {
            print!("  n={:>6}...", size);
            io::stdout().flush().unwrap();

            let row = measure_configuration(&mut rng, dist, size);
            println!(
                " {:>12} comparisons, {:>10} swaps, {:.3} ms",
                row.comparisons, row.swaps, row.time_ms
            );
            csv.push_str(&row.csv_line());
            csv.push('\n');
        }
    }

    match fs::write(output_path, csv) {
        Ok(()) => {
            println!();
            println!("Results saved to: {}", output_path);
        }
        Err(e) => {
            eprintln!("Error writing results: {}", e);
            process::exit(1);
        }
    }
}

// ============================================================================
// STANDARD VS BIDIRECTIONAL COMPARISON
// ============================================================================

struct VariantResult {
    comparisons: Stats,
    time_us: Stats,
}

struct CompareRow {
    n: usize,
    standard: VariantResult,
    bidirectional: VariantResult,
}

fn measure_variant<F>(rng: &mut StdRng, n: usize, mut sort_fn: F) -> VariantResult
where
    F: FnMut(&mut SelectionSorter, &mut [i32]),
{
    let mut comparisons: Vec<u64> = Vec::with_capacity(MEASUREMENT_RUNS);
    let mut times_us: Vec<f64> = Vec::with_capacity(MEASUREMENT_RUNS);

    for _ in 0..MEASUREMENT_RUNS {
        let mut arr = Distribution::Random.generate(rng, n);
        let mut sorter = SelectionSorter::new();
        sort_fn(&mut sorter, &mut arr);
        debug_assert!(is_sorted(&arr));

        comparisons.push(sorter.metrics().comparisons());
        times_us.push(sorter.metrics().elapsed_nanos() as f64 / 1_000.0);
    }

    VariantResult {
        comparisons: calculate_stats_u64(&comparisons),
        time_us: calculate_stats(&times_us),
    }
}

fn run_comparison() {
    println!();
    println!("Standard vs Bidirectional Comparison");
    println!("====================================");

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut rows: Vec<CompareRow> = Vec::new();

    for &n in COMPARE_SIZES {
        print!("  n={:>6}...", n);
        io::stdout().flush().unwrap();

        let standard = measure_variant(&mut rng, n, |s, arr| s.sort(arr));
        let bidirectional = measure_variant(&mut rng, n, |s, arr| s.sort_bidirectional(arr));

        rows.push(CompareRow {
            n,
            standard,
            bidirectional,
        });
        println!(" done");
    }

    print_comparison_table(&rows);
}

fn print_comparison_table(rows: &[CompareRow]) {
    println!();
    println!("Mean over {} runs (± 95% CI)", MEASUREMENT_RUNS);
    println!("┌────────┬──────────────────────┬──────────────────────┬──────────────────────┬──────────────────────┐");
    println!("│   n    │   Std comparisons    │     Std time µs      │   Bidi comparisons   │     Bidi time µs     │");
    println!("├────────┼──────────────────────┼──────────────────────┼──────────────────────┼──────────────────────┤");
    for r in rows {
        println!(
            "│ {:>6} │ {} │ {} │ {} │ {} │",
            r.n,
            format_with_ci(r.standard.comparisons.mean, r.standard.comparisons.ci_95),
            format_with_ci(r.standard.time_us.mean, r.standard.time_us.ci_95),
            format_with_ci(
                r.bidirectional.comparisons.mean,
                r.bidirectional.comparisons.ci_95
            ),
            format_with_ci(r.bidirectional.time_us.mean, r.bidirectional.time_us.ci_95),
        );
    }
    println!("└────────┴──────────────────────┴──────────────────────┴──────────────────────┴──────────────────────┘");
}

fn format_with_ci(value: f64, ci: f64) -> String {
    const COL_WIDTH: usize = 20;
    let ci_percent = if value > 0.0 { (ci / value) * 100.0 } else { 0.0 };
    let content = format!("{:.1} ±{:.1}%", value, ci_percent);
    format!("{:>width$}", content, width = COL_WIDTH)
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let sweep_only = args.iter().any(|a| a == "--sweep-only");
    let compare_only = args.iter().any(|a| a == "--compare-only");
    let output_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("benchmark_results.csv");

    println!();
    println!("Selection Sort Benchmark");
    println!("========================");

    if !compare_only {
        run_sweep(output_path);
    }

    if !sweep_only {
        run_comparison();
    }

    println!();
    println!("Done!");
}
