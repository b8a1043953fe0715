//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner;
use crate::utils::timer::{measure_variants, TimingConfig};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Get sorting priority for a variant based on its name.
/// Lower values sort first.
/// Order: original (0), other scalar variants (1), SIMD (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if name.contains("simd") || name.contains("avx") || name.contains("neon") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: reference first, then scalar variants, then SIMD
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print the hardware capability banner: vector support, lane widths per
/// element type, and fixed-width instruction set availability.
pub fn print_capabilities() {
    use crate::hardware;

    let accelerated = hardware::has_vector_hardware();
    println!(
        "CPU {} vectorization",
        if accelerated {
            "supports"
        } else {
            "does not support"
        }
    );
    if accelerated {
        println!("With {} parallel f64 registers (lanes)", hardware::lanes_f64());
        println!("With {} parallel f32 registers (lanes)", hardware::lanes_f32());
        println!(
            "AVX2 (8 x f32): {}",
            if hardware::has_avx2() {
                "available"
            } else {
                "not available"
            }
        );
    }
    println!();
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);

    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if avg_ns > 0.0 { std_dev_ns / avg_ns } else { 0.0 };

        // Divergence from the reference variant's result; reduction-order
        // differences make this nonzero but small for the SIMD variants.
        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Simd-Mult-Bench ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: simd-mult [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available algorithms");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated array sizes (default: 64,256,999,4096,16384)");
    println!("  --iter N       Number of measurement runs per variant (default: 30)");
    println!("  --seed N       Random seed for reproducible benchmarks (default: time-based)");
    println!("  --csv FILE     Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM      Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  simd-mult                     # Run all algorithms");
    println!("  simd-mult sum_by_constant     # Run only sum_by_constant");
    println!("  simd-mult --list              # List algorithms");
    println!("  simd-mult --sizes 128,999     # Custom sizes");
    println!("  simd-mult --seed 12345        # Reproducible run");
    println!("  simd-mult --csv data.csv      # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

/// Run multiple algorithms with randomized execution order and display results.
/// If csv_path is provided, also exports raw data to CSV.
pub fn run_all_algorithms_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    runs_per_variant: usize,
    seed: Option<u64>,
    csv_path: Option<&str>,
) {
    let grouped =
        runner::run_all_algorithms_randomized(algorithms, sample_sizes, runs_per_variant, seed);

    if let Some(path) = csv_path {
        match runner::export_csv(path, &grouped.raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    for (algo_idx, algo) in algorithms.iter().enumerate() {
        print_algo_info_box(*algo);

        for (size_idx, &sample_size) in sample_sizes.iter().enumerate() {
            let mut variant_results = grouped.results[algo_idx][size_idx].clone();
            sort_variants(&mut variant_results);

            if !variant_results.is_empty() {
                print_results_table(&variant_results, sample_size, runs_per_variant);
            }
        }
    }
}

/// Run a single algorithm benchmark and display results
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sample_sizes: &[usize],
    runs_per_variant: usize,
    seed: u64,
) {
    print_algo_info_box(algo);

    let config = TimingConfig {
        runs_per_variant,
        ..TimingConfig::default()
    };

    for &sample_size in sample_sizes {
        let closures = algo.get_variant_closures(sample_size, seed);
        let mut results = measure_variants(closures, &config);
        sort_variants(&mut results);
        print_results_table(&results, sample_size, runs_per_variant);
    }
}
