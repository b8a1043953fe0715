//! Generic CLI for running algorithms.
//!
//! Usage:
//!   simd-mult                  # Run all algorithms
//!   simd-mult --list           # List available algorithms
//!   simd-mult sum_by_constant  # Run specific algorithm
//!   simd-mult --help           # Show help

use simd_mult_bench::registry::build_registry;
use simd_mult_bench::utils::bench::time_seed;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sample_sizes: Vec<usize> = vec![64, 256, 999, 4096, 16384];
    let mut runs_per_variant: usize = 30;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sample_sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--iter" => {
                i += 1;
                if i < args.len() {
                    runs_per_variant = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        simd_mult_bench::tui::print_help();
        return;
    }

    if show_list {
        simd_mult_bench::tui::print_available_algorithms(&registry);
        return;
    }

    simd_mult_bench::tui::print_header();
    simd_mult_bench::tui::print_capabilities();

    match algorithm_filter {
        Some(name) => {
            // Running a single algorithm - use the standard sequential method
            match registry.find(&name) {
                Some(algo) => simd_mult_bench::tui::run_and_display(
                    algo,
                    &sample_sizes,
                    runs_per_variant,
                    seed.unwrap_or_else(time_seed),
                ),
                None => {
                    eprintln!("Algorithm '{}' not found.", name);
                    eprintln!("Available: {:?}", registry.list_names());
                    std::process::exit(1);
                }
            }
        }
        None => {
            // Running all algorithms - use the randomized cross-algorithm method
            let all_algos: Vec<_> = registry.all().iter().map(|a| a.as_ref()).collect();
            simd_mult_bench::tui::run_all_algorithms_randomized(
                &all_algos,
                &sample_sizes,
                runs_per_variant,
                seed,
                csv_path.as_deref(),
            );
        }
    }

    println!("Note: Speedup is relative to the first variant (usually 'original').");
}
