//! Benchmark drivers: cross-algorithm randomized runs and CSV export.

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::{shuffle, time_seed};
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a multi-algorithm run, indexed `[algorithm][size]`
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every (algorithm, size) combination in randomized order.
///
/// Randomizing across algorithms, not just variants, keeps thermal and
/// frequency-scaling drift from consistently favoring whichever algorithm
/// would otherwise run first.
pub fn run_all_algorithms_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    runs_per_variant: usize,
    seed: Option<u64>,
) -> GroupedResults {
    let seed = seed.unwrap_or_else(time_seed);

    let mut results: Vec<Vec<Vec<BenchmarkResult>>> =
        vec![vec![Vec::new(); sample_sizes.len()]; algorithms.len()];
    let mut raw_data = Vec::new();

    let mut tasks: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..sample_sizes.len()).map(move |s| (a, s)))
        .collect();
    shuffle(&mut tasks, seed);

    let config = TimingConfig {
        runs_per_variant,
        ..TimingConfig::default()
    };

    for (algo_idx, size_idx) in tasks {
        let size = sample_sizes[size_idx];
        let closures = algorithms[algo_idx].get_variant_closures(size, seed);
        let variant_results = measure_variants(closures, &config);

        for r in &variant_results {
            raw_data.push(RawTimingData {
                algo_name: algorithms[algo_idx].name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                result_sample: r.result_sample,
            });
        }

        results[algo_idx][size_idx] = variant_results;
    }

    GroupedResults { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "algorithm,variant,input_size,avg_time_ns,result")?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.avg_nanos,
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv() {
        let data = vec![RawTimingData {
            algo_name: "sum_by_constant".to_string(),
            variant_name: "original".to_string(),
            input_size: 999,
            avg_nanos: 1234,
            result_sample: Some(30.0),
        }];

        let path = std::env::temp_dir().join("simd_mult_bench_csv_test.csv");
        let path = path.to_str().unwrap();
        export_csv(path, &data).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("algorithm,variant,input_size,avg_time_ns,result"));
        assert!(contents.contains("sum_by_constant,original,999,1234,30"));
        let _ = std::fs::remove_file(path);
    }
}
