//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! This module provides a generic interface for registering and running
//! algorithms without needing separate binary files for each.

use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A named closure that runs one timed execution of a variant
/// (alias for the timer's Variant)
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "sum_by_constant")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE execution and returns a result value.
    /// The timer handles warmup, scheduling, and repetition. `seed`
    /// makes input generation reproducible.
    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms.
///
/// One runner per (operation, element type) pair. Hardware-gated variants
/// (AVX2) are filtered inside each runner's variant list, so registration
/// itself is unconditional.
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::sum_by_constant::SumByConstantRunner);
    registry.register(crate::math::sum_by_constant::SumByConstantF32Runner);
    registry.register(crate::math::elementwise_product::ElementwiseProductRunner);
    registry.register(crate::math::sum_of_products::SumOfProductsRunner);
    registry.register(crate::math::sum_of_products::SumOfProductsF32Runner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_find_and_list() {
        let registry = build_registry();
        assert_eq!(registry.all().len(), 5);
        assert!(registry.find("sum_by_constant").is_some());
        assert!(registry.find("sum_of_products_f32").is_some());
        assert!(registry.find("no_such_algorithm").is_none());
        assert_eq!(registry.by_category("math").len(), 5);
        assert!(registry
            .list_names()
            .contains(&"elementwise_product"));
    }

    #[test]
    fn test_every_runner_has_reference_variant() {
        let registry = build_registry();
        for algo in registry.all() {
            assert!(
                algo.available_variants().contains(&"original"),
                "algorithm '{}' has no reference variant",
                algo.name()
            );
        }
    }
}
