//! # Reduced Product
//!
//! Computes the sum of elementwise products of two equal-length arrays
//! (the dot product):
//!
//! `sumOfProducts(a, b) = Σ(a[i] * b[i])`
//!
//! Two-array preconditions are checked before any element access: a length
//! mismatch is a contract error and panics immediately.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::SeededRng;
use rand::Rng;
use std::sync::Arc;

const VERIFY_LEN: usize = 999;

/// Runner for the f64 reduced product
pub struct SumOfProductsRunner;

impl AlgorithmRunner for SumOfProductsRunner {
    fn name(&self) -> &'static str {
        "sum_of_products"
    }

    fn description(&self) -> &'static str {
        "Reduced product sum(a[i] * b[i]) over f64 arrays"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants_f64()
            .iter()
            .map(|v| v.name)
            .collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>> {
        let mut rng = SeededRng::new(seed);
        let a: Arc<Vec<f64>> = Arc::new((0..size).map(|_| rng.next_f64_range()).collect());
        let b: Arc<Vec<f64>> = Arc::new((0..size).map(|_| rng.next_f64_range()).collect());

        code::available_variants_f64()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) =
                            crate::measure!(std::hint::black_box(func(&a, &b)));
                        (elapsed, Some(result))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        let a: Vec<f64> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        let b: Vec<f64> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        let expected = sum_of_products_original(&a, &b);

        for variant in &code::available_variants_f64() {
            let result = (variant.function)(&a, &b);
            let diff = (result - expected).abs();
            let tolerance = 1e-9 * expected.abs().max(1.0);

            if diff > tolerance {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        Ok(())
    }
}

/// Runner for the f32 reduced product (includes the AVX2 variant when
/// the hardware supports it)
pub struct SumOfProductsF32Runner;

impl AlgorithmRunner for SumOfProductsF32Runner {
    fn name(&self) -> &'static str {
        "sum_of_products_f32"
    }

    fn description(&self) -> &'static str {
        "Reduced product sum(a[i] * b[i]) over f32 arrays"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants_f32()
            .iter()
            .map(|v| v.name)
            .collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>> {
        let mut rng = SeededRng::new(seed);
        let a: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());
        let b: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());

        code::available_variants_f32()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) =
                            crate::measure!(std::hint::black_box(func(&a, &b)));
                        (elapsed, Some(result as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        let a: Vec<f32> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        let b: Vec<f32> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        let expected = sum_of_products_original(&a, &b);

        for variant in &code::available_variants_f32() {
            let result = (variant.function)(&a, &b);
            let diff = (result - expected).abs();
            // Accumulated f32 rounding over 999 random elements; the sum
            // itself can be near zero, so anchor the tolerance at 1.0.
            let tolerance = 1e-3 * expected.abs().max(1.0);

            if diff > tolerance {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        Ok(())
    }
}
