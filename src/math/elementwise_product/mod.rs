//! # Elementwise Product
//!
//! Computes a new array of elementwise products of two equal-length arrays:
//!
//! `elementwiseProduct(a, b)[i] = a[i] * b[i]`
//!
//! Not a reduction: each output element is a single multiply, so all
//! variants are bit-identical given the same rounding mode. The reported
//! result sample is the sum of the output array, for cross-variant
//! comparison in the results table.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::SeededRng;
use rand::Rng;
use std::sync::Arc;

const VERIFY_LEN: usize = 999;

/// Runner for the f64 elementwise product
pub struct ElementwiseProductRunner;

impl AlgorithmRunner for ElementwiseProductRunner {
    fn name(&self) -> &'static str {
        "elementwise_product"
    }

    fn description(&self) -> &'static str {
        "Elementwise product c[i] = a[i] * b[i] over f64 arrays"
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
                        let (elapsed, out) =
                            crate::measure!(std::hint::black_box(func(&a, &b)));
                        let sample: f64 = out.iter().sum();
                        (elapsed, Some(sample))
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

        let expected = elementwise_product_original(&a, &b);

        for variant in &code::available_variants_f64() {
            let result = (variant.function)(&a, &b);

            if result.len() != expected.len() {
                return Err(format!(
                    "Variant '{}' returned {} elements, expected {}",
                    variant.name,
                    result.len(),
                    expected.len()
                ));
            }

            // Elementwise multiply is a single rounding per element: exact.
            for (i, (&got, &want)) in result.iter().zip(expected.iter()).enumerate() {
                if got != want {
                    return Err(format!(
                        "Variant '{}' differs at index {}: expected {}, got {}",
                        variant.name, i, want, got
                    ));
                }
            }
        }

        Ok(())
    }
}
