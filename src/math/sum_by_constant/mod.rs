//! # Scaled Reduction
//!
//! Computes the sum of an array with every element scaled by a constant:
//!
//! `sumByConstant(arr, k) = Σ(arr[i] * k)`
//!
//! ## Strategy variants
//!
//! - **Scalar**: in-order indexed loop (reference), iterator and fold forms
//! - **Portable SIMD**: lane width resolved at runtime, full-width groups
//!   plus a scalar tail of `len % W` elements
//! - **AVX2**: fixed 8×f32 lanes with explicit 256-bit intrinsics, only
//!   registered when the CPU advertises AVX2

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::SeededRng;
use rand::Rng;
use std::sync::Arc;

/// Broadcast constant for benchmark inputs. The kernels take it as a
/// parameter and make no assumption about its magnitude.
pub const CONSTANT_F64: f64 = std::f64::consts::PI;
pub const CONSTANT_F32: f32 = std::f32::consts::PI;

/// Array length used for verification: not a multiple of any lane width,
/// so every variant exercises a non-empty remainder.
const VERIFY_LEN: usize = 999;

/// Runner for the f64 scaled reduction
pub struct SumByConstantRunner;

impl AlgorithmRunner for SumByConstantRunner {
    fn name(&self) -> &'static str {
        "sum_by_constant"
    }

    fn description(&self) -> &'static str {
        "Scaled reduction sum(a[i] * k) over f64 arrays"
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
        let arr: Arc<Vec<f64>> = Arc::new((0..size).map(|_| rng.next_f64_range()).collect());

        code::available_variants_f64()
            .into_iter()
            .map(|v| {
                let arr = Arc::clone(&arr);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) =
                            crate::measure!(std::hint::black_box(func(&arr, CONSTANT_F64)));
                        (elapsed, Some(result))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        let arr: Vec<f64> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        let variants = code::available_variants_f64();
        let expected = sum_by_constant_original(&arr, CONSTANT_F64);

        for variant in &variants {
            let result = (variant.function)(&arr, CONSTANT_F64);
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

/// Runner for the f32 scaled reduction (includes the AVX2 variant when
/// the hardware supports it)
pub struct SumByConstantF32Runner;

impl AlgorithmRunner for SumByConstantF32Runner {
    fn name(&self) -> &'static str {
        "sum_by_constant_f32"
    }

    fn description(&self) -> &'static str {
        "Scaled reduction sum(a[i] * k) over f32 arrays"
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
        let arr: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());

        code::available_variants_f32()
            .into_iter()
            .map(|v| {
                let arr = Arc::clone(&arr);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) =
                            crate::measure!(std::hint::black_box(func(&arr, CONSTANT_F32)));
                        (elapsed, Some(result as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        let arr: Vec<f32> = (0..VERIFY_LEN)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        let variants = code::available_variants_f32();
        let expected = sum_by_constant_original(&arr, CONSTANT_F32);

        for variant in &variants {
            let result = (variant.function)(&arr, CONSTANT_F32);
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
