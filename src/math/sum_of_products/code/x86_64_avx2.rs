//! x86_64 AVX2 implementation of the reduced product, fixed at 8×f32.

use super::original::sum_of_products_original;

const LANES: usize = 8;

/// Compute `sum(a[i] * b[i])` with AVX2, 8 f32 lanes per iteration.
///
/// Callers must confirm AVX2 support via [`crate::hardware::has_avx2`]
/// before invoking this variant; there is no internal fallback.
///
/// # Panics
/// Panics if the arrays have different lengths (checked before any element
/// access).
pub fn sum_of_products_x86_64_avx2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    // SAFETY: caller gates on has_avx2(); the registry only registers this
    // variant when the probe reports support.
    unsafe { dot_avx2(a, b) }
}

#[target_feature(enable = "avx2")]
unsafe fn dot_avx2(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    let remain = a.len() % LANES;
    let split = a.len() - remain;

    let mut acc = _mm256_setzero_ps();

    let mut i = 0;
    while i < split {
        let va = _mm256_loadu_ps(a.as_ptr().add(i));
        let vb = _mm256_loadu_ps(b.as_ptr().add(i));
        acc = _mm256_add_ps(acc, _mm256_mul_ps(va, vb));
        i += LANES;
    }

    let mut scratch = [0.0f32; LANES];
    _mm256_storeu_ps(scratch.as_mut_ptr(), acc);
    let mut sum = 0.0f32;
    for &lane in &scratch {
        sum += lane;
    }

    sum + sum_of_products_original(&a[split..], &b[split..])
}
