//! x86_64 AVX2 implementation of the scaled reduction, fixed at 8×f32.
//!
//! Same algorithmic shape as the portable kernel, but the loads, multiplies
//! and adds are explicit 256-bit intrinsics and the horizontal reduction
//! stores the accumulator to an 8-element scratch buffer summed scalar-wise.

use super::original::sum_by_constant_original;

const LANES: usize = 8;

/// Compute `sum(arr[i] * k)` with AVX2, 8 f32 lanes per iteration.
///
/// Callers must confirm AVX2 support via [`crate::hardware::has_avx2`]
/// before invoking this variant; there is no internal fallback.
pub fn sum_by_constant_x86_64_avx2(arr: &[f32], k: f32) -> f32 {
    // SAFETY: caller gates on has_avx2(); the registry only registers this
    // variant when the probe reports support.
    unsafe { sum_avx2(arr, k) }
}

#[target_feature(enable = "avx2")]
unsafe fn sum_avx2(arr: &[f32], k: f32) -> f32 {
    use std::arch::x86_64::*;

    let remain = arr.len() % LANES;
    let split = arr.len() - remain;

    let kv = _mm256_set1_ps(k);
    let mut acc = _mm256_setzero_ps();

    let mut i = 0;
    while i < split {
        let v = _mm256_loadu_ps(arr.as_ptr().add(i));
        acc = _mm256_add_ps(acc, _mm256_mul_ps(v, kv));
        i += LANES;
    }

    let mut scratch = [0.0f32; LANES];
    _mm256_storeu_ps(scratch.as_mut_ptr(), acc);
    let mut sum = 0.0f32;
    for &lane in &scratch {
        sum += lane;
    }

    sum + sum_by_constant_original(&arr[split..], k)
}
