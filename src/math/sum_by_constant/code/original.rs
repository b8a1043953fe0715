//! Original (reference) implementation of the scaled reduction.
//!
//! A strictly in-order indexed loop with a single running accumulator. This
//! is the correctness baseline for every other variant and also processes
//! the remainder range for the vectorized kernels.

use crate::math::lanes::Element;

/// Accumulate `arr[i] * k` over `i = 0..len-1` in increasing index order.
///
/// An empty array returns zero. Deterministic: one accumulator, one
/// reduction order.
///
/// # Example
/// ```
/// use simd_mult_bench::math::sum_by_constant::sum_by_constant_original;
///
/// let arr = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = sum_by_constant_original(&arr, 2.0);
/// assert!((result - 30.0_f64).abs() < 1e-12);
/// ```
pub fn sum_by_constant_original<T: Element>(arr: &[T], k: T) -> T {
    let mut sum = T::ZERO;
    for i in 0..arr.len() {
        sum = sum + arr[i] * k;
    }
    sum
}
