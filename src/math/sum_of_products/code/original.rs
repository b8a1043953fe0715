//! Original (reference) implementation of the reduced product.

use crate::math::lanes::Element;

/// Accumulate `a[i] * b[i]` over `i = 0..len-1` in increasing index order.
///
/// An empty pair of arrays returns zero.
///
/// # Panics
/// Panics if the arrays have different lengths.
///
/// # Example
/// ```
/// use simd_mult_bench::math::sum_of_products::sum_of_products_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = sum_of_products_original(&a, &b);
/// assert!((result - 32.0_f64).abs() < 1e-12);
/// ```
pub fn sum_of_products_original<T: Element>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    let mut sum = T::ZERO;
    for i in 0..a.len() {
        sum = sum + a[i] * b[i];
    }
    sum
}
