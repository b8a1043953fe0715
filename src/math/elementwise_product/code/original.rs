//! Original (reference) implementation of the elementwise product.

use crate::math::lanes::Element;

/// Compute `res[i] = a[i] * b[i]` for all i into a newly allocated array.
///
/// Unlike the reductions this is not order-sensitive: each output element is
/// a single rounding, so results are bit-reproducible across variants. Empty
/// inputs yield an empty output.
///
/// # Panics
/// Panics if the arrays have different lengths.
pub fn elementwise_product_original<T: Element>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    let mut res = vec![T::ZERO; a.len()];
    for i in 0..a.len() {
        res[i] = a[i] * b[i];
    }
    res
}
