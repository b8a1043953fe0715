//! Iterator rendition of the elementwise product.

use crate::math::lanes::Element;

/// `zip` + `map` + `collect` over both arrays.
///
/// # Panics
/// Panics if the arrays have different lengths.
pub fn elementwise_product_iter<T: Element>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).collect()
}
