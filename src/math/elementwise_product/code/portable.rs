//! Portable-width SIMD implementation of the elementwise product.
//!
//! Full-width groups are loaded from both inputs, multiplied lanewise and
//! stored straight into the output at the same offset; no reduction happens.
//! The `len % W` tail is filled by the scalar loop over the same range.

use crate::math::lanes::{Element, LaneVec};

/// Compute `res[i] = a[i] * b[i]` with the lane width resolved at call time.
///
/// # Panics
/// Panics if the arrays have different lengths (checked before any element
/// access), or if the lane width resolver reports an unsupported width.
pub fn elementwise_product_portable<T: Element>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    match T::lanes() {
        16 => mul_groups::<T, 16>(a, b),
        8 => mul_groups::<T, 8>(a, b),
        4 => mul_groups::<T, 4>(a, b),
        2 => mul_groups::<T, 2>(a, b),
        1 => super::original::elementwise_product_original(a, b),
        w => panic!("unsupported lane width {} for element type", w),
    }
}

fn mul_groups<T: Element, const W: usize>(a: &[T], b: &[T]) -> Vec<T> {
    let len = a.len();
    let remain = len % W;
    let split = len - remain;

    let mut res = vec![T::ZERO; len];

    let groups = a[..split]
        .chunks_exact(W)
        .zip(b[..split].chunks_exact(W))
        .zip(res[..split].chunks_exact_mut(W));
    for ((ga, gb), gr) in groups {
        (LaneVec::<T, W>::load(ga) * LaneVec::load(gb)).store(gr);
    }

    for i in split..len {
        res[i] = a[i] * b[i];
    }

    res
}
