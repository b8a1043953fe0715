//! Portable-width SIMD implementation of the reduced product.
//!
//! Both inputs are walked in lockstep: each full-width group is loaded from
//! `a` and `b`, multiplied lanewise and added into the lane accumulator.
//! The accumulator is horizontally reduced and the `len % W` tail goes
//! through the scalar kernel.

use super::original::sum_of_products_original;
use crate::math::lanes::{Element, LaneVec};

/// Compute `sum(a[i] * b[i])` with the lane width resolved at call time.
///
/// # Panics
/// Panics if the arrays have different lengths (checked before any element
/// access), or if the lane width resolver reports an unsupported width.
pub fn sum_of_products_portable<T: Element>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "Arrays must have the same length");

    match T::lanes() {
        16 => dot_groups::<T, 16>(a, b),
        8 => dot_groups::<T, 8>(a, b),
        4 => dot_groups::<T, 4>(a, b),
        2 => dot_groups::<T, 2>(a, b),
        1 => sum_of_products_original(a, b),
        w => panic!("unsupported lane width {} for element type", w),
    }
}

fn dot_groups<T: Element, const W: usize>(a: &[T], b: &[T]) -> T {
    let remain = a.len() % W;
    let split = a.len() - remain;

    let mut acc = LaneVec::<T, W>::zero();
    for (ga, gb) in a[..split].chunks_exact(W).zip(b[..split].chunks_exact(W)) {
        acc = acc + LaneVec::load(ga) * LaneVec::load(gb);
    }

    acc.reduce() + sum_of_products_original(&a[split..], &b[split..])
}
