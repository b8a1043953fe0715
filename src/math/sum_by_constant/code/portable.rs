//! Portable-width SIMD implementation of the scaled reduction.
//!
//! The array is split into full-width lane groups plus a scalar tail of
//! `len % W` elements. Full groups are multiplied lanewise against the
//! broadcast constant and added into a lane accumulator, which is then
//! horizontally reduced; the tail goes through the scalar kernel.

use super::original::sum_by_constant_original;
use crate::math::lanes::{Element, LaneVec};

/// Compute `sum(arr[i] * k)` with the lane width resolved at call time.
///
/// If `arr.len() < W` the vector loop runs zero iterations and the whole
/// array is the remainder.
///
/// # Panics
/// Panics if the lane width resolver reports an unsupported width
/// (configuration error).
pub fn sum_by_constant_portable<T: Element>(arr: &[T], k: T) -> T {
    match T::lanes() {
        16 => sum_groups::<T, 16>(arr, k),
        8 => sum_groups::<T, 8>(arr, k),
        4 => sum_groups::<T, 4>(arr, k),
        2 => sum_groups::<T, 2>(arr, k),
        1 => sum_by_constant_original(arr, k),
        w => panic!("unsupported lane width {} for element type", w),
    }
}

fn sum_groups<T: Element, const W: usize>(arr: &[T], k: T) -> T {
    let remain = arr.len() % W;
    let split = arr.len() - remain;

    let kv = LaneVec::<T, W>::splat(k);
    let mut acc = LaneVec::<T, W>::zero();
    for group in arr[..split].chunks_exact(W) {
        acc = acc + LaneVec::load(group) * kv;
    }

    acc.reduce() + sum_by_constant_original(&arr[split..], k)
}
