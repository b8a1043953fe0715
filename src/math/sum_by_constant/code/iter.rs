//! Iterator renditions of the scaled reduction.
//!
//! Same reduction order as the indexed loop, expressed through the iterator
//! adapters the standard library optimizes well.

use crate::math::lanes::Element;

/// `map` + `sum` over the array.
pub fn sum_by_constant_iter<T: Element>(arr: &[T], k: T) -> T {
    arr.iter().map(|&x| x * k).sum()
}

/// Explicit left fold with the accumulator threaded through.
pub fn sum_by_constant_fold<T: Element>(arr: &[T], k: T) -> T {
    arr.iter().fold(T::ZERO, |acc, &x| acc + x * k)
}
