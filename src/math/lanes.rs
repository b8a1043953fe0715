//! Width-generic vector register abstraction.
//!
//! `LaneVec<T, W>` is a plain value type holding `W` scalars. The lanewise
//! loops below compile to vector instructions when `W` matches (or divides)
//! the hardware register width, which is why callers must pick `W` through
//! the resolver in [`crate::hardware`] rather than hard-coding it. No heap
//! allocation happens per lane operation.

use std::iter::Sum;
use std::ops::{Add, Mul};

/// Element types the kernels operate on (f64 and f32).
///
/// `lanes()` reports the hardware vector width for the type; it is queried
/// once per kernel call, never per element.
pub trait Element:
    Copy + PartialEq + std::fmt::Debug + Add<Output = Self> + Mul<Output = Self> + Sum<Self> + 'static
{
    const ZERO: Self;

    /// Hardware lane width for this element type.
    fn lanes() -> usize;
}

impl Element for f64 {
    const ZERO: Self = 0.0;

    fn lanes() -> usize {
        crate::hardware::lanes_f64()
    }
}

impl Element for f32 {
    const ZERO: Self = 0.0;

    fn lanes() -> usize {
        crate::hardware::lanes_f32()
    }
}

/// A vector register of `W` lanes of `T`.
///
/// Ephemeral: created inside a kernel call and never escapes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneVec<T, const W: usize>([T; W]);

impl<T: Element, const W: usize> LaneVec<T, W> {
    /// The zero vector, the accumulator's initial value.
    #[inline]
    pub fn zero() -> Self {
        Self([T::ZERO; W])
    }

    /// Broadcast one scalar across all lanes.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; W])
    }

    /// Load `W` contiguous elements from the front of `src`.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `W` elements.
    #[inline]
    pub fn load(src: &[T]) -> Self {
        let mut lanes = [T::ZERO; W];
        lanes.copy_from_slice(&src[..W]);
        Self(lanes)
    }

    /// Store all lanes into the front of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` holds fewer than `W` elements.
    #[inline]
    pub fn store(self, dst: &mut [T]) {
        dst[..W].copy_from_slice(&self.0);
    }

    /// Horizontal reduction: sum the lanes in index order 0..W-1.
    ///
    /// The order is deterministic so results are reproducible within one
    /// execution. The input is consumed by value, never mutated in place.
    #[inline]
    pub fn reduce(self) -> T {
        let mut sum = T::ZERO;
        for lane in self.0 {
            sum = sum + lane;
        }
        sum
    }
}

impl<T: Element, const W: usize> Add for LaneVec<T, W> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut lanes = self.0;
        for (lane, r) in lanes.iter_mut().zip(rhs.0) {
            *lane = *lane + r;
        }
        Self(lanes)
    }
}

impl<T: Element, const W: usize> Mul for LaneVec<T, W> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut lanes = self.0;
        for (lane, r) in lanes.iter_mut().zip(rhs.0) {
            *lane = *lane * r;
        }
        Self(lanes)
    }
}

/// Lanewise multiply by a broadcast scalar.
impl<T: Element, const W: usize> Mul<T> for LaneVec<T, W> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        let mut lanes = self.0;
        for lane in lanes.iter_mut() {
            *lane = *lane * rhs;
        }
        Self(lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_round_trip() {
        let src = [1.0f64, 2.0, 3.0, 4.0];
        let v = LaneVec::<f64, 4>::load(&src);
        let mut dst = [0.0f64; 4];
        v.store(&mut dst);
        assert_eq!(src, dst);
    }

    #[test]
    fn test_load_reads_only_first_w() {
        let src = [1.0f32, 2.0, 3.0, 4.0, 99.0];
        let v = LaneVec::<f32, 4>::load(&src);
        assert_eq!(v.reduce(), 10.0);
    }

    #[test]
    fn test_reduce_sums_lanes_in_index_order() {
        // Ascending-order accumulation: ((1 + 2) + 3) + 4
        let v = LaneVec::<f64, 4>::load(&[1.0, 2.0, 3.0, 4.0]);
        let mut expected = 0.0f64;
        for x in [1.0, 2.0, 3.0, 4.0] {
            expected += x;
        }
        assert_eq!(v.reduce(), expected);
    }

    #[test]
    fn test_lanewise_ops() {
        let a = LaneVec::<f64, 2>::load(&[2.0, 3.0]);
        let b = LaneVec::<f64, 2>::load(&[5.0, 7.0]);
        assert_eq!((a * b).reduce(), 31.0);
        assert_eq!((a + b).reduce(), 17.0);
        assert_eq!((a * 10.0).reduce(), 50.0);
    }

    #[test]
    fn test_splat_and_zero() {
        assert_eq!(LaneVec::<f32, 8>::splat(1.5).reduce(), 12.0);
        assert_eq!(LaneVec::<f32, 8>::zero().reduce(), 0.0);
    }
}
