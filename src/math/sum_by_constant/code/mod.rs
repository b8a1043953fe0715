//! Scaled-reduction implementations.
//!
//! This module contains all implementation variants of `sum(arr[i] * k)`.

mod iter;
mod original;
mod portable;
#[cfg(target_arch = "x86_64")]
mod x86_64_avx2;

pub use iter::{sum_by_constant_fold, sum_by_constant_iter};
pub use original::sum_by_constant_original;
pub use portable::sum_by_constant_portable;
#[cfg(target_arch = "x86_64")]
pub use x86_64_avx2::sum_by_constant_x86_64_avx2;

use crate::utils::VariantInfo;

/// Type alias for the scaled-reduction function signature
pub type SumByConstantFn<T> = fn(&[T], T) -> T;

/// Get all f64 variants
pub fn available_variants_f64() -> Vec<VariantInfo<SumByConstantFn<f64>>> {
    vec![
        VariantInfo {
            name: "original",
            description: "In-order indexed loop, single accumulator",
            function: sum_by_constant_original::<f64>,
        },
        VariantInfo {
            name: "iterator",
            description: "Iterator map + sum",
            function: sum_by_constant_iter::<f64>,
        },
        VariantInfo {
            name: "fold",
            description: "Iterator left fold",
            function: sum_by_constant_fold::<f64>,
        },
        VariantInfo {
            name: "portable-simd",
            description: "Width-generic lane groups + scalar tail",
            function: sum_by_constant_portable::<f64>,
        },
    ]
}

/// Get all f32 variants available on the current CPU
pub fn available_variants_f32() -> Vec<VariantInfo<SumByConstantFn<f32>>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<SumByConstantFn<f32>>> = vec![
        VariantInfo {
            name: "original",
            description: "In-order indexed loop, single accumulator",
            function: sum_by_constant_original::<f32>,
        },
        VariantInfo {
            name: "iterator",
            description: "Iterator map + sum",
            function: sum_by_constant_iter::<f32>,
        },
        VariantInfo {
            name: "fold",
            description: "Iterator left fold",
            function: sum_by_constant_fold::<f32>,
        },
        VariantInfo {
            name: "portable-simd",
            description: "Width-generic lane groups + scalar tail",
            function: sum_by_constant_portable::<f32>,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    if crate::hardware::has_avx2() {
        variants.push(VariantInfo {
            name: "x86_64-avx2",
            description: "Explicit AVX2 intrinsics, 8 f32 lanes",
            function: sum_by_constant_x86_64_avx2,
        });
    }

    variants
}
