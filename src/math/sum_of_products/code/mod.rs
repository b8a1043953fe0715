//! Reduced-product implementations.
//!
//! This module contains all implementation variants of `sum(a[i] * b[i])`.

mod original;
mod portable;
#[cfg(target_arch = "x86_64")]
mod x86_64_avx2;

pub use original::sum_of_products_original;
pub use portable::sum_of_products_portable;
#[cfg(target_arch = "x86_64")]
pub use x86_64_avx2::sum_of_products_x86_64_avx2;

use crate::utils::VariantInfo;

/// Type alias for the reduced-product function signature
pub type SumOfProductsFn<T> = fn(&[T], &[T]) -> T;

/// Get all f64 variants
pub fn available_variants_f64() -> Vec<VariantInfo<SumOfProductsFn<f64>>> {
    vec![
        VariantInfo {
            name: "original",
            description: "In-order indexed loop, single accumulator",
            function: sum_of_products_original::<f64>,
        },
        VariantInfo {
            name: "portable-simd",
            description: "Width-generic lane groups + scalar tail",
            function: sum_of_products_portable::<f64>,
        },
    ]
}

/// Get all f32 variants available on the current CPU
pub fn available_variants_f32() -> Vec<VariantInfo<SumOfProductsFn<f32>>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<SumOfProductsFn<f32>>> = vec![
        VariantInfo {
            name: "original",
            description: "In-order indexed loop, single accumulator",
            function: sum_of_products_original::<f32>,
        },
        VariantInfo {
            name: "portable-simd",
            description: "Width-generic lane groups + scalar tail",
            function: sum_of_products_portable::<f32>,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    if crate::hardware::has_avx2() {
        variants.push(VariantInfo {
            name: "x86_64-avx2",
            description: "Explicit AVX2 intrinsics, 8 f32 lanes",
            function: sum_of_products_x86_64_avx2,
        });
    }

    variants
}
