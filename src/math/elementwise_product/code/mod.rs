//! Elementwise-product implementations.
//!
//! This module contains all implementation variants of `res[i] = a[i] * b[i]`.

mod iter;
mod original;
mod portable;

pub use iter::elementwise_product_iter;
pub use original::elementwise_product_original;
pub use portable::elementwise_product_portable;

use crate::utils::VariantInfo;

/// Type alias for the elementwise-product function signature
pub type ElementwiseProductFn<T> = fn(&[T], &[T]) -> Vec<T>;

/// Get all f64 variants
pub fn available_variants_f64() -> Vec<VariantInfo<ElementwiseProductFn<f64>>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Indexed loop into a freshly allocated output",
            function: elementwise_product_original::<f64>,
        },
        VariantInfo {
            name: "iterator",
            description: "Iterator zip + map + collect",
            function: elementwise_product_iter::<f64>,
        },
        VariantInfo {
            name: "portable-simd",
            description: "Width-generic lane groups stored to the output + scalar tail",
            function: elementwise_product_portable::<f64>,
        },
    ]
}
