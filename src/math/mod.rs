//! Multiply/accumulate kernels and their strategy variants.

pub mod elementwise_product;
pub mod lanes;
pub mod sum_by_constant;
pub mod sum_of_products;
