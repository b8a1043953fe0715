//! # Simd-Mult-Bench
//!
//! Multiple equivalent strategies for two multiply/accumulate kernels over
//! flat float arrays, benchmarked against each other: a scaled reduction
//! `sum(a[i] * k)`, a reduced product `sum(a[i] * b[i])`, and a non-reducing
//! elementwise product `c[i] = a[i] * b[i]`.

pub mod hardware;
pub mod math;
pub mod registry;
pub mod utils;

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::hardware;
    pub use crate::math::{elementwise_product, sum_by_constant, sum_of_products};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
