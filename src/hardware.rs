//! Hardware capability probing and lane width resolution.
//!
//! The lane width for an element type is the number of scalars one vector
//! register holds on the executing CPU. Reporting a width larger than the
//! hardware supports is a correctness bug (the generic kernels would be
//! dispatched to a monomorphization the CPU cannot accelerate); a too-small
//! width only costs performance. Widths are resolved once per call site, not
//! per element — `is_x86_feature_detected!` caches its CPUID results.

/// Whether the CPU offers any vector acceleration for float arithmetic.
pub fn has_vector_hardware() -> bool {
    lanes_f32() > 1
}

/// Whether the fixed-width 8×f32 AVX2 instruction set is available.
///
/// The AVX2 kernels have no internal fallback; callers must gate on this
/// before invoking them.
#[cfg(target_arch = "x86_64")]
pub fn has_avx2() -> bool {
    std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(not(target_arch = "x86_64"))]
pub fn has_avx2() -> bool {
    false
}

/// Number of f64 lanes in the widest available vector register.
pub fn lanes_f64() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("avx512f") {
            8
        } else if std::arch::is_x86_feature_detected!("avx2") {
            4
        } else {
            // SSE2 is part of the x86_64 baseline
            2
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        // NEON, 128-bit registers
        2
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        1
    }
}

/// Number of f32 lanes in the widest available vector register.
pub fn lanes_f32() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("avx512f") {
            16
        } else if std::arch::is_x86_feature_detected!("avx2") {
            8
        } else {
            4
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        4
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_widths_positive() {
        assert!(lanes_f64() >= 1);
        assert!(lanes_f32() >= 1);
    }

    #[test]
    fn test_lane_widths_power_of_two() {
        assert!(lanes_f64().is_power_of_two());
        assert!(lanes_f32().is_power_of_two());
    }

    #[test]
    fn test_f32_at_least_as_wide_as_f64() {
        assert!(lanes_f32() >= lanes_f64());
    }

    #[test]
    fn test_avx2_implies_vector_hardware() {
        if has_avx2() {
            assert!(has_vector_hardware());
            assert!(lanes_f32() >= 8);
        }
    }
}
