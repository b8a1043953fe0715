//! Tests for the reduced-product variants.

#[cfg(test)]
mod tests {
    use crate::hardware;
    use crate::math::elementwise_product::elementwise_product_original;
    use crate::math::sum_of_products::code::*;
    use crate::utils::bench::SeededRng;

    fn random_f64(len: usize, seed: u64) -> Vec<f64> {
        let mut rng = SeededRng::new(seed);
        (0..len).map(|_| rng.next_f64_range()).collect()
    }

    fn random_f32(len: usize, seed: u64) -> Vec<f32> {
        let mut rng = SeededRng::new(seed);
        (0..len).map(|_| rng.next_f32_range()).collect()
    }

    #[test]
    fn test_original_basic() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0f64, 5.0, 6.0];
        // 1*4 + 2*5 + 3*6 = 32
        assert_eq!(sum_of_products_original(&a, &b), 32.0);
    }

    #[test]
    fn test_original_empty() {
        let a: [f64; 0] = [];
        let b: [f64; 0] = [];
        assert_eq!(sum_of_products_original(&a, &b), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_original_length_mismatch() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [1.0f64, 2.0, 3.0, 4.0];
        sum_of_products_original(&a, &b);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_portable_length_mismatch() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [1.0f64, 2.0, 3.0, 4.0];
        sum_of_products_portable(&a, &b);
    }

    #[test]
    fn test_portable_matches_original_across_remainders_f64() {
        let w = hardware::lanes_f64();
        for len in 0..=4 * w + 3 {
            let a = random_f64(len, 1);
            let b = random_f64(len, 2);
            let expected = sum_of_products_original(&a, &b);
            let result = sum_of_products_portable(&a, &b);
            let diff = (result - expected).abs();
            assert!(
                diff <= 1e-9 * expected.abs().max(1.0),
                "portable f64, len {}: expected {}, got {}",
                len,
                expected,
                result
            );
        }
    }

    #[test]
    fn test_portable_matches_original_across_remainders_f32() {
        let w = hardware::lanes_f32();
        for len in 0..=4 * w + 3 {
            let a = random_f32(len, 3);
            let b = random_f32(len, 4);
            let expected = sum_of_products_original(&a, &b);
            let result = sum_of_products_portable(&a, &b);
            let diff = (result - expected).abs();
            assert!(
                diff <= 1e-4 * expected.abs().max(1.0),
                "portable f32, len {}: expected {}, got {}",
                len,
                expected,
                result
            );
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_avx2_matches_original_across_remainders() {
        if !hardware::has_avx2() {
            return;
        }
        for len in 0..=4 * 8 + 3 {
            let a = random_f32(len, 5);
            let b = random_f32(len, 6);
            let expected = sum_of_products_original(&a, &b);
            let result = sum_of_products_x86_64_avx2(&a, &b);
            let diff = (result - expected).abs();
            assert!(
                diff <= 1e-4 * expected.abs().max(1.0),
                "avx2, len {}: expected {}, got {}",
                len,
                expected,
                result
            );
        }
    }

    #[test]
    fn test_reduction_agrees_with_summed_elementwise_product() {
        let a = random_f64(999, 7);
        let b = random_f64(999, 8);
        let summed: f64 = elementwise_product_original(&a, &b).iter().sum();
        let result = sum_of_products_portable(&a, &b);
        let diff = (result - summed).abs();
        assert!(
            diff <= 1e-9 * summed.abs().max(1.0),
            "expected {}, got {}",
            summed,
            result
        );
    }
}
