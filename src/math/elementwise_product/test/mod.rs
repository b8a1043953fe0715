//! Tests for the elementwise-product variants.

#[cfg(test)]
mod tests {
    use crate::hardware;
    use crate::math::elementwise_product::code::*;
    use crate::utils::bench::SeededRng;

    fn random_f64(len: usize, seed: u64) -> Vec<f64> {
        let mut rng = SeededRng::new(seed);
        (0..len).map(|_| rng.next_f64_range()).collect()
    }

    #[test]
    fn test_original_basic() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0f64, 5.0, 6.0];
        assert_eq!(elementwise_product_original(&a, &b), vec![4.0, 10.0, 18.0]);
    }

    #[test]
    fn test_original_empty() {
        let a: [f64; 0] = [];
        let b: [f64; 0] = [];
        assert!(elementwise_product_original(&a, &b).is_empty());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_original_length_mismatch() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [1.0f64, 2.0, 3.0, 4.0];
        elementwise_product_original(&a, &b);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_portable_length_mismatch() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [1.0f64, 2.0, 3.0, 4.0];
        elementwise_product_portable(&a, &b);
    }

    #[test]
    fn test_output_length_and_exact_products() {
        let a = random_f64(999, 11);
        let b = random_f64(999, 12);
        let out = elementwise_product_portable(&a, &b);

        assert_eq!(out.len(), a.len());
        for i in 0..a.len() {
            // Single multiply per element: bit-exact, no tolerance.
            assert_eq!(out[i], a[i] * b[i], "index {}", i);
        }
    }

    #[test]
    fn test_variants_bitwise_identical_across_remainders() {
        let w = hardware::lanes_f64();
        for len in 0..=4 * w + 3 {
            let a = random_f64(len, 13);
            let b = random_f64(len, 14);
            let expected = elementwise_product_original(&a, &b);

            assert_eq!(elementwise_product_iter(&a, &b), expected, "iter, len {}", len);
            assert_eq!(
                elementwise_product_portable(&a, &b),
                expected,
                "portable, len {}",
                len
            );
        }
    }

    #[test]
    fn test_portable_f32() {
        // The engine is width-generic; exercise the f32 monomorphizations too.
        let a: Vec<f32> = (1..=21).map(|i| i as f32).collect();
        let b: Vec<f32> = (1..=21).map(|i| (i * 2) as f32).collect();
        let out = elementwise_product_portable(&a, &b);
        assert_eq!(out, elementwise_product_original(&a, &b));
    }
}
