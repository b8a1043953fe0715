//! Tests for the scaled-reduction variants.

#[cfg(test)]
mod tests {
    use crate::hardware;
    use crate::math::sum_by_constant::code::*;

    fn assert_close_f64(a: f64, b: f64, msg: &str) {
        let tolerance = 1e-9 * b.abs().max(1.0);
        let diff = (a - b).abs();
        assert!(
            diff <= tolerance,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    fn assert_close_f32(a: f32, b: f32, msg: &str) {
        let tolerance = 1e-5 * b.abs().max(1.0);
        let diff = (a - b).abs();
        assert!(
            diff <= tolerance,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    /// Sawtooth 1..10 test data, matching the original benchmark inputs.
    fn sawtooth_f64(len: usize) -> Vec<f64> {
        (1..=len).map(|i| (i - (i - 1) / 10 * 10) as f64).collect()
    }

    fn sawtooth_f32(len: usize) -> Vec<f32> {
        sawtooth_f64(len).into_iter().map(|x| x as f32).collect()
    }

    #[test]
    fn test_original_basic() {
        let arr = [1.0f64, 2.0, 3.0, 4.0, 5.0];
        // (1 + 2 + 3 + 4 + 5) * 2 = 30
        assert_close_f64(sum_by_constant_original(&arr, 2.0), 30.0, "original basic");
    }

    #[test]
    fn test_original_empty() {
        let arr: [f64; 0] = [];
        assert_eq!(sum_by_constant_original(&arr, 2.0), 0.0);
    }

    #[test]
    fn test_iterator_variants_match_original() {
        let arr = sawtooth_f64(999);
        let k = std::f64::consts::PI;
        let expected = sum_by_constant_original(&arr, k);
        assert_close_f64(sum_by_constant_iter(&arr, k), expected, "iterator");
        assert_close_f64(sum_by_constant_fold(&arr, k), expected, "fold");
    }

    #[test]
    fn test_portable_one_past_lane_boundary() {
        // Length 9 is one past an 8-wide group: exactly one tail element.
        let arr = [1.0f32; 9];
        assert_close_f32(sum_by_constant_portable(&arr, 1.0), 9.0, "len 9, k=1");
    }

    #[test]
    fn test_portable_shorter_than_lane_width() {
        // Degenerate case: zero vector iterations, the whole array is tail.
        let arr = [3.0f64];
        assert_close_f64(sum_by_constant_portable(&arr, 2.0), 6.0, "single element");
        let empty: [f64; 0] = [];
        assert_eq!(sum_by_constant_portable(&empty, 2.0), 0.0);
    }

    #[test]
    fn test_portable_matches_original_across_remainders_f64() {
        let w = hardware::lanes_f64();
        for len in 0..=4 * w + 3 {
            let arr = sawtooth_f64(len);
            let k = std::f64::consts::PI;
            assert_close_f64(
                sum_by_constant_portable(&arr, k),
                sum_by_constant_original(&arr, k),
                &format!("portable f64, len {}", len),
            );
        }
    }

    #[test]
    fn test_portable_matches_original_across_remainders_f32() {
        let w = hardware::lanes_f32();
        for len in 0..=4 * w + 3 {
            let arr = sawtooth_f32(len);
            let k = std::f32::consts::PI;
            assert_close_f32(
                sum_by_constant_portable(&arr, k),
                sum_by_constant_original(&arr, k),
                &format!("portable f32, len {}", len),
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
            let arr = sawtooth_f32(len);
            let k = std::f32::consts::PI;
            assert_close_f32(
                sum_by_constant_x86_64_avx2(&arr, k),
                sum_by_constant_original(&arr, k),
                &format!("avx2, len {}", len),
            );
        }
    }
}
