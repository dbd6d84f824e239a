use super::DiffOptions;

/// Difference of two 8-bit channel samples.
///
/// Subtraction wraps modulo 256: `10 - 20` is `246`, never clamped. With a
/// non-zero base the delta is subtracted from the base, so equal samples
/// render as `base` instead of black.
pub fn diff_channel(a: u8, b: u8, options: &DiffOptions) -> u8 {
    let base = options.base;

    if options.amplify && a != b {
        return if base != 0 { 0 } else { 255 };
    }

    let delta = if options.reverse {
        b.wrapping_sub(a)
    } else {
        a.wrapping_sub(b)
    };

    if base != 0 {
        base.wrapping_sub(delta)
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(reverse: bool, amplify: bool, base: u8) -> DiffOptions {
        DiffOptions {
            reverse,
            amplify,
            highlight: None,
            base,
        }
    }

    #[test]
    fn equal_samples_are_zero() {
        let plain = DiffOptions::default();
        for v in [0u8, 1, 127, 128, 254, 255] {
            assert_eq!(diff_channel(v, v, &plain), 0);
        }
    }

    #[test]
    fn subtraction_wraps() {
        let plain = DiffOptions::default();
        assert_eq!(diff_channel(0, 1, &plain), 255);
        assert_eq!(diff_channel(10, 20, &plain), 246);
        assert_eq!(diff_channel(20, 10, &plain), 10);
        assert_eq!(diff_channel(0, 5, &plain), 251);
    }

    #[test]
    fn reverse_swaps_operands() {
        let reverse = options(true, false, 0);
        assert_eq!(diff_channel(10, 20, &reverse), 10);
        assert_eq!(diff_channel(20, 10, &reverse), 246);
        assert_eq!(diff_channel(1, 0, &reverse), 255);
    }

    #[test]
    fn base_recenters_no_difference() {
        let based = options(false, false, 128);
        assert_eq!(diff_channel(50, 50, &based), 128);
        // 128 - (60 - 50)
        assert_eq!(diff_channel(60, 50, &based), 118);
        // 128 - (50 - 60 mod 256) = 128 - 246 mod 256
        assert_eq!(diff_channel(50, 60, &based), 138);
    }

    #[test]
    fn base_with_reverse() {
        let based = options(true, false, 100);
        assert_eq!(diff_channel(7, 7, &based), 100);
        // 100 - (60 - 50)
        assert_eq!(diff_channel(50, 60, &based), 90);
        // 100 - (50 - 60 mod 256)
        assert_eq!(diff_channel(60, 50, &based), 110);
    }

    #[test]
    fn base_subtraction_wraps() {
        let based = options(false, false, 5);
        // 5 - 10 mod 256
        assert_eq!(diff_channel(10, 0, &based), 251);
    }

    #[test]
    fn amplify_is_binary() {
        let amplify = options(false, true, 0);
        assert_eq!(diff_channel(10, 11, &amplify), 255);
        assert_eq!(diff_channel(200, 0, &amplify), 255);
        assert_eq!(diff_channel(42, 42, &amplify), 0);

        let amplify_based = options(false, true, 90);
        assert_eq!(diff_channel(10, 11, &amplify_based), 0);
        assert_eq!(diff_channel(42, 42, &amplify_based), 90);
    }

    #[test]
    fn amplify_takes_precedence_over_reverse() {
        let both = options(true, true, 0);
        assert_eq!(diff_channel(10, 20, &both), 255);
        assert_eq!(diff_channel(20, 20, &both), 0);
    }

    #[test]
    fn exhaustive_wrapping_matches_modular_arithmetic() {
        let plain = DiffOptions::default();
        let reverse = options(true, false, 0);
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let expected = ((a as i32 - b as i32).rem_euclid(256)) as u8;
                assert_eq!(diff_channel(a, b, &plain), expected);
                let expected = ((b as i32 - a as i32).rem_euclid(256)) as u8;
                assert_eq!(diff_channel(a, b, &reverse), expected);
            }
        }
    }
}
