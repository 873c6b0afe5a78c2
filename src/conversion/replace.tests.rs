fn bits(s: &str) -> Vec<u64> {
    s.chars().map(|c| c.to_digit(2).unwrap() as u64).collect()
}

mod pairing {
    use super::*;

    #[test]
    fn power_pair_finds_root() {
        let conv = Replace::new(4, 8).unwrap();
        assert_eq!(conv.root(), 2);
    }

    #[test]
    fn containing_pair_uses_smaller_radix() {
        let conv = Replace::new(4, 16).unwrap();
        assert_eq!(conv.root(), 4);
    }

    #[test]
    fn unrelated_pair_is_unavailable() {
        let result = Replace::new(5, 7);
        assert!(matches!(result, Err(ConversionError::UnavailableConversion)));
    }

    #[test]
    fn equal_radixes_pair_as_themselves() {
        let conv = Replace::new(16, 16).unwrap();
        assert_eq!(conv.root(), 16);
    }
}

mod integer_parts {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $src:literal -> $dst:literal; $input:expr => $expected:expr ) => {
            #[test]
            fn $name() {
                let conv = Replace::new($src, $dst).unwrap();
                let out = conv.integer(&$input).unwrap();
                assert_eq!(out, $expected);
            }
        };
    }

    impl_case!(case_hex_to_bits: 16 -> 2;
        [10u64, 3, 7, 3, 3, 4] => bits("101000110111001100110100"));
    impl_case!(case_bits_to_hex: 2 -> 16;
        bits("101000110111001100110100") => vec![10, 3, 7, 3, 3, 4]);
    impl_case!(case_base4_to_base8: 4 -> 8; [3u64, 1] => vec![1, 5]);
    impl_case!(case_base8_to_base4: 8 -> 4; [1u64, 5] => vec![3, 1]);
    impl_case!(case_bits_to_base64: 2 -> 64;
        bits("101000110111001100110100") => vec![40, 55, 12, 52]);
    impl_case!(case_pad_most_significant: 2 -> 16; bits("1111111") => vec![7, 15]);
    impl_case!(case_zero_collapses: 16 -> 2; [0u64, 0, 0] => vec![0]);
    impl_case!(case_identity_width: 16 -> 16; [15u64, 0, 9] => vec![15, 0, 9]);

    #[test]
    fn case_digit_outside_radix() {
        let conv = Replace::new(16, 2).unwrap();
        let result = conv.integer(&[10, 16]);
        assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
    }
}

mod fraction_parts {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $src:literal -> $dst:literal; $input:expr => $expected:expr ) => {
            #[test]
            fn $name() {
                let conv = Replace::new($src, $dst).unwrap();
                let out = conv.fraction(&$input, 1).unwrap();
                assert_eq!(out, $expected);
            }
        };
    }

    // budget is irrelevant here; replacement is exact

    impl_case!(case_quarter_base4_to_8: 4 -> 8; [1u64] => vec![2]);
    impl_case!(case_half_base4_to_8: 4 -> 8; [2u64] => vec![4]);
    impl_case!(case_hex_fraction_to_bits: 16 -> 2; [10u64] => bits("101"));
    impl_case!(case_pad_least_significant: 2 -> 16; bits("1") => vec![8]);
    impl_case!(case_trailing_zeros_trimmed: 16 -> 2; [8u64] => vec![1]);
    impl_case!(case_zero_fraction: 4 -> 2; [0u64] => vec![0]);

    #[test]
    fn round_trips_preserve_fraction_digits() {
        let fwd = Replace::new(16, 4).unwrap();
        let back = Replace::new(4, 16).unwrap();
        let digits = [11u64, 0, 5, 12];
        let there = fwd.fraction(&digits, 1).unwrap();
        let home = back.fraction(&there, 1).unwrap();
        assert_eq!(home, digits);
    }
}
