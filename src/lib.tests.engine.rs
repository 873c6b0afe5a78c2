// Tests of strategy routing, precision policy, and the digit-sequence
// interface, included by lib.rs

mod routes {
    use super::*;

    fn values(source_radix: u64, target_radix: u64) -> Converter<char> {
        let source = NumeralSystem::standard(source_radix).unwrap();
        let target = NumeralSystem::standard(target_radix).unwrap();
        Converter::new(source, target)
    }

    #[test]
    fn equal_radices_remap_digit_for_digit() {
        let upper = NumeralSystem::standard(16).unwrap();
        let lower = NumeralSystem::from_text("0123456789abcdef").unwrap();
        let converter = Converter::new(upper, lower).with_backend(None);

        assert_eq!(converter.convert("BEEF").unwrap(), "beef");
    }

    #[test]
    fn power_pair_replaces_without_backend() {
        let converter = values(16, 4).with_backend(None);
        assert_eq!(converter.convert("1F.8").unwrap(), "133.2");
    }

    #[test]
    fn unrelated_pair_uses_long_division_without_backend() {
        let converter = values(10, 7).with_backend(None);
        assert_eq!(converter.convert("117").unwrap(), "225");
    }

    #[test]
    fn fraction_of_unrelated_pair_needs_a_backend() {
        let converter = values(10, 7).with_backend(None);
        assert_eq!(converter.convert("0.5"), Err(ConversionError::UnavailableConversion));
        assert_eq!(converter.convert("117.5"), Err(ConversionError::UnavailableConversion));
    }

    #[test]
    fn chunked_backend_converts_fractions() {
        let converter = values(10, 16).with_backend(Some(Backend::Chunked));
        assert_eq!(converter.convert("0.625").unwrap(), "0.A");
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn backends_agree_on_unrelated_pairs() {
        let input = "123456789012345678901234567890.25";
        let bigint = values(10, 36).with_backend(Some(Backend::BigInt));
        let chunked = values(10, 36).with_backend(Some(Backend::Chunked));

        assert_eq!(bigint.convert(input).unwrap(), chunked.convert(input).unwrap());
    }

    #[test]
    fn replacement_ignores_precision() {
        let converter = values(16, 2).with_precision(1);
        assert_eq!(converter.convert("0.01").unwrap(), "0.00000001");
    }

    #[test]
    fn identity_ignores_precision() {
        let converter = values(10, 10).with_precision(1);
        assert_eq!(converter.convert("0.123").unwrap(), "0.123");
    }

    #[test]
    fn round_trips_canonicalize() {
        let input = "986432110123455";
        let there = values(10, 36);
        let back = values(36, 10);

        assert_eq!(back.convert(&there.convert(input).unwrap()).unwrap(), input);
    }

    #[test]
    fn default_precision_comes_from_build() {
        let converter = values(10, 2);
        assert_eq!(converter.precision(), DEFAULT_PRECISION);
    }
}


mod sequence_interface {
    use super::*;

    #[test]
    fn integer_sequences_convert_between_symbol_types() {
        let hex = NumeralSystem::standard(16).unwrap();
        let grouped = NumeralSystem::numbered(1000).unwrap();
        let converter = Converter::new(hex, grouped);

        let digits: Vec<char> = "A37334".chars().collect();
        let expected: Vec<String> = vec!["#010".into(), "#711".into(), "#860".into()];
        assert_eq!(converter.convert_integer(&digits).unwrap(), expected);
    }

    #[test]
    fn sequences_are_unsigned_and_exact_symbol() {
        let hex = NumeralSystem::standard(16).unwrap();
        let dec = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(hex, dec);

        assert!(matches!(
            converter.convert_integer(&['f']),
            Err(ConversionError::InvalidDigit(_))
        ));
        assert_eq!(converter.convert_integer(&['F']).unwrap(), vec!['1', '5']);
    }

    #[test]
    fn fraction_sequences_apply_precision() {
        let ternary = NumeralSystem::standard(3).unwrap();
        let dec = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(ternary, dec).with_precision(6);

        assert_eq!(converter.convert_fraction(&['1']).unwrap(), vec!['3'; 6]);
    }

    #[test]
    fn sequences_trim_to_normal_form() {
        let source = NumeralSystem::standard(10).unwrap();
        let target = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert_integer(&['0', '0', '7']).unwrap(), vec!['7']);
        assert_eq!(converter.convert_integer(&['0']).unwrap(), vec!['0']);
        assert_eq!(converter.convert_integer(&[]).unwrap(), vec!['0']);
        assert_eq!(converter.convert_fraction(&['5', '0']).unwrap(), vec!['5']);
        assert_eq!(converter.convert_fraction(&[]).unwrap(), vec!['0']);
    }
}


mod precision_policy {
    use super::*;
    use paste::paste;

    fn decimal_to_ternary() -> Converter<char> {
        let dec = NumeralSystem::standard(10).unwrap();
        let ternary = NumeralSystem::standard(3).unwrap();
        Converter::new(dec, ternary)
    }

    // one source fraction digit carries ceil(ln 10 / ln 3) = 3 ternary
    // digits; non-positive precision adds digits on top of that
    macro_rules! impl_case {
        (- $prec:literal => $expected:literal) => {
            paste! { impl_case!([<case_n $prec>] : -$prec => $expected); }
        };
        ($prec:literal => $expected:literal) => {
            paste! { impl_case!([<case_ $prec>] : $prec => $expected); }
        };
        ($name:ident : $prec:expr => $expected:literal) => {
            #[test]
            fn $name() {
                let converter = decimal_to_ternary().with_precision($prec);
                assert_eq!(converter.convert("0.5").unwrap(), $expected);
            }
        };
    }

    impl_case!(1 => "0.1");
    impl_case!(2 => "0.11");
    impl_case!(5 => "0.11111");
    impl_case!(0 => "0.111");
    impl_case!(-1 => "0.1111");
    impl_case!(-3 => "0.111111");
}
