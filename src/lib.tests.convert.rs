// Tests of text conversion through Converter::convert, included by lib.rs

macro_rules! impl_case {
    ($name:ident : $src:literal -> $tgt:literal ; $input:literal => $expected:literal) => {
        #[test]
        fn $name() {
            let source = NumeralSystem::standard($src).unwrap();
            let target = NumeralSystem::standard($tgt).unwrap();
            let converter = Converter::new(source, target);
            assert_eq!(converter.convert($input).unwrap(), $expected);
        }
    };
    ($name:ident : $src:literal -> $tgt:literal , precision $p:literal ; $input:literal => $expected:literal) => {
        #[test]
        fn $name() {
            let source = NumeralSystem::standard($src).unwrap();
            let target = NumeralSystem::standard($tgt).unwrap();
            let converter = Converter::new(source, target).with_precision($p);
            assert_eq!(converter.convert($input).unwrap(), $expected);
        }
    };
}

impl_case!(case_hex_to_binary: 16 -> 2; "A37334" => "101000110111001100110100");
impl_case!(case_binary_to_hex: 2 -> 16; "101000110111001100110100" => "A37334");
impl_case!(case_decimal_to_base62: 10 -> 62; "3843" => "zz");
impl_case!(case_base64_to_decimal: 64 -> 10; "BA" => "64");
impl_case!(case_lowercase_hex_folds_to_canonical: 16 -> 10; "ff" => "255");
impl_case!(case_zero_survives: 10 -> 2; "0" => "0");
impl_case!(case_zero_keeps_sign: 16 -> 10; "-0" => "-0");
impl_case!(case_same_radix_canonicalizes: 10 -> 10; "007.500" => "7.5");
impl_case!(case_zero_fraction_keeps_separator: 10 -> 2; "3.0" => "11.0");

impl_case!(case_negative_hex_to_decimal: 16 -> 10, precision 1; "-1BCC7.A" => "-113863.6");
impl_case!(case_ternary_fraction_expands: 3 -> 10, precision 6; "0.1" => "0.333333");
impl_case!(case_hex_fraction_equivalent_length: 16 -> 10, precision 0; "0.A7" => "0.652");
impl_case!(case_repeating_fraction_truncates: 10 -> 3, precision 5; "0.5" => "0.11111");

// default precision: one extra digit past the equivalent length
impl_case!(case_decimal_fraction_to_binary: 10 -> 2; "0.1" => "0.00011");
// exact results stop before the budget runs out
impl_case!(case_terminating_fraction_stops_early: 10 -> 2; "0.5" => "0.1");

impl_case!(case_wide_integer: 10 -> 16;
           "340282366920938463463374607431768211455" => "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");


mod malformed_inputs {
    use super::*;

    fn hex_to_decimal() -> Converter<char> {
        let hex = NumeralSystem::standard(16).unwrap();
        let dec = NumeralSystem::standard(10).unwrap();
        Converter::new(hex, dec)
    }

    #[test]
    fn empty_input_has_no_digits() {
        let err = ConversionError::MalformedInput("number has no digits");
        assert_eq!(hex_to_decimal().convert(""), Err(err));
    }

    #[test]
    fn bare_sign_has_no_digits() {
        let err = ConversionError::MalformedInput("number has no digits");
        assert_eq!(hex_to_decimal().convert("-"), Err(err));
    }

    #[test]
    fn bare_separator_is_rejected() {
        let err = ConversionError::MalformedInput("fraction separator without integer digits");
        assert_eq!(hex_to_decimal().convert("."), Err(err));
    }

    #[test]
    fn leading_separator_is_rejected() {
        let err = ConversionError::MalformedInput("fraction separator without integer digits");
        assert_eq!(hex_to_decimal().convert(".5"), Err(err));
    }

    #[test]
    fn trailing_separator_is_rejected() {
        let err = ConversionError::MalformedInput("fraction separator without fraction digits");
        assert_eq!(hex_to_decimal().convert("5."), Err(err));
    }

    #[test]
    fn second_separator_is_rejected() {
        let err = ConversionError::MalformedInput("more than one fraction separator");
        assert_eq!(hex_to_decimal().convert("1.2.3"), Err(err));
    }

    #[test]
    fn doubled_sign_is_not_a_digit() {
        let err = ConversionError::InvalidDigit("-".to_string());
        assert_eq!(hex_to_decimal().convert("--1"), Err(err));
    }

    #[test]
    fn plus_sign_is_not_a_digit() {
        let err = ConversionError::InvalidDigit("+".to_string());
        assert_eq!(hex_to_decimal().convert("+1"), Err(err));
    }

    #[test]
    fn interior_sign_is_not_a_digit() {
        let err = ConversionError::InvalidDigit("-".to_string());
        assert_eq!(hex_to_decimal().convert("1-2"), Err(err));
    }

    #[test]
    fn digit_outside_alphabet_is_named() {
        let err = ConversionError::InvalidDigit("G".to_string());
        assert_eq!(hex_to_decimal().convert("12G"), Err(err));
    }
}


mod custom_alphabets {
    use super::*;

    #[test]
    fn ragged_digit_texts_tokenize_unambiguously() {
        let source = NumeralSystem::from_symbols(vec!["0100".to_string(), "10001".to_string()]).unwrap();
        let target = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert("01000100").unwrap(), "0");
        assert_eq!(converter.convert("100010100").unwrap(), "2");
    }

    #[test]
    fn ambiguous_digit_texts_fail_tokenization() {
        let source = NumeralSystem::from_symbols(vec!["a".to_string(), "aa".to_string()]).unwrap();
        let target = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert("aaa"), Err(ConversionError::UnsupportedTokenization));
    }

    #[test]
    fn numbered_digits_split_by_width() {
        let source = NumeralSystem::numbered(1000).unwrap();
        let target = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert("#007#700").unwrap(), "7700");
    }

    #[test]
    fn numbered_digits_render_zero_padded() {
        let source = NumeralSystem::standard(10).unwrap();
        let target = NumeralSystem::numbered(256).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert("255").unwrap(), "#255");
        assert_eq!(converter.convert("256").unwrap(), "#001#000");
    }

    #[test]
    fn case_collision_disables_folding() {
        let source = NumeralSystem::from_text("aA").unwrap();
        let target = NumeralSystem::standard(10).unwrap();
        let converter = Converter::new(source, target);

        assert_eq!(converter.convert("Aa").unwrap(), "2");
    }
}
