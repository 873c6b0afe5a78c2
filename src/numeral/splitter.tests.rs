fn char_table(alphabet: &str) -> TextTable {
    let symbols: Vec<char> = alphabet.chars().collect();
    TextTable::build(&symbols)
}

fn str_table(texts: &[&str]) -> TextTable {
    TextTable::build(texts)
}

mod split_hexadecimal {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $input:literal => Err($pat:pat) ) => {
            #[test]
            fn $name() {
                let table = char_table("0123456789ABCDEF");
                let result = table.split($input);
                assert!(matches!(result, Err($pat)));
            }
        };
        ( $name:ident: $input:literal => $($digit:literal),+ ) => {
            #[test]
            fn $name() {
                let table = char_table("0123456789ABCDEF");
                let digits = table.split($input).unwrap();
                assert_eq!(digits, vec![$($digit),+]);
            }
        };
    }

    impl_case!(case_a37334: "A37334" => 10, 3, 7, 3, 3, 4);
    impl_case!(case_lowercase_folds: "a3f" => 10, 3, 15);
    impl_case!(case_leading_zeros_kept: "00FF" => 0, 0, 15, 15);
    impl_case!(case_invalid_g: "G3" => Err(ConversionError::InvalidDigit(_)));
    impl_case!(case_invalid_multibyte: "Aé" => Err(ConversionError::InvalidDigit(_)));

    #[test]
    fn case_empty_input_gives_no_digits() {
        let table = char_table("0123456789ABCDEF");
        assert_eq!(table.split("").unwrap(), Vec::<u64>::new());
    }
}

mod split_numbered {
    use super::*;

    fn numbered_table() -> TextTable {
        let texts: Vec<String> = (0..100).map(|v| format!("#{:02}", v)).collect();
        TextTable::build(&texts)
    }

    #[test]
    fn case_width_is_three_bytes() {
        assert_eq!(numbered_table().fixed_width(), Some(3));
    }

    #[test]
    fn case_42_07() {
        let digits = numbered_table().split("#42#07").unwrap();
        assert_eq!(digits, vec![42, 7]);
    }

    #[test]
    fn case_truncated_token() {
        let result = numbered_table().split("#42#0");
        assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
    }

    #[test]
    fn case_misaligned_token() {
        let result = numbered_table().split("4#07#1");
        assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
    }
}

mod split_variable_width {
    use super::*;

    #[test]
    fn case_prefix_free_texts_split() {
        let table = str_table(&["0100", "10001"]);
        let digits = table.split("01000100").unwrap();
        assert_eq!(digits, vec![0, 0]);
    }

    #[test]
    fn case_ambiguous_prefix_pair_fails() {
        let table = str_table(&["a", "aa"]);
        let result = table.split("aaa");
        assert!(matches!(result, Err(ConversionError::UnsupportedTokenization)));
    }

    #[test]
    fn case_single_width_mixture() {
        let table = str_table(&["x", "yy"]);
        assert_eq!(table.fixed_width(), None);
        assert_eq!(table.split("xyyx").unwrap(), vec![0, 1, 0]);
    }

    #[test]
    fn case_unmatched_position() {
        let table = str_table(&["x", "yy"]);
        let result = table.split("xzx");
        assert!(matches!(result, Err(ConversionError::InvalidDigit(_))));
    }

    #[test]
    fn case_mixed_char_widths_fall_back_to_scan() {
        let table = char_table("aé");
        assert_eq!(table.fixed_width(), None);
        assert_eq!(table.split("éa").unwrap(), vec![1, 0]);
    }
}

mod case_rules {
    use super::*;

    #[test]
    fn fold_collision_forces_exact_match() {
        let table = char_table("aA");
        assert!(table.is_case_sensitive());
        assert_eq!(table.value_of("a"), Some(0));
        assert_eq!(table.value_of("A"), Some(1));
        assert_eq!(table.split("Aa").unwrap(), vec![1, 0]);
    }

    #[test]
    fn folding_applies_when_unambiguous() {
        let table = char_table("AB");
        assert!(!table.is_case_sensitive());
        assert_eq!(table.value_of("b"), Some(1));
        assert_eq!(table.split("ab").unwrap(), vec![0, 1]);
    }

    #[test]
    fn rendering_is_canonical_case() {
        let table = char_table("AB");
        let mut out = String::new();
        table.render_into(&[1, 0, 1], &mut out);
        assert_eq!(out, "BAB");
    }
}
