// Property tests to be included by lib.rs (if enabled)


mod conversion_properties {
    use super::*;

    fn standard_pair(source_radix: u64, target_radix: u64) -> Converter<char> {
        let source = NumeralSystem::standard(source_radix).unwrap();
        let target = NumeralSystem::standard(target_radix).unwrap();
        Converter::new(source, target)
    }

    macro_rules! impl_round_trip {
        ($radix:literal) => {
            paste! { proptest! {
                #[test]
                fn [< round_trip_base_ $radix >](n: u64) {
                    let there = standard_pair(10, $radix);
                    let back = standard_pair($radix, 10);

                    let input = n.to_string();
                    let encoded = there.convert(&input).unwrap();
                    prop_assert_eq!(back.convert(&encoded).unwrap(), input);
                }
            } }
        };
    }

    impl_round_trip!(2);
    impl_round_trip!(7);
    impl_round_trip!(16);
    impl_round_trip!(36);
    impl_round_trip!(62);

    proptest! {
        #[test]
        fn replace_agrees_with_decimal(
            (first, rest) in (1u64..16, collection::vec(0u64..16, 0..39)),
        ) {
            let mut digits = vec![first];
            digits.extend(rest);

            let replace = Replace::new(16, 4).unwrap();
            let decimal = Decimal::<ChunkedMath>::new(16, 4);
            prop_assert_eq!(replace.integer(&digits).unwrap(), decimal.integer(&digits).unwrap());
        }

        #[test]
        fn longer_budgets_extend_shorter_ones(digits in collection::vec(0u64..10, 1..12)) {
            let decimal = Decimal::<ChunkedMath>::new(10, 7);

            let short = decimal.fraction(&digits, 8).unwrap();
            let long = decimal.fraction(&digits, 16).unwrap();
            prop_assert!(long.starts_with(&short));
        }

        #[test]
        fn tokenizer_never_panics(bytes in collection::vec(32u8..127, 0..24)) {
            let system = NumeralSystem::standard(36).unwrap();
            let text = String::from_utf8(bytes).unwrap();
            let _ = system.split_text(&text);
        }

        #[test]
        fn chunked_engine_round_trips(n: u64) {
            let there = standard_pair(10, 36).with_backend(Some(Backend::Chunked));
            let back = standard_pair(36, 10).with_backend(Some(Backend::Chunked));

            let input = n.to_string();
            let encoded = there.convert(&input).unwrap();
            prop_assert_eq!(back.convert(&encoded).unwrap(), input);
        }
    }
}

#[cfg(feature = "bigint")]
mod backend_agreement {
    use super::*;

    proptest! {
        #[test]
        fn backends_agree_on_integers(
            (first, rest) in (1u64..10, collection::vec(0u64..10, 0..31)),
        ) {
            let mut digits = vec![first];
            digits.extend(rest);

            let bigint = Decimal::<BigIntMath>::new(10, 36);
            let chunked = Decimal::<ChunkedMath>::new(10, 36);
            prop_assert_eq!(bigint.integer(&digits).unwrap(), chunked.integer(&digits).unwrap());
        }

        #[test]
        fn backends_agree_on_fractions(digits in collection::vec(0u64..10, 1..24)) {
            let bigint = Decimal::<BigIntMath>::new(10, 36);
            let chunked = Decimal::<ChunkedMath>::new(10, 36);
            prop_assert_eq!(
                bigint.fraction(&digits, 20).unwrap(),
                chunked.fraction(&digits, 20).unwrap()
            );
        }
    }
}
