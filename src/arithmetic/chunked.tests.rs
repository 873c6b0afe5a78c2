fn big(s: &str) -> ChunkedInt {
    let digits: Vec<u64> = s.chars().map(|c| c.to_digit(10).unwrap() as u64).collect();
    ChunkedMath::from_digits(&digits, 10)
}

fn dec(n: &ChunkedInt) -> String {
    ChunkedMath::to_digits(n, 10)
        .iter()
        .map(|&d| char::from_digit(d as u32, 10).unwrap())
        .collect()
}

mod from_u64 {
    use super::*;

    #[test]
    fn zero_has_no_chunks() {
        let n = ChunkedInt::from_u64(0);
        assert!(n.is_zero());
        assert_eq!(n.chunk_count(), 0);
    }

    #[test]
    fn u64_max_round_trips() {
        let n = ChunkedInt::from_u64(u64::MAX);
        assert_eq!(n.chunk_count(), 3);
        assert_eq!(n.to_u64(), Some(u64::MAX));
        assert_eq!(dec(&n), "18446744073709551615");
    }

    #[test]
    fn past_u64_does_not_fit_back() {
        let n = big("18446744073709551616");
        assert_eq!(n.to_u64(), None);
    }
}

mod add_chunked {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal + $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs = big($a);
                let rhs = big($b);
                assert_eq!(dec(&add_chunks(&lhs, &rhs)), $c);
                assert_eq!(dec(&add_chunks(&rhs, &lhs)), $c);
            }
        };
    }

    impl_case!(case_0_0: "0" + "0" = "0");
    impl_case!(case_0_817: "0" + "817" = "817");
    impl_case!(case_chunk_rollover: "999999999" + "1" = "1000000000");
    impl_case!(case_two_chunk_rollover: "999999999999999999" + "1" = "1000000000000000000");
    impl_case!(case_carry_through: "123456789123456789" + "876543210876543211" = "1000000000000000000");
    impl_case!(case_uneven_lengths: "1000000000000000000000" + "1" = "1000000000000000000001");
}

mod mul_chunked {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs = big($a);
                let rhs = big($b);
                assert_eq!(dec(&mul_chunks(&lhs, &rhs)), $c);
                assert_eq!(dec(&mul_chunks(&rhs, &lhs)), $c);
            }
        };
    }

    impl_case!(case_zero: "0" * "123456789123" = "0");
    impl_case!(case_one: "1" * "987654321987654321" = "987654321987654321");
    impl_case!(case_single_chunks: "123456789" * "987654321" = "121932631112635269");
    impl_case!(case_all_nines: "999999999999999999" * "999999999999999999"
        = "999999999999999998000000000000000001");
    impl_case!(case_chunk_boundary: "1000000000" * "1000000000" = "1000000000000000000");
}

mod pow_chunked {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $base:literal ^ $exp:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let base = big($base);
                assert_eq!(dec(&pow_chunks(&base, $exp)), $c);
            }
        };
    }

    impl_case!(case_2_10: "2" ^ 10 = "1024");
    impl_case!(case_2_64: "2" ^ 64 = "18446744073709551616");
    impl_case!(case_3_40: "3" ^ 40 = "12157665459056928801");
    impl_case!(case_10_18: "10" ^ 18 = "1000000000000000000");
    impl_case!(case_exp_zero: "999" ^ 0 = "1");
    impl_case!(case_zero_base: "0" ^ 5 = "0");
}

mod div_rem_chunked {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal / $b:literal = $q:literal rem $r:literal ) => {
            #[test]
            fn $name() {
                let (q, r) = div_rem_chunks(&big($a), &big($b));
                assert_eq!(dec(&q), $q);
                assert_eq!(dec(&r), $r);
            }
        };
    }

    impl_case!(case_exact: "121932631112635269" / "123456789" = "987654321" rem "0");
    impl_case!(case_by_seven: "1000000000000000000" / "7" = "142857142857142857" rem "1");
    impl_case!(case_small_by_large: "5" / "7" = "0" rem "5");
    impl_case!(case_equal: "123456789012345678" / "123456789012345678" = "1" rem "0");
    impl_case!(case_multichunk_divisor: "10000000000000000000000" / "30000000000001"
        = "333333333" rem "9999666666667");
    impl_case!(case_chunk_radix_divisor: "1000000000000000000" / "1000000000"
        = "1000000000" rem "0");

    #[test]
    fn division_reconstructs_dividend() {
        let cases = [
            ("98127348297348923749823749832749832", "29837498237498"),
            ("1000000000000000000000000000", "999999999"),
            ("123", "99999999999999999999"),
        ];
        for (a, b) in cases.iter() {
            let dividend = big(a);
            let divisor = big(b);
            let (q, r) = div_rem_chunks(&dividend, &divisor);
            assert_eq!(cmp_chunks(&r, &divisor), Ordering::Less);
            let back = add_chunks(&mul_chunks(&q, &divisor), &r);
            assert_eq!(back, dividend);
        }
    }

    #[test]
    #[should_panic(expected = "division by zero magnitude")]
    fn zero_divisor_panics() {
        let _ = div_rem_chunks(&big("10"), &big("0"));
    }
}

mod ordering {
    use super::*;

    #[test]
    fn chunk_count_orders_first() {
        assert!(big("999999999") < big("1000000000"));
        assert!(big("1000000000") > big("999999999"));
    }

    #[test]
    fn equal_lengths_compare_most_significant_first() {
        assert!(big("123456789000000000") < big("123456790000000000"));
        assert_eq!(
            cmp_chunks(&big("55555555555"), &big("55555555555")),
            Ordering::Equal,
        );
    }
}
