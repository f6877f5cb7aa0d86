//! Property-based tests for big integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating values within the native range
    fn small_int() -> impl Strategy<Value = i64> {
        -1_000_000_000_000i64..1_000_000_000_000i64
    }

    // Strategy for generating decimal strings well past the native range
    fn decimal_string() -> impl Strategy<Value = String> {
        "[+-]?[0-9]{1,60}"
    }

    fn non_zero_decimal_string() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,30}"
    }

    /// The canonical rendering of a decimal string: sign dropped for zero,
    /// leading zeros stripped.
    fn canonical(text: &str) -> String {
        let (negative, magnitude) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let stripped = magnitude.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_owned()
        } else if negative {
            format!("-{stripped}")
        } else {
            stripped.to_owned()
        }
    }

    proptest! {
        #[test]
        fn parse_format_round_trip(text in decimal_string()) {
            let value: BigInt = text.parse().unwrap();
            prop_assert_eq!(value.to_string(), canonical(&text));
        }

        #[test]
        fn add_commutative(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in decimal_string(), b in decimal_string(), c in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let c: BigInt = c.parse().unwrap();
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn additive_inverse(a in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn mul_matches_native_wide(a in small_int(), b in small_int()) {
            let product = BigInt::from(a) * BigInt::from(b);
            let expected = i128::from(a) * i128::from(b);
            prop_assert_eq!(product.to_string(), expected.to_string());
        }

        #[test]
        fn division_identity(a in decimal_string(), b in non_zero_decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn ordering_agrees_with_native(a in small_int(), b in small_int()) {
            let big_a = BigInt::from(a);
            let big_b = BigInt::from(b);
            prop_assert_eq!(big_a.cmp(&big_b), a.cmp(&b));
            prop_assert_eq!(big_a == big_b, a == b);
        }

        #[test]
        fn ordering_is_total(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let outcomes = [a < b, a == b, a > b];
            prop_assert_eq!(outcomes.iter().filter(|&&held| held).count(), 1);
        }

        #[test]
        fn native_round_trip(a in any::<i64>()) {
            prop_assert_eq!(BigInt::from(a).to_i64(), a);
        }

        #[test]
        fn compound_assign_matches_binary(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let mut accumulated = a.clone();
            accumulated += &b;
            prop_assert_eq!(accumulated, &a + &b);
        }
    }
}
