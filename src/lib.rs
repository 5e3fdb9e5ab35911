// An exact rational number lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod error;
mod rational;

pub use error::{RationalError, RationalResult};
pub use rational::{utils::gcd, Exponent, IntoRational, Rational};

#[cfg(test)]
mod tests {
    use crate::{gcd, Rational, RationalError};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn r(nume: i64, deno: i64) -> Rational {
        Rational::new(nume, deno).unwrap()
    }

    fn random_rational() -> Rational {
        let nume = rand::random_range(-1_000_000..=1_000_000i64);
        let deno = rand::random_range(1..=1_000_000i64);
        r(nume, deno)
    }

    #[test]
    fn test_creation_and_reduction() {
        let f = r(4, 6);
        assert_eq!((f.numerator(), f.denominator()), (2, 3));

        let f = r(-3, 6);
        assert_eq!((f.numerator(), f.denominator()), (-1, 2));

        let f = r(3, -6);
        assert_eq!((f.numerator(), f.denominator()), (-1, 2));

        let f = r(0, 5);
        assert_eq!((f.numerator(), f.denominator()), (0, 1));

        let f = r(0, -5);
        assert_eq!((f.numerator(), f.denominator()), (0, 1));

        assert_eq!(Rational::default(), Rational::ZERO);
        assert_eq!(Rational::from(3).to_string(), "3");
    }

    #[test]
    fn test_sign_normalization() {
        let a = r(1, -2);
        let b = r(-1, 2);
        assert_eq!((a.numerator(), a.denominator()), (-1, 2));
        assert_eq!((a.numerator(), a.denominator()), (b.numerator(), b.denominator()));

        let c = r(-1, -2);
        assert_eq!((c.numerator(), c.denominator()), (1, 2));
    }

    #[test]
    fn test_canonical_form_random() {
        for _ in 0..5000 {
            let nume = rand::random_range(i64::MIN + 1..=i64::MAX);
            let deno = rand::random_range(i64::MIN + 1..=i64::MAX);
            if deno == 0 {
                continue;
            }
            let f = r(nume, deno);
            assert!(f.denominator() > 0);
            if f.is_zero() {
                assert_eq!(f.denominator(), 1);
            } else {
                assert_eq!(gcd(f.numerator() as i128, f.denominator() as i128), 1);
            }
        }
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::ZeroDenominator));
        assert_eq!(Rational::new(0, 0), Err(RationalError::ZeroDenominator));
        assert_eq!(
            RationalError::ZeroDenominator.to_string(),
            "denominator cannot be zero"
        );
    }

    #[test]
    fn test_construction_extremes() {
        let f = r(i64::MAX, i64::MAX);
        assert_eq!(f, Rational::ONE);

        let f = r(i64::MIN, i64::MIN);
        assert_eq!(f, Rational::ONE);

        let f = r(i64::MIN, 2);
        assert_eq!(f, Rational::from(i64::MIN / 2));

        assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
        assert_eq!(Rational::new(1, i64::MIN), Err(RationalError::Overflow));
        assert_eq!(r(2, i64::MIN), r(-1, 1i64 << 62));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", r(5, 1)), "5");
        assert_eq!(format!("{}", r(3, 4)), "3/4");
        assert_eq!(format!("{}", r(-2, 3)), "-2/3");
        assert_eq!(format!("{}", r(2, 4)), "1/2");
        assert_eq!(format!("{}", Rational::ZERO), "0");
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(r(5, 2).as_mixed_number(), "2 + 1/2");
        assert_eq!(r(9, 4).as_mixed_number(), "2 + 1/4");
        assert_eq!(r(-7, 2).as_mixed_number(), "-3 + 1/2");
        assert_eq!(r(1, 2).as_mixed_number(), "1/2");
        assert_eq!(r(-1, 2).as_mixed_number(), "-1/2");
        assert_eq!(r(5, 1).as_mixed_number(), "5");
        assert_eq!(r(-5, 1).as_mixed_number(), "-5");
        assert_eq!(Rational::ZERO.as_mixed_number(), "0");
        assert_eq!(Rational::from(i64::MIN).as_mixed_number(), i64::MIN.to_string());
    }

    #[test]
    fn test_arithmetic_operations() {
        let (f1, f2) = (r(1, 2), r(2, 3));

        assert_eq!((f1 + f2).to_string(), "7/6");
        assert_eq!((f1 + 1).to_string(), "3/2");
        assert_eq!((f2 - f1).to_string(), "1/6");
        assert_eq!((f1 - 1).to_string(), "-1/2");
        assert_eq!((f1 - f1).to_string(), "0");
        assert_eq!((f1 * f2).to_string(), "1/3");
        assert_eq!((f1 * 2).to_string(), "1");
        assert_eq!((f1 * Rational::ZERO).to_string(), "0");
        assert_eq!((f1 / f2).to_string(), "3/4");
        assert_eq!((f1 / 2).to_string(), "1/4");
        assert_eq!((r(-7, 6) * r(-8, 7)), r(4, 3));
        assert_eq!((r(-7, 6) / r(-7, 8)), r(4, 3));
    }

    #[test]
    fn test_identities_random() {
        for _ in 0..5000 {
            let x = random_rational();
            assert_eq!(x + Rational::ZERO, x);
            assert_eq!(x - x, Rational::ZERO);
            assert_eq!(x * Rational::ONE, x);
            assert_eq!(x * Rational::ZERO, Rational::ZERO);
            assert_eq!((x * Rational::ZERO).to_string(), "0");
            if !x.is_zero() {
                assert_eq!(x / x, Rational::ONE);
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        let half = r(1, 2);
        assert_eq!(half.checked_div(0), Err(RationalError::ZeroDenominator));
        assert_eq!(half.checked_div(Rational::ZERO), Err(RationalError::ZeroDenominator));
        assert_eq!(half.checked_div(r(0, 9)), Err(RationalError::ZeroDenominator));
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_division_operator_panics_on_zero() {
        let _ = r(1, 2) / Rational::ZERO;
    }

    #[test]
    fn test_pow() {
        let half = r(1, 2);
        assert_eq!(half.pow(0).to_string(), "1");
        assert_eq!(half.pow(1).to_string(), "1/2");
        assert_eq!(half.pow(2).to_string(), "1/4");
        assert_eq!(r(-2, 3).pow(3u8), r(-8, 27));
        assert_eq!(Rational::ZERO.pow(0), Rational::ONE);
        assert_eq!(Rational::ZERO.pow(5), Rational::ZERO);
        assert_eq!(r(-1, 1).pow(u64::MAX), r(-1, 1));
        assert_eq!(half.checked_pow(0), Ok(Rational::ONE));
    }

    #[test]
    fn test_invalid_exponent() {
        let half = r(1, 2);
        assert_eq!(
            half.checked_pow(-1),
            Err(RationalError::InvalidExponent("-1".to_string()))
        );
        assert_eq!(
            half.checked_pow(1.5),
            Err(RationalError::InvalidExponent("1.5".to_string()))
        );
        assert!(matches!(half.checked_pow(2.0f32), Err(RationalError::InvalidExponent(_))));
        assert!(matches!(half.checked_pow(i64::MIN), Err(RationalError::InvalidExponent(_))));
        assert!(matches!(half.checked_pow(-2i128), Err(RationalError::InvalidExponent(_))));
        assert!(matches!(half.checked_pow(u128::MAX), Err(RationalError::InvalidExponent(_))));
        assert_eq!(half.checked_pow(3i128), Ok(r(1, 8)));
        assert_eq!(half.checked_pow(3u128), Ok(r(1, 8)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Rational::from(i64::MAX);
        assert_eq!(big.checked_add(1), Err(RationalError::Overflow));
        assert_eq!(big.checked_mul(2), Err(RationalError::Overflow));
        assert_eq!(Rational::from(i64::MIN).checked_sub(1), Err(RationalError::Overflow));
        assert_eq!(r(1, i64::MAX).checked_div(2), Err(RationalError::Overflow));
        assert_eq!(Rational::from(2).checked_pow(63), Err(RationalError::Overflow));
        assert_eq!(Rational::from(2).checked_pow(62), Ok(Rational::from(1i64 << 62)));
        assert_eq!(Rational::from(i64::MIN).checked_neg(), Err(RationalError::Overflow));
        assert_eq!(Rational::from(i64::MIN).checked_abs(), Err(RationalError::Overflow));

        // intermediates beyond i64 are fine as long as the reduced result fits
        assert_eq!(big * r(1, i64::MAX), Rational::ONE);
        assert_eq!(r(i64::MAX, 2) + r(i64::MAX, 2), big);
    }

    #[test]
    fn test_assignment_operations() {
        let mut a = r(1, 3);
        a += r(1, 6);
        assert_eq!(a, r(1, 2));

        let mut b = r(3, 4);
        b -= r(1, 4);
        assert_eq!(b, r(1, 2));

        let mut c = r(-7, 6);
        c *= r(-8, 7);
        assert_eq!(c, r(4, 3));

        let mut d = r(-7, 6);
        d /= r(-7, 8);
        assert_eq!(d, r(4, 3));
    }

    #[test]
    fn test_comparisons() {
        let (f1, f4, f5, f6) = (r(1, 2), r(2, 4), r(0, 1), r(5, 1));

        assert_eq!(f1, f4);
        assert!(f1 != r(2, 3));
        assert!(f6 == 5);

        assert!(f1 < f6);
        assert!(!(f6 < f1));
        assert!(f1 < 1);
        assert!(f1 <= f6);
        assert!(f1 <= f4);
        assert!(f6 > f1);
        assert!(f6 > 4);
        assert!(f6 >= f1);
        assert!(f1 >= f4);
        assert!(!(f1 >= f6));
        assert!(!(Rational::ZERO > f1));
        assert!(Rational::ZERO < f1);
        assert!(f5 <= 0);
        assert!(f5 >= 0);
        assert!(r(-1, 2) < r(-1, 3));
    }

    #[test]
    fn test_comparison_consistency_random() {
        for _ in 0..5000 {
            let (x, y) = (random_rational(), random_rational());
            let holds = [x < y, x == y, x > y];
            assert_eq!(holds.iter().filter(|b| **b).count(), 1);

            // small magnitudes, so the float comparison is exact enough
            let (fx, fy) = (f64::from(x), f64::from(y));
            assert_eq!(x < y, fx < fy);
            assert_eq!(x > y, fx > fy);
        }
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(f64::from(r(1, 2)), 0.5);
        assert_eq!(f64::from(Rational::ZERO), 0.0);
        assert_eq!(f64::from(r(5, 1)), 5.0);
        assert_eq!(f64::from(r(-1, 2)), -0.5);
        assert_eq!(f32::from(r(-5, 4)), -1.25f32);
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(i64::try_from(r(-3, 2)), Ok(-1));
        assert_eq!(i64::try_from(r(7, 2)), Ok(3));
        assert_eq!(u8::try_from(r(255, 1)), Ok(255));
        assert_eq!(u8::try_from(r(256, 1)), Err(RationalError::OutOfRange));
        assert_eq!(u64::try_from(r(-3, 1)), Err(RationalError::OutOfRange));
        assert_eq!(u64::try_from(r(-1, 2)), Ok(0));
    }

    #[test]
    fn test_wide_integer_operands() {
        assert!(Rational::ONE + 5u64 > Rational::ONE);
        assert_eq!(r(1, 2) + 1usize, r(3, 2));
        assert_eq!(r(1, 2) - 1isize, r(-1, 2));
        assert_eq!(r(1, 2) * 4i128, Rational::from(2));
        assert_eq!(r(1, 2) / 2u128, r(1, 4));

        let mut a = r(1, 3);
        a += 1u64;
        assert_eq!(a, r(4, 3));

        assert_eq!(Rational::ONE.checked_add(u64::MAX), Err(RationalError::Overflow));
        assert_eq!(Rational::ONE.checked_mul(i128::MIN), Err(RationalError::Overflow));
        assert_eq!(r(1, 2).checked_div(0u128), Err(RationalError::ZeroDenominator));

        assert_eq!(Rational::try_from(7u64), Ok(Rational::from(7)));
        assert_eq!(Rational::try_from(-7isize), Ok(Rational::from(-7)));
        assert_eq!(Rational::try_from(u64::MAX), Err(RationalError::Overflow));
        assert_eq!(Rational::try_from(i128::MIN), Err(RationalError::Overflow));
    }

    #[test]
    fn test_wide_integer_comparisons() {
        assert!(Rational::from(3) == 3usize);
        assert!(Rational::from(3) == 3u64);
        assert!(r(7, 2) > 3u128);
        assert!(r(-7, 2) < -3i128);
        assert!(r(-7, 2) != -3isize);

        // beyond the i64 range, every rational sits strictly between
        let big = Rational::from(i64::MAX);
        assert!(big < u64::MAX);
        assert!(big != u64::MAX);
        assert!(big < u128::MAX);
        assert!(Rational::from(i64::MIN) > i128::MIN);
        assert!(Rational::from(i64::MIN) != i128::MIN);
        assert!(Rational::from(i64::MIN) == i64::MIN as i128);
    }

    #[test]
    fn test_predicates() {
        assert!(Rational::ZERO.is_zero());
        assert!(!r(1, 2).is_zero());
        assert!(!r(-1, 2).is_zero());

        assert!(r(5, 1).is_integer());
        assert!(!r(1, 2).is_integer());
        assert!(Rational::ZERO.is_integer());

        assert!(r(1, 2).is_proper());
        assert!(!r(5, 1).is_proper());
        assert!(r(-1, 2).is_proper());
        assert!(Rational::ZERO.is_proper());
        assert!(!r(-1, 1).is_proper());

        assert!(r(3, 4).is_positive());
        assert!(r(-3, 4).is_negative());
        assert!(!Rational::ZERO.is_positive() && !Rational::ZERO.is_negative());
    }

    #[test]
    fn test_unit_fraction_boundary() {
        assert!(r(1, 2).is_unit());
        assert!(r(1, 5).is_unit());
        assert!(r(-1, 5).is_unit());
        assert!(r(2, 4).is_unit());
        assert!(!r(2, 3).is_unit());
        assert!(!r(2, 1).is_unit());
        assert!(!Rational::ZERO.is_unit());
        assert!(!r(1, 1).is_unit());
        assert!(!r(-1, 1).is_unit());
    }

    #[test]
    fn test_adjacency() {
        assert!(r(3, 2).is_adjacent_to(&r(1, 2)));
        assert!(r(1, 2).is_adjacent_to(&r(3, 2)));
        assert!(r(-1, 3).is_adjacent_to(&r(2, 3)));
        assert!(Rational::ZERO.is_adjacent_to(&Rational::ONE));
        assert!(!r(1, 2).is_adjacent_to(&r(1, 3)));
        assert!(!r(1, 2).is_adjacent_to(&r(1, 2)));
        assert!(!r(5, 2).is_adjacent_to(&r(1, 2)));

        // would overflow i64 if computed through subtraction
        assert!(Rational::from(i64::MIN).is_adjacent_to(&Rational::from(i64::MIN + 1)));
        assert!(!Rational::from(i64::MIN).is_adjacent_to(&Rational::from(i64::MAX)));
    }

    #[test]
    fn test_absolute_value() {
        assert_eq!(r(-1, 2).abs(), r(1, 2));
        assert_eq!(r(1, 2).abs(), r(1, 2));
        assert_eq!(Rational::ZERO.abs(), Rational::ZERO);
        assert_eq!(-r(3, 4), r(-3, 4));
        assert_eq!(r(-3, 4).recip(), r(-4, 3));
        assert_eq!(Rational::ZERO.checked_recip(), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn test_hash_consistency() {
        let mut hasher1 = DefaultHasher::new();
        let mut hasher2 = DefaultHasher::new();

        r(2, 4).hash(&mut hasher1);
        r(-1, -2).hash(&mut hasher2);

        assert_eq!(hasher1.finish(), hasher2.finish());
    }
}
