use fixuint::primitives::{U128, U256, U512, Uint};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;

fn to_big<const L: usize>(v: &Uint<L>) -> BigUint {
    v.as_limbs()
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) + BigUint::from(limb))
}

fn modulus(bits: u32) -> BigUint {
    BigUint::one() << bits
}

/// Random values biased towards limbs that stress carries: all-zero,
/// all-one, and a single set bit.
fn limb() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(0u64),
        Just(u64::MAX),
        (0u32..64).prop_map(|bit| 1u64 << bit),
        any::<u64>(),
    ]
}

fn u128_value() -> impl Strategy<Value = U128> {
    proptest::array::uniform2(limb()).prop_map(U128::from_limbs)
}

fn u256_value() -> impl Strategy<Value = U256> {
    proptest::array::uniform4(limb()).prop_map(U256::from_limbs)
}

proptest! {
    #[test]
    fn add_is_commutative(a in u256_value(), b in u256_value()) {
        prop_assert_eq!(a.wrapping_add(&b), b.wrapping_add(&a));
    }

    #[test]
    fn mul_is_commutative(a in u256_value(), b in u256_value()) {
        prop_assert_eq!(a.wrapping_mul(&b), b.wrapping_mul(&a));
    }

    #[test]
    fn add_then_sub_round_trips(a in u256_value(), b in u256_value()) {
        prop_assert_eq!(a.wrapping_add(&b).wrapping_sub(&b), a);
    }

    #[test]
    fn add_matches_reference(a in u256_value(), b in u128_value()) {
        let expected = (to_big(&a) + to_big(&b)) % modulus(256);
        prop_assert_eq!(to_big(&a.wrapping_add(&b)), expected);
    }

    #[test]
    fn sub_matches_reference(a in u256_value(), b in u256_value()) {
        let m = modulus(256);
        let expected = (to_big(&a) + &m - to_big(&b)) % &m;
        prop_assert_eq!(to_big(&a.wrapping_sub(&b)), expected);
    }

    #[test]
    fn widening_mul_matches_reference(a in u256_value(), b in u256_value()) {
        let (lo, hi) = a.widening_mul(&b);
        let product = to_big(&lo) + (to_big(&hi) << 256u32);
        prop_assert_eq!(product, to_big(&a) * to_big(&b));
    }

    #[test]
    fn resizing_mul_matches_reference(a in u256_value(), b in u128_value()) {
        let wide: U512 = a.resizing_mul(&b);
        prop_assert_eq!(to_big(&wide), to_big(&a) * to_big(&b));

        let narrow: U128 = a.resizing_mul(&b);
        prop_assert_eq!(to_big(&narrow), (to_big(&a) * to_big(&b)) % modulus(128));
    }

    #[test]
    fn div_rem_matches_reference(a in u256_value(), d in u256_value()) {
        prop_assume!(!d.is_zero());

        let (q, r) = a.div_rem(&d);
        prop_assert_eq!(to_big(&q), to_big(&a) / to_big(&d));
        prop_assert_eq!(to_big(&r), to_big(&a) % to_big(&d));
    }

    #[test]
    fn div_rem_identity(a in u256_value(), d in u128_value()) {
        prop_assume!(!d.is_zero());

        let q = a.div(&d);
        let r = a.rem(&d);
        prop_assert!(r.is_less(&d));
        prop_assert_eq!(q.wrapping_mul(&d).wrapping_add(&r), a);
    }

    #[test]
    fn short_division_matches_reference(a in u256_value(), d in 1u64..=u32::MAX as u64) {
        let divisor = U128::from(d);
        let (q, r) = a.div_rem(&divisor);
        prop_assert_eq!(to_big(&q), to_big(&a) / d);
        prop_assert_eq!(to_big(&r), to_big(&a) % d);
    }

    #[test]
    fn ordering_is_total(a in u256_value(), b in u128_value()) {
        let outcomes = [a.is_greater(&b), a.is_equal(&b), b.is_greater(&a)];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        prop_assert_eq!(a.cmp_uint(&b), to_big(&a).cmp(&to_big(&b)));
    }

    #[test]
    fn widen_then_narrow_round_trips(a in u256_value()) {
        let wide: U512 = a.resize();
        prop_assert_eq!(wide.resize::<4>(), a);
        prop_assert_eq!(to_big(&wide), to_big(&a));
    }

    #[test]
    fn shifts_match_reference(a in u256_value(), n in 0u32..300) {
        let m = modulus(256);
        prop_assert_eq!(to_big(&a.shift_left(n)), (to_big(&a) << n) % &m);
        prop_assert_eq!(to_big(&a.shift_right(n)), to_big(&a) >> n);
    }

    #[test]
    fn isqrt_matches_reference(a in u256_value()) {
        prop_assert_eq!(to_big(&a.isqrt()), to_big(&a).sqrt());
    }

    #[test]
    fn display_matches_reference(a in u256_value()) {
        prop_assert_eq!(a.to_string(), to_big(&a).to_string());
        prop_assert_eq!(format!("{a:x}"), to_big(&a).to_str_radix(16));
    }
}
