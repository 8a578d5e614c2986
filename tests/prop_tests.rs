//! Property-based tests: every puzzle must agree with its reference
//! implementation, plus a few algebraic properties of the puzzles.

use datalab::{oracle, puzzles};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4096))]

    // =========================================================================
    // puzzle == oracle
    // =========================================================================

    #[test]
    fn prop_bit_nor_matches_oracle(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(puzzles::bit_nor(x, y), oracle::bit_nor(x, y));
        prop_assert_eq!(puzzles::bit_nor(x, y), !(x | y));
    }

    #[test]
    fn prop_is_equal_matches_oracle(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(puzzles::is_equal(x, y), oracle::is_equal(x, y));
        prop_assert_eq!(puzzles::is_equal(x, x), 1);
    }

    #[test]
    fn prop_byte_swap_matches_oracle(x in any::<i32>(), n in 0i32..4, m in 0i32..4) {
        prop_assert_eq!(puzzles::byte_swap(x, n, m), oracle::byte_swap(x, n, m));
    }

    #[test]
    fn prop_byte_swap_out_of_range_indices_do_not_panic(x in any::<i32>(), n in any::<i32>(), m in any::<i32>()) {
        // Both sides read the indices modulo 4.
        prop_assert_eq!(puzzles::byte_swap(x, n, m), oracle::byte_swap(x, n, m));
    }

    #[test]
    fn prop_subtraction_ok_matches_oracle(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(puzzles::subtraction_ok(x, y), oracle::subtraction_ok(x, y));
        prop_assert_eq!(puzzles::subtraction_ok(x, y), x.checked_sub(y).is_some() as i32);
    }

    #[test]
    fn prop_is_greater_matches_oracle(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(puzzles::is_greater(x, y), oracle::is_greater(x, y));
    }

    #[test]
    fn prop_is_greater_near_each_other(x in any::<i32>(), d in -2i32..=2) {
        // Random pairs almost never land close together; cover that explicitly.
        let y = x.wrapping_add(d);
        prop_assert_eq!(puzzles::is_greater(x, y), (x > y) as i32);
    }

    #[test]
    fn prop_mult_five_eighths_matches_oracle(x in any::<i32>()) {
        prop_assert_eq!(puzzles::mult_five_eighths(x), oracle::mult_five_eighths(x));
    }

    #[test]
    fn prop_mult_five_eighths_without_overflow(x in -429_496_729i32..=429_496_729) {
        // |5x| fits in 32 bits here, so widening must not change the answer.
        prop_assert_eq!(puzzles::mult_five_eighths(x) as i64, x as i64 * 5 / 8);
    }

    #[test]
    fn prop_twos_comp_to_sign_mag_matches_oracle(x in any::<i32>()) {
        prop_assert_eq!(puzzles::twos_comp_to_sign_mag(x), oracle::twos_comp_to_sign_mag(x));
    }

    #[test]
    fn prop_sign_mag_holds_abs_value(x in (i32::MIN + 1)..=i32::MAX) {
        let sm = puzzles::twos_comp_to_sign_mag(x) as u32;
        prop_assert_eq!(sm & 0x7fff_ffff, x.unsigned_abs());
        prop_assert_eq!(sm >> 31, (x < 0) as u32);
    }

    #[test]
    fn prop_how_many_bits_matches_oracle(x in any::<i32>()) {
        prop_assert_eq!(puzzles::how_many_bits(x), oracle::how_many_bits(x));
    }

    #[test]
    fn prop_how_many_bits_round_trips(x in any::<i32>()) {
        // Truncating to the reported width and sign-extending gives x back,
        // and one bit fewer does not.
        let bits = puzzles::how_many_bits(x) as u32;
        prop_assert!((1..=32).contains(&bits));
        let extend = |width: u32| (x << (32 - width)) >> (32 - width);
        prop_assert_eq!(extend(bits), x);
        if bits > 1 {
            prop_assert_ne!(extend(bits - 1), x);
        }
    }

    // =========================================================================
    // byte swap properties
    // =========================================================================

    #[test]
    fn prop_byte_swap_is_involution(x in any::<i32>(), n in 0i32..4, m in 0i32..4) {
        let once = puzzles::byte_swap(x, n, m);
        prop_assert_eq!(puzzles::byte_swap(once, n, m), x);
        prop_assert_eq!(puzzles::byte_swap(x, m, n), once);
    }

    #[test]
    fn prop_byte_swap_same_index_is_noop(x in any::<i32>(), n in 0i32..4) {
        prop_assert_eq!(puzzles::byte_swap(x, n, n), x);
    }

    #[test]
    fn prop_byte_swap_keeps_other_bytes(x in any::<i32>(), n in 0i32..4, m in 0i32..4) {
        let before = x.to_le_bytes();
        let after = puzzles::byte_swap(x, n, m).to_le_bytes();
        for k in 0..4usize {
            if k as i32 != n && k as i32 != m {
                prop_assert_eq!(after[k], before[k]);
            }
        }
        prop_assert_eq!(after[n as usize], before[m as usize]);
    }
}
