//! Puzzle solutions.
//!
//! Every body sticks to bitwise operators, shifts and wrapping addition: no
//! branches, loops or comparisons. Arithmetic wraps so no input can panic.

use crate::utils::bits::{is_nonzero, logical_not, sign_mask, SIGN_SHIFT};

// 1

/// `!(x | y)` using only `!` and `&`.
///
/// `bit_nor(0x6, 0x5) == 0xfffffff8`
pub fn bit_nor(x: i32, y: i32) -> i32 {
    !x & !y
}

// 2

/// 1 if `x == y`, else 0.
pub fn is_equal(x: i32, y: i32) -> i32 {
    logical_not(x ^ y)
}

/// Swaps the `n`th and `m`th bytes of `x`, byte 0 being the least significant.
///
/// `byte_swap(0x12345678, 1, 3) == 0x56341278`
///
/// Indices are meant to lie in `0..=3`. Shift amounts wrap, so other indices
/// act modulo 4.
pub fn byte_swap(x: i32, n: i32, m: i32) -> i32 {
    let n_shift = (n << 3) as u32;
    let m_shift = (m << 3) as u32;
    let diff = (x.wrapping_shr(n_shift) ^ x.wrapping_shr(m_shift)) & 0xff;
    x ^ diff.wrapping_shl(n_shift) ^ diff.wrapping_shl(m_shift)
}

// 3

/// 1 if `x - y` can be computed without signed overflow, else 0.
pub fn subtraction_ok(x: i32, y: i32) -> i32 {
    let diff = x.wrapping_add(!y).wrapping_add(1);
    // Overflow only when the operand signs differ and the result takes y's sign.
    let overflow = sign_mask((x ^ y) & (x ^ diff));
    !overflow & 1
}

/// 1 if `x > y` as signed integers, else 0.
pub fn is_greater(x: i32, y: i32) -> i32 {
    let signs_differ = sign_mask(x ^ y);
    let y_minus_x = y.wrapping_add(!x).wrapping_add(1);
    // With equal signs y - x cannot overflow, so its sign answers the question.
    // With differing signs x is greater exactly when x is non-negative.
    ((signs_differ & !x) | (!signs_differ & y_minus_x)) >> SIGN_SHIFT & 1
}

/// `x * 5 / 8` rounded toward zero, overflowing exactly like `(x * 5) / 8`
/// on wrapping 32-bit integers.
///
/// `mult_five_eighths(77) == 48`, `mult_five_eighths(-22) == -13`,
/// `mult_five_eighths(1073741824) == 134217728`
pub fn mult_five_eighths(x: i32) -> i32 {
    let five_x = (x << 2).wrapping_add(x);
    let bias = sign_mask(five_x) & 7;
    five_x.wrapping_add(bias) >> 3
}

// 4

/// Converts two's complement to sign-magnitude.
///
/// `twos_comp_to_sign_mag(-5) == 0x80000005`. `i32::MIN` has no 31-bit
/// magnitude; its negation wraps back to itself, so it maps to `0x80000000`.
pub fn twos_comp_to_sign_mag(x: i32) -> i32 {
    let sign = sign_mask(x);
    let magnitude = (x ^ sign).wrapping_add(sign & 1);
    magnitude | (sign & i32::MIN)
}

/// Minimum number of bits needed to represent `x` in two's complement.
///
/// ```
/// use datalab::puzzles::how_many_bits;
///
/// assert_eq!(how_many_bits(12), 5);
/// assert_eq!(how_many_bits(298), 10);
/// assert_eq!(how_many_bits(-5), 4);
/// assert_eq!(how_many_bits(0), 1);
/// assert_eq!(how_many_bits(-1), 1);
/// assert_eq!(how_many_bits(i32::MIN), 32);
/// ```
pub fn how_many_bits(x: i32) -> i32 {
    // Fold negatives onto their complement; the answer is then the index of
    // the highest set bit plus one for sign, found by binary search.
    let mut v = x ^ sign_mask(x);
    let b16 = is_nonzero(v >> 16) << 4;
    v >>= b16;
    let b8 = is_nonzero(v >> 8) << 3;
    v >>= b8;
    let b4 = is_nonzero(v >> 4) << 2;
    v >>= b4;
    let b2 = is_nonzero(v >> 2) << 1;
    v >>= b2;
    let b1 = is_nonzero(v >> 1);
    v >>= b1;
    b16 + b8 + b4 + b2 + b1 + v + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nor_examples() {
        assert_eq!(bit_nor(0x6, 0x5) as u32, 0xffff_fff8);
        assert_eq!(bit_nor(0, 0), -1);
        assert_eq!(bit_nor(-1, 0), 0);
    }

    #[test]
    fn equality() {
        assert_eq!(is_equal(5, 5), 1);
        assert_eq!(is_equal(4, 5), 0);
        assert_eq!(is_equal(i32::MIN, i32::MIN), 1);
        assert_eq!(is_equal(i32::MIN, 0), 0);
    }

    #[test]
    fn swaps_bytes() {
        assert_eq!(byte_swap(0x1234_5678, 1, 3), 0x5634_1278);
        assert_eq!(byte_swap(0xdead_beef_u32 as i32, 0, 2) as u32, 0xdeef_bead);
        assert_eq!(byte_swap(0x1234_5678, 2, 2), 0x1234_5678);
    }

    #[test]
    fn subtraction_overflow() {
        assert_eq!(subtraction_ok(0x8000_0000_u32 as i32, 0x8000_0000_u32 as i32), 1);
        assert_eq!(subtraction_ok(0x8000_0000_u32 as i32, 0x7000_0000), 0);
        assert_eq!(subtraction_ok(i32::MIN, 1), 0);
        assert_eq!(subtraction_ok(i32::MAX, -1), 0);
        assert_eq!(subtraction_ok(-1, i32::MAX), 1);
        assert_eq!(subtraction_ok(0, i32::MIN), 0);
    }

    #[test]
    fn greater() {
        assert_eq!(is_greater(4, 5), 0);
        assert_eq!(is_greater(5, 4), 1);
        assert_eq!(is_greater(5, 5), 0);
        assert_eq!(is_greater(i32::MAX, i32::MIN), 1);
        assert_eq!(is_greater(i32::MIN, i32::MAX), 0);
        assert_eq!(is_greater(-1, i32::MIN), 1);
    }

    #[test]
    fn five_eighths() {
        assert_eq!(mult_five_eighths(77), 48);
        assert_eq!(mult_five_eighths(-22), -13);
        assert_eq!(mult_five_eighths(1_073_741_824), 134_217_728);
        for x in [0, 8, -8, 1_000_000, -1_000_000] {
            assert_eq!(mult_five_eighths(x) as i64, x as i64 * 5 / 8);
        }
    }

    #[test]
    fn sign_magnitude() {
        assert_eq!(twos_comp_to_sign_mag(0), 0);
        assert_eq!(twos_comp_to_sign_mag(5), 5);
        assert_eq!(twos_comp_to_sign_mag(-5) as u32, 0x8000_0005);
        assert_eq!(twos_comp_to_sign_mag(-1) as u32, 0x8000_0001);
        assert_eq!(twos_comp_to_sign_mag(i32::MAX), i32::MAX);
        assert_eq!(twos_comp_to_sign_mag(i32::MIN), i32::MIN);
    }

    #[test]
    fn bit_counts() {
        assert_eq!(how_many_bits(5), 4);
        assert_eq!(how_many_bits(0x8000_0000_u32 as i32), 32);
        assert_eq!(how_many_bits(i32::MAX), 32);
        assert_eq!(how_many_bits(1), 2);
        assert_eq!(how_many_bits(-2), 2);
    }
}
