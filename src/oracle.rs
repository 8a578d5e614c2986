//! Reference implementations the puzzles are checked against.
//!
//! Anything goes here: branches, loops, wider integers.

// Data Lab harnesses link against the oracles by their `test_` names.
pub use self::bit_nor as test_bit_nor;
pub use self::byte_swap as test_byte_swap;
pub use self::how_many_bits as test_how_many_bits;
pub use self::is_equal as test_is_equal;
pub use self::is_greater as test_is_greater;
pub use self::mult_five_eighths as test_mult_five_eighths;
pub use self::subtraction_ok as test_subtraction_ok;
pub use self::twos_comp_to_sign_mag as test_twos_comp_to_sign_mag;

pub fn bit_nor(x: i32, y: i32) -> i32 {
    !(x | y)
}

pub fn is_equal(x: i32, y: i32) -> i32 {
    (x == y) as i32
}

/// Indices are taken modulo 4.
pub fn byte_swap(x: i32, n: i32, m: i32) -> i32 {
    let mut bytes = x.to_le_bytes();
    bytes.swap((n & 3) as usize, (m & 3) as usize);
    i32::from_le_bytes(bytes)
}

pub fn subtraction_ok(x: i32, y: i32) -> i32 {
    let wide = x as i64 - y as i64;
    (wide == wide as i32 as i64) as i32
}

pub fn is_greater(x: i32, y: i32) -> i32 {
    (x > y) as i32
}

pub fn mult_five_eighths(x: i32) -> i32 {
    x.wrapping_mul(5) / 8
}

pub fn twos_comp_to_sign_mag(x: i32) -> i32 {
    if x >= 0 {
        x
    } else {
        i32::MIN | x.wrapping_neg()
    }
}

pub fn how_many_bits(x: i32) -> i32 {
    let mut a = (if x < 0 { !x } else { x }) as u32;
    let mut count = 0;
    while a != 0 {
        a >>= 1;
        count += 1;
    }
    count + 1
}
