/// Helper functions for bit operations.
pub mod bits {
    use std::error::Error;

    /// Calculates the number of bits a rust type requires.
    pub const fn bit_size<T>() -> usize {
        std::mem::size_of::<T>() * 8
    }

    /// Shift that moves bit 31 down to bit 0.
    pub const SIGN_SHIFT: u32 = bit_size::<i32>() as u32 - 1;

    /// All ones if `x` is negative, zero otherwise.
    #[inline(always)]
    pub fn sign_mask(x: i32) -> i32 {
        x >> SIGN_SHIFT
    }

    /// 1 if `x` is non-zero, else 0. Same as `!!x` in C.
    ///
    /// `x | -x` has the sign bit set for every non-zero `x`.
    #[inline(always)]
    pub fn is_nonzero(x: i32) -> i32 {
        sign_mask(x | x.wrapping_neg()) & 1
    }

    /// 1 if `x` is zero, else 0. Same as `!x` in C.
    #[inline(always)]
    pub fn logical_not(x: i32) -> i32 {
        is_nonzero(x) ^ 1
    }

    /// Parses a word given as decimal or `0x` hexadecimal.
    ///
    /// Hex literals are read as raw 32-bit patterns, so `0x80000000` is `i32::MIN`.
    pub fn parse_word(s: &str) -> Result<i32, Box<dyn Error>> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let value = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16)? as i32,
            None => return Ok(s.parse::<i32>()?),
        };
        Ok(if negative { value.wrapping_neg() } else { value })
    }

    /// Formats a word the way the checker reports it, e.g. `-1[0xffffffff]`.
    pub fn fmt_word(x: i32) -> String {
        format!("{}[{:#x}]", x, x as u32)
    }

}
