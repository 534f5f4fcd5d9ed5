//! Word-level SHA-1 primitives.

/// Circular left shift of a 32-bit word.
///
/// Exactly 32 bits wide for every `bits`; `rotl(x, 0) == x`.
#[inline]
#[must_use]
pub const fn rotl(word: u32, bits: u32) -> u32 {
    word.rotate_left(bits)
}

/// Choice function of rounds 0-19: `d ^ (b & (c ^ d))`.
#[inline]
#[must_use]
pub const fn f_00_19(b: u32, c: u32, d: u32) -> u32 {
    d ^ (b & (c ^ d))
}
