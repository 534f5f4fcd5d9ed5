//! SHA-1 Precompute Constants
//!
//! Fixed inputs of both generators: the standard SHA-1 initial hash words
//! and round constant (FIPS 180-4, section 5.3.1 and 4.2.1), the shape of the
//! targeted preimage, and the names used by the hand-written engine the
//! generated fragments are pasted into.

use core::ops::RangeInclusive;

// =============================================================================
// SHA-1 INITIAL HASH VALUE
// =============================================================================

/// Initial hash word `H0`.
pub const SHA1_IV_0: u32 = 0x6745_2301;
/// Initial hash word `H1`.
pub const SHA1_IV_1: u32 = 0xEFCD_AB89;
/// Initial hash word `H2`.
pub const SHA1_IV_2: u32 = 0x98BA_DCFE;
/// Initial hash word `H3`.
pub const SHA1_IV_3: u32 = 0x1032_5476;
/// Initial hash word `H4`.
pub const SHA1_IV_4: u32 = 0xC3D2_E1F0;

/// Round constant for rounds 0-19: `floor(2^30 * sqrt(2))`.
pub const K_00_19: u32 = 0x5A82_7999;

// =============================================================================
// PREIMAGE SHAPE
// =============================================================================

/// Length of every candidate preimage in bytes.
pub const PREIMAGE_LENGTH_BYTE: u32 = 6;

/// Length of every candidate preimage in bits, as stored in schedule word 15.
pub const PREIMAGE_LENGTH_BIT: u32 = PREIMAGE_LENGTH_BYTE * 8;

/// Round in which the length word is consumed.
pub const LENGTH_ROUND: usize = 15;

// =============================================================================
// ROUND STRUCTURE
// =============================================================================

/// Number of leading rounds folded into additive constants.
pub const FOLDED_ROUNDS: usize = 5;

/// Rotation applied to `a` inside the round function.
pub const ROTATE_A: u32 = 5;

/// Rotation applied to `b` when it moves into `c`.
pub const ROTATE_B: u32 = 30;

// =============================================================================
// MESSAGE SCHEDULE
// =============================================================================

/// Number of expanded schedule words.
pub const SCHEDULE_WORDS: usize = 80;

/// Number of words in one input block.
pub const BLOCK_WORDS: usize = 16;

/// Recurrence offsets, in canonical term order.
pub const SCHEDULE_OFFSETS: [usize; 4] = [3, 8, 14, 16];

/// Rotation applied to the XOR of the recurrence operands.
pub const SCHEDULE_ROTATE: u32 = 1;

/// Indices whose expansion is emitted.
///
/// Index 16 is absent: it is a known zero under the default table.
pub const EXPANSION_RANGE: RangeInclusive<usize> = 17..=79;

/// Rotations of `W[0]` primed for the inner loop.
pub const PRIMING_RANGE: RangeInclusive<u32> = 1..=20;

/// Indices copied from the precomputed schedule into the working buffer.
pub const COPY_FORWARD_RANGE: RangeInclusive<usize> = 16..=75;

/// Indices re-broadcast into SIMD lanes.
pub const BROADCAST_RANGE: RangeInclusive<usize> = 17..=79;

/// Schedule indices that hold zero in the precomputed buffer.
///
/// Word 0 is filled per candidate, word 1 carries the outer letters and the
/// padding bit, word 15 carries the bit length. Words 2-14 are zero, and so
/// is word 16 because all of its sources (13, 8, 2, 0) are.
pub const ZERO_INDICES: [usize; 15] = [0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16];

// =============================================================================
// ENGINE NAMES
// =============================================================================

/// Precomputed schedule buffer shared by all inner iterations.
pub const PRECOMPUTED_BUFFER: &str = "p_precomputedBlocks";

/// Scalar staging buffer broadcast into SIMD lanes.
pub const STAGING_BUFFER: &str = "p_tempPrecomputedBlocks";

/// Working schedule buffer of the current candidate.
pub const BLOCK_BUFFER: &str = "p_blocks";

/// Pre-rotated copies of `W[0]`.
pub const ROTATED_W0_BUFFER: &str = "p_w0";

/// Rotate macro provided by the engine.
pub const ROTATE_MACRO: &str = "LEFT_ROTATE";

/// Lane broadcast macro provided by the engine.
pub const BROADCAST_MACRO: &str = "SET1INT";
