//! Initial-Step Constant Folding
//!
//! The engine hashes 6-byte candidates whose block is zero everywhere except
//! word 0 (inner letters), word 1 (outer letters and padding) and word 15
//! (bit length). Everything in rounds 0-4 that does not depend on those words
//! is a constant of the initial hash value and can be summed ahead of time.
//!
//! Which terms survive per round is fixed by [`FOLD_PLAN`]:
//!
//! ```text
//! round 0 : K + e + f(b, c, d) + rotl(a, 5)
//! round 1 : K + e + f(b, c, d)
//! round 2 : K + e
//! round 3 : K + e
//! round 4 : K + e
//! ```
//!
//! Round 1 drops `rotl(a, 5)`: the engine adds the rotated output of round 0
//! itself, so only the IV-derived part is folded here.

use crate::constants::{
    FOLDED_ROUNDS, K_00_19, LENGTH_ROUND, PREIMAGE_LENGTH_BIT, ROTATE_A, ROTATE_B, SHA1_IV_0,
    SHA1_IV_1, SHA1_IV_2, SHA1_IV_3, SHA1_IV_4,
};
use crate::primitives::{f_00_19, rotl};
use tracing::debug;

// =============================================================================
// ROUND STATE
// =============================================================================

/// The five working variables of the compression function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Working variable `a`.
    pub a: u32,
    /// Working variable `b`.
    pub b: u32,
    /// Working variable `c`.
    pub c: u32,
    /// Working variable `d`.
    pub d: u32,
    /// Working variable `e`.
    pub e: u32,
    round: usize,
}

impl RoundState {
    /// State before round 0: the SHA-1 initial hash value.
    pub const fn initial() -> Self {
        Self::new([SHA1_IV_0, SHA1_IV_1, SHA1_IV_2, SHA1_IV_3, SHA1_IV_4])
    }

    /// State before round 0 from arbitrary words `[a, b, c, d, e]`.
    pub const fn new(words: [u32; 5]) -> Self {
        Self {
            a: words[0],
            b: words[1],
            c: words[2],
            d: words[3],
            e: words[4],
            round: 0,
        }
    }

    /// Round about to be processed.
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Shift the working variables by one round.
    ///
    /// `new_a` is the known part of the round output; it never reaches `e`
    /// within the folded prefix.
    pub fn advance(&mut self, new_a: u32) {
        self.e = self.d;
        self.d = self.c;
        self.c = rotl(self.b, ROTATE_B);
        self.b = self.a;
        self.a = new_a;
        self.round += 1;
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::initial()
    }
}

// =============================================================================
// FOLD PLAN
// =============================================================================

/// Terms of a round addition that are known at generation time.
///
/// `K + e` is always known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTerms {
    /// Include `f(b, c, d)`.
    pub round_function: bool,
    /// Include `rotl(a, 5)`.
    pub rotated_a: bool,
}

impl RoundTerms {
    /// Only `K + e`.
    pub const CONSTANT_ONLY: Self = Self {
        round_function: false,
        rotated_a: false,
    };

    /// Sum the selected terms of `state` modulo 2^32.
    pub const fn addition(self, state: &RoundState, k: u32) -> u32 {
        let mut sum = k.wrapping_add(state.e);
        if self.round_function {
            sum = sum.wrapping_add(f_00_19(state.b, state.c, state.d));
        }
        if self.rotated_a {
            sum = sum.wrapping_add(rotl(state.a, ROTATE_A));
        }
        sum
    }
}

/// Terms folded in each of rounds 0-4.
pub const FOLD_PLAN: [RoundTerms; FOLDED_ROUNDS] = [
    RoundTerms {
        round_function: true,
        rotated_a: true,
    },
    RoundTerms {
        round_function: true,
        rotated_a: false,
    },
    RoundTerms::CONSTANT_ONLY,
    RoundTerms::CONSTANT_ONLY,
    RoundTerms::CONSTANT_ONLY,
];

const ADDITION_LABELS: [&str; FOLDED_ROUNDS] = [
    "First Addition",
    "Second Addition",
    "Third Addition",
    "Fourth Addition",
    "Fifth Addition",
];

const LENGTH_LABEL: &str = "Preimage-Length Addition";

// =============================================================================
// FOLDED CONSTANTS
// =============================================================================

/// A precomputed round addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveTerm {
    /// Human-readable name.
    pub label: &'static str,
    /// Round that consumes the constant.
    pub round: usize,
    /// Folded value.
    pub value: u32,
}

/// All constants produced by [`ConstantFolder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedConstants {
    /// Additions for rounds 0-4.
    pub additions: [AdditiveTerm; FOLDED_ROUNDS],
    /// `K + bit length`, consumed in round 15.
    pub length: AdditiveTerm,
}

impl FoldedConstants {
    /// All six constants in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &AdditiveTerm> {
        self.additions.iter().chain(core::iter::once(&self.length))
    }
}

// =============================================================================
// FOLDER
// =============================================================================

/// Symbolically runs the first rounds with zero message words.
#[derive(Debug, Clone, Copy)]
pub struct ConstantFolder {
    state: RoundState,
    k: u32,
}

impl ConstantFolder {
    /// Folder over the SHA-1 initial hash value and `K_00_19`.
    pub const fn new() -> Self {
        Self::with_state(RoundState::initial(), K_00_19)
    }

    /// Folder over an arbitrary starting state and round constant.
    pub const fn with_state(state: RoundState, k: u32) -> Self {
        Self { state, k }
    }

    /// Run [`FOLD_PLAN`] and return the six constants.
    pub fn fold(mut self) -> FoldedConstants {
        let additions = core::array::from_fn(|round| {
            let value = FOLD_PLAN[round].addition(&self.state, self.k);
            debug!(
                round = self.state.round(),
                value = %format!("{value:#010X}"),
                "folded round addition"
            );
            self.state.advance(value);
            AdditiveTerm {
                label: ADDITION_LABELS[round],
                round,
                value,
            }
        });

        let length = AdditiveTerm {
            label: LENGTH_LABEL,
            round: LENGTH_ROUND,
            value: self.k.wrapping_add(PREIMAGE_LENGTH_BIT),
        };
        debug!(
            round = LENGTH_ROUND,
            value = %format!("{:#010X}", length.value),
            "folded length addition"
        );

        FoldedConstants { additions, length }
    }
}

impl Default for ConstantFolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold rounds 0-4 of the standard SHA-1 initial state.
pub fn fold_initial_rounds() -> FoldedConstants {
    ConstantFolder::new().fold()
}
