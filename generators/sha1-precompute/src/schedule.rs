//! Message Schedule Unrolling
//!
//! Unrolls `W[i] = rotl(W[i-3] ^ W[i-8] ^ W[i-14] ^ W[i-16], 1)` for
//! `i` in `[17, 79]` against a static [`IndexPartition`]. Sources known to be
//! zero are dropped; an index with no live source becomes a plain `= 0`.
//!
//! Besides the expansion, three auxiliary fragments are produced for the
//! engine's inner loop:
//!
//! ```text
//! priming      : p_w0[k] = LEFT_ROTATE(p_blocks[0], k);              k in [1, 20]
//! copy-forward : p_blocks[i] = p_precomputedBlocks[i];               i in [16, 75]
//! broadcast    : p_precomputedBlocks[i] = SET1INT(p_tempPrecomputedBlocks[i]);  i in [17, 79]
//! ```

use crate::constants::{
    BLOCK_WORDS, BROADCAST_RANGE, COPY_FORWARD_RANGE, EXPANSION_RANGE, PRIMING_RANGE,
    SCHEDULE_OFFSETS, SCHEDULE_ROTATE, SCHEDULE_WORDS,
};
use crate::expr::{Buffer, Expr, Fragment, Operand, Statement};
use crate::partition::IndexPartition;
use crate::primitives::rotl;
use crate::types::{GeneratorError, Result};
use tracing::{debug, trace};

// =============================================================================
// PER-INDEX EXPRESSION
// =============================================================================

/// Live recurrence sources of one expanded schedule word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleExpression {
    /// Expanded index.
    pub index: usize,
    /// Live sources in offset order `i-3, i-8, i-14, i-16`.
    pub sources: Vec<usize>,
}

impl ScheduleExpression {
    fn build(index: usize, partition: &IndexPartition) -> Self {
        let sources: Vec<usize> = SCHEDULE_OFFSETS
            .iter()
            .map(|offset| index - offset)
            .filter(|&source| !partition.is_zero(source))
            .collect();
        Self { index, sources }
    }

    /// Whether every source is zero, so the word is the constant 0.
    pub fn is_zero(&self) -> bool {
        self.sources.is_empty()
    }

    /// Statements computing this word in the precomputed buffer.
    ///
    /// One `= 0` statement when degenerate, otherwise the XOR assignment
    /// followed by the in-place rotate.
    pub fn statements(&self) -> Vec<Statement> {
        let target = Operand::new(Buffer::Precomputed, self.index);
        if self.is_zero() {
            return vec![Statement::new(target, Expr::Zero)];
        }

        let operands = self
            .sources
            .iter()
            .map(|&source| Operand::new(Buffer::Precomputed, source))
            .collect();

        vec![
            Statement::new(target, Expr::xor(operands)),
            Statement::new(
                target,
                Expr::Rotate {
                    operand: target,
                    bits: SCHEDULE_ROTATE,
                },
            ),
        ]
    }
}

// =============================================================================
// UNROLLED OUTPUT
// =============================================================================

/// Every artifact of one unrolling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrolledSchedule {
    /// Per-index expressions for `[17, 79]`.
    pub expressions: Vec<ScheduleExpression>,
    /// Expansion statements of all `expressions`.
    pub expansion: Fragment,
    /// `rotl(W[0], k)` for `k` in `[1, 20]`.
    pub priming: Fragment,
    /// Working buffer loads for `[16, 75]`.
    pub copy_forward: Fragment,
    /// Lane broadcast for `[17, 79]`.
    pub broadcast: Fragment,
}

impl UnrolledSchedule {
    /// Fragments in emission order.
    pub fn fragments(&self) -> [&Fragment; 4] {
        [&self.expansion, &self.priming, &self.copy_forward, &self.broadcast]
    }

    /// Schedule of `block` computed by running the expansion statements.
    ///
    /// Words `[0, 16]` come from the full recurrence; every later word is
    /// only written by the emitted statements, in emission order. The
    /// expansion reads and writes the precomputed buffer alone, so operands
    /// are looked up by index. Meaningful only for blocks that are zero at
    /// every zero index below 16.
    pub fn evaluate(&self, block: &[u32; BLOCK_WORDS]) -> [u32; SCHEDULE_WORDS] {
        let reference = reference_schedule(block);
        let mut words = [0u32; SCHEDULE_WORDS];
        let start = *EXPANSION_RANGE.start();
        words[..start].copy_from_slice(&reference[..start]);

        for statement in &self.expansion.statements {
            let value = statement
                .value
                .evaluate(|operand| words.get(operand.index).copied().unwrap_or(0));
            if let Some(word) = words.get_mut(statement.target.index) {
                *word = value;
            }
        }
        words
    }

    /// First index where the emitted expansion disagrees with the full
    /// recurrence, if any.
    pub fn first_mismatch(&self, block: &[u32; BLOCK_WORDS]) -> Option<usize> {
        let reference = reference_schedule(block);
        let generated = self.evaluate(block);
        (0..SCHEDULE_WORDS).find(|&i| reference[i] != generated[i])
    }
}

// =============================================================================
// UNROLLER
// =============================================================================

/// Generates the unrolled schedule for a fixed zero/live partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleUnroller {
    partition: IndexPartition,
}

impl ScheduleUnroller {
    /// Unroller over a validated partition.
    pub const fn new(partition: IndexPartition) -> Self {
        Self { partition }
    }

    /// Unroller for the 6-byte preimage engine.
    ///
    /// # Errors
    /// Only if the built-in zero table is broken.
    pub fn preimage() -> Result<Self> {
        IndexPartition::preimage().map(Self::new)
    }

    /// Partition the unroller was built with.
    pub const fn partition(&self) -> &IndexPartition {
        &self.partition
    }

    /// Expression for one index in `[16, 79]`.
    ///
    /// # Errors
    /// [`GeneratorError::IndexOutOfRange`] for indices the recurrence does not
    /// define.
    pub fn expression(&self, index: usize) -> Result<ScheduleExpression> {
        if !(BLOCK_WORDS..SCHEDULE_WORDS).contains(&index) {
            return Err(GeneratorError::IndexOutOfRange { index });
        }
        Ok(ScheduleExpression::build(index, &self.partition))
    }

    /// Expressions for `[17, 79]` in ascending order.
    pub fn expressions(&self) -> Vec<ScheduleExpression> {
        EXPANSION_RANGE
            .map(|index| ScheduleExpression::build(index, &self.partition))
            .collect()
    }

    /// Run the full unrolling pass.
    pub fn unroll(&self) -> UnrolledSchedule {
        let expressions = self.expressions();
        for expression in &expressions {
            let live = expression.sources.len();
            if live < SCHEDULE_OFFSETS.len() {
                debug!(index = expression.index, live, "elided zero operands");
            }
        }

        let expansion = Fragment {
            name: "expansion",
            statements: expressions
                .iter()
                .flat_map(ScheduleExpression::statements)
                .collect(),
        };
        trace!(statements = expansion.statements.len(), "built expansion fragment");

        let w0 = Operand::new(Buffer::Blocks, 0);
        let priming = Fragment {
            name: "priming",
            statements: PRIMING_RANGE
                .map(|bits| {
                    Statement::new(
                        Operand::new(Buffer::RotatedW0, bits as usize),
                        Expr::Rotate { operand: w0, bits },
                    )
                })
                .collect(),
        };

        let copy_forward = Fragment {
            name: "copy-forward",
            statements: COPY_FORWARD_RANGE
                .map(|index| {
                    Statement::new(
                        Operand::new(Buffer::Blocks, index),
                        Expr::Load(Operand::new(Buffer::Precomputed, index)),
                    )
                })
                .collect(),
        };

        let broadcast = Fragment {
            name: "broadcast",
            statements: BROADCAST_RANGE
                .map(|index| {
                    Statement::new(
                        Operand::new(Buffer::Precomputed, index),
                        Expr::Broadcast(Operand::new(Buffer::Staging, index)),
                    )
                })
                .collect(),
        };

        UnrolledSchedule {
            expressions,
            expansion,
            priming,
            copy_forward,
            broadcast,
        }
    }

    // =========================================================================
    // SELF-CHECK
    // =========================================================================

    /// Schedule of `block` computed with the emitted expansion.
    ///
    /// See [`UnrolledSchedule::evaluate`].
    pub fn evaluate(&self, block: &[u32; BLOCK_WORDS]) -> [u32; SCHEDULE_WORDS] {
        self.unroll().evaluate(block)
    }

    /// First index where the emitted expansion disagrees with the full
    /// recurrence, if any.
    pub fn first_mismatch(&self, block: &[u32; BLOCK_WORDS]) -> Option<usize> {
        self.unroll().first_mismatch(block)
    }

    /// Deterministic block honouring the partition: zero at every zero index,
    /// pseudo-random elsewhere.
    pub fn sample_block(&self, seed: u64) -> [u32; BLOCK_WORDS] {
        let mut state = seed;
        core::array::from_fn(|index| {
            let word = splitmix32(&mut state);
            if self.partition.is_zero(index) {
                0
            } else {
                word
            }
        })
    }
}

/// Full 80-word expansion of `block` without any elision.
pub fn reference_schedule(block: &[u32; BLOCK_WORDS]) -> [u32; SCHEDULE_WORDS] {
    let mut words = [0u32; SCHEDULE_WORDS];
    words[..BLOCK_WORDS].copy_from_slice(block);
    for i in BLOCK_WORDS..SCHEDULE_WORDS {
        let mixed = SCHEDULE_OFFSETS
            .iter()
            .fold(0, |acc, offset| acc ^ words[i - offset]);
        words[i] = rotl(mixed, SCHEDULE_ROTATE);
    }
    words
}

// SplitMix64, truncated to the high half.
#[allow(clippy::cast_possible_truncation)]
const fn splitmix32(state: &mut u64) -> u32 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 32) as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn index_17_keeps_only_word_1() {
        let unroller = ScheduleUnroller::preimage().unwrap();
        assert_eq!(unroller.expression(17).unwrap().sources, [1]);
    }

    #[test]
    fn index_19_is_degenerate() {
        let unroller = ScheduleUnroller::preimage().unwrap();
        assert!(unroller.expression(19).unwrap().is_zero());
    }

    #[test]
    fn index_16_is_degenerate() {
        let unroller = ScheduleUnroller::preimage().unwrap();
        let expression = unroller.expression(16).unwrap();
        assert!(expression.is_zero());
        assert_eq!(expression.statements().len(), 1);
    }

    #[test]
    fn expression_rejects_undefined_indices() {
        let unroller = ScheduleUnroller::preimage().unwrap();
        assert!(matches!(
            unroller.expression(15),
            Err(GeneratorError::IndexOutOfRange { index: 15 })
        ));
        assert!(unroller.expression(80).is_err());
    }

    #[test]
    fn sample_blocks_respect_zero_indices() {
        let unroller = ScheduleUnroller::preimage().unwrap();
        let block = unroller.sample_block(7);
        for index in unroller.partition().zero_indices().filter(|&i| i < BLOCK_WORDS) {
            assert_eq!(block[index], 0, "index {index}");
        }
        assert_ne!(block[1], 0);
        assert_eq!(block, unroller.sample_block(7));
    }

    #[test]
    fn reference_schedule_matches_abc_block() {
        // "abc" padded: W[16] of the FIPS 180-4 example.
        let mut block = [0u32; BLOCK_WORDS];
        block[0] = 0x6162_6380;
        block[15] = 0x18;
        let words = reference_schedule(&block);
        assert_eq!(words[16], rotl(0x6162_6380, 1));
        assert_eq!(words[17], 0);
        assert_eq!(words[18], rotl(0x18, 1));
    }
}
