//! Zero/Live Partition of Schedule Indices
//!
//! Every schedule index in `[0, 79]` is either statically zero or live. The
//! partition is supplied, never inferred; [`IndexPartition::new`] only checks
//! that the supplied table is disjoint, total and in range, and that every
//! zero entry at or above 16 is actually produced as zero by the recurrence.

use crate::constants::{BLOCK_WORDS, SCHEDULE_OFFSETS, SCHEDULE_WORDS, ZERO_INDICES};
use crate::types::{GeneratorError, Result};

/// Validated split of the schedule indices into zero and live sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPartition {
    zero: [bool; SCHEDULE_WORDS],
}

impl IndexPartition {
    /// Build a partition from explicit zero and live lists.
    ///
    /// # Errors
    /// Returns the first violated table property: an index out of range,
    /// present in both lists, absent from both, or a derived zero with a
    /// live source.
    pub fn new(zero: &[usize], live: &[usize]) -> Result<Self> {
        let mut zero_set = [false; SCHEDULE_WORDS];
        let mut live_set = [false; SCHEDULE_WORDS];

        for &index in zero {
            *slot(&mut zero_set, index)? = true;
        }
        for &index in live {
            *slot(&mut live_set, index)? = true;
        }

        for index in 0..SCHEDULE_WORDS {
            match (zero_set[index], live_set[index]) {
                (true, true) => return Err(GeneratorError::Overlap { index }),
                (false, false) => return Err(GeneratorError::Uncovered { index }),
                _ => {}
            }
        }

        let partition = Self { zero: zero_set };
        partition.check_derived_zeros()?;
        Ok(partition)
    }

    /// Build a partition whose live set is the complement of `zero`.
    ///
    /// # Errors
    /// Same as [`IndexPartition::new`]; overlap and coverage cannot fail.
    pub fn from_zero(zero: &[usize]) -> Result<Self> {
        let mut zero_set = [false; SCHEDULE_WORDS];
        for &index in zero {
            *slot(&mut zero_set, index)? = true;
        }
        let live: Vec<usize> = (0..SCHEDULE_WORDS).filter(|&i| !zero_set[i]).collect();
        Self::new(zero, &live)
    }

    /// The partition of the 6-byte preimage engine.
    ///
    /// # Errors
    /// Only if [`ZERO_INDICES`] itself is broken.
    pub fn preimage() -> Result<Self> {
        Self::from_zero(&ZERO_INDICES)
    }

    /// Whether `index` is statically zero. Indices past 79 are never zero.
    pub fn is_zero(&self, index: usize) -> bool {
        self.zero.get(index).copied().unwrap_or(false)
    }

    /// Whether `index` is a live schedule word.
    pub fn is_live(&self, index: usize) -> bool {
        index < SCHEDULE_WORDS && !self.zero[index]
    }

    /// Zero indices in ascending order.
    pub fn zero_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SCHEDULE_WORDS).filter(|&i| self.zero[i])
    }

    /// Live indices in ascending order.
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SCHEDULE_WORDS).filter(|&i| self.is_live(i))
    }

    fn check_derived_zeros(&self) -> Result<()> {
        for index in (BLOCK_WORDS..SCHEDULE_WORDS).filter(|&i| self.zero[i]) {
            if let Some(source_index) = SCHEDULE_OFFSETS
                .iter()
                .map(|offset| index - offset)
                .find(|&source| self.is_live(source))
            {
                return Err(GeneratorError::InconsistentZero {
                    index,
                    source_index,
                });
            }
        }
        Ok(())
    }
}

fn slot(set: &mut [bool; SCHEDULE_WORDS], index: usize) -> Result<&mut bool> {
    set.get_mut(index)
        .ok_or(GeneratorError::IndexOutOfRange { index })
}
