//! # SHA-1 Precompute
//!
//! Build-time generator for a batched SHA-1 preimage engine.
//!
//! - **Constant folding:** rounds 0-4 run symbolically over the initial hash
//!   value with zero message words, leaving one additive constant per round
//!   plus the length constant of round 15.
//! - **Schedule unrolling:** the expansion `W[17..80]` is unrolled against a
//!   static table of zero words, dropping every zero operand.
//!
//! # Usage
//! ```rust
//! use sha1_precompute::{fold_initial_rounds, render_schedule, Naming, OutputFormat, ScheduleUnroller};
//!
//! let constants = fold_initial_rounds();
//! assert_eq!(constants.length.value, 0x5A82_79C9);
//!
//! let schedule = ScheduleUnroller::preimage()?.unroll();
//! let text = render_schedule(&schedule, &Naming::default(), OutputFormat::Text)?;
//! assert!(text.starts_with("p_precomputedBlocks[17] = p_precomputedBlocks[1];"));
//! # Ok::<(), sha1_precompute::GeneratorError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod constants;
mod expr;
mod folder;
mod partition;
pub mod primitives;
mod render;
mod schedule;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use expr::{Buffer, Expr, Fragment, Naming, Operand, Statement, StatementDisplay};
pub use folder::{
    fold_initial_rounds, AdditiveTerm, ConstantFolder, FoldedConstants, RoundState, RoundTerms,
    FOLD_PLAN,
};
pub use partition::IndexPartition;
pub use primitives::{f_00_19, rotl};
pub use render::{render_all, render_constants, render_schedule};
pub use schedule::{reference_schedule, ScheduleExpression, ScheduleUnroller, UnrolledSchedule};
pub use types::{GeneratorError, OutputFormat, Result};
