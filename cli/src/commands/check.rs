//! Check Command
//!
//! Run the emitted schedule statements on sample blocks and compare the
//! result with the full recurrence.

use anyhow::{Context, Result};
use rayon::prelude::*;
use sha1_precompute::ScheduleUnroller;
use tracing::info;

// =============================================================================
// CHECK
// =============================================================================

/// Verify the elided schedule on `samples` deterministic blocks.
pub fn check_mode(samples: u64) -> Result<()> {
    let unroller = ScheduleUnroller::preimage().context("Built-in zero index table is invalid")?;
    let schedule = unroller.unroll();
    info!(samples, "checking generated schedule");

    let mut failures: Vec<(u64, usize)> = (0..samples)
        .into_par_iter()
        .filter_map(|seed| {
            let block = unroller.sample_block(seed);
            schedule.first_mismatch(&block).map(|index| (seed, index))
        })
        .collect();
    failures.sort_unstable();

    for (seed, index) in &failures {
        println!("sample {seed}: FAILED (first mismatch at W[{index}])");
    }

    println!();
    if failures.is_empty() {
        println!("All {samples} sample blocks verified");
    } else {
        eprintln!(
            "WARNING: {} of {} sample blocks did NOT match",
            failures.len(),
            samples
        );
        std::process::exit(1);
    }

    Ok(())
}
