//! Generate Commands
//!
//! Render the folded constants and the unrolled schedule to stdout.

use anyhow::{Context, Result};
use clap::ValueEnum;
use sha1_precompute::{
    fold_initial_rounds, render_all, render_constants, render_schedule, Naming, OutputFormat,
    ScheduleUnroller,
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Format {
    /// Labelled lines
    Text,
    /// C preprocessor defines (constants only)
    Define,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Define => Self::Define,
            Format::Json => Self::Json,
        }
    }
}

/// Schedule output has no define form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ScheduleFormat {
    /// C statements
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<ScheduleFormat> for OutputFormat {
    fn from(format: ScheduleFormat) -> Self {
        match format {
            ScheduleFormat::Text => Self::Text,
            ScheduleFormat::Json => Self::Json,
        }
    }
}

fn unroller() -> Result<ScheduleUnroller> {
    ScheduleUnroller::preimage().context("Built-in zero index table is invalid")
}

/// Print the six folded constants.
pub fn print_constants(format: Format) -> Result<()> {
    let text = render_constants(&fold_initial_rounds(), format.into())?;
    print!("{text}");
    Ok(())
}

/// Print the unrolled schedule fragments.
pub fn print_schedule(format: ScheduleFormat, naming: &Naming) -> Result<()> {
    let schedule = unroller()?.unroll();
    let text = render_schedule(&schedule, naming, format.into())?;
    print!("{text}");
    Ok(())
}

/// Print constants and schedule as one text document.
pub fn print_all() -> Result<()> {
    let constants = fold_initial_rounds();
    let schedule = unroller()?.unroll();
    let text = render_all(&constants, &schedule, &Naming::default())?;
    print!("{text}");
    Ok(())
}
