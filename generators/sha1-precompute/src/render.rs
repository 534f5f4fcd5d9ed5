//! Output Rendering
//!
//! Turns folded constants and unrolled fragments into paste-ready text.
//! Text output is line-oriented and index-ascending so that repeated runs are
//! byte-identical.

use crate::expr::Naming;
use crate::folder::FoldedConstants;
use crate::schedule::UnrolledSchedule;
use crate::types::{GeneratorError, OutputFormat, Result};
use serde_json::json;
use tracing::trace;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Render the six folded constants.
///
/// - `Text`: `"<Label>: 0x<hex>"` per line.
/// - `Define`: `#define ROUND_CONSTANT_NN UINT32_C(0x<hex>)` per line.
/// - `Json`: `{ "constants": [{ "label", "round", "value" }] }`.
///
/// # Errors
/// Only if JSON serialization fails.
pub fn render_constants(constants: &FoldedConstants, format: OutputFormat) -> Result<String> {
    let text: String = match format {
        OutputFormat::Text => constants
            .iter()
            .map(|term| format!("{}: 0x{:08X}\n", term.label, term.value))
            .collect(),
        OutputFormat::Define => constants
            .iter()
            .map(|term| {
                format!(
                    "#define ROUND_CONSTANT_{:02}    UINT32_C(0x{:08X})\n",
                    term.round, term.value
                )
            })
            .collect(),
        OutputFormat::Json => {
            let entries: Vec<_> = constants
                .iter()
                .map(|term| {
                    json!({
                        "label": term.label,
                        "round": term.round,
                        "value": format!("0x{:08X}", term.value),
                    })
                })
                .collect();
            let mut text = serde_json::to_string_pretty(&json!({ "constants": entries }))?;
            text.push('\n');
            text
        }
    };
    Ok(text)
}

// =============================================================================
// SCHEDULE
// =============================================================================

/// Render the unrolled schedule.
///
/// Text output is the expansion, priming, copy-forward and broadcast
/// fragments separated by single blank lines. JSON output lists the live
/// sources of every expanded index.
///
/// # Errors
/// [`GeneratorError::UnsupportedFormat`] for `Define`, or a JSON failure.
pub fn render_schedule(
    schedule: &UnrolledSchedule,
    naming: &Naming,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let blocks: Vec<String> = schedule
                .fragments()
                .iter()
                .map(|fragment| {
                    trace!(fragment = fragment.name, "rendering fragment");
                    fragment.render(naming)
                })
                .collect();
            Ok(blocks.join("\n"))
        }
        OutputFormat::Define => Err(GeneratorError::UnsupportedFormat {
            format,
            artifact: "the message schedule",
        }),
        OutputFormat::Json => {
            let entries: Vec<_> = schedule
                .expressions
                .iter()
                .map(|expression| {
                    json!({
                        "index": expression.index,
                        "sources": expression.sources,
                        "rotate": !expression.is_zero(),
                    })
                })
                .collect();
            let mut text = serde_json::to_string_pretty(&json!({ "expressions": entries }))?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Constants and schedule as text, separated by a blank line.
///
/// # Errors
/// Never in practice; text rendering has no failure path.
pub fn render_all(
    constants: &FoldedConstants,
    schedule: &UnrolledSchedule,
    naming: &Naming,
) -> Result<String> {
    let mut text = render_constants(constants, OutputFormat::Text)?;
    text.push('\n');
    text.push_str(&render_schedule(schedule, naming, OutputFormat::Text)?);
    Ok(text)
}
