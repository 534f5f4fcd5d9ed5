//! SHA-1 Precompute CLI
//!
//! Prints folded round constants and unrolled schedule code for pasting into
//! the SIMD SHA-1 preimage engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, print_all, print_constants, print_schedule, Format, ScheduleFormat};
use sha1_precompute::constants::{PRECOMPUTED_BUFFER, ROTATE_MACRO};
use sha1_precompute::Naming;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "sha1-precompute")]
#[command(about = "Generate folded SHA-1 round constants and unrolled schedule code", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log generation steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the folded additions of rounds 0-4 and the length addition
    Constants {
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the unrolled message schedule and auxiliary fragments
    Schedule {
        #[arg(short, long, value_enum, default_value_t = ScheduleFormat::Text)]
        format: ScheduleFormat,

        /// Name of the precomputed schedule buffer
        #[arg(long, default_value = PRECOMPUTED_BUFFER)]
        buffer: String,

        /// Name of the rotate-left macro
        #[arg(long, default_value = ROTATE_MACRO)]
        rotate_macro: String,
    },
    /// Verify the elided schedule against the full recurrence
    Check {
        /// Number of sample blocks
        #[arg(short, long, default_value_t = 4096)]
        samples: u64,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Constants { format }) => print_constants(format)?,
        Some(Commands::Schedule {
            format,
            buffer,
            rotate_macro,
        }) => {
            let naming = Naming {
                precomputed: buffer,
                rotate_macro,
                ..Naming::default()
            };
            print_schedule(format, &naming)?;
        }
        Some(Commands::Check { samples }) => check_mode(samples)?,
        None => print_all()?,
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays paste-ready.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
