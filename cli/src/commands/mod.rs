//! CLI Commands
//!
//! All sha1-precompute CLI commands organized as separate modules.

mod check;
mod generate;

pub use check::check_mode;
pub use generate::{print_all, print_constants, print_schedule, Format, ScheduleFormat};
