//! Shared types used across the generator library.

use thiserror::Error;

// =============================================================================
// OUTPUT FORMATS
// =============================================================================

/// Rendering of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled lines or C statements, ready to paste.
    #[default]
    Text,
    /// C preprocessor `#define` lines (constants only).
    Define,
    /// Pretty-printed JSON document.
    Json,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while preparing or rendering generated code.
///
/// The partition variants describe a broken static zero/live table. The
/// table is a fixed fact about the targeted input shape, so these abort
/// generation before anything is emitted.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Index outside `[0, 79]`.
    #[error("schedule index {index} is outside [0, 79]")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
    },
    /// Index listed as both zero and live.
    #[error("schedule index {index} is listed as both zero and live")]
    Overlap {
        /// Offending index.
        index: usize,
    },
    /// Index listed as neither zero nor live.
    #[error("schedule index {index} is listed as neither zero nor live")]
    Uncovered {
        /// Offending index.
        index: usize,
    },
    /// Derived index listed as zero although one of its sources is live.
    #[error("schedule index {index} is listed as zero but its source {source_index} is live")]
    InconsistentZero {
        /// Derived index listed as zero.
        index: usize,
        /// Live recurrence source of `index`.
        source_index: usize,
    },
    /// Format not available for the requested artifact.
    #[error("{format:?} output is not available for {artifact}")]
    UnsupportedFormat {
        /// Requested format.
        format: OutputFormat,
        /// Artifact name.
        artifact: &'static str,
    },
    /// JSON rendering failed.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for generator operations.
pub type Result<T> = core::result::Result<T, GeneratorError>;
