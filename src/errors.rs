//! Shared error types used across submodules.
//!
//! Three families map onto the failure taxonomy of the designer: input
//! errors (malformed source data), precondition errors (not enough
//! resonators, mismatched axes), and numeric degeneracies (bandwidth
//! search failures). Every failure is local and recoverable; the
//! interactive surface reports it and returns to the menu.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Raised when source data cannot be read or parsed.
    #[error("import error: {0}")]
    Import(String),
    /// Raised when a curve's frequency axis is not strictly ascending.
    #[error("frequency axis must be strictly ascending")]
    NonAscendingAxis,
    /// Raised when a curve's frequency and admittance arrays disagree in length.
    #[error("frequency and admittance arrays differ in length ({frequencies} vs {admittance})")]
    LengthMismatch {
        /// Number of frequency samples.
        frequencies: usize,
        /// Number of admittance samples.
        admittance: usize,
    },
    /// Raised when a topology is asked to combine fewer resonators than it requires.
    #[error("at least {required} resonators are required, got {actual}")]
    InsufficientResonators {
        /// Minimum resonator count for the requested topology.
        required: usize,
        /// Resonator count actually supplied.
        actual: usize,
    },
    /// Raised when a curve does not share the common frequency axis of a cascade.
    #[error("curve {index} does not share the common frequency axis")]
    AxisMismatch {
        /// Zero-based position of the offending curve.
        index: usize,
    },
    /// Raised when the half-power search cannot bracket both −3 dB points.
    #[error("insufficient data for bandwidth: {0}")]
    BandwidthUnresolved(&'static str),
    /// Raised when the bracketed bandwidth collapses to zero width.
    #[error("zero bandwidth at resonance, Q factor is undefined")]
    ZeroBandwidth,
}
