#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared numeric aliases and frequency-axis helpers.
pub mod math;
/// Sampled admittance curves and axis compatibility checks.
pub mod curve;
/// Resonator collection keyed by stable generated identifiers.
pub mod store;
/// Ladder and lattice admittance cascading.
pub mod cascade;
/// Peak, bandwidth, and quality-factor extraction.
pub mod analysis;
/// CSV import and export of resonator and response data.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for building filter-design pipelines.
pub mod prelude;
