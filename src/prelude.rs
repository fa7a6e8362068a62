//! Convenience re-exports for building filter-design pipelines.

pub use crate::analysis::{analyze, magnitude, reflection_estimate, QualityMetrics};
pub use crate::cascade::{cascade, FilterResponse, Topology};
pub use crate::curve::SampleCurve;
pub use crate::errors::FilterError;
pub use crate::io::{import_csv, write_response_csv};
pub use crate::math::{linspace, Scalar, C};
pub use crate::store::{Resonator, ResonatorId, ResonatorStore};
