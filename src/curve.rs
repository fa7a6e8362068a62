//! Sampled one-port admittance curves.

use crate::errors::FilterError;
use crate::math::{Scalar, C};

/// A measured admittance spectrum: paired `(frequency, admittance)` samples
/// sorted ascending by frequency.
///
/// Construction validates the pairing invariants; curves are immutable
/// afterwards. Curves entering one cascade must share an identical
/// frequency axis, checked with [`SampleCurve::shares_axis`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCurve {
    frequencies: Vec<Scalar>,
    admittance: Vec<C>,
}

impl SampleCurve {
    /// Creates a curve from equal-length frequency and admittance arrays.
    ///
    /// The frequency axis must be strictly ascending; duplicate or
    /// out-of-order samples are rejected.
    pub fn new(frequencies: Vec<Scalar>, admittance: Vec<C>) -> Result<Self, FilterError> {
        if frequencies.len() != admittance.len() {
            return Err(FilterError::LengthMismatch {
                frequencies: frequencies.len(),
                admittance: admittance.len(),
            });
        }
        if !frequencies.windows(2).all(|w| w[0] < w[1]) {
            return Err(FilterError::NonAscendingAxis);
        }
        Ok(Self {
            frequencies,
            admittance,
        })
    }

    /// Frequency axis in hertz.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.frequencies
    }

    /// Complex admittance samples, one per frequency.
    #[must_use]
    pub fn admittance(&self) -> &[C] {
        &self.admittance
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// True when `other` is sampled on exactly this frequency axis
    /// (same length, identical values).
    #[must_use]
    pub fn shares_axis(&self, other: &Self) -> bool {
        self.frequencies == other.frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(freqs: Vec<Scalar>, y: Scalar) -> Result<SampleCurve, FilterError> {
        let n = freqs.len();
        SampleCurve::new(freqs, vec![C::new(y, 0.0); n])
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = SampleCurve::new(vec![1.0, 2.0], vec![C::new(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            FilterError::LengthMismatch {
                frequencies: 2,
                admittance: 1
            }
        ));
    }

    #[test]
    fn rejects_unsorted_and_duplicate_axes() {
        assert!(matches!(
            constant(vec![1.0, 3.0, 2.0], 1.0).unwrap_err(),
            FilterError::NonAscendingAxis
        ));
        assert!(matches!(
            constant(vec![1.0, 1.0, 2.0], 1.0).unwrap_err(),
            FilterError::NonAscendingAxis
        ));
    }

    #[test]
    fn shares_axis_requires_identical_values() {
        let a = constant(vec![1.0, 2.0, 3.0], 1.0).unwrap();
        let b = constant(vec![1.0, 2.0, 3.0], 7.0).unwrap();
        let c = constant(vec![1.0, 2.0, 4.0], 1.0).unwrap();
        let d = constant(vec![1.0, 2.0], 1.0).unwrap();
        assert!(a.shares_axis(&b));
        assert!(!a.shares_axis(&c));
        assert!(!a.shares_axis(&d));
    }
}
