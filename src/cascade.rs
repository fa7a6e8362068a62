//! Admittance cascading for ladder and lattice filter topologies.

use crate::curve::SampleCurve;
use crate::errors::FilterError;
use crate::math::{Scalar, C};

/// Connection topology for combining resonator admittances.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Alternating shunt/series branches; see [`cascade`] for the
    /// index-based alternation rule.
    Ladder,
    /// Two-branch balanced section combined with the parallel-admittance
    /// formula. Binary by design: curves beyond the first two are ignored.
    Lattice,
}

/// A combined filter response sampled on the shared frequency axis of its
/// input curves.
///
/// Returned by value from [`cascade`]; the caller owns the single live
/// response and overwrites it on each new design call.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResponse {
    /// Frequency axis in hertz, cloned from the input curves.
    pub frequencies: Vec<Scalar>,
    /// Combined complex admittance, one sample per frequency.
    pub admittance: Vec<C>,
}

impl FilterResponse {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the response holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Combines two or more resonator curves into one filter response.
///
/// All curves must share the frequency axis of the first curve exactly;
/// mismatched axes fail fast with [`FilterError::AxisMismatch`] rather
/// than being resampled.
///
/// Ladder rule (0-based fold): curve 0 seeds the running admittance; each
/// subsequent curve at index `i` joins as a parallel branch (element-wise
/// sum) when `i` is even and as a series branch (element-wise harmonic
/// combination `1/(1/acc + 1/y)`) when `i` is odd. The first non-initial
/// element, index 1, is therefore series.
///
/// Lattice rule: `(y1 * y2) / (y1 + y2)` over the first two curves.
///
/// A vanishing denominator (both branches simultaneously zero) propagates
/// as IEEE non-finite samples instead of panicking; downstream analysis
/// tolerates them.
pub fn cascade(curves: &[&SampleCurve], topology: Topology) -> Result<FilterResponse, FilterError> {
    if curves.len() < 2 {
        return Err(FilterError::InsufficientResonators {
            required: 2,
            actual: curves.len(),
        });
    }
    for (index, curve) in curves.iter().enumerate().skip(1) {
        if !curves[0].shares_axis(curve) {
            return Err(FilterError::AxisMismatch { index });
        }
    }

    let admittance = match topology {
        Topology::Ladder => cascade_ladder(curves),
        Topology::Lattice => cascade_lattice(curves[0], curves[1]),
    };

    Ok(FilterResponse {
        frequencies: curves[0].frequencies().to_vec(),
        admittance,
    })
}

fn cascade_ladder(curves: &[&SampleCurve]) -> Vec<C> {
    let one = C::new(1.0, 0.0);
    let mut total = curves[0].admittance().to_vec();
    for (i, curve) in curves.iter().enumerate().skip(1) {
        if i % 2 == 0 {
            // Parallel junction: admittances add.
            for (acc, &y) in total.iter_mut().zip(curve.admittance()) {
                *acc += y;
            }
        } else {
            // Series junction: harmonic combination.
            for (acc, &y) in total.iter_mut().zip(curve.admittance()) {
                *acc = one / (one / *acc + one / y);
            }
        }
    }
    total
}

fn cascade_lattice(first: &SampleCurve, second: &SampleCurve) -> Vec<C> {
    first
        .admittance()
        .iter()
        .zip(second.admittance())
        .map(|(&y1, &y2)| (y1 * y2) / (y1 + y2))
        .collect()
}
