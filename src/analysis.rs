//! Post-processing of combined filter responses: magnitude, a simplified
//! reflection estimate, and peak / bandwidth / Q extraction.

use std::f64::consts::SQRT_2;

use crate::errors::FilterError;
use crate::math::{Scalar, C};

/// Scalar figures of merit derived from one filter response.
///
/// Recomputed on demand by [`analyze`]; never persisted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityMetrics {
    /// Frequency of maximum response magnitude, in hertz.
    pub resonant_frequency: Scalar,
    /// Width between the −3 dB points bracketing the peak, in hertz.
    pub bandwidth: Scalar,
    /// Resonance sharpness: `resonant_frequency / bandwidth`.
    pub q_factor: Scalar,
}

/// Magnitude of a complex response, element-wise.
#[must_use]
pub fn magnitude(response: &[C]) -> Vec<Scalar> {
    response.iter().map(|y| y.norm()).collect()
}

/// Simplified reflection-magnitude estimate, `log10(|1/Y|)` per sample.
///
/// This is an approximation carried over from the measurement workflow,
/// not a calibrated S11 against a reference impedance. Samples where the
/// admittance vanishes come out non-finite and are passed through as-is.
#[must_use]
pub fn reflection_estimate(response: &[C]) -> Vec<Scalar> {
    response.iter().map(|y| (1.0 / y.norm()).log10()).collect()
}

/// Extracts resonant frequency, −3 dB bandwidth, and Q factor from a
/// response sampled on an ascending frequency axis.
///
/// The peak is the first occurrence of the maximum finite magnitude
/// (non-finite samples are skipped). The half-power threshold is
/// `peak / √2`; the lower edge is the last sample before the peak below
/// the threshold, the upper edge the first sample at or after the peak
/// below it. A peak at either boundary, a side that never drops below the
/// threshold, or an all-non-finite response yields
/// [`FilterError::BandwidthUnresolved`]; a zero-width bracket yields
/// [`FilterError::ZeroBandwidth`].
pub fn analyze(frequencies: &[Scalar], response: &[C]) -> Result<QualityMetrics, FilterError> {
    if frequencies.len() != response.len() {
        return Err(FilterError::LengthMismatch {
            frequencies: frequencies.len(),
            admittance: response.len(),
        });
    }

    let mags = magnitude(response);

    let mut peak_index = None;
    let mut peak_mag = Scalar::NEG_INFINITY;
    for (i, &m) in mags.iter().enumerate() {
        if m.is_finite() && m > peak_mag {
            peak_mag = m;
            peak_index = Some(i);
        }
    }
    let peak_index =
        peak_index.ok_or(FilterError::BandwidthUnresolved("no finite magnitude samples"))?;

    let resonant_frequency = frequencies[peak_index];
    let threshold = peak_mag / SQRT_2;

    let lower = (0..peak_index)
        .rev()
        .find(|&i| mags[i] < threshold)
        .ok_or(FilterError::BandwidthUnresolved(
            "no half-power crossing below the peak",
        ))?;
    let upper = (peak_index..mags.len())
        .find(|&i| mags[i] < threshold)
        .ok_or(FilterError::BandwidthUnresolved(
            "no half-power crossing above the peak",
        ))?;

    let bandwidth = frequencies[upper] - frequencies[lower];
    if bandwidth <= 0.0 {
        return Err(FilterError::ZeroBandwidth);
    }

    Ok(QualityMetrics {
        resonant_frequency,
        bandwidth,
        q_factor: resonant_frequency / bandwidth,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::linspace;

    /// Lorentzian magnitude with unit peak at `f0` and half-width `gamma`:
    /// the −3 dB points sit at `f0 ± gamma`, so the bandwidth is `2γ`.
    fn lorentzian(freqs: &[Scalar], f0: Scalar, gamma: Scalar) -> Vec<C> {
        freqs
            .iter()
            .map(|&f| {
                let x = (f - f0) / gamma;
                C::new(1.0 / (1.0 + x * x).sqrt(), 0.0)
            })
            .collect()
    }

    #[test]
    fn recovers_lorentzian_peak_bandwidth_and_q() {
        let f0 = 1.0e9;
        let gamma = 0.5e6;
        let freqs = linspace(0.99e9, 1.01e9, 20_001);
        let response = lorentzian(&freqs, f0, gamma);

        let metrics = analyze(&freqs, &response).unwrap();
        // Axis step is 1 kHz; allow a few samples of quantization.
        assert_relative_eq!(metrics.resonant_frequency, f0, epsilon = 2.0e3);
        assert_relative_eq!(metrics.bandwidth, 2.0 * gamma, epsilon = 5.0e3);
        assert_relative_eq!(metrics.q_factor, f0 / (2.0 * gamma), max_relative = 1.0e-2);
    }

    #[test]
    fn monotonic_curve_reports_unresolved_bandwidth() {
        let freqs = linspace(1.0, 100.0, 100);
        let rising: Vec<C> = (0..100).map(|i| C::new(i as Scalar, 0.0)).collect();
        let err = analyze(&freqs, &rising).unwrap_err();
        assert!(matches!(err, FilterError::BandwidthUnresolved(_)));

        let falling: Vec<C> = (0..100).map(|i| C::new(100.0 - i as Scalar, 0.0)).collect();
        let err = analyze(&freqs, &falling).unwrap_err();
        assert!(matches!(err, FilterError::BandwidthUnresolved(_)));
    }

    #[test]
    fn flat_curve_reports_unresolved_bandwidth() {
        let freqs = linspace(1.0, 10.0, 10);
        let flat = vec![C::new(1.0, 0.0); 10];
        assert!(matches!(
            analyze(&freqs, &flat).unwrap_err(),
            FilterError::BandwidthUnresolved(_)
        ));
    }

    #[test]
    fn all_non_finite_response_is_rejected_not_crashed() {
        let freqs = linspace(1.0, 3.0, 3);
        let bad = vec![C::new(Scalar::NAN, 0.0); 3];
        assert!(matches!(
            analyze(&freqs, &bad).unwrap_err(),
            FilterError::BandwidthUnresolved(_)
        ));
    }

    #[test]
    fn non_finite_samples_are_skipped_by_the_peak_search() {
        let freqs = linspace(1.0, 7.0, 7);
        let mut mags = vec![0.1, 0.2, 1.0, 0.2, 0.1, 0.05, 0.01];
        mags[5] = Scalar::INFINITY;
        let response: Vec<C> = mags.iter().map(|&m| C::new(m, 0.0)).collect();
        let metrics = analyze(&freqs, &response).unwrap();
        assert_relative_eq!(metrics.resonant_frequency, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_axis_reports_zero_bandwidth() {
        // Collapsed axis: the bracket exists but has zero width.
        let freqs = vec![5.0; 5];
        let mags = [0.1, 0.2, 1.0, 0.2, 0.1];
        let response: Vec<C> = mags.iter().map(|&m| C::new(m, 0.0)).collect();
        assert!(matches!(
            analyze(&freqs, &response).unwrap_err(),
            FilterError::ZeroBandwidth
        ));
    }

    #[test]
    fn ties_resolve_to_the_first_peak() {
        let freqs = linspace(1.0, 7.0, 7);
        let mags = [0.1, 1.0, 0.1, 0.2, 1.0, 0.2, 0.1];
        let response: Vec<C> = mags.iter().map(|&m| C::new(m, 0.0)).collect();
        let metrics = analyze(&freqs, &response).unwrap();
        assert_relative_eq!(metrics.resonant_frequency, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn reflection_estimate_matches_log_reciprocal() {
        let response = vec![C::new(0.1, 0.0), C::new(10.0, 0.0)];
        let s11 = reflection_estimate(&response);
        assert_relative_eq!(s11[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(s11[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn reflection_estimate_passes_non_finite_through() {
        let response = vec![C::new(0.0, 0.0)];
        let s11 = reflection_estimate(&response);
        assert!(s11[0].is_infinite());
    }

    #[test]
    fn cascade_then_analyze_is_deterministic() {
        use crate::cascade::{cascade, Topology};
        use crate::curve::SampleCurve;

        let freqs = linspace(0.99e9, 1.01e9, 2_001);
        let a = SampleCurve::new(freqs.clone(), lorentzian(&freqs, 0.998e9, 1.0e6)).unwrap();
        let b = SampleCurve::new(freqs.clone(), lorentzian(&freqs, 1.002e9, 1.0e6)).unwrap();

        let first = cascade(&[&a, &b], Topology::Lattice).unwrap();
        let second = cascade(&[&a, &b], Topology::Lattice).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            analyze(&first.frequencies, &first.admittance).ok(),
            analyze(&second.frequencies, &second.admittance).ok()
        );
    }

    #[test]
    fn analyze_is_deterministic() {
        let freqs = linspace(0.99e9, 1.01e9, 2_001);
        let response = lorentzian(&freqs, 1.0e9, 1.0e6);
        let first = analyze(&freqs, &response).unwrap();
        let second = analyze(&freqs, &response).unwrap();
        assert_eq!(first, second);
    }
}
