// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use qlink_core::{Quadrant, SymbolParameters, PHASE_TABLE};

/// Cosine/sine reference for one symbol window, `t_j = j / fs`.
///
/// Built once per parameter set and shared by the modulator and the
/// demodulator so both ends evaluate identical carrier values.
#[derive(Debug, Clone)]
pub struct ReferenceCarrier {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl ReferenceCarrier {
    pub fn new(params: &SymbolParameters) -> Self {
        let omega = params.angular_frequency();
        let (cos, sin) = (0..params.samples_per_symbol())
            .map(|j| {
                let arg = omega * params.sample_time(j);
                (arg.cos(), arg.sin())
            })
            .unzip();
        Self { cos, sin }
    }

    /// Samples per symbol.
    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    /// Append one symbol: `cos(φ)·cos(ωt) + sin(φ)·sin(ωt)` per sample.
    pub fn synthesize(&self, phase: f64, out: &mut Vec<f64>) {
        let (sin_phase, cos_phase) = phase.sin_cos();
        out.extend(
            self.cos
                .iter()
                .zip(&self.sin)
                .map(|(c, s)| cos_phase * c + sin_phase * s),
        );
    }

    /// In-phase and quadrature correlation of one window.
    ///
    /// Only `min(window.len(), self.len())` samples are read.
    pub fn correlate(&self, window: &[f64]) -> (f64, f64) {
        window
            .iter()
            .zip(self.cos.iter().zip(&self.sin))
            .fold((0.0, 0.0), |(i, q), (x, (c, s))| (i + x * c, q + x * s))
    }

    /// Whether every constellation phase correlates back into its own
    /// quadrant on a clean channel.
    ///
    /// Windows of one or two samples usually fail: cos and sin are not
    /// orthogonal over them, so I/Q leak into each other and a symbol can
    /// land in a neighbouring quadrant. When this returns `false` the
    /// noiseless round trip does not hold.
    pub fn separates_quadrants(&self) -> bool {
        let mut symbol = Vec::with_capacity(self.len());
        PHASE_TABLE.iter().all(|&phase| {
            symbol.clear();
            self.synthesize(phase, &mut symbol);
            let (i, q) = self.correlate(&symbol);
            let (sin, cos) = phase.sin_cos();
            match Quadrant::classify(i, q) {
                Some(quadrant) => Quadrant::classify(cos, sin) == Some(quadrant),
                None => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn one_carrier_cycle_per_reference_window() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        let carrier = ReferenceCarrier::new(&params);
        assert_eq!(carrier.len(), 10);
        assert_eq!(carrier.cos[0], 1.0);
        assert_eq!(carrier.sin[0], 0.0);
        // Quarter period lands on sample 2.5; sample 5 is half a cycle.
        assert!((carrier.cos[5] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn synthesized_symbol_is_a_shifted_cosine() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        let carrier = ReferenceCarrier::new(&params);
        let phase = 3.0 * PI / 4.0;
        let mut out = Vec::new();
        carrier.synthesize(phase, &mut out);
        assert_eq!(out.len(), 10);
        for (j, sample) in out.iter().enumerate() {
            let t = params.sample_time(j);
            let expected = (params.angular_frequency() * t - phase).cos();
            assert!((sample - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn correlation_recovers_half_window_energy() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        let carrier = ReferenceCarrier::new(&params);
        let mut out = Vec::new();
        carrier.synthesize(PI / 4.0, &mut out);
        let (i, q) = carrier.correlate(&out);
        let expected = 5.0 * (PI / 4.0).cos();
        assert!((i - expected).abs() < 1e-9);
        assert!((q - expected).abs() < 1e-9);
    }

    #[test]
    fn separation_depends_on_window_not_only_on_nyquist() {
        let separates = |fc: f64, dur: f64| {
            let params = SymbolParameters::new(fc, 100.0, dur).unwrap();
            ReferenceCarrier::new(&params).separates_quadrants()
        };
        assert!(separates(10.0, 0.1));
        assert!(separates(10.0, 0.035));
        // One sample: Q is always zero.
        assert!(!separates(10.0, 0.015));
        // Two samples: leakage at 10 Hz, none at 20 Hz.
        assert!(!separates(10.0, 0.025));
        assert!(separates(20.0, 0.025));
    }

    #[test]
    fn correlation_stops_at_the_shorter_input() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        let carrier = ReferenceCarrier::new(&params);
        let (i, q) = carrier.correlate(&[2.0]);
        assert_eq!((i, q), (2.0, 0.0));
    }
}
