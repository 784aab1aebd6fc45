// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Validated modulation and channel parameters.

use std::f64::consts::PI;

use crate::error::ParamError;

/// Upper bound on one symbol window. Both ends keep a reference carrier of
/// this length in memory.
pub const MAX_SAMPLES_PER_SYMBOL: usize = 1 << 20;

fn require_positive(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NotPositive { name, value })
    }
}

/// Carrier and timing parameters shared by both ends of the link.
///
/// The modulator and demodulator must be built from identical values;
/// `samples_per_symbol` is derived once here so both sides agree on the
/// window length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolParameters {
    carrier_frequency: f64,
    sampling_rate: f64,
    symbol_duration: f64,
    samples_per_symbol: usize,
}

impl SymbolParameters {
    pub fn new(
        carrier_frequency: f64,
        sampling_rate: f64,
        symbol_duration: f64,
    ) -> Result<Self, ParamError> {
        let carrier_frequency = require_positive("carrier frequency", carrier_frequency)?;
        let sampling_rate = require_positive("sampling rate", sampling_rate)?;
        let symbol_duration = require_positive("symbol duration", symbol_duration)?;

        let product = sampling_rate * symbol_duration;
        if !product.is_finite() || product < 1.0 {
            return Err(ParamError::NoSamplesPerSymbol {
                sampling_rate,
                symbol_duration,
            });
        }
        if product >= (MAX_SAMPLES_PER_SYMBOL + 1) as f64 {
            return Err(ParamError::TooManySamplesPerSymbol {
                sampling_rate,
                symbol_duration,
                max: MAX_SAMPLES_PER_SYMBOL,
            });
        }

        Ok(Self {
            carrier_frequency,
            sampling_rate,
            symbol_duration,
            // Truncation, not rounding.
            samples_per_symbol: product as usize,
        })
    }

    pub fn carrier_frequency(&self) -> f64 {
        self.carrier_frequency
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    pub fn symbol_duration(&self) -> f64 {
        self.symbol_duration
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    /// ω = 2π·f_c
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.carrier_frequency
    }

    /// Local time of sample `j` within a symbol window.
    pub fn sample_time(&self, j: usize) -> f64 {
        j as f64 / self.sampling_rate
    }

    /// Whether the carrier sits strictly below fs/2.
    pub fn below_nyquist(&self) -> bool {
        self.carrier_frequency < self.sampling_rate / 2.0
    }
}

/// Normal(mean, std_dev) perturbation applied per sample by the channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParameters {
    mean: f64,
    std_dev: f64,
}

impl NoiseParameters {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ParamError> {
        if !mean.is_finite() {
            return Err(ParamError::NonFiniteMean(mean));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ParamError::InvalidStdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// A zero standard deviation disables the channel entirely.
    pub fn is_disabled(&self) -> bool {
        self.std_dev == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_parameters_give_ten_samples_per_symbol() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        assert_eq!(params.samples_per_symbol(), 10);
        assert!((params.angular_frequency() - 20.0 * PI).abs() < 1e-12);
        assert!(params.below_nyquist());
    }

    #[test]
    fn samples_per_symbol_truncates() {
        let params = SymbolParameters::new(1.0, 10.0, 0.39).unwrap();
        assert_eq!(params.samples_per_symbol(), 3);
    }

    #[test]
    fn sample_time_is_local_to_the_window() {
        let params = SymbolParameters::new(10.0, 100.0, 0.1).unwrap();
        assert_eq!(params.sample_time(0), 0.0);
        assert!((params.sample_time(5) - 0.05).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(matches!(
            SymbolParameters::new(10.0, 0.0, 0.1),
            Err(ParamError::NotPositive {
                name: "sampling rate",
                ..
            })
        ));
        assert!(matches!(
            SymbolParameters::new(10.0, 100.0, -0.1),
            Err(ParamError::NotPositive {
                name: "symbol duration",
                ..
            })
        ));
        assert!(matches!(
            SymbolParameters::new(f64::NAN, 100.0, 0.1),
            Err(ParamError::NotPositive {
                name: "carrier frequency",
                ..
            })
        ));
    }

    #[test]
    fn rejects_sub_sample_symbols() {
        let err = SymbolParameters::new(10.0, 100.0, 0.005).unwrap_err();
        assert!(matches!(err, ParamError::NoSamplesPerSymbol { .. }));
        assert!(err.to_string().contains("less than one sample"));
    }

    #[test]
    fn rejects_oversized_symbol_windows() {
        let err = SymbolParameters::new(10.0, 1e12, 0.1).unwrap_err();
        assert!(matches!(
            err,
            ParamError::TooManySamplesPerSymbol {
                max: MAX_SAMPLES_PER_SYMBOL,
                ..
            }
        ));
        assert!(err.to_string().contains("exceeds 1048576 samples per symbol"));

        let at_cap = SymbolParameters::new(10.0, MAX_SAMPLES_PER_SYMBOL as f64, 1.0).unwrap();
        assert_eq!(at_cap.samples_per_symbol(), MAX_SAMPLES_PER_SYMBOL);
        assert!(SymbolParameters::new(10.0, (MAX_SAMPLES_PER_SYMBOL + 1) as f64, 1.0).is_err());
    }

    #[test]
    fn noise_parameters_validate() {
        assert!(NoiseParameters::new(0.0, 0.1).is_ok());
        assert!(NoiseParameters::new(0.0, 0.0).unwrap().is_disabled());
        assert_eq!(
            NoiseParameters::new(0.0, -1.0),
            Err(ParamError::InvalidStdDev(-1.0))
        );
        assert!(matches!(
            NoiseParameters::new(f64::INFINITY, 0.1),
            Err(ParamError::NonFiniteMean(_))
        ));
    }
}
