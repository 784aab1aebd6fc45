// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Additive Gaussian noise channel.

use rand::Rng;
use rand_distr::StandardNormal;

use qlink_core::NoiseParameters;

/// Adds an independent Normal(mean, std_dev) draw to every sample.
///
/// The random source is owned by the caller and passed per call, so a
/// seeded generator gives reproducible perturbation.
#[derive(Debug, Clone, Copy)]
pub struct AwgnChannel {
    noise: NoiseParameters,
}

impl AwgnChannel {
    pub fn new(noise: NoiseParameters) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> NoiseParameters {
        self.noise
    }

    /// Returns a perturbed copy of equal length. A zero standard deviation
    /// returns the input unchanged, mean included.
    pub fn apply<R: Rng + ?Sized>(&self, samples: &[f64], rng: &mut R) -> Vec<f64> {
        if self.noise.is_disabled() {
            return samples.to_vec();
        }
        let mean = self.noise.mean();
        let std_dev = self.noise.std_dev();
        samples
            .iter()
            .map(|&x| {
                let z: f64 = rng.sample(StandardNormal);
                x + mean + std_dev * z
            })
            .collect()
    }
}
