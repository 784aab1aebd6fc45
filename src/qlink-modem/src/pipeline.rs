// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! End-to-end link: pad -> modulate -> (channel) -> demodulate -> strip ->
//! decode. Stages run strictly in order, once per bit stream.

use rand::Rng;
use tracing::debug;

use qlink_core::{Bit, DecisionRule, NoiseParameters, SymbolParameters, TelemetryValue};

use crate::channel::AwgnChannel;
use crate::demodulator::Demodulator;
use crate::error::ModemError;
use crate::modulator::Modulator;
use crate::padding::{pad_to_even, strip_padding};
use crate::telemetry::decode_telemetry;

#[derive(Debug, Clone)]
pub struct Pipeline {
    params: SymbolParameters,
    modulator: Modulator,
    channel: Option<AwgnChannel>,
    demodulator: Demodulator,
}

impl Pipeline {
    /// `noise = None` skips the channel stage entirely.
    pub fn new(
        params: SymbolParameters,
        rule: DecisionRule,
        noise: Option<NoiseParameters>,
    ) -> Self {
        Self {
            params,
            modulator: Modulator::new(&params),
            channel: noise.map(AwgnChannel::new),
            demodulator: Demodulator::new(&params, rule.table()),
        }
    }

    pub fn params(&self) -> &SymbolParameters {
        &self.params
    }

    pub fn has_channel(&self) -> bool {
        self.channel.is_some()
    }

    /// Pad to even length and modulate.
    pub fn transmit(&self, bits: Vec<Bit>) -> Result<Vec<f64>, ModemError> {
        let bits = pad_to_even(bits);
        self.modulator.modulate(&bits)
    }

    /// Apply the channel stage if one is configured.
    pub fn perturb<R: Rng + ?Sized>(&self, samples: Vec<f64>, rng: &mut R) -> Vec<f64> {
        match &self.channel {
            Some(channel) => {
                debug!(
                    "Adding Gaussian noise (mean {}, std_dev {}) to {} sample(s)",
                    channel.noise().mean(),
                    channel.noise().std_dev(),
                    samples.len()
                );
                channel.apply(&samples, rng)
            }
            None => samples,
        }
    }

    /// Demodulate and drop a trailing padding bit, if any.
    pub fn recover_bits(&self, samples: &[f64]) -> Vec<Bit> {
        strip_padding(self.demodulator.demodulate(samples))
    }

    pub fn receive(&self, samples: &[f64]) -> Vec<TelemetryValue> {
        decode_telemetry(&self.recover_bits(samples))
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        bits: Vec<Bit>,
        rng: &mut R,
    ) -> Result<Vec<TelemetryValue>, ModemError> {
        let modulated = self.transmit(bits)?;
        let received = self.perturb(modulated, rng);
        Ok(self.receive(&received))
    }
}
