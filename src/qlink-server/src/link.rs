// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! One pass of the link: bits in, telemetry readings out.

use rand::Rng;
use tracing::info;

use qlink_core::{Bit, DynResult, TelemetryValue};
use qlink_modem::Pipeline;

use crate::waveform_store::{WaveformKind, WaveformStore};

/// Run `bits` through the pipeline. With a store, the modulated and noisy
/// buffers are persisted and reloaded between stages.
pub fn run_link<R: Rng + ?Sized>(
    pipeline: &Pipeline,
    bits: Vec<Bit>,
    rng: &mut R,
    store: Option<&WaveformStore>,
) -> DynResult<Vec<TelemetryValue>> {
    let bit_count = bits.len();
    let modulated = pipeline.transmit(bits)?;
    info!(
        "Modulated {} bit(s) into {} sample(s)",
        bit_count,
        modulated.len()
    );

    let received = match store {
        None => pipeline.perturb(modulated, rng),
        Some(store) => {
            let modulated = store.round_trip(WaveformKind::Modulated, &modulated)?;
            let perturbed = pipeline.perturb(modulated, rng);
            if pipeline.has_channel() {
                store.round_trip(WaveformKind::Noisy, &perturbed)?
            } else {
                perturbed
            }
        }
    };

    let values = pipeline.receive(&received);
    info!("Reconstructed {} telemetry value(s)", values.len());
    Ok(values)
}
