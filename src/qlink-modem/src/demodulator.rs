// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use tracing::{debug, warn};

use qlink_core::{Bit, DecisionTable, SymbolParameters};

use crate::carrier::ReferenceCarrier;

/// Coherent correlation demodulator with a quadrant hard decision.
#[derive(Debug, Clone)]
pub struct Demodulator {
    carrier: ReferenceCarrier,
    table: DecisionTable,
}

impl Demodulator {
    pub fn new(params: &SymbolParameters, table: DecisionTable) -> Self {
        Self {
            carrier: ReferenceCarrier::new(params),
            table,
        }
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.carrier.len()
    }

    /// Recover one bit pair per full window of `samples_per_symbol`.
    ///
    /// A trailing partial window is discarded, so the output length is
    /// always `2 * floor(samples.len() / samples_per_symbol)`.
    pub fn demodulate(&self, samples: &[f64]) -> Vec<Bit> {
        let windows = samples.chunks_exact(self.carrier.len());
        let partial = windows.remainder().len();
        if partial != 0 {
            warn!(
                "Discarding partial symbol window of {} sample(s) (need {})",
                partial,
                self.carrier.len()
            );
        }

        let mut bits = Vec::with_capacity(2 * (samples.len() / self.carrier.len()));
        for window in windows {
            let (i, q) = self.carrier.correlate(window);
            bits.extend_from_slice(&self.table.decide(i, q).bits());
        }

        debug!(
            "Demodulated {} sample(s) into {} bit(s)",
            samples.len(),
            bits.len()
        );
        bits
    }
}
