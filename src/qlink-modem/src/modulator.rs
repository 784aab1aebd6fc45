// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use tracing::debug;

use qlink_core::{Bit, BitPair, SymbolParameters};

use crate::carrier::ReferenceCarrier;
use crate::error::ModemError;

/// Maps bit pairs to QPSK phases and synthesizes one burst per symbol.
#[derive(Debug, Clone)]
pub struct Modulator {
    carrier: ReferenceCarrier,
}

impl Modulator {
    pub fn new(params: &SymbolParameters) -> Self {
        Self {
            carrier: ReferenceCarrier::new(params),
        }
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.carrier.len()
    }

    /// Modulate an even-length bit stream.
    ///
    /// Output length is `bits.len() / 2 * samples_per_symbol`. Odd input is
    /// rejected; callers pad with [`crate::pad_to_even`] first.
    pub fn modulate(&self, bits: &[Bit]) -> Result<Vec<f64>, ModemError> {
        if bits.len() % 2 != 0 {
            return Err(ModemError::OddBitCount(bits.len()));
        }

        let symbols = bits.len() / 2;
        let mut samples = Vec::with_capacity(symbols * self.carrier.len());
        for (sym_idx, pair) in bits.chunks_exact(2).enumerate() {
            let pair = to_bit_pair(sym_idx * 2, pair[0], pair[1])?;
            self.carrier.synthesize(pair.phase(), &mut samples);
        }

        debug!(
            "Modulated {} symbol(s) into {} sample(s)",
            symbols,
            samples.len()
        );
        Ok(samples)
    }
}

fn to_bit_pair(index: usize, first: Bit, second: Bit) -> Result<BitPair, ModemError> {
    BitPair::new(first, second).ok_or(if first > 1 {
        ModemError::InvalidBit { index, value: first }
    } else {
        ModemError::InvalidBit {
            index: index + 1,
            value: second,
        }
    })
}
