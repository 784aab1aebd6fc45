// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Bits <-> telemetry readings.

use tracing::{debug, warn};

use qlink_core::telemetry::{BITS_PER_VALUE, VALUE_SCALE};
use qlink_core::{Bit, TelemetryValue};

/// Scale an 8-bit raw reading to its telemetry value.
pub fn reading_from_raw(raw: u8) -> TelemetryValue {
    // Divide in double precision, then narrow.
    (f64::from(raw) / VALUE_SCALE) as TelemetryValue
}

/// Regroup bits MSB-first into bytes and rescale each to a reading.
///
/// Yields `floor(bits.len() / 8)` values; a short trailing group is
/// dropped.
pub fn decode_telemetry(bits: &[Bit]) -> Vec<TelemetryValue> {
    let groups = bits.chunks_exact(BITS_PER_VALUE);
    let dropped = groups.remainder().len();
    if dropped != 0 {
        warn!(
            "Dropping {} trailing bit(s) that do not form a full telemetry value",
            dropped
        );
    }

    let values: Vec<TelemetryValue> = groups
        .map(|group| {
            let raw = group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
            reading_from_raw(raw)
        })
        .collect();
    debug!("Reconstructed {} telemetry value(s)", values.len());
    values
}

/// Quantize readings to 8-bit raw values (clamped to 0..=255) and emit
/// their bits MSB-first. Inverse of [`decode_telemetry`] for in-range
/// readings.
pub fn quantize_readings(values: &[TelemetryValue]) -> Vec<Bit> {
    let mut bits = Vec::with_capacity(values.len() * BITS_PER_VALUE);
    for &value in values {
        let scaled = (f64::from(value) * VALUE_SCALE).round();
        let raw = if scaled.is_nan() {
            0
        } else {
            scaled.clamp(0.0, f64::from(u8::MAX)) as u8
        };
        bits.extend((0..BITS_PER_VALUE).rev().map(|shift| (raw >> shift) & 1));
    }
    bits
}
