// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Telemetry readings reconstructed from recovered bits.

use serde::{Deserialize, Serialize};

/// One reading: an 8-bit unsigned integer divided by [`VALUE_SCALE`].
pub type TelemetryValue = f32;

pub const BITS_PER_VALUE: usize = 8;
pub const VALUE_SCALE: f64 = 10.0;
pub const MAX_VALUE: TelemetryValue = 25.5;

/// Size of one value on the wire (IEEE-754 single precision).
pub const VALUE_WIRE_SIZE: usize = std::mem::size_of::<TelemetryValue>();

/// Five consecutive readings as consumed by the command-and-control side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// m/s
    pub speed: TelemetryValue,
    /// degrees
    pub direction: TelemetryValue,
    pub latitude: TelemetryValue,
    pub longitude: TelemetryValue,
    /// meters
    pub altitude: TelemetryValue,
}

impl TelemetryFrame {
    pub const FIELDS: usize = 5;
    pub const WIRE_SIZE: usize = Self::FIELDS * VALUE_WIRE_SIZE;

    pub fn values(&self) -> [TelemetryValue; Self::FIELDS] {
        [
            self.speed,
            self.direction,
            self.latitude,
            self.longitude,
            self.altitude,
        ]
    }

    /// Decode five native-endian f32 values.
    pub fn from_bytes(bytes: &[u8; Self::WIRE_SIZE]) -> Self {
        let mut values = [0.0; Self::FIELDS];
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(VALUE_WIRE_SIZE)) {
            let mut raw = [0u8; VALUE_WIRE_SIZE];
            raw.copy_from_slice(chunk);
            *value = TelemetryValue::from_ne_bytes(raw);
        }
        Self {
            speed: values[0],
            direction: values[1],
            latitude: values[2],
            longitude: values[3],
            altitude: values[4],
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::WIRE_SIZE] {
        let mut out = [0u8; Self::WIRE_SIZE];
        for (chunk, value) in out.chunks_exact_mut(VALUE_WIRE_SIZE).zip(self.values()) {
            chunk.copy_from_slice(&value.to_ne_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_bytes_follow_field_order() {
        let frame = TelemetryFrame {
            speed: 5.0,
            direction: 0.0,
            latitude: 17.7,
            longitude: 25.5,
            altitude: 0.1,
        };
        let bytes = frame.to_bytes();
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[8..12], &17.7f32.to_ne_bytes());
        assert_eq!(TelemetryFrame::from_bytes(&bytes), frame);
    }
}
