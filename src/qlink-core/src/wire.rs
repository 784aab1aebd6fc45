// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Byte-level formats at the edges of the link.
//!
//! - inbound bits: one ASCII `'0'`/`'1'` per byte, no framing
//! - outbound telemetry: native-endian f32 back-to-back, no framing
//! - persisted waveforms: native-endian f64 back-to-back, no header

use std::io::{self, Read, Write};

use tracing::warn;

use crate::error::WireError;
use crate::symbol::Bit;
use crate::telemetry::{TelemetryValue, VALUE_WIRE_SIZE};

pub const WAVEFORM_SAMPLE_SIZE: usize = std::mem::size_of::<f64>();

/// Convert an ASCII bit stream to bits. Whitespace (e.g. a trailing
/// newline from a line-oriented sender) is skipped.
pub fn parse_ascii_bits(bytes: &[u8]) -> Result<Vec<Bit>, WireError> {
    let mut bits = Vec::with_capacity(bytes.len());
    for (offset, &byte) in bytes.iter().enumerate() {
        match byte {
            b'0' | b'1' => bits.push(byte - b'0'),
            b if b.is_ascii_whitespace() => {}
            byte => return Err(WireError::InvalidBitByte { offset, byte }),
        }
    }
    Ok(bits)
}

pub fn encode_telemetry(values: &[TelemetryValue]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * VALUE_WIRE_SIZE);
    for value in values {
        out.extend_from_slice(&value.to_ne_bytes());
    }
    out
}

/// Decode native-endian f32 values; a trailing partial value is dropped.
pub fn decode_telemetry(bytes: &[u8]) -> Vec<TelemetryValue> {
    let chunks = bytes.chunks_exact(VALUE_WIRE_SIZE);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        warn!("Dropping {} trailing telemetry byte(s)", trailing);
    }
    chunks
        .map(|chunk| {
            let mut raw = [0u8; VALUE_WIRE_SIZE];
            raw.copy_from_slice(chunk);
            TelemetryValue::from_ne_bytes(raw)
        })
        .collect()
}

pub fn write_waveform<W: Write>(mut writer: W, samples: &[f64]) -> io::Result<()> {
    for sample in samples {
        writer.write_all(&sample.to_ne_bytes())?;
    }
    writer.flush()
}

/// Read samples until EOF. A trailing partial sample is dropped.
pub fn read_waveform<R: Read>(mut reader: R) -> io::Result<Vec<f64>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let chunks = raw.chunks_exact(WAVEFORM_SAMPLE_SIZE);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        warn!(
            "Waveform data is not a multiple of {} bytes; dropping {} trailing byte(s)",
            WAVEFORM_SAMPLE_SIZE, trailing
        );
    }
    Ok(chunks
        .map(|chunk| {
            let mut bytes = [0u8; WAVEFORM_SAMPLE_SIZE];
            bytes.copy_from_slice(chunk);
            f64::from_ne_bytes(bytes)
        })
        .collect())
}
