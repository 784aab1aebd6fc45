// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use thiserror::Error;

/// Rejected link parameters. Always fatal: raised before any stage runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{name} must be a finite positive number (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    #[error(
        "sampling rate {sampling_rate} Hz x symbol duration {symbol_duration} s \
         yields less than one sample per symbol"
    )]
    NoSamplesPerSymbol {
        sampling_rate: f64,
        symbol_duration: f64,
    },

    #[error(
        "sampling rate {sampling_rate} Hz x symbol duration {symbol_duration} s \
         exceeds {max} samples per symbol"
    )]
    TooManySamplesPerSymbol {
        sampling_rate: f64,
        symbol_duration: f64,
        max: usize,
    },

    #[error("noise mean must be finite (got {0})")]
    NonFiniteMean(f64),

    #[error("noise standard deviation must be finite and >= 0 (got {0})")]
    InvalidStdDev(f64),
}

/// Malformed bytes at the inbound boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("byte 0x{byte:02x} at offset {offset} is not an ASCII '0' or '1'")]
    InvalidBitByte { offset: usize, byte: u8 },
}
