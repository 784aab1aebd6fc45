// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! QPSK modulation, channel, demodulation and telemetry reconstruction.
//!
//! Every stage is a pure, synchronous transform over owned or borrowed
//! buffers; nothing is retained between calls.

pub mod carrier;
pub mod channel;
pub mod demodulator;
pub mod error;
pub mod modulator;
pub mod padding;
pub mod pipeline;
pub mod telemetry;

pub use carrier::ReferenceCarrier;
pub use channel::AwgnChannel;
pub use demodulator::Demodulator;
pub use error::ModemError;
pub use modulator::Modulator;
pub use padding::{pad_to_even, strip_padding};
pub use pipeline::Pipeline;
pub use telemetry::{decode_telemetry, quantize_readings};
