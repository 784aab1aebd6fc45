// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod error;
pub mod params;
pub mod symbol;
pub mod telemetry;
pub mod wire;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use error::{ParamError, WireError};
pub use params::{NoiseParameters, SymbolParameters, MAX_SAMPLES_PER_SYMBOL};
pub use symbol::{Bit, BitPair, DecisionRule, DecisionTable, Quadrant, PHASE_TABLE};
pub use telemetry::{TelemetryFrame, TelemetryValue};
