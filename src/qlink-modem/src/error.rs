// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModemError {
    #[error("bit stream has odd length {0}; pad it before modulation")]
    OddBitCount(usize),

    #[error("value {value} at bit index {index} is not a bit")]
    InvalidBit { index: usize, value: u8 },
}
