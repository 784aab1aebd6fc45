// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::io;

use thiserror::Error;

use qlink_core::WireError;

/// Failure to obtain a bit stream from the inbound source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("bit source I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed bit stream: {0}")]
    Wire(#[from] WireError),
}
