// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Inbound bit source.
//!
//! A single client connects, writes ASCII `'0'`/`'1'` bytes and closes its
//! side; the whole stream is the bit sequence to transmit.

use std::net::SocketAddr;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;
use tracing::{debug, info};

use qlink_core::wire::parse_ascii_bits;
use qlink_core::Bit;

use crate::error::SourceError;

/// Read `reader` to EOF and parse it as ASCII bits.
pub async fn read_bitstream<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<Bit>, SourceError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).await?;
    debug!("Bit source sent {} byte(s)", raw.len());
    Ok(parse_ascii_bits(&raw)?)
}

/// Accept exactly one connection on `listener` and read its bit stream.
pub async fn accept_bitstream(listener: &TcpListener) -> Result<Vec<Bit>, SourceError> {
    let (socket, peer) = listener.accept().await?;
    info!("Bit source connected: {}", peer);
    let bits = read_bitstream(socket).await?;
    info!("Bit source {} closed after {} bit(s)", peer, bits.len());
    Ok(bits)
}

/// Bind `addr` and receive one bit stream.
pub async fn receive_bitstream(addr: SocketAddr) -> Result<Vec<Bit>, SourceError> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening for bit source on {}", addr);
    accept_bitstream(&listener).await
}
