// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Telemetry receiver: 20-byte frames of five native-endian f32 values.

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;
use tracing::{info, warn};

use qlink_core::TelemetryFrame;

use crate::config::OutputFormat;

/// Read frames until EOF, handing each to `on_frame`. Returns the number of
/// complete frames; a trailing partial frame is discarded.
pub async fn read_frames<R, F>(mut reader: R, mut on_frame: F) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
    F: FnMut(TelemetryFrame),
{
    let mut buf = [0u8; TelemetryFrame::WIRE_SIZE];
    let mut filled = 0;
    let mut frames = 0;
    loop {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            if filled != 0 {
                warn!("Discarding partial telemetry frame ({} byte(s))", filled);
            }
            return Ok(frames);
        }
        filled += n;
        if filled == buf.len() {
            on_frame(TelemetryFrame::from_bytes(&buf));
            frames += 1;
            filled = 0;
        }
    }
}

pub fn format_frame(frame: &TelemetryFrame, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Received telemetry data:\n  Speed: {:.2} m/s\n  Direction: {:.2} degrees\n  \
             Latitude: {:.2}\n  Longitude: {:.2}\n  Altitude: {:.2} meters",
            frame.speed, frame.direction, frame.latitude, frame.longitude, frame.altitude
        ),
        OutputFormat::Json => serde_json::to_string(frame).unwrap_or_default(),
    }
}

/// Bind `addr`, accept one link daemon and print every frame to stdout.
pub async fn run_receiver(addr: SocketAddr, format: OutputFormat) -> io::Result<usize> {
    let listener = TcpListener::bind(addr).await?;
    info!("Command and control listening on {}", addr);

    let (socket, peer) = listener.accept().await?;
    info!("Telemetry source connected: {}", peer);

    let frames = read_frames(socket, |frame| println!("{}", format_frame(&frame, format))).await?;
    info!("Telemetry source {} closed after {} frame(s)", peer, frames);
    Ok(frames)
}
