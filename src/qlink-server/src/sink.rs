// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Outbound telemetry sink: native-endian f32 values over TCP.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{error, info};

use qlink_core::wire::encode_telemetry;
use qlink_core::TelemetryValue;

pub async fn write_telemetry<W: AsyncWrite + Unpin>(
    writer: &mut W,
    values: &[TelemetryValue],
) -> std::io::Result<()> {
    writer.write_all(&encode_telemetry(values)).await?;
    writer.flush().await
}

/// Connect to `host:port`, write every value, then close the connection.
pub async fn send_telemetry(
    host: &str,
    port: u16,
    values: &[TelemetryValue],
) -> std::io::Result<()> {
    let mut stream = TcpStream::connect((host, port)).await.map_err(|e| {
        error!("Telemetry sink {}:{} unreachable: {}", host, port, e);
        e
    })?;
    write_telemetry(&mut stream, values).await?;
    stream.shutdown().await?;
    info!(
        "Sent {} telemetry value(s) to {}:{}",
        values.len(),
        host,
        port
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlink_core::wire::decode_telemetry;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn writes_native_endian_floats() {
        let mut out = Vec::new();
        write_telemetry(&mut out, &[0.5, 25.5]).await.unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(&out[..4], &0.5f32.to_ne_bytes());
        assert_eq!(&out[4..], &25.5f32.to_ne_bytes());
    }

    #[tokio::test]
    async fn empty_sequence_writes_nothing() {
        let mut out = Vec::new();
        write_telemetry(&mut out, &[]).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires TCP bind permissions"]
    async fn delivers_values_and_closes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let reader = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            socket.read_to_end(&mut raw).await.unwrap();
            raw
        });
        send_telemetry("127.0.0.1", port, &[1.7, 0.0, 12.8])
            .await
            .unwrap();
        let raw = reader.await.unwrap();
        assert_eq!(decode_telemetry(&raw), vec![1.7, 0.0, 12.8]);
    }

    #[tokio::test]
    #[ignore = "requires TCP bind permissions"]
    async fn unreachable_sink_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        assert!(send_telemetry("127.0.0.1", port, &[1.0]).await.is_err());
    }
}
