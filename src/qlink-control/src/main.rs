// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;
mod receiver;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio::signal;
use tracing::info;

use qlink_app::init_logging;
use qlink_core::DynResult;

use config::{ControlConfig, OutputFormat};

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - telemetry command and control");

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION,
)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// IP address for the telemetry listener
    #[arg(short = 'l', long = "listen")]
    listen: Option<IpAddr>,
    /// Port for the telemetry listener
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    /// Output format for received frames
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<FormatKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatKind {
    Text,
    Json,
}

fn apply_cli_overrides(cli: &Cli, cfg: &mut ControlConfig) {
    if let Some(listen) = cli.listen {
        cfg.listen.listen = listen;
    }
    if let Some(port) = cli.port {
        cfg.listen.port = port;
    }
    if let Some(format) = cli.format {
        cfg.output.format = match format {
            FormatKind::Text => OutputFormat::Text,
            FormatKind::Json => OutputFormat::Json,
        };
    }
}

#[tokio::main]
async fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", ControlConfig::example_combined_toml());
        return Ok(());
    }

    let (mut cfg, config_path) = if let Some(ref path) = cli.config {
        let cfg = ControlConfig::load_from_file(path)?;
        (cfg, Some(path.clone()))
    } else {
        ControlConfig::load_from_default_paths()?
    };
    apply_cli_overrides(&cli, &mut cfg);
    cfg.validate()
        .map_err(|e| format!("Invalid control configuration: {}", e))?;

    init_logging(cfg.general.log_level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }

    let addr = SocketAddr::from((cfg.listen.listen, cfg.listen.port));
    tokio::select! {
        res = receiver::run_receiver(addr, cfg.output.format) => {
            res?;
        }
        _ = signal::ctrl_c() => {
            info!("Ctrl+C received, shutting down");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_values() {
        let cli = Cli::parse_from(["qlink-control", "-p", "9100", "--format", "json"]);
        let mut cfg = ControlConfig::default();
        apply_cli_overrides(&cli, &mut cfg);
        assert_eq!(cfg.listen.port, 9100);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }
}
