// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;
mod error;
mod link;
mod sink;
mod source;
mod waveform_store;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio::signal;
use tracing::{info, warn};

use qlink_app::init_logging;
use qlink_core::{DecisionRule, DynResult};
use qlink_modem::Pipeline;

use config::ServerConfig;
use waveform_store::WaveformStore;

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - QPSK telemetry link daemon");

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
    /// IP address for the bit source listener
    #[arg(short = 'l', long = "listen")]
    listen: Option<IpAddr>,
    /// Port for the bit source listener
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    /// Telemetry sink host
    #[arg(long = "sink-host")]
    sink_host: Option<String>,
    /// Telemetry sink port
    #[arg(long = "sink-port")]
    sink_port: Option<u16>,
    /// Enable the Gaussian noise channel
    #[arg(short = 'n', long = "noise", conflicts_with = "no_noise")]
    noise: bool,
    /// Disable the Gaussian noise channel
    #[arg(long = "no-noise")]
    no_noise: bool,
    /// Noise standard deviation
    #[arg(long = "std-dev")]
    std_dev: Option<f64>,
    /// Seed for the noise generator
    #[arg(long = "seed")]
    seed: Option<u64>,
    /// Persist intermediate waveforms to disk
    #[arg(long = "persist-waveforms")]
    persist_waveforms: bool,
    /// Quadrant to bit-pair decision rule
    #[arg(long = "decision-rule", value_enum)]
    decision_rule: Option<RuleKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleKind {
    Inverse,
    Legacy,
}

impl From<RuleKind> for DecisionRule {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Inverse => DecisionRule::Inverse,
            RuleKind::Legacy => DecisionRule::Legacy,
        }
    }
}

/// CLI flags win over the config file.
fn apply_cli_overrides(cli: &Cli, cfg: &mut ServerConfig) {
    if let Some(listen) = cli.listen {
        cfg.listen.listen = listen;
    }
    if let Some(port) = cli.port {
        cfg.listen.port = port;
    }
    if let Some(ref host) = cli.sink_host {
        cfg.telemetry.host = host.clone();
    }
    if let Some(port) = cli.sink_port {
        cfg.telemetry.port = port;
    }
    if cli.noise {
        cfg.noise.enabled = true;
    }
    if cli.no_noise {
        cfg.noise.enabled = false;
    }
    if let Some(std_dev) = cli.std_dev {
        cfg.noise.std_dev = std_dev;
    }
    if let Some(seed) = cli.seed {
        cfg.noise.seed = Some(seed);
    }
    if cli.persist_waveforms {
        cfg.waveform.persist = true;
    }
    if let Some(rule) = cli.decision_rule {
        cfg.modem.decision_rule = rule.into();
    }
}

#[tokio::main]
async fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", ServerConfig::example_combined_toml());
        return Ok(());
    }

    let (mut cfg, config_path) = if let Some(ref path) = cli.config {
        let cfg = ServerConfig::load_from_file(path)?;
        (cfg, Some(path.clone()))
    } else {
        ServerConfig::load_from_default_paths()?
    };
    apply_cli_overrides(&cli, &mut cfg);
    cfg.validate()
        .map_err(|e| format!("Invalid server configuration: {}", e))?;

    init_logging(cfg.general.log_level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }

    let params = cfg.modem.symbol_parameters()?;
    if !params.below_nyquist() {
        warn!(
            "Carrier {} Hz is at or above Nyquist for {} Hz sampling; demodulation may be unreliable",
            params.carrier_frequency(),
            params.sampling_rate()
        );
    }
    let noise = cfg.noise.parameters()?;
    let pipeline = Pipeline::new(params, cfg.modem.decision_rule, noise);

    info!(
        "Starting qlink-server (carrier: {} Hz, sampling: {} Hz, symbol: {} s / {} samples, noise: {})",
        params.carrier_frequency(),
        params.sampling_rate(),
        params.symbol_duration(),
        params.samples_per_symbol(),
        match noise {
            Some(n) => format!("mean {} std_dev {}", n.mean(), n.std_dev()),
            None => "off".to_string(),
        }
    );

    let listen_addr = SocketAddr::from((cfg.listen.listen, cfg.listen.port));
    let bits = tokio::select! {
        res = source::receive_bitstream(listen_addr) => res?,
        _ = signal::ctrl_c() => {
            info!("Ctrl+C received, shutting down");
            return Ok(());
        }
    };
    if bits.is_empty() {
        return Err("Bit source closed without sending any bits".into());
    }

    let store = cfg
        .waveform
        .persist
        .then(|| WaveformStore::from_config(&cfg.waveform));
    let mut rng = cfg.noise.rng();
    let telemetry = link::run_link(&pipeline, bits, &mut rng, store.as_ref())?;

    sink::send_telemetry(&cfg.telemetry.host, cfg.telemetry.port, &telemetry).await?;
    info!("Link run complete");
    Ok(())
}
