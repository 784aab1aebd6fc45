// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for qlink-server.
//!
//! Config is loaded from the `[qlink-server]` section of `qlink.toml`.
//! Default search order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./qlink.toml`
//! 3. `~/.config/qlink/qlink.toml`
//! 4. `/etc/qlink/qlink.toml`

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use qlink_app::{validate_log_level, ConfigError, ConfigFile};
use qlink_core::{DecisionRule, NoiseParameters, ParamError, SymbolParameters};
use qlink_modem::ReferenceCarrier;

/// Top-level server configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Inbound bit source listener
    pub listen: ListenConfig,
    /// Outbound telemetry sink
    pub telemetry: TelemetrySinkConfig,
    /// Carrier, timing and decision rule
    pub modem: ModemConfig,
    /// Optional Gaussian channel
    pub noise: NoiseConfig,
    /// Optional on-disk round-trip of intermediate waveforms
    pub waveform: WaveformConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// Where the single bit source connects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// IP address to listen on
    pub listen: IpAddr,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            listen: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 65433,
        }
    }
}

/// Where decoded telemetry is streamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySinkConfig {
    pub host: String,
    pub port: u16,
}

impl Default for TelemetrySinkConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 65434,
        }
    }
}

/// Modulation parameters. Both ends of the link use the same values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModemConfig {
    pub carrier_frequency_hz: f64,
    pub sampling_rate_hz: f64,
    pub symbol_duration_s: f64,
    /// "inverse" (default) or "legacy"
    pub decision_rule: DecisionRule,
}

impl Default for ModemConfig {
    fn default() -> Self {
        Self {
            carrier_frequency_hz: 10.0,
            sampling_rate_hz: 100.0,
            symbol_duration_s: 0.1,
            decision_rule: DecisionRule::Inverse,
        }
    }
}

impl ModemConfig {
    pub fn symbol_parameters(&self) -> Result<SymbolParameters, ParamError> {
        SymbolParameters::new(
            self.carrier_frequency_hz,
            self.sampling_rate_hz,
            self.symbol_duration_s,
        )
    }
}

/// Additive Gaussian noise channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub enabled: bool,
    pub mean: f64,
    pub std_dev: f64,
    /// Fixed RNG seed; unset draws one from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mean: 0.0,
            std_dev: 0.1,
            seed: None,
        }
    }
}

impl NoiseConfig {
    /// `Ok(None)` when the channel is disabled.
    pub fn parameters(&self) -> Result<Option<NoiseParameters>, ParamError> {
        if !self.enabled {
            return Ok(None);
        }
        NoiseParameters::new(self.mean, self.std_dev).map(Some)
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Intermediate waveform persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Write each intermediate buffer to disk and read it back before the
    /// next stage.
    pub persist: bool,
    pub dir: PathBuf,
    pub modulated_file: String,
    pub noisy_file: String,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            persist: false,
            dir: PathBuf::from("."),
            modulated_file: "modulated_signal.bin".to_string(),
            noisy_file: "noisy_signal.bin".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level(self.general.log_level.as_deref())?;

        if self.listen.port == 0 {
            return Err("[listen].port must be > 0".to_string());
        }
        if self.telemetry.host.trim().is_empty() {
            return Err("[telemetry].host must not be empty".to_string());
        }
        if self.telemetry.port == 0 {
            return Err("[telemetry].port must be > 0".to_string());
        }

        let params = self
            .modem
            .symbol_parameters()
            .map_err(|e| format!("[modem] {}", e))?;
        if !ReferenceCarrier::new(&params).separates_quadrants() {
            return Err(format!(
                "[modem] {} sample(s) per symbol at a {} Hz carrier cannot separate \
                 the four QPSK phases; lengthen symbol_duration_s or raise sampling_rate_hz",
                params.samples_per_symbol(),
                params.carrier_frequency()
            ));
        }
        self.noise
            .parameters()
            .map_err(|e| format!("[noise] {}", e))?;

        if self.waveform.persist
            && (self.waveform.modulated_file.trim().is_empty()
                || self.waveform.noisy_file.trim().is_empty())
        {
            return Err(
                "[waveform] file names must not be empty when persist is enabled".to_string(),
            );
        }

        Ok(())
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        <Self as ConfigFile>::load_from_file(path)
    }

    /// Load configuration from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load_from_default_paths()
    }

    /// Example configuration wrapped under the `[qlink-server]` header,
    /// suitable for a combined `qlink.toml`.
    pub fn example_combined_toml() -> String {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(rename = "qlink-server")]
            inner: ServerConfig,
        }
        let example = ServerConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            noise: NoiseConfig {
                seed: Some(42),
                ..NoiseConfig::default()
            },
            ..ServerConfig::default()
        };
        toml::to_string_pretty(&Wrapper { inner: example }).unwrap_or_default()
    }
}

impl ConfigFile for ServerConfig {
    fn section_key() -> &'static str {
        "qlink-server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen.port, 65433);
        assert_eq!(config.telemetry.host, "127.0.0.1");
        assert_eq!(config.telemetry.port, 65434);
        assert_eq!(config.modem.carrier_frequency_hz, 10.0);
        assert_eq!(config.modem.sampling_rate_hz, 100.0);
        assert_eq!(config.modem.symbol_duration_s, 0.1);
        assert_eq!(config.modem.decision_rule, DecisionRule::Inverse);
        assert!(!config.noise.enabled);
        assert!(!config.waveform.persist);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.modem.symbol_parameters().unwrap().samples_per_symbol(),
            10
        );
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[general]
log_level = "debug"

[listen]
listen = "0.0.0.0"
port = 7000

[telemetry]
host = "10.0.0.2"
port = 7001

[modem]
carrier_frequency_hz = 1000.0
sampling_rate_hz = 8000.0
symbol_duration_s = 0.001
decision_rule = "legacy"

[noise]
enabled = true
mean = 0.0
std_dev = 0.05
seed = 7

[waveform]
persist = true
dir = "/tmp/qlink"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.listen.listen, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.listen.port, 7000);
        assert_eq!(config.telemetry.host, "10.0.0.2");
        assert_eq!(config.modem.decision_rule, DecisionRule::Legacy);
        assert_eq!(
            config.modem.symbol_parameters().unwrap().samples_per_symbol(),
            8
        );
        assert_eq!(config.noise.seed, Some(7));
        assert!(config.noise.parameters().unwrap().is_some());
        assert_eq!(config.waveform.dir, PathBuf::from("/tmp/qlink"));
        assert_eq!(config.waveform.modulated_file, "modulated_signal.bin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_modem_parameters() {
        let mut config = ServerConfig::default();
        config.modem.sampling_rate_hz = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("[modem]"), "got: {}", err);

        let mut config = ServerConfig::default();
        config.modem.symbol_duration_s = 0.001;
        let err = config.validate().unwrap_err();
        assert!(err.contains("less than one sample"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_windows_that_mix_quadrants() {
        let mut config = ServerConfig::default();
        config.modem.symbol_duration_s = 0.025;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("[modem] 2 sample(s) per symbol"), "got: {}", err);

        config.modem.carrier_frequency_hz = 20.0;
        assert!(config.validate().is_ok());

        let mut config = ServerConfig::default();
        config.modem.sampling_rate_hz = 1e12;
        let err = config.validate().unwrap_err();
        assert!(err.contains("exceeds"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_negative_std_dev_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.noise.std_dev = -1.0;
        assert!(config.validate().is_ok());
        config.noise.enabled = true;
        assert!(config.validate().unwrap_err().starts_with("[noise]"));
    }

    #[test]
    fn test_validate_rejects_bad_ports_and_names() {
        let mut config = ServerConfig::default();
        config.listen.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.telemetry.host = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.waveform.persist = true;
        config.waveform.noisy_file = String::new();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.general.log_level = Some("chatty".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let noise = NoiseConfig {
            seed: Some(9),
            ..NoiseConfig::default()
        };
        let a: u64 = noise.rng().gen();
        let b: u64 = noise.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_example_config_loads_back() {
        let example = ServerConfig::example_combined_toml();
        assert!(example.contains("[qlink-server.modem]"));
        let config = <ServerConfig as ConfigFile>::load_from_str(&example).unwrap();
        assert_eq!(config.noise.seed, Some(42));
        assert!(config.validate().is_ok());
    }
}
