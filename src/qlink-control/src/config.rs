// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for qlink-control.
//!
//! Loaded from the `[qlink-control]` section of `qlink.toml`, using the
//! same search order as qlink-server.

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use qlink_app::{validate_log_level, ConfigError, ConfigFile};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub general: GeneralConfig,
    pub listen: ListenConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// Where the link daemon delivers telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub listen: IpAddr,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            listen: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 65434,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block per frame
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl ControlConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level(self.general.log_level.as_deref())?;
        if self.listen.port == 0 {
            return Err("[listen].port must be > 0".to_string());
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        <Self as ConfigFile>::load_from_file(path)
    }

    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load_from_default_paths()
    }

    pub fn example_combined_toml() -> String {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(rename = "qlink-control")]
            inner: ControlConfig,
        }
        let example = ControlConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            ..ControlConfig::default()
        };
        toml::to_string_pretty(&Wrapper { inner: example }).unwrap_or_default()
    }
}

impl ConfigFile for ControlConfig {
    fn section_key() -> &'static str {
        "qlink-control"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert_eq!(config.listen.listen, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.listen.port, 65434);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[listen]
port = 9000

[output]
format = "json"
"#;
        let config: ControlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.listen.port, 9000);
        assert_eq!(config.listen.listen, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = "[output]\nformat = \"xml\"\n";
        assert!(toml::from_str::<ControlConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = ControlConfig::default();
        config.listen.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_loads_back() {
        let example = ControlConfig::example_combined_toml();
        let config = <ControlConfig as ConfigFile>::load_from_str(&example).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert!(config.validate().is_ok());
    }
}
