use anyhow::{Context, Result};
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::energy_network::NetworkInputs;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Starting values for every input; request fields override these
    #[serde(default)]
    pub scenario: NetworkInputs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,hyper=warn,tower_http=info".to_string(),
            json: true,
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: default_request_timeout_secs(),
                enable_cors: false,
            },
            log: LogConfig::default(),
            scenario: NetworkInputs::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("PEN__").split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.scenario
            .validate()
            .context("invalid [scenario] defaults")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_from_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [log]
                filter = "debug"

                [scenario.cell]
                voltage_v = 0.5

                [scenario.storage]
                battery_capacity_mAh = 500.0
                "#,
            )?;
            jail.set_env("PEN__SERVER__PORT", 9000);
            jail.set_env("PEN__SCENARIO__TOPOLOGY__SERIES_COUNT", 4);

            let cfg = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.port, 9000);
            assert_eq!(cfg.server.request_timeout_secs, 10);
            assert_eq!(cfg.scenario.cell.voltage_v, 0.5);
            assert_eq!(cfg.scenario.cell.current_ma, 0.6);
            assert_eq!(cfg.scenario.storage.battery_capacity_mah, 500.0);
            assert_eq!(cfg.scenario.topology.series_count, 4);
            assert_eq!(cfg.scenario.topology.parallel_count, 2);
            assert!(cfg.log.json);
            assert_eq!(cfg.log.filter, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_scenario_rejected() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [scenario.harvest]
                harvest_efficiency_pct = 140.0
                "#,
            )?;

            assert!(Config::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::default();
        assert_eq!(cfg.server.socket_addr().unwrap().port(), 8080);
    }
}
