use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::engine::DEFAULT_BIAS_FACTOR;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Tunables for the simulation engine. `bias_factor` is the default applied
/// when a request does not carry its own; it lives in configuration rather
/// than in a module-level constant so reproducing a result only requires the
/// request body plus the config it ran under.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_bias_factor")]
    pub bias_factor: f64,
}

fn default_bias_factor() -> f64 {
    DEFAULT_BIAS_FACTOR
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { bias_factor: DEFAULT_BIAS_FACTOR }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("ROI__").split("__"));
        Ok(figment.extract()?)
    }
}
