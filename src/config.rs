use std::env;
use anyhow::{Context, Result};

use crate::credit_transfers;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let service_port = match env::var("SERVICE_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => defaults.service_port,
        };

        let service_host = env::var("SERVICE_HOST").unwrap_or(defaults.service_host);

        Ok(Config {
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Credit transfer base path: {}", credit_transfers::base_path());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
