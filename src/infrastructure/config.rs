use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// One day; longer intervals would never refresh in practice.
pub const MAX_INTERVAL_SECS: u64 = 86_400;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("sampling.capacity must be at least 1")]
    ZeroCapacity,
    #[error("sampling.interval_secs must be at least 1")]
    ZeroInterval,
    #[error("sampling.interval_secs must be at most {max}, got {got}")]
    IntervalTooLong { got: u64, max: u64 },
    #[error("sampling range for {region} must have finite bounds: min {min}, max {max}")]
    NonFiniteRange { region: &'static str, min: f64, max: f64 },
    #[error("sampling range for {region} is invalid: min {min} > max {max}")]
    InvalidRange { region: &'static str, min: f64, max: f64 },
    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub sampling: SamplingSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SamplingSettings {
    pub capacity: usize,
    pub interval_secs: u64,
    pub antarctic: RangeSettings,
    pub arctic: RangeSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RangeSettings {
    pub min: f64,
    pub max: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                bind: "0.0.0.0:8080".to_string(),
            },
            sampling: SamplingSettings {
                capacity: 5,
                interval_secs: 3,
                antarctic: RangeSettings { min: -18.0, max: -16.0 },
                arctic: RangeSettings { min: -20.0, max: -15.0 },
            },
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr()?;
        let sampling = &self.sampling;
        if sampling.capacity == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        if sampling.interval_secs == 0 {
            return Err(SettingsError::ZeroInterval);
        }
        if sampling.interval_secs > MAX_INTERVAL_SECS {
            return Err(SettingsError::IntervalTooLong {
                got: sampling.interval_secs,
                max: MAX_INTERVAL_SECS,
            });
        }
        for (region, range) in [("antarctic", sampling.antarctic), ("arctic", sampling.arctic)] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(SettingsError::NonFiniteRange {
                    region,
                    min: range.min,
                    max: range.max,
                });
            }
            if range.min > range.max {
                return Err(SettingsError::InvalidRange {
                    region,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.server
            .bind
            .parse()
            .map_err(|_| SettingsError::InvalidBind(self.server.bind.clone()))
    }
}

impl SamplingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Defaults, then `config/dashboard.toml` if present, then `POLAR__*` env vars.
pub fn load_settings() -> anyhow::Result<Settings> {
    let builder = base_builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("POLAR")
                .separator("__")
                .try_parsing(true),
        );
    finish(builder)
}

fn base_builder() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder().add_source(Config::try_from(&Settings::default())?))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Settings> {
    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
