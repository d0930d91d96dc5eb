//! Command line and environment configuration.

use crate::domain::{apartment, GeneratorConfig};
use clap::Parser;
use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;
use url::Url;

/// Longest mock availability horizon we are willing to generate.
pub const MAX_HORIZON_MONTHS: u32 = 24;

/// Showcase site for the CozyStay apartments.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host name or IP address to bind the server to.
    #[arg(long, env = "COZYSTAY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the server to.
    #[arg(long, env = "COZYSTAY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum number of worker threads.
    #[arg(long, env = "COZYSTAY_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Months after the current one covered by the mock availability data.
    #[arg(long, env = "COZYSTAY_HORIZON_MONTHS", default_value_t = 2)]
    pub horizon_months: u32,

    /// External page every booking button links to.
    #[arg(long, env = "COZYSTAY_BOOKING_URL", default_value = "https://airbnb.com")]
    pub booking_url: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "COZYSTAY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("horizon of {0} months exceeds the maximum of {max}", max = MAX_HORIZON_MONTHS)]
    HorizonTooLong(u32),
    #[error("at least one worker is required")]
    NoWorkers,
    #[error("booking url must be an absolute http(s) url: {0}")]
    InvalidBookingUrl(String),
    #[error("the apartment catalog is empty")]
    NoUnits,
}

/// Validated settings the server runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub workers: usize,
    pub generator: GeneratorConfig,
    pub booking_url: String,
}

impl Config {
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidHost(self.host.clone()))?;

        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(ConfigError::HorizonTooLong(self.horizon_months));
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        let booking_url = Url::parse(&self.booking_url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidBookingUrl(self.booking_url.clone()))?;

        let unit_count = apartment::unit_count();
        if unit_count == 0 {
            return Err(ConfigError::NoUnits);
        }

        Ok(Settings {
            addr,
            workers: self.workers,
            generator: GeneratorConfig {
                horizon_months: self.horizon_months,
                unit_count,
            },
            booking_url: booking_url.to_string(),
        })
    }
}
