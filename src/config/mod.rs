use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://area51.serverzone.dev/robot/";
pub const DEFAULT_EMAIL: &str = "escape-bot@example.com";
pub const DEFAULT_RETRY_MAX: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "robot-escape")]
#[command(about = "Measure a hall with a remote robot and escape from its center")]
pub struct CliConfig {
    /// Base URL of the robot API.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Contact email sent with the robot creation call.
    #[arg(long, default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Attempts per API call before giving up.
    #[arg(long, default_value_t = DEFAULT_RETRY_MAX)]
    pub retry_max: u32,

    /// Skip TLS certificate verification (self-signed test endpoints only).
    #[arg(long)]
    pub insecure: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report elapsed time and peak memory after the run")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn retry_max(&self) -> u32 {
        self.retry_max
    }

    fn insecure(&self) -> bool {
        self.insecure
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_email("email", &self.email)?;
        validation::validate_positive_number("retry_max", self.retry_max, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            retry_max: DEFAULT_RETRY_MAX,
            insecure: false,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let mut config = default_config();
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_retries() {
        let mut config = default_config();
        config.retry_max = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_email() {
        let mut config = default_config();
        config.email = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
