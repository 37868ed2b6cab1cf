use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REACTOME_URL: &str = "https://reactome.org";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const CLI_USER_AGENT: &str = "Mozilla/5.0 (compatible; Reactome CLI/1.0)";

/// Service settings after defaults, config file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub reactome_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub page_size: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            reactome_url: DEFAULT_REACTOME_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: CLI_USER_AGENT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServiceSettings {
    /// Defaults, overlaid with the config file when one is given.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_file {
            tracing::info!("Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        Ok(settings)
    }

    pub fn with_reactome_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.reactome_url = url;
        }
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: Option<u64>) -> Self {
        if let Some(timeout_seconds) = timeout_seconds {
            self.timeout_seconds = timeout_seconds;
        }
        self
    }

    /// Server URL without trailing slashes, ready for path concatenation.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.reactome_url.trim_end_matches('/').len();
        self.reactome_url.truncate(trimmed);
        self
    }
}

impl ConfigProvider for ServiceSettings {
    fn reactome_url(&self) -> &str {
        &self.reactome_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Validate for ServiceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("reactome_url", &self.reactome_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("page_size", u64::from(self.page_size), 1)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
