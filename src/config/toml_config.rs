use crate::config::settings::ServiceSettings;
use crate::utils::error::{ReactomeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of an optional `reactome.toml`.
///
/// ```toml
/// [service]
/// url = "${REACTOME_URL}"
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: Option<ServiceSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub page_size: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReactomeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReactomeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_RE: OnceLock<Regex> = OnceLock::new();
        let re = ENV_RE
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env pattern is a valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Overlay the values present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut ServiceSettings) {
        let Some(service) = &self.service else {
            return;
        };

        if let Some(url) = &service.url {
            settings.reactome_url = url.clone();
        }
        if let Some(timeout) = service.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(user_agent) = &service.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(page_size) = service.page_size {
            settings.page_size = page_size;
        }
    }
}
