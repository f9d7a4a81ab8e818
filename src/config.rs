use crate::error::{Result, SiteError};
use portfolio_common::contact::ENDPOINT_ENV;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://ayofemimelehon.info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Form-processing endpoint contact messages are posted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_endpoint: Option<String>,
    /// Public origin used for sitemap URLs
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SiteError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("portfolio-site").join("config.json"))
    }

    /// Endpoint to post to, environment first. `None` when neither is set.
    pub fn endpoint(&self) -> Result<Option<String>> {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                let url = url.trim().to_string();
                validate_http_url(&url)
                    .map_err(|e| SiteError::Config(format!("{}: {}", ENDPOINT_ENV, e)))?;
                Ok(Some(url))
            }
            _ => Ok(self.contact_endpoint.clone()),
        }
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        validate_http_url(&url)?;
        self.contact_endpoint = Some(url);
        Ok(())
    }

    /// Reject settings a hand-edited file could carry
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.contact_endpoint {
            validate_http_url(url)?;
        }
        validate_http_url(&self.base_url)?;
        if self.timeout_seconds == 0 {
            return Err(SiteError::Config("timeout_seconds must be at least 1".into()));
        }
        Ok(())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        validate_http_url(&url)?;
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }
}

/// Accept only absolute http(s) URLs
pub fn validate_http_url(url: &str) -> Result<()> {
    let url = url.trim();
    match url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(SiteError::Config(format!("not an http(s) URL: {}", url))),
    }
}
