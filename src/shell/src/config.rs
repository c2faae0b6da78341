use anyhow::{Context, Result, ensure};
use std::env;
use url::Url;

pub const API_URL_VAR: &str = "STUDENTS_UI_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Shell configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Backend API configuration
    pub api: ApiConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix the `/api/...` endpoints hang off
    pub base_url: Url,
}

impl AppConfig {
    /// Load all configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api = ApiConfig::load(&lookup)?;

        Ok(Self { api })
    }
}

impl ApiConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(raw.trim())
            .with_context(|| format!("failed to parse {API_URL_VAR}: invalid URL {raw:?}"))?;

        ensure!(
            matches!(base_url.scheme(), "http" | "https"),
            "failed to parse {API_URL_VAR}: unsupported scheme {:?}",
            base_url.scheme()
        );

        Ok(Self { base_url })
    }

    /// Base URL without trailing slash, ready to take an absolute path
    pub fn prefix(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
