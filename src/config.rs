use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Default Naver Search Ad API host (keyword tool).
pub const DEFAULT_AD_BASE_URL: &str = "https://api.naver.com";

/// Default Naver blog search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://openapi.naver.com/v1/search/blog.json";

/// Default real-time trend page.
pub const DEFAULT_TREND_SOURCE_URL: &str = "https://signal.bz/news";

/// Courtesy delay between API calls.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

/// Central configuration loaded from environment variables.
///
/// Every value has a default so the tool runs with nothing but credentials.
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search Ad API base URL (keyword volumes and related keywords)
    pub ad_base_url: String,
    /// Blog search endpoint (document counts)
    pub search_url: String,
    /// Trend page scraped by the `trends` command
    pub trend_source_url: String,
    /// Directory Markdown reports are written to
    pub reports_dir: PathBuf,
    /// Sleep between keywords and before each document-count call
    pub request_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let request_delay_ms = match env::var("OCEANSCAN_REQUEST_DELAY_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "OCEANSCAN_REQUEST_DELAY_MS must be a whole number of milliseconds, got '{raw}'"
                )
            })?,
            Err(_) => DEFAULT_REQUEST_DELAY_MS,
        };

        Ok(Self {
            ad_base_url: env::var("NAVER_AD_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AD_BASE_URL.to_string()),
            search_url: env::var("NAVER_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
            trend_source_url: env::var("TREND_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_TREND_SOURCE_URL.to_string()),
            reports_dir: env::var("OCEANSCAN_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("reports")),
            request_delay: Duration::from_millis(request_delay_ms),
        })
    }
}

/// API credentials for both Naver APIs.
///
/// Resolved once at startup and handed to the client constructors.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "NAVER_AD_API_KEY")]
    pub ad_api_key: String,
    #[serde(rename = "NAVER_AD_SECRET_KEY")]
    pub ad_secret_key: String,
    #[serde(rename = "NAVER_CUSTOMER_ID")]
    pub customer_id: String,
    #[serde(rename = "NAVER_CLIENT_ID")]
    pub client_id: String,
    #[serde(rename = "NAVER_CLIENT_SECRET")]
    pub client_secret: String,
}

// Secrets never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("ad_api_key", &"****")
            .field("ad_secret_key", &"****")
            .field("customer_id", &self.customer_id)
            .field("client_id", &"****")
            .field("client_secret", &"****")
            .finish()
    }
}

/// Names of the five credential keys, shared by env vars and secrets.json.
pub const CREDENTIAL_KEYS: [&str; 5] = [
    "NAVER_AD_API_KEY",
    "NAVER_AD_SECRET_KEY",
    "NAVER_CUSTOMER_ID",
    "NAVER_CLIENT_ID",
    "NAVER_CLIENT_SECRET",
];

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(
        "Authentication failed: no credentials found.\n\
         Tried: {tried}\n\
         Set the NAVER_* variables in your .env file or place a secrets.json next to the binary."
    )]
    NotFound { tried: String },
}

/// A place credentials can come from. Sources are tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Hosted secrets injected into the process environment
    Environment,
    /// A local secrets.json file
    File(PathBuf),
}

impl CredentialSource {
    fn describe(&self) -> String {
        match self {
            CredentialSource::Environment => "environment".to_string(),
            CredentialSource::File(path) => path.display().to_string(),
        }
    }

    /// Try to load credentials from this source. `None` means "not here".
    pub fn load(&self) -> Option<Credentials> {
        match self {
            CredentialSource::Environment => Credentials::from_lookup(|key| env::var(key).ok()),
            CredentialSource::File(path) => Credentials::from_file(path),
        }
    }
}

impl Credentials {
    /// The standard resolution order: hosted secrets, then local files.
    pub fn default_sources() -> Vec<CredentialSource> {
        let mut sources = vec![CredentialSource::Environment];
        if let Ok(path) = env::var("OCEANSCAN_SECRETS_PATH") {
            sources.push(CredentialSource::File(PathBuf::from(path)));
        }
        sources.push(CredentialSource::File(PathBuf::from("secrets.json")));
        sources.push(CredentialSource::File(PathBuf::from("../secrets.json")));
        sources
    }

    /// Resolve credentials from the first source that has all five keys.
    pub fn resolve(sources: &[CredentialSource]) -> Result<Self, CredentialError> {
        for source in sources {
            if let Some(credentials) = source.load() {
                info!(source = %source.describe(), "Loaded API credentials");
                return Ok(credentials);
            }
            debug!(source = %source.describe(), "No credentials in source");
        }

        let tried = sources
            .iter()
            .map(CredentialSource::describe)
            .collect::<Vec<_>>()
            .join(", ");
        Err(CredentialError::NotFound { tried })
    }

    /// Build credentials from a key lookup. Every key must be present and non-empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            ad_api_key: get(CREDENTIAL_KEYS[0])?,
            ad_secret_key: get(CREDENTIAL_KEYS[1])?,
            customer_id: get(CREDENTIAL_KEYS[2])?,
            client_id: get(CREDENTIAL_KEYS[3])?,
            client_secret: get(CREDENTIAL_KEYS[4])?,
        })
    }

    /// Read a secrets.json file. Missing, unreadable or incomplete files yield `None`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str::<Credentials>(&raw) {
            Ok(credentials) if credentials.is_complete() => Some(credentials),
            Ok(_) => {
                debug!(path = %path.display(), "secrets file has empty values");
                None
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "secrets file is not usable");
                None
            }
        }
    }

    fn is_complete(&self) -> bool {
        [
            &self.ad_api_key,
            &self.ad_secret_key,
            &self.customer_id,
            &self.client_id,
            &self.client_secret,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }
}
