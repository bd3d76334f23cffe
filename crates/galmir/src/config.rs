use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use galmir_fetch::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "galmir.toml";
pub const ENV_PREFIX: &str = "GALMIR_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),
    #[error("missing required setting `{0}`")]
    MissingKey(&'static str),
    #[error(transparent)]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url:            String,
    pub api_key:             String,
    pub session_cookie:      String,
    pub node_id:             String,
    pub output:              PathBuf,
    pub user_agent:          String,
    pub cookie_name:         String,
    pub retries:             u32,
    pub retry_delay_ms:      u64,
    /// 0 retries a page forever.
    pub page_attempts:       u32,
    pub page_retry_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs:        Option<u64>,
    pub no_progress:         bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url:            String::new(),
            api_key:             String::new(),
            session_cookie:      String::new(),
            node_id:             String::new(),
            output:              PathBuf::from("."),
            user_agent:          DEFAULT_USER_AGENT.to_string(),
            cookie_name:         "SMSESS".to_string(),
            retries:             3,
            retry_delay_ms:      500,
            page_attempts:       10,
            page_retry_delay_ms: 1000,
            timeout_secs:        None,
            no_progress:         false,
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file, then `GALMIR_*` variables, then flags.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) if !path.is_file() => return Err(ConfigError::MissingFile(path.clone())),
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Self::figment(&file)
            .merge(Serialized::defaults(cli))
            .extract::<Settings>()?
            .validated()
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let required = [
            ("base_url", &self.base_url),
            ("api_key", &self.api_key),
            ("session_cookie", &self.session_cookie),
            ("node_id", &self.node_id),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::MissingKey(*key));
        }
        Ok(self)
    }

    pub fn retry_delay(&self) -> Duration { Duration::from_millis(self.retry_delay_ms) }

    pub fn page_retry_delay(&self) -> Duration { Duration::from_millis(self.page_retry_delay_ms) }

    pub fn page_attempts(&self) -> Option<u32> { (self.page_attempts > 0).then_some(self.page_attempts) }

    pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }
}
