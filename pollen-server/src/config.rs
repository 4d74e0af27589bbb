//! Server configuration from the environment.

use std::path::PathBuf;

use tracing::warn;

use crate::provider::{DEFAULT_TIMEOUT_SECS, DwdConfig, HexalConfig};

/// Listening port.
pub const ENV_PORT: &str = "POLLEN_PORT";
/// Directory served for static assets.
pub const ENV_ASSETS: &str = "POLLEN_ASSETS_DIR";
/// If set, serve canned payloads from this directory instead of the
/// live providers.
pub const ENV_MOCK_DIR: &str = "POLLEN_MOCK_DIR";
/// Override for the DWD forecast URL, e.g. a local mirror.
pub const ENV_DWD_URL: &str = "POLLEN_DWD_URL";
/// Override for the Hexal postal-code endpoint.
pub const ENV_HEXAL_URL: &str = "POLLEN_HEXAL_URL";
/// Timeout for provider requests, in seconds.
pub const ENV_TIMEOUT: &str = "POLLEN_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Startup configuration. Read once; nothing reloads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub mock_dir: Option<PathBuf>,
    pub dwd_url: Option<String>,
    pub hexal_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            mock_dir: None,
            dwd_url: None,
            hexal_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// A port or timeout that doesn't parse is logged and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!(value = %port, error = %e, "ignoring invalid {ENV_PORT}"),
            }
        }

        if let Some(dir) = lookup(ENV_ASSETS) {
            config.assets_dir = PathBuf::from(dir);
        }

        config.mock_dir = lookup(ENV_MOCK_DIR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config.dwd_url = lookup(ENV_DWD_URL).filter(|url| !url.is_empty());
        config.hexal_url = lookup(ENV_HEXAL_URL).filter(|url| !url.is_empty());

        if let Some(secs) = lookup(ENV_TIMEOUT) {
            match secs.parse() {
                Ok(0) => warn!("ignoring zero {ENV_TIMEOUT}"),
                Ok(secs) => config.timeout_secs = secs,
                Err(e) => warn!(value = %secs, error = %e, "ignoring invalid {ENV_TIMEOUT}"),
            }
        }

        config
    }

    /// Client settings for the DWD feed.
    pub fn dwd(&self) -> DwdConfig {
        let config = DwdConfig::new().with_timeout(self.timeout_secs);
        match &self.dwd_url {
            Some(url) => config.with_url(url),
            None => config,
        }
    }

    /// Client settings for the Hexal feed.
    pub fn hexal(&self) -> HexalConfig {
        let config = HexalConfig::new().with_timeout(self.timeout_secs);
        match &self.hexal_url {
            Some(url) => config.with_url(url),
            None => config,
        }
    }
}
