use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Accept value used when neither the command line nor the config names one.
pub const DEFAULT_CONTENT_TYPE: &str = "text/turtle";

/// Global configuration loaded from `~/.config/ldpc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirects: u32,
    /// Content type requested when the command line names none.
    #[serde(default = "default_content_type")]
    pub default_content_type: String,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 60,
            max_redirects: 10,
            default_content_type: default_content_type(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ldpc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ClientConfig = toml::from_str(&data)?;
    Ok(cfg)
}
