use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How the overall failure flag is reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReporting {
    /// Mark the task failed after every URL attempt, successful or not.
    /// This is what hosts observe from the plugin today.
    #[default]
    Always,
    /// Mark the task failed only when an attempt actually failed.
    OnError,
}

/// How filenames are extracted from a Content-Disposition header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameParsing {
    /// Fixed-offset slicing, byte-compatible with the legacy plugin.
    #[default]
    Exact,
    /// Tolerant key=value parser with filename sanitization.
    Tolerant,
}

/// Tool options loaded from `~/.config/fetchtask/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Connect timeout per URL, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout per URL, in seconds.
    pub request_timeout_secs: u64,
    /// Content-Disposition handling: "exact" (default) or "tolerant".
    #[serde(default)]
    pub filename_parsing: FilenameParsing,
    /// Failure flag handling: "always" (default) or "on-error".
    #[serde(default)]
    pub failure_reporting: FailureReporting,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            filename_parsing: FilenameParsing::default(),
            failure_reporting: FailureReporting::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchtask")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load options from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchOptions> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = FetchOptions::default();
        let toml = toml::to_string_pretty(&defaults)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(&path)?;
    let options: FetchOptions = toml::from_str(&data)?;
    Ok(options)
}
