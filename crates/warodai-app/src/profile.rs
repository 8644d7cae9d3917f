use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use warodai_config::Config;

/// Profile picked up from the working directory when no `--config` is given
pub const DEFAULT_PROFILE: &str = "warodai.json";

/// Load a JSON config profile; fields missing from the file keep their defaults
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config profile {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Explicit profile, else `warodai.json` in `dir` if present, else defaults.
/// Environment overrides are applied last.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Config> {
    let fallback: PathBuf = dir.join(DEFAULT_PROFILE);

    let mut config = match explicit {
        Some(path) => load_profile(path)?,
        None if fallback.exists() => load_profile(&fallback)?,
        None => {
            tracing::debug!("No config profile found, using defaults");
            return Ok(Config::new());
        }
    };

    config.apply_env_overrides();
    Ok(config)
}
