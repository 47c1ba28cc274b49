// Configuration loader
// Reads a TOML file (explicit path or ~/.strapline/config.toml), then applies
// environment overrides so deployments can run file-less.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::settings::Settings;

/// Load settings from `path` if given, otherwise from the default location,
/// otherwise start from defaults. Environment variables win in all cases.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(explicit) => read_file(explicit)?,
        None => match default_config_path() {
            Some(default) if default.exists() => read_file(&default)?,
            _ => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings);

    settings.validate().context("configuration is incomplete")?;
    Ok(settings)
}

fn read_file(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".strapline/config.toml"))
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
        if !key.is_empty() {
            settings.gemini.api_key = key;
        }
    }
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if !url.is_empty() {
            settings.database_url = url;
        }
    }
    if let Ok(domain) = std::env::var("DOMAIN_FE") {
        if !domain.is_empty() {
            settings.domain_fe = domain;
        }
    }
    if let Ok(bind) = std::env::var("STRAPLINE_BIND") {
        if !bind.is_empty() {
            settings.server.bind_address = bind;
        }
    }
}
