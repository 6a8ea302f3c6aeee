//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.filmiry/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::images::DEFAULT_IMAGE_BASE_URL;
use crate::catalog::providers::tmdb::DEFAULT_TMDB_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilmiryConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    pub name: Option<String>,
    pub origin: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SITE_NAME: &str = "Filmiry";
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub site_name: String,
    /// Scheme + host used for canonical URLs, without a trailing slash.
    pub origin: String,
    /// Stays optional here; building the catalog turns absence into an error.
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub image_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.filmiry/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".filmiry").join("config.toml"))
}

/// Load config from `~/.filmiry/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FilmiryConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FilmiryConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FilmiryConfig::default());
        }
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<FilmiryConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FilmiryConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FilmiryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Never log the key itself.
    debug!(
        "Config: site={:?} tmdb.base_url={:?} tmdb.api_key set={}",
        config.site,
        config.tmdb.base_url,
        config.tmdb.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Filmiry Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [site]
# name = "Filmiry"
# origin = "https://filmiry.example"    # Or set FILMIRY_ORIGIN; used for canonical URLs

# [tmdb]
# api_key = "..."                        # Or set TMDB_API_KEY env var
# base_url = "https://api.themoviedb.org/3"
# image_base_url = "https://image.tmdb.org/t/p"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_origin` is from the `--origin` flag (None = not specified).
pub fn resolve(config: &FilmiryConfig, cli_origin: Option<&str>) -> ResolvedConfig {
    // Site name: config → default
    let site_name = config
        .site
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

    // Origin: CLI → env → config → default
    let origin = cli_origin
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FILMIRY_ORIGIN").ok())
        .or_else(|| config.site.origin.clone())
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

    // TMDB API key: env → config
    let tmdb_api_key = std::env::var("TMDB_API_KEY")
        .ok()
        .or_else(|| config.tmdb.api_key.clone());

    // TMDB base URL: env → config → default
    let tmdb_base_url = std::env::var("TMDB_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());

    // Image base URL: env → config → default
    let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.image_base_url.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

    ResolvedConfig {
        site_name,
        origin: origin.trim_end_matches('/').to_string(),
        tmdb_api_key,
        tmdb_base_url,
        image_base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FilmiryConfig::default();
        assert!(config.site.name.is_none());
        assert!(config.tmdb.api_key.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FilmiryConfig::default();
        let resolved = resolve(&config, Some("https://filmiry.test"));
        assert_eq!(resolved.site_name, DEFAULT_SITE_NAME);
        assert_eq!(resolved.origin, "https://filmiry.test");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FilmiryConfig {
            site: SiteConfig {
                name: Some("Reelbox".to_string()),
                origin: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.site_name, "Reelbox");
    }

    #[test]
    fn test_resolve_cli_origin_wins_and_is_trimmed() {
        let config = FilmiryConfig {
            site: SiteConfig {
                name: None,
                origin: Some("https://from-config.test".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("https://from-cli.test/"));
        assert_eq!(resolved.origin, "https://from-cli.test");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[site]
name = "Filmiry"
origin = "https://filmiry.example"

[tmdb]
api_key = "tmdb-test-123"
image_base_url = "https://img.example/t/p"
"#;
        let config: FilmiryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.site.origin.as_deref(), Some("https://filmiry.example"));
        assert_eq!(config.tmdb.api_key.as_deref(), Some("tmdb-test-123"));
        assert!(config.tmdb.base_url.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[tmdb]
base_url = "http://localhost:8080/3"
"#;
        let config: FilmiryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tmdb.base_url.as_deref(), Some("http://localhost:8080/3"));
        assert!(config.site.name.is_none());
        assert!(config.tmdb.api_key.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("filmiry-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.tmdb.api_key.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [tmdb]"));
        // The generated file is all comments, so it parses back to defaults.
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.site.origin.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("filmiry-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[tmdb\napi_key = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
