use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::CONFIG_ENV;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) verbose: bool,
    #[serde(default)]
    pub(crate) verify_order: bool,
    #[serde(default)]
    pub(crate) header: Option<[String; 2]>,
}

/// Outcome of looking for a config file. Logging isn't set up yet when this
/// runs, so problems are collected and reported afterwards.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) source: Option<PathBuf>,
    pub(crate) rejected: Vec<(PathBuf, String)>,
}

impl LoadedConfig {
    pub(crate) fn report(&self) {
        for (path, err) in &self.rejected {
            tracing::warn!("Failed to parse {}: {}", path.display(), err);
        }
        if let Some(path) = &self.source {
            tracing::debug!("Loaded config from {}", path.display());
        }
    }
}

impl Config {
    pub(crate) fn load() -> LoadedConfig {
        Self::load_from(&Self::get_config_paths())
    }

    /// First readable, well-formed file wins
    fn load_from(paths: &[PathBuf]) -> LoadedConfig {
        let mut loaded = LoadedConfig::default();

        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        loaded.config = config;
                        loaded.source = Some(path.clone());
                        return loaded;
                    }
                    Err(e) => loaded.rejected.push((path.clone(), e.to_string())),
                }
            }
        }

        loaded
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // An explicit path replaces the usual search
        if let Some(explicit) = std::env::var_os(CONFIG_ENV)
            && !explicit.is_empty()
        {
            return vec![PathBuf::from(explicit)];
        }

        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/most-active-cookie/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("most-active-cookie")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("most-active-cookie").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.most-active-cookie.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".most-active-cookie.toml"));
        }

        paths
    }
}
