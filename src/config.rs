use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::APP_NAME;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    /// Default category filter, e.g. "job"
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// JSON file replacing the built-in entries
    #[serde(default)]
    pub(crate) data: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    /// First path that exists and parses wins; parse failures are logged and skipped
    pub(crate) fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return config.resolve_relative(path);
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    /// A relative `data` path is taken relative to the config file's directory
    fn resolve_relative(mut self, config_path: &Path) -> Self {
        if let Some(data) = &self.data
            && data.is_relative()
            && let Some(dir) = config_path.parent()
        {
            self.data = Some(dir.join(data));
        }
        self
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/folio/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/folio/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.folio.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
