//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::layout::DEFAULT_PYRAMID_HEIGHT;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "imslc.yaml";

/// imslc configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand shown in the navigation bar
    pub site_title: Option<String>,

    /// Prefix for links between generated pages (must stay relative for sub-path hosting)
    pub base_path: Option<String>,

    /// Directory `imslc build` writes to
    pub output_dir: Option<PathBuf>,

    /// Pyramid container height in pixels
    pub pyramid_height: Option<f64>,

    /// Load content from this directory instead of the embedded copy
    pub content_dir: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (accessor fallbacks)

        // 2. Global user config (~/.config/imslc/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Local config (./imslc.yaml)
        if let Some(local) = Self::read_file(Path::new(LOCAL_CONFIG_FILE)) {
            config.merge(local);
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Build the environment layer using `lookup` to read variables
    fn from_env<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            output_dir: lookup("IMSLC_OUTPUT_DIR").map(PathBuf::from),
            content_dir: lookup("IMSLC_CONTENT_DIR").map(PathBuf::from),
            base_path: lookup("IMSLC_BASE_PATH"),
            ..Default::default()
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "imslc")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.site_title.is_some() {
            self.site_title = other.site_title;
        }
        if other.base_path.is_some() {
            self.base_path = other.base_path;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.pyramid_height.is_some() {
            self.pyramid_height = other.pyramid_height;
        }
        if other.content_dir.is_some() {
            self.content_dir = other.content_dir;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    pub fn site_title(&self) -> String {
        self.site_title
            .clone()
            .unwrap_or_else(|| "Жизненный цикл ИМС".to_string())
    }

    /// Base path, normalized to end with '/'; empty means relative ("./")
    pub fn base_path(&self) -> String {
        let base = match self.base_path.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => "./".to_string(),
        };
        if base.ends_with('/') {
            base
        } else {
            format!("{}/", base)
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("dist"))
    }

    pub fn pyramid_height(&self) -> f64 {
        self.pyramid_height
            .filter(|h| *h > 0.0)
            .unwrap_or(DEFAULT_PYRAMID_HEIGHT)
    }
}
