use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub fn default_ui_scale() -> f32 {
    1.0
}

/// App configuration stored on disk. Holds presentation settings only;
/// panel state is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    /// Fixed seed for the background streak field. None means a fresh
    /// scattering every launch.
    #[serde(default)]
    pub backdrop_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            backdrop_seed: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(|appdata| {
                PathBuf::from(appdata)
                    .join("ThreeCircles")
                    .join("config.json")
            })
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("three-circles")
                    .join("config.json")
            })
        }
    }

    fn load_from(path: &Path) -> Option<Self> {
        let json = fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }

    /// Loads the config, writing the defaults on first launch so the
    /// settings file exists to edit. A corrupt file is left alone and the
    /// defaults are used for the session.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if let Some(config) = Self::load_from(&path) {
            return config;
        }
        let config = Self::default();
        if !path.exists() {
            config.save();
        }
        config
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }
}
