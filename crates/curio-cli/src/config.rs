use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Catalog source: an http(s) URL or a path to a JSON file.
    pub catalog: Option<String>,
    /// Image path substituted when an item has no image.
    pub placeholder: Option<String>,
    pub tui: Option<Tui>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tui {
    /// Whether the browser uses the alternate screen (default: true)
    pub alt_screen: Option<bool>,
}

pub fn config_dir() -> PathBuf {
    if let Some(bd) = directories::BaseDirs::new() {
        bd.config_dir().join("curio")
    } else {
        PathBuf::from("./.config/curio")
    }
}

pub fn state_dir() -> PathBuf {
    // Prefer XDG state dir when available; fall back to config dir
    if let Some(bd) = directories::BaseDirs::new() {
        if let Some(sd) = bd.state_dir() {
            return sd.join("curio");
        }
    }
    config_dir()
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if let Ok(s) = std::fs::read_to_string(&path) {
        toml::from_str(&s).unwrap_or_default()
    } else {
        Settings::default()
    }
}
