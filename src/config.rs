// src/config.rs v2
//! Configuration for deployment-time display tuning
//!
//! The framebuffer device path, the backend driver and any extra
//! environment the display stack needs (DRM device paths, evdev input
//! sources) are deployment decisions, so they live in a config file
//! rather than in program logic. A default file is written on first run
//! so there is always something to edit on the target device.

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Framebuffer device node probed before full-screen startup
    pub fb_device: String,
    /// Display backend driver exported for the toolkit
    pub backend_driver: String,
    /// Extra environment exported verbatim in framebuffer mode
    #[serde(default)]
    pub extra_backend_env: BTreeMap<String, String>,
    pub window_width: f32,
    pub window_height: f32,
    pub spacing: f32,
    pub button_min_height: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl PanelConfig {
    /// Get the default configuration
    pub fn platform_default() -> Self {
        Self {
            fb_device: "/dev/fb0".to_string(),
            backend_driver: "x11".to_string(),
            extra_backend_env: BTreeMap::new(),
            window_width: 400.0,
            window_height: 300.0,
            spacing: 10.0,
            button_min_height: 80.0,
        }
    }

    /// Load configuration from the config file, writing the defaults on
    /// first run so the file exists for deployment edits.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let config = Self::platform_default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| PanelError::Other(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| PanelError::Other(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to the config file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PanelError::Other(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::Other(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)
            .map_err(|e| PanelError::Other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get the config file path
    fn get_config_path() -> Result<std::path::PathBuf> {
        use std::path::PathBuf;

        let home = std::env::var("HOME")
            .map_err(|_| PanelError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("button-panel").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();

        assert_eq!(config.fb_device, "/dev/fb0");
        assert_eq!(config.backend_driver, "x11");
        assert!(config.extra_backend_env.is_empty());
        assert_eq!(config.window_width, 400.0);
        assert_eq!(config.window_height, 300.0);
    }

    #[test]
    fn test_config_path_location() {
        let path = PanelConfig::get_config_path().unwrap();
        assert!(path.ends_with(".config/button-panel/config.json"));
    }

    #[test]
    fn test_missing_extra_env_defaults_empty() {
        let contents = r#"{
            "fb_device": "/dev/fb1",
            "backend_driver": "x11",
            "window_width": 640.0,
            "window_height": 480.0,
            "spacing": 8.0,
            "button_min_height": 64.0
        }"#;

        let config: PanelConfig = serde_json::from_str(contents).unwrap();
        assert_eq!(config.fb_device, "/dev/fb1");
        assert!(config.extra_backend_env.is_empty());
    }
}
