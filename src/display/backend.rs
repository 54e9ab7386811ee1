// src/display/backend.rs
//! Framebuffer backend configuration with windowed fallback
//!
//! The display backend is configured through environment variables that
//! the toolkit reads during initialization. Instead of scattering
//! `set_var` calls through startup, the selector computes a `BackendPlan`
//! carrying the assignments as data; the caller applies the plan once,
//! before the event loop is created. A framebuffer request that cannot be
//! satisfied downgrades to a windowed plan and the process continues.

use crate::config::PanelConfig;
use crate::display::DisplayMode;
use crate::error::{PanelError, Result};
use std::fs::OpenOptions;

/// Environment variable selecting the display backend driver
pub const BACKEND_ENV_VAR: &str = "WINIT_UNIX_BACKEND";

/// Display mode plus the environment assignments it needs
#[derive(Debug, Clone)]
pub struct BackendPlan {
    mode: DisplayMode,
    assignments: Vec<(String, String)>,
}

impl BackendPlan {
    /// Build the plan for the requested mode. Framebuffer setup failures
    /// are reported on the console and downgrade to a windowed plan
    /// instead of aborting.
    pub fn prepare(requested: DisplayMode, config: &PanelConfig) -> Self {
        match requested {
            DisplayMode::Windowed => Self::windowed(),
            DisplayMode::Framebuffer => match Self::framebuffer(config) {
                Ok(plan) => plan,
                Err(e) => {
                    eprintln!("Failed to set up framebuffer: {}", e);
                    eprintln!("Falling back to development mode");
                    Self::windowed()
                }
            },
        }
    }

    /// Windowed plan: the desktop session's own backend, nothing exported
    fn windowed() -> Self {
        Self {
            mode: DisplayMode::Windowed,
            assignments: Vec::new(),
        }
    }

    /// Framebuffer plan: probe the device node, then collect the driver
    /// assignment and the deployment-specific extras from the config.
    fn framebuffer(config: &PanelConfig) -> Result<Self> {
        probe_device(&config.fb_device)?;

        let mut assignments = vec![(BACKEND_ENV_VAR.to_string(), config.backend_driver.clone())];
        for (key, value) in &config.extra_backend_env {
            assignments.push((key.clone(), value.clone()));
        }

        Ok(Self {
            mode: DisplayMode::Framebuffer,
            assignments,
        })
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn assignments(&self) -> &[(String, String)] {
        &self.assignments
    }

    /// Export the assignments into the process environment. Must run
    /// before the toolkit initializes its display backend.
    pub fn apply(&self) {
        for (key, value) in &self.assignments {
            std::env::set_var(key, value);
        }
    }
}

/// Check that the framebuffer device node exists and is readable
fn probe_device(path: &str) -> Result<()> {
    OpenOptions::new()
        .read(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| PanelError::Backend(format!("cannot open {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_device(fb_device: &str) -> PanelConfig {
        PanelConfig {
            fb_device: fb_device.to_string(),
            ..PanelConfig::platform_default()
        }
    }

    fn existing_device() -> std::path::PathBuf {
        let path = std::env::temp_dir().join("button-panel-test-fb");
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_windowed_plan_has_no_assignments() {
        let config = PanelConfig::platform_default();
        let plan = BackendPlan::prepare(DisplayMode::Windowed, &config);

        assert_eq!(plan.mode(), DisplayMode::Windowed);
        assert!(plan.assignments().is_empty());
    }

    #[test]
    fn test_framebuffer_plan_sets_backend_driver() {
        let device = existing_device();
        let config = config_with_device(device.to_str().unwrap());

        let plan = BackendPlan::prepare(DisplayMode::Framebuffer, &config);

        assert_eq!(plan.mode(), DisplayMode::Framebuffer);
        assert!(plan
            .assignments()
            .contains(&(BACKEND_ENV_VAR.to_string(), "x11".to_string())));
    }

    #[test]
    fn test_framebuffer_plan_carries_extra_env() {
        let device = existing_device();
        let mut config = config_with_device(device.to_str().unwrap());
        config
            .extra_backend_env
            .insert("BUTTON_PANEL_TEST_DRM".to_string(), "/dev/dri/card0".to_string());

        let plan = BackendPlan::prepare(DisplayMode::Framebuffer, &config);

        assert!(plan
            .assignments()
            .contains(&("BUTTON_PANEL_TEST_DRM".to_string(), "/dev/dri/card0".to_string())));
    }

    #[test]
    fn test_missing_device_falls_back_to_windowed() {
        let config = config_with_device("/definitely/not/a/framebuffer");

        let plan = BackendPlan::prepare(DisplayMode::Framebuffer, &config);

        assert_eq!(plan.mode(), DisplayMode::Windowed);
        assert!(plan.assignments().is_empty());
    }

    #[test]
    fn test_probe_missing_device_errors() {
        let result = probe_device("/definitely/not/a/framebuffer");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_exports_assignments() {
        let plan = BackendPlan {
            mode: DisplayMode::Framebuffer,
            assignments: vec![("BUTTON_PANEL_TEST_APPLY".to_string(), "on".to_string())],
        };

        plan.apply();
        assert_eq!(std::env::var("BUTTON_PANEL_TEST_APPLY").unwrap(), "on");
        std::env::remove_var("BUTTON_PANEL_TEST_APPLY");
    }
}
