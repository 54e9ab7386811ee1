// src/error.rs
//! Error types for the button panel

use std::fmt;

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Debug)]
pub enum PanelError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Backend(String),
    #[cfg(all(unix, not(target_os = "macos"), feature = "gui"))]
    Gui(eframe::Error),
    Other(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Io(e) => write!(f, "IO error: {}", e),
            PanelError::Json(e) => write!(f, "JSON error: {}", e),
            PanelError::Backend(msg) => write!(f, "Backend error: {}", msg),
            #[cfg(all(unix, not(target_os = "macos"), feature = "gui"))]
            PanelError::Gui(e) => write!(f, "GUI error: {}", e),
            PanelError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<std::io::Error> for PanelError {
    fn from(error: std::io::Error) -> Self {
        PanelError::Io(error)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(error: serde_json::Error) -> Self {
        PanelError::Json(error)
    }
}

#[cfg(all(unix, not(target_os = "macos"), feature = "gui"))]
impl From<eframe::Error> for PanelError {
    fn from(error: eframe::Error) -> Self {
        PanelError::Gui(error)
    }
}

impl From<anyhow::Error> for PanelError {
    fn from(error: anyhow::Error) -> Self {
        PanelError::Other(error.to_string())
    }
}
