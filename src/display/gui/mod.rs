// src/display/gui/mod.rs
//! GUI display module - eframe orchestration

mod app;

pub use app::PanelApp;

use crate::config::PanelConfig;
use crate::display::DisplayMode;
use crate::error::{PanelError, Result};
use eframe::egui;

pub const WINDOW_TITLE: &str = "Button Grid";

pub struct PanelDisplay;

impl PanelDisplay {
    pub fn new() -> Self {
        Self
    }

    /// Open the panel and run the event loop until the process exits
    pub fn run(&self, mode: DisplayMode, config: &PanelConfig) -> Result<()> {
        let viewport = match mode {
            DisplayMode::Framebuffer => egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_fullscreen(true)
                .with_decorations(false),
            DisplayMode::Windowed => egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size([config.window_width, config.window_height]),
        };

        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        let app = PanelApp::new(mode, config);

        match eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app)))) {
            Ok(_) => Ok(()),
            Err(e) => Err(PanelError::Gui(e)),
        }
    }
}

impl Default for PanelDisplay {
    fn default() -> Self {
        Self::new()
    }
}
