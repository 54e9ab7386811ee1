// src/display/gui/app.rs v1
//! Panel application structure and eframe::App implementation

use crate::config::PanelConfig;
use crate::display::DisplayMode;
use crate::panel::{self, ButtonGrid, GRID_COLS, GRID_ROWS};
use eframe::egui;

pub struct PanelApp {
    grid: ButtonGrid,
    mode: DisplayMode,
    spacing: f32,
    button_min_height: f32,
    ack: Option<String>,
}

impl PanelApp {
    pub fn new(mode: DisplayMode, config: &PanelConfig) -> Self {
        Self {
            grid: ButtonGrid::new(),
            mode,
            spacing: config.spacing,
            button_min_height: config.button_min_height,
            ack: None,
        }
    }

    /// Handle a button activation: report it on the console, and in
    /// development mode queue the acknowledgment dialog.
    fn handle_click(&mut self, label: &str) {
        let message = panel::click_message(label);
        println!("{}", message);

        if self.mode == DisplayMode::Windowed {
            self.ack = Some(message);
        }
    }

    /// Render the 2x3 button grid sized to fill the available area, with
    /// a touch-friendly minimum button height.
    fn render_grid(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(self.spacing, self.spacing);

        let available = ui.available_size();
        let cell_width = (available.x - self.spacing * (GRID_COLS as f32 - 1.0)) / GRID_COLS as f32;
        let cell_height = ((available.y - self.spacing * (GRID_ROWS as f32 - 1.0))
            / GRID_ROWS as f32)
            .max(self.button_min_height);

        let mut clicked = None;
        for row in 0..GRID_ROWS {
            ui.horizontal(|ui| {
                for col in 0..GRID_COLS {
                    if let Some(button) = self.grid.get(row, col) {
                        let widget = egui::Button::new(&button.label);
                        if ui.add_sized([cell_width, cell_height], widget).clicked() {
                            clicked = Some(button.label.clone());
                        }
                    }
                }
            });
        }

        if let Some(label) = clicked {
            self.handle_click(&label);
        }
    }

    /// Centered acknowledgment dialog, development mode only
    fn render_ack_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ack.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Button Clicked")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&message);
                ui.separator();
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.ack = None;
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_grid(ui);
        });

        self.render_ack_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(mode: DisplayMode) -> PanelApp {
        PanelApp::new(mode, &PanelConfig::platform_default())
    }

    #[test]
    fn test_click_in_dev_mode_queues_dialog() {
        let mut app = app(DisplayMode::Windowed);

        app.handle_click("Button 5");
        assert_eq!(app.ack.as_deref(), Some("Button 5 was clicked!"));
    }

    #[test]
    fn test_click_in_framebuffer_mode_shows_no_dialog() {
        let mut app = app(DisplayMode::Framebuffer);

        app.handle_click("Button 3");
        assert!(app.ack.is_none());
    }

    #[test]
    fn test_app_holds_full_grid() {
        let app = app(DisplayMode::Framebuffer);
        assert_eq!(app.grid.len(), panel::BUTTON_COUNT);
    }
}
