// src/panel.rs
//! Button grid data model

pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 3;
pub const BUTTON_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Labels for the panel buttons, in row-major order
pub const BUTTON_LABELS: [&str; BUTTON_COUNT] = [
    "Button 1",
    "Button 2",
    "Button 3",
    "Button 4",
    "Button 5",
    "Button 6",
];

/// Console feedback line for an activated button
pub fn click_message(label: &str) -> String {
    format!("{} was clicked!", label)
}

/// A single labeled cell of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub row: usize,
    pub col: usize,
}

/// The fixed 2x3 panel of buttons, built once at startup and never
/// mutated afterwards. Each button owns its label, so the view hands the
/// activated button's own label to the click handler.
#[derive(Debug, Clone)]
pub struct ButtonGrid {
    buttons: Vec<Button>,
}

impl ButtonGrid {
    /// Build the grid in row-major order
    pub fn new() -> Self {
        let buttons = BUTTON_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| Button {
                label: (*label).to_string(),
                row: index / GRID_COLS,
                col: index % GRID_COLS,
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Button at the given grid cell, if the cell exists
    pub fn get(&self, row: usize, col: usize) -> Option<&Button> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        self.buttons.get(row * GRID_COLS + col)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl Default for ButtonGrid {
    fn default() -> Self {
        Self::new()
    }
}
