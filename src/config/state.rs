// src/config/state.rs
use super::options::{AppOptions, ReportTable};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_table: ReportTable,

    /// Source path typed in the side panel
    pub input_path: String,

    /// Fixed divisor shown when "fixed" is picked
    pub fixed_divisor: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_table: ReportTable::Matches,
            input_path: s!(),
            fixed_divisor: 12,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
