//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `prompts`: Prompt CRUD, filtered queries, and clipboard copy
//! - `categories`: Category CRUD and reordering
//! - `analytics`: The summary view
//! - `ui`: UI state snapshot and reducers

pub mod analytics;
pub mod categories;
pub mod prompts;
pub mod ui;

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

// Re-export all commands for convenient registration in main.rs
pub use analytics::*;
pub use categories::*;
pub use prompts::*;
pub use ui::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}
