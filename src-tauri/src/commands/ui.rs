//! UI state commands
//!
//! Thin wrappers over the UiState reducers. Every mutation returns the
//! full state snapshot so the frontend can re-render from one source
//! of truth.

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::services::filter::{SortDirection, SortField};
use crate::ui::{UiState, ViewMode};
use tauri::State;

/// Run a reducer against the locked UI state and return the new snapshot
fn with_ui<F>(state: &AppState, f: F) -> Result<UiState>
where
    F: FnOnce(&mut UiState),
{
    let mut ui = state
        .ui
        .lock()
        .map_err(|_| AppError::Generic("UI state lock poisoned".to_string()))?;
    f(&mut ui);
    Ok(ui.clone())
}

/// Get the current UI state snapshot
#[tauri::command]
pub fn get_ui_state(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |_| {})
}

#[tauri::command]
pub fn toggle_sidebar(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |ui| ui.toggle_sidebar())
}

#[tauri::command]
pub fn set_sidebar_open(state: State<'_, AppState>, open: bool) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_sidebar_open(open))
}

#[tauri::command]
pub fn set_search(state: State<'_, AppState>, search: String) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_search(search))
}

#[tauri::command]
pub fn set_category_filter(
    state: State<'_, AppState>,
    category_id: Option<String>,
) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_category_filter(category_id))
}

#[tauri::command]
pub fn set_favorites_only(state: State<'_, AppState>, favorites_only: bool) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_favorites_only(favorites_only))
}

#[tauri::command]
pub fn toggle_filter_tag(state: State<'_, AppState>, tag: String) -> Result<UiState> {
    with_ui(&state, |ui| ui.toggle_tag(tag))
}

#[tauri::command]
pub fn set_sort(
    state: State<'_, AppState>,
    field: SortField,
    direction: SortDirection,
) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_sort(field, direction))
}

#[tauri::command]
pub fn reset_filter(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |ui| ui.reset_filter())
}

#[tauri::command]
pub fn set_view_mode(state: State<'_, AppState>, mode: ViewMode) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_view_mode(mode))
}

#[tauri::command]
pub fn open_prompt_dialog(
    state: State<'_, AppState>,
    prompt_id: Option<String>,
) -> Result<UiState> {
    with_ui(&state, |ui| ui.open_prompt_dialog(prompt_id))
}

#[tauri::command]
pub fn close_prompt_dialog(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |ui| ui.close_prompt_dialog())
}

#[tauri::command]
pub fn open_category_dialog(
    state: State<'_, AppState>,
    category_id: Option<String>,
) -> Result<UiState> {
    with_ui(&state, |ui| ui.open_category_dialog(category_id))
}

#[tauri::command]
pub fn close_category_dialog(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |ui| ui.close_category_dialog())
}

#[tauri::command]
pub fn open_prompt_detail(state: State<'_, AppState>, prompt_id: String) -> Result<UiState> {
    with_ui(&state, |ui| ui.open_prompt_detail(prompt_id))
}

#[tauri::command]
pub fn close_prompt_detail(state: State<'_, AppState>) -> Result<UiState> {
    with_ui(&state, |ui| ui.close_prompt_detail())
}

#[tauri::command]
pub fn set_command_palette_open(state: State<'_, AppState>, open: bool) -> Result<UiState> {
    with_ui(&state, |ui| ui.set_command_palette_open(open))
}
