//! UI state container
//!
//! Explicit application-state struct replacing the source-of-truth the
//! frontend would otherwise scatter across globals: sidebar, active
//! filter, view mode, dialog and detail selection, command palette.
//! Every transition is a pure reducer method on the struct, so the
//! whole state machine is testable without a running window.

use crate::services::filter::{PromptFilter, SortDirection, SortField};
use serde::{Deserialize, Serialize};

/// How the prompt list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Grid,
    List,
}

/// The whole mutable UI state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiState {
    pub sidebar_open: bool,
    pub filter: PromptFilter,
    pub view_mode: ViewMode,

    pub prompt_dialog_open: bool,
    pub editing_prompt_id: Option<String>,

    pub category_dialog_open: bool,
    pub editing_category_id: Option<String>,

    pub detail_prompt_id: Option<String>,

    pub command_palette_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            filter: PromptFilter::default(),
            view_mode: ViewMode::Grid,
            prompt_dialog_open: false,
            editing_prompt_id: None,
            category_dialog_open: false,
            editing_category_id: None,
            detail_prompt_id: None,
            command_palette_open: false,
        }
    }
}

impl UiState {
    // ===== Sidebar =====

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    // ===== Filter =====

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn set_category_filter(&mut self, category_id: Option<String>) {
        self.filter.category_id = category_id;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.filter.favorites_only = favorites_only;
    }

    /// Add the tag to the filter if absent, remove it if present
    pub fn toggle_tag(&mut self, tag: String) {
        if let Some(pos) = self.filter.tags.iter().position(|t| *t == tag) {
            self.filter.tags.remove(pos);
        } else {
            self.filter.tags.push(tag);
        }
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.filter.sort_field = field;
        self.filter.sort_direction = direction;
    }

    pub fn reset_filter(&mut self) {
        self.filter = PromptFilter::default();
    }

    // ===== View mode =====

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // ===== Dialogs =====

    /// Open the prompt dialog, in edit mode when an id is given
    pub fn open_prompt_dialog(&mut self, prompt_id: Option<String>) {
        self.prompt_dialog_open = true;
        self.editing_prompt_id = prompt_id;
    }

    pub fn close_prompt_dialog(&mut self) {
        self.prompt_dialog_open = false;
        self.editing_prompt_id = None;
    }

    /// Open the category dialog, in edit mode when an id is given
    pub fn open_category_dialog(&mut self, category_id: Option<String>) {
        self.category_dialog_open = true;
        self.editing_category_id = category_id;
    }

    pub fn close_category_dialog(&mut self) {
        self.category_dialog_open = false;
        self.editing_category_id = None;
    }

    // ===== Prompt detail =====

    pub fn open_prompt_detail(&mut self, prompt_id: String) {
        self.detail_prompt_id = Some(prompt_id);
    }

    pub fn close_prompt_detail(&mut self) {
        self.detail_prompt_id = None;
    }

    // ===== Command palette =====

    pub fn set_command_palette_open(&mut self, open: bool) {
        self.command_palette_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::default();

        assert!(state.sidebar_open);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(!state.prompt_dialog_open);
        assert!(state.filter.search.is_empty());
        assert_eq!(state.filter.sort_field, SortField::UpdatedAt);
        assert_eq!(state.filter.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = UiState::default();

        state.toggle_sidebar();
        assert!(!state.sidebar_open);
        state.toggle_sidebar();
        assert!(state.sidebar_open);
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let mut state = UiState::default();

        state.toggle_tag("rust".to_string());
        assert_eq!(state.filter.tags, vec!["rust"]);

        state.toggle_tag("web".to_string());
        assert_eq!(state.filter.tags, vec!["rust", "web"]);

        state.toggle_tag("rust".to_string());
        assert_eq!(state.filter.tags, vec!["web"]);
    }

    #[test]
    fn test_reset_filter() {
        let mut state = UiState::default();

        state.set_search("query".to_string());
        state.set_favorites_only(true);
        state.toggle_tag("x".to_string());
        state.set_sort(SortField::Title, SortDirection::Asc);

        state.reset_filter();

        assert!(state.filter.search.is_empty());
        assert!(!state.filter.favorites_only);
        assert!(state.filter.tags.is_empty());
        assert_eq!(state.filter.sort_field, SortField::UpdatedAt);
    }

    #[test]
    fn test_prompt_dialog_edit_mode() {
        let mut state = UiState::default();

        state.open_prompt_dialog(Some("p-1".to_string()));
        assert!(state.prompt_dialog_open);
        assert_eq!(state.editing_prompt_id.as_deref(), Some("p-1"));

        state.close_prompt_dialog();
        assert!(!state.prompt_dialog_open);
        assert!(state.editing_prompt_id.is_none());
    }

    #[test]
    fn test_prompt_dialog_create_mode() {
        let mut state = UiState::default();

        state.open_prompt_dialog(None);
        assert!(state.prompt_dialog_open);
        assert!(state.editing_prompt_id.is_none());
    }

    #[test]
    fn test_prompt_detail() {
        let mut state = UiState::default();

        state.open_prompt_detail("p-9".to_string());
        assert_eq!(state.detail_prompt_id.as_deref(), Some("p-9"));

        state.close_prompt_detail();
        assert!(state.detail_prompt_id.is_none());
    }
}
