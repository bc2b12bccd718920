//! Category-related commands
//!
//! CRUD operations for categories plus the full-overwrite reorder.

use crate::app::AppState;
use crate::database::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::Result;
use tauri::State;

/// Create a new category
#[tauri::command]
pub async fn create_category(
    state: State<'_, AppState>,
    name: String,
    description: Option<String>,
    color: Option<String>,
) -> Result<Category> {
    let req = CreateCategoryRequest {
        name,
        description,
        color,
    };

    state.categories.create(req).await
}

/// Get a category by ID; None means nothing selected
#[tauri::command]
pub async fn get_category(state: State<'_, AppState>, id: String) -> Result<Option<Category>> {
    state.categories.get(&id).await
}

/// List all categories in user-defined sort order
#[tauri::command]
pub async fn list_categories(state: State<'_, AppState>) -> Result<Vec<Category>> {
    state.categories.list().await
}

/// Update a category; omitted fields are left unchanged
#[tauri::command]
pub async fn update_category(
    state: State<'_, AppState>,
    id: String,
    name: Option<String>,
    description: Option<String>,
    color: Option<String>,
) -> Result<Category> {
    let req = UpdateCategoryRequest {
        id,
        name,
        description,
        color,
    };

    state.categories.update(req).await
}

/// Delete a category; its prompts revert to uncategorized
#[tauri::command]
pub async fn delete_category(state: State<'_, AppState>, id: String) -> Result<()> {
    state.categories.delete(&id).await
}

/// Persist a full reordering of all categories.
///
/// Each id's sort position becomes its index in the submitted order.
/// The caller always submits the complete id set.
#[tauri::command]
pub async fn reorder_categories(
    state: State<'_, AppState>,
    ordered_ids: Vec<String>,
) -> Result<()> {
    state.categories.reorder(ordered_ids).await
}

/// Count prompts in a category
#[tauri::command]
pub async fn count_prompts_in_category(
    state: State<'_, AppState>,
    category_id: String,
) -> Result<i64> {
    state.categories.count_prompts(&category_id).await
}
