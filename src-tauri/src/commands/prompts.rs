//! Prompt-related commands
//!
//! CRUD operations, the filtered list query, and the clipboard copy
//! action that drives the usage counter.

use crate::app::AppState;
use crate::database::{CreatePromptRequest, Prompt, UpdatePromptRequest};
use crate::error::Result;
use crate::services::filter::PromptFilter;
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_clipboard_manager::ClipboardExt;

/// Create a new prompt
#[tauri::command]
pub async fn create_prompt(
    state: State<'_, AppState>,
    title: String,
    content: String,
    description: Option<String>,
    category_id: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<Prompt> {
    let req = CreatePromptRequest {
        title,
        content,
        description,
        category_id,
        tags: tags.unwrap_or_default(),
    };

    state.prompts.create(req).await
}

/// Get a prompt by ID; None means nothing selected
#[tauri::command]
pub async fn get_prompt(state: State<'_, AppState>, id: String) -> Result<Option<Prompt>> {
    state.prompts.get(&id).await
}

/// List all prompts, most recently modified first
#[tauri::command]
pub async fn list_prompts(state: State<'_, AppState>) -> Result<Vec<Prompt>> {
    state.prompts.list().await
}

/// List prompts matching a filter, sorted per its sort spec
#[tauri::command]
pub async fn query_prompts(
    state: State<'_, AppState>,
    filter: PromptFilter,
) -> Result<Vec<Prompt>> {
    state.prompts.query(&filter).await
}

/// Update a prompt; omitted fields are left unchanged
#[tauri::command]
pub async fn update_prompt(
    state: State<'_, AppState>,
    id: String,
    title: Option<String>,
    content: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<Prompt> {
    let req = UpdatePromptRequest {
        id,
        title,
        content,
        description,
        tags,
    };

    state.prompts.update(req).await
}

/// Delete a prompt
#[tauri::command]
pub async fn delete_prompt(state: State<'_, AppState>, id: String) -> Result<()> {
    state.prompts.delete(&id).await
}

/// Move a prompt to a category, or to uncategorized when None
#[tauri::command]
pub async fn move_prompt_to_category(
    state: State<'_, AppState>,
    prompt_id: String,
    category_id: Option<String>,
) -> Result<Prompt> {
    state
        .prompts
        .move_to_category(&prompt_id, category_id.as_deref())
        .await
}

/// Set the favorite flag on a prompt
#[tauri::command]
pub async fn set_prompt_favorite(
    state: State<'_, AppState>,
    id: String,
    is_favorite: bool,
) -> Result<()> {
    state.prompts.set_favorite(&id, is_favorite).await
}

/// Copy a prompt's content to the system clipboard and record the use.
///
/// The usage counter moves by exactly 1, and only through this action.
#[tauri::command]
pub async fn copy_prompt(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
) -> Result<Prompt> {
    tracing::info!("Copying prompt to clipboard: {}", id);

    let prompt = state
        .prompts
        .get(&id)
        .await?
        .ok_or_else(|| crate::error::AppError::PromptNotFound(id.clone()))?;

    app.clipboard()
        .write_text(prompt.content.clone())
        .map_err(|e| crate::error::AppError::Generic(format!("Failed to write clipboard: {}", e)))?;

    state.prompts.increment_usage(&id).await?;

    // Let open windows refresh their cached prompt list
    let _ = app.emit("refresh-prompts", ());

    let updated = state
        .prompts
        .get(&id)
        .await?
        .ok_or(crate::error::AppError::PromptNotFound(id))?;

    Ok(updated)
}

/// List prompts in a specific category
#[tauri::command]
pub async fn list_prompts_in_category(
    state: State<'_, AppState>,
    category_id: String,
) -> Result<Vec<Prompt>> {
    state.prompts.list_in_category(&category_id).await
}

/// List prompts with no category
#[tauri::command]
pub async fn list_uncategorized_prompts(state: State<'_, AppState>) -> Result<Vec<Prompt>> {
    state.prompts.list_uncategorized().await
}
