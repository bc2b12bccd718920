//! Analytics command
//!
//! Produces the summary view over prompts and categories.

use crate::app::AppState;
use crate::error::Result;
use crate::services::analytics::AnalyticsData;
use tauri::State;

/// Get the analytics summary.
///
/// Fails as a whole if either underlying fetch fails; there is no
/// partial result.
#[tauri::command]
pub async fn get_analytics(state: State<'_, AppState>) -> Result<AnalyticsData> {
    state.analytics.summary().await
}
