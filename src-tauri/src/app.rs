//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::database::{create_pool, Repository};
use crate::error::Result;
use crate::services::{AnalyticsService, CategoriesService, PromptsService};
use crate::ui::UiState;
use std::sync::Mutex;
use tauri::{App, Manager};

/// Central application state holding all services
pub struct AppState {
    pub app_data_dir: std::path::PathBuf,
    pub prompts: PromptsService,
    pub categories: CategoriesService,
    pub analytics: AnalyticsService,
    pub ui: Mutex<UiState>,
}

impl AppState {
    pub fn new(app_data_dir: std::path::PathBuf, repo: Repository) -> Self {
        Self {
            app_data_dir,
            prompts: PromptsService::new(repo.clone()),
            categories: CategoriesService::new(repo.clone()),
            analytics: AnalyticsService::new(repo),
            ui: Mutex::new(UiState::default()),
        }
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| crate::error::AppError::Generic(format!("Failed to get app data dir: {}", e)))?;

    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(&app_data_dir)?;

    let db_path = app_data_dir.join("promptdeck.db");
    let pool = tauri::async_runtime::block_on(create_pool(&db_path))?;
    let repo = Repository::new(pool);

    let state = AppState::new(app_data_dir, repo);
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
