// PromptDeck - desktop prompt library
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;
mod config;
mod database;
mod error;
mod services;
mod ui;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptdeck=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PromptDeck application");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            // Prompts
            commands::create_prompt,
            commands::get_prompt,
            commands::list_prompts,
            commands::query_prompts,
            commands::update_prompt,
            commands::delete_prompt,
            commands::move_prompt_to_category,
            commands::set_prompt_favorite,
            commands::copy_prompt,
            commands::list_prompts_in_category,
            commands::list_uncategorized_prompts,
            // Categories
            commands::create_category,
            commands::get_category,
            commands::list_categories,
            commands::update_category,
            commands::delete_category,
            commands::reorder_categories,
            commands::count_prompts_in_category,
            // Analytics
            commands::get_analytics,
            // UI state
            commands::get_ui_state,
            commands::toggle_sidebar,
            commands::set_sidebar_open,
            commands::set_search,
            commands::set_category_filter,
            commands::set_favorites_only,
            commands::toggle_filter_tag,
            commands::set_sort,
            commands::reset_filter,
            commands::set_view_mode,
            commands::open_prompt_dialog,
            commands::close_prompt_dialog,
            commands::open_category_dialog,
            commands::close_category_dialog,
            commands::open_prompt_detail,
            commands::close_prompt_detail,
            commands::set_command_palette_open,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
