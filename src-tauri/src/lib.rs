//! PromptDeck library
//!
//! This library exposes the core functionality of PromptDeck for testing
//! and potential future library use.

pub mod app;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod services;
pub mod ui;
