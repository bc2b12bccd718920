//! Database models
//!
//! Rust structs representing database entities.
//! All models use serde for serialization to frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named, colored, user-ordered grouping for prompts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    /// Position among categories; reassigned to a contiguous 0..n-1
    /// sequence on reorder
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored reusable text snippet with metadata
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    /// The prompt body
    pub content: String,
    pub description: Option<String>,
    /// Owning category; None means uncategorized, which is a valid state
    pub category_id: Option<String>,
    pub is_favorite: bool,
    /// Incremented by exactly 1 on each explicit copy/use action,
    /// never decremented
    pub usage_count: i64,
    /// Free-text tags, stored as a JSON array column
    #[sqlx(json)]
    pub tags: Vec<String>,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category request.
///
/// Optional fields left as None are stored NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Update category request.
///
/// None means "leave the field unchanged". Sort order changes go
/// through the dedicated reorder operation instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryRequest {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Create prompt request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update prompt request.
///
/// None means "leave the field unchanged". Moving a prompt between
/// categories (including to uncategorized) is a separate operation so
/// that "no category" is never conflated with "category unchanged".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePromptRequest {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}
