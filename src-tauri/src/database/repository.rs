//! Repository layer for database operations
//!
//! CRUD operations for categories and prompts. This is the whole data
//! boundary: select-all with ordering, select-by-id, insert returning
//! the created row, partial update-by-id, and delete-by-id.

use super::models::*;
use crate::error::{AppError, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ===== Categories =====

    /// Create a new category, appending it to the end of the sort order
    pub async fn create_category(&self, req: CreateCategoryRequest) -> Result<Category> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let next_order: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(sort_order) + 1, 0) FROM categories")
                .fetch_one(&self.pool)
                .await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, description, color, sort_order, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.color)
        .bind(next_order)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created category: {}", id);
        Ok(category)
    }

    /// Get a category by ID; a missing row is "nothing selected", not an error
    pub async fn get_category(&self, id: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    /// List all categories in user-defined sort order
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT * FROM categories ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Update a category (partial field set)
    pub async fn update_category(&self, req: UpdateCategoryRequest) -> Result<Category> {
        let now = Utc::now();

        // Build dynamic update query
        let mut query = "UPDATE categories SET updated_at = ?".to_string();
        let mut params: Vec<String> = vec![now.to_rfc3339()];

        if let Some(name) = &req.name {
            query.push_str(", name = ?");
            params.push(name.clone());
        }

        if let Some(description) = &req.description {
            query.push_str(", description = ?");
            params.push(description.clone());
        }

        if let Some(color) = &req.color {
            query.push_str(", color = ?");
            params.push(color.clone());
        }

        query.push_str(" WHERE id = ?");
        params.push(req.id.clone());

        let mut q = sqlx::query(&query);
        for param in &params {
            q = q.bind(param);
        }

        let rows_affected = q.execute(&self.pool).await?.rows_affected();

        if rows_affected == 0 {
            return Err(AppError::CategoryNotFound(req.id));
        }

        self.get_category(&req.id)
            .await?
            .ok_or(AppError::CategoryNotFound(req.id))
    }

    /// Set a category's sort position directly (used by reorder)
    pub async fn set_category_sort_order(&self, id: &str, sort_order: i64) -> Result<()> {
        let rows = sqlx::query("UPDATE categories SET sort_order = ? WHERE id = ?")
            .bind(sort_order)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::CategoryNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Delete a category.
    ///
    /// Prompts referencing it revert to uncategorized via the
    /// ON DELETE SET NULL foreign key; they are never deleted with it.
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::CategoryNotFound(id.to_string()));
        }

        tracing::debug!("Deleted category: {}", id);
        Ok(())
    }

    // ===== Prompts =====

    /// Create a new prompt
    pub async fn create_prompt(&self, req: CreatePromptRequest) -> Result<Prompt> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let next_order: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(sort_order) + 1, 0) FROM prompts")
                .fetch_one(&self.pool)
                .await?;

        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            INSERT INTO prompts
                (id, title, content, description, category_id, is_favorite,
                 usage_count, tags, sort_order, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 0, 0, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.description)
        .bind(&req.category_id)
        .bind(serde_json::to_string(&req.tags)?)
        .bind(next_order)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created prompt: {}", id);
        Ok(prompt)
    }

    /// Get a prompt by ID; a missing row is "nothing selected", not an error
    pub async fn get_prompt(&self, id: &str) -> Result<Option<Prompt>> {
        let prompt = sqlx::query_as::<_, Prompt>("SELECT * FROM prompts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(prompt)
    }

    /// List all prompts, most recently modified first
    pub async fn list_prompts(&self) -> Result<Vec<Prompt>> {
        let prompts = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT * FROM prompts ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    /// List prompts in a specific category, most recently modified first
    pub async fn list_prompts_in_category(&self, category_id: &str) -> Result<Vec<Prompt>> {
        let prompts = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT * FROM prompts WHERE category_id = ? ORDER BY updated_at DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    /// List prompts that have no category
    pub async fn list_uncategorized_prompts(&self) -> Result<Vec<Prompt>> {
        let prompts = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT * FROM prompts WHERE category_id IS NULL ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    /// Count prompts in a category
    pub async fn count_prompts_in_category(&self, category_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prompts WHERE category_id = ?")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Update a prompt (partial field set)
    pub async fn update_prompt(&self, req: UpdatePromptRequest) -> Result<Prompt> {
        let now = Utc::now();

        // Build dynamic update query
        let mut query = "UPDATE prompts SET updated_at = ?".to_string();
        let mut params: Vec<String> = vec![now.to_rfc3339()];

        if let Some(title) = &req.title {
            query.push_str(", title = ?");
            params.push(title.clone());
        }

        if let Some(content) = &req.content {
            query.push_str(", content = ?");
            params.push(content.clone());
        }

        if let Some(description) = &req.description {
            query.push_str(", description = ?");
            params.push(description.clone());
        }

        if let Some(tags) = &req.tags {
            query.push_str(", tags = ?");
            params.push(serde_json::to_string(tags)?);
        }

        query.push_str(" WHERE id = ?");
        params.push(req.id.clone());

        let mut q = sqlx::query(&query);
        for param in &params {
            q = q.bind(param);
        }

        let rows_affected = q.execute(&self.pool).await?.rows_affected();

        if rows_affected == 0 {
            return Err(AppError::PromptNotFound(req.id));
        }

        self.get_prompt(&req.id)
            .await?
            .ok_or(AppError::PromptNotFound(req.id))
    }

    /// Move a prompt to a category, or to uncategorized when None
    pub async fn move_prompt_to_category(
        &self,
        prompt_id: &str,
        category_id: Option<&str>,
    ) -> Result<Prompt> {
        let now = Utc::now();

        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            UPDATE prompts SET category_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(category_id)
        .bind(now)
        .bind(prompt_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::PromptNotFound(prompt_id.to_string()))?;

        Ok(prompt)
    }

    /// Set the favorite flag.
    ///
    /// Does not bump updated_at: favoriting is not an edit and must not
    /// reshuffle the default recently-modified ordering.
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()> {
        let rows = sqlx::query("UPDATE prompts SET is_favorite = ? WHERE id = ?")
            .bind(is_favorite)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::PromptNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Increment the usage counter by exactly 1.
    ///
    /// The counter only ever increases, and only through this call.
    /// Does not bump updated_at.
    pub async fn increment_usage(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("UPDATE prompts SET usage_count = usage_count + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::PromptNotFound(id.to_string()));
        }

        tracing::debug!("Incremented usage count for prompt: {}", id);
        Ok(())
    }

    /// Delete a prompt
    pub async fn delete_prompt(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM prompts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::PromptNotFound(id.to_string()));
        }

        tracing::debug!("Deleted prompt: {}", id);
        Ok(())
    }
}
