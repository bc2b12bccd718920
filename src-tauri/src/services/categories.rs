//! Categories service
//!
//! Business logic for category operations, including the full-overwrite
//! reorder that keeps sort positions contiguous.

use crate::config::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::database::{Category, CreateCategoryRequest, Repository, UpdateCategoryRequest};
use crate::error::{AppError, Result};
use futures_util::future::try_join_all;

/// Service for managing categories
#[derive(Clone)]
pub struct CategoriesService {
    repo: Repository,
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation(format!(
            "name exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional(value: Option<String>, max: usize) -> Result<Option<String>> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else if trimmed.len() > max {
                Err(AppError::Validation(format!(
                    "field exceeds maximum length of {} characters",
                    max
                )))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}

impl CategoriesService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a new category at the end of the sort order
    pub async fn create(&self, req: CreateCategoryRequest) -> Result<Category> {
        let req = CreateCategoryRequest {
            name: validate_name(&req.name)?,
            description: normalize_optional(req.description, MAX_DESCRIPTION_LENGTH)?,
            color: normalize_optional(req.color, MAX_TITLE_LENGTH)?,
        };

        tracing::info!("Creating category: {}", req.name);
        let category = self.repo.create_category(req).await?;
        tracing::info!("Category created: {}", category.id);

        Ok(category)
    }

    /// Get a category by ID; None when nothing matches
    pub async fn get(&self, id: &str) -> Result<Option<Category>> {
        self.repo.get_category(id).await
    }

    /// List all categories in user-defined sort order
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.repo.list_categories().await
    }

    /// Update a category (partial field set)
    pub async fn update(&self, req: UpdateCategoryRequest) -> Result<Category> {
        let req = UpdateCategoryRequest {
            id: req.id,
            name: req.name.map(|n| validate_name(&n)).transpose()?,
            description: normalize_optional(req.description, MAX_DESCRIPTION_LENGTH)?,
            color: normalize_optional(req.color, MAX_TITLE_LENGTH)?,
        };

        tracing::debug!("Updating category: {}", req.id);
        self.repo.update_category(req).await
    }

    /// Delete a category; its prompts revert to uncategorized
    pub async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting category: {}", id);
        self.repo.delete_category(id).await
    }

    /// Persist a full reordering of all categories.
    ///
    /// Each category's sort position becomes its 0-based index in the
    /// submitted order. The caller must submit the complete id set.
    ///
    /// Positions are written as independent concurrent per-row updates
    /// with no enclosing transaction: on failure an arbitrary subset of
    /// positions may already be persisted, with no rollback.
    pub async fn reorder(&self, ordered_ids: Vec<String>) -> Result<()> {
        tracing::info!("Reordering {} categories", ordered_ids.len());

        try_join_all(
            ordered_ids
                .iter()
                .enumerate()
                .map(|(index, id)| self.repo.set_category_sort_order(id, index as i64)),
        )
        .await?;

        Ok(())
    }

    /// Count prompts in a category
    pub async fn count_prompts(&self, category_id: &str) -> Result<i64> {
        self.repo.count_prompts_in_category(category_id).await
    }
}
