//! Prompts service
//!
//! High-level business logic for prompt operations: input validation
//! and normalization in front of the repository, plus the filtered
//! list query used by the main view.

use crate::config::{
    MAX_CONTENT_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_TAGS_PER_PROMPT, MAX_TAG_LENGTH,
    MAX_TITLE_LENGTH,
};
use crate::database::{CreatePromptRequest, Prompt, Repository, UpdatePromptRequest};
use crate::error::{AppError, Result};
use crate::services::filter::{filter_prompts, PromptFilter};

/// Service for managing prompts
#[derive(Clone)]
pub struct PromptsService {
    repo: Repository,
}

/// Reject an empty or oversized required text field before any SQL runs
fn validate_required(field: &str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    if trimmed.len() > max {
        return Err(AppError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field, coalescing blank input to None (stored NULL)
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

/// Trim tags, drop blanks and duplicates, enforce limits
fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        if tag.len() > MAX_TAG_LENGTH {
            return Err(AppError::Validation(format!(
                "tag exceeds maximum length of {} characters",
                MAX_TAG_LENGTH
            )));
        }
        normalized.push(tag);
    }
    if normalized.len() > MAX_TAGS_PER_PROMPT {
        return Err(AppError::Validation(format!(
            "a prompt may carry at most {} tags",
            MAX_TAGS_PER_PROMPT
        )));
    }
    Ok(normalized)
}

impl PromptsService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a new prompt
    pub async fn create(&self, req: CreatePromptRequest) -> Result<Prompt> {
        let req = CreatePromptRequest {
            title: validate_required("title", &req.title, MAX_TITLE_LENGTH)?,
            content: validate_required("content", &req.content, MAX_CONTENT_LENGTH)?,
            description: normalize_optional(req.description, MAX_DESCRIPTION_LENGTH)?,
            category_id: req.category_id,
            tags: normalize_tags(req.tags)?,
        };

        tracing::info!("Creating prompt: {}", req.title);
        let prompt = self.repo.create_prompt(req).await?;
        tracing::info!("Prompt created: {}", prompt.id);

        Ok(prompt)
    }

    /// Get a prompt by ID; None when nothing matches
    pub async fn get(&self, id: &str) -> Result<Option<Prompt>> {
        self.repo.get_prompt(id).await
    }

    /// List all prompts, most recently modified first
    pub async fn list(&self) -> Result<Vec<Prompt>> {
        self.repo.list_prompts().await
    }

    /// List prompts matching a filter, sorted per its sort spec
    pub async fn query(&self, filter: &PromptFilter) -> Result<Vec<Prompt>> {
        let prompts = self.repo.list_prompts().await?;
        Ok(filter_prompts(&prompts, filter))
    }

    /// Update a prompt (partial field set; None leaves a field unchanged)
    pub async fn update(&self, req: UpdatePromptRequest) -> Result<Prompt> {
        let req = UpdatePromptRequest {
            id: req.id,
            title: req
                .title
                .map(|t| validate_required("title", &t, MAX_TITLE_LENGTH))
                .transpose()?,
            content: req
                .content
                .map(|c| validate_required("content", &c, MAX_CONTENT_LENGTH))
                .transpose()?,
            description: normalize_optional(req.description, MAX_DESCRIPTION_LENGTH)?,
            tags: req.tags.map(normalize_tags).transpose()?,
        };

        tracing::debug!("Updating prompt: {}", req.id);
        self.repo.update_prompt(req).await
    }

    /// Move a prompt to a category, or to uncategorized when None
    pub async fn move_to_category(
        &self,
        prompt_id: &str,
        category_id: Option<&str>,
    ) -> Result<Prompt> {
        tracing::debug!("Moving prompt {} to category {:?}", prompt_id, category_id);
        self.repo.move_prompt_to_category(prompt_id, category_id).await
    }

    /// Set the favorite flag
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<()> {
        self.repo.set_favorite(id, is_favorite).await
    }

    /// Record one explicit use/copy of a prompt
    pub async fn increment_usage(&self, id: &str) -> Result<()> {
        self.repo.increment_usage(id).await
    }

    /// Delete a prompt
    pub async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting prompt: {}", id);
        self.repo.delete_prompt(id).await
    }

    /// List prompts in a specific category
    pub async fn list_in_category(&self, category_id: &str) -> Result<Vec<Prompt>> {
        self.repo.list_prompts_in_category(category_id).await
    }

    /// List prompts with no category
    pub async fn list_uncategorized(&self) -> Result<Vec<Prompt>> {
        self.repo.list_uncategorized_prompts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::initialize_database;
    use crate::services::filter::{SortDirection, SortField};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_service() -> PromptsService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        PromptsService::new(Repository::new(pool))
    }

    fn req(title: &str, content: &str) -> CreatePromptRequest {
        CreatePromptRequest {
            title: title.to_string(),
            content: content.to_string(),
            description: None,
            category_id: None,
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_normalizes() {
        let service = create_test_service().await;

        let prompt = service
            .create(CreatePromptRequest {
                title: "  Padded  ".to_string(),
                content: "body".to_string(),
                description: Some("   ".to_string()),
                category_id: None,
                tags: vec![
                    " x ".to_string(),
                    "".to_string(),
                    "x".to_string(),
                    "y".to_string(),
                ],
            })
            .await
            .unwrap();

        assert_eq!(prompt.title, "Padded");
        // Blank description coalesces to NULL
        assert!(prompt.description.is_none());
        // Tags trimmed, blanks and duplicates dropped
        assert_eq!(prompt.tags, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let service = create_test_service().await;

        let result = service.create(req("   ", "content")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let service = create_test_service().await;

        let result = service.create(req("title", "")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_too_many_tags_rejected() {
        let service = create_test_service().await;

        let tags: Vec<String> = (0..=MAX_TAGS_PER_PROMPT).map(|i| format!("t{}", i)).collect();
        let result = service
            .create(CreatePromptRequest {
                tags,
                ..req("title", "content")
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let service = create_test_service().await;

        let prompt = service.create(req("Fine", "content")).await.unwrap();

        let result = service
            .update(UpdatePromptRequest {
                id: prompt.id,
                title: Some("  ".to_string()),
                content: None,
                description: None,
                tags: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_query_applies_filter() {
        let service = create_test_service().await;

        let kept = service
            .create(CreatePromptRequest {
                tags: vec!["rust".to_string()],
                ..req("Rust helper", "fn main")
            })
            .await
            .unwrap();
        service.create(req("Unrelated", "nothing here")).await.unwrap();

        let filter = PromptFilter {
            tags: vec!["rust".to_string()],
            sort_field: SortField::Title,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };

        let result = service.query(&filter).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_usage_counter_only_increases_by_one() {
        let service = create_test_service().await;

        let prompt = service.create(req("Counted", "content")).await.unwrap();

        for _ in 0..3 {
            service.increment_usage(&prompt.id).await.unwrap();
        }

        let fetched = service.get(&prompt.id).await.unwrap().unwrap();
        assert_eq!(fetched.usage_count, 3);
    }
}
