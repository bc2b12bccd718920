//! Integration tests for PromptDeck
//!
//! These tests verify end-to-end functionality across the service and
//! repository layers: prompt and category lifecycles, filtered queries,
//! category reordering, and the analytics summary.

use promptdeck::database::{
    create_pool, CreateCategoryRequest, CreatePromptRequest, Repository, UpdatePromptRequest,
};
use promptdeck::services::filter::{PromptFilter, SortDirection, SortField};
use promptdeck::services::{AnalyticsService, CategoriesService, PromptsService};
use tempfile::TempDir;

/// Helper to create a test database with schema
async fn create_test_db() -> (Repository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path).await.unwrap();
    let repo = Repository::new(pool);

    (repo, temp_dir)
}

fn prompt_req(title: &str, content: &str) -> CreatePromptRequest {
    CreatePromptRequest {
        title: title.to_string(),
        content: content.to_string(),
        description: None,
        category_id: None,
        tags: vec![],
    }
}

fn category_req(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: None,
        color: None,
    }
}

#[tokio::test]
async fn test_prompt_crud_lifecycle() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo);

    // Create
    let prompt = prompts
        .create(CreatePromptRequest {
            description: Some("Explains code line by line".to_string()),
            tags: vec!["code".to_string(), "review".to_string()],
            ..prompt_req("Code explainer", "Explain this code:")
        })
        .await
        .unwrap();

    assert!(!prompt.id.is_empty());
    assert_eq!(prompt.usage_count, 0);
    assert!(!prompt.is_favorite);

    // Read
    let fetched = prompts.get(&prompt.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Code explainer");
    assert_eq!(fetched.tags, vec!["code", "review"]);

    // Update
    let updated = prompts
        .update(UpdatePromptRequest {
            id: prompt.id.clone(),
            title: Some("Code explainer v2".to_string()),
            content: None,
            description: None,
            tags: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.title, "Code explainer v2");
    assert_eq!(updated.content, "Explain this code:");

    // List
    let all = prompts.list().await.unwrap();
    assert_eq!(all.len(), 1);

    // Delete
    prompts.delete(&prompt.id).await.unwrap();
    assert!(prompts.get(&prompt.id).await.unwrap().is_none());
    assert!(prompts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_prompt_is_nothing_selected() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo);

    let fetched = prompts.get("no-such-id").await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_filtered_query_end_to_end() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo.clone());
    let categories = CategoriesService::new(repo);

    let work = categories.create(category_req("Work")).await.unwrap();

    let p1 = prompts
        .create(CreatePromptRequest {
            category_id: Some(work.id.clone()),
            tags: vec!["email".to_string()],
            ..prompt_req("Email drafting", "Draft a professional email")
        })
        .await
        .unwrap();
    prompts
        .create(prompt_req("Recipe ideas", "Suggest dinner recipes"))
        .await
        .unwrap();

    // Category + search combine with AND
    let filter = PromptFilter {
        search: "email".to_string(),
        category_id: Some(work.id.clone()),
        sort_field: SortField::Title,
        sort_direction: SortDirection::Asc,
        ..Default::default()
    };

    let result = prompts.query(&filter).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, p1.id);

    // Search that matches nothing
    let filter = PromptFilter {
        search: "nonexistent".to_string(),
        ..Default::default()
    };
    assert!(filter.is_search_active());
    assert!(prompts.query(&filter).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_favorite_and_usage_tracking() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo);

    let prompt = prompts.create(prompt_req("Tracked", "body")).await.unwrap();

    prompts.set_favorite(&prompt.id, true).await.unwrap();
    prompts.increment_usage(&prompt.id).await.unwrap();
    prompts.increment_usage(&prompt.id).await.unwrap();

    let fetched = prompts.get(&prompt.id).await.unwrap().unwrap();
    assert!(fetched.is_favorite);
    assert_eq!(fetched.usage_count, 2);

    let filter = PromptFilter {
        favorites_only: true,
        ..Default::default()
    };
    let favorites = prompts.query(&filter).await.unwrap();
    assert_eq!(favorites.len(), 1);
}

#[tokio::test]
async fn test_category_reorder_persists() {
    let (repo, _temp) = create_test_db().await;
    let categories = CategoriesService::new(repo);

    let a = categories.create(category_req("A")).await.unwrap();
    let b = categories.create(category_req("B")).await.unwrap();
    let c = categories.create(category_req("C")).await.unwrap();

    categories
        .reorder(vec![c.id.clone(), a.id.clone(), b.id.clone()])
        .await
        .unwrap();

    let listed = categories.list().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|cat| cat.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);

    let orders: Vec<i64> = listed.iter().map(|cat| cat.sort_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_deleting_category_keeps_prompts() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo.clone());
    let categories = CategoriesService::new(repo);

    let cat = categories.create(category_req("Transient")).await.unwrap();

    for i in 1..=3 {
        prompts
            .create(CreatePromptRequest {
                category_id: Some(cat.id.clone()),
                ..prompt_req(&format!("Prompt {}", i), "body")
            })
            .await
            .unwrap();
    }

    assert_eq!(categories.count_prompts(&cat.id).await.unwrap(), 3);

    categories.delete(&cat.id).await.unwrap();

    // Prompt count unchanged, all reverted to uncategorized
    let all = prompts.list().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|p| p.category_id.is_none()));

    let uncategorized = prompts.list_uncategorized().await.unwrap();
    assert_eq!(uncategorized.len(), 3);
}

#[tokio::test]
async fn test_analytics_summary_end_to_end() {
    let (repo, _temp) = create_test_db().await;
    let prompts = PromptsService::new(repo.clone());
    let categories = CategoriesService::new(repo.clone());
    let analytics = AnalyticsService::new(repo);

    let writing = categories.create(category_req("Writing")).await.unwrap();

    let p1 = prompts
        .create(CreatePromptRequest {
            category_id: Some(writing.id.clone()),
            tags: vec!["x".to_string()],
            ..prompt_req("P1", "body")
        })
        .await
        .unwrap();
    let p2 = prompts
        .create(CreatePromptRequest {
            tags: vec!["y".to_string()],
            ..prompt_req("P2", "body")
        })
        .await
        .unwrap();
    let p3 = prompts
        .create(CreatePromptRequest {
            tags: vec!["x".to_string(), "y".to_string()],
            ..prompt_req("P3", "body")
        })
        .await
        .unwrap();

    for _ in 0..3 {
        prompts.increment_usage(&p1.id).await.unwrap();
    }
    for _ in 0..7 {
        prompts.increment_usage(&p2.id).await.unwrap();
    }
    prompts.increment_usage(&p3.id).await.unwrap();
    prompts.set_favorite(&p2.id, true).await.unwrap();

    let data = analytics.summary().await.unwrap();

    assert_eq!(data.total_prompts, 3);
    assert_eq!(data.total_categories, 1);
    assert_eq!(data.total_favorites, 1);
    assert_eq!(data.total_usage, 11);

    // One bucket per category plus the uncategorized bucket
    let bucket_sum: usize = data.prompts_by_category.iter().map(|c| c.count).sum();
    assert_eq!(bucket_sum, data.total_prompts);
    assert_eq!(data.prompts_by_category.len(), 2);
    assert_eq!(data.prompts_by_category[0].name, "Writing");
    assert_eq!(data.prompts_by_category[0].count, 1);
    assert_eq!(data.prompts_by_category[1].count, 2);

    let top: Vec<&str> = data.top_used.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(top, vec!["P2", "P1", "P3"]);

    // Both tags occur in two prompts each
    assert_eq!(data.tag_distribution.len(), 2);
    assert!(data.tag_distribution.iter().all(|tc| tc.count == 2));

    assert_eq!(data.recently_created.len(), 3);
}
