//! Analytics service
//!
//! Aggregated statistics over the prompt and category collections.
//! The aggregation itself is a pure function of the two input slices;
//! the service only supplies the data. If either source fetch fails,
//! the whole aggregation fails — there are no partial results.

use crate::config::{
    RECENT_PROMPTS_LIMIT, TAG_DISTRIBUTION_LIMIT, TOP_USED_LIMIT, UNCATEGORIZED_COLOR,
    UNCATEGORIZED_NAME,
};
use crate::database::{Category, Prompt, Repository};
use crate::error::Result;
use serde::Serialize;

/// Prompt count for one category bucket
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    pub color: Option<String>,
}

/// One entry in the top-used list
#[derive(Debug, Clone, Serialize)]
pub struct TopUsedEntry {
    pub title: String,
    pub usage_count: i64,
}

/// One entry in the tag frequency histogram
#[derive(Debug, Clone, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// The analytics summary view
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsData {
    pub total_prompts: usize,
    pub total_categories: usize,
    pub total_favorites: usize,
    pub total_usage: i64,
    pub prompts_by_category: Vec<CategoryCount>,
    pub top_used: Vec<TopUsedEntry>,
    pub recently_created: Vec<Prompt>,
    pub tag_distribution: Vec<TagCount>,
}

/// Compute the analytics summary.
///
/// `prompts` is expected in upstream order (newest first); the
/// recently-created slice is simply its head. `categories` is expected
/// in category sort order, which the per-category counts preserve.
pub fn compute_analytics(prompts: &[Prompt], categories: &[Category]) -> AnalyticsData {
    // Per-category counts, with a synthetic uncategorized bucket
    // appended only when it is non-empty
    let mut prompts_by_category: Vec<CategoryCount> = categories
        .iter()
        .map(|cat| CategoryCount {
            name: cat.name.clone(),
            count: prompts
                .iter()
                .filter(|p| p.category_id.as_deref() == Some(cat.id.as_str()))
                .count(),
            color: cat.color.clone(),
        })
        .collect();

    let uncategorized = prompts.iter().filter(|p| p.category_id.is_none()).count();
    if uncategorized > 0 {
        prompts_by_category.push(CategoryCount {
            name: UNCATEGORIZED_NAME.to_string(),
            count: uncategorized,
            color: Some(UNCATEGORIZED_COLOR.to_string()),
        });
    }

    // Top used, descending; stable sort keeps input order on ties
    let mut by_usage: Vec<&Prompt> = prompts.iter().collect();
    by_usage.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    let top_used = by_usage
        .iter()
        .take(TOP_USED_LIMIT)
        .map(|p| TopUsedEntry {
            title: p.title.clone(),
            usage_count: p.usage_count,
        })
        .collect();

    // Tag frequency: each prompt contributes at most 1 per tag, even if
    // it lists the same tag twice. First-seen order breaks count ties.
    let mut tag_counts: Vec<TagCount> = Vec::new();
    for prompt in prompts {
        let mut seen: Vec<&str> = Vec::new();
        for tag in &prompt.tags {
            if seen.contains(&tag.as_str()) {
                continue;
            }
            seen.push(tag);

            match tag_counts.iter_mut().find(|tc| tc.tag == *tag) {
                Some(tc) => tc.count += 1,
                None => tag_counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }
    tag_counts.sort_by(|a, b| b.count.cmp(&a.count));
    tag_counts.truncate(TAG_DISTRIBUTION_LIMIT);

    AnalyticsData {
        total_prompts: prompts.len(),
        total_categories: categories.len(),
        total_favorites: prompts.iter().filter(|p| p.is_favorite).count(),
        total_usage: prompts.iter().map(|p| p.usage_count).sum(),
        prompts_by_category,
        top_used,
        recently_created: prompts.iter().take(RECENT_PROMPTS_LIMIT).cloned().collect(),
        tag_distribution: tag_counts,
    }
}

/// Service producing the analytics summary
#[derive(Clone)]
pub struct AnalyticsService {
    repo: Repository,
}

impl AnalyticsService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Fetch both collections and aggregate them
    pub async fn summary(&self) -> Result<AnalyticsData> {
        let (prompts, categories) =
            tokio::try_join!(self.repo.list_prompts(), self.repo.list_categories())?;

        Ok(compute_analytics(&prompts, &categories))
    }
}
