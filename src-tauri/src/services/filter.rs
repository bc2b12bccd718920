//! Prompt list filtering and sorting
//!
//! Pure functions over the in-memory prompt collection. The frontend
//! holds a single filter specification; every predicate is applied
//! conjunctively and the surviving prompts are sorted by one of four
//! fields in either direction.

use crate::database::Prompt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a prompt list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
    UsageCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Filter specification for the prompt list view.
///
/// Predicates are AND-combined; the tag predicate is OR within its own
/// set (a prompt matches if it carries any one of the filter tags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptFilter {
    pub search: String,
    pub category_id: Option<String>,
    pub favorites_only: bool,
    pub tags: Vec<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for PromptFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: None,
            favorites_only: false,
            tags: Vec::new(),
            sort_field: SortField::UpdatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl PromptFilter {
    /// Whether a free-text search is active.
    ///
    /// Distinguishes "nothing yet" (empty state with a create action)
    /// from "no results" (empty state without one).
    pub fn is_search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// Whether a single prompt satisfies every active predicate
fn matches(prompt: &Prompt, filter: &PromptFilter) -> bool {
    if let Some(category_id) = &filter.category_id {
        if prompt.category_id.as_deref() != Some(category_id.as_str()) {
            return false;
        }
    }

    if filter.favorites_only && !prompt.is_favorite {
        return false;
    }

    if !filter.tags.is_empty() && !filter.tags.iter().any(|t| prompt.tags.contains(t)) {
        return false;
    }

    if filter.is_search_active() {
        let query = filter.search.trim().to_lowercase();
        let in_description = prompt
            .description
            .as_ref()
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false);
        let in_tags = prompt.tags.iter().any(|t| t.to_lowercase().contains(&query));

        if !(prompt.title.to_lowercase().contains(&query)
            || prompt.content.to_lowercase().contains(&query)
            || in_description
            || in_tags)
        {
            return false;
        }
    }

    true
}

fn compare(a: &Prompt, b: &Prompt, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::UsageCount => a.usage_count.cmp(&b.usage_count),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Apply the filter and sort to the full prompt collection.
///
/// The sort is stable: prompts that compare equal keep their input
/// order regardless of direction.
pub fn filter_prompts(prompts: &[Prompt], filter: &PromptFilter) -> Vec<Prompt> {
    let mut result: Vec<Prompt> = prompts
        .iter()
        .filter(|p| matches(p, filter))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ord = compare(a, b, filter.sort_field);
        match filter.sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    result
}
