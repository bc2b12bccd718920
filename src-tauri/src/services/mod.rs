//! Services module
//!
//! Business logic services that coordinate between commands and repository,
//! plus the pure filtering and aggregation functions they build on.

pub mod analytics;
pub mod categories;
pub mod filter;
pub mod prompts;

pub use analytics::AnalyticsService;
pub use categories::CategoriesService;
pub use filter::{filter_prompts, PromptFilter, SortDirection, SortField};
pub use prompts::PromptsService;
