//! Application configuration constants
//!
//! Central location for validation boundaries and list limits used
//! throughout the application.

// ===== Field Validation Limits =====

/// Maximum length for a prompt or category title/name
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a prompt body.
/// Large enough for any realistic prompt, small enough to keep the
/// single-row read/write path cheap.
pub const MAX_CONTENT_LENGTH: usize = 100_000;

/// Maximum length for an optional description field
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// ===== Tag Limits =====

/// Maximum number of tags on a single prompt
pub const MAX_TAGS_PER_PROMPT: usize = 20;

/// Maximum length of a single tag
pub const MAX_TAG_LENGTH: usize = 50;

// ===== Analytics Limits =====

/// Number of entries in the top-used prompt list
pub const TOP_USED_LIMIT: usize = 5;

/// Number of entries in the recently-created prompt list
pub const RECENT_PROMPTS_LIMIT: usize = 5;

/// Number of entries in the tag frequency histogram
pub const TAG_DISTRIBUTION_LIMIT: usize = 10;

// ===== Uncategorized Bucket =====

/// Display name for the synthetic bucket holding prompts with no category
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Display color for the uncategorized bucket
pub const UNCATEGORIZED_COLOR: &str = "#6b7280";
