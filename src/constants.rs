/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 3001;

/// Default directory holding the two JSON documents
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default base URL the client uses to reach the API
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// File name of the category document inside the data directory
pub const CATEGORIES_FILE: &str = "categories.json";

/// File name of the vote document inside the data directory
pub const VOTES_FILE: &str = "votes.json";

/// Interval between result fetches when polling (5 seconds)
pub const RESULTS_POLL_INTERVAL_SECS: u64 = 5;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when the replacement payload has no `categories` array
pub const ERR_CATEGORIES_NOT_ARRAY: &str = "categories must be an array";

/// Error message for a malformed category in a replacement payload
pub const ERR_INVALID_CATEGORY: &str = "Invalid category structure";

/// Error message for a repeated category id in a replacement payload
pub const ERR_DUPLICATE_CATEGORY_ID: &str = "Duplicate category id";

/// Error message when a vote is missing one of its fields
pub const ERR_VOTE_FIELDS_REQUIRED: &str = "categoryId and candidateName are required";

// =============================================================================
// Response Messages
// =============================================================================

pub const MSG_VOTE_SUBMITTED: &str = "Vote submitted successfully";

pub const MSG_CATEGORIES_UPDATED: &str = "Categories updated successfully";

pub const MSG_HEALTH: &str = "Awards voting API is running";
