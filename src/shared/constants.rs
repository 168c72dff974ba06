/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Maximum username length
pub const USERNAME_MAX_LEN: u64 = 150;

/// Maximum email length
pub const EMAIL_MAX_LEN: u64 = 254;

/// Maximum first/last name length
pub const PERSON_NAME_MAX_LEN: u64 = 150;

/// Maximum category/genre/title name length
pub const NAME_MAX_LEN: u64 = 256;

/// Maximum slug length
pub const SLUG_MAX_LEN: u64 = 50;

/// Maximum comment text length
pub const COMMENT_TEXT_MAX_LEN: u64 = 200;

/// Review score bounds (inclusive)
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 10;

/// Username reserved for the profile endpoint (`/v1/users/me/`)
pub const RESERVED_USERNAME: &str = "me";
