/// Application name
pub const APP_NAME: &str = "Folio";

/// Base URL of the public demo REST API
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Request timeout for every remote call, in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Albums shown per gallery page
pub const ALBUMS_PER_PAGE: usize = 10;

/// Posts shown per blog list page
pub const POSTS_PER_PAGE: usize = 5;

/// Photos shown when an album is opened
pub const PHOTO_PREVIEW_LIMIT: usize = 5;

/// Post bodies longer than this are truncated in the blog list
pub const EXCERPT_CHARS: usize = 100;

/// Key under which the like map is persisted
pub const LIKES_STORAGE_KEY: &str = "postLikes";

/// Author selector value meaning "no filter"
pub const ALL_AUTHORS: &str = "all";
