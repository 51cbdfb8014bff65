//! Constants used throughout the application
//!
//! This module centralizes titles, user-facing text, and default values.

// Window titles
/// Title used when a route carries no title of its own
pub const DEFAULT_TITLE: &str = "树洞网站";
pub const TITLE_HOME: &str = "Treehole - 首页";
pub const TITLE_SEARCH: &str = "Treehole - 搜索";
pub const TITLE_POST_DETAIL: &str = "Treehole - 帖子详情";
pub const TITLE_SEARCH_RESULTS: &str = "Treehole - 搜索结果";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
/// Environment variable overriding `api.base_url`
pub const ENV_API_BASE_URL: &str = "TREEHOLE_API_URL";

// Success Messages
pub const SUCCESS_POST_CREATED: &str = "✅ Post created";
pub const SUCCESS_REPLY_CREATED: &str = "✅ Reply created";

// Error Messages
pub const ERROR_POST_CREATE_FAILED: &str = "❌ Failed to create post";
pub const ERROR_REPLY_CREATE_FAILED: &str = "❌ Failed to create reply";
pub const ERROR_MISSING_SEARCH_QUERY: &str = "❌ Missing search query: pass q, tag, or an advanced search field";
pub const ERROR_MISSING_POST_ID: &str = "❌ Missing post id";

// View text
pub const EMPTY_POSTS: &str = "暂无帖子";
pub const EMPTY_REPLIES: &str = "暂无回复";
pub const EMPTY_TAGS: &str = "暂无标签";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "treehole.log";
pub const APP_DIR_NAME: &str = "treehole";
