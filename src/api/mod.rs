//! REST API access for the Treehole backend.
//!
//! This module defines the interface the views talk to, along with the wire
//! models and error type. [`client::PostService`] implements it over HTTP; each
//! operation maps one-to-one onto a backend endpoint with no retry, caching,
//! or timeout policy of its own.

use async_trait::async_trait;

pub mod client;
pub mod models;

pub use client::PostService;
pub use models::{
    AdvancedSearchParams, AdvancedSearchResults, CreatePost, CreateReply, CreatedPost, CreatedReply, Pagination, Post,
    PostList, Reply, ReplyList, SearchLogic, SearchResults, Stats, SyncStatus, TagList, TagPosts,
};

/// Errors raised by API operations.
///
/// Transport and HTTP status failures are passed through from `reqwest`
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Operations exposed by the Treehole REST backend.
///
/// Paths are relative to the API base URL. Paging parameters are 1-based.
#[async_trait]
pub trait TreeholeApi: Send + Sync {
    /// `GET /posts?page&limit`
    async fn get_posts(&self, page: u32, limit: u32) -> Result<PostList, ApiError>;

    /// `GET /posts/{id}`; the backend accepts either the local id or the original id
    async fn get_post(&self, id: &str) -> Result<Post, ApiError>;

    /// `GET /posts/{id}/replies?page&limit`
    async fn get_post_replies(&self, id: &str, page: u32, limit: u32) -> Result<ReplyList, ApiError>;

    /// `POST /posts`; the created post is unwrapped from the `{message, post}` response
    async fn create_post(&self, post: &CreatePost) -> Result<Post, ApiError>;

    /// `POST /posts/{id}/replies`; the created reply is unwrapped from the `{message, reply}` response
    async fn create_reply(&self, post_id: &str, reply: &CreateReply) -> Result<Reply, ApiError>;

    /// `GET /search?q&page&limit`
    async fn search_posts(&self, query: &str, page: u32, limit: u32) -> Result<SearchResults, ApiError>;

    /// `GET /search/advanced?<params>`
    async fn advanced_search(&self, params: &AdvancedSearchParams) -> Result<AdvancedSearchResults, ApiError>;

    /// `GET /tags`
    async fn get_tags(&self) -> Result<TagList, ApiError>;

    /// `GET /tags/{name}/posts?page&limit`
    async fn get_posts_by_tag(&self, tag: &str, page: u32, limit: u32) -> Result<TagPosts, ApiError>;

    /// `GET /stats`
    async fn get_stats(&self) -> Result<Stats, ApiError>;

    /// `GET /sync/status`
    async fn get_sync_status(&self) -> Result<SyncStatus, ApiError>;
}
