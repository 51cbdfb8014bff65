//! HTTP implementation of the Treehole API.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::models::{
    AdvancedSearchParams, AdvancedSearchResults, CreatePost, CreateReply, CreatedPost, CreatedReply, Post, PostList,
    Reply, ReplyList, SearchResults, Stats, SyncStatus, TagList, TagPosts,
};
use super::{ApiError, TreeholeApi};

#[derive(Serialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    page: u32,
    limit: u32,
}

/// Thin wrapper over the backend's REST endpoints
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PostService {
    http_client: reqwest::Client,
    base_url: String,
}

impl PostService {
    /// Create a service for the API rooted at `base_url` (e.g. `http://localhost:8080/api/v1`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a service that sends requests through an existing client.
    pub fn with_client(http_client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            http_client,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.http_client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

// Path parameters may hold non-ASCII tag names or original ids.
fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

#[async_trait]
impl TreeholeApi for PostService {
    async fn get_posts(&self, page: u32, limit: u32) -> Result<PostList, ApiError> {
        Self::send(self.request(Method::GET, "/posts").query(&PageQuery { page, limit })).await
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        Self::send(self.request(Method::GET, &format!("/posts/{}", segment(id)))).await
    }

    async fn get_post_replies(&self, id: &str, page: u32, limit: u32) -> Result<ReplyList, ApiError> {
        let path = format!("/posts/{}/replies", segment(id));
        Self::send(self.request(Method::GET, &path).query(&PageQuery { page, limit })).await
    }

    async fn create_post(&self, post: &CreatePost) -> Result<Post, ApiError> {
        let created: CreatedPost = Self::send(self.request(Method::POST, "/posts").json(post)).await?;
        log::debug!("{}", created.message);
        Ok(created.post)
    }

    async fn create_reply(&self, post_id: &str, reply: &CreateReply) -> Result<Reply, ApiError> {
        let path = format!("/posts/{}/replies", segment(post_id));
        let created: CreatedReply = Self::send(self.request(Method::POST, &path).json(reply)).await?;
        log::debug!("{}", created.message);
        Ok(created.reply)
    }

    async fn search_posts(&self, query: &str, page: u32, limit: u32) -> Result<SearchResults, ApiError> {
        let query = SearchQuery { q: query, page, limit };
        Self::send(self.request(Method::GET, "/search").query(&query)).await
    }

    async fn advanced_search(&self, params: &AdvancedSearchParams) -> Result<AdvancedSearchResults, ApiError> {
        Self::send(self.request(Method::GET, "/search/advanced").query(params)).await
    }

    async fn get_tags(&self) -> Result<TagList, ApiError> {
        Self::send(self.request(Method::GET, "/tags")).await
    }

    async fn get_posts_by_tag(&self, tag: &str, page: u32, limit: u32) -> Result<TagPosts, ApiError> {
        let path = format!("/tags/{}/posts", segment(tag));
        Self::send(self.request(Method::GET, &path).query(&PageQuery { page, limit })).await
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        Self::send(self.request(Method::GET, "/stats")).await
    }

    async fn get_sync_status(&self) -> Result<SyncStatus, ApiError> {
        Self::send(self.request(Method::GET, "/sync/status")).await
    }
}
