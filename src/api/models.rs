//! Wire models for the Treehole REST API.
//!
//! Field names follow the backend's JSON. Every response struct defaults missing
//! fields so that older or trimmed responses still deserialize. Timestamps are
//! kept as the strings the backend sends; format them with
//! [`crate::utils::datetime::DateFormatter`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A forum post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub original_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Author openid
    pub author_id: String,
    pub ip: String,
    pub like_num: i64,
    pub created_at: String,
    pub updated_at: String,
    pub reply_count: i64,
    pub view_count: i64,
    pub radio_group: String,
    pub campus_group: String,
    pub region: String,
    pub price: String,
    pub wechat: String,
    /// JSON-encoded list of image URLs
    pub images: String,
    pub cover: String,
    /// One of normal, deleted, complaint, chosen, hot
    pub state: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Reply>>,
}

/// A reply to a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reply {
    pub id: u64,
    pub post_id: u64,
    pub original_id: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
    /// Openid of the user replied to
    pub apply_to: String,
    pub level: i64,
    /// Id of the reply this one answers, 0 for the post itself
    pub parent_id: i64,
    pub like_num: i64,
    pub images: String,
    pub tag: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostList {
    #[serde(deserialize_with = "null_as_empty")]
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyList {
    #[serde(deserialize_with = "null_as_empty")]
    pub replies: Vec<Reply>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    #[serde(deserialize_with = "null_as_empty")]
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    pub query: String,
    /// Keywords the backend extracted from the query
    #[serde(deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSearchResults {
    #[serde(deserialize_with = "null_as_empty")]
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    /// Echo of the search parameters, as the backend understood them
    pub search_params: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagList {
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPosts {
    #[serde(deserialize_with = "null_as_empty")]
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    pub tag: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_posts: u64,
    pub total_replies: u64,
    pub total_tags: u64,
    pub latest_post: Option<Post>,
}

/// Outcome of the backend's last mirror synchronization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncStatus {
    pub id: u64,
    pub last_sync_time: String,
    pub last_post_id: String,
    pub total_posts: u64,
    pub total_replies: u64,
    /// One of success, error, running
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: String,
}

/// Response of `POST /posts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedPost {
    pub message: String,
    pub post: Post,
}

/// Response of `POST /posts/{id}/replies`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedReply {
    pub message: String,
    pub reply: Reply,
}

/// Body of `POST /posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub username: String,
}

/// Body of `POST /posts/{id}/replies`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReply {
    pub content: String,
    pub username: String,
    /// Reply being answered, 0 to answer the post itself
    #[serde(default)]
    pub parent_id: i64,
}

/// How advanced search criteria combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchLogic {
    #[default]
    And,
    Or,
}

impl std::str::FromStr for SearchLogic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(format!("unknown search logic '{}', expected 'and' or 'or'", other)),
        }
    }
}

/// Query parameters of `GET /search/advanced`. Unset fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    /// Matches posts having a reply with this content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<SearchLogic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AdvancedSearchParams {
    /// Build parameters from a location's query map, ignoring blank values and unknown keys.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            query
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let number = |key: &str| text(key).and_then(|v| v.parse().ok());

        Self {
            title: text("title"),
            content: text("content"),
            author: text("author"),
            author_id: text("author_id"),
            post_id: text("post_id"),
            original_id: text("original_id"),
            comment: text("comment"),
            tag: text("tag"),
            state: text("state"),
            radio_group: text("radio_group"),
            logic: text("logic").and_then(|v| v.parse().ok()),
            page: number("page"),
            limit: number("limit"),
        }
    }

    /// True when at least one criterion other than `tag` is set.
    ///
    /// Paging and logic are not criteria.
    pub fn has_criteria_besides_tag(&self) -> bool {
        [
            &self.title,
            &self.content,
            &self.author,
            &self.author_id,
            &self.post_id,
            &self.original_id,
            &self.comment,
            &self.state,
            &self.radio_group,
        ]
        .iter()
        .any(|field| field.is_some())
    }
}

// The backend encodes empty Go slices as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
