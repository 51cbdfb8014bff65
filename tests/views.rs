use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use treehole::api::*;
use treehole::app::App;
use treehole::config::Config;
use treehole::router::TitleSink;
use treehole::utils::datetime::{DateFormatter, FixedClock};

/// In-memory backend that records each call.
#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn post(id: u64, title: &str, created_at: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: "求资料".to_string(),
        author: "匿名".to_string(),
        like_num: 3,
        created_at: created_at.to_string(),
        reply_count: 2,
        view_count: 40,
        tag: "学习".to_string(),
        ..Default::default()
    }
}

fn page(page: u32, limit: u32, total: u64) -> Pagination {
    Pagination {
        page,
        limit,
        total,
        pages: total.div_ceil(limit as u64),
    }
}

#[async_trait]
impl TreeholeApi for FakeApi {
    async fn get_posts(&self, p: u32, limit: u32) -> Result<PostList, ApiError> {
        self.record(format!("get_posts {} {}", p, limit));
        Ok(PostList {
            posts: vec![post(1, "期末复习", "2024-01-01T10:00:00")],
            pagination: page(p, limit, 6),
        })
    }

    async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.record(format!("get_post {}", id));
        Ok(post(id.parse().unwrap_or(0), "期末复习", "2024-01-01T10:00:00"))
    }

    async fn get_post_replies(&self, id: &str, p: u32, limit: u32) -> Result<ReplyList, ApiError> {
        self.record(format!("get_post_replies {} {} {}", id, p, limit));
        Ok(ReplyList {
            replies: vec![
                Reply {
                    id: 7,
                    content: "同求".to_string(),
                    author: "路人".to_string(),
                    created_at: "2024-01-01T11:00:00".to_string(),
                    ..Default::default()
                },
                Reply {
                    id: 8,
                    content: "+1".to_string(),
                    author: "小红".to_string(),
                    parent_id: 7,
                    created_at: "2024-01-01T11:58:00".to_string(),
                    ..Default::default()
                },
            ],
            pagination: page(p, limit, 2),
        })
    }

    async fn create_post(&self, data: &CreatePost) -> Result<Post, ApiError> {
        self.record(format!("create_post {}", data.title));
        Ok(post(100, &data.title, "2024-01-01T12:00:00"))
    }

    async fn create_reply(&self, post_id: &str, data: &CreateReply) -> Result<Reply, ApiError> {
        self.record(format!("create_reply {} {}", post_id, data.parent_id));
        Ok(Reply {
            id: 9,
            parent_id: data.parent_id,
            ..Default::default()
        })
    }

    async fn search_posts(&self, query: &str, p: u32, limit: u32) -> Result<SearchResults, ApiError> {
        self.record(format!("search_posts {} {} {}", query, p, limit));
        Ok(SearchResults {
            posts: vec![post(2, "考试周", "2023-12-25T09:30:00")],
            pagination: page(p, limit, 1),
            query: query.to_string(),
            keywords: vec![query.to_string()],
        })
    }

    async fn advanced_search(&self, params: &AdvancedSearchParams) -> Result<AdvancedSearchResults, ApiError> {
        self.record(format!(
            "advanced_search author={:?} tag={:?} page={:?} limit={:?}",
            params.author, params.tag, params.page, params.limit
        ));
        let mut search_params = std::collections::HashMap::new();
        if let Some(author) = &params.author {
            search_params.insert("author".to_string(), author.clone());
        }
        search_params.insert("title".to_string(), String::new());
        Ok(AdvancedSearchResults {
            posts: Vec::new(),
            pagination: page(1, 20, 0),
            search_params,
        })
    }

    async fn get_tags(&self) -> Result<TagList, ApiError> {
        self.record("get_tags".to_string());
        Ok(TagList {
            tags: vec!["学习".to_string(), "校园".to_string()],
        })
    }

    async fn get_posts_by_tag(&self, tag: &str, p: u32, limit: u32) -> Result<TagPosts, ApiError> {
        self.record(format!("get_posts_by_tag {} {} {}", tag, p, limit));
        Ok(TagPosts {
            posts: vec![post(3, "新生指南", "2024-01-01T11:59:40")],
            pagination: page(p, limit, 1),
            tag: tag.to_string(),
        })
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.record("get_stats".to_string());
        Ok(Stats {
            total_posts: 120,
            total_replies: 900,
            total_tags: 8,
            latest_post: Some(post(120, "最新", "2024-01-01T10:00:00")),
        })
    }

    async fn get_sync_status(&self) -> Result<SyncStatus, ApiError> {
        self.record("get_sync_status".to_string());
        Ok(SyncStatus {
            last_sync_time: "2024-01-01T11:30:00".to_string(),
            total_posts: 10,
            total_replies: 30,
            status: "error".to_string(),
            error_message: Some("timeout".to_string()),
            ..Default::default()
        })
    }
}

#[derive(Default)]
struct RecordingTitle {
    titles: Mutex<Vec<String>>,
}

impl TitleSink for RecordingTitle {
    fn set_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }
}

struct Harness {
    app: App,
    api: Arc<FakeApi>,
    titles: Arc<RecordingTitle>,
}

fn harness(page_size: u32) -> Harness {
    let mut config = Config::default();
    config.api.page_size = page_size;

    let api = Arc::new(FakeApi::default());
    let titles = Arc::new(RecordingTitle::default());
    let formatter = DateFormatter::new(Arc::new(FixedClock::parse("2024-01-01T12:00:00").unwrap()));
    let app = App::new(&config, api.clone(), formatter, titles.clone());

    Harness { app, api, titles }
}

#[tokio::test]
async fn test_home_view() {
    let mut h = harness(20);
    let out = h.app.open("/").await.unwrap();

    assert!(out.contains("共 120 条帖子 · 900 条回复 · 8 个标签"), "{}", out);
    assert!(out.contains("最新发布: 2小时前"), "{}", out);
    assert!(out.contains("[#1] 期末复习  #学习"), "{}", out);
    assert!(out.contains("匿名 · 今天 10:00 · 2 回复 · 40 浏览 · 3 赞"), "{}", out);
    assert!(out.contains("→ /post/1"), "{}", out);
    assert!(out.contains("第 1/1 页 · 共 6 条"), "{}", out);
    assert_eq!(h.api.calls(), vec!["get_stats", "get_posts 1 20"]);
    assert_eq!(*h.titles.titles.lock().unwrap(), vec!["Treehole - 首页".to_string()]);
}

#[tokio::test]
async fn test_home_view_pages_with_configured_size() {
    let mut h = harness(5);
    let out = h.app.open("/?page=2").await.unwrap();

    assert_eq!(h.api.calls(), vec!["get_stats", "get_posts 2 5"]);
    assert!(out.contains("第 2/2 页 · 共 6 条"), "{}", out);
}

#[tokio::test]
async fn test_invalid_page_falls_back_to_first() {
    let mut h = harness(20);
    h.app.open("/?page=0").await.unwrap();
    h.app.open("/?page=abc").await.unwrap();

    let calls = h.api.calls();
    assert_eq!(calls[1], "get_posts 1 20");
    assert_eq!(calls[3], "get_posts 1 20");
}

#[tokio::test]
async fn test_post_detail_view() {
    let mut h = harness(20);
    let out = h.app.open("/post/42").await.unwrap();

    assert!(out.starts_with("期末复习\n"), "{}", out);
    assert!(out.contains("匿名 · 2024-01-01 10:00:00 · 40 浏览 · 3 赞"), "{}", out);
    assert!(out.contains("标签: 学习"), "{}", out);
    assert!(out.contains("回复 (2)"), "{}", out);
    assert!(out.contains("  #7 路人 · 1小时前\n    同求"), "{}", out);
    assert!(out.contains("  #8 小红 · 2分钟前 · 回复 #7\n    +1"), "{}", out);
    assert_eq!(h.api.calls(), vec!["get_post 42", "get_post_replies 42 1 20"]);
    assert_eq!(*h.titles.titles.lock().unwrap(), vec!["Treehole - 帖子详情".to_string()]);
}

#[tokio::test]
async fn test_search_view_lists_tags() {
    let mut h = harness(20);
    let out = h.app.open("/search").await.unwrap();

    assert!(out.contains("标签: 学习 · 校园"), "{}", out);
    assert_eq!(h.api.calls(), vec!["get_tags"]);
}

#[tokio::test]
async fn test_search_results_keyword() {
    let mut h = harness(20);
    let out = h.app.open("/search-results?q=%E8%80%83%E8%AF%95").await.unwrap();

    assert!(out.contains("搜索: 考试"), "{}", out);
    assert!(out.contains("匿名 · 周一 09:30"), "{}", out);
    assert_eq!(h.api.calls(), vec!["search_posts 考试 1 20"]);
}

#[tokio::test]
async fn test_search_results_by_tag() {
    let mut h = harness(20);
    let out = h.app.open("/search-results?tag=校园&page=3").await.unwrap();

    assert!(out.contains("标签: 校园"), "{}", out);
    assert!(out.contains("匿名 · 刚刚"), "{}", out);
    assert_eq!(h.api.calls(), vec!["get_posts_by_tag 校园 3 20"]);
}

#[tokio::test]
async fn test_search_results_advanced() {
    let mut h = harness(20);
    let out = h.app.open("/search-results?author=alice&tag=校园").await.unwrap();

    assert!(out.contains("高级搜索: author=alice"), "{}", out);
    assert!(out.contains("暂无帖子"), "{}", out);
    assert_eq!(
        h.api.calls(),
        vec![r#"advanced_search author=Some("alice") tag=Some("校园") page=Some(1) limit=Some(20)"#]
    );
}

#[tokio::test]
async fn test_search_results_without_query_fails() {
    let mut h = harness(20);
    let err = h.app.open("/search-results").await.unwrap_err();

    assert!(err.to_string().contains("Missing search query"), "{}", err);
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_location_fails_without_title_change() {
    let mut h = harness(20);
    assert!(h.app.open("/settings").await.is_err());
    assert!(h.titles.titles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_post_and_reply() {
    let h = harness(20);
    let post = CreatePost {
        title: "新帖".to_string(),
        content: "内容".to_string(),
        username: "小明".to_string(),
    };
    assert_eq!(h.app.create_post(&post).await.unwrap(), "✅ Post created: /post/100");

    let reply = CreateReply {
        content: "+1".to_string(),
        username: "小红".to_string(),
        parent_id: 7,
    };
    assert_eq!(
        h.app.create_reply("42", &reply).await.unwrap(),
        "✅ Reply created: /post/42 #9"
    );
    assert_eq!(h.api.calls(), vec!["create_post 新帖", "create_reply 42 7"]);
}

#[tokio::test]
async fn test_sync_status() {
    let h = harness(20);
    let out = h.app.sync_status().await.unwrap();

    assert!(out.contains("同步状态: error · 30分钟前"), "{}", out);
    assert!(out.contains("最后同步: 2024-01-01 11:30:00"), "{}", out);
    assert!(out.contains("帖子 10 · 回复 30"), "{}", out);
    assert!(out.contains("错误: timeout"), "{}", out);
}

#[test]
fn test_describe_routes() {
    let h = harness(20);
    let routes = h.app.describe_routes();

    assert_eq!(routes.lines().count(), 4);
    assert!(routes.contains("/post/:id"));
    assert!(routes.contains("Treehole - 搜索结果"));
}
