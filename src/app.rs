//! Application wiring: router, API, formatter, and views.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::{CreatePost, CreateReply, TreeholeApi};
use crate::config::Config;
use crate::constants::{ERROR_POST_CREATE_FAILED, ERROR_REPLY_CREATE_FAILED, SUCCESS_POST_CREATED, SUCCESS_REPLY_CREATED};
use crate::router::{title_hook, Router, TitleSink};
use crate::utils::datetime::DateFormatter;
use crate::views::{self, ViewContext};

/// The Treehole client.
pub struct App {
    router: Router,
    api: Arc<dyn TreeholeApi>,
    formatter: DateFormatter,
    page_size: u32,
}

impl App {
    /// Build the client with the default route table and install the title hook.
    pub fn new(config: &Config, api: Arc<dyn TreeholeApi>, formatter: DateFormatter, titles: Arc<dyn TitleSink>) -> Self {
        let mut router = Router::default();
        router.before_each(title_hook(titles, config.display.default_title.clone()));

        Self {
            router,
            api,
            formatter,
            page_size: config.api.page_size,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigate to a location and render its view.
    pub async fn open(&mut self, location: &str) -> Result<String> {
        let route = self.router.navigate(location)?;
        let ctx = ViewContext {
            api: self.api.as_ref(),
            formatter: &self.formatter,
            page_size: self.page_size,
        };
        views::render(&route, &ctx).await
    }

    /// Publish a post; returns a confirmation line.
    pub async fn create_post(&self, post: &CreatePost) -> Result<String> {
        let created = self.api.create_post(post).await.context(ERROR_POST_CREATE_FAILED)?;
        log::info!("Created post {}", created.id);
        Ok(format!("{}: /post/{}", SUCCESS_POST_CREATED, created.id))
    }

    /// Reply to a post; returns a confirmation line.
    pub async fn create_reply(&self, post_id: &str, reply: &CreateReply) -> Result<String> {
        let created = self
            .api
            .create_reply(post_id, reply)
            .await
            .context(ERROR_REPLY_CREATE_FAILED)?;
        log::info!("Created reply {} on post {}", created.id, post_id);
        Ok(format!("{}: /post/{} #{}", SUCCESS_REPLY_CREATED, post_id, created.id))
    }

    /// Describe the backend's last synchronization.
    pub async fn sync_status(&self) -> Result<String> {
        let status = self
            .api
            .get_sync_status()
            .await
            .context("Failed to fetch sync status")?;

        let mut out = String::new();
        writeln!(
            out,
            "同步状态: {} · {}",
            status.status,
            self.formatter.format_relative_time(&status.last_sync_time)
        )?;
        writeln!(
            out,
            "最后同步: {}",
            self.formatter.format_full_date_time(&status.last_sync_time)
        )?;
        writeln!(out, "帖子 {} · 回复 {}", status.total_posts, status.total_replies)?;
        if let Some(error) = status.error_message.as_deref().filter(|e| !e.is_empty()) {
            writeln!(out, "错误: {}", error)?;
        }
        Ok(out)
    }

    /// The route table, one route per line.
    pub fn describe_routes(&self) -> String {
        self.router
            .routes()
            .iter()
            .map(|route| format!("{:<16} {:<14} {}", route.path, route.name, route.meta.title.unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
