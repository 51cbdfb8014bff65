//! Home view: site statistics and the latest posts.

use std::fmt::Write;

use anyhow::{Context, Result};

use super::{page_of, write_pagination, write_post_list, ViewContext};
use crate::constants::EMPTY_POSTS;
use crate::router::RouteMatch;

pub(super) async fn render(route: &RouteMatch, ctx: &ViewContext<'_>) -> Result<String> {
    let page = page_of(route);

    let stats = ctx.api.get_stats().await.context("Failed to fetch stats")?;
    let posts = ctx
        .api
        .get_posts(page, ctx.page_size)
        .await
        .with_context(|| format!("Failed to fetch posts (page {})", page))?;

    let mut out = String::new();
    writeln!(
        out,
        "共 {} 条帖子 · {} 条回复 · {} 个标签",
        stats.total_posts, stats.total_replies, stats.total_tags
    )?;
    if let Some(latest) = stats.latest_post.as_ref().filter(|post| post.id != 0) {
        writeln!(out, "最新发布: {}", ctx.formatter.format_relative_time(&latest.created_at))?;
    }
    writeln!(out)?;

    write_post_list(&mut out, &posts.posts, EMPTY_POSTS, ctx.formatter)?;
    writeln!(out)?;
    write_pagination(&mut out, &posts.pagination)?;
    Ok(out)
}
