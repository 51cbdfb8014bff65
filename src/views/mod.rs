//! Text views for each client route.
//!
//! A view turns a [`RouteMatch`] into the text the terminal shows, fetching
//! what it needs through [`TreeholeApi`]. Every timestamp goes through the
//! shared [`DateFormatter`]: list rows use the bucketed form, detail headers
//! the full date and time, replies the relative form.

use std::fmt::Write;

use anyhow::Result;

use crate::api::{Pagination, Post, TreeholeApi};
use crate::constants::DEFAULT_PAGE;
use crate::router::{RouteMatch, View};
use crate::utils::datetime::DateFormatter;

mod home;
mod post_detail;
mod search;

/// Everything a view needs to render.
pub struct ViewContext<'a> {
    pub api: &'a dyn TreeholeApi,
    pub formatter: &'a DateFormatter,
    pub page_size: u32,
}

/// Render the view a route points at.
pub async fn render(route: &RouteMatch, ctx: &ViewContext<'_>) -> Result<String> {
    log::info!("Rendering {:?} for {}", route.route.view, route.location);

    match route.route.view {
        View::Home => home::render(route, ctx).await,
        View::Search => search::render_search(ctx).await,
        View::PostDetail => post_detail::render(route, ctx).await,
        View::SearchResults => search::render_results(route, ctx).await,
    }
}

/// `page` query parameter, defaulting to the first page.
fn page_of(route: &RouteMatch) -> u32 {
    route
        .query("page")
        .and_then(|page| page.parse().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// One post as a list row.
fn write_post_row(out: &mut String, post: &Post, formatter: &DateFormatter) -> Result<()> {
    let title = if post.title.is_empty() { "(无标题)" } else { post.title.as_str() };
    write!(out, "[#{}] {}", post.id, title)?;
    if !post.tag.is_empty() {
        write!(out, "  #{}", post.tag)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "    {} · {} · {} 回复 · {} 浏览 · {} 赞",
        post.author,
        formatter.format_date(&post.created_at),
        post.reply_count,
        post.view_count,
        post.like_num
    )?;
    writeln!(out, "    → /post/{}", post.id)?;
    Ok(())
}

fn write_post_list(out: &mut String, posts: &[Post], empty: &str, formatter: &DateFormatter) -> Result<()> {
    if posts.is_empty() {
        writeln!(out, "{}", empty)?;
        return Ok(());
    }
    for post in posts {
        write_post_row(out, post, formatter)?;
    }
    Ok(())
}

fn write_pagination(out: &mut String, pagination: &Pagination) -> Result<()> {
    writeln!(
        out,
        "第 {}/{} 页 · 共 {} 条",
        pagination.page,
        pagination.pages.max(1),
        pagination.total
    )?;
    Ok(())
}
