//! Post detail view: the post itself followed by a page of replies.

use std::fmt::Write;

use anyhow::{Context, Result};

use super::{page_of, write_pagination, ViewContext};
use crate::constants::{EMPTY_REPLIES, ERROR_MISSING_POST_ID};
use crate::router::RouteMatch;

pub(super) async fn render(route: &RouteMatch, ctx: &ViewContext<'_>) -> Result<String> {
    let id = route.param("id").context(ERROR_MISSING_POST_ID)?;
    let page = page_of(route);

    let post = ctx
        .api
        .get_post(id)
        .await
        .with_context(|| format!("Failed to fetch post {}", id))?;
    let replies = ctx
        .api
        .get_post_replies(id, page, ctx.page_size)
        .await
        .with_context(|| format!("Failed to fetch replies of post {}", id))?;

    let mut out = String::new();
    writeln!(out, "{}", post.title)?;
    writeln!(
        out,
        "{} · {} · {} 浏览 · {} 赞",
        post.author,
        ctx.formatter.format_full_date_time(&post.created_at),
        post.view_count,
        post.like_num
    )?;
    if !post.tag.is_empty() {
        writeln!(out, "标签: {}", post.tag)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", post.content)?;
    writeln!(out)?;
    writeln!(out, "回复 ({})", replies.pagination.total)?;

    if replies.replies.is_empty() {
        writeln!(out, "{}", EMPTY_REPLIES)?;
        return Ok(out);
    }

    for reply in &replies.replies {
        write!(
            out,
            "  #{} {} · {}",
            reply.id,
            reply.author,
            ctx.formatter.format_relative_time(&reply.created_at)
        )?;
        if reply.parent_id != 0 {
            write!(out, " · 回复 #{}", reply.parent_id)?;
        }
        writeln!(out)?;
        writeln!(out, "    {}", reply.content)?;
    }
    writeln!(out)?;
    write_pagination(&mut out, &replies.pagination)?;
    Ok(out)
}
