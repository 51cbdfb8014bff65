//! Search page and search results.

use std::fmt::Write;

use anyhow::{bail, Context, Result};

use super::{page_of, write_pagination, write_post_list, ViewContext};
use crate::api::AdvancedSearchParams;
use crate::constants::{EMPTY_POSTS, EMPTY_TAGS, ERROR_MISSING_SEARCH_QUERY};
use crate::router::RouteMatch;

/// Search page: the known tags and how to query.
pub(super) async fn render_search(ctx: &ViewContext<'_>) -> Result<String> {
    let tags = ctx.api.get_tags().await.context("Failed to fetch tags")?;

    let mut out = String::new();
    if tags.tags.is_empty() {
        writeln!(out, "{}", EMPTY_TAGS)?;
    } else {
        writeln!(out, "标签: {}", tags.tags.join(" · "))?;
    }
    writeln!(out)?;
    writeln!(out, "关键词搜索:  /search-results?q=关键词")?;
    writeln!(out, "按标签浏览:  /search-results?tag=标签")?;
    writeln!(
        out,
        "高级搜索:    /search-results?title=&content=&author=&comment=&logic=and|or"
    )?;
    Ok(out)
}

/// Search results. `q` runs a keyword search; advanced fields run an advanced
/// search; a lone `tag` lists that tag's posts.
pub(super) async fn render_results(route: &RouteMatch, ctx: &ViewContext<'_>) -> Result<String> {
    let page = page_of(route);
    let mut out = String::new();

    if let Some(query) = route.query("q").map(str::trim).filter(|q| !q.is_empty()) {
        let results = ctx
            .api
            .search_posts(query, page, ctx.page_size)
            .await
            .with_context(|| format!("Search for '{}' failed", query))?;

        writeln!(out, "搜索: {}", results.query)?;
        if !results.keywords.is_empty() {
            writeln!(out, "关键词: {}", results.keywords.join(" "))?;
        }
        writeln!(out)?;
        write_post_list(&mut out, &results.posts, EMPTY_POSTS, ctx.formatter)?;
        writeln!(out)?;
        write_pagination(&mut out, &results.pagination)?;
        return Ok(out);
    }

    let mut params = AdvancedSearchParams::from_query(&route.query);
    if params.has_criteria_besides_tag() {
        params.page = Some(page);
        params.limit = params.limit.or(Some(ctx.page_size));
        let results = ctx
            .api
            .advanced_search(&params)
            .await
            .context("Advanced search failed")?;

        let mut criteria: Vec<String> = results
            .search_params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        criteria.sort();

        writeln!(out, "高级搜索: {}", criteria.join(" "))?;
        writeln!(out)?;
        write_post_list(&mut out, &results.posts, EMPTY_POSTS, ctx.formatter)?;
        writeln!(out)?;
        write_pagination(&mut out, &results.pagination)?;
        return Ok(out);
    }

    if let Some(tag) = params.tag.as_deref() {
        let results = ctx
            .api
            .get_posts_by_tag(tag, page, ctx.page_size)
            .await
            .with_context(|| format!("Failed to fetch posts tagged '{}'", tag))?;

        writeln!(out, "标签: {}", results.tag)?;
        writeln!(out)?;
        write_post_list(&mut out, &results.posts, EMPTY_POSTS, ctx.formatter)?;
        writeln!(out)?;
        write_pagination(&mut out, &results.pagination)?;
        return Ok(out);
    }

    bail!(ERROR_MISSING_SEARCH_QUERY)
}
