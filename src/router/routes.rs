//! Static route table for the client.

use crate::constants::{TITLE_HOME, TITLE_POST_DETAIL, TITLE_SEARCH, TITLE_SEARCH_RESULTS};

/// The views a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Search,
    PostDetail,
    SearchResults,
}

/// Per-route metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Display title; navigation falls back to the default title when absent
    pub title: Option<&'static str>,
}

/// A single entry of the route table.
///
/// `path` segments starting with `:` capture a parameter of that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

/// Client routes, in match order.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        view: View::Home,
        meta: RouteMeta {
            title: Some(TITLE_HOME),
        },
    },
    Route {
        path: "/search",
        name: "Search",
        view: View::Search,
        meta: RouteMeta {
            title: Some(TITLE_SEARCH),
        },
    },
    Route {
        path: "/post/:id",
        name: "PostDetail",
        view: View::PostDetail,
        meta: RouteMeta {
            title: Some(TITLE_POST_DETAIL),
        },
    },
    Route {
        path: "/search-results",
        name: "SearchResults",
        view: View::SearchResults,
        meta: RouteMeta {
            title: Some(TITLE_SEARCH_RESULTS),
        },
    },
];
