//! Client-side routing.
//!
//! A static, ordered route table ([`ROUTES`]) and a [`Router`] that resolves
//! locations such as `/post/42?page=2` against it. Before each navigation the
//! router runs its registered hooks with the destination and the previous
//! route; [`title_hook`] is the one the application installs to keep the
//! display title in step with the current view.

use std::collections::HashMap;

use url::form_urlencoded;

pub mod routes;
pub mod title;

pub use routes::{Route, RouteMeta, View, ROUTES};
pub use title::{title_hook, NoTitle, TerminalTitle, TitleSink};

/// Routing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("No route named '{0}'")]
    UnknownRoute(String),

    #[error("Route '{route}' needs parameter '{param}'")]
    MissingParam { route: String, param: String },
}

/// A route resolved against a concrete location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    /// The location as given, query string included
    pub location: String,
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Route title, or `fallback` when the route has none.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.route.meta.title.unwrap_or(fallback)
    }
}

/// Hook run before each navigation with `(to, from)`.
pub type NavigationHook = Box<dyn Fn(&RouteMatch, Option<&RouteMatch>) + Send + Sync>;

/// Resolves locations against a route table and tracks the current route.
pub struct Router {
    routes: Vec<Route>,
    hooks: Vec<NavigationHook>,
    current: Option<RouteMatch>,
}

impl Router {
    pub fn new(routes: &[Route]) -> Self {
        Self {
            routes: routes.to_vec(),
            hooks: Vec::new(),
            current: None,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    /// Register a hook to run before every navigation, in registration order.
    pub fn before_each<F>(&mut self, hook: F)
    where
        F: Fn(&RouteMatch, Option<&RouteMatch>) + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Match a location against the table; the first matching route wins.
    ///
    /// Any `#fragment` is ignored. Path parameters and query values are
    /// percent-decoded.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let without_fragment = location.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        self.routes.iter().find_map(|route| {
            match_path(route.path, path).map(|params| RouteMatch {
                route: *route,
                location: location.to_string(),
                params,
                query: parse_query(query),
            })
        })
    }

    /// Navigate to a location, running the before-each hooks.
    pub fn navigate(&mut self, location: &str) -> Result<RouteMatch, RouterError> {
        let to = self
            .resolve(location)
            .ok_or_else(|| RouterError::NotFound(location.to_string()))?;

        log::debug!("Navigating to {} ({})", to.route.name, location);
        for hook in &self.hooks {
            hook(&to, self.current.as_ref());
        }

        self.current = Some(to.clone());
        Ok(to)
    }

    /// Build the location of a named route, filling in its `:param` segments.
    pub fn location_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;

        let mut location = String::new();
        for segment in segments(route.path) {
            location.push('/');
            match segment.strip_prefix(':') {
                Some(param) => {
                    let (_, value) = params
                        .iter()
                        .find(|(key, _)| *key == param)
                        .ok_or_else(|| RouterError::MissingParam {
                            route: name.to_string(),
                            param: param.to_string(),
                        })?;
                    location.push_str(&urlencoding::encode(value));
                }
                None => location.push_str(segment),
            }
        }

        if location.is_empty() {
            location.push('/');
        }
        Ok(location)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

// Empty segments are dropped, so "/post/1/" and "//post/1" match "/post/:id".
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern: Vec<&str> = segments(pattern).collect();
    let path: Vec<&str> = segments(path).collect();
    if pattern.len() != path.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in pattern.iter().zip(&path) {
        match expected.strip_prefix(':') {
            Some(name) => {
                let value = urlencoding::decode(actual)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| actual.to_string());
                params.insert(name.to_string(), value);
            }
            None if expected == actual => {}
            None => return None,
        }
    }
    Some(params)
}

fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}
