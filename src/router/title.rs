//! Display title handling for navigation.

use std::io;
use std::sync::Arc;

use crossterm::{execute, terminal::SetTitle};

use super::RouteMatch;

/// Destination for the display title.
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// Sets the terminal window title.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&self, title: &str) {
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            log::warn!("Failed to set terminal title: {}", e);
        }
    }
}

/// Discards titles, for non-interactive output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTitle;

impl TitleSink for NoTitle {
    fn set_title(&self, _title: &str) {}
}

/// Before-navigation hook that sets the title of the destination route,
/// falling back to `fallback` when the route has none.
pub fn title_hook(
    sink: Arc<dyn TitleSink>,
    fallback: impl Into<String>,
) -> impl Fn(&RouteMatch, Option<&RouteMatch>) + Send + Sync + 'static {
    let fallback = fallback.into();
    move |to, _from| sink.set_title(to.title_or(&fallback))
}
