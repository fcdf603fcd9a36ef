//! Start menu state

use super::apps::{AppEntry, AppRegistry};
use serde::{Deserialize, Serialize};

/// Start menu open/closed state plus the live search query.
///
/// While the query is empty the menu shows the pinned grid and the
/// recommended list; a non-empty query switches to search results.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StartMenu {
    open: bool,
    query: String,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The live search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flip the menu; opening starts with a fresh query
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.query.clear();
        }
    }

    /// Dismiss the menu
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Update the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Search results for the current query
    pub fn results<'a>(&self, apps: &'a AppRegistry) -> Vec<&'a AppEntry> {
        apps.search(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_resets_query() {
        let mut menu = StartMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.set_query("term");
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        assert_eq!(menu.query(), "");
    }

    #[test]
    fn test_results_follow_query() {
        let apps = AppRegistry::with_default_apps();
        let mut menu = StartMenu::new();
        menu.toggle();
        menu.set_query("brow");

        let hits: Vec<&str> = menu.results(&apps).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(hits, vec!["browser"]);
    }
}
