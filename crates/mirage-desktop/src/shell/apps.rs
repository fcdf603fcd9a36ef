//! Application table

use crate::glyph::GlyphId;
use serde::{Deserialize, Serialize};

/// One launchable application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Stable id; doubles as the window id when launched
    pub id: String,
    /// Display name (window title, start menu label)
    pub name: String,
    /// Opaque visual reference
    pub glyph: GlyphId,
    /// Key the host resolves to the window's content renderer
    pub content_key: String,
}

impl AppEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        glyph: GlyphId,
        content_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            glyph,
            content_key: content_key.into(),
        }
    }
}

/// Ordered table of launchable apps.
///
/// Table order is meaningful: the start menu pins the first six entries
/// and recommends the first three, and the desktop seeds icons from the
/// first four.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

/// How many table entries the start menu pins
const PINNED_COUNT: usize = 6;
/// How many table entries the start menu recommends
const RECOMMENDED_COUNT: usize = 3;
/// How many table entries seed desktop icons
pub(crate) const DESKTOP_ICON_COUNT: usize = 4;

impl AppRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock app table
    pub fn with_default_apps() -> Self {
        let mut registry = Self::new();
        for (id, name, glyph) in [
            ("about", "About Me", "user"),
            ("projects", "Projects", "folder-open"),
            ("skills", "Skills", "code"),
            ("contact", "Contact", "user"),
            ("terminal", "Terminal", "terminal"),
            ("browser", "Browser", "globe"),
        ] {
            registry.register(AppEntry::new(id, name, GlyphId::new(glyph), id));
        }
        registry
    }

    /// Append an app to the table
    pub fn register(&mut self, entry: AppEntry) {
        self.entries.push(entry);
    }

    /// Look up an app by id
    pub fn get(&self, id: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All apps in table order
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Case-insensitive name containment search
    pub fn search(&self, query: &str) -> Vec<&AppEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The start menu's pinned grid
    pub fn pinned(&self) -> &[AppEntry] {
        &self.entries[..self.entries.len().min(PINNED_COUNT)]
    }

    /// The start menu's recommended list
    pub fn recommended(&self) -> &[AppEntry] {
        &self.entries[..self.entries.len().min(RECOMMENDED_COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let registry = AppRegistry::with_default_apps();
        let ids: Vec<&str> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["about", "projects", "skills", "contact", "terminal", "browser"]
        );
    }

    #[test]
    fn test_get() {
        let registry = AppRegistry::with_default_apps();
        assert_eq!(registry.get("terminal").unwrap().name, "Terminal");
        assert!(registry.get("ghost").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = AppRegistry::with_default_apps();
        let hits: Vec<&str> = registry.search("PRO").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(hits, vec!["projects"]);
        // Empty query matches everything
        assert_eq!(registry.search("").len(), 6);
        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn test_pinned_and_recommended_slices() {
        let registry = AppRegistry::with_default_apps();
        assert_eq!(registry.pinned().len(), 6);
        assert_eq!(registry.recommended().len(), 3);
        assert_eq!(registry.recommended()[0].id, "about");

        let mut small = AppRegistry::new();
        small.register(AppEntry::new("one", "One", GlyphId::new("1"), "one"));
        assert_eq!(small.pinned().len(), 1);
        assert_eq!(small.recommended().len(), 1);
    }
}
