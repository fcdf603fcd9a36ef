//! Opaque glyph references
//!
//! Windows and icons carry a [`GlyphId`] instead of any renderable value.
//! The host registers what each id looks like (an emoji, a sprite name, an
//! image URL) in a [`GlyphRegistry`]; the core never interprets it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque reference to a host-rendered visual
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphId(String);

impl GlyphId {
    /// Create a glyph reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GlyphId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Host-supplied mapping from glyph ids to renderable visuals
#[derive(Clone, Debug)]
pub struct GlyphRegistry {
    glyphs: HashMap<GlyphId, String>,
    fallback: String,
}

impl GlyphRegistry {
    /// Create an empty registry with a fallback visual for unknown ids
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            glyphs: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Register (or replace) the visual for a glyph id
    pub fn register(&mut self, id: GlyphId, visual: impl Into<String>) {
        self.glyphs.insert(id, visual.into());
    }

    /// Resolve a glyph id to its visual, falling back for unknown ids
    pub fn resolve(&self, id: &GlyphId) -> &str {
        self.glyphs.get(id).map_or(&self.fallback, String::as_str)
    }
}

impl Default for GlyphRegistry {
    fn default() -> Self {
        Self::new("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered_glyph() {
        let mut registry = GlyphRegistry::new("?");
        registry.register(GlyphId::new("user"), "\u{1F464}");

        assert_eq!(registry.resolve(&GlyphId::new("user")), "\u{1F464}");
    }

    #[test]
    fn test_unknown_glyph_falls_back() {
        let registry = GlyphRegistry::new("?");
        assert_eq!(registry.resolve(&GlyphId::new("missing")), "?");
    }

    #[test]
    fn test_glyph_id_serializes_as_plain_string() {
        let id = GlyphId::new("terminal");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"terminal\"");
    }
}
