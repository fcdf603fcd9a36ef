//! Desktop icon record

use super::cell::CellPos;
use crate::glyph::GlyphId;
use serde::{Deserialize, Serialize};

/// One desktop icon pinned to a grid cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridIcon {
    /// Stable identifier, unique among desktop icons
    pub id: String,
    /// Label rendered under the glyph
    pub label: String,
    /// Opaque visual reference (display only)
    pub glyph: GlyphId,
    /// Settled grid cell; never read for rendering during a drag
    pub cell: CellPos,
}

impl GridIcon {
    /// Create an icon at a grid cell
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        glyph: GlyphId,
        cell: CellPos,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            glyph,
            cell,
        }
    }
}
