//! Render snapshots for the host

use super::DesktopShell;
use crate::glyph::GlyphId;
use crate::grid::{ICON_HEIGHT, ICON_WIDTH};
use crate::math::{Rect, Vec2};
use serde::Serialize;

/// Per-window render record. Maximized frames already fill the container
/// above the taskbar; the host draws these back-to-front as listed.
#[derive(Clone, Debug, Serialize)]
pub struct WindowFrame {
    pub id: String,
    pub title: String,
    pub glyph: GlyphId,
    pub content_key: String,
    pub rect: Rect,
    pub focused: bool,
    pub maximized: bool,
    pub z_index: u64,
}

/// Per-icon render record at the icon's display position
#[derive(Clone, Debug, Serialize)]
pub struct IconSprite {
    pub id: String,
    pub label: String,
    pub glyph: GlyphId,
    /// Tile top-left; tracks the live drag while one is in progress
    pub position: Vec2,
    pub selected: bool,
    pub dragging: bool,
}

impl DesktopShell {
    /// Renderable windows in ascending z order (topmost last);
    /// minimized windows are excluded
    pub fn window_frames(&self) -> Vec<WindowFrame> {
        let focused = self.windows.focused();
        self.windows
            .by_z_order()
            .into_iter()
            .map(|win| WindowFrame {
                id: win.id.clone(),
                title: win.title.clone(),
                glyph: win.glyph.clone(),
                content_key: win.content_key.clone(),
                rect: win.frame_rect(self.container),
                focused: focused == Some(win.id.as_str()),
                maximized: win.maximized,
                z_index: win.z_index,
            })
            .collect()
    }

    /// Renderable icons in registration order, read from
    /// [`DesktopGridController::display_position`] so live drags track
    /// the pointer
    pub fn icon_sprites(&self) -> Vec<IconSprite> {
        self.grid
            .icons()
            .iter()
            .filter_map(|icon| {
                self.grid.display_position(&icon.id).map(|position| IconSprite {
                    id: icon.id.clone(),
                    label: icon.label.clone(),
                    glyph: icon.glyph.clone(),
                    position,
                    selected: self.grid.is_selected(&icon.id),
                    dragging: self.grid.is_drag_tracking(&icon.id),
                })
            })
            .collect()
    }

    /// Rendered tile size for icon sprites
    pub fn icon_tile() -> (f32, f32) {
        (ICON_WIDTH, ICON_HEIGHT)
    }

    /// The live marquee rect for overlay rendering, if any
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.grid.selection_rect()
    }
}
