//! Window record and frame geometry

use super::region::WindowRegion;
use crate::glyph::GlyphId;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE, TASKBAR_HEIGHT};
use serde::{Deserialize, Serialize};

/// One open window
///
/// Geometry fields stay meaningful while the window is maximized or
/// minimized; they are simply not rendered from, so leaving either state
/// restores the exact prior frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Stable identifier, unique among open windows; doubles as the
    /// content-renderer key on the host side
    pub id: String,
    /// Title bar and taskbar text
    pub title: String,
    /// Opaque visual reference (display only)
    pub glyph: GlyphId,
    /// Hidden from the render list; geometry preserved
    pub minimized: bool,
    /// Fills the container above the taskbar; geometry preserved
    pub maximized: bool,
    /// Top-left corner in screen pixels
    pub position: Vec2,
    /// Frame size in screen pixels
    pub size: Size,
    /// Stacking order; higher renders on top
    pub z_index: u64,
    /// Key the host resolves to the hosted content (opaque)
    pub content_key: String,
}

impl Window {
    /// The on-screen frame: the stored geometry, or the container minus
    /// the taskbar strip while maximized
    pub fn frame_rect(&self, container: Size) -> Rect {
        if self.maximized {
            Rect::new(0.0, 0.0, container.width, container.height - TASKBAR_HEIGHT)
        } else {
            Rect::from_pos_size(self.position, self.size)
        }
    }

    /// The draggable strip along the top of the frame
    pub fn title_bar_rect(&self, container: Size) -> Rect {
        let frame = self.frame_rect(container);
        Rect::new(frame.x, frame.y, frame.width, FRAME_STYLE.title_bar_height)
    }

    /// The hosted content area below the title bar
    pub fn content_rect(&self, container: Size) -> Rect {
        let frame = self.frame_rect(container);
        Rect::new(
            frame.x,
            frame.y + FRAME_STYLE.title_bar_height,
            frame.width,
            frame.height - FRAME_STYLE.title_bar_height,
        )
    }

    /// Control buttons sit right-aligned in the title bar: minimize,
    /// maximize, close. Slot 0 is the rightmost.
    fn button_rect(&self, container: Size, slot: u32) -> Rect {
        let frame = self.frame_rect(container);
        let offset = FRAME_STYLE.button_margin
            + FRAME_STYLE.button_size * (slot + 1) as f32
            + FRAME_STYLE.button_gap * slot as f32;
        Rect::new(
            frame.right() - offset,
            frame.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0,
            FRAME_STYLE.button_size,
            FRAME_STYLE.button_size,
        )
    }

    pub fn close_button_rect(&self, container: Size) -> Rect {
        self.button_rect(container, 0)
    }

    pub fn maximize_button_rect(&self, container: Size) -> Rect {
        self.button_rect(container, 1)
    }

    pub fn minimize_button_rect(&self, container: Size) -> Rect {
        self.button_rect(container, 2)
    }

    /// The resize grip in the bottom-right corner (hidden while maximized)
    pub fn resize_corner_rect(&self, container: Size) -> Rect {
        let frame = self.frame_rect(container);
        let grip = FRAME_STYLE.resize_handle_size;
        Rect::new(frame.right() - grip, frame.bottom() - grip, grip, grip)
    }

    /// Hit-test a point against the frame. Buttons win over the title bar,
    /// the resize grip over the content. Minimized windows hit nothing.
    pub fn region_at(&self, p: Vec2, container: Size) -> Option<WindowRegion> {
        if self.minimized {
            return None;
        }
        let frame = self.frame_rect(container);
        if !frame.contains(p) {
            return None;
        }

        if self.close_button_rect(container).contains(p) {
            return Some(WindowRegion::CloseButton);
        }
        if self.maximize_button_rect(container).contains(p) {
            return Some(WindowRegion::MaximizeButton);
        }
        if self.minimize_button_rect(container).contains(p) {
            return Some(WindowRegion::MinimizeButton);
        }
        if !self.maximized && self.resize_corner_rect(container).contains(p) {
            return Some(WindowRegion::ResizeCorner);
        }
        if self.title_bar_rect(container).contains(p) {
            return Some(WindowRegion::TitleBar);
        }
        Some(WindowRegion::Content)
    }
}
