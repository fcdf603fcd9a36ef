//! Window lifecycle manager

use super::window::Window;
use crate::glyph::GlyphId;
use crate::math::{Size, Vec2};

/// Default frame size for new windows
const DEFAULT_SIZE: Size = Size::new(800.0, 500.0);
/// First cascade slot
const CASCADE_BASE: Vec2 = Vec2::new(100.0, 80.0);
/// Offset per already-open window, so stacked windows stay telling apart
const CASCADE_STEP: f32 = 30.0;

/// Owns every open window: geometry, minimize/maximize flags, focus, and
/// z-order assignment.
///
/// Windows keep their opening order in the backing Vec (that order is the
/// taskbar order). Stacking order comes from `z_index`, fed by a counter
/// this instance owns: strictly increasing, never reused, so the highest
/// value is always the most recently opened or focused window. Operations
/// on unknown ids are silent no-ops.
pub struct WindowManager {
    windows: Vec<Window>,
    focused: Option<String>,
    next_z: u64,
}

impl WindowManager {
    /// Create an empty manager with a fresh z counter
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_z: 0,
        }
    }

    fn bump_z(&mut self) -> u64 {
        self.next_z += 1;
        self.next_z
    }

    /// Open a window, or re-surface it if `id` is already open.
    ///
    /// A new window lands at the next cascade slot with the default size.
    /// An existing one is unminimized if needed and restacked on top;
    /// its title, glyph, and content key are left as they were. Either
    /// way the window ends up focused.
    pub fn open(&mut self, id: &str, title: &str, glyph: GlyphId, content_key: &str) {
        let z = self.bump_z();
        if let Some(idx) = self.windows.iter().position(|w| w.id == id) {
            let win = &mut self.windows[idx];
            win.minimized = false;
            win.z_index = z;
        } else {
            let step = self.windows.len() as f32 * CASCADE_STEP;
            self.windows.push(Window {
                id: id.to_string(),
                title: title.to_string(),
                glyph,
                minimized: false,
                maximized: false,
                position: Vec2::new(CASCADE_BASE.x + step, CASCADE_BASE.y + step),
                size: DEFAULT_SIZE,
                z_index: z,
                content_key: content_key.to_string(),
            });
        }
        self.focused = Some(id.to_string());
    }

    /// Close a window. Closing the focused window leaves nothing focused;
    /// no other window is promoted.
    pub fn close(&mut self, id: &str) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return;
        }
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
    }

    /// Hide a window from the render list. Focus and z-order are untouched.
    pub fn minimize(&mut self, id: &str) {
        if let Some(win) = self.windows.iter_mut().find(|w| w.id == id) {
            win.minimized = true;
        }
    }

    /// Toggle the maximized flag. Stored geometry is untouched, so
    /// un-maximizing restores the exact prior frame.
    pub fn maximize(&mut self, id: &str) {
        if let Some(win) = self.windows.iter_mut().find(|w| w.id == id) {
            win.maximized = !win.maximized;
        }
    }

    /// Bring a window to the top of the stack and focus it. Minimized and
    /// maximized flags are untouched.
    pub fn focus(&mut self, id: &str) {
        let Some(idx) = self.windows.iter().position(|w| w.id == id) else {
            return;
        };
        let z = self.bump_z();
        self.windows[idx].z_index = z;
        self.focused = Some(id.to_string());
    }

    /// Move a window. Callers only do this while it is not maximized.
    pub fn set_position(&mut self, id: &str, position: Vec2) {
        if let Some(win) = self.windows.iter_mut().find(|w| w.id == id) {
            win.position = position;
        }
    }

    /// Resize a window. Callers only do this while it is not maximized.
    pub fn set_size(&mut self, id: &str, size: Size) {
        if let Some(win) = self.windows.iter_mut().find(|w| w.id == id) {
            win.size = size;
        }
    }

    // ===== Queries =====

    /// Look up a window by id
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// All windows in opening order (the taskbar order)
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Renderable windows sorted by ascending z (topmost last),
    /// minimized ones excluded
    pub fn by_z_order(&self) -> Vec<&Window> {
        let mut wins: Vec<&Window> = self.windows.iter().filter(|w| !w.minimized).collect();
        wins.sort_by_key(|w| w.z_index);
        wins
    }

    /// The topmost renderable window whose frame contains `p`
    pub fn top_window_at(&self, p: Vec2, container: Size) -> Option<&Window> {
        self.by_z_order()
            .into_iter()
            .rev()
            .find(|w| w.frame_rect(container).contains(p))
    }

    /// The focused window's id, if any
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Whether a window with this id is open
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Number of open windows (minimized included)
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
