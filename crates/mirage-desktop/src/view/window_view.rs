//! Interactive surface for one window

use super::pointer::{PointerKind, DOUBLE_PRESS_MS};
use crate::math::{Size, Vec2};
use crate::window::{WindowManager, WindowRegion};

/// Live window drag, move or resize
#[derive(Clone, Copy, Debug)]
enum WindowDrag {
    /// Pointer offset into the frame when the title bar was grabbed
    Move { offset: Vec2 },
    /// Resize from the bottom-right grip; minimums depend on the device
    Resize { kind: PointerKind },
}

/// Binds one window id to pointer input.
///
/// Hit-tests the frame on pointer-down, dispatches the control buttons,
/// and runs move/resize drags through [`WindowManager::set_position`] and
/// [`WindowManager::set_size`]. Window geometry never snaps; only the
/// resize minimums are clamped.
pub struct WindowView {
    id: String,
    drag: Option<WindowDrag>,
    /// Timestamp of the last title bar press, for double-press maximize
    last_title_press_ms: Option<f64>,
}

impl WindowView {
    /// Bind a view to a window id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            drag: None,
            last_title_press_ms: None,
        }
    }

    /// The bound window id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether a move or resize drag is live
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle pointer-down inside the bound window's frame.
    ///
    /// Buttons dispatch immediately. The title bar focuses and begins a
    /// move drag while not maximized; a second press within 400 ms toggles
    /// maximize instead. The resize grip begins a size drag without
    /// changing focus. Content clicks only focus. Returns whether the
    /// event hit the frame at all.
    pub fn pointer_down(
        &mut self,
        windows: &mut WindowManager,
        p: Vec2,
        kind: PointerKind,
        container: Size,
        now_ms: f64,
    ) -> bool {
        let Some(win) = windows.get(&self.id) else {
            return false;
        };
        let Some(region) = win.region_at(p, container) else {
            return false;
        };
        let frame = win.frame_rect(container);
        let maximized = win.maximized;

        match region {
            WindowRegion::CloseButton => windows.close(&self.id),
            WindowRegion::MinimizeButton => windows.minimize(&self.id),
            WindowRegion::MaximizeButton => windows.maximize(&self.id),
            WindowRegion::TitleBar => {
                let double = self
                    .last_title_press_ms
                    .is_some_and(|last| now_ms - last < DOUBLE_PRESS_MS);
                self.last_title_press_ms = if double { None } else { Some(now_ms) };

                if double {
                    self.drag = None;
                    windows.maximize(&self.id);
                } else {
                    windows.focus(&self.id);
                    if !maximized {
                        self.drag = Some(WindowDrag::Move {
                            offset: p - frame.position(),
                        });
                    }
                }
            }
            WindowRegion::ResizeCorner => {
                // region_at never reports the grip while maximized
                self.drag = Some(WindowDrag::Resize { kind });
            }
            WindowRegion::Content => windows.focus(&self.id),
        }
        true
    }

    /// Track the pointer during a live drag. Moves clamp y to the top of
    /// the screen; resizes clamp to the device minimums.
    pub fn pointer_move(&mut self, windows: &mut WindowManager, p: Vec2) {
        match self.drag {
            Some(WindowDrag::Move { offset }) => {
                let target = p - offset;
                windows.set_position(&self.id, Vec2::new(target.x, target.y.max(0.0)));
            }
            Some(WindowDrag::Resize { kind }) => {
                let Some(pos) = windows.get(&self.id).map(|w| w.position) else {
                    return;
                };
                let size = Size::new(p.x - pos.x, p.y - pos.y).max(kind.min_window_size());
                windows.set_size(&self.id, size);
            }
            None => {}
        }
    }

    /// End any live drag
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}
