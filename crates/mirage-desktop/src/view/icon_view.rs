//! Interactive surface for one desktop icon

use super::pointer::{DOUBLE_PRESS_MS, DRAG_THRESHOLD};
use crate::grid::DesktopGridController;
use crate::math::{Rect, Vec2};

/// A press that has not yet resolved into a click or a drag
#[derive(Clone, Copy, Debug)]
struct IconPress {
    at: Vec2,
    /// The icon's rendered rect when the press landed
    rect: Rect,
    additive: bool,
    dragging: bool,
}

/// Binds one icon id to pointer input.
///
/// A press resolves three ways: a second press within 400 ms activates the
/// icon (the shell launches its app), movement past 4 px promotes it to a
/// grid drag, and release before either resolves as a selection click.
pub struct DesktopIconView {
    id: String,
    press: Option<IconPress>,
    last_press_ms: Option<f64>,
}

impl DesktopIconView {
    /// Bind a view to an icon id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            press: None,
            last_press_ms: None,
        }
    }

    /// The bound icon id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether a press has been promoted to a drag
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Handle pointer-down on the icon. Returns `true` when this press is
    /// the second of a double press and the icon should activate.
    pub fn pointer_down(
        &mut self,
        grid: &DesktopGridController,
        p: Vec2,
        additive: bool,
        now_ms: f64,
    ) -> bool {
        let double = self
            .last_press_ms
            .is_some_and(|last| now_ms - last < DOUBLE_PRESS_MS);
        if double {
            self.last_press_ms = None;
            self.press = None;
            return true;
        }
        self.last_press_ms = Some(now_ms);

        let Some(rect) = grid.icon_rect(&self.id) else {
            return false;
        };
        self.press = Some(IconPress {
            at: p,
            rect,
            additive,
            dragging: false,
        });
        false
    }

    /// Track the pointer after a press. Crossing the movement threshold
    /// starts the grid drag from the original press point; after that
    /// every move feeds the drag session.
    pub fn pointer_move(&mut self, grid: &mut DesktopGridController, p: Vec2) {
        let Some(press) = &mut self.press else {
            return;
        };

        if !press.dragging {
            if press.at.distance(p) <= DRAG_THRESHOLD {
                return;
            }
            press.dragging = true;
            grid.start_icon_drag(&self.id, press.at, press.rect);
        }
        grid.update_icon_drag(p);
    }

    /// Resolve the press: a drag drops onto the grid, an unmoved press
    /// becomes a selection click.
    pub fn pointer_up(&mut self, grid: &mut DesktopGridController) {
        let Some(press) = self.press.take() else {
            return;
        };
        if press.dragging {
            grid.end_icon_drag();
        } else {
            grid.select_icon(&self.id, press.additive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphId;
    use crate::grid::{CellPos, GridIcon, CELL_WIDTH};

    fn setup() -> (DesktopGridController, DesktopIconView) {
        let mut grid = DesktopGridController::with_icons(vec![
            GridIcon::new("docs", "Documents", GlyphId::new("folder"), CellPos::new(0, 0)),
            GridIcon::new("term", "Terminal", GlyphId::new("shell"), CellPos::new(3, 0)),
        ]);
        grid.set_container_size(1920.0, 1080.0);
        (grid, DesktopIconView::new("docs"))
    }

    #[test]
    fn test_unmoved_press_selects_on_release() {
        let (mut grid, mut view) = setup();
        let p = Vec2::new(20.0, 20.0);

        assert!(!view.pointer_down(&grid, p, false, 0.0));
        // Wiggle inside the threshold
        view.pointer_move(&mut grid, Vec2::new(p.x + 2.0, p.y + 2.0));
        assert!(!grid.is_dragging());
        view.pointer_up(&mut grid);

        assert!(grid.is_selected("docs"));
        assert_eq!(grid.selected().len(), 1);
    }

    #[test]
    fn test_additive_press_toggles_on_release() {
        let (mut grid, mut view) = setup();
        grid.select_icon("term", false);

        view.pointer_down(&grid, Vec2::new(20.0, 20.0), true, 0.0);
        view.pointer_up(&mut grid);

        assert!(grid.is_selected("docs"));
        assert!(grid.is_selected("term"));
    }

    #[test]
    fn test_movement_past_threshold_promotes_to_drag() {
        let (mut grid, mut view) = setup();
        let p = Vec2::new(20.0, 20.0);

        view.pointer_down(&grid, p, false, 0.0);
        view.pointer_move(&mut grid, Vec2::new(p.x + 10.0, p.y));

        assert!(view.is_dragging());
        assert!(grid.is_dragging());
        assert_eq!(grid.dragging_icon(), Some("docs"));
    }

    #[test]
    fn test_drag_release_settles_without_selecting() {
        let (mut grid, mut view) = setup();
        let p = Vec2::new(20.0, 20.0);

        view.pointer_down(&grid, p, false, 0.0);
        view.pointer_move(&mut grid, Vec2::new(p.x + CELL_WIDTH, p.y));
        view.pointer_up(&mut grid);

        assert!(!grid.is_dragging());
        assert_eq!(grid.icon("docs").unwrap().cell, CellPos::new(1, 0));
        // A drag grabbed an unselected icon: it stays the sole selection
        assert!(grid.is_selected("docs"));
        assert_eq!(grid.selected().len(), 1);
    }

    #[test]
    fn test_double_press_activates() {
        let (grid, mut view) = setup();
        let p = Vec2::new(20.0, 20.0);

        assert!(!view.pointer_down(&grid, p, false, 1000.0));
        assert!(view.pointer_down(&grid, p, false, 1250.0));
    }

    #[test]
    fn test_slow_presses_do_not_activate() {
        let (grid, mut view) = setup();
        let p = Vec2::new(20.0, 20.0);

        assert!(!view.pointer_down(&grid, p, false, 1000.0));
        assert!(!view.pointer_down(&grid, p, false, 1700.0));
    }

    #[test]
    fn test_unknown_icon_ignores_input() {
        let (mut grid, mut view) = setup();
        let mut ghost = DesktopIconView::new("ghost");

        assert!(!ghost.pointer_down(&grid, Vec2::ZERO, false, 0.0));
        ghost.pointer_move(&mut grid, Vec2::new(50.0, 50.0));
        ghost.pointer_up(&mut grid);
        assert!(!grid.is_dragging());
        assert!(grid.selected().is_empty());

        // Release without a press is a no-op too
        view.pointer_up(&mut grid);
        assert!(grid.selected().is_empty());
    }
}
