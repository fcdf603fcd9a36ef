//! Icon grid controller
//!
//! Owns icon placement, the selection set, the live drag session, and the
//! marquee rectangle. Drag operations live in `drag.rs`, drop placement in
//! `place.rs`. Every mutation silently ignores unknown icon ids.

use super::cell::{cell_to_pixel, CellPos, GridBounds, ICON_HEIGHT, ICON_WIDTH};
use super::drag::DragSession;
use super::icon::GridIcon;
use super::selection::SelectionRect;
use crate::math::{Rect, Size, Vec2};
use std::collections::HashSet;

/// Desktop icon grid state machine
pub struct DesktopGridController {
    /// Icons in registration order
    pub(crate) icons: Vec<GridIcon>,
    /// Currently selected icon ids
    pub(crate) selected: HashSet<String>,
    /// Live drag session, if any
    pub(crate) drag: Option<DragSession>,
    /// Live marquee, if any
    pub(crate) marquee: Option<SelectionRect>,
    /// Last reported host viewport size
    pub(crate) container: Size,
}

impl DesktopGridController {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::with_icons(Vec::new())
    }

    /// Create a grid seeded with icons
    pub fn with_icons(icons: Vec<GridIcon>) -> Self {
        Self {
            icons,
            selected: HashSet::new(),
            drag: None,
            marquee: None,
            container: Size::ZERO,
        }
    }

    /// Record the host viewport size; grid bounds derive from it
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.container = Size::new(width, height);
    }

    /// Register an icon. The caller picks the cell; nothing relocates
    /// until the next drop resolves collisions.
    pub fn add_icon(&mut self, icon: GridIcon) {
        self.icons.push(icon);
    }

    /// Usable grid dimensions under the current container
    pub fn bounds(&self) -> GridBounds {
        GridBounds::from_container(self.container)
    }

    // ===== Icon queries =====

    /// Look up an icon by id
    pub fn icon(&self, id: &str) -> Option<&GridIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// All icons in registration order
    pub fn icons(&self) -> &[GridIcon] {
        &self.icons
    }

    /// The rendered tile rect for an icon, at its display position
    pub fn icon_rect(&self, id: &str) -> Option<Rect> {
        self.display_position(id)
            .map(|pos| Rect::from_pos_size(pos, Size::new(ICON_WIDTH, ICON_HEIGHT)))
    }

    // ===== Selection =====

    /// Currently selected icon ids
    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Whether an icon is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Click selection. Non-additive replaces the selection with exactly
    /// `{id}`; additive toggles the id's membership.
    pub fn select_icon(&mut self, id: &str, additive: bool) {
        if additive {
            if !self.selected.remove(id) {
                self.selected.insert(id.to_string());
            }
        } else {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }
    }

    /// Empty the selection set
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ===== Marquee =====

    /// Begin a marquee at the pointer-down point, dropping any prior
    /// selection
    pub fn start_selection(&mut self, p: Vec2) {
        self.marquee = Some(SelectionRect::anchored_at(p));
        self.selected.clear();
    }

    /// Track the pointer while the marquee is live
    pub fn update_selection(&mut self, p: Vec2) {
        if let Some(marquee) = &mut self.marquee {
            marquee.end = p;
        }
    }

    /// Finish the marquee: the selection becomes exactly the icons whose
    /// supplied screen rects overlap it. No-op if no marquee is live.
    pub fn end_selection(&mut self, icon_rects: &[(String, Rect)]) {
        let Some(marquee) = self.marquee.take() else {
            return;
        };
        let rect = marquee.normalized();

        let mut selected = HashSet::new();
        for (id, icon_rect) in icon_rects {
            if icon_rect.intersects(&rect) {
                selected.insert(id.clone());
            }
        }
        self.selected = selected;
    }

    /// The normalized marquee rect for overlay rendering, if one is live
    pub fn selection_rect(&self) -> Option<Rect> {
        self.marquee.as_ref().map(SelectionRect::normalized)
    }

    /// The pixel position views must render an icon at: the live dragged
    /// position while a drag tracks it, the grid-derived position otherwise
    pub fn display_position(&self, id: &str) -> Option<Vec2> {
        if let Some(drag) = &self.drag {
            if let Some(pos) = drag.positions.get(id) {
                return Some(*pos);
            }
        }
        self.icon(id).map(|icon| cell_to_pixel(icon.cell))
    }
}

impl Default for DesktopGridController {
    fn default() -> Self {
        Self::new()
    }
}
