//! Icon drag session and drag operations

use super::cell::{cell_to_pixel, pixel_to_cell, CellPos};
use super::controller::DesktopGridController;
use super::place::nearest_free_cell;
use crate::math::{Rect, Vec2};
use std::collections::{HashMap, HashSet};

/// Ephemeral drag state, alive between drag start and drag end
#[derive(Clone, Debug)]
pub struct DragSession {
    /// The icon the pointer grabbed
    pub(crate) primary: String,
    /// The primary icon's settled cell when the drag began
    pub(crate) origin_cell: CellPos,
    /// Pointer offset into the primary icon's rendered rect
    pub(crate) offset: Vec2,
    /// Live pixel position of every dragged icon
    pub(crate) positions: HashMap<String, Vec2>,
}

impl DesktopGridController {
    /// Begin dragging an icon.
    ///
    /// Grabbing an unselected icon collapses the selection to just that
    /// icon; grabbing a selected one drags the whole selection. The offset
    /// is taken against the icon's rendered rect so it does not jump under
    /// the pointer. No-op on unknown ids.
    pub fn start_icon_drag(&mut self, id: &str, pointer: Vec2, icon_rect: Rect) {
        let Some(origin_cell) = self.icon(id).map(|icon| icon.cell) else {
            return;
        };

        if !self.selected.contains(id) {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }

        let mut positions = HashMap::with_capacity(self.selected.len());
        for sel in &self.selected {
            if let Some(icon) = self.icons.iter().find(|icon| &icon.id == sel) {
                positions.insert(sel.clone(), cell_to_pixel(icon.cell));
            }
        }

        self.drag = Some(DragSession {
            primary: id.to_string(),
            origin_cell,
            offset: pointer - icon_rect.position(),
            positions,
        });
    }

    /// Track the pointer during a drag. The primary icon follows the
    /// pointer minus the grab offset; every other dragged icon moves
    /// rigidly by the same delta. No-op without an active drag.
    pub fn update_icon_drag(&mut self, pointer: Vec2) {
        let Some(drag) = &self.drag else {
            return;
        };

        let primary_anchor = cell_to_pixel(drag.origin_cell);
        let delta = (pointer - drag.offset) - primary_anchor;

        let mut positions = HashMap::with_capacity(drag.positions.len());
        for id in drag.positions.keys() {
            if let Some(icon) = self.icons.iter().find(|icon| &icon.id == id) {
                positions.insert(id.clone(), cell_to_pixel(icon.cell) + delta);
            }
        }

        if let Some(drag) = &mut self.drag {
            drag.positions = positions;
        }
    }

    /// Drop the dragged icons onto the grid.
    ///
    /// The primary icon's pixel position rounds to its target cell; the
    /// resulting cell delta applies to every dragged icon, clamped into
    /// bounds. Targets occupied by icons outside the dragged set resolve
    /// through the spiral free-cell search, processed in ascending id order
    /// so simultaneous collisions settle the same way every run. No-op
    /// without an active drag.
    pub fn end_icon_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(primary_pos) = drag.positions.get(&drag.primary).copied() else {
            return;
        };

        let bounds = self.bounds();
        let target = pixel_to_cell(primary_pos);
        let delta_col = target.col - drag.origin_cell.col;
        let delta_row = target.row - drag.origin_cell.row;

        let dragged: HashSet<String> = drag.positions.keys().cloned().collect();
        let mut ids: Vec<String> = drag.positions.keys().cloned().collect();
        ids.sort();

        for id in ids {
            let Some(cell) = self.icon(&id).map(|icon| icon.cell) else {
                continue;
            };
            let wanted = bounds.clamp(cell.offset(delta_col, delta_row));
            let settled = nearest_free_cell(&self.icons, wanted, &dragged, bounds);
            if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
                icon.cell = settled;
            }
        }
    }

    /// Whether a drag session is live
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The icon id a live drag was grabbed by
    pub fn dragging_icon(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.primary.as_str())
    }

    /// Whether a live drag is tracking this icon's position
    pub fn is_drag_tracking(&self, id: &str) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|drag| drag.positions.contains_key(id))
    }
}
